//! The six canonical scheduling policies and their comparators.
//!
//! Each comparator imposes a strict weak order on [`QueuedJob`] snapshots,
//! with stable tie-breaking by arrival time baked into the comparator
//! itself — `OrderedQueue` needs no separate stability notion on top.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::job::JobIndex;
use crate::queue::Comparator;

/// The six scheduling schemes the core supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// First-come-first-served. Non-preemptive.
    Fcfs,
    /// Shortest-job-first. Non-preemptive.
    Sjf,
    /// Preemptive shortest-job-first.
    Psjf,
    /// Static priority. Non-preemptive.
    Pri,
    /// Preemptive static priority.
    Ppri,
    /// Round-robin. Quantum length is tracked by the caller.
    Rr,
}

impl Scheme {
    /// Whether this scheme ever preempts a running job for a newly arrived one.
    pub fn is_preemptive(self) -> bool {
        matches!(self, Scheme::Psjf | Scheme::Ppri)
    }

    /// The comparator that orders the ready queue under this scheme.
    pub(crate) fn comparator(self) -> Comparator<QueuedJob> {
        match self {
            Scheme::Fcfs => cmp_fcfs,
            Scheme::Sjf | Scheme::Psjf => cmp_sjf,
            Scheme::Pri => cmp_pri,
            Scheme::Ppri => cmp_ppri,
            Scheme::Rr => cmp_rr,
        }
    }
}

/// A snapshot of a waiting job's sort keys, taken at the moment it is
/// offered to the ready queue. Identity (`PartialEq`) is the wrapped
/// [`JobIndex`] alone — never the snapshotted fields — so
/// `OrderedQueue::remove_identity` keeps its identity-not-value contract.
#[derive(Debug, Clone, Copy)]
pub struct QueuedJob {
    pub index: JobIndex,
    pub arrival_time: u64,
    pub remaining_time: u64,
    pub priority: u64,
}

impl PartialEq for QueuedJob {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for QueuedJob {}

fn cmp_fcfs(a: &QueuedJob, b: &QueuedJob) -> Ordering {
    a.arrival_time.cmp(&b.arrival_time)
}

fn cmp_sjf(a: &QueuedJob, b: &QueuedJob) -> Ordering {
    a.remaining_time
        .cmp(&b.remaining_time)
        .then_with(|| a.arrival_time.cmp(&b.arrival_time))
}

fn cmp_pri(a: &QueuedJob, b: &QueuedJob) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| a.arrival_time.cmp(&b.arrival_time))
}

fn cmp_ppri(a: &QueuedJob, b: &QueuedJob) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| a.remaining_time.cmp(&b.remaining_time))
        .then_with(|| a.arrival_time.cmp(&b.arrival_time))
}

/// Round-robin is FIFO by construction: every pair compares equal, so
/// `OrderedQueue::offer`'s "insert after all <= elements" rule always
/// places the new entry at the tail.
fn cmp_rr(_a: &QueuedJob, _b: &QueuedJob) -> Ordering {
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(index: usize, arrival: u64, remaining: u64, priority: u64) -> QueuedJob {
        QueuedJob { index: JobIndex(index), arrival_time: arrival, remaining_time: remaining, priority }
    }

    #[test]
    fn fcfs_orders_by_arrival_only() {
        let a = job(0, 1, 100, 5);
        let b = job(1, 2, 1, 0);
        assert_eq!(cmp_fcfs(&a, &b), Ordering::Less);
    }

    #[test]
    fn sjf_breaks_ties_by_arrival() {
        let a = job(0, 5, 3, 0);
        let b = job(1, 1, 3, 0);
        assert_eq!(cmp_sjf(&a, &b), Ordering::Greater);
    }

    #[test]
    fn pri_orders_lower_value_first() {
        let a = job(0, 0, 0, 2);
        let b = job(1, 0, 0, 1);
        assert_eq!(cmp_pri(&a, &b), Ordering::Greater);
    }

    #[test]
    fn ppri_falls_back_to_remaining_then_arrival() {
        let a = job(0, 10, 2, 3);
        let b = job(1, 1, 4, 3);
        assert_eq!(cmp_ppri(&a, &b), Ordering::Less);

        let c = job(2, 10, 2, 3);
        let d = job(3, 1, 2, 3);
        assert_eq!(cmp_ppri(&c, &d), Ordering::Greater);
    }

    #[test]
    fn rr_comparator_is_always_equal() {
        let a = job(0, 1, 1, 1);
        let b = job(1, 999, 999, 999);
        assert_eq!(cmp_rr(&a, &b), Ordering::Equal);
        assert_eq!(cmp_rr(&b, &a), Ordering::Equal);
    }

    #[test]
    fn scheme_preemptive_flags() {
        assert!(!Scheme::Fcfs.is_preemptive());
        assert!(!Scheme::Sjf.is_preemptive());
        assert!(Scheme::Psjf.is_preemptive());
        assert!(!Scheme::Pri.is_preemptive());
        assert!(Scheme::Ppri.is_preemptive());
        assert!(!Scheme::Rr.is_preemptive());
    }

    #[test]
    fn scheme_serde_round_trips() {
        for scheme in [
            Scheme::Fcfs,
            Scheme::Sjf,
            Scheme::Psjf,
            Scheme::Pri,
            Scheme::Ppri,
            Scheme::Rr,
        ] {
            let json = serde_json::to_string(&scheme).unwrap();
            let back: Scheme = serde_json::from_str(&json).unwrap();
            assert_eq!(back, scheme);
        }
    }

    #[test]
    fn scheme_serde_uses_snake_case() {
        let json = serde_json::to_string(&Scheme::Psjf).unwrap();
        assert_eq!(json, "\"psjf\"");
    }
}
