//! The `Job` record and its lifecycle timestamps.

/// An opaque handle to a [`Job`] stored in a [`crate::scheduler::Scheduler`]'s
/// job store. Cores and the ready queue hold this instead of the job itself —
/// the Scheduler is the sole owner of every `Job`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobIndex(pub(crate) usize);

/// A single job admitted to the scheduler, with the statistics timestamps
/// needed to compute waiting, turnaround and response time once it finishes.
///
/// Invariants:
/// - `remaining_time` never underflows past zero.
/// - once `finish_time` is `Some`, `remaining_time` is `0`.
/// - `first_dispatch_time <= last_dispatch_time <= finish_time` when all are set.
#[derive(Debug, Clone)]
pub struct Job {
    pub job_id: u64,
    pub arrival_time: u64,
    pub remaining_time: u64,
    pub original_running_time: u64,
    pub priority: u64,
    pub first_dispatch_time: Option<u64>,
    pub last_dispatch_time: Option<u64>,
    pub finish_time: Option<u64>,
}

impl Job {
    pub(crate) fn new(job_id: u64, arrival_time: u64, running_time: u64, priority: u64) -> Self {
        Job {
            job_id,
            arrival_time,
            remaining_time: running_time,
            original_running_time: running_time,
            priority,
            first_dispatch_time: None,
            last_dispatch_time: None,
            finish_time: None,
        }
    }

    pub(crate) fn turnaround_time(&self) -> u64 {
        self.finish_time
            .expect("turnaround_time requires a finished job")
            - self.arrival_time
    }

    pub(crate) fn waiting_time(&self) -> u64 {
        self.turnaround_time() - self.original_running_time
    }

    pub(crate) fn response_time(&self) -> u64 {
        self.first_dispatch_time
            .expect("response_time requires a dispatched job")
            - self.arrival_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_job_starts_with_remaining_equal_to_running_time() {
        let j = Job::new(1, 10, 5, 0);
        assert_eq!(j.remaining_time, 5);
        assert_eq!(j.original_running_time, 5);
        assert!(j.first_dispatch_time.is_none());
        assert!(j.last_dispatch_time.is_none());
        assert!(j.finish_time.is_none());
    }

    #[test]
    fn turnaround_waiting_response_formulas() {
        let mut j = Job::new(1, 0, 4, 0);
        j.first_dispatch_time = Some(2);
        j.finish_time = Some(10);
        assert_eq!(j.turnaround_time(), 10);
        assert_eq!(j.waiting_time(), 6);
        assert_eq!(j.response_time(), 2);
    }
}
