//! Programmer-error descriptions for precondition violations.
//!
//! A malformed event trace (bad core id, `job_finished` for a job that
//! isn't running, `quantum_expired` under a non-RR scheme) is a programmer
//! error, not a recoverable condition. `SchedulerError` is never returned
//! from the public handler methods — it exists to give the resulting panic
//! a precise, typed message instead of a bare `unwrap()` on `None`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// `core_id` is not in `0..cores`.
    InvalidCoreId { core_id: u32, cores: u32 },
    /// `job_finished` was called for a core that has no running job.
    CoreNotRunning { core_id: u32 },
    /// `quantum_expired` was called while the active scheme isn't `Rr`.
    NotRoundRobin,
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulerError::InvalidCoreId { core_id, cores } => write!(
                f,
                "core id {core_id} is out of range for a scheduler with {cores} core(s)"
            ),
            SchedulerError::CoreNotRunning { core_id } => {
                write!(f, "job_finished called on idle core {core_id}")
            }
            SchedulerError::NotRoundRobin => {
                write!(f, "quantum_expired is only meaningful under the round-robin scheme")
            }
        }
    }
}

impl std::error::Error for SchedulerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_core_id_message() {
        let err = SchedulerError::InvalidCoreId { core_id: 5, cores: 2 };
        assert_eq!(err.to_string(), "core id 5 is out of range for a scheduler with 2 core(s)");
    }

    #[test]
    fn core_not_running_message() {
        let err = SchedulerError::CoreNotRunning { core_id: 1 };
        assert_eq!(err.to_string(), "job_finished called on idle core 1");
    }

    #[test]
    fn not_round_robin_message() {
        let err = SchedulerError::NotRoundRobin;
        assert_eq!(err.to_string(), "quantum_expired is only meaningful under the round-robin scheme");
    }
}
