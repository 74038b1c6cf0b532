//! A discrete-event multi-core CPU scheduler simulator core.
//!
//! Implements six canonical scheduling policies — FCFS, SJF, PSJF, PRI,
//! PPRI and RR — on top of a single policy-parameterized ordered ready
//! queue. Driven externally by a caller that delivers events (job arrival,
//! job completion, quantum expiration) in strict time order and queries
//! this crate for placement decisions and end-of-run statistics. Argument
//! parsing, trace file parsing and textual queue dumps are the caller's
//! concern, not this crate's.

mod config;
mod core_slot;
mod error;
mod job;
mod policy;
mod queue;
mod scheduler;

pub use config::SchedulerConfig;
pub use core_slot::CoreSlot;
pub use error::SchedulerError;
pub use job::{Job, JobIndex};
pub use policy::{QueuedJob, Scheme};
pub use queue::OrderedQueue;
pub use scheduler::Scheduler;
