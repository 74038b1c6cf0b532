//! The `Scheduler` handle: core-to-job assignment, preemption, and statistics.

use crate::config::SchedulerConfig;
use crate::core_slot::CoreSlot;
use crate::error::SchedulerError;
use crate::job::{Job, JobIndex};
use crate::policy::{QueuedJob, Scheme};
use crate::queue::OrderedQueue;

/// Owns every admitted `Job`, the fixed core array, and the ready queue.
/// Single-threaded and cooperative: every handler runs to completion before
/// the next event is delivered.
#[derive(Debug)]
pub struct Scheduler {
    scheme: Scheme,
    cores: Vec<CoreSlot>,
    ready: OrderedQueue<QueuedJob>,
    jobs: Vec<Job>,
}

impl Scheduler {
    /// Allocates `cores` idle core slots and an empty ready queue ordered by
    /// `scheme`'s comparator. Must be called exactly once, before any other
    /// operation.
    pub fn start_up(cores: u32, scheme: Scheme) -> Scheduler {
        assert!(cores >= 1, "a scheduler needs at least one core");
        Scheduler {
            scheme,
            cores: (0..cores).map(CoreSlot::new).collect(),
            ready: OrderedQueue::new(scheme.comparator()),
            jobs: Vec::new(),
        }
    }

    /// Equivalent to `start_up(config.cores, config.scheme)`.
    pub fn from_config(config: &SchedulerConfig) -> Scheduler {
        Scheduler::start_up(config.cores, config.scheme)
    }

    // -----------------------------------------------------------------
    // Event handlers
    // -----------------------------------------------------------------

    /// Admits a new job, dispatching it immediately if an idle core exists
    /// or the active scheme preempts a running job for it. Returns the core
    /// id the job was placed on, or `None` if it was enqueued instead.
    pub fn new_job(&mut self, job_id: u64, time: u64, running_time: u64, priority: u64) -> Option<u32> {
        assert!(running_time >= 1, "running_time must be at least 1");

        let idx = JobIndex(self.jobs.len());
        self.jobs.push(Job::new(job_id, time, running_time, priority));

        if let Some(pos) = self.idle_core_pos() {
            self.dispatch(pos, idx, time);
            return Some(self.cores[pos].core_id);
        }

        match self.scheme {
            Scheme::Fcfs | Scheme::Sjf | Scheme::Pri | Scheme::Rr => {
                self.enqueue(idx);
                None
            }
            Scheme::Psjf => self.preempt_for_shortest_job(idx, time),
            Scheme::Ppri => self.preempt_for_priority(idx, time),
        }
    }

    /// Completes the job running on `core_id`, then dispatches the head of
    /// the ready queue onto the now-free core, if any.
    pub fn job_finished(&mut self, core_id: u32, job_id: u64, time: u64) -> Option<u64> {
        let pos = self.require_core_pos(core_id);
        let idx = self.cores[pos].running.take().unwrap_or_else(|| {
            panic!("{}", SchedulerError::CoreNotRunning { core_id })
        });

        let job = &mut self.jobs[idx.0];
        debug_assert_eq!(job.job_id, job_id, "job_finished job_id does not match the job running on this core");
        job.finish_time = Some(time);
        job.remaining_time = 0;

        self.ready.poll().map(|head| {
            self.dispatch(pos, head.index, time);
            self.jobs[head.index.0].job_id
        })
    }

    /// Rotates the job running on `core_id` to the back of the ready queue
    /// and dispatches the new head. Only meaningful under `Scheme::Rr`.
    pub fn quantum_expired(&mut self, core_id: u32, time: u64) -> Option<u64> {
        assert_eq!(self.scheme, Scheme::Rr, "{}", SchedulerError::NotRoundRobin);

        let pos = self.require_core_pos(core_id);
        let cur = self.cores[pos].running?;

        self.account_running_job(cur, time);
        self.jobs[cur.0].last_dispatch_time = None;
        self.cores[pos].running = None;
        self.enqueue(cur);

        let head = self.ready.poll().expect("the job just rotated is still in the queue");
        self.dispatch(pos, head.index, time);
        Some(self.jobs[head.index.0].job_id)
    }

    // -----------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------

    pub fn average_waiting_time(&self) -> f64 {
        self.average_over_finished(Job::waiting_time)
    }

    pub fn average_turnaround_time(&self) -> f64 {
        self.average_over_finished(Job::turnaround_time)
    }

    pub fn average_response_time(&self) -> f64 {
        self.average_over_finished(Job::response_time)
    }

    /// Releases the core array, drains the ready queue, and drops every
    /// admitted job. Must be the last operation performed.
    pub fn clean_up(self) {
        // Consuming `self` drops `cores`, `ready` and `jobs` together —
        // no admitted job is left owned by neither a core nor the queue.
    }

    // -----------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------

    fn idle_core_pos(&self) -> Option<usize> {
        self.cores.iter().position(CoreSlot::is_idle)
    }

    fn require_core_pos(&self, core_id: u32) -> usize {
        let pos = core_id as usize;
        if pos >= self.cores.len() {
            panic!("{}", SchedulerError::InvalidCoreId { core_id, cores: self.cores.len() as u32 });
        }
        pos
    }

    fn queued(&self, idx: JobIndex) -> QueuedJob {
        let job = &self.jobs[idx.0];
        QueuedJob {
            index: idx,
            arrival_time: job.arrival_time,
            remaining_time: job.remaining_time,
            priority: job.priority,
        }
    }

    fn enqueue(&mut self, idx: JobIndex) {
        let snapshot = self.queued(idx);
        self.ready.offer(snapshot);
    }

    /// Dispatches `idx` onto core `pos`, setting `first_dispatch_time` the
    /// first time this happens and always updating `last_dispatch_time`.
    fn dispatch(&mut self, pos: usize, idx: JobIndex, time: u64) {
        self.cores[pos].running = Some(idx);
        let job = &mut self.jobs[idx.0];
        if job.first_dispatch_time.is_none() {
            job.first_dispatch_time = Some(time);
        }
        job.last_dispatch_time = Some(time);
    }

    /// Moves a preempted job back into the ready queue, clearing
    /// `last_dispatch_time` so it reads as waiting.
    fn preempt(&mut self, pos: usize, victim: JobIndex) {
        self.cores[pos].running = None;
        self.jobs[victim.0].last_dispatch_time = None;
        self.enqueue(victim);
    }

    /// Decrements `remaining_time` by the elapsed time since the job's
    /// current running segment began, and advances `last_dispatch_time`
    /// to `time`.
    fn account_running_job(&mut self, idx: JobIndex, time: u64) {
        let job = &mut self.jobs[idx.0];
        let started = job.last_dispatch_time.expect("a running job always has a last_dispatch_time");
        job.remaining_time = job.remaining_time.saturating_sub(time - started);
        job.last_dispatch_time = Some(time);
    }

    /// Updates every running job's remaining time as of `time`, then finds
    /// the one with the greatest updated remaining time (ties broken by
    /// greatest arrival time). This is PSJF's victim-selection rule.
    fn preempt_for_shortest_job(&mut self, new_idx: JobIndex, time: u64) -> Option<u32> {
        let running: Vec<(usize, JobIndex)> = self.running_cores();
        for &(_, idx) in &running {
            self.account_running_job(idx, time);
        }

        let (pos, victim) = running
            .into_iter()
            .max_by(|(_, a), (_, b)| self.by_remaining_then_arrival(*a, *b))
            .expect("new_job only reaches PSJF preemption when every core is busy");

        if self.jobs[new_idx.0].remaining_time < self.jobs[victim.0].remaining_time {
            self.preempt(pos, victim);
            self.dispatch(pos, new_idx, time);
            Some(self.cores[pos].core_id)
        } else {
            self.enqueue(new_idx);
            None
        }
    }

    /// Finds the running job with the numerically largest (lowest-priority)
    /// `priority`, ties broken by greatest arrival time. PPRI never bumps
    /// remaining time — priority is static.
    fn preempt_for_priority(&mut self, new_idx: JobIndex, time: u64) -> Option<u32> {
        let (pos, victim) = self
            .running_cores()
            .into_iter()
            .max_by(|(_, a), (_, b)| self.by_priority_then_arrival(*a, *b))
            .expect("new_job only reaches PPRI preemption when every core is busy");

        if self.jobs[new_idx.0].priority < self.jobs[victim.0].priority {
            self.preempt(pos, victim);
            self.dispatch(pos, new_idx, time);
            Some(self.cores[pos].core_id)
        } else {
            self.enqueue(new_idx);
            None
        }
    }

    fn running_cores(&self) -> Vec<(usize, JobIndex)> {
        self.cores
            .iter()
            .enumerate()
            .filter_map(|(pos, core)| core.running.map(|idx| (pos, idx)))
            .collect()
    }

    fn by_remaining_then_arrival(&self, a: JobIndex, b: JobIndex) -> std::cmp::Ordering {
        let (ja, jb) = (&self.jobs[a.0], &self.jobs[b.0]);
        ja.remaining_time.cmp(&jb.remaining_time).then_with(|| ja.arrival_time.cmp(&jb.arrival_time))
    }

    fn by_priority_then_arrival(&self, a: JobIndex, b: JobIndex) -> std::cmp::Ordering {
        let (ja, jb) = (&self.jobs[a.0], &self.jobs[b.0]);
        ja.priority.cmp(&jb.priority).then_with(|| ja.arrival_time.cmp(&jb.arrival_time))
    }

    fn average_over_finished<F: Fn(&Job) -> u64>(&self, f: F) -> f64 {
        let finished: Vec<&Job> = self.jobs.iter().filter(|j| j.finish_time.is_some()).collect();
        if finished.is_empty() {
            return 0.0;
        }
        let total: u64 = finished.iter().map(|j| f(j)).sum();
        total as f64 / finished.len() as f64
    }

    #[cfg(test)]
    fn ready_job_ids(&self) -> Vec<u64> {
        (0..self.ready.size())
            .map(|i| self.jobs[self.ready.at(i).unwrap().index.0].job_id)
            .collect()
    }

    #[cfg(test)]
    fn assert_invariants(&self) {
        let admitted_unfinished = self.jobs.iter().filter(|j| j.finish_time.is_none()).count();
        let busy = self.cores.iter().filter(|c| !c.is_idle()).count();
        assert_eq!(busy + self.ready.size(), admitted_unfinished);

        let mut seen_core_ids = std::collections::HashSet::new();
        for (pos, core) in self.cores.iter().enumerate() {
            assert_eq!(core.core_id as usize, pos);
            assert!(seen_core_ids.insert(core.core_id));
        }

        for job in &self.jobs {
            if job.finish_time.is_some() {
                assert_eq!(job.remaining_time, 0);
                assert!(job.first_dispatch_time.is_some());
            }
        }
    }
}
