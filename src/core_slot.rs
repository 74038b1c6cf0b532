//! A single execution slot the scheduler can place at most one job on.

use crate::job::JobIndex;

/// One of the scheduler's fixed `0..cores-1` execution slots. A core is
/// idle iff `running` is `None`.
#[derive(Debug, Clone, Copy)]
pub struct CoreSlot {
    pub core_id: u32,
    pub running: Option<JobIndex>,
}

impl CoreSlot {
    pub(crate) fn new(core_id: u32) -> Self {
        CoreSlot { core_id, running: None }
    }

    pub fn is_idle(&self) -> bool {
        self.running.is_none()
    }
}
