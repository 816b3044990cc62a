#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Host clock snapshot for one evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TickContext {
    pub tick: u64,
}

impl TickContext {
    pub fn new(tick: u64) -> Self {
        Self { tick }
    }
}
