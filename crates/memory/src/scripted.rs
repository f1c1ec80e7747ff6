use types::SlotAddress;

use crate::{AddressSpace, MemoryError};

/// Address space that hands out addresses from fixed arithmetic sequences,
/// independent of frame nesting. Useful for pinning down orderings in tests.
#[derive(Debug, Clone)]
pub struct ScriptedSpace {
    next_short: Option<usize>,
    short_step: isize,
    next_long: Option<usize>,
    long_step: isize,
    depth: usize,
}

impl ScriptedSpace {
    pub fn new(short_start: usize, short_step: isize, long_start: usize, long_step: isize) -> Self {
        Self {
            next_short: Some(short_start),
            short_step,
            next_long: Some(long_start),
            long_step,
            depth: 0,
        }
    }

    /// Both kinds of address strictly increase with every activation.
    pub fn increasing() -> Self {
        Self::new(0x1000, 0x10, 0x8000, 0x10)
    }

    /// Hands out the current cursor, then steps it. A cursor that has run
    /// off either end of the address range stays exhausted.
    fn advance(cursor: &mut Option<usize>, step: isize, requested: usize) -> Result<SlotAddress, MemoryError> {
        let current = cursor.filter(|addr| *addr != 0).ok_or(MemoryError::OutOfMemory {
            requested,
            available: 0,
        })?;
        *cursor = current.checked_add_signed(step);
        Ok(SlotAddress::new(current))
    }
}

impl AddressSpace for ScriptedSpace {
    fn push_frame(&mut self, _local_init: u32) -> Result<SlotAddress, MemoryError> {
        let addr = Self::advance(&mut self.next_short, self.short_step, 4)?;
        self.depth += 1;
        Ok(addr)
    }

    fn pop_frame(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn alloc(&mut self, size: usize) -> Result<SlotAddress, MemoryError> {
        Self::advance(&mut self.next_long, self.long_step, size)
    }

    fn depth(&self) -> usize {
        self.depth
    }
}
