use std::fmt;

use tracing::trace;
use types::SlotAddress;

use crate::{AddressSpace, MemoryError};

pub const DEFAULT_STACK_REGION: usize = 0x4000;
pub const HOST_FRAME_SIZE: usize = 0x30;
pub const HOST_LOCAL_SLOT_OFFSET: usize = 0x1c;

/// Address space backed by real process memory.
///
/// Frames are carved downward out of a region obtained from the global
/// allocator, heap blocks come straight from the global allocator. Both are
/// leaked on purpose: the addresses handed out stay unique for the life of
/// the process, which is what makes comparing them meaningful.
pub struct HostSpace {
    stack: &'static mut [u8],
    sp: usize,
    frames: Vec<usize>,
    allocations: usize,
}

impl HostSpace {
    pub fn new() -> Self {
        Self::with_stack_region(DEFAULT_STACK_REGION)
    }

    pub fn with_stack_region(region_size: usize) -> Self {
        let stack: &'static mut [u8] = Box::leak(vec![0u8; region_size].into_boxed_slice());
        Self {
            sp: stack.len(),
            stack,
            frames: Vec::new(),
            allocations: 0,
        }
    }

    /// Number of blocks handed out so far.
    pub fn allocations(&self) -> usize {
        self.allocations
    }
}

impl fmt::Debug for HostSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostSpace")
            .field("region", &SlotAddress::from(self.stack.as_ptr()))
            .field("region_len", &self.stack.len())
            .field("sp", &self.sp)
            .field("depth", &self.frames.len())
            .field("allocations", &self.allocations)
            .finish()
    }
}

impl Default for HostSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressSpace for HostSpace {
    fn push_frame(&mut self, local_init: u32) -> Result<SlotAddress, MemoryError> {
        if self.sp < HOST_FRAME_SIZE {
            return Err(MemoryError::StackOverflow {
                requested: HOST_FRAME_SIZE,
                available: self.sp,
            });
        }

        self.frames.push(self.sp);
        self.sp -= HOST_FRAME_SIZE;

        let slot = self.sp + HOST_LOCAL_SLOT_OFFSET;
        let local = &mut self.stack[slot..slot + 4];
        local.copy_from_slice(&local_init.to_ne_bytes());
        let addr = SlotAddress::from(local.as_ptr());
        trace!(%addr, depth = self.frames.len(), "host frame pushed");
        Ok(addr)
    }

    fn pop_frame(&mut self) {
        if let Some(previous) = self.frames.pop() {
            self.sp = previous;
        }
    }

    fn alloc(&mut self, size: usize) -> Result<SlotAddress, MemoryError> {
        let block: &'static mut [u8] = Box::leak(vec![0u8; size].into_boxed_slice());
        self.allocations += 1;
        let addr = SlotAddress::from(block.as_ptr());
        trace!(%addr, size, "host block leaked");
        Ok(addr)
    }

    fn depth(&self) -> usize {
        self.frames.len()
    }
}
