pub mod error;
pub mod host;
pub mod scripted;
pub mod simulated;

pub use error::MemoryError;
pub use host::HostSpace;
pub use scripted::ScriptedSpace;
pub use simulated::SimulatedSpace;

use types::SlotAddress;

/// Source of the two kinds of addresses a handler activation records.
///
/// EDUCATIONAL NOTE: a real call pushes a frame that holds the callee's
/// locals and pops it on return, while `malloc` hands out blocks that stay
/// put until freed. Implementations model exactly those two lifetimes:
/// a frame's slot is only valid between `push_frame` and the matching
/// `pop_frame`, an allocation is valid forever.
pub trait AddressSpace: std::fmt::Debug {
    /// Reserve a new innermost frame, store `local_init` in its local slot
    /// and return the slot's address.
    fn push_frame(&mut self, local_init: u32) -> Result<SlotAddress, MemoryError>;

    /// Release the innermost frame. No-op when no frame is live.
    fn pop_frame(&mut self);

    /// Allocate `size` bytes that are never released.
    fn alloc(&mut self, size: usize) -> Result<SlotAddress, MemoryError>;

    /// Number of live frames.
    fn depth(&self) -> usize;
}

impl<T: AddressSpace + ?Sized> AddressSpace for Box<T> {
    fn push_frame(&mut self, local_init: u32) -> Result<SlotAddress, MemoryError> {
        (**self).push_frame(local_init)
    }

    fn pop_frame(&mut self) {
        (**self).pop_frame()
    }

    fn alloc(&mut self, size: usize) -> Result<SlotAddress, MemoryError> {
        (**self).alloc(size)
    }

    fn depth(&self) -> usize {
        (**self).depth()
    }
}
