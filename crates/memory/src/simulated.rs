use tracing::trace;
use types::SlotAddress;

use crate::{AddressSpace, MemoryError};

pub const DEFAULT_MEMORY_SIZE: usize = 0x10000;
pub const HEAP_START: usize = 0x800;
pub const STACK_OFFSET_FROM_TOP: usize = 0x100;

/// Bytes reserved per activation frame.
pub const FRAME_SIZE: usize = 0x30;
/// Where the activation's local variable sits inside its frame.
pub const LOCAL_SLOT_OFFSET: usize = 0x1c;

pub const CHUNK_HEADER_SIZE: usize = 0x10;
pub const HEAP_ALIGN: usize = 0x10;

/// Deterministic, byte-backed address space.
///
/// EDUCATIONAL PURPOSE: this is the same layout a small VM uses for a
/// single process image. The heap starts low and grows up through a bump
/// pointer, the stack starts near the top and grows down. Every run over
/// the same chains yields the same addresses, which makes the relative
/// ordering of stack and heap addresses easy to reason about:
///
/// ```text
///   0x0000 +-----------------+
///          |   (reserved)    |
///   0x0800 +-----------------+ <- HEAP_START
///          | chunk | chunk   |    grows up
///          |       v         |
///          |                 |
///          |       ^         |
///          | frame | frame   |    grows down
///   top    +-----------------+ <- size - STACK_OFFSET_FROM_TOP
/// ```
///
/// Heap chunks carry a small header, so two allocations of the same size
/// land `size + CHUNK_HEADER_SIZE` (rounded to `HEAP_ALIGN`) apart.
#[derive(Debug)]
pub struct SimulatedSpace {
    mem: Vec<u8>,
    sp: usize,
    next_heap: usize,
    frames: Vec<usize>,
}

impl SimulatedSpace {
    pub fn new() -> Self {
        Self::with_size(DEFAULT_MEMORY_SIZE)
    }

    /// Panics if `memory_size` cannot hold the reserved area and the stack offset.
    pub fn with_size(memory_size: usize) -> Self {
        assert!(
            memory_size >= HEAP_START + STACK_OFFSET_FROM_TOP,
            "memory size 0x{:x} too small for layout",
            memory_size
        );
        Self {
            mem: vec![0u8; memory_size],
            sp: memory_size - STACK_OFFSET_FROM_TOP,
            next_heap: HEAP_START,
            frames: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.mem.len()
    }

    pub fn stack_top(&self) -> SlotAddress {
        SlotAddress::new(self.size() - STACK_OFFSET_FROM_TOP)
    }

    pub fn stack_pointer(&self) -> SlotAddress {
        SlotAddress::new(self.sp)
    }

    /// First byte above the last heap chunk.
    pub fn heap_break(&self) -> SlotAddress {
        SlotAddress::new(self.next_heap)
    }

    /// Reads a word of simulated memory. Only meaningful for frames that are
    /// still live; a popped frame's slot holds whatever was last written.
    pub fn load_u32(&self, addr: SlotAddress) -> Option<u32> {
        let start = addr.raw();
        let bytes = self.mem.get(start..start.checked_add(4)?)?;
        Some(u32::from_le_bytes(bytes.try_into().ok()?))
    }

    fn store_u32(&mut self, addr: usize, val: u32) {
        self.mem[addr..addr + 4].copy_from_slice(&val.to_le_bytes());
    }
}

impl Default for SimulatedSpace {
    fn default() -> Self {
        Self::new()
    }
}

fn align_up(value: usize, align: usize) -> usize {
    (value + align - 1) & !(align - 1)
}

impl AddressSpace for SimulatedSpace {
    fn push_frame(&mut self, local_init: u32) -> Result<SlotAddress, MemoryError> {
        let available = self.sp - self.next_heap;
        if available < FRAME_SIZE {
            return Err(MemoryError::StackOverflow {
                requested: FRAME_SIZE,
                available,
            });
        }

        self.frames.push(self.sp);
        self.sp -= FRAME_SIZE;

        let slot = self.sp + LOCAL_SLOT_OFFSET;
        self.store_u32(slot, local_init);
        trace!(sp = %SlotAddress::new(self.sp), depth = self.frames.len(), "frame pushed");
        Ok(SlotAddress::new(slot))
    }

    fn pop_frame(&mut self) {
        if let Some(previous) = self.frames.pop() {
            self.sp = previous;
            trace!(sp = %SlotAddress::new(self.sp), depth = self.frames.len(), "frame popped");
        }
    }

    fn alloc(&mut self, size: usize) -> Result<SlotAddress, MemoryError> {
        let chunk_size = align_up(size + CHUNK_HEADER_SIZE, HEAP_ALIGN);
        let available = self.sp - self.next_heap;
        if chunk_size > available {
            return Err(MemoryError::OutOfMemory {
                requested: size,
                available: available.saturating_sub(CHUNK_HEADER_SIZE),
            });
        }

        let chunk = self.next_heap;
        // size field with the in-use bit, the way malloc tags its chunks
        self.store_u32(chunk + CHUNK_HEADER_SIZE / 2, (chunk_size | 1) as u32);
        self.next_heap += chunk_size;

        let user = chunk + CHUNK_HEADER_SIZE;
        trace!(addr = %SlotAddress::new(user), size, "heap chunk allocated");
        Ok(SlotAddress::new(user))
    }

    fn depth(&self) -> usize {
        self.frames.len()
    }
}
