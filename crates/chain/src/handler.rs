use std::fmt;
use std::io::Write;

use memory::AddressSpace;
use tracing::debug;
use types::HandlerName;

use crate::error::ChainError;
use crate::global::Config;
use crate::provenance::{ProvenanceRecord, ProvenanceStore};

/// Everything an activation is allowed to touch.
pub struct ActivationContext<'a> {
    pub space: &'a mut dyn AddressSpace,
    pub store: &'a mut ProvenanceStore,
    pub out: &'a mut dyn Write,
}

impl<'a> ActivationContext<'a> {
    pub fn new(
        space: &'a mut dyn AddressSpace,
        store: &'a mut ProvenanceStore,
        out: &'a mut dyn Write,
    ) -> Self {
        Self { space, store, out }
    }
}

pub trait Handler: fmt::Debug {
    fn name(&self) -> HandlerName;

    /// Runs the handler's own work. The frame pushed here stays live until
    /// the dispatcher unwinds the whole chain.
    fn activate(&self, ctx: &mut ActivationContext<'_>) -> Result<ProvenanceRecord, ChainError>;
}

/// The handler shape shared by every name: one local, one permanent
/// allocation, both addresses recorded and printed.
///
/// EDUCATIONAL NOTE: the local is pushed first and the allocation made
/// second, exactly like a function that declares `int var = 0x1337;` and
/// then calls `malloc`. Chaining a second handler from inside the first is
/// what pushes its frame deeper, so the order of names in a chain decides
/// how the recorded stack addresses compare.
#[derive(Debug, Clone)]
pub struct RecordingHandler {
    name: HandlerName,
    local_init: u32,
    alloc_size: usize,
}

impl RecordingHandler {
    pub fn new(name: HandlerName) -> Self {
        Self::with_layout(name, Config::HANDLER_LOCAL_INIT, Config::HANDLER_ALLOC_SIZE)
    }

    pub fn with_layout(name: HandlerName, local_init: u32, alloc_size: usize) -> Self {
        Self {
            name,
            local_init,
            alloc_size,
        }
    }
}

impl Handler for RecordingHandler {
    fn name(&self) -> HandlerName {
        self.name
    }

    fn activate(&self, ctx: &mut ActivationContext<'_>) -> Result<ProvenanceRecord, ChainError> {
        let short_lived = ctx.space.push_frame(self.local_init)?;
        let long_lived = ctx.space.alloc(self.alloc_size)?;

        let record = ProvenanceRecord {
            short_lived,
            long_lived,
        };
        ctx.store.record(self.name, record);
        debug!(
            handler = %self.name,
            stack = %short_lived,
            heap = %long_lived,
            depth = ctx.space.depth(),
            "activation recorded"
        );

        writeln!(ctx.out, "This is function {}.", self.name)?;
        writeln!(ctx.out, "The address of `stack_addr_{}`: {}", self.name, short_lived)?;
        writeln!(ctx.out, "The address of `heap_addr_{}`: {}", self.name, long_lived)?;
        Ok(record)
    }
}
