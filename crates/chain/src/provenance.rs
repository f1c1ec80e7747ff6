use std::io::{self, Write};

use types::{AddressKind, HandlerName, SlotAddress};

/// Addresses captured by the latest activation of one handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProvenanceRecord {
    /// Address of the activation's local. The frame is gone once the
    /// activation ends; only the number survives.
    pub short_lived: SlotAddress,
    /// Address of the activation's permanent allocation.
    pub long_lived: SlotAddress,
}

impl ProvenanceRecord {
    pub fn address(&self, kind: AddressKind) -> SlotAddress {
        match kind {
            AddressKind::ShortLived => self.short_lived,
            AddressKind::LongLived => self.long_lived,
        }
    }
}

/// One slot per handler name, holding only the most recent activation.
///
/// The store is created empty and only ever written by handler
/// activations. Slots are overwritten, never cleared, so records survive
/// from one round to the next until the same handler runs again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProvenanceStore {
    slots: [Option<ProvenanceRecord>; HandlerName::COUNT],
}

impl ProvenanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites `name`'s slot, returning the record it replaced.
    pub fn record(
        &mut self,
        name: HandlerName,
        record: ProvenanceRecord,
    ) -> Option<ProvenanceRecord> {
        self.slots[name.index()].replace(record)
    }

    pub fn get(&self, name: HandlerName) -> Option<&ProvenanceRecord> {
        self.slots[name.index()].as_ref()
    }

    /// The recorded address, or [`SlotAddress::NULL`] for a handler that
    /// has never run.
    pub fn address(&self, name: HandlerName, kind: AddressKind) -> SlotAddress {
        self.get(name)
            .map(|record| record.address(kind))
            .unwrap_or(SlotAddress::NULL)
    }

    pub fn iter(&self) -> impl Iterator<Item = (HandlerName, &ProvenanceRecord)> + '_ {
        HandlerName::ALL
            .into_iter()
            .filter_map(|name| self.get(name).map(|record| (name, record)))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dump(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "--- Provenance Dump ---")?;
        for name in HandlerName::ALL {
            match self.get(name) {
                Some(record) => writeln!(
                    out,
                    "{:<4} stack_addr = {:<18} heap_addr = {}",
                    name,
                    record.short_lived.to_string(),
                    record.long_lived
                )?,
                None => writeln!(out, "{:<4} (never run)", name)?,
            }
        }
        writeln!(out, "-----------------------")
    }
}
