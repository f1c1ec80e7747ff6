use core::fmt;

/// An address value captured from a handler activation.
///
/// EDUCATIONAL NOTE: this is a plain number, not a pointer. Once the
/// activation that produced it has returned, the memory it names may be
/// reused, so the only meaningful thing left to do with it is compare it
/// against other addresses. There is deliberately no way to turn it back
/// into a reference.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct SlotAddress(usize);

impl SlotAddress {
    /// The address an unwritten record compares as.
    pub const NULL: SlotAddress = SlotAddress(0);

    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> usize {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, value: usize) -> Option<Self> {
        self.0.checked_add(value).map(SlotAddress)
    }

    pub fn checked_sub(self, value: usize) -> Option<Self> {
        self.0.checked_sub(value).map(SlotAddress)
    }

    /// Distance in bytes between two addresses, regardless of order.
    pub fn distance(self, other: SlotAddress) -> usize {
        self.0.abs_diff(other.0)
    }
}

impl<T> From<*const T> for SlotAddress {
    fn from(ptr: *const T) -> Self {
        SlotAddress(ptr as usize)
    }
}

impl From<usize> for SlotAddress {
    fn from(value: usize) -> Self {
        SlotAddress(value)
    }
}

impl fmt::Debug for SlotAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotAddress({:#x})", self.0)
    }
}

impl fmt::Display for SlotAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str("(nil)");
        }
        write!(f, "{:#x}", self.0)
    }
}

/// Which of the two addresses in a provenance record a comparison looks at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressKind {
    /// Address of the activation's local variable (lives on the stack).
    ShortLived,
    /// Address of the activation's permanent allocation (lives on the heap).
    LongLived,
}

impl AddressKind {
    /// Prefix used when the address is named in operator-facing text.
    pub const fn label(self) -> &'static str {
        match self {
            AddressKind::ShortLived => "stack_addr",
            AddressKind::LongLived => "heap_addr",
        }
    }
}
