#![no_std]

pub mod address;
pub use address::{AddressKind, SlotAddress};

pub mod handler;
pub use handler::HandlerName;
