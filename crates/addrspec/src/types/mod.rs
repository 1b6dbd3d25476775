//! Validated address types.

mod address;

pub use address::Address;
