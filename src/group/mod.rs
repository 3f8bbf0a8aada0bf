//! One module per supported group id. Each exposes a `decode` function
//! taking the shared snapshot, its own accumulator state, and the
//! reassembled group; the dispatcher in [`crate::decoder`] wires them up.

pub mod group0;
pub mod group1;
pub mod group2;
pub mod group3;
pub mod group4;
pub mod group10;
