#![doc = include_str!("../readme.md")]

pub mod af;
pub mod block;
pub mod date;
pub mod decoder;
pub mod fields;
pub mod group;
pub mod snapshot;
pub mod tables;
pub mod validator;

pub use block::Block;
pub use decoder::{Decoder, RawGroup};
pub use fields::{Fields, UpdatedFields, ValidFields};
pub use snapshot::Snapshot;
