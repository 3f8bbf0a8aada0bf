//! The raw wire unit: one 16-bit RDS block plus its tag byte.
//!
//! A [`Block`] is what an external transport (a tuner driver, a recorded
//! capture, a mock device in tests) hands to [`crate::Decoder::ingest`]. This
//! crate never reads these from a file or device itself — see the crate-level
//! docs.

use deku::prelude::*;
use serde::Serialize;

/// Which of the four (or five, counting C′) positions a block occupies
/// within its group.
///
/// C and C′ carry the same payload position (block 3 of the wire protocol)
/// but use a different offset word during FEC, which the transport has
/// already accounted for by the time it reaches this crate.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, DekuRead)]
#[deku(id_type = "u8", bits = "3")]
pub enum BlockId {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    #[serde(rename = "C'")]
    CPrime = 4,
    #[deku(id_pat = "_")]
    Unknown,
}

/// The block-identifier and FEC status bits packed into the wire `block` tag
/// byte. Bits 0..=2 (the low 3 bits) are the [`BlockId`]; bit 3 is the
/// uncorrectable-error flag, bit 4 the corrected-by-FEC flag; bits 5..=7 are
/// reserved. `deku` reads a byte MSB-first, so the struct fields below are
/// declared from bit 7 down to bit 0.
#[derive(Debug, Clone, Copy, DekuRead)]
pub struct BlockTag {
    #[deku(bits = "3")]
    _reserved: u8,
    #[deku(bits = "1")]
    pub corrected: bool,
    #[deku(bits = "1")]
    pub error: bool,
    pub id: BlockId,
}

/// One raw RDS block as received from the transport.
///
/// `lsb`/`msb` are the two data bytes of the block (the 16-bit payload minus
/// its ECC, which the transport has already checked). `block` is the wire tag
/// byte: low 3 bits are the block identifier, the next two bits are the
/// uncorrectable-error and corrected-by-FEC flags.
#[derive(Debug, Clone, Copy)]
pub struct Block {
    pub lsb: u8,
    pub msb: u8,
    pub block: u8,
}

impl Block {
    pub fn new(lsb: u8, msb: u8, block: u8) -> Self {
        Block { lsb, msb, block }
    }

    /// Decode the tag byte into an identifier plus FEC flags.
    ///
    /// An unrecognized block id (bits 5..=7 set in a way `BlockId` doesn't
    /// enumerate) decodes to [`BlockId::Unknown`], which the assembler always
    /// treats as a mismatch regardless of state.
    pub(crate) fn tag(&self) -> BlockTag {
        let (_, tag) = BlockTag::from_bytes((&[self.block], 0))
            .expect("a single byte always yields a BlockTag");
        tag
    }

    /// The 16-bit payload as `(msb, lsb)`, the pairing most type-specific
    /// decoders want.
    pub fn as_bytes(&self) -> (u8, u8) {
        (self.msb, self.lsb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_block_id_from_low_bits() {
        let b = Block::new(0, 0, 0b0000_0010);
        assert_eq!(b.tag().id, BlockId::C);
    }

    #[test]
    fn decodes_error_and_corrected_flags() {
        let error = Block::new(0, 0, 0b0000_1000);
        assert!(error.tag().error);
        assert!(!error.tag().corrected);

        let corrected = Block::new(0, 0, 0b0001_0000);
        assert!(corrected.tag().corrected);
        assert!(!corrected.tag().error);
    }

    #[test]
    fn unknown_block_id_for_reserved_values() {
        let b = Block::new(0, 0, 0b0000_0101);
        assert_eq!(b.tag().id, BlockId::Unknown);
    }
}
