//! The public view of decoded station metadata, plus the small value types
//! it's built from.

use serde::Serialize;

use crate::date::RdsTime;
use crate::fields::ValidFields;

/// Which half of a group-B's version bit the decoder saw: version A groups
/// carry the type-specific payload this crate decodes; version B groups
/// (other than 0B/2B, which still carry PS/RT) mostly repeat the PI in
/// block C instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GroupVersion {
    A,
    B,
}

/// Decoder Information flags (group 0, segment-ordered nibble).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DecoderInfo {
    pub stereo: bool,
    pub artificial_head: bool,
    pub compressed: bool,
    pub static_pty: bool,
}

/// One Open Data Announcement: a group id is carrying application-specific
/// data identified by a 16-bit AID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpenDataApp {
    pub group_id: u8,
    pub group_version: GroupVersion,
    pub aid: u16,
}

/// Running counters, incremented as blocks and groups are ingested. Never
/// reset except by `Decoder::reset(true)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Statistics {
    pub block_cnt: u64,
    pub block_error_cnt: u64,
    pub block_corrected_cnt: u64,
    pub group_cnt: u64,
    pub group_error_cnt: u64,
    pub group_type_cnt: [u64; 16],
}

/// A read-only view of everything decoded so far.
///
/// Fields that haven't been validated yet hold their zero value; check
/// `valid_fields` (or the dedicated `*_valid` helpers) before trusting them.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub is_rbds: bool,
    pub valid_fields: ValidFields,

    pub pi: u16,
    pub pty: u8,
    pub ps: [u8; 8],
    pub ptyn: [u8; 8],

    pub rt: [u8; 64],
    pub rt_length: usize,
    pub rt_ab_flag: bool,
    pub ptyn_ab_flag: bool,

    pub tp: bool,
    pub ta: bool,
    pub ms: bool,
    pub di: DecoderInfo,

    pub ecc: u8,
    pub lc: u8,

    pub time: Option<RdsTime>,

    pub af: Vec<u32>,
    pub announced_af: u8,

    pub oda: Vec<OpenDataApp>,
    /// Set once any ODA has been announced (spec's `decode_information`
    /// bitset collapses to this single flag for the group types this
    /// crate supports).
    pub oda_present: bool,

    pub statistics: Statistics,
}

impl Snapshot {
    pub(crate) fn new(is_rbds: bool) -> Self {
        Snapshot {
            is_rbds,
            valid_fields: ValidFields::EMPTY,
            pi: 0,
            pty: 0,
            ps: [0; 8],
            ptyn: [0; 8],
            rt: [0; 64],
            rt_length: 0,
            rt_ab_flag: false,
            ptyn_ab_flag: false,
            tp: false,
            ta: false,
            ms: false,
            di: DecoderInfo::default(),
            ecc: 0,
            lc: 0,
            time: None,
            af: Vec::new(),
            announced_af: 0,
            oda: Vec::new(),
            oda_present: false,
            statistics: Statistics::default(),
        }
    }

    /// Program Service name as text, replacing any non-ASCII-printable byte
    /// with a space. Returns `None` until the PS bit is valid.
    pub fn ps_str(&self) -> Option<String> {
        if !self.valid_fields.contains(ValidFields::PS) {
            return None;
        }
        Some(bytes_to_text(&self.ps))
    }

    /// Radio Text as text, truncated to `rt_length`. Returns `None` until
    /// the RT bit is valid.
    pub fn rt_str(&self) -> Option<String> {
        if !self.valid_fields.contains(ValidFields::RT) {
            return None;
        }
        Some(bytes_to_text(&self.rt[..self.rt_length]))
    }

    /// Program Type Name as text. Returns `None` until the PTYN bit is
    /// valid.
    pub fn ptyn_str(&self) -> Option<String> {
        if !self.valid_fields.contains(ValidFields::PTYN) {
            return None;
        }
        Some(bytes_to_text(&self.ptyn))
    }
}

fn bytes_to_text(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { ' ' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_snapshot_has_no_valid_fields() {
        let snap = Snapshot::new(false);
        assert!(snap.ps_str().is_none());
        assert!(snap.rt_str().is_none());
        assert!(snap.ptyn_str().is_none());
    }

    #[test]
    fn ps_str_renders_once_valid() {
        let mut snap = Snapshot::new(false);
        snap.ps = *b"NOWPLAY!";
        snap.valid_fields.insert(ValidFields::PS);
        assert_eq!(snap.ps_str().as_deref(), Some("NOWPLAY!"));
    }
}
