//! The Block Frame Assembler and Group Dispatcher: the only two pieces of
//! this crate that see raw wire blocks. Everything downstream works on
//! reassembled, group-type-independent fields.

use tracing::{trace, warn};

use crate::af::AfSet;
use crate::block::{Block, BlockId};
use crate::fields::UpdatedFields;
use crate::group::{group0, group1, group10, group2, group3, group4};
use crate::snapshot::{GroupVersion, Snapshot};
use crate::tables;
use crate::validator::Validator;

const DEFAULT_MAX_AF_CNT: usize = 25;
const DEFAULT_MAX_ODA_CNT: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssemblerState {
    Empty,
    ARecv,
    BRecv,
    CRecv,
}

/// A fully reassembled four-block group, with only the group-type
/// independent fields (PI, group id/version, TP, PTY) decoded. Block C and
/// D payloads are left opaque; each type-specific decoder interprets them
/// according to its own bit layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawGroup {
    pub pi: u16,
    pub group_id: u8,
    pub group_version: GroupVersion,
    pub tp: bool,
    pub pty: u8,
    pub data_b_lsb: u8,
    pub data_c_msb: u8,
    pub data_c_lsb: u8,
    pub data_d_msb: u8,
    pub data_d_lsb: u8,
}

/// The incremental RDS/RBDS decoder. Holds no I/O of any kind; the only way
/// in is [`Decoder::ingest`] and the only way out is [`Decoder::snapshot`]
/// (or [`Decoder::current_group`] for the pre-decoded raw group).
pub struct Decoder {
    is_rbds: bool,
    max_af_cnt: usize,
    max_oda_cnt: usize,

    state: AssemblerState,
    a: (u8, u8),
    b: (u8, u8),
    c: (u8, u8),

    last_group: Option<RawGroup>,

    pending_pi: Validator<u16>,
    pending_pty: Validator<u8>,
    pending_ecc: Validator<u8>,
    pending_lc: Validator<u8>,
    ps: group0::PsAccumulator,
    di: group0::DiAccumulator,
    af: AfSet,
    rt: group2::RtAccumulator,
    mjd: group4::MjdAccumulator,
    ptyn: group10::PtynAccumulator,

    snapshot: Snapshot,
}

impl Decoder {
    /// Create a decoder for RDS (`is_rbds = false`) or RBDS (`true`) with
    /// default capacity limits (25 AFs, 16 ODA entries).
    pub fn new(is_rbds: bool) -> Self {
        Self::with_capacity(is_rbds, DEFAULT_MAX_AF_CNT, DEFAULT_MAX_ODA_CNT)
    }

    /// Create a decoder with explicit capacity limits for the AF list and
    /// the ODA list.
    pub fn with_capacity(is_rbds: bool, max_af_cnt: usize, max_oda_cnt: usize) -> Self {
        Decoder {
            is_rbds,
            max_af_cnt,
            max_oda_cnt,
            state: AssemblerState::Empty,
            a: (0, 0),
            b: (0, 0),
            c: (0, 0),
            last_group: None,
            pending_pi: Validator::new(),
            pending_pty: Validator::new(),
            pending_ecc: Validator::new(),
            pending_lc: Validator::new(),
            ps: group0::PsAccumulator::default(),
            di: group0::DiAccumulator::default(),
            af: AfSet::new(max_af_cnt),
            rt: group2::RtAccumulator::default(),
            mjd: group4::MjdAccumulator::default(),
            ptyn: group10::PtynAccumulator::default(),
            snapshot: Snapshot::new(is_rbds),
        }
    }

    /// Wipe all decoding state. `is_rbds` is always preserved; statistics
    /// are preserved unless `reset_statistics` is set.
    pub fn reset(&mut self, reset_statistics: bool) {
        let is_rbds = self.is_rbds;
        let statistics = self.snapshot.statistics;
        let max_af_cnt = self.max_af_cnt;
        let max_oda_cnt = self.max_oda_cnt;
        *self = Decoder::with_capacity(is_rbds, max_af_cnt, max_oda_cnt);
        if !reset_statistics {
            self.snapshot.statistics = statistics;
        }
    }

    /// Ingest one raw wire block. Returns the set of public fields that
    /// changed as a result.
    pub fn ingest(&mut self, block: Block) -> UpdatedFields {
        let tag = block.tag();
        let stats = &mut self.snapshot.statistics;
        stats.block_cnt += 1;
        if tag.error {
            stats.block_error_cnt += 1;
        } else if tag.corrected {
            stats.block_corrected_cnt += 1;
        }

        let id = if tag.error { None } else { Some(tag.id) };
        trace!(?id, state = ?self.state, "block received");

        match self.state {
            AssemblerState::Empty => {
                if id == Some(BlockId::A) {
                    self.a = block.as_bytes();
                    self.state = AssemblerState::ARecv;
                } else {
                    self.snapshot.statistics.group_error_cnt += 1;
                }
                UpdatedFields::EMPTY
            }
            AssemblerState::ARecv => {
                if id == Some(BlockId::B) {
                    self.b = block.as_bytes();
                    self.state = AssemblerState::BRecv;
                } else {
                    warn!("group sequencing error: expected block B");
                    self.snapshot.statistics.group_error_cnt += 1;
                    self.state = AssemblerState::Empty;
                }
                UpdatedFields::EMPTY
            }
            AssemblerState::BRecv => {
                if id == Some(BlockId::C) || id == Some(BlockId::CPrime) {
                    self.c = block.as_bytes();
                    self.state = AssemblerState::CRecv;
                } else {
                    warn!("group sequencing error: expected block C or C'");
                    self.snapshot.statistics.group_error_cnt += 1;
                    self.state = AssemblerState::Empty;
                }
                UpdatedFields::EMPTY
            }
            AssemblerState::CRecv => {
                self.state = AssemblerState::Empty;
                if id == Some(BlockId::D) {
                    let d = block.as_bytes();
                    self.snapshot.statistics.group_cnt += 1;
                    self.assemble_and_dispatch(d)
                } else {
                    warn!("group sequencing error: expected block D");
                    self.snapshot.statistics.group_error_cnt += 1;
                    UpdatedFields::EMPTY
                }
            }
        }
    }

    fn assemble_and_dispatch(&mut self, d: (u8, u8)) -> UpdatedFields {
        let mut updated = UpdatedFields::EMPTY;

        let pi = ((self.a.0 as u16) << 8) | self.a.1 as u16;
        let accepted_pi = self
            .snapshot
            .valid_fields
            .contains(UpdatedFields::PI)
            .then_some(self.snapshot.pi);
        if let Some(value) = self.pending_pi.propose(accepted_pi, pi) {
            self.snapshot.pi = value;
            self.snapshot.valid_fields.insert(UpdatedFields::PI);
            updated |= UpdatedFields::PI;
        }

        let group_id = self.b.0 >> 4;
        let group_version = if self.b.0 & 0x08 != 0 { GroupVersion::B } else { GroupVersion::A };
        let tp = self.b.0 & 0x04 != 0;
        if self.snapshot.tp != tp {
            self.snapshot.tp = tp;
            updated |= UpdatedFields::TP;
        }
        self.snapshot.valid_fields.insert(UpdatedFields::TP);

        let data_b_lsb = self.b.1 & 0x1f;
        let pty = ((self.b.0 << 3) | (self.b.1 >> 5)) & 0x1f;
        let accepted_pty = self
            .snapshot
            .valid_fields
            .contains(UpdatedFields::PTY)
            .then_some(self.snapshot.pty);
        if let Some(value) = self.pending_pty.propose(accepted_pty, pty) {
            self.snapshot.pty = value;
            self.snapshot.valid_fields.insert(UpdatedFields::PTY);
            updated |= UpdatedFields::PTY;
        }

        let group = RawGroup {
            pi,
            group_id,
            group_version,
            tp,
            pty,
            data_b_lsb,
            data_c_msb: self.c.0,
            data_c_lsb: self.c.1,
            data_d_msb: d.0,
            data_d_lsb: d.1,
        };
        self.last_group = Some(group);
        self.snapshot.statistics.group_type_cnt[group_id as usize] += 1;

        let type_updated = match group_id {
            0 => group0::decode(&mut self.snapshot, &mut self.ps, &mut self.di, &mut self.af, &group),
            1 => group1::decode(&mut self.snapshot, &mut self.pending_ecc, &mut self.pending_lc, &group),
            2 => group2::decode(&mut self.snapshot, &mut self.rt, &group),
            3 => group3::decode(&mut self.snapshot, self.max_oda_cnt, &group),
            4 => group4::decode(&mut self.snapshot, &mut self.mjd, &group),
            10 => group10::decode(&mut self.snapshot, &mut self.ptyn, &group),
            _ => UpdatedFields::EMPTY,
        };
        updated |= type_updated;
        updated
    }

    /// A read-only snapshot of every decoded field.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The last fully assembled group, before type-specific decoding. Useful
    /// to callers that want the pre-decoded raw group.
    pub fn current_group(&self) -> Option<&RawGroup> {
        self.last_group.as_ref()
    }

    pub fn pty_label(&self) -> Option<&'static str> {
        tables::pty::label(self.snapshot.pty, self.is_rbds)
    }

    pub fn language_label(&self) -> &'static str {
        tables::language::label(self.snapshot.lc)
    }

    pub fn country_label(&self) -> &'static str {
        tables::country::label(self.snapshot.ecc, self.snapshot.pi)
    }

    pub fn coverage_label(&self) -> &'static str {
        tables::coverage::label(self.snapshot.pi)
    }
}
