//! Group 0 — basic tuning and switching: TA/MS flags, PS name, DI flags,
//! and (version A) the alternative frequency list.

use tracing::{debug, trace};

use crate::af::AfSet;
use crate::decoder::RawGroup;
use crate::fields::UpdatedFields;
use crate::snapshot::{DecoderInfo, GroupVersion, Snapshot};

/// Per-position PS accumulator: a mismatching character invalidates the
/// *entire* working name, not just that position.
#[derive(Debug, Clone)]
pub struct PsAccumulator {
    pending: [u8; 8],
    valid: [bool; 8],
}

impl Default for PsAccumulator {
    fn default() -> Self {
        PsAccumulator {
            pending: [0; 8],
            valid: [false; 8],
        }
    }
}

impl PsAccumulator {
    /// Feed one character at `pos` (0..8). Returns `true` once all 8
    /// positions have been confirmed.
    fn feed(&mut self, pos: usize, ch: u8) -> bool {
        if ch == self.pending[pos] {
            self.valid[pos] = true;
        } else {
            self.pending[pos] = ch;
            self.valid = [false; 8];
        }
        self.valid.iter().all(|&v| v)
    }

    fn take(&self) -> [u8; 8] {
        self.pending
    }
}

/// DI segments must arrive in order 0..3; any gap restarts the nibble.
#[derive(Debug, Clone, Default)]
pub struct DiAccumulator {
    pending: DecoderInfo,
    next_segment: u8,
}

fn union(fields: &mut UpdatedFields, added: UpdatedFields) {
    *fields |= added;
}

pub fn decode(
    snapshot: &mut Snapshot,
    ps: &mut PsAccumulator,
    di: &mut DiAccumulator,
    af: &mut AfSet,
    group: &RawGroup,
) -> UpdatedFields {
    let mut updated = UpdatedFields::EMPTY;

    let ta = group.data_b_lsb & 0x10 != 0;
    if snapshot.ta != ta {
        snapshot.ta = ta;
        union(&mut updated, UpdatedFields::TA);
    }
    snapshot.valid_fields.insert(UpdatedFields::TA);

    let ms = group.data_b_lsb & 0x08 != 0;
    if snapshot.ms != ms {
        snapshot.ms = ms;
        union(&mut updated, UpdatedFields::MS);
    }
    snapshot.valid_fields.insert(UpdatedFields::MS);

    let segment = (group.data_b_lsb & 0x03) as usize;
    trace!(segment, "group 0: PS segment");
    ps.feed(segment * 2, group.data_d_msb);
    let complete = ps.feed(segment * 2 + 1, group.data_d_lsb);
    if complete {
        let candidate = ps.take();
        if candidate != snapshot.ps {
            snapshot.ps = candidate;
            union(&mut updated, UpdatedFields::PS);
            debug!(ps = ?String::from_utf8_lossy(&candidate), "PS accepted");
        }
        snapshot.valid_fields.insert(UpdatedFields::PS);
    }

    let di_bit = group.data_b_lsb & 0x04 != 0;
    if segment == 0 || segment as u8 == di.next_segment {
        match segment {
            0 => {
                di.pending.stereo = di_bit;
                di.next_segment = 1;
            }
            1 => {
                di.pending.artificial_head = di_bit;
                di.next_segment = 2;
            }
            2 => {
                di.pending.compressed = di_bit;
                di.next_segment = 3;
            }
            3 => {
                di.pending.static_pty = di_bit;
                if snapshot.di != di.pending {
                    snapshot.di = di.pending;
                    union(&mut updated, UpdatedFields::DI);
                }
                snapshot.valid_fields.insert(UpdatedFields::DI);
                di.next_segment = 0;
            }
            _ => unreachable!("segment is masked to 2 bits"),
        }
    } else {
        trace!(segment, expected = di.next_segment, "DI segment out of order, restarting");
        di.next_segment = 0;
        di.pending = DecoderInfo::default();
    }

    if group.group_version == GroupVersion::A {
        let was_complete = af.is_complete();
        if af.ingest(group.data_c_msb, group.data_c_lsb) {
            union(&mut updated, UpdatedFields::AF);
        }
        snapshot.af = af.frequencies().to_vec();
        snapshot.announced_af = af.announced;
        if af.is_complete() && !was_complete {
            snapshot.valid_fields.insert(UpdatedFields::AF);
        }
    }

    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(data_b_lsb: u8, c_msb: u8, c_lsb: u8, d_msb: u8, d_lsb: u8) -> RawGroup {
        RawGroup {
            pi: 0,
            group_id: 0,
            group_version: GroupVersion::A,
            tp: false,
            pty: 0,
            data_b_lsb,
            data_c_msb: c_msb,
            data_c_lsb: c_lsb,
            data_d_msb: d_msb,
            data_d_lsb: d_lsb,
        }
    }

    #[test]
    fn ps_accumulates_across_four_segments_twice() {
        let mut snapshot = Snapshot::new(false);
        let mut ps = PsAccumulator::default();
        let mut di = DiAccumulator::default();
        let mut af = AfSet::new(25);

        let segments = [(0, b'N', b'O'), (1, b'W', b'P'), (2, b'L', b'A'), (3, b'Y', b'!')];
        for _ in 0..2 {
            for &(segment, hi, lo) in &segments {
                decode(&mut snapshot, &mut ps, &mut di, &mut af, &group(segment, 0, 0, hi, lo));
            }
        }
        assert_eq!(&snapshot.ps, b"NOWPLAY!");
        assert!(snapshot.valid_fields.contains(UpdatedFields::PS));
    }

    #[test]
    fn mismatched_character_clears_all_positions() {
        let name = b"NOWPLAY!";
        let mut ps = PsAccumulator::default();
        // First pass: nothing matches the zeroed pending buffer yet.
        for (i, &ch) in name.iter().enumerate() {
            ps.feed(i, ch);
        }
        assert!(ps.valid.iter().all(|&v| !v));
        // Second identical pass confirms every position.
        let mut complete = false;
        for (i, &ch) in name.iter().enumerate() {
            complete = ps.feed(i, ch);
        }
        assert!(complete);
        assert!(ps.valid.iter().all(|&v| v));

        // A single differing character invalidates the whole working name.
        assert!(!ps.feed(3, b'X'));
        assert!(ps.valid.iter().all(|&v| !v));
    }

    #[test]
    fn di_out_of_order_restarts_the_nibble() {
        let mut snapshot = Snapshot::new(false);
        let mut ps = PsAccumulator::default();
        let mut di = DiAccumulator::default();
        let mut af = AfSet::new(25);

        // Segment 0, then jump straight to segment 3 (skipping 1 and 2).
        decode(&mut snapshot, &mut ps, &mut di, &mut af, &group(0, 0, 0, 0, 0));
        assert_eq!(di.next_segment, 1);
        decode(&mut snapshot, &mut ps, &mut di, &mut af, &group(3, 0, 0, 0, 0));
        assert_eq!(di.next_segment, 0);
        assert!(!snapshot.valid_fields.contains(UpdatedFields::DI));
    }
}
