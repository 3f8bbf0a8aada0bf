//! Group 2 — Radio Text, with its A/B toggle and early CR termination.

use tracing::debug;

use crate::decoder::RawGroup;
use crate::fields::UpdatedFields;
use crate::snapshot::{GroupVersion, Snapshot};

const CR: u8 = 0x0d;

#[derive(Debug, Clone)]
pub struct RtAccumulator {
    pending: [u8; 64],
    next_segment: u8,
}

impl Default for RtAccumulator {
    fn default() -> Self {
        RtAccumulator {
            pending: [0; 64],
            next_segment: 0,
        }
    }
}

pub fn decode(snapshot: &mut Snapshot, rt: &mut RtAccumulator, group: &RawGroup) -> UpdatedFields {
    let mut updated = UpdatedFields::EMPTY;

    let segment = group.data_b_lsb & 0x0f;
    let ab_flag = group.data_b_lsb & 0x10 != 0;

    if ab_flag != snapshot.rt_ab_flag {
        snapshot.rt_ab_flag = ab_flag;
        snapshot.rt = [0; 64];
        rt.pending = [0; 64];
        snapshot.valid_fields.remove(UpdatedFields::RT);
        updated |= UpdatedFields::RT;
        rt.next_segment = 0;
    }

    let max_length = if group.group_version == GroupVersion::A { 64 } else { 32 };
    if segment == 0 || segment == rt.next_segment {
        let base = if group.group_version == GroupVersion::A {
            rt.pending[segment as usize * 4] = group.data_c_msb;
            rt.pending[segment as usize * 4 + 1] = group.data_c_lsb;
            segment as usize * 4 + 2
        } else {
            segment as usize * 2
        };
        rt.pending[base] = group.data_d_msb;
        rt.pending[base + 1] = group.data_d_lsb;
        rt.next_segment = segment + 1;

        if segment == 0x0f {
            snapshot.rt_length = max_length;
            snapshot.valid_fields.insert(UpdatedFields::RT);
            if snapshot.rt[..max_length] != rt.pending[..max_length] {
                snapshot.rt[..max_length].copy_from_slice(&rt.pending[..max_length]);
                updated |= UpdatedFields::RT;
                debug!(length = max_length, "RT accepted at segment 15");
            }
            rt.next_segment = 0;
        }
    }

    // A carriage return anywhere in the pending buffer ends the message
    // early, independent of which segment just arrived.
    if let Some(pos) = rt.pending.iter().position(|&b| b == CR) {
        rt.pending[pos] = 0;
        snapshot.rt_length = pos;
        snapshot.valid_fields.insert(UpdatedFields::RT);
        if snapshot.rt[..pos] != rt.pending[..pos] {
            snapshot.rt[..pos].copy_from_slice(&rt.pending[..pos]);
            updated |= UpdatedFields::RT;
            debug!(length = pos, "RT terminated by CR");
        }
        rt.next_segment = 0;
    }

    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(version: GroupVersion, data_b_lsb: u8, c_msb: u8, c_lsb: u8, d_msb: u8, d_lsb: u8) -> RawGroup {
        RawGroup {
            pi: 0,
            group_id: 2,
            group_version: version,
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
    fn terminates_early_on_carriage_return() {
        let mut snapshot = Snapshot::new(false);
        let mut rt = RtAccumulator::default();

        decode(&mut snapshot, &mut rt, &group(GroupVersion::A, 0, b'N', b'o', b'w', b' '));
        decode(&mut snapshot, &mut rt, &group(GroupVersion::A, 1, b'P', b'l', b'a', b'y'));
        decode(&mut snapshot, &mut rt, &group(GroupVersion::A, 2, b'i', b'n', b'g', CR));

        assert!(snapshot.valid_fields.contains(UpdatedFields::RT));
        assert_eq!(snapshot.rt_length, 11);
        assert_eq!(&snapshot.rt[..11], b"Now Playing");
    }

    #[test]
    fn ab_toggle_clears_rt_immediately() {
        let mut snapshot = Snapshot::new(false);
        let mut rt = RtAccumulator::default();
        snapshot.rt[0] = b'X';
        snapshot.rt_ab_flag = false;

        let updated = decode(&mut snapshot, &mut rt, &group(GroupVersion::A, 0x10, 0, 0, 0, 0));
        assert!(updated.contains(UpdatedFields::RT));
        assert_eq!(snapshot.rt[0], 0);
        assert!(!snapshot.valid_fields.contains(UpdatedFields::RT));
    }

    #[test]
    fn version_b_uses_two_chars_per_segment_from_d_only() {
        let mut snapshot = Snapshot::new(false);
        let mut rt = RtAccumulator::default();
        for seg in 0..16u8 {
            decode(&mut snapshot, &mut rt, &group(GroupVersion::B, seg, 0xff, 0xff, b'A', b'B'));
        }
        assert_eq!(snapshot.rt_length, 32);
        assert!(snapshot.rt[..32].iter().all(|&b| b == b'A' || b == b'B'));
    }
}
