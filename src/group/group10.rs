//! Group 10 — Program Type Name (version A only), assembled from two
//! four-character halves that each require two identical receptions.

use crate::decoder::RawGroup;
use crate::fields::UpdatedFields;
use crate::snapshot::{GroupVersion, Snapshot};

#[derive(Debug, Clone)]
pub struct PtynAccumulator {
    pending: [[u8; 4]; 2],
    valid: [bool; 2],
}

impl Default for PtynAccumulator {
    fn default() -> Self {
        PtynAccumulator {
            pending: [[0; 4]; 2],
            valid: [false; 2],
        }
    }
}

pub fn decode(snapshot: &mut Snapshot, ptyn: &mut PtynAccumulator, group: &RawGroup) -> UpdatedFields {
    let mut updated = UpdatedFields::EMPTY;
    if group.group_version != GroupVersion::A {
        return updated;
    }

    let half = (group.data_b_lsb & 0x01) as usize;
    let ab_flag = group.data_b_lsb & 0x10 != 0;

    if ab_flag != snapshot.ptyn_ab_flag {
        snapshot.ptyn_ab_flag = ab_flag;
        snapshot.ptyn = [0; 8];
        *ptyn = PtynAccumulator::default();
        snapshot.valid_fields.remove(UpdatedFields::PTYN);
        updated |= UpdatedFields::PTYN;
    }

    let chars = [
        group.data_c_msb,
        group.data_c_lsb,
        group.data_d_msb,
        group.data_d_lsb,
    ];
    if chars == ptyn.pending[half] {
        ptyn.valid[half] = true;
    } else {
        ptyn.pending[half] = chars;
        ptyn.valid[half] = false;
    }

    if ptyn.valid[0] && ptyn.valid[1] {
        snapshot.ptyn[..4].copy_from_slice(&ptyn.pending[0]);
        snapshot.ptyn[4..].copy_from_slice(&ptyn.pending[1]);
        snapshot.valid_fields.insert(UpdatedFields::PTYN);
        updated |= UpdatedFields::PTYN;
    }

    updated
}
