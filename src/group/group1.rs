//! Group 1 — slow labeling codes. Only the ECC (variant 0) and Language
//! Code (variant 3) sub-fields are interpreted; other variants carry
//! program-item-number data this crate doesn't decode.

use crate::decoder::RawGroup;
use crate::fields::UpdatedFields;
use crate::snapshot::{GroupVersion, Snapshot};
use crate::validator::Validator;

pub fn decode(
    snapshot: &mut Snapshot,
    ecc: &mut Validator<u8>,
    lc: &mut Validator<u8>,
    group: &RawGroup,
) -> UpdatedFields {
    let mut updated = UpdatedFields::EMPTY;
    if group.group_version != GroupVersion::A {
        return updated;
    }

    let variant = (group.data_c_msb >> 4) & 0x07;
    match variant {
        0 => {
            let accepted = snapshot.valid_fields.contains(UpdatedFields::ECC).then_some(snapshot.ecc);
            if let Some(value) = ecc.propose(accepted, group.data_c_lsb) {
                if snapshot.ecc != value {
                    updated |= UpdatedFields::ECC;
                }
                snapshot.ecc = value;
                snapshot.valid_fields.insert(UpdatedFields::ECC);
            }
        }
        3 => {
            let accepted = snapshot.valid_fields.contains(UpdatedFields::LC).then_some(snapshot.lc);
            if let Some(value) = lc.propose(accepted, group.data_c_lsb) {
                snapshot.lc = value;
                updated |= UpdatedFields::LC;
                snapshot.valid_fields.insert(UpdatedFields::LC);
            }
        }
        _ => {}
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(c_msb: u8, c_lsb: u8) -> RawGroup {
        RawGroup {
            pi: 0,
            group_id: 1,
            group_version: GroupVersion::A,
            tp: false,
            pty: 0,
            data_b_lsb: 0,
            data_c_msb: c_msb,
            data_c_lsb: c_lsb,
            data_d_msb: 0,
            data_d_lsb: 0,
        }
    }

    #[test]
    fn ecc_needs_two_identical_receptions() {
        let mut snapshot = Snapshot::new(false);
        let mut ecc = Validator::new();
        let mut lc = Validator::new();

        let updated = decode(&mut snapshot, &mut ecc, &mut lc, &group(0x00, 0xe0));
        assert!(updated.is_empty());
        let updated = decode(&mut snapshot, &mut ecc, &mut lc, &group(0x00, 0xe0));
        assert!(updated.contains(UpdatedFields::ECC));
        assert_eq!(snapshot.ecc, 0xe0);
    }

    #[test]
    fn version_b_is_ignored() {
        let mut snapshot = Snapshot::new(false);
        let mut ecc = Validator::new();
        let mut lc = Validator::new();
        let mut g = group(0x00, 0xe0);
        g.group_version = GroupVersion::B;
        decode(&mut snapshot, &mut ecc, &mut lc, &g);
        decode(&mut snapshot, &mut ecc, &mut lc, &g);
        assert!(!snapshot.valid_fields.contains(UpdatedFields::ECC));
    }
}
