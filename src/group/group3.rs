//! Group 3 — Open Data Announcements (version A only): declares that a
//! given group id is carrying application-specific data.

use tracing::{debug, warn};

use crate::decoder::RawGroup;
use crate::fields::UpdatedFields;
use crate::snapshot::{GroupVersion, OpenDataApp, Snapshot};

pub fn decode(snapshot: &mut Snapshot, max_oda_cnt: usize, group: &RawGroup) -> UpdatedFields {
    let mut updated = UpdatedFields::EMPTY;
    if group.group_version != GroupVersion::A {
        return updated;
    }

    let announced_version = if group.data_b_lsb & 0x01 != 0 {
        GroupVersion::B
    } else {
        GroupVersion::A
    };
    let group_id = (group.data_b_lsb & 0x1e) >> 1;
    let aid = ((group.data_d_msb as u16) << 8) | group.data_d_lsb as u16;

    if let Some(existing) = snapshot.oda.iter_mut().find(|o| o.group_id == group_id) {
        if existing.aid != aid || existing.group_version != announced_version {
            existing.aid = aid;
            existing.group_version = announced_version;
            updated |= UpdatedFields::ODA;
            debug!(group_id, aid, "ODA updated in place");
        }
    } else if snapshot.oda.len() < max_oda_cnt {
        snapshot.oda.push(OpenDataApp {
            group_id,
            group_version: announced_version,
            aid,
        });
        snapshot.oda_present = true;
        updated |= UpdatedFields::ODA;
        debug!(group_id, aid, "ODA inserted");
    } else {
        warn!(group_id, aid, max_oda_cnt, "ODA list full, dropping announcement");
    }

    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(data_b_lsb: u8, d_msb: u8, d_lsb: u8) -> RawGroup {
        RawGroup {
            pi: 0,
            group_id: 3,
            group_version: GroupVersion::A,
            tp: false,
            pty: 0,
            data_b_lsb,
            data_c_msb: 0,
            data_c_lsb: 0,
            data_d_msb: d_msb,
            data_d_lsb: d_lsb,
        }
    }

    #[test]
    fn inserts_new_oda() {
        let mut snapshot = Snapshot::new(false);
        let updated = decode(&mut snapshot, 16, &group(0b0010, 0x12, 0x34));
        assert!(updated.contains(UpdatedFields::ODA));
        assert_eq!(snapshot.oda.len(), 1);
        assert_eq!(snapshot.oda[0].group_id, 1);
        assert_eq!(snapshot.oda[0].aid, 0x1234);
    }

    #[test]
    fn updates_aid_in_place() {
        let mut snapshot = Snapshot::new(false);
        decode(&mut snapshot, 16, &group(0b0010, 0x12, 0x34));
        let updated = decode(&mut snapshot, 16, &group(0b0010, 0xab, 0xcd));
        assert!(updated.contains(UpdatedFields::ODA));
        assert_eq!(snapshot.oda.len(), 1);
        assert_eq!(snapshot.oda[0].aid, 0xabcd);
    }

    #[test]
    fn caps_at_max_oda_cnt() {
        let mut snapshot = Snapshot::new(false);
        for id in 0..16u8 {
            decode(&mut snapshot, 1, &group(id << 1, 0, id));
        }
        assert_eq!(snapshot.oda.len(), 1);
    }
}
