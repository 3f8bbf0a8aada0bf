//! Group 4 — Clock Time (version A only): MJD + UTC hour/minute/offset,
//! accepted once the same MJD has been seen twice, then converted to a
//! local calendar time.

use tracing::debug;

use crate::date;
use crate::decoder::RawGroup;
use crate::fields::UpdatedFields;
use crate::snapshot::{GroupVersion, Snapshot};

#[derive(Debug, Clone, Copy, Default)]
pub struct MjdAccumulator {
    pending_mjd: Option<u32>,
}

pub fn decode(snapshot: &mut Snapshot, mjd: &mut MjdAccumulator, group: &RawGroup) -> UpdatedFields {
    let mut updated = UpdatedFields::EMPTY;
    if group.group_version != GroupVersion::A {
        return updated;
    }

    let candidate = ((group.data_b_lsb as u32 & 0x03) << 15)
        | ((group.data_c_msb as u32) << 7)
        | (group.data_c_lsb as u32 >> 1);

    if mjd.pending_mjd != Some(candidate) {
        mjd.pending_mjd = Some(candidate);
        return updated;
    }

    let utc_hour = ((group.data_c_lsb & 0x01) << 4) | (group.data_d_msb >> 4);
    let utc_minute = ((group.data_d_msb & 0x0f) << 2) | (group.data_d_lsb >> 6);
    let offset = group.data_d_lsb & 0x3f;

    let time = date::decode(candidate, utc_hour, utc_minute, offset);
    snapshot.time = Some(time);
    snapshot.valid_fields.insert(UpdatedFields::TIME);
    updated |= UpdatedFields::TIME;
    debug!(?time, "clock time accepted");

    updated
}
