//! Modified Julian Day → calendar date conversion, per Annex G of IEC 62106.
//!
//! The reference decoder hands this straight to `mktime`; this crate has no
//! C runtime to lean on, so [`RdsTime`] carries the broken-down fields
//! itself rather than pulling in a date/time crate for a handful of formulas.

/// A decoded RDS clock-time value: local calendar date and time, plus the
/// UTC offset (in seconds) that was applied to get there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct RdsTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: i32,
    pub minute: i32,
    /// Offset from UTC, in seconds, applied to reach this local time.
    pub gmt_offset_seconds: i32,
}

/// Decode an MJD + UTC hour/minute/half-hour-offset triplet into local
/// calendar date and time.
///
/// `mjd` is the 17-bit Modified Julian Day. `utc_hour`/`utc_minute` are UTC.
/// `offset` is the raw 6-bit local-offset field: bits 0-4 are the magnitude
/// in half-hours, bit 5 is the sign (set = behind UTC).
pub fn decode(mjd: u32, utc_hour: u8, utc_minute: u8, offset: u8) -> RdsTime {
    let half_hours = (offset & 0x1f) as i64;
    let negative = offset & 0x20 != 0;

    // local_hour/local_minute are adjusted by the half-hour offset directly,
    // with no overflow normalization between them, matching the reference
    // decoder's arithmetic.
    let mut local_hour = utc_hour as i64;
    let mut local_minute = utc_minute as i64;
    if negative {
        local_hour -= half_hours / 2;
        local_minute -= (half_hours % 2) * 30;
    } else {
        local_hour += half_hours / 2;
        local_minute += (half_hours % 2) * 30;
    }

    let local_mjd = mjd as f64;
    let y0 = ((local_mjd - 15078.2) / 365.25) as i64;
    let m0 = ((local_mjd - 14956.1 - (y0 as f64 * 365.25).trunc()) / 30.6001) as i64;
    let d = (local_mjd - 14956.0 - (y0 as f64 * 365.25).trunc() - (m0 as f64 * 30.6001).trunc())
        as u32;
    let k = if m0 == 14 || m0 == 15 { 1 } else { 0 };
    let y = y0 + k;
    let m = m0 - 1 - k * 12;

    let gmt_offset_seconds = if negative {
        -(half_hours as i32) * 1800
    } else {
        (half_hours as i32) * 1800
    };

    RdsTime {
        year: 1900 + y as i32,
        month: m as u32,
        day: d,
        hour: local_hour as i32,
        minute: local_minute as i32,
        gmt_offset_seconds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_date_no_offset() {
        // MJD 58849 is 2020-01-01.
        let t = decode(58849, 12, 30, 0);
        assert_eq!(t.year, 2020);
        assert_eq!(t.month, 1);
        assert_eq!(t.day, 1);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
    }

    #[test]
    fn positive_offset_shifts_local_hour() {
        // offset 0x02 => 1 whole hour ahead.
        let t = decode(58849, 12, 30, 0x02);
        assert_eq!(t.hour, 13);
        assert_eq!(t.minute, 30);
        assert_eq!(t.gmt_offset_seconds, 3600);
    }

    #[test]
    fn negative_offset_shifts_back() {
        let t = decode(58849, 12, 30, 0x20 | 0x02);
        assert_eq!(t.hour, 11);
        assert_eq!(t.gmt_offset_seconds, -3600);
    }
}
