//! Program Type labels, RDS (European) and RBDS (North American) variants.
//!
//! The two tables assign different meanings to the same 5-bit code, which is
//! why [`label`] takes the `is_rbds` flag rather than picking a table once at
//! construction.

const RDS: [&str; 32] = [
    "None",
    "News",
    "Affairs",
    "Info",
    "Sport",
    "Education",
    "Drama",
    "Culture",
    "Science",
    "Varied Speech",
    "Pop Music",
    "Rock Music",
    "Easy Listening",
    "Light Classics M",
    "Serious Classics",
    "Other Music",
    "Weather",
    "Finance",
    "Children",
    "Social Affairs",
    "Religion",
    "Phone In",
    "Travel & Touring",
    "Leisure & Hobby",
    "Jazz Music",
    "Country Music",
    "National Music",
    "Oldies Music",
    "Folk Music",
    "Documentary",
    "Alarm Test",
    "Alarm!",
];

const RBDS: [&str; 32] = [
    "None",
    "News",
    "Information",
    "Sports",
    "Talk",
    "Rock",
    "Classic Rock",
    "Adult Hits",
    "Soft Rock",
    "Top 40",
    "Country",
    "Oldies",
    "Soft",
    "Nostalgia",
    "Jazz",
    "Classical",
    "R&B",
    "Soft R&B",
    "Foreign Language",
    "Religious Music",
    "Religious Talk",
    "Personality",
    "Public",
    "College",
    "Spanish Talk",
    "Spanish Music",
    "Hip-Hop",
    "Unassigned",
    "Unassigned",
    "Weather",
    "Emergency Test",
    "Emergency",
];

/// Label for a 5-bit PTY code. `pty` values ≥ 32 can't occur on the wire
/// (the field is masked to 5 bits before it ever reaches here) but are
/// handled defensively anyway.
pub fn label(pty: u8, is_rbds: bool) -> Option<&'static str> {
    let table = if is_rbds { &RBDS } else { &RDS };
    table.get(pty as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rds_and_rbds_diverge_on_the_same_code() {
        assert_eq!(label(2, false), Some("Affairs"));
        assert_eq!(label(2, true), Some("Information"));
    }

    #[test]
    fn out_of_range_is_absent() {
        assert_eq!(label(32, false), None);
    }
}
