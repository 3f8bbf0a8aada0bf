//! Language Code lookup. Entries 42..=65 have no assigned language in the
//! standard and resolve to "Unknown", same as any out-of-range code.

const LANGUAGE: [Option<&str>; 128] = [
    Some("Unknown"),
    Some("Albanian"),
    Some("Breton"),
    Some("Catalan"),
    Some("Croatian"),
    Some("Welsh"),
    Some("Czech"),
    Some("Danish"),
    Some("German"),
    Some("English"),
    Some("Spanish"),
    Some("Esperanto"),
    Some("Estonian"),
    Some("Basque"),
    Some("Faroese"),
    Some("French"),
    Some("Frisian"),
    Some("Irish"),
    Some("Gaelic"),
    Some("Galician"),
    Some("Icelandic"),
    Some("Italian"),
    Some("Lappish"),
    Some("Latin"),
    Some("Latvian"),
    Some("Luxembourgian"),
    Some("Lithuanian"),
    Some("Hungarian"),
    Some("Maltese"),
    Some("Dutch"),
    Some("Norwegian"),
    Some("Occitan"),
    Some("Polish"),
    Some("Portuguese"),
    Some("Romanian"),
    Some("Ramansh"),
    Some("Serbian"),
    Some("Slovak"),
    Some("Slovene"),
    Some("Finnish"),
    Some("Swedish"),
    Some("Turkish"),
    Some("Flemish"),
    Some("Walloon"),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some("Zulu"),
    Some("Vietnamese"),
    Some("Uzbek"),
    Some("Urdu"),
    Some("Ukrainian"),
    Some("Thai"),
    Some("Telugu"),
    Some("Tatar"),
    Some("Tamil"),
    Some("Tadzhik"),
    Some("Swahili"),
    Some("Sranan Tongo"),
    Some("Somali"),
    Some("Sinhalese"),
    Some("Shona"),
    Some("Serbo-Croat"),
    Some("Ruthenian"),
    Some("Russian"),
    Some("Quechua"),
    Some("Pushtu"),
    Some("Punjabi"),
    Some("Persian"),
    Some("Papamiento"),
    Some("Oriya"),
    Some("Nepali"),
    Some("Ndebele"),
    Some("Marathi"),
    Some("Moldavian"),
    Some("Malaysian"),
    Some("Malagasay"),
    Some("Macedonian"),
    Some("Laotian"),
    Some("Korean"),
    Some("Khmer"),
    Some("Kazahkh"),
    Some("Kannada"),
    Some("Japanese"),
    Some("Indonesian"),
    Some("Hindi"),
    Some("Hebrew"),
    Some("Hausa"),
    Some("Gurani"),
    Some("Gujurati"),
    Some("Greek"),
    Some("Georgian"),
    Some("Fulani"),
    Some("Dani"),
    Some("Churash"),
    Some("Chinese"),
    Some("Burmese"),
    Some("Bulgarian"),
    Some("Bengali"),
    Some("Belorussian"),
    Some("Bambora"),
    Some("Azerbaijani"),
    Some("Assamese"),
    Some("Armenian"),
    Some("Arabic"),
    Some("Amharic"),
];

/// Label for an 8-bit Language Code. Codes above 127 can't occur (the field
/// is a single byte but the table only defines 0..=127) and fall back to
/// "Unknown" as well.
pub fn label(lc: u8) -> &'static str {
    LANGUAGE
        .get(lc as usize)
        .copied()
        .flatten()
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_code() {
        assert_eq!(label(9), "English");
    }

    #[test]
    fn gap_resolves_to_unknown() {
        assert_eq!(label(50), "Unknown");
    }

    #[test]
    fn last_entry() {
        assert_eq!(label(127), "Amharic");
    }
}
