// MCC Region Table
// Source: ITU-T E.212 geographic MCC ranges
//
// The first digit of a Mobile Country Code identifies its ITU region.
// Digits 1 and 8 are unassigned and have no region.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    /// Leading MCC digit
    pub code: char,
    /// Region name, as stored on records
    pub name: &'static str,
}

/// All MCC regions, ordered by leading digit
pub const REGIONS: &[Region] = &[
    Region { code: '0', name: "Test networks" },
    Region { code: '2', name: "Europe" },
    Region { code: '3', name: "North America and the Caribbean" },
    Region { code: '4', name: "Asia and the Middle East" },
    Region { code: '5', name: "Oceania" },
    Region { code: '6', name: "Africa" },
    Region { code: '7', name: "South and Central America" },
    Region { code: '9', name: "Worldwide" },
];

/// Region name for an MCC, keyed by its first character
pub fn get_region(mcc: Option<&str>) -> Option<&'static str> {
    let first = mcc?.chars().next()?;
    REGIONS.iter().find(|r| r.code == first).map(|r| r.name)
}

/// Look up a region by its exact name
pub fn get_region_by_name(name: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.name == name)
}

pub fn all_regions() -> &'static [Region] {
    REGIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_region() {
        assert_eq!(get_region(Some("310")), Some("North America and the Caribbean"));
        assert_eq!(get_region(Some("234")), Some("Europe"));
        assert_eq!(get_region(Some("001")), Some("Test networks"));
        assert_eq!(get_region(Some("901")), Some("Worldwide"));
    }

    #[test]
    fn test_get_region_absent() {
        assert_eq!(get_region(None), None);
        assert_eq!(get_region(Some("")), None);
        assert_eq!(get_region(Some("123")), None); // 1xx unassigned
        assert_eq!(get_region(Some("800")), None);
    }

    #[test]
    fn test_region_by_name() {
        assert_eq!(get_region_by_name("Europe").map(|r| r.code), Some('2'));
        assert!(get_region_by_name("europe").is_none()); // exact match only
        assert!(get_region_by_name("Atlantis").is_none());
    }

    #[test]
    fn test_region_codes_unique() {
        for (i, a) in REGIONS.iter().enumerate() {
            for b in &REGIONS[i + 1..] {
                assert_ne!(a.code, b.code);
                assert_ne!(a.name, b.name);
            }
        }
    }
}
