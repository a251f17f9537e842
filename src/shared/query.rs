// src/shared/query.rs
use serde::Serialize;

pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 100;
pub const DEFAULT_OFFSET: u32 = 0;

/// Page window forwarded upstream. Out-of-range or unparsable values fall back
/// to the defaults instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl Pagination {
    pub fn from_raw(limit: Option<&str>, offset: Option<&str>) -> Self {
        let limit = limit
            .and_then(|l| l.trim().parse::<u32>().ok())
            .filter(|l| (1..=MAX_LIMIT).contains(l))
            .unwrap_or(DEFAULT_LIMIT);

        let offset = offset
            .and_then(|o| o.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_OFFSET);

        Self { limit, offset }
    }
}

/// Boolean query flag. Accepts the usual spellings; anything else is false.
pub fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim(), "1" | "t" | "T" | "true" | "TRUE" | "True")
}

/// Treats empty query values the same as absent ones.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_absent() {
        assert_eq!(Pagination::from_raw(None, None), Pagination::default());
        assert_eq!(Pagination::default().limit, 20);
        assert_eq!(Pagination::default().offset, 0);
    }

    #[test]
    fn accepts_values_in_range() {
        let page = Pagination::from_raw(Some("100"), Some("40"));
        assert_eq!(page, Pagination { limit: 100, offset: 40 });

        let page = Pagination::from_raw(Some("1"), Some("0"));
        assert_eq!(page, Pagination { limit: 1, offset: 0 });
    }

    #[test]
    fn out_of_range_values_fall_back() {
        assert_eq!(Pagination::from_raw(Some("0"), None).limit, 20);
        assert_eq!(Pagination::from_raw(Some("101"), None).limit, 20);
        assert_eq!(Pagination::from_raw(Some("-5"), None).limit, 20);
        assert_eq!(Pagination::from_raw(None, Some("-1")).offset, 0);
    }

    #[test]
    fn unparsable_values_fall_back() {
        let page = Pagination::from_raw(Some("ten"), Some("1.5"));
        assert_eq!(page, Pagination::default());
    }

    #[test]
    fn parse_flag_spellings() {
        for raw in ["1", "t", "T", "true", "TRUE", "True"] {
            assert!(parse_flag(raw), "{raw} should be true");
        }
        for raw in ["0", "false", "no", "yes", ""] {
            assert!(!parse_flag(raw), "{raw} should be false");
        }
    }

    #[test]
    fn non_empty_drops_blank_strings() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("x".into())), Some("x".into()));
        assert_eq!(non_empty(None), None);
    }
}
