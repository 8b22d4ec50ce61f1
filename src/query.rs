//! Size range parsing and combined search descriptions

use crate::error::{PithError, Result};

/// Closed size interval. Bounds may be reversed; the size index normalizes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRange {
    pub min: u64,
    pub max: u64,
}

impl SizeRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Parse `N`, `A..B`, `A..` or `..B`, with optional units (`10K`, `1.5mb`).
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PithError::SizeParse("requires a value".to_string()));
        }

        let Some(split) = trimmed.find("..") else {
            let value = parse_size_literal(trimmed)?;
            return Ok(Self::new(value, value));
        };

        let start = trimmed[..split].trim();
        let end = trimmed[split + 2..].trim();
        if start.is_empty() && end.is_empty() {
            return Err(PithError::SizeParse(
                "a range needs at least one bound".to_string(),
            ));
        }

        let min = if start.is_empty() {
            0
        } else {
            parse_size_literal(start)?
        };
        let max = if end.is_empty() {
            u64::MAX
        } else {
            parse_size_literal(end)?
        };
        Ok(Self::new(min, max))
    }

    pub fn contains(&self, size: u64) -> bool {
        let (lo, hi) = if self.min > self.max {
            (self.max, self.min)
        } else {
            (self.min, self.max)
        };
        (lo..=hi).contains(&size)
    }
}

/// What to look up in a `FileIndex`. Absent parts do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Search {
    pub size: Option<SizeRange>,
    pub prefix: Option<String>,
}

/// Parse a byte count such as `512`, `10K`, `1.5MB` or `2gib`.
pub fn parse_size_literal(raw: &str) -> Result<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PithError::SizeParse("expected a number".to_string()));
    }

    let split = trimmed
        .char_indices()
        .find(|(_, ch)| !(ch.is_ascii_digit() || *ch == '.'))
        .map_or(trimmed.len(), |(index, _)| index);
    let (number_part, unit_part) = trimmed.split_at(split);
    if number_part.is_empty() {
        return Err(PithError::SizeParse(format!(
            "expected a numeric value in {raw:?}"
        )));
    }

    let multiplier = size_unit_multiplier(unit_part)?;

    // Plain integers stay exact; only fractional values go through f64.
    if let Ok(whole) = number_part.parse::<u64>() {
        return Ok(whole.saturating_mul(multiplier));
    }

    let value: f64 = number_part
        .parse()
        .map_err(|_| PithError::SizeParse(format!("failed to parse number in {raw:?}")))?;
    let bytes = (value * multiplier as f64).round();
    if !bytes.is_finite() || bytes < 0.0 {
        return Err(PithError::SizeParse(format!("{raw:?} is out of range")));
    }
    if bytes >= u64::MAX as f64 {
        Ok(u64::MAX)
    } else {
        Ok(bytes as u64)
    }
}

fn size_unit_multiplier(unit: &str) -> Result<u64> {
    match unit.trim().to_ascii_lowercase().as_str() {
        "" | "b" | "byte" | "bytes" => Ok(1),
        "k" | "kb" | "kib" => Ok(1024),
        "m" | "mb" | "mib" => Ok(1024 * 1024),
        "g" | "gb" | "gib" => Ok(1024 * 1024 * 1024),
        "t" | "tb" | "tib" => Ok(1024_u64.pow(4)),
        _ => Err(PithError::SizeParse(format!("unknown size unit: {unit}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_value() {
        assert_eq!(SizeRange::parse("42").unwrap(), SizeRange::new(42, 42));
        assert_eq!(SizeRange::parse(" 0 ").unwrap(), SizeRange::new(0, 0));
    }

    #[test]
    fn test_parse_ranges() {
        assert_eq!(SizeRange::parse("2..4").unwrap(), SizeRange::new(2, 4));
        assert_eq!(SizeRange::parse("4..2").unwrap(), SizeRange::new(4, 2));
        assert_eq!(SizeRange::parse("10K..").unwrap(), SizeRange::new(10 * 1024, u64::MAX));
        assert_eq!(SizeRange::parse("..1m").unwrap(), SizeRange::new(0, 1024 * 1024));
        assert_eq!(SizeRange::parse("1 .. 2").unwrap(), SizeRange::new(1, 2));
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_size_literal("1.5K").unwrap(), 1536);
        assert_eq!(parse_size_literal("2gib").unwrap(), 2 * 1024 * 1024 * 1024);
        assert_eq!(parse_size_literal("3 bytes").unwrap(), 3);
        assert_eq!(parse_size_literal("1TB").unwrap(), 1024_u64.pow(4));
        assert_eq!(parse_size_literal("18446744073709551615").unwrap(), u64::MAX);
        assert_eq!(parse_size_literal("99999999999T").unwrap(), u64::MAX);
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "..", "abc", "12X", "K", "1..zz", "1.2.3"] {
            assert!(
                matches!(SizeRange::parse(bad), Err(PithError::SizeParse(_))),
                "{:?} should fail",
                bad
            );
        }
    }

    #[test]
    fn test_contains_handles_reversed_bounds() {
        let range = SizeRange::new(10, 2);
        assert!(range.contains(2));
        assert!(range.contains(10));
        assert!(!range.contains(11));
        assert!(!range.contains(1));
    }
}
