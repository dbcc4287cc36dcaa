// src/cli/parsers.rs
use std::str::FromStr;

use novel_count_shared_kernel::TextRange;

/// Selection given as `START..END` (half-open); `START..` is not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeArg(pub TextRange);

impl FromStr for RangeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .trim()
            .split_once("..")
            .ok_or_else(|| format!("Invalid range '{s}': expected START..END"))?;
        let start = parse_offset(start, s)?;
        let end = parse_offset(end, s)?;
        if start > end {
            return Err(format!("Invalid range '{s}': start is greater than end"));
        }
        Ok(Self(TextRange::new(start, end)))
    }
}

fn parse_offset(part: &str, whole: &str) -> Result<usize, String> {
    let part = part.trim().replace('_', "");
    part.parse().map_err(|_| format!("Invalid offset '{part}' in range '{whole}'"))
}
