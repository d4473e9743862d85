//! Codeforces 4A "Watermelon": can a weight `w` be split into two parts
//! that are both positive and even?

use crate::domain::model::Verdict;
use crate::utils::error::{CfuError, Result};
use std::io::{Read, Write};

/// True iff `w` is even and greater than 2.
pub fn can_divide(w: i32) -> bool {
    w > 2 && w % 2 == 0
}

pub fn verdict(w: i32) -> Verdict {
    Verdict::from(can_divide(w))
}

/// Reads the first whitespace-delimited token as `w`. Anything after it is ignored.
pub fn parse_weight(input: &str) -> Result<i32> {
    let token = input
        .split_whitespace()
        .next()
        .ok_or_else(|| CfuError::input("no integer found in input"))?;

    token
        .parse::<i32>()
        .map_err(|e| CfuError::input(format!("'{}' is not a valid integer ({})", token, e)))
}

/// Reads `w` from `reader` and writes `YES` or `NO` to `writer`.
/// Nothing is written when the input does not parse.
pub fn solve<R: Read, W: Write>(mut reader: R, mut writer: W) -> Result<Verdict> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;
    let input = std::str::from_utf8(&raw)
        .map_err(|e| CfuError::input(format!("input is not valid UTF-8 ({})", e)))?;

    let w = parse_weight(input)?;
    let answer = verdict(w);
    tracing::debug!("w = {} -> {}", w, answer);

    writeln!(writer, "{}", answer)?;
    writer.flush()?;
    Ok(answer)
}
