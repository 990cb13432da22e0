//! Scoring module - points awarded per merge
//!
//! Small merges score their merged value. Once a merge produces a value above
//! [`EXPONENTIAL_SCORE_THRESHOLD`] it scores the square of that value instead.
//! Classic 2048 always sums merged values; this ruleset does not.

use crate::types::EXPONENTIAL_SCORE_THRESHOLD;

/// Points for one merge producing `value`
///
/// # Examples
///
/// ```
/// use tile_merge_core::scoring::merge_score;
///
/// assert_eq!(merge_score(4), 4);
/// assert_eq!(merge_score(32), 32);
/// assert_eq!(merge_score(64), 4096);
/// ```
pub fn merge_score(value: u32) -> u64 {
    let value = value as u64;
    if value <= EXPONENTIAL_SCORE_THRESHOLD as u64 {
        value
    } else {
        value * value
    }
}

/// Add points to a running score without overflowing
pub fn add_score(score: u64, points: u64) -> u64 {
    score.saturating_add(points)
}
