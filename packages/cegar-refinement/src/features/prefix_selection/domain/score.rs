//! Score arithmetic
//!
//! Scores are plain integers where smaller is better. `SENTINEL` marks a
//! prefix that cannot be meaningfully scored and always sorts last, for MIN
//! and MAX heuristics alike.

/// Integer score produced by a scorer (smaller is preferred)
pub type Score = i32;

/// "Not scoreable / least preferred" marker
pub const SENTINEL: Score = Score::MAX;

/// Check whether a score is the sentinel
#[inline]
pub fn is_sentinel(score: Score) -> bool {
    score == SENTINEL
}

/// Negate a score for MAX-oriented heuristics.
///
/// `SENTINEL` stays `SENTINEL`. `Score::MIN` has no finite negation and is
/// mapped to `SENTINEL` as well.
#[inline]
pub fn invert_score(score: Score) -> Score {
    if is_sentinel(score) {
        return SENTINEL;
    }
    score.checked_neg().unwrap_or(SENTINEL)
}

/// Convert a prefix measurement into a score.
///
/// Values beyond the score range saturate to the largest finite score, so a
/// very long prefix is never confused with an unscoreable one.
#[inline]
pub fn score_from_count(count: usize) -> Score {
    Score::try_from(count).map_or(SENTINEL - 1, |s| s.min(SENTINEL - 1))
}

/// Add two finite scores, saturating below the sentinel
#[inline]
pub fn saturating_score_add(lhs: Score, rhs: Score) -> Score {
    lhs.saturating_add(rhs).min(SENTINEL - 1)
}
