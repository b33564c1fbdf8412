/// The farthest well-supported endpoint an extension reached (§3, §4.5).
///
/// Updated monotonically in `alignedlen` as extension proceeds; the final value is the
/// extension's result, even when the wavefront eventually dies out before reaching either
/// sequence's end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PolishedPoint {
    /// `2*row + diagonal` at this point -- the combined U+V progress
    pub alignedlen: i64,
    /// row (U-progress) at this point
    pub row: u32,
    /// edit distance at which this point was recorded
    pub distance: u32,
    /// number of diagonals trimmed from the low end of the front at the time this point was
    /// recorded (kept for traceback bookkeeping; this crate does not reconstruct a full
    /// alignment trace, so it is otherwise unused)
    pub trimleft: usize,
    /// largest mismatch count along any path reaching this point
    pub max_mismatches: u32,
}

/// A fixed acceptance template over the most recent `2*cut_depth` match-history bits, biased by
/// `bias` (§4.5, §6's `matchscore_bias`).
///
/// The original implementation's exact bit template (`ft-polish.c`) was not available to ground
/// this against; what is documented (and preserved here) is the *shape* of the check: the
/// window is zero-extended up to `2*cut_depth` bits if the history is still shorter than that,
/// then the count of 1-bits in that window is required to meet a `cut_depth`-derived threshold
/// adjusted by `bias`.
#[derive(Debug, Clone, Copy)]
pub struct PolishingTemplate {
    /// half the width (in comparisons) of the window this template judges
    pub cut_depth: u32,
    /// shifts the acceptance threshold; a positive bias makes polishing easier
    pub bias: i32,
}

impl PolishingTemplate {
    /// `true` if `matchhistory_bits`, interpreted over a window of `matchhistory_size` real
    /// comparisons (zero-extended to `2*cut_depth` bits if shorter), has enough 1-bits to count
    /// as a polished endpoint.
    pub fn is_polished(&self, matchhistory_bits: u64, _matchhistory_size: u8) -> bool {
        let window_bits = 2 * self.cut_depth;
        // the unset high bits of `matchhistory_bits` are already 0, i.e. zero-extended, so no
        // branching on `matchhistory_size` is needed here
        let mask = if window_bits >= 64 { u64::MAX } else { (1u64 << window_bits) - 1 };
        let matches = (matchhistory_bits & mask).count_ones() as i32;
        matches + self.bias >= self.cut_depth as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_matching_window_is_always_polished() {
        let template = PolishingTemplate { cut_depth: 4, bias: 0 };
        assert!(template.is_polished(0xFF, 8));
    }

    #[test]
    fn sparse_window_fails_without_bias() {
        let template = PolishingTemplate { cut_depth: 4, bias: 0 };
        // only 2 of 8 bits set, need >= 4
        assert!(!template.is_polished(0b0000_0101, 8));
    }

    #[test]
    fn positive_bias_can_rescue_a_sparse_window() {
        let template = PolishingTemplate { cut_depth: 4, bias: 3 };
        assert!(template.is_polished(0b0000_0101, 8));
    }

    #[test]
    fn short_history_is_zero_extended_not_rejected_outright() {
        let template = PolishingTemplate { cut_depth: 2, bias: 0 };
        // only 2 comparisons made so far, both matches; window width is 4, so the 2 unset
        // high bits count as non-matches, leaving exactly cut_depth=2 matches
        assert!(template.is_polished(0b11, 2));
    }
}
