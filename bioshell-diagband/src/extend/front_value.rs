use std::ops::{BitOr, BitOrAssign};

/// Which of the three edit operations a [`FrontValue`] was reached by, as an OR-able bit set:
/// two (or all three) operations can tie for the same best `row`, in which case every tied
/// operation's bit is kept (§4.5, §9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BackrefBits(u8);

impl BackrefBits {
    /// no predecessor recorded yet (only the seed's initial FrontValue uses this)
    pub const NONE: BackrefBits = BackrefBits(0);
    /// reached by a deletion (a step in U only)
    pub const DELETION: BackrefBits = BackrefBits(1);
    /// reached by an insertion (a step in V only)
    pub const INSERTION: BackrefBits = BackrefBits(2);
    /// reached by a mismatch (a step in both U and V that did not match)
    pub const MISMATCH: BackrefBits = BackrefBits(4);

    /// `true` if `self` has every bit set in `other`.
    pub fn contains(self, other: BackrefBits) -> bool { self.0 & other.0 == other.0 }
}

impl BitOr for BackrefBits {
    type Output = BackrefBits;
    fn bitor(self, rhs: BackrefBits) -> BackrefBits { BackrefBits(self.0 | rhs.0) }
}

impl BitOrAssign for BackrefBits {
    fn bitor_assign(&mut self, rhs: BackrefBits) { self.0 |= rhs.0; }
}

/// One live diagonal's state during front-prune extension (§3, §4.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontValue {
    /// farthest position reached along U on this diagonal
    pub row: u32,
    /// matches appended by the most recent greedy-extend step
    pub localmatch_count: u8,
    /// sliding window of the last `matchhistory_size` comparisons; low bit = most recent,
    /// 1 = match. Bits above `matchhistory_size` are undefined.
    pub matchhistory_bits: u64,
    /// number of comparisons represented in `matchhistory_bits` so far, capped at `H`
    pub matchhistory_size: u8,
    /// popcount of the *filled* portion of `matchhistory_bits`
    pub matchhistory_count: u8,
    /// which edit operation(s) produced this entry from the previous distance
    pub backref: BackrefBits,
    /// largest number of mismatches along any path reaching this entry
    pub max_mismatches: u32,
}

impl FrontValue {
    /// The FrontValue a seed of length `seedlength` starts extension from: `row = 0`, and a
    /// match history pre-filled with `min(H, seedlength)` guaranteed matches, since the seed
    /// itself is an exact match of that length (§4.5).
    pub fn seed(seedlength: u32, max_history: u8) -> FrontValue {
        let filled = (seedlength as u32).min(max_history as u32) as u8;
        let bits = if filled == 0 { 0 } else { (1u64 << filled) - 1 };
        FrontValue {
            row: 0,
            localmatch_count: 0,
            matchhistory_bits: bits,
            matchhistory_size: filled,
            matchhistory_count: filled,
            backref: BackrefBits::NONE,
            max_mismatches: 0,
        }
    }

    /// Shifts `matched` into the low bit of the match-history window, updating `size`/`count`
    /// to match.
    ///
    /// The window's dropout accounting inspects the bit about to fall off the top *before*
    /// shifting, not after -- the ordering called out as an easy-to-miscode off-by-one in §9.
    /// Folding both the match- and non-match-step update rules (`front_prune_add_matches`'s
    /// inline accounting and the `GT_UPDATE_MATCH_HISTORY` macro in the original, respectively)
    /// into one function is possible because they differ only in whether the incoming bit is a
    /// 1 or a 0.
    pub fn push_history_bit(&mut self, matched: bool, max_history: u8) {
        if self.matchhistory_size == max_history {
            let leftmost = 1u64 << (max_history - 1);
            let dropped_was_match = self.matchhistory_bits & leftmost != 0;
            if matched {
                if !dropped_was_match { self.matchhistory_count += 1; }
            } else if dropped_was_match {
                self.matchhistory_count -= 1;
            }
        } else {
            self.matchhistory_size += 1;
            if matched { self.matchhistory_count += 1; }
        }
        self.matchhistory_bits = (self.matchhistory_bits << 1) | matched as u64;
    }

    /// `alignedlen = 2*row + diagonal`, the combined U+V progress on this diagonal.
    pub fn aligned_len(&self, diagonal: i64) -> i64 { 2 * self.row as i64 + diagonal }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_prefills_history_with_min_of_history_size_and_seedlength() {
        let short_history = FrontValue::seed(10, 4);
        assert_eq!(short_history.matchhistory_size, 4);
        assert_eq!(short_history.matchhistory_count, 4);
        assert_eq!(short_history.matchhistory_bits, 0b1111);

        let long_history = FrontValue::seed(3, 64);
        assert_eq!(long_history.matchhistory_size, 3);
        assert_eq!(long_history.matchhistory_count, 3);
        assert_eq!(long_history.matchhistory_bits, 0b111);
    }

    #[test]
    fn popcount_of_filled_window_always_equals_count() {
        let mut fv = FrontValue::seed(4, 8);
        let steps = [true, false, true, true, false, false, true, true, false, true];
        for &m in &steps {
            fv.push_history_bit(m, 8);
            let mask = (1u64 << fv.matchhistory_size) - 1;
            assert_eq!((fv.matchhistory_bits & mask).count_ones() as u8, fv.matchhistory_count);
        }
    }

    #[test]
    fn dropout_only_decrements_when_the_bit_about_to_fall_off_was_a_match() {
        // fill an 4-bit window with all matches, then push a non-match: the dropped (top) bit
        // was a match, so count must decrement
        let mut fv = FrontValue::seed(4, 4);
        assert_eq!(fv.matchhistory_count, 4);
        fv.push_history_bit(false, 4);
        assert_eq!(fv.matchhistory_size, 4);
        assert_eq!(fv.matchhistory_count, 3);

        // now the window is 1110 (size 4, count 3); push another non-match. The top bit about
        // to drop is the leftmost of "1110" at position 3, which is 1, so count drops again
        fv.push_history_bit(false, 4);
        assert_eq!(fv.matchhistory_count, 2);
    }

    #[test]
    fn backref_bits_are_orable_and_queryable() {
        let mut bits = BackrefBits::DELETION;
        bits |= BackrefBits::MISMATCH;
        assert!(bits.contains(BackrefBits::DELETION));
        assert!(bits.contains(BackrefBits::MISMATCH));
        assert!(!bits.contains(BackrefBits::INSERTION));
    }
}
