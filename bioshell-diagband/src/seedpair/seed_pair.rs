use crate::util::radix_sort_by_key;

/// A single shared k-mer occurrence between an A-side and a B-side sequence.
///
/// `apos`/`bpos` are the (sequence-relative) end positions of the matching k-mer on each side,
/// in the same orientation the k-mer lists that produced this pair were built under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPair {
    /// index of the A-side sequence
    pub aseqnum: u32,
    /// index of the B-side sequence
    pub bseqnum: u32,
    /// end position of the seed on the A side
    pub apos: u32,
    /// end position of the seed on the B side
    pub bpos: u32,
}

/// A seed-pair list, sorted by `(aseqnum, bseqnum, bpos)` ascending.
#[derive(Debug, Clone, Default)]
pub struct SeedPairList {
    entries: Vec<SeedPair>,
}

impl SeedPairList {
    /// Wraps an unsorted list of seed pairs.
    pub fn new(entries: Vec<SeedPair>) -> Self { SeedPairList { entries } }

    /// Sorts this list by `(aseqnum, bseqnum, bpos)` ascending (§4.3, §9).
    ///
    /// The source packs this as a single 128-bit radix key; since our radix sort keys on
    /// `u64`, we instead run three stable LSD passes in reverse field priority (`bpos`, then
    /// `bseqnum`, then `aseqnum`). Each pass is a full radix sort of a single 32-bit field, and
    /// because every pass is stable, the order established by an earlier (lower-priority)
    /// pass survives untouched among entries the later pass considers equal -- the standard
    /// way to build a multi-key radix sort out of single-key passes.
    pub fn sort(&mut self) {
        radix_sort_by_key(&mut self.entries, 32, |p| p.bpos as u64);
        radix_sort_by_key(&mut self.entries, 32, |p| p.bseqnum as u64);
        radix_sort_by_key(&mut self.entries, 32, |p| p.aseqnum as u64);
    }

    /// Number of seed pairs in this list.
    pub fn len(&self) -> usize { self.entries.len() }

    /// `true` if this list holds no seed pairs.
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// A read-only view of the sorted entries.
    pub fn entries(&self) -> &[SeedPair] { &self.entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_aseqnum_then_bseqnum_then_bpos() {
        let mut list = SeedPairList::new(vec![
            SeedPair { aseqnum: 1, bseqnum: 0, apos: 0, bpos: 5 },
            SeedPair { aseqnum: 0, bseqnum: 1, apos: 0, bpos: 2 },
            SeedPair { aseqnum: 0, bseqnum: 0, apos: 0, bpos: 9 },
            SeedPair { aseqnum: 0, bseqnum: 0, apos: 0, bpos: 1 },
        ]);
        list.sort();
        let keys: Vec<(u32, u32, u32)> =
            list.entries().iter().map(|p| (p.aseqnum, p.bseqnum, p.bpos)).collect();
        assert_eq!(keys, vec![(0, 0, 1), (0, 0, 9), (0, 1, 2), (1, 0, 5)]);
    }

    #[test]
    fn sort_is_idempotent() {
        let mut list = SeedPairList::new(vec![
            SeedPair { aseqnum: 2, bseqnum: 2, apos: 3, bpos: 100_000 },
            SeedPair { aseqnum: 2, bseqnum: 2, apos: 3, bpos: 1 },
            SeedPair { aseqnum: 1, bseqnum: 9, apos: 0, bpos: 0 },
        ]);
        list.sort();
        let once: Vec<SeedPair> = list.entries().to_vec();
        list.sort();
        let twice: Vec<SeedPair> = list.entries().to_vec();
        assert_eq!(once, twice);
    }
}
