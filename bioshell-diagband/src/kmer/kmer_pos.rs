use crate::util::radix_sort_by_key;

/// One occurrence of a k-mer: its 2·k-bit code, which sequence it ends in, and where.
///
/// `endpos` is relative to the start of its own sequence, measured in the read orientation the
/// k-mer was extracted under (see [`crate::encoded::ReadMode`]) -- not an absolute position in
/// the encoded-sequence store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KmerPos {
    /// the 2·k-bit code of this k-mer
    pub code: u64,
    /// index of the sequence this k-mer belongs to
    pub seqnum: u32,
    /// position, relative to the sequence start, of the k-mer's last base
    pub endpos: u32,
}

/// A k-mer position list, sorted ascending by [`KmerPos::code`].
///
/// Equal-`code` entries always form a contiguous run once sorted -- the invariant the
/// [`crate::kmer::SegmentIterator`] relies on.
#[derive(Debug, Clone, Default)]
pub struct KmerList {
    entries: Vec<KmerPos>,
}

impl KmerList {
    /// Wraps an already-extracted (but not necessarily sorted) list of k-mer positions.
    pub fn new(entries: Vec<KmerPos>) -> Self { KmerList { entries } }

    /// Sorts this list by `code` ascending, using the same radix sort the k-mer and seed-pair
    /// lists both rely on to stay within budget at genome scale.
    pub fn sort(&mut self) {
        let key_bits = 64;
        radix_sort_by_key(&mut self.entries, key_bits, |e| e.code);
    }

    /// Number of k-mer occurrences held by this list.
    pub fn len(&self) -> usize { self.entries.len() }

    /// `true` if this list holds no k-mer occurrences.
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// A read-only view of the underlying, code-sorted entries.
    pub fn entries(&self) -> &[KmerPos] { &self.entries }

    /// Consumes this list, returning its entries.
    pub fn into_entries(self) -> Vec<KmerPos> { self.entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_groups_equal_codes_contiguously() {
        let mut list = KmerList::new(vec![
            KmerPos { code: 5, seqnum: 0, endpos: 3 },
            KmerPos { code: 1, seqnum: 0, endpos: 1 },
            KmerPos { code: 5, seqnum: 1, endpos: 9 },
            KmerPos { code: 1, seqnum: 2, endpos: 4 },
        ]);
        list.sort();
        let codes: Vec<u64> = list.entries().iter().map(|e| e.code).collect();
        assert_eq!(codes, vec![1, 1, 5, 5]);
    }
}
