/// Which strand of a sequence a reader walks: as stored, or reverse-complemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Read bases in storage order.
    Forward,
    /// Read bases from the last to the first, complementing each one.
    Complement,
}

/// Complements a 2-bit base code (`A=0, C=1, G=2, T=3`).
///
/// `A` and `T` pair up, as do `C` and `G`; both pairs are symmetric around `1.5`, so
/// complementing is a single subtraction from `3`.
#[inline]
pub fn complement_code(code: u8) -> u8 { 3 - code }

/// Maps an ASCII base character to its 2-bit code, or `None` for anything that isn't one of
/// the four unambiguous DNA bases (this is what makes a position "special": an ambiguity code
/// such as `N`, or any other non-`ACGT` byte).
#[inline]
pub fn base_code(byte: u8) -> Option<u8> {
    match byte.to_ascii_uppercase() {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

/// A minimal, in-memory store for a concatenation of DNA sequences.
///
/// This is **not** a production encoded-sequence index: it does not two-bit pack its storage,
/// memory-map a file, or build any index structure. It exists to give the seed-and-extend
/// pipeline (and its tests) something concrete to run against, satisfying the read-only
/// interface the rest of this crate needs: total length, per-sequence boundaries, special
/// (ambiguous-base) accounting, and forward/reverse-complement character access.
#[derive(Debug, Clone)]
pub struct EncodedSequences {
    /// one contiguous buffer holding every sequence, back to back, with no separator bytes
    /// stored explicitly -- sequence boundaries are tracked in `starts`/`lengths` instead
    data: Vec<u8>,
    starts: Vec<u32>,
    lengths: Vec<u32>,
    total_special: u64,
}

impl EncodedSequences {
    /// Builds a store from a list of raw (ASCII) sequences.
    ///
    /// # Example
    /// ```
    /// use bioshell_diagband::encoded::EncodedSequences;
    /// let enc = EncodedSequences::from_sequences(&["ACGTACGT", "TTTT"]);
    /// assert_eq!(enc.num_sequences(), 2);
    /// assert_eq!(enc.total_length(), 12);
    /// ```
    pub fn from_sequences<S: AsRef<[u8]>>(sequences: &[S]) -> Self {
        let mut data = Vec::new();
        let mut starts = Vec::with_capacity(sequences.len());
        let mut lengths = Vec::with_capacity(sequences.len());
        let mut total_special = 0u64;
        for seq in sequences {
            let bytes = seq.as_ref();
            starts.push(data.len() as u32);
            lengths.push(bytes.len() as u32);
            for &b in bytes {
                if base_code(b).is_none() { total_special += 1; }
            }
            data.extend_from_slice(bytes);
        }
        EncodedSequences { data, starts, lengths, total_special }
    }

    /// Total number of bases across every sequence in this store.
    pub fn total_length(&self) -> u64 { self.data.len() as u64 }

    /// Number of sequences held by this store.
    pub fn num_sequences(&self) -> usize { self.starts.len() }

    /// Absolute start offset (inclusive) of sequence `seqnum`.
    pub fn seq_start(&self, seqnum: usize) -> u32 { self.starts[seqnum] }

    /// Length, in bases, of sequence `seqnum`.
    pub fn seq_length(&self, seqnum: usize) -> u32 { self.lengths[seqnum] }

    /// Shortest sequence length in this store, or 0 if it holds no sequences.
    pub fn min_seq_length(&self) -> u32 { self.lengths.iter().copied().min().unwrap_or(0) }

    /// Longest sequence length in this store, or 0 if it holds no sequences.
    pub fn max_seq_length(&self) -> u32 { self.lengths.iter().copied().max().unwrap_or(0) }

    /// Total number of special (non-`ACGT`) bases across every stored sequence.
    ///
    /// This store never materializes explicit separator bytes between sequences (unlike the
    /// `GtEncseq` this interface is modeled after), so "special" here means only ambiguous
    /// bases; a consumer that needs to test "is this absolute position a separator" should use
    /// [`Self::seqnum_at`] returning `None`, which cannot happen for positions inside
    /// `0..total_length()`.
    pub fn total_special_count(&self) -> u64 { self.total_special }

    /// Returns `true` if the base at `abspos` (forward orientation) is special (non-`ACGT`).
    pub fn is_special(&self, abspos: usize) -> bool { base_code(self.data[abspos]).is_none() }

    /// Raw forward-orientation character at an absolute position.
    pub fn char_forward(&self, abspos: usize) -> u8 { self.data[abspos] }

    /// Which sequence an absolute position belongs to, by linear scan over sequence starts.
    pub fn seqnum_at(&self, abspos: usize) -> usize {
        match self.starts.binary_search(&(abspos as u32)) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        }
    }

    /// A read-oriented view over one sequence, walking it forward or as its reverse complement.
    pub fn sequence_view(&self, seqnum: usize, mode: ReadMode) -> SequenceView<'_> {
        let start = self.starts[seqnum] as usize;
        let len = self.lengths[seqnum] as usize;
        SequenceView { bytes: &self.data[start..start + len], mode }
    }

    /// Decodes the forward substring `[start, start+len)` of sequence `seqnum` as a `String`.
    pub fn decode_forward(&self, seqnum: usize, start: usize, len: usize) -> String {
        let base = self.starts[seqnum] as usize;
        String::from_utf8_lossy(&self.data[base + start..base + start + len]).into_owned()
    }

    /// Decodes the reverse-complement substring of sequence `seqnum` that begins (in
    /// read-order) at `start` and spans `len` bases.
    pub fn decode_complement(&self, seqnum: usize, start: usize, len: usize) -> String {
        let view = self.sequence_view(seqnum, ReadMode::Complement);
        (start..start + len).map(|p| view.char(p) as char).collect()
    }
}

/// A read-oriented view over a single sequence's bytes.
///
/// Position `0` is always the first base in read order: for [`ReadMode::Forward`] that is the
/// sequence's own first base, for [`ReadMode::Complement`] it is the complement of the
/// sequence's *last* base. This lets the k-mer extractor and the front-prune extender use the
/// same position arithmetic regardless of strand.
pub struct SequenceView<'a> {
    bytes: &'a [u8],
    mode: ReadMode,
}

impl<'a> SequenceView<'a> {
    /// Number of bases in this view.
    pub fn len(&self) -> usize { self.bytes.len() }

    /// `true` if this view covers no bases.
    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }

    /// The 2-bit base code at read-order position `pos`, or `None` if that base is special.
    pub fn base_code(&self, pos: usize) -> Option<u8> {
        let raw = match self.mode {
            ReadMode::Forward => self.bytes[pos],
            ReadMode::Complement => self.bytes[self.bytes.len() - 1 - pos],
        };
        base_code(raw).map(|c| match self.mode {
            ReadMode::Forward => c,
            ReadMode::Complement => complement_code(c),
        })
    }

    /// The character at read-order position `pos`.
    pub fn char(&self, pos: usize) -> u8 {
        match self.base_code(pos) {
            Some(code) => [b'A', b'C', b'G', b'T'][code as usize],
            None => match self.mode {
                ReadMode::Forward => self.bytes[pos],
                ReadMode::Complement => self.bytes[self.bytes.len() - 1 - pos],
            },
        }
    }

    /// Two bases at read-order positions `a` and `b` match (both unambiguous and equal).
    pub fn matches(&self, a: usize, b: &SequenceView, b_pos: usize) -> bool {
        matches!((self.base_code(a), b.base_code(b_pos)), (Some(x), Some(y)) if x == y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_and_complement_views_agree_on_palindrome() {
        let enc = EncodedSequences::from_sequences(&["ACGTACGT"]);
        let fwd = enc.sequence_view(0, ReadMode::Forward);
        let rc = enc.sequence_view(0, ReadMode::Complement);
        let rc_string: String = (0..rc.len()).map(|p| rc.char(p) as char).collect();
        assert_eq!(rc_string, "ACGTACGT");
        assert_eq!(fwd.len(), 8);
    }

    #[test]
    fn complement_of_non_palindrome() {
        let enc = EncodedSequences::from_sequences(&["AACCGGTT"]);
        let rc = enc.sequence_view(0, ReadMode::Complement);
        let rc_string: String = (0..rc.len()).map(|p| rc.char(p) as char).collect();
        assert_eq!(rc_string, "AACCGGTT");
        let enc2 = EncodedSequences::from_sequences(&["AAAACCCC"]);
        let rc2 = enc2.sequence_view(0, ReadMode::Complement);
        let rc2_string: String = (0..rc2.len()).map(|p| rc2.char(p) as char).collect();
        assert_eq!(rc2_string, "GGGGTTTT");
    }

    #[test]
    fn special_bases_break_up_a_kmer_run() {
        let enc = EncodedSequences::from_sequences(&["ACGTNACGT"]);
        assert_eq!(enc.total_special_count(), 1);
        let view = enc.sequence_view(0, ReadMode::Forward);
        assert!(view.base_code(4).is_none());
        assert!(view.base_code(0).is_some());
    }
}
