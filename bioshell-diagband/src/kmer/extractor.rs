use crate::encoded::{EncodedSequences, ReadMode};
use crate::kmer::{KmerList, KmerPos};
use std::ops::RangeInclusive;

/// Walks every sequence in `seq_range` and emits a [`KmerPos`] for every valid (special-free)
/// k-mer of length `k`, reading each sequence under `mode`.
///
/// Corresponds to §4.1 of the specification. A k-mer can never span a separator (it would not
/// be a contiguous substring of either collection's actual DNA), so extraction naturally
/// proceeds one sequence at a time rather than across the whole concatenated window the
/// original C implementation scans in a single pass; the same k-mers are produced either way.
/// Within a sequence, a rolling code is maintained over a run of unambiguous bases and reset
/// to empty whenever a special (non-`ACGT`) base is crossed -- this is the "k-mer code
/// enumeration primitive" the specification treats as an external collaborator, kept here as a
/// small private routine rather than a general-purpose abstraction.
pub fn extract_kmers(
    store: &EncodedSequences,
    seq_range: RangeInclusive<usize>,
    mode: ReadMode,
    k: usize,
) -> KmerList {
    debug_assert!(k >= 1 && k <= 32, "seedlength must fit in a 64-bit code");
    let mask: u64 = if k == 32 { u64::MAX } else { (1u64 << (2 * k)) - 1 };

    // ---------- precompute expected size, §4.1
    let numofseq = seq_range.clone().count() as u64;
    let mut numofpos = 0u64;
    let mut totalspecial = 0u64;
    for seqnum in seq_range.clone() {
        let len = store.seq_length(seqnum) as u64;
        numofpos += len;
    }
    totalspecial = store.total_special_count();
    let totalpos = store.total_length().max(1);
    let expected = numofpos.saturating_sub(
        (numofseq.saturating_mul(k as u64)).max(totalspecial.saturating_mul(numofpos) / totalpos),
    );

    let mut out: Vec<KmerPos> = Vec::with_capacity(expected as usize);

    for seqnum in seq_range {
        let view = store.sequence_view(seqnum, mode);
        let len = view.len();
        if len < k { continue; }

        let mut code: u64 = 0;
        let mut run = 0usize; // consecutive unambiguous bases seen so far
        for pos in 0..len {
            match view.base_code(pos) {
                Some(b) => {
                    code = ((code << 2) | b as u64) & mask;
                    run += 1;
                    if run >= k {
                        out.push(KmerPos { code, seqnum: seqnum as u32, endpos: pos as u32 });
                    }
                }
                None => {
                    run = 0;
                    code = 0;
                }
            }
        }
    }

    KmerList::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_extraction_emits_one_kmer_per_window() {
        let store = EncodedSequences::from_sequences(&["ACGTACGT"]);
        let list = extract_kmers(&store, 0..=0, ReadMode::Forward, 4);
        // 8 - 4 + 1 = 5 windows
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn special_base_suppresses_overlapping_kmers() {
        let store = EncodedSequences::from_sequences(&["ACGTNACGT"]);
        let list = extract_kmers(&store, 0..=0, ReadMode::Forward, 4);
        // windows [0..4) and those touching position 4 ('N') are invalid;
        // valid windows: positions 0-3 (ACGT) and 5-8 (ACGT) => 2 k-mers
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn seedlength_longer_than_sequence_yields_nothing() {
        let store = EncodedSequences::from_sequences(&["ACGT"]);
        let list = extract_kmers(&store, 0..=0, ReadMode::Forward, 10);
        assert!(list.is_empty());
    }

    #[test]
    fn complement_mode_extracts_from_reverse_complement() {
        let store = EncodedSequences::from_sequences(&["AAAACCCC"]);
        let fwd = extract_kmers(&store, 0..=0, ReadMode::Forward, 4);
        let rc = extract_kmers(&store, 0..=0, ReadMode::Complement, 4);
        assert_eq!(fwd.len(), rc.len());
        // reverse complement of AAAACCCC is GGGGTTTT, whose only unique 4-mers differ from
        // the forward strand's
        let fwd_codes: std::collections::HashSet<u64> =
            fwd.entries().iter().map(|e| e.code).collect();
        let rc_codes: std::collections::HashSet<u64> =
            rc.entries().iter().map(|e| e.code).collect();
        assert_ne!(fwd_codes, rc_codes);
    }
}
