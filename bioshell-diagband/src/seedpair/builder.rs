use crate::encoded::{EncodedSequences, ReadMode};
use crate::errors::DiagbandError;
use crate::kmer::{KmerPos, Segment, SegmentSource};
use crate::seedpair::{SeedPair, SeedPairList};

/// Histogram bins above this frequency are folded into the top bin, bounding the histogram's
/// size regardless of how permissive `maxfreq` is (§4.3).
const MAXGRAM_CAP: u64 = 8190;

/// Parameters governing how two k-mer lists are merged into seed pairs (§4.3).
#[derive(Debug, Clone)]
pub struct SeedPairParams {
    /// seed length `k`, used to derive the self-comparison overlap threshold
    pub seedlength: u32,
    /// `true` when the A-side and B-side k-mer lists were extracted from the same underlying
    /// sequence set and orientation, enabling self-comparison deduplication
    pub selfcomp: bool,
    /// `true` allows seeds that overlap by any amount; `false` requires non-overlapping seeds
    /// (the self-comparison gap becomes `1` instead of `seedlength`)
    pub overlapping_seeds: bool,
    /// user-supplied cap on k-mer frequency; `None` means unbounded (derive from `memlimit`
    /// instead, or accept everything if `memlimit` is also `None`)
    pub maxfreq: Option<u64>,
    /// memory budget in bytes for the resulting seed-pair list; when set, a histogram pass
    /// estimates the tightest `maxfreq` that fits before the real merge runs
    pub memlimit: Option<u64>,
    /// `true` when the A-side and B-side lists are literally the same list (affects the
    /// "memlimit too strict" threshold, per §4.3)
    pub alist_blist_identical: bool,
}

impl SeedPairParams {
    fn delta(&self) -> u32 {
        if self.overlapping_seeds { 1 } else { self.seedlength }
    }
}

/// Accepts a same-code `(a, b)` entry pair unless it is a redundant self-comparison: the same
/// sequence pair seen from the other side, or two seeds on the same sequence close enough to
/// be the same alignment seen twice (§4.3).
fn accept(selfcomp: bool, delta: u32, a: &KmerPos, b: &KmerPos) -> bool {
    !selfcomp
        || a.seqnum < b.seqnum
        || (a.seqnum == b.seqnum && a.endpos + delta <= b.endpos)
}

enum Sink<'a> {
    Histogram { histogram: &'a mut [u64], maxgram: u64 },
    Pairs(&'a mut Vec<SeedPair>),
}

fn process_equal_segment(a: &Segment, b: &Segment, params: &SeedPairParams, maxfreq: u64, sink: &mut Sink) {
    let alen = a.len() as u64;
    let blen = b.len() as u64;
    let frequency = alen.max(blen);
    if frequency > maxfreq {
        return;
    }
    let delta = params.delta();
    match sink {
        Sink::Histogram { histogram, maxgram } => {
            let bin = (frequency.min(*maxgram) - 1) as usize;
            if !params.selfcomp {
                histogram[bin] += alen * blen;
            } else {
                for ap in a.entries() {
                    for bp in b.entries() {
                        if accept(params.selfcomp, delta, ap, bp) {
                            histogram[bin] += 1;
                        }
                    }
                }
            }
        }
        Sink::Pairs(out) => {
            for ap in a.entries() {
                for bp in b.entries() {
                    if accept(params.selfcomp, delta, ap, bp) {
                        out.push(SeedPair { aseqnum: ap.seqnum, bseqnum: bp.seqnum, apos: ap.endpos, bpos: bp.endpos });
                    }
                }
            }
        }
    }
}

/// Walks two code-sorted segment sources in lockstep, advancing whichever side has the smaller
/// code, and dispatching every matching-code segment pair to `process_equal_segment` (§4.3).
fn merge_segments<A: SegmentSource, B: SegmentSource>(
    aiter: &mut A,
    biter: &mut B,
    params: &SeedPairParams,
    maxfreq: u64,
    sink: &mut Sink,
) {
    let mut aseg = aiter.next_segment();
    let mut bseg = biter.next_segment();
    loop {
        let (advance_a, advance_b) = match (&aseg, &bseg) {
            (Some(a), Some(b)) if a.code < b.code => (true, false),
            (Some(a), Some(b)) if a.code > b.code => (false, true),
            (Some(a), Some(b)) => {
                process_equal_segment(a, b, params, maxfreq, sink);
                (true, true)
            }
            _ => break,
        };
        if advance_a { aseg = aiter.next_segment(); }
        if advance_b { bseg = biter.next_segment(); }
    }
}

/// Derives the tightest `maxfreq` that keeps the resulting seed-pair list within `memlimit`
/// bytes, given a histogram of `frequency -> seed-pair count` accumulated over a first merge
/// pass, and returns an estimate of the list's size (seed-pair count if a frequency cap was
/// found, otherwise the minimum bytes required, for use in an error message) (§4.3).
fn process_histogram(
    histogram: &mut [u64],
    maxfreq: &mut u64,
    maxgram: u64,
    memlimit: u64,
    mem_used: u64,
    alist_blist_identical: bool,
) -> u64 {
    let seed_pair_size = std::mem::size_of::<SeedPair>() as u64;
    let mem_avail_total = (0.98 * memlimit as f64) as u64;
    let mem_avail = if mem_avail_total > mem_used {
        (mem_avail_total - mem_used) / seed_pair_size
    } else {
        *maxfreq = 0;
        0
    };

    let mut count = 0u64;
    if mem_avail > 0 {
        let mut frequency = 1u64;
        while frequency <= maxgram && count < mem_avail {
            count += histogram[(frequency - 1) as usize];
            frequency += 1;
        }
        if count > mem_avail {
            frequency -= 2;
            count -= histogram[frequency as usize];
        } else if frequency == maxgram + 1 {
            frequency = u64::MAX;
        }
        *maxfreq = (*maxfreq).min(frequency);
    }

    if *maxfreq <= 1 && alist_blist_identical {
        count = (histogram[0] + histogram.get(1).copied().unwrap_or(0)) * seed_pair_size;
        count = ((count + mem_used) as f64 / 0.98) as u64;
    } else if *maxfreq == 0 {
        count = histogram[0] * seed_pair_size;
        count = ((count + mem_used) as f64 / 0.98) as u64;
    }
    count
}

/// Merges two code-sorted k-mer lists into a sorted, frequency-filtered [`SeedPairList`] (§4.3).
///
/// When `params.memlimit` is set, a first pass over both sources builds a frequency histogram
/// instead of materializing pairs, derives the tightest `maxfreq` that keeps the real list
/// within budget, then rewinds both sources for the real merge. `mem_used_bytes` is the memory
/// already committed to the k-mer lists themselves, subtracted from the budget before it is
/// divided up among candidate seed pairs.
pub fn build_seed_pairs<A: SegmentSource, B: SegmentSource>(
    aiter: &mut A,
    biter: &mut B,
    params: &SeedPairParams,
    mem_used_bytes: u64,
) -> Result<SeedPairList, DiagbandError> {
    let mut maxfreq = params.maxfreq.unwrap_or(u64::MAX);

    if let Some(memlimit) = params.memlimit {
        let maxgram = maxfreq.min(MAXGRAM_CAP) + 1;
        let mut histogram = vec![0u64; (maxgram + 1) as usize];
        merge_segments(aiter, biter, params, maxfreq, &mut Sink::Histogram { histogram: &mut histogram, maxgram });
        aiter.reset();
        biter.reset();

        let mlen = process_histogram(&mut histogram, &mut maxfreq, maxgram, memlimit, mem_used_bytes, params.alist_blist_identical);
        if maxfreq == 0 || (maxfreq == 1 && params.alist_blist_identical) {
            return Err(DiagbandError::MemlimitTooStrict { required_mb: (mlen >> 20) + 1 });
        }
    }

    let mut pairs = Vec::new();
    merge_segments(aiter, biter, params, maxfreq, &mut Sink::Pairs(&mut pairs));
    let mut list = SeedPairList::new(pairs);
    list.sort();
    Ok(list)
}

fn decode_window(store: &EncodedSequences, seqnum: usize, mode: ReadMode, endpos: usize, seedlength: usize) -> String {
    let view = store.sequence_view(seqnum, mode);
    let start = endpos + 1 - seedlength;
    (start..=endpos).map(|p| view.char(p) as char).collect()
}

/// Re-decodes each seed pair's A-side and B-side substrings from the original sequences and
/// checks they are identical, catching any bug in k-mer extraction or seed-pair assembly before
/// the alignment stages build on top of bogus seeds (§4.3, §9).
pub fn verify_seed_pairs(
    pairs: &SeedPairList,
    a_store: &EncodedSequences,
    b_store: &EncodedSequences,
    b_mode: ReadMode,
    seedlength: usize,
) -> Result<(), DiagbandError> {
    for p in pairs.entries() {
        let a_substring = decode_window(a_store, p.aseqnum as usize, ReadMode::Forward, p.apos as usize, seedlength);
        let b_substring = decode_window(b_store, p.bseqnum as usize, b_mode, p.bpos as usize, seedlength);
        if a_substring != b_substring {
            return Err(DiagbandError::SeedPairVerificationFailed {
                aseqnum: p.aseqnum,
                bseqnum: p.bseqnum,
                apos: p.apos,
                bpos: p.bpos,
                a_substring,
                b_substring,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kmer::InMemorySegments;

    fn params(selfcomp: bool, overlapping: bool) -> SeedPairParams {
        SeedPairParams {
            seedlength: 4,
            selfcomp,
            overlapping_seeds: overlapping,
            maxfreq: None,
            memlimit: None,
            alist_blist_identical: selfcomp,
        }
    }

    #[test]
    fn merges_matching_codes_into_pairs() {
        let a = vec![KmerPos { code: 5, seqnum: 0, endpos: 3 }];
        let b = vec![KmerPos { code: 5, seqnum: 0, endpos: 3 }];
        let mut ai = InMemorySegments::new(&a);
        let mut bi = InMemorySegments::new(&b);
        let list = build_seed_pairs(&mut ai, &mut bi, &params(false, true), 0).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.entries()[0], SeedPair { aseqnum: 0, bseqnum: 0, apos: 3, bpos: 3 });
    }

    #[test]
    fn non_matching_codes_produce_no_pairs() {
        let a = vec![KmerPos { code: 1, seqnum: 0, endpos: 0 }];
        let b = vec![KmerPos { code: 2, seqnum: 0, endpos: 0 }];
        let mut ai = InMemorySegments::new(&a);
        let mut bi = InMemorySegments::new(&b);
        let list = build_seed_pairs(&mut ai, &mut bi, &params(false, true), 0).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn self_comparison_drops_symmetric_and_overlapping_duplicates() {
        // same sequence, same code at two positions: (0,0) and (0,0) themselves, plus a
        // same-seq pair close enough to be the same seed seen from the other side
        let entries = vec![
            KmerPos { code: 9, seqnum: 0, endpos: 0 },
            KmerPos { code: 9, seqnum: 0, endpos: 1 },
            KmerPos { code: 9, seqnum: 1, endpos: 5 },
        ];
        let mut ai = InMemorySegments::new(&entries);
        let mut bi = InMemorySegments::new(&entries);
        // non-overlapping seeds (delta = seedlength = 4): endpos 0 and 1 are within 4 of each
        // other on the same sequence, so both directions are suppressed except seqnum 0 -> 1
        let list = build_seed_pairs(&mut ai, &mut bi, &params(true, false), 0).unwrap();
        for p in list.entries() {
            assert!(p.aseqnum < p.bseqnum || (p.aseqnum == p.bseqnum && p.apos + 4 <= p.bpos));
        }
    }

    #[test]
    fn frequency_above_maxfreq_is_skipped() {
        let a = vec![
            KmerPos { code: 1, seqnum: 0, endpos: 0 },
            KmerPos { code: 1, seqnum: 1, endpos: 0 },
            KmerPos { code: 1, seqnum: 2, endpos: 0 },
        ];
        let b = vec![KmerPos { code: 1, seqnum: 0, endpos: 0 }];
        let mut ai = InMemorySegments::new(&a);
        let mut bi = InMemorySegments::new(&b);
        let mut p = params(false, true);
        p.maxfreq = Some(2);
        let list = build_seed_pairs(&mut ai, &mut bi, &p, 0).unwrap();
        assert!(list.is_empty(), "frequency 3 exceeds maxfreq 2, so the whole code group is skipped");
    }

    #[test]
    fn memlimit_too_strict_reports_required_megabytes() {
        let a = vec![
            KmerPos { code: 1, seqnum: 0, endpos: 0 },
            KmerPos { code: 1, seqnum: 1, endpos: 0 },
        ];
        let b = vec![
            KmerPos { code: 1, seqnum: 0, endpos: 0 },
            KmerPos { code: 1, seqnum: 1, endpos: 0 },
        ];
        let mut ai = InMemorySegments::new(&a);
        let mut bi = InMemorySegments::new(&b);
        let mut p = params(false, true);
        p.memlimit = Some(1); // one byte: nothing fits
        let result = build_seed_pairs(&mut ai, &mut bi, &p, 0);
        assert!(matches!(result, Err(DiagbandError::MemlimitTooStrict { .. })));
    }

    #[test]
    fn verify_accepts_matching_seed_pairs_and_rejects_mismatches() {
        let a_store = EncodedSequences::from_sequences(&["ACGTACGT"]);
        let b_store = EncodedSequences::from_sequences(&["ACGTACGT"]);
        let good = SeedPairList::new(vec![SeedPair { aseqnum: 0, bseqnum: 0, apos: 3, bpos: 3 }]);
        assert!(verify_seed_pairs(&good, &a_store, &b_store, ReadMode::Forward, 4).is_ok());

        let bad = SeedPairList::new(vec![SeedPair { aseqnum: 0, bseqnum: 0, apos: 3, bpos: 4 }]);
        let err = verify_seed_pairs(&bad, &a_store, &b_store, ReadMode::Forward, 4).unwrap_err();
        assert!(matches!(err, DiagbandError::SeedPairVerificationFailed { .. }));
    }
}
