use crate::driver::config::DriverConfig;
use crate::driver::output::{AlignmentRecord, Strand};
use crate::encoded::{EncodedSequences, ReadMode};
use crate::errors::DiagbandError;
use crate::extend::{extend_both_directions, ExtendParams, ExtenderMode};
use crate::kmer::{InMemorySegments, KmerList};
use crate::scorer::DiagbandScorer;
use crate::seedpair::{build_seed_pairs, verify_seed_pairs, SeedPair};

/// Materializes the read-order bytes of `view` over `range` as a plain `Vec<u8>`, since the
/// front-prune extender (§4.5) compares two byte slices directly. [`EncodedSequences`] is a
/// minimal, non-two-bit-packed store, so there is no contiguous slice to borrow across a
/// complement view; a short copy per triggering seed is an acceptable cost here (not the hot
/// per-distance-step loop the extender itself runs).
fn materialize_forward(view: &crate::encoded::SequenceView, from: usize) -> Vec<u8> {
    (from..view.len()).map(|p| view.char(p)).collect()
}

fn materialize_reversed(view: &crate::encoded::SequenceView, before: usize) -> Vec<u8> {
    (0..before).rev().map(|p| view.char(p)).collect()
}

/// Runs the extender outward from a triggering seed pair and, if the result clears
/// `userdefinedleastlength`, turns it into an [`AlignmentRecord`] (§4.4, §4.5, §6).
///
/// Returns the A-coordinate interval the caller (the diagonal-band scorer) should treat as
/// already covered, so that a later seed pair whose A-position falls inside it does not
/// re-trigger a redundant extension (§4.4's overlap suppression).
fn extend_and_record(
    a_store: &EncodedSequences,
    b_store: &EncodedSequences,
    pair: SeedPair,
    b_mode: ReadMode,
    cfg: &DriverConfig,
    extend_params: &ExtendParams,
    mode: ExtenderMode,
    out: &mut Vec<AlignmentRecord>,
) -> Option<(u32, u32)> {
    let k = cfg.seedlength as usize;
    let apos = pair.apos as usize;
    let bpos = pair.bpos as usize;
    let seed_a_start = apos + 1 - k;
    let seed_b_start = bpos + 1 - k;

    let a_view = a_store.sequence_view(pair.aseqnum as usize, ReadMode::Forward);
    let b_view = b_store.sequence_view(pair.bseqnum as usize, b_mode);

    let u_fwd = materialize_forward(&a_view, apos + 1);
    let v_fwd = materialize_forward(&b_view, bpos + 1);
    let u_rev = materialize_reversed(&a_view, seed_a_start);
    let v_rev = materialize_reversed(&b_view, seed_b_start);

    let (fwd, bwd) = extend_both_directions(mode, &u_fwd, &v_fwd, &u_rev, &v_rev, extend_params);

    let a_end = apos as i64 + fwd.best.row as i64;
    let b_end_ro = bpos as i64 + (fwd.best.alignedlen - fwd.best.row as i64);
    let a_start = seed_a_start as i64 - bwd.best.row as i64;
    let b_start_ro = seed_b_start as i64 - (bwd.best.alignedlen - bwd.best.row as i64);

    let alen = (a_end - a_start + 1) as u32;
    let blen = (b_end_ro - b_start_ro + 1) as u32;
    let editdist = fwd.best.distance + bwd.best.distance;

    if alen < cfg.userdefinedleastlength || blen < cfg.userdefinedleastlength {
        return None;
    }

    let max_len = alen.max(blen);
    // `errorpercentage` (relaxed by `weakends` upstream, see `DriverConfig::extend_params`)
    // bounds how many edits a reported alignment may carry relative to its own length; an
    // extension that cleared the length filter but drifted past this tolerance is discarded
    // rather than reported (§6's `errorpercentage`).
    let max_errors = (max_len as u64 * extend_params.error_percentage as u64) / 100;
    if editdist as u64 > max_errors {
        return None;
    }

    let (bstartpos, strand) = match b_mode {
        ReadMode::Forward => (b_start_ro as u32, Strand::Forward),
        ReadMode::Complement => {
            let b_seqlen = b_store.seq_length(pair.bseqnum as usize) as i64;
            ((b_seqlen - 1 - b_end_ro) as u32, Strand::Reverse)
        }
    };

    let identity_centipercent = if max_len == 0 {
        10_000
    } else {
        10_000u32.saturating_sub((editdist.saturating_mul(10_000)) / max_len)
    };
    let score = max_len as i64 - 2 * editdist as i64;

    out.push(AlignmentRecord {
        alen,
        aseq: pair.aseqnum,
        astartpos: a_start as u32,
        strand,
        blen,
        bseq: pair.bseqnum,
        bstartpos,
        score,
        editdist,
        identity_centipercent,
    });

    Some((a_start as u32, a_end as u32))
}

/// Runs the full scorer + extender pipeline (§4.4, §4.5) for one already-sorted pair of k-mer
/// lists on one strand, returning every accepted [`AlignmentRecord`] in sorted-SeedPair order.
pub fn run_strand(
    a_store: &EncodedSequences,
    b_store: &EncodedSequences,
    a_list: &KmerList,
    b_list: &KmerList,
    b_mode: ReadMode,
    selfcomp: bool,
    alist_blist_identical: bool,
    cfg: &DriverConfig,
) -> Result<Vec<AlignmentRecord>, DiagbandError> {
    let mem_used = ((a_list.len() + b_list.len()) * std::mem::size_of::<crate::kmer::KmerPos>()) as u64;
    let params = cfg.seed_pair_params(selfcomp, alist_blist_identical);

    let mut aiter = InMemorySegments::new(a_list.entries());
    let mut biter = InMemorySegments::new(b_list.entries());
    let seedpairs = build_seed_pairs(&mut aiter, &mut biter, &params, mem_used)?;

    if cfg.verify {
        verify_seed_pairs(&seedpairs, a_store, b_store, b_mode, cfg.seedlength as usize)?;
    }

    let amaxlen = a_store.max_seq_length();
    let bmaxlen = b_store.max_seq_length();
    let mut scorer = DiagbandScorer::new(amaxlen, bmaxlen, cfg.scorer_params());
    let extend_params = cfg.extend_params();
    let mode = cfg.extender_mode();

    let mut records = Vec::new();
    scorer.process_groups(seedpairs.entries(), |pair, _a_start, _b_start| {
        extend_and_record(a_store, b_store, pair, b_mode, cfg, &extend_params, mode, &mut records)
    });
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kmer::extract_kmers;

    fn cfg() -> DriverConfig {
        let mut c = DriverConfig::default();
        c.seedlength = 4;
        c.logdiagbandwidth = 2;
        c.mincoverage = 4;
        c.userdefinedleastlength = 1;
        c.history_size = 16;
        c
    }

    #[test]
    fn identical_single_sequences_produce_one_forward_alignment() {
        let store = EncodedSequences::from_sequences(&["ACGTACGTACGT"]);
        let mut a_list = extract_kmers(&store, 0..=0, ReadMode::Forward, 4);
        a_list.sort();
        let b_list = a_list.clone();

        let records = run_strand(&store, &store, &a_list, &b_list, ReadMode::Forward, true, true, &cfg()).unwrap();
        assert!(!records.is_empty());
        assert_eq!(records[0].alen, 12);
        assert_eq!(records[0].editdist, 0);
    }

    #[test]
    fn zero_common_kmers_yields_no_records() {
        let a_store = EncodedSequences::from_sequences(&["AAAAAAAAAAAA"]);
        let b_store = EncodedSequences::from_sequences(&["CCCCCCCCCCCC"]);
        let mut a_list = extract_kmers(&a_store, 0..=0, ReadMode::Forward, 4);
        a_list.sort();
        let mut b_list = extract_kmers(&b_store, 0..=0, ReadMode::Forward, 4);
        b_list.sort();

        let records = run_strand(&a_store, &b_store, &a_list, &b_list, ReadMode::Forward, false, false, &cfg()).unwrap();
        assert!(records.is_empty());
    }
}
