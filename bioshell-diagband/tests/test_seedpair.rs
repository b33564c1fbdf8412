//! Cross-checks the seed-pair builder's sort order and self-comparison dedup rule using real
//! extracted k-mer lists, complementing the hand-built-entry unit tests colocated in
//! `src/seedpair/builder.rs`.

use bioshell_diagband::encoded::{EncodedSequences, ReadMode};
use bioshell_diagband::kmer::{extract_kmers, InMemorySegments};
use bioshell_diagband::seedpair::{build_seed_pairs, SeedPairParams};

fn params(selfcomp: bool) -> SeedPairParams {
    SeedPairParams {
        seedlength: 2,
        selfcomp,
        overlapping_seeds: false,
        maxfreq: None,
        memlimit: None,
        alist_blist_identical: selfcomp,
    }
}

#[test]
fn sorting_seed_pairs_twice_is_idempotent() {
    let store = EncodedSequences::from_sequences(&["ACACACACAC"]);
    let mut list = extract_kmers(&store, 0..=0, ReadMode::Forward, 2);
    list.sort();

    let mut a = InMemorySegments::new(list.entries());
    let mut b = InMemorySegments::new(list.entries());
    let mut pairs = build_seed_pairs(&mut a, &mut b, &params(true), 0).unwrap();

    let once: Vec<_> = pairs.entries().to_vec();
    pairs.sort();
    let twice: Vec<_> = pairs.entries().to_vec();
    assert_eq!(once, twice);
}

#[test]
fn self_pair_at_the_seed_itself_is_never_emitted() {
    let store = EncodedSequences::from_sequences(&["ACACACACAC"]);
    let mut list = extract_kmers(&store, 0..=0, ReadMode::Forward, 2);
    list.sort();

    let mut a = InMemorySegments::new(list.entries());
    let mut b = InMemorySegments::new(list.entries());
    let pairs = build_seed_pairs(&mut a, &mut b, &params(true), 0).unwrap();

    assert!(pairs.entries().iter().all(|p| !(p.aseqnum == p.bseqnum && p.apos == p.bpos)));
}

#[test]
fn non_self_comparison_keeps_every_matching_pair_including_identical_positions() {
    let a_store = EncodedSequences::from_sequences(&["ACAC"]);
    let b_store = EncodedSequences::from_sequences(&["ACAC"]);
    let mut a_list = extract_kmers(&a_store, 0..=0, ReadMode::Forward, 2);
    a_list.sort();
    let mut b_list = extract_kmers(&b_store, 0..=0, ReadMode::Forward, 2);
    b_list.sort();

    let mut a = InMemorySegments::new(a_list.entries());
    let mut b = InMemorySegments::new(b_list.entries());
    let pairs = build_seed_pairs(&mut a, &mut b, &params(false), 0).unwrap();
    assert!(!pairs.is_empty());
}
