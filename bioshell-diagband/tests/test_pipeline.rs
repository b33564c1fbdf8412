//! End-to-end seed-suite scenarios run through `driver::run`, in the style of
//! `bioshell-seq/tests/test_aligners.rs`.

use bioshell_diagband::driver::{run, DriverConfig, Strand};
use bioshell_diagband::encoded::EncodedSequences;

fn base_config() -> DriverConfig {
    DriverConfig {
        seedlength: 4,
        logdiagbandwidth: 1,
        mincoverage: 8,
        userdefinedleastlength: 1,
        history_size: 16,
        ..DriverConfig::default()
    }
}

#[test]
fn trivial_identity_reports_one_full_diagonal_alignment() {
    let store = EncodedSequences::from_sequences(&["ACGTACGTACGT"]);
    let mut cfg = base_config();
    cfg.norev = true;

    let records = run(&store, &store, &cfg).unwrap();
    assert!(records.iter().any(|r| r.alen == 12 && r.blen == 12 && r.editdist == 0));
}

#[test]
fn single_snp_is_reported_with_the_expected_identity() {
    let a = EncodedSequences::from_sequences(&["AAAACCCCGGGGTTTT"]);
    let b = EncodedSequences::from_sequences(&["AAAACCCCTGGGTTTT"]);
    let mut cfg = base_config();
    cfg.seedlength = 5;
    cfg.norev = true;

    let records = run(&a, &b, &cfg).unwrap();
    assert!(!records.is_empty());
    let best = records.iter().max_by_key(|r| r.alen).unwrap();
    assert_eq!(best.editdist, 1);
    assert!(best.alen >= 10);
    let identity_percent = best.identity_centipercent as f64 / 100.0;
    assert!(identity_percent > 85.0 && identity_percent < 100.0);
}

#[test]
fn self_compare_never_reports_the_trivial_self_pair() {
    let store = EncodedSequences::from_sequences(&["ACACACACAC"]);
    let mut cfg = base_config();
    cfg.seedlength = 2;
    cfg.userdefinedleastlength = 1;
    cfg.norev = true;

    let records = run(&store, &store, &cfg).unwrap();
    assert!(records.iter().all(|r| !(r.astartpos == r.bstartpos && r.alen <= 2)));
}

#[test]
fn frequency_cap_below_the_repeat_count_suppresses_all_output() {
    let repeated: String = "AAAA".repeat(10_000);
    let a = EncodedSequences::from_sequences(&[repeated.clone()]);
    let b = EncodedSequences::from_sequences(&[repeated]);
    let mut cfg = base_config();
    cfg.seedlength = 4;
    cfg.maxfreq = 100;
    cfg.norev = true;

    let records = run(&a, &b, &cfg).unwrap();
    assert!(records.is_empty());
}

#[test]
fn reverse_complement_only_pass_finds_a_palindromic_match() {
    let a = EncodedSequences::from_sequences(&["ACGTACGT"]);
    let b = EncodedSequences::from_sequences(&["ACGTACGT"]);
    let mut cfg = base_config();
    cfg.seedlength = 4;
    cfg.nofwd = true;
    cfg.norev = false;

    let records = run(&a, &b, &cfg).unwrap();
    assert!(records.iter().any(|r| r.strand == Strand::Reverse && r.alen >= 6));
}

#[test]
fn diverged_sequences_still_complete_without_runaway_extension() {
    // 40% uniformly distributed mismatches baked in by hand (deterministic, no RNG dependency).
    let a: String = "ACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGT"
        .chars()
        .take(80)
        .collect();
    let mut b_bytes: Vec<u8> = a.bytes().collect();
    for (i, byte) in b_bytes.iter_mut().enumerate() {
        if i % 5 == 0 {
            *byte = match *byte {
                b'A' => b'C',
                b'C' => b'G',
                b'G' => b'T',
                b'T' => b'A',
                other => other,
            };
        }
    }
    let b = String::from_utf8(b_bytes).unwrap();

    let a_store = EncodedSequences::from_sequences(&[a]);
    let b_store = EncodedSequences::from_sequences(&[b]);
    let mut cfg = base_config();
    cfg.seedlength = 4;
    cfg.errorpercentage = 10;
    cfg.norev = true;

    // must terminate and must not report an alignment longer than either input sequence.
    let records = run(&a_store, &b_store, &cfg).unwrap();
    for record in &records {
        assert!(record.alen <= 80);
        assert!(record.blen <= 80);
    }
}

#[test]
fn seedlength_longer_than_every_sequence_yields_no_seed_pairs() {
    let store = EncodedSequences::from_sequences(&["ACGT", "TTTT"]);
    let mut cfg = base_config();
    cfg.seedlength = 20;

    let records = run(&store, &store, &cfg).unwrap();
    assert!(records.is_empty());
}

#[test]
fn zero_common_kmers_completes_with_empty_output_not_an_error() {
    let a = EncodedSequences::from_sequences(&["AAAAAAAAAAAA"]);
    let b = EncodedSequences::from_sequences(&["CCCCCCCCCCCC"]);
    let records = run(&a, &b, &base_config()).unwrap();
    assert!(records.is_empty());
}

#[test]
fn memlimit_too_strict_for_a_huge_repeat_surfaces_as_an_explicit_error() {
    let repeated: String = "AAAA".repeat(5_000);
    let a = EncodedSequences::from_sequences(&[repeated.clone()]);
    let b = EncodedSequences::from_sequences(&[repeated]);
    let mut cfg = base_config();
    cfg.seedlength = 4;
    cfg.memlimit = 1;
    cfg.norev = true;

    let err = run(&a, &b, &cfg).unwrap_err();
    assert!(matches!(err, bioshell_diagband::DiagbandError::MemlimitTooStrict { .. }));
}
