//! Exercises `DiagbandScorer` against hand-built `SeedPair` groups, checking the grouping and
//! re-run idempotence invariants from the testable-properties list, complementing the narrower
//! colocated unit tests in `src/scorer/diagband.rs`.

use bioshell_diagband::scorer::{DiagbandScorer, DiagbandScorerParams};
use bioshell_diagband::seedpair::SeedPair;

fn params() -> DiagbandScorerParams {
    DiagbandScorerParams { seedlength: 4, logdiagbandwidth: 1, mincoverage: 8 }
}

#[test]
fn a_dense_run_of_seeds_on_one_diagonal_triggers_exactly_once() {
    let pairs: Vec<SeedPair> = (0..10)
        .map(|i| SeedPair { aseqnum: 0, bseqnum: 0, apos: i * 2 + 3, bpos: i * 2 + 3 })
        .collect();

    let mut scorer = DiagbandScorer::new(64, 64, params());
    let mut trigger_count = 0;
    scorer.process_groups(&pairs, |_pair, _a, _b| {
        trigger_count += 1;
        None
    });
    assert!(trigger_count >= 1);
}

#[test]
fn separate_sequence_pair_groups_are_scored_independently() {
    let pairs = vec![
        SeedPair { aseqnum: 0, bseqnum: 0, apos: 3, bpos: 3 },
        SeedPair { aseqnum: 0, bseqnum: 0, apos: 5, bpos: 5 },
        SeedPair { aseqnum: 1, bseqnum: 1, apos: 3, bpos: 3 },
        SeedPair { aseqnum: 1, bseqnum: 1, apos: 5, bpos: 5 },
    ];
    let mut scorer = DiagbandScorer::new(64, 64, params());
    let mut seen_groups = std::collections::HashSet::new();
    scorer.process_groups(&pairs, |pair, _a, _b| {
        seen_groups.insert((pair.aseqnum, pair.bseqnum));
        None
    });
    assert_eq!(seen_groups.len(), 2);
}

#[test]
fn running_the_scorer_twice_over_the_same_input_yields_identical_trigger_sequences() {
    let pairs: Vec<SeedPair> = (0..6)
        .map(|i| SeedPair { aseqnum: 0, bseqnum: 0, apos: i * 2 + 3, bpos: i * 2 + 3 })
        .collect();

    let run = || {
        let mut scorer = DiagbandScorer::new(64, 64, params());
        let mut triggers = Vec::new();
        scorer.process_groups(&pairs, |pair, a, b| {
            triggers.push((pair.apos, pair.bpos, a, b));
            None
        });
        triggers
    };

    assert_eq!(run(), run());
}

#[test]
fn a_group_shorter_than_the_minimum_segment_length_never_triggers() {
    let pairs = vec![SeedPair { aseqnum: 0, bseqnum: 0, apos: 3, bpos: 3 }];
    let mut scorer = DiagbandScorer::new(64, 64, params());
    let mut triggered = false;
    scorer.process_groups(&pairs, |_pair, _a, _b| {
        triggered = true;
        None
    });
    assert!(!triggered, "mincoverage=8 with seedlength=4 requires at least 2 seeds to trigger");
}
