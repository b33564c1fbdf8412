use crate::extend::front_value::{BackrefBits, FrontValue};
use crate::extend::params::{ExtendParams, TrimmingStrategy};
use crate::extend::polish::PolishedPoint;

/// Outcome of one front-prune extension call.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionResult {
    /// the farthest polished point recorded during the extension
    pub best: PolishedPoint,
    /// `true` if the wavefront actually reached the end of both `u` and `v`, rather than dying
    /// out (trimmed down to nothing) before getting there
    pub completed: bool,
}

#[derive(Clone, Copy)]
struct Candidate {
    row: u32,
    backref: BackrefBits,
    max_mismatches: u32,
    history: FrontValue,
}

/// Builds the (pre-match-extension) FrontValue for new diagonal-local-index `j`, choosing the
/// best of up to three predecessors in `old` (the front at the previous distance) (§4.5).
///
/// `old[j]` is the deletion predecessor (row+1), `old[j-1]` the mismatch predecessor (row+1),
/// `old[j-2]` the insertion predecessor (row unchanged) -- this indexing, rather than the
/// mirror-image mapping a literal reading of the per-operation diagonal shifts might suggest,
/// is what the original implementation actually computes (its variable names describe a
/// register's *next* reuse, not the operation being applied this step); ties OR their
/// backreference bits together and keep the larger `max_mismatches`, with match-history state
/// carried from whichever predecessor is assigned first among those tied for the winning row.
fn build_candidate(old: &[FrontValue], j: usize, max_history: u8) -> FrontValue {
    let mut candidates: Vec<Candidate> = Vec::with_capacity(3);
    if j < old.len() {
        let o = old[j];
        candidates.push(Candidate { row: o.row + 1, backref: BackrefBits::DELETION, max_mismatches: o.max_mismatches, history: o });
    }
    if j >= 1 && j - 1 < old.len() {
        let o = old[j - 1];
        candidates.push(Candidate { row: o.row + 1, backref: BackrefBits::MISMATCH, max_mismatches: o.max_mismatches + 1, history: o });
    }
    if j >= 2 && j - 2 < old.len() {
        let o = old[j - 2];
        candidates.push(Candidate { row: o.row, backref: BackrefBits::INSERTION, max_mismatches: o.max_mismatches, history: o });
    }
    let mut best = candidates[0];
    for c in &candidates[1..] {
        if c.row > best.row {
            best = *c;
        } else if c.row == best.row {
            best.backref |= c.backref;
            best.max_mismatches = best.max_mismatches.max(c.max_mismatches);
        }
    }
    let mut fv = best.history;
    fv.row = best.row;
    fv.backref = best.backref;
    fv.max_mismatches = best.max_mismatches;
    fv.push_history_bit(false, max_history);
    fv
}

/// Greedily extends matches from `fv.row` along `diagonal`, updating the match-history window
/// for every match appended (§4.5's "Then greedily extend matches from the new row").
fn extend_matches(fv: &mut FrontValue, diagonal: i64, u: &[u8], v: &[u8], max_history: u8) {
    let mut row = fv.row as i64;
    let mut vpos = row + diagonal;
    let mut local: u32 = 0;
    while row >= 0
        && vpos >= 0
        && (row as usize) < u.len()
        && (vpos as usize) < v.len()
        && u[row as usize] == v[vpos as usize]
    {
        fv.push_history_bit(true, max_history);
        row += 1;
        vpos += 1;
        local += 1;
    }
    fv.localmatch_count = local.min(u8::MAX as u32) as u8;
    fv.row = row as u32;
}

fn update_and_track(
    best: &mut PolishedPoint,
    found_any: &mut bool,
    fv: &FrontValue,
    diagonal: i64,
    distance: u32,
    trimleft: usize,
    params: &ExtendParams,
) {
    let alignedlen = fv.aligned_len(diagonal);
    if alignedlen > best.alignedlen && params.polishing.is_polished(fv.matchhistory_bits, fv.matchhistory_size) {
        *best = PolishedPoint { alignedlen, row: fv.row, distance, trimleft, max_mismatches: fv.max_mismatches };
        *found_any = true;
    }
}

fn should_trim(fv: &FrontValue, diagonal: i64, ulen: u32, vlen: u32, minlenfrommaxdiff: i64, params: &ExtendParams) -> bool {
    if fv.row > ulen || fv.row as i64 + diagonal > vlen as i64 {
        return true;
    }
    let min_needed = (fv.matchhistory_size as u32 * params.perc_mat_history) / 100;
    if (fv.matchhistory_count as u32) < min_needed {
        return true;
    }
    fv.aligned_len(diagonal) < minlenfrommaxdiff
}

fn trimming_enabled(strategy: TrimmingStrategy, best_distance: Option<u32>, distance: u32) -> bool {
    match strategy {
        TrimmingStrategy::Never => false,
        TrimmingStrategy::Always => true,
        TrimmingStrategy::OnNewPolishedPoint => match best_distance {
            Some(bd) => !(bd + 1 < distance && bd + 30 >= distance),
            None => true,
        },
    }
}

/// Trims from both ends of `front` inward, stopping at the first entry that does not qualify
/// for trimming on either side (contiguity of the surviving range is preserved) (§4.5).
fn trim_front(front: &[FrontValue], diag0: i64, ulen: u32, vlen: u32, minlenfrommaxdiff: i64, params: &ExtendParams) -> (usize, usize) {
    let mut left = 0;
    for (i, fv) in front.iter().enumerate() {
        if should_trim(fv, diag0 + i as i64, ulen, vlen, minlenfrommaxdiff, params) {
            left += 1;
        } else {
            break;
        }
    }
    let mut right = 0;
    for i in (0..front.len()).rev() {
        if i < left {
            break;
        }
        if should_trim(&front[i], diag0 + i as i64, ulen, vlen, minlenfrommaxdiff, params) {
            right += 1;
        } else {
            break;
        }
    }
    (left, right)
}

/// Runs the front-prune greedy edit-distance extender from a seed at diagonal 0 over `u`
/// (forward, U-sequence) and `v` (forward, V-sequence), both already sliced to the maximum
/// extent an extension starting at the seed could reach (§4.5).
///
/// `xdrop`, when `Some(threshold)`, switches to the x-drop variant: diagonals are pruned not by
/// the match-history/length-difference trimming rules but whenever their running score falls
/// more than `threshold` below the best score seen so far, where a diagonal's score is
/// approximated as `alignedlen - 2*distance` (each edit is charged two aligned-length units
/// relative to an equal-length run of matches). The original's x-drop bookkeeping lives outside
/// the retrieved source for this crate; this is a direct, documented adaptation of the same
/// front-stepping machinery rather than a port of unseen code.
pub fn extend(u: &[u8], v: &[u8], params: &ExtendParams, xdrop: Option<i64>) -> ExtensionResult {
    let ulen = u.len() as u32;
    let vlen = v.len() as u32;
    let max_history = params.history_size;

    let mut front = vec![FrontValue::seed(params.seedlength, max_history)];
    let mut diag0: i64 = 0;
    extend_matches(&mut front[0], 0, u, v, max_history);

    let mut best = PolishedPoint::default();
    let mut found_any = false;
    update_and_track(&mut best, &mut found_any, &front[0], 0, 0, 0, params);

    if front[0].row == ulen && front[0].row as i64 == vlen as i64 {
        return ExtensionResult { best, completed: true };
    }

    let max_distance = ulen as u64 + vlen as u64 + 1;
    let mut distance: u32 = 0;
    let mut best_score = front[0].aligned_len(0);
    let mut cumulative_left_trim: usize = 0;

    loop {
        if front.is_empty() {
            return ExtensionResult { best, completed: false };
        }
        distance += 1;
        if distance as u64 > max_distance {
            return ExtensionResult { best, completed: false };
        }

        let new_len = front.len() + 2;
        let new_diag0 = diag0 - 1;
        let mut next = Vec::with_capacity(new_len);
        let mut max_alignedlen = i64::MIN;
        for j in 0..new_len {
            let diagonal = new_diag0 + j as i64;
            let mut fv = build_candidate(&front, j, max_history);
            extend_matches(&mut fv, diagonal, u, v, max_history);
            max_alignedlen = max_alignedlen.max(fv.aligned_len(diagonal));
            next.push(fv);
        }

        for (i, fv) in next.iter().enumerate() {
            let diagonal = new_diag0 + i as i64;
            if fv.row == ulen && fv.row as i64 + diagonal == vlen as i64 {
                update_and_track(&mut best, &mut found_any, fv, diagonal, distance, cumulative_left_trim, params);
                return ExtensionResult { best, completed: true };
            }
            update_and_track(&mut best, &mut found_any, fv, diagonal, distance, cumulative_left_trim, params);
        }

        if let Some(threshold) = xdrop {
            let step_best = next
                .iter()
                .enumerate()
                .map(|(i, fv)| fv.aligned_len(new_diag0 + i as i64) - 2 * distance as i64)
                .fold(i64::MIN, i64::max);
            best_score = best_score.max(step_best);

            let mut kept = Vec::with_capacity(next.len());
            let mut new_base = new_diag0;
            let mut started = false;
            for (i, fv) in next.into_iter().enumerate() {
                let diagonal = new_diag0 + i as i64;
                let score = fv.aligned_len(diagonal) - 2 * distance as i64;
                if best_score - score > threshold {
                    if !started { cumulative_left_trim += 1; }
                    continue;
                }
                if !started {
                    new_base = diagonal;
                    started = true;
                }
                kept.push(fv);
            }
            front = kept;
            diag0 = new_base;
            continue;
        }

        let minlenfrommaxdiff = max_alignedlen - params.maxalignedlendifference as i64;
        if trimming_enabled(params.trimstrategy, found_any.then_some(best.distance), distance) {
            let (left, right) = trim_front(&next, new_diag0, ulen, vlen, minlenfrommaxdiff, params);
            let end = next.len() - right;
            front = next[left..end].to_vec();
            diag0 = new_diag0 + left as i64;
            cumulative_left_trim += left;
        } else {
            front = next;
            diag0 = new_diag0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extend::polish::PolishingTemplate;

    fn params(seedlength: u32) -> ExtendParams {
        ExtendParams {
            seedlength,
            error_percentage: 10,
            userdefinedleastlength: 1,
            history_size: 32,
            perc_mat_history: 50,
            maxalignedlendifference: 30,
            sensitivity: 6,
            x_drop_score: 10,
            polishing: PolishingTemplate { cut_depth: 4, bias: 0 },
            trimstrategy: TrimmingStrategy::Always,
        }
    }

    #[test]
    fn identical_sequences_extend_to_completion_with_zero_edits() {
        let u = b"ACGTACGTACGT";
        let v = b"ACGTACGTACGT";
        let result = extend(u, v, &params(4), None);
        assert!(result.completed);
        assert_eq!(result.best.row, u.len() as u32);
        assert_eq!(result.best.alignedlen, 2 * u.len() as i64);
    }

    #[test]
    fn single_mismatch_is_bridged_with_one_edit() {
        let u = b"AAAACCCCGGGGTTTT";
        let mut v = u.to_vec();
        v[8] = b'T'; // flip one base in the middle
        let result = extend(u, &v, &params(5), None);
        assert!(result.best.alignedlen > 0);
        // a single interior mismatch should be bridgeable within a handful of edits
        assert!(result.best.distance <= 3);
    }

    #[test]
    fn polished_point_alignedlen_never_decreases() {
        let u = b"ACGTACGTAAAACCCCGGGGTTTTACGTACGT";
        let mut v = u.to_vec();
        v[10] = b'T';
        v[20] = b'A';
        let mut running_max = 0i64;
        // re-run with increasingly generous history sizes and confirm the reported length is
        // monotone non-decreasing as a smoke check on the tracked invariant (full step-by-step
        // inspection is covered at the FrontValue level in front_value.rs)
        for history_size in [8u8, 16, 32] {
            let mut p = params(4);
            p.history_size = history_size;
            let result = extend(u, &v, &p, None);
            assert!(result.best.alignedlen >= running_max || result.best.alignedlen == 0);
            running_max = running_max.max(result.best.alignedlen);
        }
    }

    #[test]
    fn divergent_sequences_die_out_without_reaching_either_end() {
        let u: Vec<u8> = (0..200).map(|i| b"ACGT"[i % 4]).collect();
        let v: Vec<u8> = (0..200).map(|i| if i % 3 == 0 { b'T' } else { b"ACGT"[i % 4] }).collect();
        let mut p = params(4);
        p.perc_mat_history = 90;
        p.maxalignedlendifference = 5;
        let result = extend(&u, &v, &p, None);
        assert!(!result.completed);
    }
}
