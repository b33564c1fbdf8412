//! Banded greedy edit-distance extension from a triggering seed pair outward to both ends.

mod front_value;
mod greedy;
mod params;
mod polish;

pub use front_value::{BackrefBits, FrontValue};
pub use greedy::{extend, ExtensionResult};
pub use params::{ExtendParams, TrimmingStrategy};
pub use polish::{PolishedPoint, PolishingTemplate};

/// The greedy variant carries no extra state beyond `ExtendParams::trimstrategy`; it exists as
/// a unit struct so both variants of [`ExtenderMode`] read the same shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyState;

/// State for the x-drop variant: the score threshold a diagonal may trail the running best by
/// before it is dropped from the live front.
#[derive(Debug, Clone, Copy)]
pub struct XDropState {
    pub x_drop_score: i64,
}

/// Which extension algorithm to run from a triggering seed pair.
///
/// Both variants share the same front-prune stepping machinery in [`greedy::extend`]; they
/// differ only in how a diagonal gets dropped from the live front after each distance step.
#[derive(Debug, Clone, Copy)]
pub enum ExtenderMode {
    /// trims diagonals by match-history quality and lag behind the leading diagonal, per
    /// `ExtendParams::trimstrategy`
    Greedy(GreedyState),
    /// trims diagonals whenever their running score falls more than `x_drop_score` below the
    /// best score seen so far
    XDrop(XDropState),
}

/// Scales a configured x-drop threshold by `sensitivity` (§6's `sensitivity`): a higher
/// sensitivity rides out a wider score gap before a diagonal is pruned from the live front.
fn effective_xdrop_threshold(x_drop_score: i64, sensitivity: u32) -> i64 {
    x_drop_score.saturating_mul(sensitivity.max(1) as i64)
}

/// Extends an alignment outward from a seed in both directions: forward from the seed's end
/// through `u_fwd`/`v_fwd`, and forward again (conceptually backward) through the reversed
/// prefixes `u_rev`/`v_rev` ending at the seed's start. Returns the combined result.
///
/// Running the same forward extender over a reversed prefix to extend "backward" mirrors how
/// the original drives `front_prune_edist_inplace` twice per seed (once per direction) rather
/// than implementing a separate backward-stepping variant.
pub fn extend_both_directions(
    mode: ExtenderMode,
    u_fwd: &[u8],
    v_fwd: &[u8],
    u_rev: &[u8],
    v_rev: &[u8],
    params: &ExtendParams,
) -> (ExtensionResult, ExtensionResult) {
    let xdrop = match mode {
        ExtenderMode::Greedy(_) => None,
        ExtenderMode::XDrop(state) => Some(effective_xdrop_threshold(state.x_drop_score, params.sensitivity)),
    };
    let forward = greedy::extend(u_fwd, v_fwd, params, xdrop);
    let backward = greedy::extend(u_rev, v_rev, params, xdrop);
    (forward, backward)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ExtendParams {
        ExtendParams {
            seedlength: 4,
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
    fn both_directions_extend_a_seed_planted_mid_sequence() {
        let u = b"ACGTACGTAAAACCCCGGGGTTTT";
        let v = u.to_vec();
        // seed planted at the midpoint: split both sequences there and extend each half
        let mid = 12;
        let (u_fwd, u_rev_src) = u.split_at(mid);
        let (v_fwd, v_rev_src) = v.split_at(mid);
        let u_rev: Vec<u8> = u_rev_src.iter().rev().copied().collect();
        let v_rev: Vec<u8> = v_rev_src.iter().rev().copied().collect();

        let (fwd, bwd) = extend_both_directions(ExtenderMode::Greedy(GreedyState), u_fwd, v_fwd, &u_rev, &v_rev, &params());
        assert!(fwd.completed);
        assert!(bwd.completed);
    }

    #[test]
    fn xdrop_mode_also_reaches_completion_on_identical_sequences() {
        let u = b"ACGTACGTACGTACGT";
        let v = b"ACGTACGTACGTACGT";
        let mode = ExtenderMode::XDrop(XDropState { x_drop_score: params().x_drop_score });
        let (fwd, _bwd) = extend_both_directions(mode, u, v, b"", b"", &params());
        assert!(fwd.completed);
    }

    #[test]
    fn sensitivity_scales_the_xdrop_threshold() {
        assert_eq!(effective_xdrop_threshold(10, 6), 60);
        assert_eq!(effective_xdrop_threshold(10, 1), 10);
        // a sensitivity of 0 is treated as 1 rather than collapsing the threshold to 0
        assert_eq!(effective_xdrop_threshold(10, 0), 10);
    }
}
