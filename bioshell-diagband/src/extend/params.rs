use crate::extend::PolishingTemplate;

/// Which live diagonals get dropped from the front after each distance step (§4.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimmingStrategy {
    /// never trim; the front only shrinks when diagonals literally run off a sequence end
    Never,
    /// trim eagerly at every step
    Always,
    /// trim only while the last recorded polished point is close behind the current distance
    /// (within 30 edits); lets a promising front ride out a temporarily noisy patch
    OnNewPolishedPoint,
}

/// Configuration for one front-prune extension call (§3, §6).
#[derive(Debug, Clone, Copy)]
pub struct ExtendParams {
    /// seed length `k`; seeds this long are pre-credited with `k` guaranteed matches
    pub seedlength: u32,
    /// tolerated error rate, as a percentage of the reported alignment's length; an extension
    /// whose edit distance exceeds this share of `max(alen, blen)` is discarded by the caller
    /// rather than reported (§6's `errorpercentage`; `weakends` is folded in upstream by
    /// relaxing this value, per `DriverConfig::extend_params`)
    pub error_percentage: u32,
    /// minimum alignment length a caller will report
    pub userdefinedleastlength: u32,
    /// `H`, the match-history window width in comparisons (`<= 64`)
    pub history_size: u8,
    /// minimum percentage of 1-bits the *filled* match-history window must retain, or the
    /// diagonal is trimmed
    pub perc_mat_history: u32,
    /// how far behind the leading diagonal's aligned length a diagonal may fall before being
    /// trimmed
    pub maxalignedlendifference: u32,
    /// backoff factor the x-drop variant uses to decide how aggressively to abandon a diagonal
    /// once its score trails the running best: the configured `x_drop_score` threshold is
    /// scaled by this factor before being applied, so a higher `sensitivity` rides out a wider
    /// score gap before pruning (only consulted by [`crate::extend::ExtenderMode::XDrop`])
    pub sensitivity: u32,
    /// x-drop score threshold before scaling by `sensitivity` (only consulted by
    /// [`crate::extend::ExtenderMode::XDrop`])
    pub x_drop_score: i64,
    /// quality-pattern template used to recognize a polished endpoint
    pub polishing: PolishingTemplate,
    /// trimming policy
    pub trimstrategy: TrimmingStrategy,
}
