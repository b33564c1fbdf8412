use crate::extend::{ExtendParams, ExtenderMode, GreedyState, PolishingTemplate, TrimmingStrategy, XDropState};
use crate::scorer::DiagbandScorerParams;
use crate::seedpair::SeedPairParams;

/// Every option in §6's configuration table, gathered into one plain struct so the algorithmic
/// core stays usable without a `clap` dependency (the `DiagbandArgs` CLI struct in
/// `bin/diagband_seed.rs` is the only place that parses these from the command line).
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// `k`, the seed length
    pub seedlength: u32,
    /// user-supplied cap on k-mer frequency; `0` means "derive from `memlimit`"
    pub maxfreq: u64,
    /// byte budget for the seed-pair list; `0` means unbounded
    pub memlimit: u64,
    /// extender error tolerance, as a percentage
    pub errorpercentage: u32,
    /// minimum reported alignment length
    pub userdefinedleastlength: u32,
    /// `L`, log2 of the diagonal band width
    pub logdiagbandwidth: u32,
    /// diagonal-band trigger threshold
    pub mincoverage: u32,
    /// `H`, the match-history window width
    pub history_size: u8,
    /// minimum percentage of 1-bits the match-history window must retain
    pub perc_mat_history: u32,
    /// trimming slack against the leading diagonal's aligned length
    pub maxalignedlendifference: u32,
    /// greedy extender backoff factor
    pub sensitivity: u32,
    /// polishing template bias
    pub matchscore_bias: i32,
    /// permit a higher error rate near alignment ends
    pub weakends: bool,
    /// `true` selects the greedy extender, `false` selects x-drop
    pub extendgreedy: bool,
    /// x-drop score threshold (only consulted when `extendgreedy` is `false`)
    pub x_drop_score: i64,
    /// `Δ=1` instead of `Δ=k` in the self-comparison dedup rule
    pub overlappingseeds: bool,
    /// suppress the reverse-complement pass
    pub norev: bool,
    /// suppress the forward pass
    pub nofwd: bool,
    /// delay forward extension until after the reverse-complement seed-pair list is built
    pub extend_last: bool,
    /// cache k-mer lists on disk, keyed as described in §4.6 / §6
    pub use_kmerfile: bool,
    /// basename used to derive on-disk k-mer cache filenames (ignored unless `use_kmerfile`)
    pub kmerfile_basename: String,
    /// re-decode and byte-compare every seed pair before scoring (§4.3, §9)
    pub verify: bool,
    /// number of B-range partitions to fan out over with a worker per partition (§5); `1`
    /// disables threading
    pub threads: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            seedlength: 14,
            maxfreq: 0,
            memlimit: 0,
            errorpercentage: 10,
            userdefinedleastlength: 0,
            logdiagbandwidth: 6,
            mincoverage: 28,
            history_size: 31,
            perc_mat_history: 50,
            maxalignedlendifference: 30,
            sensitivity: 6,
            matchscore_bias: 0,
            weakends: false,
            extendgreedy: true,
            x_drop_score: 10,
            overlappingseeds: false,
            norev: false,
            nofwd: false,
            extend_last: false,
            use_kmerfile: false,
            kmerfile_basename: String::new(),
            verify: false,
            threads: 1,
        }
    }
}

impl DriverConfig {
    pub(crate) fn extend_params(&self) -> ExtendParams {
        // `weakends` relaxes the tolerated error rate itself (mirroring the original's
        // `weak_errorperc = max(errorpercentage, 20)`), rather than being carried as a separate
        // flag the extender would need to branch on.
        let weak_errorperc = if self.weakends { self.errorpercentage.max(20) } else { self.errorpercentage };
        ExtendParams {
            seedlength: self.seedlength,
            error_percentage: weak_errorperc,
            userdefinedleastlength: self.userdefinedleastlength,
            history_size: self.history_size,
            perc_mat_history: self.perc_mat_history,
            maxalignedlendifference: self.maxalignedlendifference,
            sensitivity: self.sensitivity,
            x_drop_score: self.x_drop_score,
            polishing: PolishingTemplate { cut_depth: (self.history_size as u32 / 2).max(1), bias: self.matchscore_bias },
            trimstrategy: TrimmingStrategy::OnNewPolishedPoint,
        }
    }

    pub(crate) fn extender_mode(&self) -> ExtenderMode {
        if self.extendgreedy {
            ExtenderMode::Greedy(GreedyState)
        } else {
            ExtenderMode::XDrop(XDropState { x_drop_score: self.x_drop_score })
        }
    }

    pub(crate) fn scorer_params(&self) -> DiagbandScorerParams {
        DiagbandScorerParams {
            seedlength: self.seedlength,
            logdiagbandwidth: self.logdiagbandwidth,
            mincoverage: self.mincoverage,
        }
    }

    pub(crate) fn seed_pair_params(&self, selfcomp: bool, alist_blist_identical: bool) -> SeedPairParams {
        SeedPairParams {
            seedlength: self.seedlength,
            selfcomp,
            overlapping_seeds: self.overlappingseeds,
            maxfreq: if self.maxfreq == 0 { None } else { Some(self.maxfreq) },
            memlimit: if self.memlimit == 0 { None } else { Some(self.memlimit) },
            alist_blist_identical,
        }
    }
}
