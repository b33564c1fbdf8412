use crate::seedpair::SeedPair;

/// Configuration the diagonal-band scorer needs beyond the seed pairs themselves (§4.4, §6).
#[derive(Debug, Clone, Copy)]
pub struct DiagbandScorerParams {
    /// seed length `k`
    pub seedlength: u32,
    /// `L`, the log2 of the diagonal band width
    pub logdiagbandwidth: u32,
    /// minimum accumulated coverage across a 3-diagonal window to trigger extension
    pub mincoverage: u32,
}

fn ceil_div(numerator: u32, denominator: u32) -> u32 {
    (numerator + denominator - 1) / denominator
}

/// Outcome of invoking the extender for one triggering seed pair: the A-coordinate interval a
/// successful extension covered, used to suppress re-triggering on seeds already subsumed by
/// it. `None` means the extension produced nothing reportable (died out too early, or fell
/// below the minimum report length) -- a later trigger in the same group starts fresh.
pub type ExtensionOutcome = Option<(u32, u32)>;

/// Walks seed pairs grouped by `(aseqnum, bseqnum)`, accumulating weighted per-diagonal match
/// coverage and invoking a caller-supplied extension callback wherever that coverage crosses
/// `mincoverage` (§4.4).
///
/// `amaxlen`/`bmaxlen` are the maximum sequence length across the whole A-side / B-side
/// collection (not just the two sequences in the current group) -- using the run-wide maximum
/// keeps every `diag` computation non-negative regardless of which pair of sequences is being
/// scored.
pub struct DiagbandScorer {
    amaxlen: u32,
    l: u32,
    seedlength: u32,
    mincoverage: u32,
    minsegmentlen: usize,
    /// score[0] and score[ndiags+1] are permanent zero sentinels; a real diagonal `d`'s
    /// accumulated coverage lives at score[d+1]
    score: Vec<u32>,
    lastp: Vec<u32>,
}

impl DiagbandScorer {
    /// Builds a scorer sized for a run comparing sequences up to `amaxlen`/`bmaxlen` long.
    pub fn new(amaxlen: u32, bmaxlen: u32, params: DiagbandScorerParams) -> Self {
        let l = params.logdiagbandwidth;
        let ndiags = (amaxlen >> l) + (bmaxlen >> l) + 2;
        let minsegmentlen = ceil_div(params.mincoverage.saturating_sub(1), params.seedlength) as usize + 1;
        DiagbandScorer {
            amaxlen,
            l,
            seedlength: params.seedlength,
            mincoverage: params.mincoverage,
            minsegmentlen,
            score: vec![0u32; ndiags as usize + 2],
            lastp: vec![0u32; ndiags as usize],
        }
    }

    fn diag_of(&self, apos: u32, bpos: u32) -> usize {
        (((self.amaxlen as i64 + bpos as i64 - apos as i64) as u64) >> self.l) as usize
    }

    /// Scores every `(aseqnum, bseqnum)` group in `pairs` (assumed sorted so groups are
    /// contiguous, per the data model), calling `on_trigger` for every seed pair whose
    /// surrounding diagonal coverage crosses the configured threshold.
    ///
    /// `on_trigger` receives the triggering pair and the absolute `(a_start, b_start)`
    /// positions the extender should begin from (`apos + 1 - k`, `bpos + 1 - k`), and returns
    /// the A-interval a successful extension covered, or `None`.
    pub fn process_groups<F>(&mut self, pairs: &[SeedPair], mut on_trigger: F)
    where
        F: FnMut(SeedPair, u32, u32) -> ExtensionOutcome,
    {
        let mut start = 0;
        while start < pairs.len() {
            let mut end = start + 1;
            while end < pairs.len()
                && pairs[end].aseqnum == pairs[start].aseqnum
                && pairs[end].bseqnum == pairs[start].bseqnum
            {
                end += 1;
            }
            let group = &pairs[start..end];
            if group.len() >= self.minsegmentlen {
                self.score_group(group, &mut on_trigger);
            }
            start = end;
        }
    }

    fn score_group<F>(&mut self, group: &[SeedPair], on_trigger: &mut F)
    where
        F: FnMut(SeedPair, u32, u32) -> ExtensionOutcome,
    {
        let k = self.seedlength;
        let mut touched: Vec<usize> = Vec::with_capacity(group.len());

        // pass 1: accumulate
        for pair in group {
            let diag = self.diag_of(pair.apos, pair.bpos);
            if pair.bpos >= self.lastp[diag] + k {
                self.score[diag + 1] += k;
            } else {
                self.score[diag + 1] += pair.bpos - self.lastp[diag];
            }
            self.lastp[diag] = pair.bpos;
            touched.push(diag);
        }

        // pass 2: trigger & extend
        let mut last_match_a_range: Option<(u32, u32)> = None;
        for pair in group {
            let diag = self.diag_of(pair.apos, pair.bpos);
            let coverage = self.score[diag].max(self.score[diag + 2]) + self.score[diag + 1];
            if coverage < self.mincoverage {
                continue;
            }
            let overlaps = last_match_a_range
                .map(|(s, e)| pair.apos >= s && pair.apos <= e)
                .unwrap_or(false);
            if overlaps {
                continue;
            }
            let a_start = pair.apos + 1 - k;
            let b_start = pair.bpos + 1 - k;
            last_match_a_range = on_trigger(*pair, a_start, b_start);
        }

        // pass 3: clear
        for diag in touched {
            self.score[diag + 1] = 0;
            self.lastp[diag] = 0;
        }
    }
}
