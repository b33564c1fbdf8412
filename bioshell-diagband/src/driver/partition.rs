use std::ops::RangeInclusive;

/// Splits `0..num_sequences` into `npartitions` nearly-equal, contiguous, inclusive ranges of
/// sequence indices (§4.6, §5) -- the same splitting the original distributes B-ranges across
/// worker threads with (`num_runs_per_thread = (num_runs - 1) / gt_jobs + 1`), generalized to an
/// arbitrary partition count rather than one range per thread.
///
/// `npartitions` is clamped to `[1, num_sequences]`; a collection with fewer sequences than
/// requested partitions gets one partition per sequence instead of empty ranges.
pub fn partition_sequence_range(num_sequences: usize, npartitions: usize) -> Vec<RangeInclusive<usize>> {
    if num_sequences == 0 {
        return Vec::new();
    }
    let npartitions = npartitions.clamp(1, num_sequences);
    let base = num_sequences / npartitions;
    let remainder = num_sequences % npartitions;

    let mut ranges = Vec::with_capacity(npartitions);
    let mut start = 0usize;
    for idx in 0..npartitions {
        let size = base + if idx < remainder { 1 } else { 0 };
        let end = start + size - 1;
        ranges.push(start..=end);
        start = end + 1;
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_evenly_when_divisible() {
        let ranges = partition_sequence_range(10, 5);
        assert_eq!(ranges, vec![0..=1, 2..=3, 4..=5, 6..=7, 8..=9]);
    }

    #[test]
    fn distributes_the_remainder_to_the_first_partitions() {
        let ranges = partition_sequence_range(10, 3);
        assert_eq!(ranges, vec![0..=3, 4..=6, 7..=9]);
        let total: usize = ranges.iter().map(|r| r.end() - r.start() + 1).sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn clamps_partition_count_to_sequence_count() {
        let ranges = partition_sequence_range(2, 8);
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges, vec![0..=0, 1..=1]);
    }

    #[test]
    fn empty_collection_yields_no_partitions() {
        assert!(partition_sequence_range(0, 4).is_empty());
    }

    #[test]
    fn single_partition_covers_everything() {
        let ranges = partition_sequence_range(7, 1);
        assert_eq!(ranges, vec![0..=6]);
    }
}
