use std::fs::File;
use std::io::BufWriter;
use std::ops::RangeInclusive;

use crate::driver::config::DriverConfig;
use crate::encoded::{EncodedSequences, ReadMode};
use crate::errors::DiagbandError;
use crate::kmer::{cache_file_name, extract_kmers, read_kmer_cache, write_kmer_cache, KmerList};

/// Builds (or loads, if caching is enabled and a cache file already exists) the k-mer list for
/// one sequence range and read direction, per §4.6's on-disk cache scheme.
///
/// `npartitions`/`partindex` feed into the cache file name; a run that never partitions its
/// input (`npartitions == 1`) still produces a valid (if slightly redundant) `...1-0.kmer`
/// filename, matching the literal pattern given in §6.
pub fn kmer_list_for_range(
    store: &EncodedSequences,
    seq_range: RangeInclusive<usize>,
    mode: ReadMode,
    cfg: &DriverConfig,
    npartitions: usize,
    partindex: usize,
) -> Result<KmerList, DiagbandError> {
    if !cfg.use_kmerfile {
        let mut list = extract_kmers(store, seq_range, mode, cfg.seedlength as usize);
        list.sort();
        return Ok(list);
    }

    let forward = matches!(mode, ReadMode::Forward);
    let filename = cache_file_name(&cfg.kmerfile_basename, cfg.seedlength as usize, forward, npartitions, partindex);

    if let Ok(file) = File::open(&filename) {
        return Ok(read_kmer_cache(file)?);
    }

    let mut list = extract_kmers(store, seq_range, mode, cfg.seedlength as usize);
    list.sort();
    let file = File::create(&filename)?;
    write_kmer_cache(&list, BufWriter::new(file))?;
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncached_lookups_never_touch_disk() {
        let store = EncodedSequences::from_sequences(&["ACGTACGT"]);
        let mut cfg = DriverConfig::default();
        cfg.seedlength = 4;
        cfg.use_kmerfile = false;
        let list = kmer_list_for_range(&store, 0..=0, ReadMode::Forward, &cfg, 1, 0).unwrap();
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn a_cached_lookup_round_trips_through_a_real_file() {
        let store = EncodedSequences::from_sequences(&["ACGTACGTACGT"]);
        let dir = std::env::temp_dir();
        let basename = dir.join(format!(
            "diagband-test-{}-{}",
            std::process::id(),
            std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH).unwrap().subsec_nanos()
        ));
        let mut cfg = DriverConfig::default();
        cfg.seedlength = 4;
        cfg.use_kmerfile = true;
        cfg.kmerfile_basename = basename.to_string_lossy().into_owned();

        let first = kmer_list_for_range(&store, 0..=0, ReadMode::Forward, &cfg, 1, 0).unwrap();
        let second = kmer_list_for_range(&store, 0..=0, ReadMode::Forward, &cfg, 1, 0).unwrap();
        assert_eq!(first.entries(), second.entries());

        let expected_file = cache_file_name(&cfg.kmerfile_basename, 4, true, 1, 0);
        std::fs::remove_file(expected_file).unwrap();
    }
}
