use crate::kmer::{KmerList, KmerPos};
use std::io::{Read, Write};

/// Size in bytes of one on-disk k-mer cache record: `code` (u64), `endpos` (u32), `seqnum` (u32).
pub const CACHE_RECORD_SIZE: usize = 16;

/// Builds the on-disk k-mer cache file name for a given basename, seed length, direction,
/// partitioning and partition index, per §4.6 / §6: `{basename}.{k}{f|r}{npartitions}-{partindex}.kmer`.
pub fn cache_file_name(basename: &str, k: usize, forward: bool, npartitions: usize, partindex: usize) -> String {
    format!("{basename}.{k}{}{npartitions}-{partindex}.kmer", if forward { "f" } else { "r" })
}

fn encode_cache_record(entry: &KmerPos, out: &mut [u8; CACHE_RECORD_SIZE]) {
    out[0..8].copy_from_slice(&entry.code.to_le_bytes());
    out[8..12].copy_from_slice(&entry.endpos.to_le_bytes());
    out[12..16].copy_from_slice(&entry.seqnum.to_le_bytes());
}

/// Decodes one raw `(code, endpos, seqnum)` record as laid out by [`write_kmer_cache`].
pub fn decode_cache_record(buf: &[u8; CACHE_RECORD_SIZE]) -> KmerPos {
    let code = u64::from_le_bytes(buf[0..8].try_into().unwrap());
    let endpos = u32::from_le_bytes(buf[8..12].try_into().unwrap());
    let seqnum = u32::from_le_bytes(buf[12..16].try_into().unwrap());
    KmerPos { code, seqnum, endpos }
}

/// Writes a k-mer list to disk as a raw dump of fixed-size `(code, endpos, seqnum)` records.
///
/// The format carries no header or version marker; per §6, the caller is responsible for
/// supplying a basename unique to the index it was built from (see [`cache_file_name`]).
pub fn write_kmer_cache<W: Write>(list: &KmerList, mut writer: W) -> std::io::Result<()> {
    let mut buf = [0u8; CACHE_RECORD_SIZE];
    for entry in list.entries() {
        encode_cache_record(entry, &mut buf);
        writer.write_all(&buf)?;
    }
    Ok(())
}

/// Reads a whole k-mer cache file back into memory.
///
/// `filesize / sizeof(record)` determines the entry count, per §6; here that is simply "read
/// until EOF", since each record is a fixed `CACHE_RECORD_SIZE` bytes.
pub fn read_kmer_cache<R: Read>(mut reader: R) -> std::io::Result<KmerList> {
    let mut entries = Vec::new();
    let mut buf = [0u8; CACHE_RECORD_SIZE];
    loop {
        match reader.read_exact(&mut buf) {
            Ok(()) => entries.push(decode_cache_record(&buf)),
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e),
        }
    }
    Ok(KmerList::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_the_cache_format() {
        let list = KmerList::new(vec![
            KmerPos { code: 0xDEAD_BEEF, seqnum: 3, endpos: 42 },
            KmerPos { code: 1, seqnum: 0, endpos: 0 },
        ]);
        let mut buf = Vec::new();
        write_kmer_cache(&list, &mut buf).unwrap();
        assert_eq!(buf.len(), 2 * CACHE_RECORD_SIZE);
        let read_back = read_kmer_cache(&buf[..]).unwrap();
        assert_eq!(read_back.entries(), list.entries());
    }

    #[test]
    fn cache_file_name_follows_the_documented_pattern() {
        assert_eq!(cache_file_name("genome", 18, true, 4, 2), "genome.18f4-2.kmer");
        assert_eq!(cache_file_name("genome", 18, false, 4, 2), "genome.18r4-2.kmer");
    }
}
