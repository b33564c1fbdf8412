use crate::kmer::KmerPos;
use std::io::{BufReader, Read};

/// A maximal run of [`KmerPos`] entries sharing the same `code`.
pub struct Segment<'a> {
    /// the shared code of every entry in this segment
    pub code: u64,
    entries: &'a [KmerPos],
}

impl<'a> Segment<'a> {
    /// The entries making up this segment.
    pub fn entries(&self) -> &'a [KmerPos] { self.entries }

    /// Number of entries in this segment -- the frequency of its shared `code`.
    pub fn len(&self) -> usize { self.entries.len() }
}

/// Presents a sorted k-mer list as a lazy sequence of same-code runs (§4.2).
///
/// Two backends share this interface: an in-memory slice view, and a file-backed reader that
/// streams fixed-size records (see [`crate::kmer::write_kmer_cache`]) a few at a time. Either
/// way, `next_segment()` returns the next maximal run of equal-`code` entries, or `None` once
/// exhausted, and `reset()` rewinds to the start.
pub trait SegmentSource {
    /// Rewinds this source back to its first segment.
    fn reset(&mut self);
    /// Returns the next same-code run, or `None` at end of input.
    fn next_segment(&mut self) -> Option<Segment<'_>>;
}

/// An in-memory [`SegmentSource`] over an already-sorted slice of [`KmerPos`].
pub struct InMemorySegments<'a> {
    data: &'a [KmerPos],
    pos: usize,
}

impl<'a> InMemorySegments<'a> {
    /// Wraps a code-sorted slice of k-mer positions.
    pub fn new(data: &'a [KmerPos]) -> Self { InMemorySegments { data, pos: 0 } }
}

impl<'a> SegmentSource for InMemorySegments<'a> {
    fn reset(&mut self) { self.pos = 0; }

    fn next_segment(&mut self) -> Option<Segment<'_>> {
        if self.pos >= self.data.len() { return None; }
        let code = self.data[self.pos].code;
        let start = self.pos;
        let mut end = start + 1;
        while end < self.data.len() && self.data[end].code == code { end += 1; }
        self.pos = end;
        Some(Segment { code, entries: &self.data[start..end] })
    }
}

/// A file-backed [`SegmentSource`] that reads one k-mer-cache record at a time, accumulating
/// them into a reusable scratch buffer until `code` changes -- so that a k-mer list too large
/// to hold entirely in memory can still be merged (§4.3) a segment at a time.
pub struct FileBackedSegments<R: Read> {
    reader: BufReader<R>,
    scratch: Vec<KmerPos>,
    /// an entry read ahead of the segment currently being assembled, not yet consumed
    lookahead: Option<KmerPos>,
    exhausted: bool,
}

impl<R: Read> FileBackedSegments<R> {
    /// Wraps a reader positioned at the start of a k-mer cache file's raw records.
    pub fn new(reader: R) -> Self {
        FileBackedSegments {
            reader: BufReader::new(reader),
            scratch: Vec::new(),
            lookahead: None,
            exhausted: false,
        }
    }

    fn read_one(&mut self) -> Option<KmerPos> {
        let mut buf = [0u8; crate::kmer::CACHE_RECORD_SIZE];
        match self.reader.read_exact(&mut buf) {
            Ok(()) => Some(crate::kmer::decode_cache_record(&buf)),
            Err(_) => None,
        }
    }
}

impl<R: Read> SegmentSource for FileBackedSegments<R> {
    fn reset(&mut self) {
        // a freshly-constructed reader is the only supported "reset" for a streamed file;
        // callers that need true rewinding should reopen the file.
        self.exhausted = false;
    }

    fn next_segment(&mut self) -> Option<Segment<'_>> {
        if self.exhausted && self.lookahead.is_none() { return None; }
        self.scratch.clear();
        let first = self.lookahead.take().or_else(|| self.read_one())?;
        let code = first.code;
        self.scratch.push(first);
        loop {
            match self.read_one() {
                Some(next) if next.code == code => self.scratch.push(next),
                Some(next) => {
                    self.lookahead = Some(next);
                    break;
                }
                None => {
                    self.exhausted = true;
                    break;
                }
            }
        }
        Some(Segment { code, entries: &self.scratch })
    }
}
