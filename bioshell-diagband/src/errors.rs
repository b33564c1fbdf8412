use displaydoc::Display;
use thiserror::Error;

#[derive(Debug, Error, Display)]
#[non_exhaustive]
/// Errors that may be thrown while running the diagonal-band seed-and-extend pipeline
pub enum DiagbandError {
    /// option `-memlimit` is too strict: need at least {required_mb} MB
    MemlimitTooStrict {
        /// the minimum memory budget, in megabytes, that would let this run proceed
        required_mb: u64,
    },
    /// seed pair (aseqnum={aseqnum}, bseqnum={bseqnum}, apos={apos}, bpos={bpos}) does not round-trip: A-side decodes to "{a_substring}", B-side decodes to "{b_substring}"
    SeedPairVerificationFailed {
        /// index of the A-side sequence
        aseqnum: u32,
        /// index of the B-side sequence
        bseqnum: u32,
        /// end position of the seed on the A side
        apos: u32,
        /// end position of the seed on the B side
        bpos: u32,
        /// decoded A-side substring
        a_substring: String,
        /// decoded B-side substring
        b_substring: String,
    },
    /// I/O error while reading or writing a k-mer cache file or a thread temp file
    Io(#[from] std::io::Error),
}
