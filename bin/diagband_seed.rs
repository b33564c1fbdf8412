use std::env;
use std::io::Write;
use std::time::Instant;

use clap::Parser;
use log::{info};

use bioshell_diagband::driver::{self, write_alignment_record, DriverConfig};
use bioshell_diagband::encoded::EncodedSequences;
use bioshell_diagband::DiagbandError;
use bioshell_io::out_writer;
use bioshell_seq::sequence::FastaIterator;

/// Finds local nucleotide alignments between two FASTA collections (or within one, as a
/// self-comparison) using a diagonal-band seed-and-extend strategy.
#[derive(Parser, Debug)]
#[clap(name = "diagband_seed", version, author)]
#[clap(about = "Diagonal-band seed-and-extend DNA sequence comparison", long_about = None)]
struct Args {
    /// FASTA file providing the "A" sequence collection
    a_fasta: String,
    /// FASTA file providing the "B" sequence collection; omit to compare `a_fasta` against itself
    b_fasta: Option<String>,

    /// seed (k-mer) length
    #[clap(long, default_value = "14")]
    seedlength: u32,
    /// cap on k-mer frequency; 0 derives it from --memlimit
    #[clap(long, default_value = "0")]
    maxfreq: u64,
    /// byte budget for the seed-pair list; 0 means unbounded
    #[clap(long, default_value = "0")]
    memlimit: u64,
    /// extender error tolerance, as a percentage
    #[clap(long, default_value = "10")]
    errorpercentage: u32,
    /// minimum reported alignment length
    #[clap(short = 'l', long, default_value = "0")]
    userdefinedleastlength: u32,
    /// log2 of the diagonal band width
    #[clap(long, default_value = "6")]
    logdiagbandwidth: u32,
    /// diagonal-band trigger threshold
    #[clap(long, default_value = "28")]
    mincoverage: u32,
    /// match-history window width
    #[clap(long, default_value = "31")]
    history_size: u8,
    /// minimum percentage of 1-bits the match-history window must retain
    #[clap(long, default_value = "50")]
    perc_mat_history: u32,
    /// trimming slack against the leading diagonal's aligned length
    #[clap(long, default_value = "30")]
    maxalignedlendifference: u32,
    /// greedy extender backoff factor
    #[clap(long, default_value = "6")]
    sensitivity: u32,
    /// polishing template bias
    #[clap(long, default_value = "0")]
    matchscore_bias: i32,
    /// permit a higher error rate near alignment ends
    #[clap(long, action)]
    weakends: bool,
    /// use the x-drop extender instead of the greedy front-prune extender
    #[clap(long, action)]
    xdrop: bool,
    /// x-drop score threshold (only consulted with --xdrop)
    #[clap(long, default_value = "10")]
    x_drop_score: i64,
    /// allow overlapping seeds (Δ=1) in the self-comparison dedup rule, instead of Δ=k
    #[clap(long, action)]
    overlappingseeds: bool,
    /// suppress the reverse-complement pass
    #[clap(long, action)]
    norev: bool,
    /// suppress the forward pass
    #[clap(long, action)]
    nofwd: bool,
    /// delay forward extension until after the reverse-complement seed-pair list is built
    #[clap(long, action)]
    extend_last: bool,
    /// cache k-mer lists on disk under this basename, reusing them on a later run
    #[clap(long)]
    kmerfile_basename: Option<String>,
    /// re-decode and byte-compare every seed pair before scoring
    #[clap(long, action)]
    verify: bool,
    /// number of worker threads to fan the B collection out over
    #[clap(short = 'j', long, default_value = "1")]
    threads: usize,
    /// write alignments to this file instead of stdout
    #[clap(short = 'o', long)]
    outfile: Option<String>,
    /// be more verbose and log program actions on the screen
    #[clap(short, long)]
    verbose: bool,
}

impl Args {
    fn to_driver_config(&self) -> DriverConfig {
        DriverConfig {
            seedlength: self.seedlength,
            maxfreq: self.maxfreq,
            memlimit: self.memlimit,
            errorpercentage: self.errorpercentage,
            userdefinedleastlength: self.userdefinedleastlength,
            logdiagbandwidth: self.logdiagbandwidth,
            mincoverage: self.mincoverage,
            history_size: self.history_size,
            perc_mat_history: self.perc_mat_history,
            maxalignedlendifference: self.maxalignedlendifference,
            sensitivity: self.sensitivity,
            matchscore_bias: self.matchscore_bias,
            weakends: self.weakends,
            extendgreedy: !self.xdrop,
            x_drop_score: self.x_drop_score,
            overlappingseeds: self.overlappingseeds,
            norev: self.norev,
            nofwd: self.nofwd,
            extend_last: self.extend_last,
            use_kmerfile: self.kmerfile_basename.is_some(),
            kmerfile_basename: self.kmerfile_basename.clone().unwrap_or_default(),
            verify: self.verify,
            threads: self.threads.max(1),
        }
    }
}

fn load_fasta(path: &str) -> Result<EncodedSequences, DiagbandError> {
    let reader = bioshell_io::open_file(path)?;
    let sequences: Vec<Vec<u8>> = FastaIterator::new(reader).map(|s| s.seq().clone()).collect();
    Ok(EncodedSequences::from_sequences(&sequences))
}

pub fn main() -> Result<(), DiagbandError> {
    let args = Args::parse();
    unsafe {
        if env::var("RUST_LOG").is_err() { env::set_var("RUST_LOG", "info") }
        if args.verbose { env::set_var("RUST_LOG", "debug"); }
    }
    env_logger::init();

    let cfg = args.to_driver_config();
    let a_store = load_fasta(&args.a_fasta)?;

    let start = Instant::now();
    let records = match &args.b_fasta {
        Some(b_fasta) => {
            let b_store = load_fasta(b_fasta)?;
            driver::run(&a_store, &b_store, &cfg)?
        }
        None => driver::run(&a_store, &a_store, &cfg)?,
    };
    info!("{} alignment(s) reported in {:?}", records.len(), start.elapsed());

    let mut out = out_writer(args.outfile.as_deref().unwrap_or(""), false);
    for record in &records {
        write_alignment_record(record, &mut out)?;
    }
    out.flush()?;
    Ok(())
}
