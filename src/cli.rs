//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "weft", about = "bitext ranking and dynamic data selection.")]
/// Holds every command that is callable by the `weft` command.
pub enum Weft {
    #[structopt(about = "Rank a bitext by bilingual cross-entropy difference")]
    Rank(Rank),
    #[structopt(about = "Generate per-epoch training subsets from a ranked bitext")]
    Select(Select),
}

#[derive(Debug, StructOpt)]
/// Rank command and parameters.
pub struct Rank {
    #[structopt(parse(from_os_str), long = "bitext_src", help = "source side of the bitext")]
    pub bitext_src: PathBuf,
    #[structopt(parse(from_os_str), long = "bitext_trg", help = "target side of the bitext")]
    pub bitext_trg: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "bitext_extra",
        help = "additional aligned files to reorder along with the bitext"
    )]
    pub bitext_extra: Vec<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "lm_domain_src",
        help = "sentence-level cross-entropy scores from the in-domain source LM"
    )]
    pub lm_domain_src: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "lm_domain_trg",
        help = "sentence-level cross-entropy scores from the in-domain target LM"
    )]
    pub lm_domain_trg: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "lm_general_src",
        help = "sentence-level cross-entropy scores from the general-domain source LM"
    )]
    pub lm_general_src: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "lm_general_trg",
        help = "sentence-level cross-entropy scores from the general-domain target LM"
    )]
    pub lm_general_trg: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "weights_out",
        default_value = "ranked-bitext.weights",
        help = "destination of the CED weights file"
    )]
    pub weights_out: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Select command and parameters.
pub struct Select {
    #[structopt(
        parse(from_os_str),
        long = "bitext_src",
        help = "source side of the ranked bitext"
    )]
    pub bitext_src: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "bitext_trg",
        help = "target side of the ranked bitext"
    )]
    pub bitext_trg: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "bitext_extra",
        help = "additional aligned files to subset along with the bitext"
    )]
    pub bitext_extra: Vec<PathBuf>,
    #[structopt(
        long = "dds_method",
        possible_values = &["gft", "sampling"],
        help = "method to use for dynamic data selection"
    )]
    pub dds_method: String,
    #[structopt(
        long = "alpha",
        default_value = "0.5",
        help = "shape exponent (gft) or weight sharpening exponent (sampling)"
    )]
    pub alpha: f64,
    #[structopt(
        long = "beta",
        default_value = "0.7",
        help = "retained fraction of the corpus at the final epoch (gft only)"
    )]
    pub beta: f64,
    #[structopt(
        long = "eta",
        default_value = "2",
        help = "rate exponent, early vs late shrinkage (gft only)"
    )]
    pub eta: f64,
    #[structopt(
        long = "sampling_fraction",
        default_value = "0.2",
        help = "fraction of the bitext drawn per epoch (sampling only); \
                fractions at or near 1.0 can exceed the number of \
                positively-weighted pairs and fail, since the \
                worst-ranked pair gets weight 0"
    )]
    pub sampling_fraction: f64,
    #[structopt(
        parse(from_os_str),
        long = "ced_weights",
        help = "CED weights of the ranked bitext (sampling only)"
    )]
    pub ced_weights: Option<PathBuf>,
    #[structopt(
        long = "total_epochs",
        default_value = "16",
        help = "number of epochs to generate subsets for"
    )]
    pub total_epochs: usize,
    #[structopt(long = "seed", default_value = "0", help = "RNG seed (sampling only)")]
    pub seed: u64,
}

impl Select {
    /// All aligned files the subcommand operates on, source and target first.
    pub fn aligned_files(&self) -> Vec<PathBuf> {
        let mut files = vec![self.bitext_src.clone(), self.bitext_trg.clone()];
        files.extend(self.bitext_extra.iter().cloned());
        files
    }
}

impl Rank {
    /// All aligned files the subcommand operates on, source and target first.
    pub fn aligned_files(&self) -> Vec<PathBuf> {
        let mut files = vec![self.bitext_src.clone(), self.bitext_trg.clone()];
        files.extend(self.bitext_extra.iter().cloned());
        files
    }
}
