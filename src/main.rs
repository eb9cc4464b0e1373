//! # Weft
//!
//! 🧵 Weft ranks a bilingual training corpus by bilingual cross-entropy
//! difference (Axelrod et al., EMNLP 2011) and generates per-epoch
//! training subsets for dynamic data selection
//! (van der Wees et al., EMNLP 2017).
//!
//! ## Getting started
//!
//! ```sh
//! weft 0.2.0
//! bitext ranking and dynamic data selection.
//!
//! USAGE:
//!     weft <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     help      Prints this message or the help of the given subcommand(s)
//!     rank      Rank a bitext by bilingual cross-entropy difference
//!     select    Generate per-epoch training subsets from a ranked bitext
//! ```
//!
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use weft::error::Error;
use weft::ranking::BitextRanker;
use weft::scheduling::{GradualFineTuning, PowerLaw, WeightedSampler};
use weft::scoring::LmScoreFiles;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Weft::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Weft::Rank(r) => {
            let scores = LmScoreFiles {
                dom_src: r.lm_domain_src.clone(),
                dom_trg: r.lm_domain_trg.clone(),
                gen_src: r.lm_general_src.clone(),
                gen_trg: r.lm_general_trg.clone(),
            };
            let ranker = BitextRanker::new(r.aligned_files(), r.weights_out.clone())?;
            ranker.run(&scores)?;
        }

        cli::Weft::Select(s) => {
            let files = s.aligned_files();
            let summary = match s.dds_method.as_str() {
                "gft" => {
                    let curve = PowerLaw::new(s.alpha, s.beta, s.eta)?;
                    GradualFineTuning::new(files, curve, s.total_epochs)?.run()?
                }
                "sampling" => {
                    let ced_weights = s.ced_weights.clone().ok_or_else(|| {
                        Error::InvalidParameter(
                            "ced_weights is required for the sampling method".to_string(),
                        )
                    })?;
                    WeightedSampler::new(
                        files,
                        ced_weights,
                        s.alpha,
                        s.sampling_fraction,
                        s.total_epochs,
                        s.seed,
                    )?
                    .run()?
                }
                // unreachable: structopt restricts possible values
                other => {
                    return Err(Error::InvalidParameter(format!(
                        "unknown dds_method {}",
                        other
                    )))
                }
            };
            summary.write(&s.bitext_src)?;
        }
    };
    Ok(())
}
