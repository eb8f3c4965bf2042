//! Command implementation for the chastota CLI.

use std::time::Instant;

use log::{info, warn};

use crate::cli::args::ChastotaArgs;
use crate::cli::output::print_report;
use crate::error::{ChastotaError, Result};
use crate::pipeline::engine::AnalysisPipeline;
use crate::report::Report;

/// Run the analysis described by the arguments and print its report.
///
/// A corpus with no words left after cleaning still prints the
/// cleaning section and succeeds.
pub fn execute_command(args: ChastotaArgs) -> Result<()> {
    let config = args.to_config()?;
    let pipeline = AnalysisPipeline::new(config)?;

    let start = Instant::now();
    let report = match pipeline.run(&args.input) {
        Ok(analysis) => analysis.to_report(),
        Err(ChastotaError::EmptyCorpus) => {
            warn!("No words left in {} after cleaning", args.input.display());
            Report::empty_corpus(Some(args.input.as_path()))
        }
        Err(e) => return Err(e),
    };
    info!("Analysis took {}ms", start.elapsed().as_millis());

    print_report(&report)
}
