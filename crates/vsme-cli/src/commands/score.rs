use clap::Args;
use serde_json::json;

use vsme_core::coverage::{coverage_percent, REPORTED_DATAPOINTS, VSME_TOTAL_DATAPOINTS};
use vsme_core::esg::scoring::{self, VsmeScoreInput};

use super::CommandOutput;
use crate::input;

/// Arguments for scoring a submission
#[derive(Args)]
pub struct ScoreArgs {
    /// Path to JSON input file (reads stdin when omitted)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_score(args: ScoreArgs) -> Result<CommandOutput, Box<dyn std::error::Error>> {
    let score_input: VsmeScoreInput =
        input::read_input(args.input.as_deref(), "VSME scoring")?;
    let result = scoring::calculate_vsme_score(&score_input)?;
    Ok(CommandOutput::Value(serde_json::to_value(result)?))
}

pub fn run_coverage() -> Result<CommandOutput, Box<dyn std::error::Error>> {
    Ok(CommandOutput::Value(json!({
        "coverage_percent": coverage_percent(),
        "reported_datapoints": REPORTED_DATAPOINTS,
        "total_datapoints": VSME_TOTAL_DATAPOINTS,
    })))
}
