use std::path::PathBuf;

use clap::Args;

use retail_score::error::AppError;
use retail_score::prediction::{analysis, AnalysisContext, PredictionRequest, ScoreResult};

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Path to a JSON file with the submission attributes
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Raw score to analyze, as the scoring service would return it
    #[arg(long)]
    pub(crate) score: f64,
    /// Rule set to apply: warehouse or outlet
    #[arg(long, default_value = "warehouse")]
    pub(crate) context: String,
}

/// Offline walkthrough of the normalization and rule-table stages, for demos
/// and for inspecting how a saved submission reads without calling upstream.
pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.input)?;
    let request: PredictionRequest = serde_json::from_str(&raw)?;
    let context = AnalysisContext::from_str(&args.context);

    if request.missing_required_fields() {
        println!("Submission rejected: missing required fields");
        return Ok(());
    }

    let score = ScoreResult::from_raw(args.score);
    let report = analysis::analyze(context, &request, score.normalized);

    println!("Narrative analysis demo ({} rules)", context.label());
    println!(
        "Score: {} -> {} ({} risk)",
        score.raw,
        score.normalized,
        score.tier.label()
    );

    render_section("Strengths", &report.strengths);
    render_section("Weaknesses", &report.weaknesses);
    render_section("Recommendations", &report.recommendations);

    Ok(())
}

fn render_section(title: &str, entries: &[String]) {
    if entries.is_empty() {
        println!("\n{title}: none");
        return;
    }

    println!("\n{title}");
    for entry in entries {
        println!("- {entry}");
    }
}
