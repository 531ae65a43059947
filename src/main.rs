//! PhishGuard CLI - URL Threat Analysis Front End
//!
//! Thin caller around the scoring core: parse a URL and a sensitivity, load
//! the classifier once at startup, run one analysis, render the verdict and
//! the technical telemetry. All scoring semantics live in the library.

use clap::Parser;

use phishguard_core::api::analyze::{self, AnalysisReport};
use phishguard_core::constants;
use phishguard_core::logic::scorer::Verdict;

#[derive(Parser, Debug)]
#[command(
    name = "phishguard",
    version,
    about = "Hybrid (AI + heuristic) URL threat scoring"
)]
struct Cli {
    /// Target URL to analyze
    url: String,

    /// Risk threshold divisor in (0.0, 1.0]; lower values are stricter
    #[arg(short, long, default_value_t = constants::DEFAULT_SENSITIVITY)]
    sensitivity: f32,

    /// Path to the ONNX classifier artifact
    #[arg(short, long)]
    model: Option<String>,

    /// Emit the full analysis report as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let model_path = cli.model.unwrap_or_else(constants::get_model_path);

    log::info!(
        "Starting {} v{} (model: {})",
        constants::APP_NAME,
        constants::APP_VERSION,
        model_path
    );

    if let Err(e) = analyze::init(&model_path) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        eprintln!("Run the training pipeline to produce the model artifact first.");
        std::process::exit(1);
    }

    match analyze::analyze(&cli.url, cli.sensitivity) {
        Ok(report) => {
            if cli.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(body) => println!("{}", body),
                    Err(e) => {
                        eprintln!("Error: failed to encode report: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                print_report(&report);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(if e.is_user_error() { 2 } else { 1 });
        }
    }
}

fn print_report(report: &AnalysisReport) {
    let score = &report.score;

    println!("{}", score.verdict.headline());
    match score.verdict {
        Verdict::Critical => {
            println!("The URL {} matches known phishing patterns.", report.url);
        }
        Verdict::Warning => {
            println!("This site shows suspicious characteristics. Proceed with caution.");
        }
        Verdict::Safe => {
            println!("No malicious indicators found.");
        }
    }

    println!();
    println!("Risk Score: {:.1}%", score.adjusted_score * 100.0);

    if !report.keyword_hits.is_empty() {
        println!("Keywords Detected: {}", report.keyword_hits.join(", "));
    }

    println!();
    println!("Technical Telemetry");
    for row in &report.telemetry.features {
        println!("  {:<12} {}", row.name, row.value);
    }
    println!("  Base AI Probability:  {:.4}", report.telemetry.ai_probability);
    println!("  Heuristic Adjustment: +{:.2}", report.telemetry.heuristic_bonus);
}
