use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use debatepulse::io::format_poll;
use debatepulse::{
    AnalysisMode, AnalysisOptions, AnalysisReport, DashboardText, InputRequest, ModelRegistry, Poll,
    SummaryOutcome, TranscriptFilter, analyze, resolve_input, summarize_analysis,
};

#[derive(Parser)]
#[command(name = "debatepulse")]
#[command(author, version, about = "Debate transcript sentiment and summary analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a debate transcript and print the dashboard
    Analyze {
        /// Transcript file (text), or an audio/video file (replaced by the sample)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Transcript text entered directly
        #[arg(short, long)]
        text: Option<String>,

        /// Analyze the built-in sample transcript
        #[arg(long)]
        sample: bool,

        /// Fast mode: sample transcript with the keyword heuristic
        #[arg(long)]
        fast: bool,

        /// Use the keyword heuristic and extractive summary instead of hosted models
        #[arg(long)]
        heuristic: bool,

        /// Skip summary generation
        #[arg(long)]
        no_summary: bool,

        /// Only show transcript lines containing this keyword
        #[arg(long)]
        search: Option<String>,

        /// Only show transcript lines from this speaker
        #[arg(long)]
        speaker: Option<String>,

        /// Also write the full report as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Write the dashboard to a text file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Cast a vote on the sample audience poll
    Vote {
        /// Poll option number
        #[arg(short, long)]
        option: u32,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Parse a transcript file and print the utterances as JSON
    Parse {
        /// Transcript file
        #[arg(short, long)]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            text,
            sample,
            fast,
            heuristic,
            no_summary,
            search,
            speaker,
            json,
            output,
            verbose,
        } => {
            setup_logging(verbose);
            let request = InputRequest {
                file: input,
                text,
                use_sample: sample || fast,
            };
            let mode = if heuristic || fast {
                AnalysisMode::Heuristic
            } else {
                AnalysisMode::External
            };
            let options = AnalysisOptions {
                generate_summary: !no_summary,
                ..AnalysisOptions::new(mode)
            };
            let filter = TranscriptFilter { search, speaker };
            analyze_transcript(request, options, filter, json, output).await
        }
        Commands::Vote { option, verbose } => {
            setup_logging(verbose);
            cast_vote(option)
        }
        Commands::Parse { input, verbose } => {
            setup_logging(verbose);
            parse_file(input)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

async fn analyze_transcript(
    request: InputRequest,
    options: AnalysisOptions,
    filter: TranscriptFilter,
    json: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let input = resolve_input(&request)?;
    for notice in &input.notices {
        warn!("{}", notice);
    }
    info!(
        "Loaded {} utterances from {:?} input",
        input.utterances.len(),
        input.origin
    );

    let models = ModelRegistry::from_env();
    let analysis = analyze(input.utterances, &options, &models).await;
    let summary = summarize_analysis(&analysis, &options, &models).await;
    if let SummaryOutcome::Failed(message) = &summary {
        warn!("Summary unavailable: {}", message);
    }

    let now = Utc::now();
    let report = AnalysisReport {
        origin: input.origin,
        mode: options.mode,
        notices: input.notices,
        analysis,
        summary,
        poll: Poll::sample(now),
    };

    if let Some(path) = json {
        report.write_json(&path)?;
        info!("Report written to {:?}", path);
    }

    let dashboard = DashboardText::new(&report, &filter, now);
    match output {
        Some(path) => {
            dashboard.write_file(&path)?;
            info!("Dashboard written to {:?}", path);
        }
        None => print!("{}", dashboard.format()),
    }
    Ok(())
}

fn cast_vote(option: u32) -> Result<()> {
    let now = Utc::now();
    let mut poll = Poll::sample(now);
    let receipt = poll.cast_vote(option, now).context("Vote was not accepted")?;
    info!("Vote {} recorded for option {}", receipt.receipt_id, receipt.option_id);

    print!("{}", format_poll(&poll, now));
    Ok(())
}

fn parse_file(input: PathBuf) -> Result<()> {
    let resolved = resolve_input(&InputRequest {
        file: Some(input),
        ..Default::default()
    })?;
    let json = serde_json::to_string_pretty(&resolved.utterances).context("Failed to serialize utterances")?;
    println!("{}", json);
    Ok(())
}
