use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use salient::{
    parse_analysis_file, HumanTimeline, MomentDetector, MomentType, TimelineReport,
};

#[derive(Parser)]
#[command(name = "salient")]
#[command(author, version, about = "Key-moment timeline extraction for meeting transcripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect key moments and write a timeline report
    Detect {
        /// Input analysis file (JSON with transcript and timelines)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the timeline report (JSON)
        #[arg(short, long)]
        output: PathBuf,

        /// Output file for a human-readable timeline (text)
        #[arg(long)]
        human_readable: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Inspect an analysis file and summarize detections without writing output
    Inspect {
        /// Input analysis file (JSON with transcript and timelines)
        #[arg(short, long)]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Detect {
            input,
            output,
            human_readable,
            verbose,
        } => {
            setup_logging(verbose);
            detect_moments(input, output, human_readable)
        }
        Commands::Inspect { input, verbose } => {
            setup_logging(verbose);
            inspect_analysis(input)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn detect_moments(
    input: PathBuf,
    output: PathBuf,
    human_readable: Option<PathBuf>,
) -> Result<()> {
    info!("Loading analysis from {:?}", input);
    let analysis = parse_analysis_file(&input).context("Failed to parse analysis input")?;

    info!(
        "Loaded transcript ({} chars), {} emotion entries, {} timestamps",
        analysis.transcript.len(),
        analysis.emotion_timeline.len(),
        analysis.timestamps.len()
    );

    let detector = MomentDetector::new();
    let moments = detector.identify_key_moments(&analysis);
    info!("Detected {} key moments", moments.len());

    let report = TimelineReport::from_moments(moments, Utc::now());
    for (moment_type, count) in &report.moment_type_counts {
        info!("  {}: {}", moment_type, count);
    }

    report.write_json(&output)?;
    info!("Timeline report written to {:?}", output);

    if let Some(human_path) = human_readable {
        HumanTimeline::new(&report.moments).write_file(&human_path)?;
        info!("Human-readable timeline written to {:?}", human_path);
    }

    Ok(())
}

fn inspect_analysis(input: PathBuf) -> Result<()> {
    info!("Inspecting analysis from {:?}", input);
    let analysis = parse_analysis_file(&input).context("Failed to parse analysis input")?;

    println!("Analysis Input");
    println!("==============");
    println!("Transcript length: {} chars", analysis.transcript.len());
    println!("Emotion entries: {}", analysis.emotion_timeline.len());
    println!("Topic entries: {}", analysis.topic_timeline.len());
    println!("Timestamps: {}", analysis.timestamps.len());
    println!();

    let detector = MomentDetector::new();
    let moments = detector.identify_key_moments(&analysis);

    println!("Key Moments");
    println!("-----------");
    println!("Total: {}", moments.len());

    let type_order = [
        MomentType::Decision,
        MomentType::ActionItem,
        MomentType::QuestionCluster,
        MomentType::AgreementSpike,
        MomentType::DisagreementSpike,
        MomentType::EmotionalPeak,
        MomentType::EmotionalValley,
        MomentType::SentimentChange,
    ];
    for moment_type in type_order {
        let count = moments
            .iter()
            .filter(|m| m.moment_type == moment_type)
            .count();
        println!("{}: {}", moment_type, count);
    }

    if let (Some(first), Some(last)) = (moments.first(), moments.last()) {
        println!();
        println!(
            "Span: {} to {}",
            first.timestamp.format("%Y-%m-%d %H:%M:%S"),
            last.timestamp.format("%Y-%m-%d %H:%M:%S")
        );
    }

    Ok(())
}
