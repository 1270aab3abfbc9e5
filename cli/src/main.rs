//! unchat CLI - chat screenshot OCR parsing tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unchat::parser::load_screenshot;
use unchat::{ChatParseConfig, ChatParser, JsonFormat, ParseStatistics, TextOptions};

#[derive(Parser)]
#[command(name = "unchat")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Reconstruct chat conversations from screenshot OCR output", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one screenshot JSON file into messages
    Parse {
        /// Input screenshot JSON (imageWidth, imageHeight, blocks)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Transcript title (text format)
        #[arg(long)]
        title: Option<String>,

        /// Speaker label for the screenshot owner
        #[arg(long, default_value = "Me")]
        me_label: String,

        /// Speaker label for the other party
        #[arg(long, default_value = "Other")]
        other_label: String,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },

    /// Show pipeline statistics for a screenshot
    Stats {
        /// Input screenshot JSON
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },

    /// Parse many screenshots, writing one JSON result per input
    Batch {
        /// Input screenshot JSON files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// Parse on the current thread only
        #[arg(long)]
        sequential: bool,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Speaker-labelled transcript
    Text,
    /// JSON array of messages
    Json,
}

/// Grouping thresholds; flags override values from `--config`.
#[derive(Args)]
struct ThresholdArgs {
    /// JSON file with parser configuration
    #[arg(long, value_name = "FILE", env = "UNCHAT_CONFIG")]
    config: Option<PathBuf>,

    /// Minimum vertical overlap ratio for fragments on one line
    #[arg(long)]
    line_overlap: Option<f64>,

    /// Maximum horizontal gap between fragments on one line (px)
    #[arg(long)]
    line_gap: Option<f64>,

    /// Maximum vertical gap between lines of one message (px)
    #[arg(long)]
    message_gap: Option<f64>,

    /// Maximum left/right edge misalignment within a message (px)
    #[arg(long)]
    align_delta: Option<f64>,
}

impl ThresholdArgs {
    fn load(&self) -> Result<ChatParseConfig, Box<dyn std::error::Error>> {
        let mut config = match self.config {
            Some(ref path) => {
                let json = fs::read_to_string(path)?;
                serde_json::from_str(&json)
                    .map_err(|e| format!("Invalid config {}: {}", path.display(), e))?
            }
            None => ChatParseConfig::default(),
        };

        if let Some(ratio) = self.line_overlap {
            config = config.with_line_overlap_ratio(ratio);
        }
        if let Some(px) = self.line_gap {
            config = config.with_line_gap(px);
        }
        if let Some(px) = self.message_gap {
            config = config.with_message_gap(px);
        }
        if let Some(px) = self.align_delta {
            config = config.with_message_align_delta(px);
        }

        log::debug!("parser config: {:?}", config);
        Ok(config)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input,
            output,
            format,
            compact,
            title,
            me_label,
            other_label,
            thresholds,
        } => {
            let mut options = TextOptions::new()
                .with_me_label(me_label)
                .with_other_label(other_label);
            if let Some(title) = title {
                options = options.with_title(title);
            }
            cmd_parse(
                &input,
                output.as_deref(),
                format,
                compact,
                &options,
                &thresholds,
            )
        }
        Commands::Stats { input, thresholds } => cmd_stats(&input, &thresholds),
        Commands::Batch {
            inputs,
            output,
            sequential,
            thresholds,
        } => cmd_batch(&inputs, &output, sequential, &thresholds),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_parse(
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    compact: bool,
    options: &TextOptions,
    thresholds: &ThresholdArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let parser = ChatParser::with_config(thresholds.load()?);
    let result = parser.parse_file(input)?;

    let rendered = match format {
        OutputFormat::Text => unchat::render::to_text(&result.messages, options),
        OutputFormat::Json => {
            let json_format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            unchat::render::to_json(&result.messages, json_format)?
        }
    };

    if let Some(path) = output {
        fs::write(path, &rendered)?;
        println!(
            "{} {} ({} messages)",
            "Saved to".green(),
            path.display(),
            result.len()
        );
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

fn cmd_stats(input: &Path, thresholds: &ThresholdArgs) -> Result<(), Box<dyn std::error::Error>> {
    let screenshot = load_screenshot(input)?;
    let parser = ChatParser::with_config(thresholds.load()?);
    let result = parser.parse_screenshot(&screenshot);

    println!("{}", "Screenshot".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!(
        "{}: {} x {}",
        "Size".bold(),
        screenshot.image_width,
        screenshot.image_height
    );

    println!();
    print_statistics(&result.statistics);

    Ok(())
}

fn print_statistics(stats: &ParseStatistics) {
    println!("{}", "Pipeline".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Input blocks".bold(), stats.input_block_count);
    println!(
        "{}: {} ({} dropped)",
        "Normalized".bold(),
        stats.normalized_block_count,
        stats.dropped_block_count()
    );
    println!("{}: {}", "Lines".bold(), stats.line_count);
    println!("{}: {}", "Candidates".bold(), stats.candidate_count);

    println!();
    println!("{}", "Messages".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "System".bold(), stats.system_message_count);
    println!("{}: {}", "Left (other)".bold(), stats.left_bubble_count);
    println!("{}: {}", "Right (me)".bold(), stats.right_bubble_count);
}

fn cmd_batch(
    inputs: &[PathBuf],
    output_dir: &Path,
    sequential: bool,
    thresholds: &ThresholdArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;

    let parser = ChatParser::with_config(thresholds.load()?).with_parallel(!sequential);

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Loading screenshots...");
    let mut screenshots = Vec::with_capacity(inputs.len());
    for input in inputs {
        screenshots.push(load_screenshot(input)?);
        pb.inc(1);
    }

    pb.set_message("Parsing...");
    let results = parser.parse_batch(&screenshots);

    pb.set_position(0);
    pb.set_message("Writing results...");
    let mut totals = ParseStatistics::default();
    for (input, result) in inputs.iter().zip(&results) {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        let json = unchat::render::serialize(result, JsonFormat::Pretty)?;
        fs::write(output_dir.join(format!("{}.json", stem)), &json)?;
        totals.merge(&result.statistics);
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} screenshots parsed into {}",
        "Done!".green().bold(),
        results.len(),
        output_dir.display()
    );
    println!("  {} {}", "└─".dimmed(), totals);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unchat".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Chat screenshot OCR parsing tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unchat".dimmed());
    println!("License: MIT");
}
