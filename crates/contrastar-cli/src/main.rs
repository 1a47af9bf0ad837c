//! Contrastar CLI - analyze color contrast and print WCAG reference info.
//!
//! Presentation glue only: all analysis lives in the `contrastar`
//! library. Results go to stdout, diagnostics to stderr.

use clap::{Parser, Subcommand, ValueEnum};
use contrastar::{ContrastAnalyzer, ContrastReport, TextSize, WcagLevel, WCAG_INFO};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "contrastar")]
#[command(about = "WCAG color contrast checker")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the contrast between two hex colors
    Analyze {
        /// Foreground (text) color, e.g. "#000000" or "#0F3"
        foreground: String,

        /// Background color, e.g. "#FFFFFF"
        background: String,

        /// Apply the large-text thresholds (AA 3:1, AAA 4.5:1)
        #[arg(long)]
        large: bool,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Attach a widget deep link built from this base URL
        #[arg(long, value_name = "BASE_URL")]
        widget_url: Option<String>,
    },

    /// Print WCAG contrast threshold reference info
    Info {
        /// Restrict the output to a single conformance level
        #[arg(long, value_enum)]
        level: Option<Level>,
    },
}

/// WCAG conformance level as a CLI argument.
#[derive(Clone, Copy, ValueEnum)]
enum Level {
    /// Level AA (minimum recommended)
    #[value(name = "AA", alias = "aa")]
    Aa,
    /// Level AAA (enhanced)
    #[value(name = "AAA", alias = "aaa")]
    Aaa,
}

impl From<Level> for WcagLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Aa => Self::AA,
            Level::Aaa => Self::AAA,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            foreground,
            background,
            large,
            json,
            widget_url,
        } => run_analyze(&foreground, &background, large, json, widget_url),
        Commands::Info { level } => {
            print_info(level.map(WcagLevel::from));
            ExitCode::SUCCESS
        }
    }
}

fn run_analyze(
    foreground: &str,
    background: &str,
    large: bool,
    json: bool,
    widget_url: Option<String>,
) -> ExitCode {
    let mut analyzer = ContrastAnalyzer::new();
    if large {
        analyzer = analyzer.with_text_size(TextSize::Large);
    }
    if let Some(base) = widget_url {
        analyzer = analyzer.with_widget_base_url(base);
    }

    let report = match analyzer.analyze(foreground, background) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if json {
        match report.to_json() {
            Ok(body) => println!("{body}"),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_report(&report);
    }

    ExitCode::SUCCESS
}

fn print_report(report: &ContrastReport) {
    println!("{}", report.message);
    println!("  ratio: {}:1", report.contrast_ratio);
    println!("  AA:    {}", pass_fail(report.passes_aa));
    println!("  AAA:   {}", pass_fail(report.passes_aaa));
    if let Some(url) = &report.widget_url {
        println!("  widget: {url}");
    }
}

fn print_info(level: Option<WcagLevel>) {
    match level {
        Some(level) => println!("{}", level.info()),
        None => {
            println!("{WCAG_INFO}");
            println!();
            println!("{}", WcagLevel::AA.info());
            println!();
            println!("{}", WcagLevel::AAA.info());
        }
    }
}

const fn pass_fail(passed: bool) -> &'static str {
    if passed {
        "pass"
    } else {
        "fail"
    }
}
