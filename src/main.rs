//! Command-line interface for contrast_pair
//!
//! Prints a `DOMINANT=` / `BACKGROUND=` line pair for sketchybar to source.

use std::path::{Path, PathBuf};
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use contrast_pair::{analyze_file, ExtractionConfig, ExtractionError, ThemeColors};
use log::info;

/// Extract a readable foreground/background color pair from an image.
#[derive(Parser, Debug)]
#[command(name = "contrast-pair", version, about)]
struct Cli {
    /// Path to the input image
    #[arg(required_unless_present = "dump_config")]
    image: Option<PathBuf>,

    /// Load tuning parameters from a JSON file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Quantization bucket width
    #[arg(long)]
    step: Option<u8>,

    /// Strict tier minimum contrast ratio
    #[arg(long)]
    min_contrast: Option<f64>,

    /// Strict tier minimum color distance
    #[arg(long)]
    min_distance: Option<f64>,

    /// Print the result as a JSON object
    #[arg(long)]
    json: bool,

    /// Also print LABEL= and ICON= text colors readable on the background
    #[arg(long)]
    labels: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            error.exit()
        }
        Err(error) => {
            let _ = error.print();
            process::exit(1);
        }
    };

    init_logging(cli.verbose);

    if let Err(error) = run(&cli) {
        eprintln!("Error: {}", error);
        eprintln!("Suggestion: {}", error.user_message());
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: &Cli) -> Result<(), ExtractionError> {
    let config = effective_config(cli)?;

    if cli.dump_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let Some(image_path) = cli.image.as_deref() else {
        return Err(ExtractionError::invalid_parameter("image", "<missing>"));
    };

    let analysis = analyze_file(image_path, &config)?;
    if let Some(tier) = analysis.tier() {
        info!("{}: pair selected by {:?} tier", image_path.display(), tier);
    }
    print_result(&analysis.theme(), cli)
}

fn effective_config(cli: &Cli) -> Result<ExtractionConfig, ExtractionError> {
    let mut config = match cli.config.as_deref() {
        Some(path) => load_config(path)?,
        None => ExtractionConfig::default(),
    };

    if let Some(step) = cli.step {
        config.quantization.step = step;
    }
    if let Some(min_contrast) = cli.min_contrast {
        config.selection.min_contrast = min_contrast;
    }
    if let Some(min_distance) = cli.min_distance {
        config.selection.min_distance = min_distance;
    }

    config.validate()?;
    Ok(config)
}

fn load_config(path: &Path) -> Result<ExtractionConfig, ExtractionError> {
    info!("loading configuration from {}", path.display());
    ExtractionConfig::from_json_file(path)
}

fn print_result(theme: &ThemeColors, cli: &Cli) -> Result<(), ExtractionError> {
    let label = if cli.labels { Some(theme.label()?) } else { None };

    if cli.json {
        let mut output = serde_json::to_value(theme).map_err(|e| ExtractionError::ProcessingError {
            message: format!("Failed to serialize result: {}", e),
        })?;
        if let (Some(label), Some(fields)) = (&label, output.as_object_mut()) {
            fields.insert("label".to_string(), label.clone().into());
            fields.insert("icon".to_string(), label.clone().into());
        }
        println!("{}", output);
    } else {
        println!("DOMINANT={}", theme.dominant);
        println!("BACKGROUND={}", theme.background);
        if let Some(label) = label {
            println!("LABEL={}", label);
            println!("ICON={}", label);
        }
    }
    Ok(())
}
