use clap::{Parser, Subcommand};
use rangesum::config::{ParamOverrides, PipelineConfig};
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Sum an integer range with a chunked map-reduce pipeline
#[derive(Parser)]
#[command(name = "rangesum")]
#[command(about = "Sum an integer range by fanning chunks out to parallel workers", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pipeline (default command)
    Run {
        /// Path to a pipeline YAML file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Inclusive lower bound of the range
        #[arg(long)]
        from: Option<i64>,

        /// Inclusive upper bound of the range
        #[arg(long)]
        to: Option<i64>,

        /// Maximum number of elements per chunk
        #[arg(long)]
        chunk_size: Option<u64>,

        /// Maximum number of chunks summed concurrently
        #[arg(long)]
        max_parallel: Option<usize>,

        /// Print the run summary as JSON instead of the human-readable line
        #[arg(long)]
        json: bool,
    },
    /// Validate a pipeline file without running it
    Validate {
        /// Path to a pipeline YAML file
        #[arg(short = 'c', long)]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("rangesum started with verbosity level: {}", cli.verbose);

    let result = match cli.command {
        Some(Commands::Run {
            config,
            from,
            to,
            chunk_size,
            max_parallel,
            json,
        }) => run_pipeline(config, from, to, chunk_size, max_parallel, json).await,
        Some(Commands::Validate { config }) => validate_pipeline(&config),
        None => {
            // Default to a run with the documented defaults
            run_pipeline(None, None, None, None, None, false).await
        }
    };

    if let Err(e) = result {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run_pipeline(
    config_path: Option<PathBuf>,
    from: Option<i64>,
    to: Option<i64>,
    chunk_size: Option<u64>,
    max_parallel: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => PipelineConfig::from_yaml_file(&path)?,
        None => PipelineConfig::default(),
    };
    let config = config.apply_overrides(&ParamOverrides {
        from_value: from,
        to_value: to,
        chunk_size,
        max_parallel,
    });

    let summary = rangesum::pipeline::run(&config).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Sum of integers from {} to {} is: {}",
            summary.params.from_value, summary.params.to_value, summary.total
        );
    }
    Ok(())
}

fn validate_pipeline(path: &Path) -> anyhow::Result<()> {
    let config = PipelineConfig::from_yaml_file(path)?;
    config.validate()?;
    println!("Pipeline '{}' is valid.", config.name);
    Ok(())
}
