//! CLI binary entry point for json-mapper

use clap::Parser;
use json_mapper::cli::commands::map::{MapArgs, handle_map, usage_hint};
use json_mapper::config::MapperConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "json-mapper")]
#[command(about = "Reshape a JSON document using an XML property mapping")]
#[command(version)]
struct Cli {
    /// Input JSON file followed by the XML mapping configuration
    #[arg(value_name = "FILE")]
    paths: Vec<PathBuf>,
    /// Directory for the output file (default: current directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
    /// Log each mapped declaration
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let [input, mapping] = match <[PathBuf; 2]>::try_from(cli.paths) {
        Ok(paths) => paths,
        Err(_) => {
            println!("{}", usage_hint());
            return;
        }
    };

    let args = MapArgs {
        input,
        mapping,
        config: MapperConfig::from_env().with_output_dir(cli.output_dir),
    };

    if let Err(e) = handle_map(&args) {
        eprintln!("{}", e.diagnostic());
        std::process::exit(1);
    }
}
