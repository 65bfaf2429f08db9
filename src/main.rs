use clap::Parser;
use std::collections::HashMap;

use lfm::cli::{self, Args};
use lfm::config::load_lfm_config;
use lfm::error::Result;
use lfm::lfm::Lfm;

#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let args = Args::parse();

    if let Err(e) = run_app(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_app(args: Args) -> Result<()> {
    let config = load_lfm_config()?;
    let inputs: HashMap<String, String> = args
        .inputs()
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();
    let lfm = Lfm::new(config, inputs)?;
    cli::run(args.command, &lfm).await
}
