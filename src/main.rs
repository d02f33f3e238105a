#![doc = include_str!("../README.md")]

extern crate alloc;

use activity_fetcher::{Fetcher, ReqwestHttpClient};
use alloc::sync::Arc;
use clap::Parser;
use core::error::Error;
use env_logger::Env;
use std::process::exit;
use tokio::io::{AsyncWriteExt, stdout};

const DEFAULT_ENDPOINT: &str = "activity/";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// An API endpoint relative to the base URL.
    #[arg(default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
    /// Becomes verbose.
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{error}");
        exit(1)
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let Arguments { endpoint, verbose } = Arguments::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(if verbose {
        "debug"
    } else {
        "warn"
    }))
    .init();

    let mut fetcher = Fetcher::new(Arc::new(ReqwestHttpClient::new()?), endpoint);
    fetcher.call().await?;

    let mut output = stdout();
    output
        .write_all(serde_json::to_string_pretty(&fetcher.data())?.as_bytes())
        .await?;
    output.write_all(b"\n").await?;
    output.flush().await?;

    Ok(())
}
