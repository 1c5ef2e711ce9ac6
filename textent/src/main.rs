// textent/src/main.rs
//! textent entry point: read text, run the analyzer, print the report.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;

use textent::cli::Cli;
use textent::logger;
use textent::render::render;
use textent_core::{analyze_entropy, AnalysisOptions};

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else {
        logger::init_logger(None);
    }

    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let options = AnalysisOptions {
        user_keywords: args.keywords,
        title: args.title,
        heading_levels: args.heading_levels,
    };

    let result = analyze_entropy(&text, &options);
    log::debug!("analysis result: {result:?}");
    println!("{}", render(&result, args.format)?);

    Ok(())
}
