mod brands;
mod data;
mod weight;

use std::path::PathBuf;

use anyhow::Result;

use data::process::process_catalog;

const DEFAULT_INPUT: &str = "data/products.csv";
const DEFAULT_OUTPUT: &str = "data/cleaned_products.csv";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string()));
    let output = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string()));

    let summary = process_catalog(&input, &output)?;
    log::info!(
        "wrote {} of {} rows to {}",
        summary.kept,
        summary.loaded,
        output.display()
    );
    Ok(())
}
