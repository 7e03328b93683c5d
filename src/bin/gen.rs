//! k2list-gen: CLI tool for generating the PornSite rule list from v2fly
//! domain-list-community data.

use clap::Parser;
use k2list::{detect_source, ListGenerator, OUTPUT_PATH};
use std::path::Path;

#[derive(Parser)]
#[command(name = "k2list-gen")]
#[command(author = "Kaitu.io")]
#[command(version = "0.1.0")]
#[command(about = "Generate a Clash classical rule list from v2fly domain-list-community data", long_about = None)]
struct Cli {}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let _cli = Cli::parse();

    let generator = ListGenerator::new(detect_source());
    let list = generator.generate();

    // Best-effort output: a failed write is reported but the run still
    // exits with success.
    let output = Path::new(OUTPUT_PATH);
    match list.write_to(output) {
        Ok(()) => {
            println!("Wrote {:?} ({} lines)", output, list.line_count());
        }
        Err(e) => {
            eprintln!("Error writing {:?}: {}", output, e);
        }
    }
}
