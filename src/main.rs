mod cli;
mod config;
mod inputs;

use clap::Parser;
use framecut_core::cut_file;

use cli::Args;
use config::Config;

fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Cut every input in order, stopping at the first failure.
fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::resolve(args.config.as_deref())?;
    let options = args.cut_options(&config);
    let files = inputs::expand(&args.files)?;

    log::debug!("Cutting {} files with {:?}", files.len(), options);

    for file in &files {
        cut_file(file, &options)?;
    }

    Ok(())
}
