use std::fs;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

use addchain_codegen::Syntax;

/// Bundled copy of chains/fq.txt, used when no file is given.
const DEMO_CHAIN: &str = include_str!("../chains/fq.txt");

#[derive(Parser)]
#[command(name = "addchain-codegen")]
#[command(about = "Translate an addition chain listing into Rust field arithmetic")]
struct Cli {
    /// Addition chain file (the bundled demonstration chain when omitted)
    chain: Option<PathBuf>,

    /// Emit a separate binding before every in-place operation, for field
    /// types without square/mul helpers
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let input = match &cli.chain {
        Some(path) => fs::read_to_string(path)
            .wrap_err_with(|| format!("could not read chain file {}", path.display()))?,
        None => DEMO_CHAIN.to_owned(),
    };

    let code = addchain_codegen::convert(&input, cli.verbose, &Syntax::default())?;
    print!("{code}");
    Ok(())
}
