use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use ntclose::{Closer, Options};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ntclose")]
#[command(about = "Transitively close every predicate in an N-Triples file")]
struct Cli {
    /// The N-Triples file to read
    input: PathBuf,
    /// The file to write the closed, deduplicated triples to
    output: PathBuf,
    /// Verbose mode - sets the RUST_LOG level to info, defaults to warning level
    #[clap(long, short, action, default_value = "false")]
    verbose: bool,
    /// Debug mode - sets the RUST_LOG level to debug, defaults to warning level
    #[clap(long, action, default_value = "false")]
    debug: bool,
    /// Maximum length of a single token, in bytes
    #[clap(long, default_value_t = ntclose::consts::DEFAULT_MAX_TOKEN_LEN)]
    max_token_len: usize,
}

fn main() -> Result<()> {
    let cmd = Cli::parse();

    let log_level = if cmd.verbose { "info" } else { "warn" };
    let log_level = if cmd.debug { "debug" } else { log_level };
    std::env::set_var("RUST_LOG", log_level);
    env_logger::init();

    let input = File::open(&cmd.input)
        .with_context(|| format!("could not open {} for reading", cmd.input.display()))?;
    let output = File::create(&cmd.output)
        .with_context(|| format!("could not open {} for writing", cmd.output.display()))?;

    let mut closer = Closer::new(Options {
        max_token_len: cmd.max_token_len,
    });
    closer.load(BufReader::new(input))?;
    info!(
        "parsed {} lines: {} triples over {} predicates",
        closer.lines_read(),
        closer.num_relations(),
        closer.num_predicates()
    );

    closer.close();
    info!("{} triples after closure", closer.num_relations());

    let mut out = BufWriter::new(output);
    closer.write(&mut out)?;
    out.flush()
        .with_context(|| format!("could not finish writing {}", cmd.output.display()))?;

    Ok(())
}
