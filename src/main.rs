use std::io::{self, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{args::Args, group_iterator::GroupIterator, parameter::Parameter};

mod args;
mod chunk;
mod error;
mod group_iterator;
mod parameter;
mod sequence_generator;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);
    info!(
        n = args.max_number,
        g = args.group_count,
        delimiter = ?args.delimiter,
        seed = ?args.seed,
        "parsed arguments"
    );

    let parameter = Parameter::new(args.max_number, args.group_count, &args.delimiter)
        .context("invalid arguments")?;
    info!(?parameter, "parameter");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut writer = BufWriter::new(io::stdout().lock());
    for group in GroupIterator::new(parameter, &mut rng) {
        writeln!(writer, "{}", group?)?;
    }
    writer.flush()?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
