use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{arg, command, value_parser};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn, LevelFilter};

fn main() -> anyhow::Result<()> {
    let matches = command!()
        .arg(
            arg!(
            -i --input <FILE> "Game file: white pieces, black pieces, then one turn per line"
                    )
            .default_value("input.txt")
            .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(
            -o --output <FILE> "Where the final position goes, `-` for stdout"
                    )
            .default_value("output.txt")
            .value_parser(value_parser!(PathBuf)),
        )
        .arg(arg!(
            -v --verbose "Log every applied move"
        ))
        .get_matches();

    let mut logger = env_logger::Builder::from_default_env();
    if matches.get_flag("verbose") {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let input = matches
        .get_one::<PathBuf>("input")
        .context("no input file given")?;
    let output = matches
        .get_one::<PathBuf>("output")
        .context("no output file given")?;

    // Rule and notation failures are reported through the output, not the exit code.
    let report = match fs::read_to_string(input) {
        Ok(text) => draughts_core::report(&text),
        Err(err) => {
            warn!("Failed to read {}: {err}", input.display());
            err.to_string()
        }
    };

    if output.as_path() == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{report}").context("failed to write to stdout")?;
    } else {
        fs::write(output, report)
            .with_context(|| format!("failed to write {}", output.display()))?;
        info!("Result written to {}", output.display());
    }
    Ok(())
}
