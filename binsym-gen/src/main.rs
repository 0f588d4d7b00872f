use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::debug;

use binsym_gen::{Error, Generator, OutputTarget, DEFAULT_PREFIX, USAGE};

/// Generates a C++ table mapping asset names to the linker symbols of their embedded bytes.
#[derive(Debug, Parser)]
#[command(name = "binsym-gen", version, about, long_about = None)]
struct Cli {
    /// Write `resources.cpp` and treat every argument as an asset name
    #[arg(long)]
    default_output: bool,

    /// Prefix of the symbols exposed by the embedded objects
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Fail when two asset names map to the same symbol
    #[arg(long)]
    unique: bool,

    /// Output path followed by asset names, or asset names only with `--default-output`.
    /// Everything from the first of them on is taken as is, even when starting with `-`.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    let target = if cli.default_output {
        OutputTarget::Default
    } else {
        OutputTarget::Explicit
    };

    let generator = Generator::new(target)
        .with_prefix(cli.prefix)
        .with_unique_symbols(cli.unique);

    debug!(
        "generating with {:?} target and prefix `{}`",
        generator.target(),
        generator.prefix()
    );

    match generator.run(cli.args) {
        Ok(path) => println!("File {} is generated.", path.display()),
        Err(e @ (Error::Usage | Error::InvalidPrefix(_))) => {
            println!("{e}");
            println!("{USAGE}");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e).context("cannot generate asset symbol table"),
    }

    Ok(ExitCode::SUCCESS)
}
