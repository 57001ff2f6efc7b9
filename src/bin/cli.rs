// src/bin/cli.rs
use assembly_search::{cli, log};
use color_eyre::eyre::eyre;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    let args = cli::parse_args(std::env::args().skip(1)).map_err(|e| eyre!("{e}\n\n{}", cli::help()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(args, &mut out).map_err(|e| eyre!("{e}"))
}
