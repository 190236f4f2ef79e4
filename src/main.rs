use cabinetkit::cli::{run, Cli};
use cabinetkit::{init_logging, BUILD_DATE, VERSION};
use clap::Parser;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging()?;
    debug!(version = VERSION, build_date = BUILD_DATE, "starting cabinetkit");

    print!("{}", run(&cli)?);

    Ok(())
}
