use clap::Parser;

mod args;

mod cli;
use cli::Cli;

mod sample;
use sample::Sample;

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    cli.verbosity.setup()?;

    Sample::new(cli.string).run(cli.exact)
}
