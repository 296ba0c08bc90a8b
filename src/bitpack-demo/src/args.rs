use clap::{ArgAction, Args};

/// Log level selection for the demo run.
#[derive(Clone, Copy, Debug, Args)]
pub struct Verbosity {
    /// Logs more about the packing process.
    ///
    /// `-v` adds the serialized bytes and bit count, `-vv` also traces
    /// every float decomposition done by the codec.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only logs warnings and errors, hiding the decoded values.
    #[clap(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Verbosity {
    /// Installs `simple_logger` at the selected level.
    pub fn setup(self) -> eyre::Result<()> {
        simple_logger::init_with_level(self.log_level())?;
        Ok(())
    }

    fn log_level(self) -> log::Level {
        match (self.quiet, self.verbose) {
            (true, _) => log::Level::Warn,
            (false, 0) => log::Level::Info,
            (false, 1) => log::Level::Debug,
            (false, _) => log::Level::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verbosity(verbose: u8, quiet: bool) -> Verbosity {
        Verbosity { verbose, quiet }
    }

    #[test]
    fn levels() {
        assert_eq!(verbosity(0, true).log_level(), log::Level::Warn);
        assert_eq!(verbosity(0, false).log_level(), log::Level::Info);
        assert_eq!(verbosity(1, false).log_level(), log::Level::Debug);
        assert_eq!(verbosity(3, false).log_level(), log::Level::Trace);
    }
}
