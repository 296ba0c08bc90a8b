use clap::Parser;

use crate::args;

/// Packs a fixed sequence of values into a bit stream and reads
/// them back from the serialized bytes.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// The string to pack at the end of the sequence.
    #[clap(short, long, env = "BITPACK_DEMO_STRING", default_value = "Hello world!")]
    pub string: String,

    /// Fail on any difference in decoded floats instead of allowing
    /// for rounding error.
    #[clap(long)]
    pub exact: bool,

    #[clap(flatten)]
    pub verbosity: args::Verbosity,
}
