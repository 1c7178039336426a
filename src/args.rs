use clap::Parser;

/// This is a ranked-choice poll tabulation program.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The file containing the ballots of the poll to tabulate.
    /// See the documentation for the supported file formats.
    #[clap(short, long, value_parser)]
    pub input: String,

    /// (default json) The type of the input: 'json' or 'csv'. If not specified, it is
    /// guessed from the file extension.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (file path) A reference file containing the outcome of the poll in JSON format,
    /// as produced by an independent tabulator. If provided, polltally will check that
    /// its own output matches the reference exactly.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the summary of the poll will be
    /// written in JSON format to the given location.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
