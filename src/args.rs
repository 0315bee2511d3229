use clap::Parser;

/// This is a report generator for election results snapshots.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The snapshot containing the races, candidates, reporting units and results, in JSON format.
    /// For more information about the file format, read the documentation of the ap_results::manual module.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path) A reference file containing an expected summary in JSON format. If provided, apresults will
    /// check that the generated summary matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the summary of the races will be written in JSON format to the given
    /// location. By default, the summary is printed to the standard output.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
