use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(
    name = "dfq",
    about = "Build search domains and print them in wire form",
    version = "0.1.0",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Domain terms in order: `|`, `!`, `&` (or `or`, `not`, `and`) and
    /// leaves written as `field:comparator:value`, e.g. `country_id.code:=:be`
    #[arg(required = true)]
    pub terms: Vec<String>,

    /// Reject domains whose operators lack operands
    #[arg(long)]
    pub validate: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON array, ready for an RPC payload
    Json,
    /// Conventional domain notation
    Domain,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
