mod argparse;
mod terms;
mod utils;

use argparse::{parse_args, OutputFormat};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args();
    utils::init_logger(cli.verbose);

    let filters = terms::build_filters(&cli.terms)?;
    if cli.validate {
        filters.validate()?;
        info!("Domain with {} terms is well formed", filters.len());
    }

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&filters)?),
        OutputFormat::Domain => println!("{}", filters),
    }

    Ok(())
}
