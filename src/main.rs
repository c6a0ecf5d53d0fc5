extern crate log;
pub mod districts;
pub mod error;
pub mod geofile;
use crate::districts::extract::extract_city_districts;
use clap::Parser;
use std::path::PathBuf;

/// Extract the district features of one city from a country-wide
/// municipality GeoJSON file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the country-wide municipality GeoJSON file.
    #[arg(short, long)]
    source_filepath: PathBuf,
    /// Name of the city whose districts should be extracted, e.g. "Wien".
    #[arg(short, long)]
    city_name: String,
    /// Path to write the district-only GeoJSON file to.
    #[arg(short, long)]
    output_filepath: PathBuf,
}

fn try_main() -> anyhow::Result<()> {
    let args = Args::try_parse()?;
    extract_city_districts(&args.source_filepath, &args.city_name, &args.output_filepath)?;
    Ok(())
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    env_logger::init();
    if let Err(e) = try_main() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1)
    }
}
