//! Command implementations for the SFPD CLI.
//!
//! Every command reads the five source CSVs from a data directory, joins them
//! into an [`IncidentTable`](sfpd_data::IncidentTable) and reports on it.

use clap::Subcommand;

pub mod check;
pub mod export;
pub mod options;
pub mod summary;

const DEFAULT_DATA_DIR: &str = "fixtures";

#[derive(Subcommand)]
pub enum Command {
    /// Print the six dashboard aggregations for one selection
    Summary {
        /// Directory holding SF_Incidents.csv, SF_Coordinates.csv, ...
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_DIR)]
        data_dir: String,

        /// Incident year (defaults to the first year in the data)
        #[arg(short = 'y', long)]
        year: Option<i32>,

        /// Resolution (defaults to the first resolution in the data)
        #[arg(short = 'r', long)]
        resolution: Option<String>,

        /// Police district (defaults to the first district in the data)
        #[arg(short = 'p', long)]
        district: Option<String>,

        /// Print the aggregations as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the selectable years, resolutions and police districts
    Options {
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_DIR)]
        data_dir: String,
    },

    /// Write the merged incident table to a CSV file
    Export {
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_DIR)]
        data_dir: String,

        /// Output path for the merged CSV
        #[arg(short = 'o', long)]
        output: String,
    },

    /// Load every source table and report row counts and dropped incidents
    Check {
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_DIR)]
        data_dir: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary {
            data_dir,
            year,
            resolution,
            district,
            json,
        } => summary::run_summary(&data_dir, year, resolution, district, json),
        Command::Options { data_dir } => options::run_options(&data_dir),
        Command::Export { data_dir, output } => export::run_export(&data_dir, &output),
        Command::Check { data_dir } => check::run_check(&data_dir),
    }
}

/// Read and join the source tables in `data_dir`.
fn load_table(data_dir: &str) -> anyhow::Result<sfpd_data::IncidentTable> {
    let sources = sfpd_db::SourceFiles::read_dir(data_dir)?;
    sfpd_data::IncidentTable::load(&sources)
}
