use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::config::{DEFAULT_ASSET_DIR, DEFAULT_BIND_ADDRESS, DEFAULT_DATA_PATH};
use commands::{list_regions, render_page, serve};

#[derive(Parser)]
#[command(name = "covidash")]
#[command(about = "COVID-19 India dashboard: web API and command line renderer")]
#[command(version)]
pub struct Cli {
    /// Path to the case CSV
    ///
    /// Expected columns: State/UnionTerritory, Cured, Deaths, Confirmed, Date
    #[arg(short, long, env = "COVID_DATA_PATH", default_value = DEFAULT_DATA_PATH, global = true)]
    pub data_path: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
        bind_address: String,

        /// Directory served under /assets
        #[arg(short, long, env = "ASSET_DIR", default_value = DEFAULT_ASSET_DIR)]
        asset_dir: PathBuf,
    },
    /// Render one page and print it as JSON on stdout
    ///
    /// Examples:
    ///   covidash render dashboard --region Kerala
    ///   covidash render comparison --region Kerala --region-b Goa
    ///   covidash render "SMA Forecast"
    Render {
        /// Page slug or title
        page: String,

        /// Region for dashboard and SMA pages, first region for comparison
        #[arg(short, long)]
        region: Option<String>,

        /// Second region for the comparison page
        #[arg(short = 'b', long)]
        region_b: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the regions present in the dataset, one per line
    Regions,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, asset_dir } => {
                serve(&self.data_path, &bind_address, &asset_dir).await?;
            }
            Commands::Render { page, region, region_b, pretty } => {
                render_page(&self.data_path, &page, region.as_deref(), region_b.as_deref(), pretty)?;
            }
            Commands::Regions => {
                list_regions(&self.data_path)?;
            }
        }
        Ok(())
    }
}
