// src/cli.rs
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

use crate::params;
use crate::progress::ConsoleProgress;
use crate::render::{self, RenderConfig};
use crate::scholar::{self, ScholarWeb};
use crate::store;

#[derive(Parser)]
#[command(
    name = "pubsite",
    about = "Keep the publications page of the site in sync with Google Scholar",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scrape the Scholar profile and rewrite the publications data file
    Fetch {
        /// Scholar author id to fetch
        #[arg(long, default_value = params::SCHOLAR_ID)]
        id: String,

        /// Output path for the publications file
        #[arg(long, short, default_value = params::DATA_FILE)]
        out: PathBuf,

        /// Base pause between requests, in milliseconds (0 disables)
        #[arg(long, default_value_t = params::REQUEST_PAUSE_MS)]
        pause_ms: u64,
    },
    /// Render the data file into the publications page
    Render {
        /// Publications file written by `fetch`
        #[arg(long, default_value = params::DATA_FILE)]
        data: PathBuf,

        /// Target HTML document to splice into
        #[arg(long, default_value = params::PAGE_FILE)]
        html: PathBuf,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Fetch { id, out, pause_ms } => fetch(&id, &out, pause_ms),
        Command::Render { data, html } => render_page(&data, &html),
    }
}

fn fetch(id: &str, out: &Path, pause_ms: u64) -> Result<()> {
    let source = ScholarWeb::new(pause_ms)?;
    let mut progress = ConsoleProgress;
    let pubs = scholar::collect(&source, id, Some(&mut progress))?;
    store::save(out, &pubs)?;
    println!("Saved {} publications to {}", pubs.len(), out.display());
    Ok(())
}

fn render_page(data: &Path, html: &Path) -> Result<()> {
    let pubs = store::load(data)?;
    render::update_page(html, &pubs, &RenderConfig::default())?;
    println!("Successfully updated {} with all publications!", html.display());
    Ok(())
}
