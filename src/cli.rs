// src/cli.rs
//! Command-line front end: `collect` a profile to JSON, `render` JSON to HTML.

use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};

use crate::config::consts::{DEFAULT_HTML_FILE, DEFAULT_JSON_FILE};
use crate::config::options::{CollectOptions, DriverOptions, EntryPolicy};
use crate::driver::HttpDriver;
use crate::file::resolve_single_out_path;
use crate::progress::Progress;
use crate::{render, scrape, store};

/// Douban movie ratings: collect them, then render them.
#[derive(Parser, Debug)]
#[command(name = "douban_scrape")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk a user's rated-movies listing and save it as JSON
    #[command(alias = "c")]
    Collect(CollectArgs),

    /// Turn a saved JSON file into a single HTML page
    #[command(alias = "r")]
    Render(RenderArgs),
}

#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Profile id as it appears in /people/{id}/
    pub user_id: String,

    /// Also record each entry's poster image URL
    #[arg(long, alias = "include_poster")]
    pub include_poster: bool,

    /// Output file or directory
    #[arg(short, long, default_value = "")]
    pub out: String,

    /// Stop after this many pages (<= 0 reads just the first)
    #[arg(long, alias = "max_pages", allow_negative_numbers = true)]
    pub max_pages: Option<i64>,

    /// Log and skip entries missing a required field instead of aborting
    #[arg(long)]
    pub skip_invalid: bool,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// JSON file written by `collect`
    pub input: PathBuf,

    /// Output file or directory
    #[arg(short, long, default_value = "")]
    pub out: String,
}

impl CollectArgs {
    fn collect_options(&self) -> CollectOptions {
        let mut opts = CollectOptions::new(self.user_id.as_str());
        opts.include_poster = self.include_poster;
        opts.max_pages = self.max_pages;
        if self.skip_invalid {
            opts.entry_policy = EntryPolicy::SkipInvalid;
        }
        opts
    }

    fn driver_options(&self) -> DriverOptions {
        DriverOptions { timeout: self.timeout_secs.map(Duration::from_secs), ..DriverOptions::default() }
    }
}

/// Page-by-page status lines on stderr.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, start_url: &str) {
        eprintln!("Collecting from {start_url}");
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn page_done(&mut self, page: u32, entries: usize) {
        eprintln!("Page {page}: {entries} entries");
    }
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Collect(args) => run_collect(&args),
        Command::Render(args) => run_render(&args),
    }
}

fn run_collect(args: &CollectArgs) -> Result<()> {
    let out = resolve_single_out_path(&args.out, DEFAULT_JSON_FILE).wrap_err("Invalid output path")?;
    let opts = args.collect_options();

    let driver = HttpDriver::new(&args.driver_options()).wrap_err("Could not start HTTP client")?;
    let mut progress = ConsoleProgress;
    let records = scrape::collect(driver, &opts, Some(&mut progress))
        .wrap_err_with(|| format!("Collecting ratings for {:?} failed", opts.user_id))?;

    store::save_records(&out, &records)?;
    println!("Saved {} reviews to {}", records.len(), out.display());
    Ok(())
}

fn run_render(args: &RenderArgs) -> Result<()> {
    let out = resolve_single_out_path(&args.out, DEFAULT_HTML_FILE).wrap_err("Invalid output path")?;
    let records = store::load_records(&args.input)?;
    let written = render::render_to_path(&records, &out)?;
    println!("HTML file created: {} ({} reviews)", written.display(), records.len());
    Ok(())
}
