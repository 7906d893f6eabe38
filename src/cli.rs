// src/cli.rs
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{bail, eyre, WrapErr};
use color_eyre::Result;
use log::{info, LevelFilter};
use serde::Serialize;

use crate::color::{samples_from_image, samples_from_styles, ColorSample, Rgb};
use crate::config::consts::{DATA_DIR, TOP_COLORS, WORKERS};
use crate::config::options::{ColorOptions, DataPaths, MatcherOptions, ResolveOptions};
use crate::progress::Progress;
use crate::resolver::{Resolver, TeamInput};
use crate::venue::VenueRecord;
use crate::{runner, store};

#[derive(Parser, Debug)]
#[command(name = "team-resolve", version, about = "Resolve scraped team names, colours, states and venue codes")]
pub struct Cli {
    #[command(flatten)]
    pub data: DataArgs,

    /// Log debug detail to the log file.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Worker threads for batch commands.
    #[arg(long, global = true, default_value_t = WORKERS)]
    pub workers: usize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug)]
pub struct DataArgs {
    /// Directory holding palette.json, suburbs.csv, venues.csv, words.txt.
    #[arg(long, global = true, default_value = DATA_DIR)]
    pub data: PathBuf,
    #[arg(long, global = true)]
    pub palette: Option<PathBuf>,
    #[arg(long, global = true)]
    pub suburbs: Option<PathBuf>,
    #[arg(long, global = true)]
    pub registry: Option<PathBuf>,
    #[arg(long, global = true)]
    pub words: Option<PathBuf>,
}

impl DataArgs {
    /// Explicit files override whatever the data directory holds.
    fn paths(&self) -> DataPaths {
        let found = DataPaths::from_dir(&self.data);
        DataPaths {
            palette: self.palette.clone().or(found.palette),
            suburbs: self.suburbs.clone().or(found.suburbs),
            registry: self.registry.clone().or(found.registry),
            words: self.words.clone().or(found.words),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find which candidate teams a passage mentions.
    Match {
        /// File of candidate names, one per line.
        #[arg(long)]
        teams: Option<PathBuf>,
        /// A candidate name (repeatable).
        #[arg(short, long = "candidate")]
        candidates: Vec<String>,
        /// Keep going past the second name instead of stopping early.
        #[arg(long)]
        complete: bool,
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Name colours from hex values, a markup fragment or a logo image.
    Colour {
        /// Hex colours, treated as kit swatches.
        hex: Vec<String>,
        #[arg(long)]
        styles: Option<PathBuf>,
        #[arg(long)]
        image: Option<PathBuf>,
        /// How many logo colours to name.
        #[arg(short, default_value_t = TOP_COLORS)]
        k: usize,
    },
    /// Resolve one venue's state and registry codes.
    Venue {
        name: String,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        url: Option<String>,
        /// Former name (repeatable).
        #[arg(long = "known-as")]
        known_as: Vec<String>,
    },
    /// Resolve a JSON array of venue records.
    Venues {
        input: PathBuf,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Scan a JSON array of team pages for mentions of candidate teams.
    Teams {
        #[arg(long)]
        teams: PathBuf,
        input: PathBuf,
        #[arg(long)]
        complete: bool,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// Prints `[n/total] name` lines to stderr.
struct StderrProgress {
    total: usize,
    done: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, name: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {name}", self.done, self.total);
    }
    fn finish(&mut self) {
        eprintln!("Done: {} records.", self.done);
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    install_logger(&crate::log::default_path(), level)?;
    info!("team-resolve {:?}", cli.command);

    let complete = matches!(cli.command, Command::Match { complete: true, .. } | Command::Teams { complete: true, .. });
    let top_k = match cli.command {
        Command::Colour { k, .. } => k,
        _ => TOP_COLORS,
    };
    let options = ResolveOptions {
        matcher: if complete { MatcherOptions::complete() } else { MatcherOptions::default() },
        colors: ColorOptions { top_k },
        workers: cli.workers.max(1),
    };

    let resolver = Resolver::load(&cli.data.paths(), options).wrap_err("could not load reference data")?;

    match cli.command {
        Command::Match { teams, candidates, text, .. } => {
            let mut names = candidates;
            if let Some(path) = teams {
                names.extend(read_names(&path)?);
            }
            if names.is_empty() {
                bail!("no candidates: pass --teams or --candidate");
            }
            let found = resolver.match_team(&names, &text.join(" "));
            write_json(&found, None)
        }
        Command::Colour { hex, styles, image, .. } => {
            let mut samples = hex
                .iter()
                .map(|h| Rgb::from_hex(h).map(ColorSample::kit))
                .collect::<crate::Result<Vec<_>>>()?;
            if let Some(path) = styles {
                samples.extend(samples_from_styles(&read_text(&path)?));
            }
            if let Some(path) = image {
                let bytes = fs::read(&path).wrap_err_with(|| format!("reading {}", path.display()))?;
                samples.extend(samples_from_image(&bytes)?);
            }
            write_json(&resolver.team_colors(&samples), None)
        }
        Command::Venue { name, location, url, known_as } => {
            let mut venue = VenueRecord { name, location, url, known_as, ..VenueRecord::default() };
            resolver.resolve_venue(&mut venue);
            write_json(&venue, None)
        }
        Command::Venues { input, out } => {
            let venues: Vec<VenueRecord> = store::load_json(&input)?;
            let mut progress = StderrProgress { total: 0, done: 0 };
            let resolved = runner::resolve_venues(&resolver, venues, Some(&mut progress));
            write_json(&resolved, out.as_deref())
        }
        Command::Teams { teams, input, out, .. } => {
            let candidates = read_names(&teams)?;
            let pages: Vec<TeamInput> = store::load_json(&input)?;
            let mut progress = StderrProgress { total: 0, done: 0 };
            let matches = runner::resolve_teams(&resolver, &pages, &candidates, Some(&mut progress));
            write_json(&matches, out.as_deref())
        }
    }
}

fn install_logger(path: &Path, level: LevelFilter) -> Result<()> {
    crate::log::init(path, level).map_err(|e| eyre!("could not install logger: {e}"))
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).wrap_err_with(|| format!("reading {}", path.display()))
}

/// One name per line; blank lines and `#` comments are skipped.
fn read_names(path: &Path) -> Result<Vec<String>> {
    Ok(read_text(path)?
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Pretty JSON to `out`, or stdout.
fn write_json<T: Serialize + ?Sized>(value: &T, out: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, json + "\n").wrap_err_with(|| format!("writing {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}
