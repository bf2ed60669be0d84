//! Command implementations for the Gapminder dashboard CLI.
//!
//! Every command loads the dataset once, builds the dashboard and writes JSON
//! to stdout for a rendering front end to consume.

use clap::{Args, Subcommand};
use gmd_dashboard::{Dashboard, SelectionDefaults};
use gmd_model::{Continent, Variable, ViewId};
use gmd_store::Dataset;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;

pub mod project;
pub mod replay;

/// Dataset location and startup preferences shared by all commands.
#[derive(Args, Debug, Clone)]
pub struct DashboardArgs {
    /// Gapminder CSV to load (`.csv.gz` is decompressed)
    #[arg(short, long, global = true, default_value = "fixtures/gapminder.csv")]
    pub dataset: PathBuf,

    /// Initial continent for the chart views, if the dataset has it
    #[arg(long, global = true)]
    pub default_continent: Option<Continent>,

    /// Initial year for all views, if the dataset has it
    #[arg(long, global = true)]
    pub default_year: Option<i32>,

    /// Initial map variable
    #[arg(long, global = true, default_value = "Life Expectancy")]
    pub default_variable: Variable,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

impl DashboardArgs {
    pub fn defaults(&self) -> SelectionDefaults {
        SelectionDefaults {
            continent: self.default_continent,
            year: self.default_year,
            variable: self.default_variable,
        }
    }

    /// Load the dataset and build the dashboard. Any failure here is fatal.
    pub fn load(&self) -> anyhow::Result<Dashboard> {
        let dataset = Dataset::from_path(&self.dataset)?;
        Ok(Dashboard::with_defaults(Rc::new(dataset), &self.defaults())?)
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the continents, years and map variables the UI may offer
    Options,

    /// Print the raw dataset table shown on the dataset tab
    Table,

    /// Print one view's projection
    Project {
        /// View to project (population, economic, longevity, geographic)
        #[arg(long)]
        view: ViewId,

        /// Continent filter (not used by the geographic view)
        #[arg(long)]
        continent: Option<String>,

        /// Year filter
        #[arg(long)]
        year: Option<i32>,

        /// Map variable (geographic view only)
        #[arg(long)]
        variable: Option<String>,
    },

    /// Replay newline-delimited JSON events and print each outcome
    Replay {
        /// Event file; reads stdin when omitted
        #[arg(short, long)]
        events: Option<PathBuf>,
    },
}

pub fn run(args: &DashboardArgs, command: Command) -> anyhow::Result<()> {
    let mut dashboard = args.load()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Options => emit(&mut out, &dashboard.options(), args.pretty),
        Command::Table => emit(&mut out, dashboard.table(), args.pretty),
        Command::Project {
            view,
            continent,
            year,
            variable,
        } => {
            let request = project::ProjectRequest {
                view,
                continent,
                year,
                variable,
            };
            let projection = project::run_project(&mut dashboard, &request)?;
            emit(&mut out, projection, args.pretty)
        }
        Command::Replay { events } => {
            let summary = match events {
                Some(path) => {
                    let file = std::fs::File::open(&path).map_err(|e| {
                        anyhow::anyhow!("failed to open events file {}: {}", path.display(), e)
                    })?;
                    replay::run_replay(
                        &mut dashboard,
                        std::io::BufReader::new(file),
                        &mut out,
                        args.pretty,
                    )?
                }
                None => {
                    let stdin = std::io::stdin();
                    replay::run_replay(&mut dashboard, stdin.lock(), &mut out, args.pretty)?
                }
            };
            log::info!(
                "[GMD] replay: {} events, {} rejected, {} unreadable",
                summary.events,
                summary.rejected,
                summary.unreadable
            );
            Ok(())
        }
    }
}

/// Write one JSON document followed by a newline.
pub fn emit<W, T>(out: &mut W, value: &T, pretty: bool) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
