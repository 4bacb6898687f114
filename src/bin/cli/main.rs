mod app;
mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sprint-rhythm", about = "Sprint rhythm life-planning CLI", version)]
struct Cli {
    /// Use a specific data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List all sprints with status and date range
    List,

    /// Show one sprint in detail
    Show {
        /// Sprint id, bare number, or title prefix
        sprint: String,
    },

    /// Regenerate the whole sprint sequence (overwrites existing data)
    Init {
        /// Start date of the first sprint (YYYY-MM-DD)
        #[arg(long, default_value = app::DEFAULT_START)]
        start: chrono::NaiveDate,
        /// Number of sprints to generate
        #[arg(long, default_value_t = app::DEFAULT_COUNT)]
        count: usize,
    },

    /// Edit a sprint's title, description, track, or date range
    Edit {
        /// Sprint id, bare number, or title prefix
        sprint: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Life track: stability, growth, or recovery
        #[arg(long)]
        track: Option<sprint_rhythm::sprints::LifeTrack>,
        /// New start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<chrono::NaiveDate>,
        /// New end date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<chrono::NaiveDate>,
    },

    /// Toggle a weekly review flag
    Toggle {
        /// Sprint id, bare number, or title prefix
        sprint: String,
        /// Week number (1-4)
        week: usize,
    },

    /// Manage a sprint's materials
    #[command(subcommand)]
    Material(MaterialCommand),

    /// Show or set the theme preference
    Theme {
        /// New theme (dark or light); omit to show the current one
        theme: Option<sprint_rhythm::settings::Theme>,
    },

    /// Delete all persisted state (irreversible)
    Reset {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum MaterialCommand {
    /// Append a material to a sprint
    Add {
        /// Sprint id, bare number, or title prefix
        sprint: String,
        label: String,
        url: String,
    },

    /// Remove a material by its id
    Rm {
        /// Sprint id, bare number, or title prefix
        sprint: String,
        /// Material id as shown by `show`
        material: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();

    match cli.command {
        Command::List => {
            let app = app::App::new(cli.data_dir)?;
            commands::list::run(&app, &cli.format, use_color)?;
        }
        Command::Show { sprint } => {
            let app = app::App::new(cli.data_dir)?;
            commands::show::run(&app, &sprint, &cli.format, use_color)?;
        }
        Command::Init { start, count } => {
            let mut app = app::App::new(cli.data_dir)?;
            commands::init::run(&mut app, start, count, &cli.format)?;
        }
        Command::Edit {
            sprint,
            title,
            description,
            track,
            start,
            end,
        } => {
            let mut app = app::App::new(cli.data_dir)?;
            commands::edit::run(&mut app, &sprint, title, description, track, start, end)?;
        }
        Command::Toggle { sprint, week } => {
            let mut app = app::App::new(cli.data_dir)?;
            commands::toggle::run(&mut app, &sprint, week)?;
        }
        Command::Material(subcmd) => {
            let mut app = app::App::new(cli.data_dir)?;
            match subcmd {
                MaterialCommand::Add { sprint, label, url } => {
                    commands::material::run_add(&mut app, &sprint, label, url)?;
                }
                MaterialCommand::Rm { sprint, material } => {
                    commands::material::run_remove(&mut app, &sprint, &material)?;
                }
            }
        }
        Command::Theme { theme } => {
            let mut app = app::App::new(cli.data_dir)?;
            commands::theme::run(&mut app, theme)?;
        }
        Command::Reset { yes } => {
            let mut app = app::App::new(cli.data_dir)?;
            commands::reset::run(&mut app, yes)?;
        }
    }

    Ok(())
}
