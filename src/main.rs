use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budget_tracker::cli::{
    handle_add_command, handle_audit_command, handle_breakdown_command, handle_export_command,
    handle_import_command, handle_list_command, handle_summary_command, handle_trend_command,
    AddArgs, ExportCommands, PeriodArgs,
};
use budget_tracker::config::{Settings, TrackerPaths};
use budget_tracker::services::ServiceContext;
use budget_tracker::storage::with_store;

#[derive(Parser)]
#[command(
    name = "budget",
    author = "Kaylee Beyene",
    version,
    about = "Personal income and expense tracker",
    long_about = "Record income and expenses, see summaries by month or year, \
                  import transactions from CSV or Excel files and export \
                  workbooks, CSV listings and PDF budget reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory and settings
    Init,

    /// Show current configuration and paths
    Config {
        /// Change the default currency label
        #[arg(long)]
        default_currency: Option<String>,
    },

    /// Add a transaction
    Add(AddArgs),

    /// List transactions, newest first
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        period: PeriodArgs,

        /// Show at most this many transactions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show income, expense and balance with category breakdowns
    Summary {
        #[command(flatten)]
        period: PeriodArgs,

        /// Currency label for amounts
        #[arg(long)]
        currency: Option<String>,
    },

    /// Show totals per category
    Breakdown {
        #[command(flatten)]
        period: PeriodArgs,

        /// income or expense
        #[arg(short, long, default_value = "expense")]
        kind: String,

        /// Currency label for amounts
        #[arg(long)]
        currency: Option<String>,
    },

    /// Show monthly income and expense totals
    Trend {
        /// Currency label for amounts
        #[arg(long)]
        currency: Option<String>,
    },

    /// Import transactions from a CSV or Excel (.xlsx) file
    Import {
        /// Path to the file
        file: PathBuf,

        /// Validate and preview without storing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Export data and reports
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = TrackerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let context = ServiceContext::new(&paths, &settings);

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing budget tracker at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            let count = with_store(context.store_config(), |store| store.count())?;
            println!("Initialization complete!");
            println!();
            println!("Database:  {}", context.store_config().database_path().display());
            println!("Stored transactions: {}", count);
            println!();
            println!("Run 'budget add income 50000 -c Salary' to record a transaction,");
            println!("or 'budget export template' for a sample import file.");
        }
        Some(Commands::Config { default_currency }) => {
            if let Some(currency) = default_currency {
                settings.set_default_currency(&currency)?;
                settings.save(&paths)?;
                println!("Default currency set to {}", settings.default_currency);
                println!();
            }

            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Database:          {}", context.store_config().database_path().display());
            println!("Exports directory: {}", paths.exports_dir().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Default currency: {}", settings.default_currency);
            println!("  Currencies:       {}", settings.currencies.join(", "));
            println!("  Report title:     {}", settings.report_title);
        }
        Some(Commands::Add(args)) => handle_add_command(&context, &settings, args)?,
        Some(Commands::List { period, limit }) => handle_list_command(&context, &period, limit)?,
        Some(Commands::Summary { period, currency }) => {
            handle_summary_command(&context, &period, currency)?
        }
        Some(Commands::Breakdown {
            period,
            kind,
            currency,
        }) => handle_breakdown_command(&context, &period, &kind, currency)?,
        Some(Commands::Trend { currency }) => handle_trend_command(&context, currency)?,
        Some(Commands::Import { file, dry_run }) => {
            handle_import_command(&context, &file, dry_run)?
        }
        Some(Commands::Export(cmd)) => handle_export_command(&context, &paths, cmd)?,
        Some(Commands::Audit { limit }) => handle_audit_command(&context, limit)?,
        None => {
            println!("Budget Tracker - personal income and expense tracking");
            println!();
            println!("Run 'budget --help' for usage information.");
        }
    }

    Ok(())
}
