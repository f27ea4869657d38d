use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use log::debug;

use northwind::cli::{
    handle_history_command, handle_list_command, handle_report_command, handle_summary_command,
    HistoryArgs, ReportArgs,
};
use northwind::config::{NorthwindPaths, Settings};

#[derive(Parser)]
#[command(
    name = "northwind",
    author = "Kaylee Beyene",
    version,
    about = "Analytical sales reports over the Northwind dataset",
    long_about = "Northwind Reports loads the Northwind sample sales dataset from a \
                  JSON file or a directory of CSV files and computes ten read-only \
                  sales reports: top customers, yearly growth, top employees and more."
)]
struct Cli {
    /// Dataset to load: a JSON file or a directory of CSV files
    #[arg(long, global = true, env = "NORTHWIND_DATA")]
    data: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one report, or all of them
    #[command(alias = "run")]
    Report(ReportArgs),

    /// List the available reports
    #[command(alias = "ls")]
    List,

    /// Summarize the dataset: table sizes, date range, dangling references
    Summary,

    /// Show recent report runs
    History(HistoryArgs),

    /// Create the configuration directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = NorthwindPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let dataset_path = settings.resolve_dataset(&paths, cli.data);
    debug!("Using dataset {}", dataset_path.display());

    match cli.command {
        Some(Commands::Report(args)) => {
            handle_report_command(&paths, &settings, &dataset_path, args)?;
        }
        Some(Commands::List) => handle_list_command(),
        Some(Commands::Summary) => {
            handle_summary_command(&settings, &dataset_path)?;
        }
        Some(Commands::History(args)) => {
            handle_history_command(&paths, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Northwind Reports at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!(
                "Place northwind.json or the table CSV files in: {}",
                paths.data_dir().display()
            );
            println!("Run 'northwind list' to see the available reports.");
        }
        Some(Commands::Config) => {
            println!("Northwind Reports Configuration");
            println!("===============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Run history:      {}", paths.history_log().display());
            println!("Dataset:          {}", dataset_path.display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol:        {}", settings.currency_symbol);
            println!("  Default format:         {}", settings.default_format);
            let reports = &settings.reports;
            println!("  Top customers:          {}", reports.top_customers);
            println!("  Top employees:          {}", reports.top_employees);
            println!("  Peak month products:    {}", reports.peak_month_products);
            println!("  Supplier threshold:     {}%", reports.supplier_share_threshold);
            println!("  Repeat min orders:      {}", reports.repeat_customer_min_orders);
            println!("  Top countries:          {}", reports.top_countries);
        }
        None => {
            println!("Northwind Reports - sales analytics over the Northwind dataset");
            println!();
            println!("Run 'northwind --help' for usage information.");
            println!("Run 'northwind list' to see the available reports.");
        }
    }

    Ok(())
}
