use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use roi_calc::cli::{
    handle_calc_command, handle_export_command, handle_template_command, CalcArgs, ExportArgs,
    TemplateFormat,
};
use roi_calc::config::{paths::RoiPaths, settings::Settings};
use roi_calc::logging::{init_cli_logger, init_tui_logger};
use roi_calc::models::Worksheet;

#[derive(Parser)]
#[command(
    name = "roi",
    author = "Kaylee Beyene",
    version,
    about = "ROI comparison calculator for carrier driver-recruiting plans",
    long_about = "roi compares what a carrier spends today on driver marketing and \
                  idle trucks with what it would spend under a Done-For-You (monthly) \
                  or Do-With-You (one-time) recruiting plan."
)]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the comparison for a worksheet
    Calc(CalcArgs),

    /// Write the report as a document, JSON, YAML or CSV
    Export(ExportArgs),

    /// Print a blank worksheet to fill in
    Template {
        /// Output format
        #[arg(short, long, value_enum, default_value = "yaml")]
        format: TemplateFormat,
    },

    /// Launch the interactive calculator
    #[command(alias = "ui")]
    Tui {
        /// Worksheet file to start from
        #[arg(short, long, value_name = "FILE")]
        from: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write the default settings file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = RoiPaths::new()?;

    if let Some(Commands::Tui { .. }) = cli.command {
        init_tui_logger(&paths, cli.verbose)?;
    } else {
        init_cli_logger(cli.verbose);
    }

    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Calc(args)) => {
            handle_calc_command(&settings, args)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&settings, args)?;
        }
        Some(Commands::Template { format }) => {
            handle_template_command(format)?;
        }
        Some(Commands::Tui { from }) => {
            let worksheet = match from {
                Some(path) => Worksheet::load(&path)?,
                None => Worksheet::default(),
            };
            roi_calc::tui::run_tui(&settings, &paths, worksheet)?;
        }
        Some(Commands::Config { action: Some(ConfigCommands::Init) }) => {
            if paths.is_initialized() {
                println!(
                    "Settings already exist at: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                println!("Wrote default settings to: {}", paths.settings_file().display());
            }
        }
        Some(Commands::Config { action: None }) => {
            println!("roi-calc Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("TUI log file:   {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Brand name:      {}", settings.brand_name);
            println!("  Print command:   {}", settings.print_command);
            if !paths.is_initialized() {
                println!();
                println!("Using defaults. Run 'roi config init' to write the settings file.");
            }
        }
        None => {
            println!("roi - ROI comparison calculator for carrier recruiting plans");
            println!();
            println!("Run 'roi --help' for usage information.");
            println!("Run 'roi tui' to launch the interactive calculator.");
        }
    }

    Ok(())
}
