//! vimdoc2adoc CLI - Vim help to AsciiDoc converter

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vimdoc2adoc::commands;
use vimdoc2adoc::config::{Config, Encoding};

#[derive(Parser)]
#[command(name = "vimdoc2adoc")]
#[command(author, version, about = "Convert Vim help files to AsciiDoc", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Show more detail
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one Vim doc file
    Convert {
        /// File encoding (defaults to the per-file table)
        #[arg(short, long)]
        encoding: Option<Encoding>,

        /// Output file or directory (stdout if omitted)
        #[arg(short, long)]
        output_path: Option<PathBuf>,

        /// Extension of files written into an output directory
        #[arg(short = 'x', long)]
        output_extension: Option<String>,

        /// Append section numbers to headings
        #[arg(long)]
        show_numbers: bool,

        /// Emit a discrete heading with this title before the preamble
        #[arg(long)]
        preamble_title: Option<String>,

        /// VIM doc file to process
        #[arg(value_name = "VIMDOCFILE")]
        file: PathBuf,
    },

    /// Process VIM doc files in-process or through a command
    Batch {
        /// Program to process each VIM doc file with
        #[arg(short, long)]
        command: Option<String>,

        /// Argument to pass to the command; `$encoding` and `$file` are substituted
        #[arg(short = 'a', long = "argument", value_name = "ARGUMENT", allow_hyphen_values = true)]
        arguments: Vec<String>,

        /// Path to VIM installation or checkout
        #[arg(short = 'p', long)]
        vim_path: Option<PathBuf>,

        /// Directory receiving converted files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Print coverage reports as JSON (requires --output-dir)
        #[arg(long)]
        json: bool,

        /// Append section numbers to headings
        #[arg(long)]
        show_numbers: bool,

        /// VIM doc files to process
        #[arg(value_name = "VIMDOCFILE")]
        files: Vec<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Read configuration from file or use defaults
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Convert {
            encoding,
            output_path,
            output_extension,
            show_numbers,
            preamble_title,
            file,
        } => {
            let options = commands::ConvertCommandOptions {
                file,
                encoding,
                output: output_path,
                extension: output_extension,
                show_numbers,
                preamble_title,
            };
            commands::convert(&config, options)
        }

        Commands::Batch {
            command,
            arguments,
            vim_path,
            output_dir,
            json,
            show_numbers,
            files,
        } => {
            let options = commands::BatchOptions {
                files,
                vim_path,
                command,
                arguments,
                output_dir,
                json,
                show_numbers,
            };
            commands::batch(&config, options)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> vimdoc2adoc::Result<Config> {
    match path {
        Some(path) => vimdoc2adoc::config::read_config_file(path),
        None => {
            let base_dir = std::env::current_dir()?;
            vimdoc2adoc::config::read_config(&base_dir)
        }
    }
}
