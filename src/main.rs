//! # FileConverter Paths - Main Entry Point
//!
//! ## Responsabilità:
//! - Parsing degli argomenti della command line con `clap`
//! - Inizializzazione del sistema di logging con `tracing` (su stderr)
//! - Caricamento della configurazione
//! - Dispatch dei sottocomandi `inspect`, `unique`, `compat`, `scan`
//!
//! ## Esempio di utilizzo:
//! ```bash
//! fileconv-paths inspect 'E:\Track03.cda' --optical EF
//! fileconv-paths --json scan ~/Music --format mp3
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};

use fileconv_paths::file_manager::FileManager;
use fileconv_paths::json_output::JsonMessage;
use fileconv_paths::path::{extension_of, file_name};
use fileconv_paths::{
    allocate_unique_path, category_of, category_of_path, decompose_path, extract_track_number,
    file_exists, is_compatible, is_optical_drive, is_valid_path, Config, OutputFormat,
};

#[derive(Parser)]
#[command(name = "fileconv-paths")]
#[command(about = "Inspect paths and classify media for file conversion")]
struct Args {
    /// Configuration file (defaults to the user data folder)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate and decompose a path, then classify it
    Inspect {
        path: String,

        /// Optical drive letters, e.g. "EF" (overrides the config)
        #[arg(long)]
        optical: Option<String>,
    },

    /// Print a variant of PATH that does not exist yet
    Unique { path: String },

    /// Check whether an extension can be converted to a format
    Compat { format: String, extension: String },

    /// Classify every file under a directory
    Scan {
        directory: PathBuf,

        /// Output format to check the files against
        #[arg(short, long)]
        format: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = match args.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    debug!("Loading configuration from {}", config_path.display());
    let config = Config::from_file(&config_path).await?;
    let json = args.json || config.json_output;

    match args.command {
        Command::Inspect { path, optical } => {
            let letters: Vec<char> = match optical {
                Some(letters) => letters.chars().collect(),
                None => config.optical_drive_letters.clone(),
            };
            inspect(&path, &letters, json);
        }
        Command::Unique { path } => {
            let allocated = allocate_unique_path(&path, file_exists);
            if json {
                JsonMessage::Unique {
                    requested: path,
                    allocated,
                }
                .emit();
            } else {
                println!("{}", allocated);
            }
        }
        Command::Compat { format, extension } => {
            let format: OutputFormat = match format.parse() {
                Ok(format) => format,
                Err(e) => {
                    if json {
                        JsonMessage::error(e.to_string(), None).emit();
                    }
                    return Err(e.into());
                }
            };
            let category = category_of(&extension);
            let compatible = is_compatible(format, category);
            if json {
                JsonMessage::Compat {
                    format,
                    extension,
                    category,
                    compatible,
                }
                .emit();
            } else {
                println!(
                    "{} ({}) -> {}: {}",
                    extension,
                    category,
                    format,
                    if compatible { "compatible" } else { "not compatible" }
                );
            }
        }
        Command::Scan { directory, format } => {
            if !directory.is_dir() {
                return Err(anyhow::anyhow!(
                    "Not a directory: {}",
                    directory.display()
                ));
            }
            let format = match format {
                Some(f) => Some(f.parse::<OutputFormat>()?),
                None => config.default_output_format,
            };

            let files = FileManager::find_files(&directory);
            info!("Found {} files in {}", files.len(), directory.display());

            for file in FileManager::classify(&files, format) {
                if json {
                    JsonMessage::ScanFile(file).emit();
                } else {
                    let verdict = match file.compatible {
                        Some(true) => " [ok]",
                        Some(false) => " [skip]",
                        None => "",
                    };
                    println!("{:<15} {}{}", file.category, file.path.display(), verdict);
                }
            }
        }
    }

    Ok(())
}

fn inspect(path: &str, optical_drive_letters: &[char], json: bool) {
    let valid = is_valid_path(path);
    let parts = decompose_path(path);
    let category = category_of_path(path);
    let track_number = extract_track_number(path).ok();
    let optical_drive = is_optical_drive(path, optical_drive_letters);

    if json {
        JsonMessage::Inspect {
            path: path.to_string(),
            valid,
            parts: parts.ok(),
            category,
            track_number,
            optical_drive,
        }
        .emit();
        return;
    }

    match parts {
        Ok(parts) => {
            println!("Drive:       {}", parts.drive);
            println!("Directories: {}", parts.directories.join(" > "));
            println!("Filename:    {}", parts.filename);
        }
        Err(e) => {
            println!("Invalid:     {}", e);
            println!("Filename:    {}", file_name(path));
        }
    }
    println!(
        "Extension:   {}",
        extension_of(file_name(path)).unwrap_or("-")
    );
    println!("Category:    {}", category);
    if let Some(track) = track_number {
        println!("CD track:    {}", track);
    }
    println!("Optical:     {}", if optical_drive { "yes" } else { "no" });
}
