//! Batch command implementation.
//!
//! Selects the help files of a Vim checkout (or an explicit list), then
//! either converts them in-process or hands each one to an external command.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use rayon::prelude::*;

use crate::config::{Config, Encoding};
use crate::errors::{ConvertError, Result};
use crate::interface::{Conversion, ConvertOptions};
use crate::io::{list_directory, output_file_in, write_output};

use super::convert::convert_file;
use super::template::render_template;

/// Options for the batch command.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Explicit help files.
    pub files: Vec<PathBuf>,
    /// Root of a Vim installation or checkout; its `runtime/doc` is scanned.
    pub vim_path: Option<PathBuf>,
    /// External program run once per file instead of converting in-process.
    pub command: Option<String>,
    /// Argument templates for the external program.
    pub arguments: Vec<String>,
    /// Directory receiving converted files; stdout when absent.
    pub output_dir: Option<PathBuf>,
    /// Print coverage reports as a JSON array.
    pub json: bool,
    /// Append source numbering to headings.
    pub show_numbers: bool,
}

/// A help file selected for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub path: PathBuf,
    pub encoding: Encoding,
}

/// Resolves and filters the files a batch run will process.
///
/// Fails before touching any file when neither or both of a file list and
/// a Vim path are given, or when the documentation directory is missing.
pub fn select_files(config: &Config, options: &BatchOptions) -> Result<Vec<BatchEntry>> {
    let candidates = match (&options.vim_path, options.files.is_empty()) {
        (None, true) => {
            return Err(ConvertError::Config(
                "VIM copy path is required if no files are passed.".to_string(),
            ))
        }
        (Some(_), false) => {
            return Err(ConvertError::Config(
                "Please specify either a file list or a VIM copy path but not both.".to_string(),
            ))
        }
        (Some(vim_path), true) => {
            let doc_dir = vim_path.join("runtime").join("doc");
            tracing::debug!("VIM documentation path: {}", doc_dir.display());
            if !doc_dir.is_dir() {
                return Err(ConvertError::Config(
                    "VIM documentation path doesn't exist.".to_string(),
                ));
            }
            list_directory(&doc_dir)?
        }
        (None, false) => options.files.clone(),
    };

    let mut entries = Vec::new();
    for path in candidates {
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            tracing::debug!("skipping no vimdoc file {}", path.display());
            continue;
        }
        let base_name = base_name(&path);
        if config.is_ignored(&base_name) {
            tracing::debug!("skipping ignored file {}", path.display());
            continue;
        }
        if config.is_weird_format(&base_name) {
            tracing::debug!("skipping weird file {}", path.display());
            continue;
        }
        let encoding = config.encoding_for(&base_name);
        entries.push(BatchEntry { path, encoding });
    }

    Ok(entries)
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Builds the argument vector for an external command run on one file.
///
/// Each template is rendered against `encoding` and `file`, then split on
/// whitespace; the file path is appended last.
pub fn command_line(
    command: &str,
    arguments: &[String],
    entry: &BatchEntry,
) -> Result<Vec<String>> {
    let file = entry.path.display().to_string();
    let encoding = entry.encoding.to_string();
    let context = [("encoding", encoding.as_str()), ("file", file.as_str())];

    let mut line = vec![command.to_string()];
    for argument in arguments {
        let rendered = render_template(argument, &context)?;
        line.extend(rendered.split_whitespace().map(str::to_string));
    }
    line.push(file);
    Ok(line)
}

fn run_external(command: &str, arguments: &[String], entries: &[BatchEntry]) -> Result<()> {
    for entry in entries {
        let line = command_line(command, arguments, entry)?;
        tracing::debug!("Running {}", line.join(" "));
        let status = Command::new(&line[0])
            .args(&line[1..])
            .status()
            .map_err(|source| ConvertError::Command {
                command: command.to_string(),
                source,
            })?;
        if !status.success() {
            tracing::warn!("{} exited with {} on {}", command, status, entry.path.display());
        }
    }
    Ok(())
}

fn run_in_process(config: &Config, options: &BatchOptions, entries: &[BatchEntry]) -> Result<()> {
    if options.json && options.output_dir.is_none() {
        return Err(ConvertError::Config("JSON reports need an output directory.".to_string()));
    }
    if let Some(dir) = &options.output_dir {
        fs::create_dir_all(dir)?;
    }

    let convert_options = ConvertOptions {
        show_numbers: options.show_numbers,
        ..ConvertOptions::from_config(config)
    };

    let results: Vec<Result<Conversion>> = entries
        .par_iter()
        .map(|entry| convert_file(&entry.path, entry.encoding, &convert_options))
        .collect();

    let mut reports = Vec::new();
    let mut failed = 0;
    for (entry, result) in entries.iter().zip(results) {
        let conversion = match result {
            Ok(conversion) => conversion,
            Err(e) => {
                eprintln!("Error while processing file {}: {}", entry.path.display(), e);
                failed += 1;
                continue;
            }
        };

        match &options.output_dir {
            Some(dir) => {
                let path = output_file_in(dir, &entry.path, &config.output_extension);
                write_output(&path, &conversion.lines)?;
            }
            None => println!("{}", conversion.output()),
        }

        if !options.json {
            eprintln!("{}", conversion.report);
        }
        reports.push(conversion.report);
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    tracing::info!("Converted {} files.", reports.len());
    if failed > 0 {
        return Err(ConvertError::Batch {
            failed,
            total: entries.len(),
        });
    }
    Ok(())
}

/// Executes the batch command.
pub fn batch(config: &Config, options: BatchOptions) -> Result<()> {
    let entries = select_files(config, &options)?;
    if entries.is_empty() {
        println!("No files to process.");
        return Ok(());
    }

    match &options.command {
        Some(command) => run_external(command, &options.arguments, &entries),
        None => run_in_process(config, &options, &entries),
    }
}
