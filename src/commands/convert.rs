//! Convert command implementation.

use std::path::{Path, PathBuf};

use crate::config::{Config, Encoding};
use crate::errors::Result;
use crate::interface::{convert_document, Conversion, ConvertOptions};
use crate::io::{read_document, resolve_output_path, write_output};

/// Options for the convert command.
#[derive(Debug, Clone, Default)]
pub struct ConvertCommandOptions {
    /// Help file to convert.
    pub file: PathBuf,
    /// Encoding override; resolved from the config table when absent.
    pub encoding: Option<Encoding>,
    /// Output file or directory; stdout when absent.
    pub output: Option<PathBuf>,
    /// Extension for files written into an output directory.
    pub extension: Option<String>,
    /// Append source numbering to headings.
    pub show_numbers: bool,
    /// Title of a discrete heading emitted before the preamble.
    pub preamble_title: Option<String>,
}

impl ConvertCommandOptions {
    /// Builds engine options on top of the configured defaults.
    pub fn convert_options(&self, config: &Config) -> ConvertOptions {
        ConvertOptions {
            show_numbers: self.show_numbers,
            preamble_title: self.preamble_title.clone(),
            ..ConvertOptions::from_config(config)
        }
    }
}

/// Reads, decodes and converts one help file.
pub fn convert_file(
    path: &Path,
    encoding: Encoding,
    options: &ConvertOptions,
) -> Result<Conversion> {
    tracing::debug!("Processing file {} as {}", path.display(), encoding);
    let doc = read_document(path, encoding)?;
    Ok(convert_document(&doc, options))
}

/// Executes the convert command.
pub fn convert(config: &Config, options: ConvertCommandOptions) -> Result<()> {
    let encoding = options.encoding.unwrap_or_else(|| {
        let base_name = options
            .file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        config.encoding_for(&base_name)
    });

    let conversion = match convert_file(&options.file, encoding, &options.convert_options(config)) {
        Ok(conversion) => conversion,
        Err(e) => {
            eprintln!("Error while processing file {}: {}", options.file.display(), e);
            return Err(e);
        }
    };

    eprintln!("{}", conversion.report);

    match &options.output {
        Some(output) => {
            let extension = options
                .extension
                .as_deref()
                .unwrap_or(config.output_extension.as_str());
            let path = resolve_output_path(&options.file, output, extension);
            write_output(&path, &conversion.lines)?;
        }
        None => println!("{}", conversion.output()),
    }

    Ok(())
}
