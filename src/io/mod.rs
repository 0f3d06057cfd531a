//! Reading help files and writing converted output.

mod files;

pub use files::{
    list_directory, output_file_in, read_document, resolve_output_path, write_output,
};
