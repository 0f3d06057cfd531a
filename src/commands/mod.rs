//! Command implementations.

pub mod batch;
pub mod convert;
mod template;

pub use batch::{batch, command_line, select_files, BatchEntry, BatchOptions};
pub use convert::{convert, convert_file, ConvertCommandOptions};
pub use template::render_template;
