pub mod error;
pub mod markdown;

pub use error::ExportError;
pub use markdown::{
    download_filename, export_markdown, render_markdown, write_markdown, MarkdownExport,
};
