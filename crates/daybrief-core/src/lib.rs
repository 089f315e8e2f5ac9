use thiserror::Error;

pub mod config_file;
pub mod content;
pub mod date;
pub mod index;
pub mod source;
pub mod state;

// Re-export for convenience
pub use content::{ContentDocument, Section, SourceLink, Story};
pub use index::IndexEntry;
pub use source::{BriefingSource, DirSource, HttpSource, from_root};
pub use state::BriefingState;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("no briefing found for {0}")]
    NotFound(String),
}
