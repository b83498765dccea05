//! # arxiv-bibtex
//!
//! Turn arXiv abstract URLs into BibTeX entries.
//!
//! ## Architecture
//!
//! The library is a single pipeline, organized into several modules:
//!
//! - [`models`]: The bibliographic [`Record`] parsed from arXiv
//! - [`sources`]: The arXiv API client, Atom response parser and error type
//! - [`utils`]: HTTP client and citation formatting
//! - [`pipeline`]: URLs in, formatted citations out
//! - [`config`]: Client configuration
//!
//! ```rust,no_run
//! use arxiv_bibtex::pipeline::arxiv_to_bibtex;
//! use arxiv_bibtex::sources::ArxivSource;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = ArxivSource::new()?;
//! for entry in arxiv_to_bibtex(&source, &["https://arxiv.org/abs/2002.05234"]).await? {
//!     println!("{}", entry);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod models;
pub mod pipeline;
pub mod sources;
pub mod utils;

// Re-export commonly used types
pub use models::Record;
pub use sources::{ArxivSource, SourceError};
pub use utils::{BibtexFormatter, CitationFormatter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
