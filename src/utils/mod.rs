//! Utility modules supporting the pipeline.
//!
//! - [`HttpClient`]: reqwest client configured with a bounded timeout
//! - [`CitationFormatter`]: record-to-string formatting capability
//! - [`BibtexFormatter`]: the standard BibTeX formatter
//! - [`citation_key`] and [`first_significant_word`]: citation key construction
//!
//! # Custom formatters
//!
//! ```rust
//! use arxiv_bibtex::models::Record;
//! use arxiv_bibtex::utils::CitationFormatter;
//!
//! fn title_only(record: &Record) -> String {
//!     record.title.clone()
//! }
//!
//! # fn example(record: &Record) {
//! let line = title_only.format(record);
//! # }
//! ```

mod cite;
mod http;

pub use cite::{
    citation_key, first_significant_word, format_bibtex, BibtexFormatter, CitationFormatter,
    STOPWORDS,
};
pub use http::HttpClient;
