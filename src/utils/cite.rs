//! Citation formatting.
//!
//! A formatter is anything implementing [`CitationFormatter`]; plain functions
//! and closures of type `Fn(&Record) -> String` qualify through a blanket impl.
//! [`BibtexFormatter`] is the standard `@misc` style.

use chrono::Datelike;

use crate::models::Record;

/// Title words skipped when picking the word for a citation key
pub const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "towards", "for", "in", "with", "to", "of", "on", "at",
    "by", "from", "up", "down", "about", "after", "before", "over", "under", "between",
    "through", "into", "out", "during", "since", "until", "upon", "around", "throughout", "as",
    "if", "though", "because", "while", "when", "where", "whether", "not", "only", "just",
    "both", "neither", "either", "all", "some", "few", "many", "most", "other", "another",
    "such", "this", "that", "these", "those", "one", "two", "three", "four", "five", "six",
    "seven", "eight", "nine", "ten",
];

/// Renders a record as a citation string
pub trait CitationFormatter {
    fn format(&self, record: &Record) -> String;
}

impl<F> CitationFormatter for F
where
    F: Fn(&Record) -> String,
{
    fn format(&self, record: &Record) -> String {
        self(record)
    }
}

/// Standard BibTeX `@misc` entry with an arXiv note
///
/// ```text
/// @misc{doe2021better,
///       title={Towards Better Proofs},
///       author={Jane A. Doe and John Smith},
///       year={2021},
///       howpublished="\url{http://arxiv.org/abs/2101.00001v1}",
///       note={arXiv:math.NT:2101.00001v1},
/// }
/// ```
///
/// Title and author text is copied verbatim; BibTeX special characters are
/// not escaped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BibtexFormatter;

impl CitationFormatter for BibtexFormatter {
    fn format(&self, record: &Record) -> String {
        format_bibtex(record)
    }
}

/// Generate a BibTeX entry
pub fn format_bibtex(record: &Record) -> String {
    format!(
        concat!(
            "@misc{{{},\n",
            "      title={{{}}},\n",
            "      author={{{}}},\n",
            "      year={{{}}},\n",
            "      howpublished=\"\\url{{{}}}\",\n",
            "      note={{arXiv:{}:{}}},\n",
            "}}"
        ),
        citation_key(record),
        record.title,
        record.authors.join(" and "),
        record.published.year(),
        record.url,
        record.primary_category,
        record.arxiv_id,
    )
}

/// Citation key: first author's surname, publication year, first significant title word
///
/// "Jane A. Doe", 2021, "Towards Better Proofs" gives `doe2021better`.
pub fn citation_key(record: &Record) -> String {
    let surname = record.first_author().map(surname_key).unwrap_or_default();
    format!(
        "{}{:04}{}",
        surname,
        record.published.year(),
        first_significant_word(&record.title).to_lowercase()
    )
}

/// Last name of `author`, lowercased and stripped of punctuation
fn surname_key(author: &str) -> String {
    let last = author.split_whitespace().last().unwrap_or_default();
    last.to_lowercase()
        .trim_matches(|c: char| c == ',' || c == '.' || c.is_whitespace())
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}

/// First title word that is not a stopword, with punctuation removed
///
/// Returns an empty string when every word is a stopword.
pub fn first_significant_word(title: &str) -> String {
    title
        .split_whitespace()
        .find(|word| !STOPWORDS.contains(&word.to_lowercase().as_str()))
        .map(|word| word.chars().filter(|c| !c.is_ascii_punctuation()).collect())
        .unwrap_or_default()
}
