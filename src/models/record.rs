//! Record model for a single arXiv article.

use chrono::NaiveDate;

use crate::sources::SourceError;

/// Bibliographic data for one arXiv article
///
/// Created by the response parser and handed to a citation formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Author full names, in the order arXiv lists them
    pub authors: Vec<String>,

    /// arXiv identifier, possibly version-suffixed (e.g. "2002.05234v1")
    pub arxiv_id: String,

    /// Primary subject category (e.g. "math.NT")
    pub primary_category: String,

    /// Article title
    pub title: String,

    /// Canonical abstract page URL
    pub url: String,

    /// Date of the first version
    pub published: NaiveDate,

    /// Date of the latest version
    pub updated: NaiveDate,
}

impl Record {
    /// First listed author, if any
    pub fn first_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }
}

/// Builder that collects record fields as they are found in a feed entry
///
/// [`RecordBuilder::build`] fails with [`SourceError::Parse`] naming the first
/// field that was never set.
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    authors: Vec<String>,
    arxiv_id: Option<String>,
    primary_category: Option<String>,
    title: Option<String>,
    url: Option<String>,
    published: Option<String>,
    updated: Option<String>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an author
    pub fn author(&mut self, name: impl Into<String>) -> &mut Self {
        self.authors.push(name.into());
        self
    }

    /// Set the identifier
    pub fn arxiv_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.arxiv_id = Some(id.into());
        self
    }

    /// Set the primary category
    pub fn primary_category(&mut self, category: impl Into<String>) -> &mut Self {
        self.primary_category = Some(category.into());
        self
    }

    /// Whether a primary category has been set
    pub fn has_primary_category(&self) -> bool {
        self.primary_category.is_some()
    }

    /// Set the title
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Set the canonical URL
    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    /// Set the raw publication timestamp
    pub fn published(&mut self, timestamp: impl Into<String>) -> &mut Self {
        self.published = Some(timestamp.into());
        self
    }

    /// Set the raw last-updated timestamp
    pub fn updated(&mut self, timestamp: impl Into<String>) -> &mut Self {
        self.updated = Some(timestamp.into());
        self
    }

    /// Build the Record
    pub fn build(self) -> Result<Record, SourceError> {
        if self.authors.is_empty() {
            return Err(missing("author"));
        }
        let published = self.published.ok_or_else(|| missing("published"))?;
        let updated = self.updated.ok_or_else(|| missing("updated"))?;

        Ok(Record {
            authors: self.authors,
            arxiv_id: self.arxiv_id.ok_or_else(|| missing("id"))?,
            primary_category: self
                .primary_category
                .ok_or_else(|| missing("primary_category"))?,
            title: self.title.ok_or_else(|| missing("title"))?,
            url: self.url.ok_or_else(|| missing("alternate link"))?,
            published: parse_calendar_date(&published)?,
            updated: parse_calendar_date(&updated)?,
        })
    }
}

fn missing(field: &str) -> SourceError {
    SourceError::Parse(format!("entry is missing `{}`", field))
}

/// Reduce an ISO-like timestamp to its calendar date
///
/// Everything from the first `T` on is dropped and the rest must be
/// `YYYY-MM-DD`: "2020-02-13T18:22:01Z" becomes 2020-02-13.
pub fn parse_calendar_date(timestamp: &str) -> Result<NaiveDate, SourceError> {
    let date_part = timestamp.trim().split('T').next().unwrap_or_default();
    let invalid = || SourceError::Parse(format!("invalid date: {:?}", timestamp));

    let parts = date_part
        .split('-')
        .map(|p| p.parse::<u32>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;

    match parts.as_slice() {
        [year, month, day] => {
            let year = i32::try_from(*year).map_err(|_| invalid())?;
            NaiveDate::from_ymd_opt(year, *month, *day).ok_or_else(invalid)
        }
        _ => Err(invalid()),
    }
}
