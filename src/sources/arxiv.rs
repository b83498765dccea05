//! arXiv export API client and Atom response parser.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use reqwest::header::ACCEPT;
use std::sync::Arc;
use url::Url;

use crate::config::ClientConfig;
use crate::models::{Record, RecordBuilder};
use crate::sources::SourceError;
use crate::utils::HttpClient;

/// Path prefix of an arXiv abstract page
const ABS_PREFIX: &str = "/abs/";

/// Extract the arXiv identifier from an abstract page URL
///
/// The path must start with `/abs/`; the rest of the path is returned as is,
/// so both identifier styles and version suffixes survive:
/// - "https://arxiv.org/abs/2002.05234" -> "2002.05234"
/// - "https://arxiv.org/abs/hep-ex/0307015v1" -> "hep-ex/0307015v1"
pub fn extract_identifier(url: &str) -> Result<String, SourceError> {
    let parsed = Url::parse(url)?;
    parsed
        .path()
        .strip_prefix(ABS_PREFIX)
        .map(str::to_string)
        .ok_or_else(|| {
            SourceError::InvalidRequest(format!("not an arXiv abstract URL: {}", url))
        })
}

/// arXiv metadata source
///
/// Issues exactly one request per [`query`](Self::query) call, with every
/// identifier batched into a single `id_list`.
#[derive(Debug, Clone)]
pub struct ArxivSource {
    client: Arc<HttpClient>,
    endpoint: String,
}

impl ArxivSource {
    /// Create a new arXiv source against the public export API
    pub fn new() -> Result<Self, SourceError> {
        Self::with_config(&ClientConfig::default())
    }

    /// Create a source from explicit settings
    pub fn with_config(config: &ClientConfig) -> Result<Self, SourceError> {
        Ok(Self {
            client: Arc::new(HttpClient::from_config(config)?),
            endpoint: config.endpoint.clone(),
        })
    }

    /// Create a source that shares an existing HTTP client
    pub fn with_client(client: Arc<HttpClient>, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Build the `id_list` query URL for a batch of identifiers
    pub fn query_url<S: AsRef<str>>(&self, ids: &[S]) -> String {
        let id_list = ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
        format!("{}?id_list={}", self.endpoint, id_list)
    }

    /// Fetch the raw Atom document for a batch of identifiers
    pub async fn query_raw<S: AsRef<str>>(&self, ids: &[S]) -> Result<String, SourceError> {
        let url = self.query_url(ids);
        tracing::debug!(url = %url, "querying arXiv");

        let response = self
            .client
            .client()
            .get(&url)
            .header(ACCEPT, "application/atom+xml")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Network(format!(
                "arXiv API returned status: {}",
                status
            )));
        }

        let body = response.text().await?;
        tracing::debug!(bytes = body.len(), "received arXiv response");
        Ok(body)
    }

    /// Fetch and parse the records for a batch of identifiers
    pub async fn query<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Record>, SourceError> {
        let xml = self.query_raw(ids).await?;
        parse_feed(&xml)
    }
}

/// Parse an arXiv Atom feed into records, one per `<entry>`, in document order
///
/// Only direct children of an entry are read (plus `<author><name>`), so the
/// feed's own `<title>`, `<id>` and `<updated>` never leak into a record.
pub fn parse_feed(xml: &str) -> Result<Vec<Record>, SourceError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut records = Vec::new();
    let mut entry: Option<RecordBuilder> = None;
    // open elements below the current <entry>
    let mut path: Vec<String> = Vec::new();
    let mut text = String::new();
    // whether the current <author> has produced a <name>
    let mut author_named = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = local_name(&e);
                if entry.is_none() {
                    if name == "entry" {
                        entry = Some(RecordBuilder::new());
                        path.clear();
                    }
                } else if let Some(builder) = entry.as_mut() {
                    if path.is_empty() {
                        if name == "author" {
                            author_named = false;
                        }
                        read_attributes(builder, &name, &e)?;
                    }
                    path.push(name);
                    text.clear();
                }
            }
            // <title/> reads the same as <title></title>
            Event::Empty(e) => {
                if let Some(builder) = entry.as_mut() {
                    let name = local_name(&e);
                    if path.is_empty() {
                        if name == "author" {
                            author_named = false;
                        }
                        read_attributes(builder, &name, &e)?;
                    }
                    read_text(
                        builder,
                        path.last().map(String::as_str),
                        &name,
                        "",
                        &mut author_named,
                    )?;
                }
            }
            Event::Text(e) => {
                if entry.is_some() {
                    let unescaped = e
                        .unescape()
                        .map_err(|err| SourceError::Parse(format!("XML text: {}", err)))?;
                    text.push_str(&unescaped);
                }
            }
            Event::CData(e) => {
                if entry.is_some() {
                    let raw = e.into_inner();
                    let content = std::str::from_utf8(&raw)
                        .map_err(|err| SourceError::Parse(format!("XML CDATA: {}", err)))?;
                    text.push_str(content);
                }
            }
            Event::End(_) => match path.pop() {
                Some(name) => {
                    if let Some(builder) = entry.as_mut() {
                        read_text(
                            builder,
                            path.last().map(String::as_str),
                            &name,
                            text.trim(),
                            &mut author_named,
                        )?;
                    }
                    text.clear();
                }
                None => {
                    if let Some(builder) = entry.take() {
                        records.push(builder.build()?);
                    }
                }
            },
            Event::Eof => break,
            _ => {}
        }
    }

    tracing::debug!(entries = records.len(), "parsed arXiv feed");
    Ok(records)
}

/// Store the text content of a closed element
fn read_text(
    builder: &mut RecordBuilder,
    parent: Option<&str>,
    name: &str,
    text: &str,
    author_named: &mut bool,
) -> Result<(), SourceError> {
    match (parent, name) {
        (None, "title") => {
            builder.title(text);
        }
        (None, "id") => {
            // "http://arxiv.org/abs/2002.05234v1" -> "2002.05234v1"
            let id = text.rsplit('/').next().unwrap_or(text);
            builder.arxiv_id(id);
        }
        (None, "published") => {
            builder.published(text);
        }
        (None, "updated") => {
            builder.updated(text);
        }
        (None, "author") => {
            if !*author_named {
                return Err(SourceError::Parse(
                    "entry is missing `author name`".to_string(),
                ));
            }
        }
        (Some("author"), "name") => {
            builder.author(text);
            *author_named = true;
        }
        _ => {}
    }
    Ok(())
}

/// Store the attributes of an element opened directly under `<entry>`
fn read_attributes(
    builder: &mut RecordBuilder,
    name: &str,
    e: &BytesStart<'_>,
) -> Result<(), SourceError> {
    match name {
        "primary_category" => {
            if let Some(term) = attribute(e, "term")? {
                builder.primary_category(term);
            }
        }
        // plain <category> only stands in when no primary category is given
        "category" if !builder.has_primary_category() => {
            if let Some(term) = attribute(e, "term")? {
                builder.primary_category(term);
            }
        }
        "link" => {
            if attribute(e, "rel")?.as_deref() == Some("alternate") {
                if let Some(href) = attribute(e, "href")? {
                    builder.url(href);
                }
            }
        }
        _ => {}
    }
    Ok(())
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn attribute(e: &BytesStart<'_>, name: &str) -> Result<Option<String>, SourceError> {
    let attr = e
        .try_get_attribute(name)
        .map_err(|err| SourceError::Parse(format!("XML attribute: {}", err)))?;

    match attr {
        Some(attr) => {
            let value = attr
                .unescape_value()
                .map_err(|err| SourceError::Parse(format!("XML attribute: {}", err)))?;
            Ok(Some(value.into_owned()))
        }
        None => Ok(None),
    }
}
