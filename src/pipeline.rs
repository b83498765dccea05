//! URL list to formatted citations.

use crate::sources::{extract_identifier, ArxivSource, SourceError};
use crate::utils::{BibtexFormatter, CitationFormatter};

/// Generate standard BibTeX entries for a list of arXiv abstract URLs
pub async fn arxiv_to_bibtex<S: AsRef<str>>(
    source: &ArxivSource,
    urls: &[S],
) -> Result<Vec<String>, SourceError> {
    arxiv_to_citations(source, urls, &BibtexFormatter).await
}

/// Generate citations for a list of arXiv abstract URLs with any formatter
///
/// All URLs are validated before the single batched request is sent, so one
/// bad URL fails the whole call without touching the network. The result holds
/// one string per record arXiv returned, in response order.
pub async fn arxiv_to_citations<S, F>(
    source: &ArxivSource,
    urls: &[S],
    formatter: &F,
) -> Result<Vec<String>, SourceError>
where
    S: AsRef<str>,
    F: CitationFormatter + ?Sized,
{
    let ids = identifiers(urls)?;
    let records = source.query(&ids).await?;

    tracing::info!(
        requested = ids.len(),
        returned = records.len(),
        "resolved arXiv records"
    );

    Ok(records.iter().map(|record| formatter.format(record)).collect())
}

/// Extract every identifier, failing on the first bad URL
fn identifiers<S: AsRef<str>>(urls: &[S]) -> Result<Vec<String>, SourceError> {
    if urls.is_empty() {
        return Err(SourceError::InvalidRequest("no URLs given".to_string()));
    }

    urls.iter()
        .map(|url| {
            let url = url.as_ref();
            let id = extract_identifier(url)?;
            if id.is_empty() {
                return Err(SourceError::InvalidRequest(format!(
                    "empty arXiv identifier in {}",
                    url
                )));
            }
            Ok(id)
        })
        .collect()
}
