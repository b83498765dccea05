//! Integration tests for arxiv-bibtex
//!
//! These tests run the full URL-to-BibTeX pipeline against a mocked arXiv API.

use arxiv_bibtex::config::ClientConfig;
use arxiv_bibtex::models::Record;
use arxiv_bibtex::pipeline::{arxiv_to_bibtex, arxiv_to_citations};
use arxiv_bibtex::sources::{ArxivSource, SourceError};
use arxiv_bibtex::utils::HttpClient;
use mockito::Matcher;
use std::sync::Arc;

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title type="html">ArXiv Query: id_list=2101.00001,hep-ex/0307015v1</title>
  <id>http://arxiv.org/api/feed-id</id>
  <updated>2024-05-01T00:00:00-04:00</updated>
  <entry>
    <id>http://arxiv.org/abs/2101.00001v1</id>
    <updated>2021-03-15T09:30:00Z</updated>
    <published>2021-01-04T10:00:00Z</published>
    <title>Towards Better Proofs</title>
    <author><name>Jane A. Doe</name></author>
    <author><name>John Smith</name></author>
    <link href="http://arxiv.org/abs/2101.00001v1" rel="alternate" type="text/html"/>
    <link title="pdf" href="http://arxiv.org/pdf/2101.00001v1" rel="related" type="application/pdf"/>
    <arxiv:primary_category xmlns:arxiv="http://arxiv.org/schema/2008/an" term="math.NT" scheme="http://arxiv.org/schemas/atom"/>
    <category term="math.NT" scheme="http://arxiv.org/schemas/atom"/>
  </entry>
  <entry>
    <id>http://arxiv.org/abs/hep-ex/0307015v1</id>
    <updated>2003-07-07T13:46:39Z</updated>
    <published>2003-07-07T13:46:39Z</published>
    <title>Multi-Electron Production at High Transverse Momenta</title>
    <author><name>H1 Collaboration</name></author>
    <link href="http://arxiv.org/abs/hep-ex/0307015v1" rel="alternate" type="text/html"/>
    <arxiv:primary_category xmlns:arxiv="http://arxiv.org/schema/2008/an" term="hep-ex" scheme="http://arxiv.org/schemas/atom"/>
  </entry>
</feed>
"#;

const URLS: [&str; 2] = [
    "https://arxiv.org/abs/2101.00001",
    "https://arxiv.org/abs/hep-ex/0307015v1",
];

fn source_for(server: &mockito::Server) -> ArxivSource {
    let config = ClientConfig::default().timeout_secs(5);
    let client = HttpClient::from_config(&config).expect("client should build");
    ArxivSource::with_client(Arc::new(client), format!("{}/api/query", server.url()))
}

#[tokio::test]
async fn test_batched_query_to_bibtex() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/query")
        .match_query(Matcher::UrlEncoded(
            "id_list".into(),
            "2101.00001,hep-ex/0307015v1".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/atom+xml; charset=utf-8")
        .with_body(FEED)
        .expect(1)
        .create_async()
        .await;

    let source = source_for(&server);
    let entries = arxiv_to_bibtex(&source, &URLS).await.unwrap();

    mock.assert_async().await;
    assert_eq!(entries.len(), 2);
    assert_eq!(
        entries[0],
        concat!(
            "@misc{doe2021better,\n",
            "      title={Towards Better Proofs},\n",
            "      author={Jane A. Doe and John Smith},\n",
            "      year={2021},\n",
            "      howpublished=\"\\url{http://arxiv.org/abs/2101.00001v1}\",\n",
            "      note={arXiv:math.NT:2101.00001v1},\n",
            "}"
        )
    );
    assert!(entries[1].starts_with("@misc{collaboration2003multielectron,\n"));
    assert!(entries[1].contains("note={arXiv:hep-ex:0307015v1},"));
}

#[tokio::test]
async fn test_custom_formatter() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/query")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(FEED)
        .create_async()
        .await;

    let source = source_for(&server);
    let formatter = |r: &Record| format!("{} [{}]", r.arxiv_id, r.updated);
    let lines = arxiv_to_citations(&source, &URLS, &formatter).await.unwrap();

    assert_eq!(lines, vec!["2101.00001v1 [2021-03-15]", "0307015v1 [2003-07-07]"]);
}

#[tokio::test]
async fn test_invalid_url_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let source = source_for(&server);
    let urls = ["https://arxiv.org/abs/2101.00001", "https://arxiv.org/pdf/2002.05234"];
    let err = arxiv_to_bibtex(&source, &urls).await.unwrap_err();

    assert!(matches!(err, SourceError::InvalidRequest(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_is_network_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/query")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let source = source_for(&server);
    let err = arxiv_to_bibtex(&source, &URLS).await.unwrap_err();

    match err {
        SourceError::Network(msg) => assert!(msg.contains("503")),
        other => panic!("expected network error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_entry_is_parse_error() {
    let body = r#"<feed xmlns="http://www.w3.org/2005/Atom">
  <entry>
    <id>http://arxiv.org/abs/2101.00001v1</id>
    <title>No Dates Here</title>
    <author><name>Jane A. Doe</name></author>
    <link href="http://arxiv.org/abs/2101.00001v1" rel="alternate" type="text/html"/>
  </entry>
</feed>"#;

    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/query")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let source = source_for(&server);
    let err = arxiv_to_bibtex(&source, &URLS[..1]).await.unwrap_err();
    assert!(matches!(err, SourceError::Parse(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    // port 9 (discard) is not expected to be listening
    let config = ClientConfig::default()
        .endpoint("http://127.0.0.1:9/api/query")
        .timeout_secs(2);
    let source = ArxivSource::with_config(&config).unwrap();

    let err = arxiv_to_bibtex(&source, &URLS).await.unwrap_err();
    assert!(matches!(err, SourceError::Network(_)));
}
