//! Tests for the web link provider

use super::*;
use crate::test_utils::test_helpers::run_async;
use proptest::prelude::*;

#[test]
fn test_single_result_for_query() {
    let provider = WebLinkProvider::default();
    let results = run_async(provider.search("rust tui", 5)).unwrap();

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.id, 1);
    assert_eq!(result.title, "rust tui - Web search");
    assert_eq!(result.url, "https://www.google.com/search?q=rust+tui");
    assert!(result.snippet.contains("rust tui"));
}

#[test]
fn test_max_results_does_not_change_count() {
    let provider = WebLinkProvider::default();
    assert_eq!(run_async(provider.search("a", 0)).unwrap().len(), 1);
    assert_eq!(run_async(provider.search("a", 50)).unwrap().len(), 1);
}

#[test]
fn test_query_is_percent_encoded() {
    let provider = WebLinkProvider::default();
    let url = provider.search_url_for("a&b=c/ü");
    assert_eq!(url, "https://www.google.com/search?q=a%26b%3Dc%2F%C3%BC");
}

#[test]
fn test_custom_search_url() {
    let provider = WebLinkProvider::new("https://duckduckgo.com/");
    assert_eq!(provider.search_url_for("x"), "https://duckduckgo.com/?q=x");
}

#[test]
fn test_invalid_search_url_uses_default() {
    let provider = WebLinkProvider::new("not a url");
    assert_eq!(
        provider.search_url_for("x"),
        "https://www.google.com/search?q=x"
    );
}

#[test]
fn test_non_http_search_url_uses_default() {
    for url in ["mailto:search", "ftp://files.example.com/search", "file:///tmp/search"] {
        let provider = WebLinkProvider::new(url);
        assert_eq!(
            provider.search_url_for("x"),
            "https://www.google.com/search?q=x",
            "{} should be rejected",
            url
        );
    }
}

#[test]
fn test_http_search_url_is_kept() {
    let provider = WebLinkProvider::new("http://search.local/find");
    assert_eq!(provider.search_url_for("x"), "http://search.local/find?q=x");
}

#[test]
fn test_always_configured() {
    assert!(WebLinkProvider::default().is_configured());
}

#[test]
fn test_latency_from_config() {
    let config = WebConfig {
        simulated_latency_ms: 20,
        ..WebConfig::default()
    };
    let provider = WebLinkProvider::from_config(&config);
    assert_eq!(provider.latency(), Some(Duration::from_millis(20)));

    let provider = WebLinkProvider::from_config(&WebConfig::default());
    assert_eq!(provider.latency(), None);
}

#[test]
fn test_latency_is_awaited() {
    let provider = WebLinkProvider::default().with_latency(Duration::from_millis(30));
    let start = std::time::Instant::now();
    let results = run_async(provider.search("slow", 5)).unwrap();
    assert!(start.elapsed() >= Duration::from_millis(30));
    assert_eq!(results.len(), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_result_links_to_search_for_query(query in "[a-zA-Z0-9 &?=#]{1,30}") {
        let provider = WebLinkProvider::default();
        let results = provider.build_results(&query);

        prop_assert_eq!(results.len(), 1);
        prop_assert!(results[0].title.contains(&query));

        let url = Url::parse(&results[0].url).unwrap();
        prop_assert_eq!(url.host_str(), Some("www.google.com"));
        prop_assert_eq!(url.path(), "/search");
        let q: Vec<String> = url
            .query_pairs()
            .filter(|(k, _)| k == "q")
            .map(|(_, v)| v.into_owned())
            .collect();
        prop_assert_eq!(q, vec![query.clone()]);
    }
}
