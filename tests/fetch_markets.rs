//! Integration tests for the markets fetch boundary, using wiremock to
//! stand in for the CoinGecko API.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coindash::markets::{FetchError, MarketsClient};

fn market_json(id: &str, name: &str, market_cap: f64, change: f64) -> serde_json::Value {
    json!({
        "id": id,
        "symbol": &id[..3.min(id.len())],
        "name": name,
        "image": format!("https://assets.coingecko.com/coins/images/{}.png", id),
        "current_price": 100.0,
        "market_cap": market_cap,
        "total_volume": 1_000_000.0,
        "price_change_percentage_24h": change
    })
}

/// Ten entries in descending market-cap order, like the real feed.
fn full_page() -> Vec<serde_json::Value> {
    (0..10)
        .map(|i| {
            market_json(
                &format!("coin{}", i),
                &format!("Coin {}", i),
                (10 - i) as f64 * 1_000_000.0,
                i as f64 - 5.0,
            )
        })
        .collect()
}

#[tokio::test]
async fn test_fetch_decodes_full_page_preserving_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/coins/markets"))
        .and(query_param("vs_currency", "usd"))
        .and(query_param("order", "market_cap_desc"))
        .and(query_param("per_page", "10"))
        .and(query_param("page", "1"))
        .and(query_param("sparkline", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(full_page()))
        .mount(&server)
        .await;

    let client = MarketsClient::with_base_url(server.uri());
    let entries = client.fetch_markets().await.unwrap();

    assert_eq!(entries.len(), 10);
    // upstream order is preserved exactly
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry.id, format!("coin{}", i));
    }
    for pair in entries.windows(2) {
        assert!(pair[0].market_cap >= pair[1].market_cap);
    }
}

#[tokio::test]
async fn test_server_error_yields_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/coins/markets"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let client = MarketsClient::with_base_url(server.uri());
    let err = client.fetch_markets().await.unwrap_err();

    match err {
        FetchError::Status { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "upstream down");
        }
        other => panic!("expected status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_yields_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/coins/markets"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = MarketsClient::with_base_url(server.uri());
    let err = client.fetch_markets().await.unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_network_failure_yields_http_error() {
    // Nothing is listening on this port
    let client = MarketsClient::with_base_url("http://127.0.0.1:9");
    let err = client.fetch_markets().await.unwrap_err();

    assert!(matches!(err, FetchError::Http(_)));
}

#[tokio::test]
async fn test_null_numeric_fields_decode_to_zero() {
    let server = MockServer::start().await;

    let body = json!([{
        "id": "thincoin",
        "symbol": "thn",
        "name": "ThinCoin",
        "image": "https://example.com/thn.png",
        "current_price": 0.01,
        "market_cap": null,
        "total_volume": null,
        "price_change_percentage_24h": null
    }]);

    Mock::given(method("GET"))
        .and(path("/api/v3/coins/markets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = MarketsClient::with_base_url(server.uri());
    let entries = client.fetch_markets().await.unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].market_cap, 0.0);
    assert_eq!(entries[0].price_change_percentage_24h, 0.0);
}
