use std::fs;
use tracing::info;

// Adds automatic logging to test
mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub const RATES_BODY: &str = r#"{
        "result": "success",
        "base_code": "USD",
        "rates": {
            "USD": 1,
            "EUR": 0.9,
            "MXN": 21.0,
            "COP": 4000.0,
            "GBP": 0.78
        }
    }"#;

    pub async fn create_mock_server(mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v6/latest/USD"))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub async fn create_failing_server() -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v6/latest/USD"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        mock_server
    }
}

#[test_log::test(tokio::test)]
async fn test_full_convert_flow_with_mock() {
    let mock_server = test_utils::create_mock_server(test_utils::RATES_BODY).await;

    // Setup config file pointing at the mock endpoint
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let config_path = config_file.path();
    let config_content = format!(
        r#"
        provider:
          base_url: {}
        currency: "USD"
    "#,
        mock_server.uri()
    );

    fs::write(config_path, &config_content).expect("Failed to write config file");

    // Run app and verify success
    let result = cambio::run_command(
        cambio::AppCommand::Convert {
            amount: "10".to_string(),
            from: Some(cambio::core::currency::CurrencyCode::Usd),
        },
        Some(config_path.to_str().unwrap()),
    )
    .await;
    assert!(
        result.is_ok(),
        "Main function failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_invalid_amount_is_rejected() {
    // No network setup needed: validation fails before the fetch
    let mock_server = test_utils::create_mock_server(test_utils::RATES_BODY).await;

    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let config_content = format!("provider:\n  base_url: {}\n", mock_server.uri());
    fs::write(config_file.path(), &config_content).expect("Failed to write config file");

    let result = cambio::run_command(
        cambio::AppCommand::Convert {
            amount: "12.34.56".to_string(),
            from: None,
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    let err = result.expect_err("malformed amount must be rejected");
    assert!(err.to_string().contains("Invalid amount"));
}

#[test_log::test(tokio::test)]
async fn test_fetch_persists_and_survives_outage() {
    use cambio::core::cache::{CacheEntry, RateStore};
    use cambio::core::rates::{RateOrigin, RateProvider};
    use cambio::core::refresh::load_rates;
    use cambio::providers::open_er::OpenErApiProvider;
    use cambio::store::disk::DiskStore;
    use chrono::{Duration, Utc};

    let dir = tempfile::tempdir().unwrap();

    // First run: live fetch, persisted to disk
    let mock_server = test_utils::create_mock_server(test_utils::RATES_BODY).await;
    let fetched = {
        let provider = OpenErApiProvider::new(&mock_server.uri());
        let store = DiskStore::open(dir.path()).unwrap();
        let quote = load_rates(&provider, &store).await;
        assert_eq!(quote.origin, RateOrigin::Live);
        quote.table
    };
    info!(?fetched, "First run fetched live rates");

    // Age the persisted entry past the freshness window
    let store = DiskStore::open(dir.path()).unwrap();
    let aged = CacheEntry::new(fetched, Utc::now() - Duration::hours(2));
    store.save(&aged).await;

    // Second run: the endpoint is down, the aged entry is the fallback
    let failing_server = test_utils::create_failing_server().await;
    let provider = OpenErApiProvider::new(&failing_server.uri());
    let direct = provider.fetch_rates().await;
    assert!(direct.is_err(), "failing server must error the provider");

    let quote = load_rates(&provider, &store).await;
    assert_eq!(quote.table, fetched);
    match quote.origin {
        RateOrigin::Stale { as_of } => {
            assert_eq!(as_of.timestamp_millis(), aged.timestamp.timestamp_millis());
        }
        other => panic!("expected stale fallback, got {other:?}"),
    }
}

#[test_log::test(tokio::test)]
async fn test_fresh_cache_short_circuits_network() {
    use cambio::core::cache::{CacheEntry, RateStore};
    use cambio::core::rates::{RateOrigin, RateTable};
    use cambio::core::refresh::load_rates;
    use cambio::providers::open_er::OpenErApiProvider;
    use cambio::store::disk::DiskStore;
    use chrono::Utc;

    let dir = tempfile::tempdir().unwrap();
    let store = DiskStore::open(dir.path()).unwrap();
    let table = RateTable::new(17.5, 3850.0, 0.93).unwrap();
    store.save(&CacheEntry::new(table, Utc::now())).await;

    // A server with no mounted routes: any request would come back 404 and
    // surface as a stale/builtin origin instead of a cache hit.
    let silent_server = wiremock::MockServer::start().await;
    let provider = OpenErApiProvider::new(&silent_server.uri());

    let quote = load_rates(&provider, &store).await;
    assert_eq!(quote.table, table);
    assert!(
        matches!(quote.origin, RateOrigin::Cached { .. }),
        "fresh cache must be served without a fetch, got {:?}",
        quote.origin
    );
}
