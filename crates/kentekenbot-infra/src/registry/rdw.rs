//! RdwRegistryClient -- [`VehicleRegistry`] backed by the RDW open-data API.
//!
//! Issues `GET {base_url}?kenteken={plate}` and classifies the answer. The
//! JSON body is kept as-is; its schema is never validated.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use kentekenbot_core::registry::VehicleRegistry;
use kentekenbot_types::vehicle::{LookupOutcome, VehicleRecord};

/// HTTP client for the RDW "gekentekende voertuigen" dataset.
#[derive(Debug, Clone)]
pub struct RdwRegistryClient {
    client: reqwest::Client,
    base_url: String,
}

impl RdwRegistryClient {
    /// Create a client for `base_url` with a per-request `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    async fn fetch(&self, plate: &str) -> Result<LookupOutcome, String> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("kenteken", plate)])
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(describe_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("registry answered with status {status}"));
        }

        let body = response.bytes().await.map_err(describe_transport_error)?;
        classify_body(&body)
    }
}

impl VehicleRegistry for RdwRegistryClient {
    async fn lookup(&self, plate: &str) -> LookupOutcome {
        debug!(plate, base_url = %self.base_url, "querying vehicle registry");
        self.fetch(plate)
            .await
            .unwrap_or_else(LookupOutcome::TransportError)
    }
}

/// Classify a successful response body.
///
/// An absent body, `null`, `[]` and `{}` all mean the plate is unknown.
fn classify_body(body: &[u8]) -> Result<LookupOutcome, String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(LookupOutcome::NotFound);
    }

    let record: VehicleRecord = serde_json::from_slice(body)
        .map_err(|err| format!("registry returned undecodable body: {err}"))?;

    if record.is_empty() {
        Ok(LookupOutcome::NotFound)
    } else {
        Ok(LookupOutcome::Found(record))
    }
}

fn describe_transport_error(err: reqwest::Error) -> String {
    if err.is_timeout() {
        "registry request timed out".to_string()
    } else if err.is_connect() {
        format!("could not connect to registry: {err}")
    } else {
        format!("registry request failed: {err}")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const DATASET_PATH: &str = "/resource/m9d7-ebf2.json";

    fn client_for(server: &MockServer) -> RdwRegistryClient {
        RdwRegistryClient::new(
            format!("{}{DATASET_PATH}", server.uri()),
            Duration::from_secs(2),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_found_record_is_kept_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(DATASET_PATH))
            .and(query_param("kenteken", "8XBR35"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"kenteken":"8XBR35","voertuigsoort":"Personenauto","merk":"TESLA"}]"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = client_for(&server).lookup("8XBR35").await;
        let LookupOutcome::Found(record) = outcome else {
            panic!("expected a record, got {outcome:?}");
        };
        assert_eq!(
            record.to_compact_json(),
            r#"[{"kenteken":"8XBR35","voertuigsoort":"Personenauto","merk":"TESLA"}]"#
        );
    }

    #[tokio::test]
    async fn test_empty_array_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(DATASET_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        assert_eq!(
            client_for(&server).lookup("ZZ99ZZ").await,
            LookupOutcome::NotFound
        );
    }

    #[tokio::test]
    async fn test_empty_body_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(DATASET_PATH))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        assert_eq!(
            client_for(&server).lookup("ZZ99ZZ").await,
            LookupOutcome::NotFound
        );
    }

    #[tokio::test]
    async fn test_server_error_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(DATASET_PATH))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = client_for(&server).lookup("8XBR35").await;
        assert!(matches!(outcome, LookupOutcome::TransportError(ref reason) if reason.contains("503")));
    }

    #[tokio::test]
    async fn test_garbage_body_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(DATASET_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>onderhoud</html>"))
            .mount(&server)
            .await;

        let outcome = client_for(&server).lookup("8XBR35").await;
        assert!(matches!(outcome, LookupOutcome::TransportError(_)));
    }

    #[tokio::test]
    async fn test_slow_registry_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(DATASET_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"kenteken": "8XBR35"}]))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = RdwRegistryClient::new(
            format!("{}{DATASET_PATH}", server.uri()),
            Duration::from_millis(100),
        )
        .unwrap();

        let outcome = client.lookup("8XBR35").await;
        assert_eq!(
            outcome,
            LookupOutcome::TransportError("registry request timed out".to_string())
        );
    }

    #[tokio::test]
    async fn test_unreachable_registry_is_transport_error() {
        let client =
            RdwRegistryClient::new("http://127.0.0.1:1/resource", Duration::from_secs(1)).unwrap();
        let outcome = client.lookup("8XBR35").await;
        assert!(matches!(outcome, LookupOutcome::TransportError(_)));
    }

    #[test]
    fn test_classify_body() {
        assert_eq!(classify_body(b"null").unwrap(), LookupOutcome::NotFound);
        assert_eq!(classify_body(b"{}").unwrap(), LookupOutcome::NotFound);
        assert_eq!(classify_body(b"  \n").unwrap(), LookupOutcome::NotFound);
        assert!(matches!(
            classify_body(br#"{"merk":"Volvo"}"#).unwrap(),
            LookupOutcome::Found(_)
        ));
        assert!(classify_body(b"niet json").is_err());
    }
}
