//! Blocking HTTP client for an open-elevation style service.
//!
//! Requests look like `GET {base}/v1/{dataset}?locations={lat},{lon}` and
//! answers carry `{"results": [{"elevation": <meters>}]}`.

use crate::elevation::ElevationSource;
use crate::util::{PeakSeekError, PeakSeekResult};
use serde::Deserialize;
use std::time::Duration;

/// Default service root.
pub const DEFAULT_BASE_URL: &str = "http://gethighelevation.com:5000";

/// Default elevation dataset.
pub const DEFAULT_DATASET: &str = "etopo1";

#[derive(Debug, Deserialize)]
struct LookupResponse {
    results: Vec<LookupResult>,
}

#[derive(Debug, Deserialize)]
struct LookupResult {
    elevation: Option<f64>,
}

/// Elevation source backed by a remote lookup service.
///
/// One request per lookup. Failures surface as [`PeakSeekError::Upstream`]
/// and are never retried.
pub struct HttpElevationSource {
    base_url: String,
    dataset: String,
    client: reqwest::blocking::Client,
}

impl std::fmt::Debug for HttpElevationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpElevationSource")
            .field("base_url", &self.base_url)
            .field("dataset", &self.dataset)
            .finish()
    }
}

impl HttpElevationSource {
    /// Creates a client for the default service and dataset.
    pub fn new() -> PeakSeekResult<Self> {
        Self::with_endpoint(DEFAULT_BASE_URL, DEFAULT_DATASET, None)
    }

    /// Creates a client for `base_url`/`dataset` with an optional timeout.
    pub fn with_endpoint(
        base_url: &str,
        dataset: &str,
        timeout: Option<Duration>,
    ) -> PeakSeekResult<Self> {
        if base_url.is_empty() {
            return Err(PeakSeekError::InvalidInput("base_url must not be empty"));
        }
        if dataset.is_empty() {
            return Err(PeakSeekError::InvalidInput("dataset must not be empty"));
        }

        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| PeakSeekError::ClientSetup(err.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            dataset: dataset.to_owned(),
            client,
        })
    }

    /// Returns the lookup URL for a coordinate.
    pub fn lookup_url(&self, lat: f64, lon: f64) -> String {
        format!(
            "{}/v1/{}?locations={},{}",
            self.base_url, self.dataset, lat, lon
        )
    }
}

fn upstream(lat: f64, lon: f64, reason: String) -> PeakSeekError {
    PeakSeekError::Upstream { lat, lon, reason }
}

/// Extracts the first elevation from a decoded response.
fn first_elevation(body: LookupResponse, lat: f64, lon: f64) -> PeakSeekResult<f64> {
    body.results
        .first()
        .and_then(|r| r.elevation)
        .ok_or(PeakSeekError::MissingElevation { lat, lon })
}

impl ElevationSource for HttpElevationSource {
    fn elevation(&self, lat: f64, lon: f64) -> PeakSeekResult<f64> {
        let url = self.lookup_url(lat, lon);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|err| upstream(lat, lon, err.to_string()))?;

        if !response.status().is_success() {
            return Err(upstream(lat, lon, format!("HTTP {}", response.status())));
        }

        let body: LookupResponse = response
            .json()
            .map_err(|err| upstream(lat, lon, format!("malformed response: {err}")))?;
        first_elevation(body, lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::{first_elevation, HttpElevationSource, LookupResponse};
    use crate::elevation::ElevationSource;
    use crate::PeakSeekError;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;
    use std::time::Duration;

    /// Serves one canned HTTP response on a loopback port and returns its base URL.
    fn serve_once(status: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });
        format!("http://{addr}")
    }

    fn client(base_url: &str) -> HttpElevationSource {
        HttpElevationSource::with_endpoint(base_url, "etopo1", Some(Duration::from_secs(5)))
            .unwrap()
    }

    #[test]
    fn elevation_reads_first_result() {
        let base = serve_once("200 OK", r#"{"results":[{"elevation":1655.0}]}"#);
        assert_eq!(client(&base).elevation(39.7, -105.2).unwrap(), 1655.0);
    }

    #[test]
    fn elevation_maps_error_status_to_upstream() {
        let base = serve_once("500 Internal Server Error", "{}");
        let err = client(&base).elevation(39.7, -105.2).err().unwrap();
        match err {
            PeakSeekError::Upstream { lat, lon, reason } => {
                assert_eq!((lat, lon), (39.7, -105.2));
                assert!(reason.contains("500"), "reason: {reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn elevation_maps_malformed_body_to_upstream() {
        let base = serve_once("200 OK", "nope!");
        let err = client(&base).elevation(1.0, 2.0).err().unwrap();
        match err {
            PeakSeekError::Upstream { reason, .. } => {
                assert!(reason.starts_with("malformed response"), "reason: {reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn elevation_maps_empty_results_to_missing() {
        let base = serve_once("200 OK", r#"{"results":[]}"#);
        let err = client(&base).elevation(1.0, 2.0).err().unwrap();
        assert_eq!(err, PeakSeekError::MissingElevation { lat: 1.0, lon: 2.0 });
    }

    #[test]
    fn elevation_maps_refused_connection_to_upstream() {
        let err = client("http://127.0.0.1:1").elevation(1.0, 2.0).err().unwrap();
        assert!(matches!(err, PeakSeekError::Upstream { .. }));
    }

    #[test]
    fn lookup_url_matches_service_layout() {
        let src = HttpElevationSource::with_endpoint("http://localhost:5000/", "etopo1", None)
            .unwrap();
        assert_eq!(
            src.lookup_url(40.5, -105.25),
            "http://localhost:5000/v1/etopo1?locations=40.5,-105.25"
        );
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let err = HttpElevationSource::with_endpoint("", "etopo1", None)
            .err()
            .unwrap();
        assert_eq!(err, PeakSeekError::InvalidInput("base_url must not be empty"));
    }

    #[test]
    fn first_result_is_used() {
        let body: LookupResponse = serde_json::from_str(
            r#"{"results":[{"latitude":1.0,"longitude":2.0,"elevation":1234.5}]}"#,
        )
        .unwrap();
        assert_eq!(first_elevation(body, 1.0, 2.0).unwrap(), 1234.5);
    }

    #[test]
    fn empty_results_are_missing() {
        let body: LookupResponse = serde_json::from_str(r#"{"results":[]}"#).unwrap();
        let err = first_elevation(body, 1.0, 2.0).err().unwrap();
        assert_eq!(err, PeakSeekError::MissingElevation { lat: 1.0, lon: 2.0 });
    }

    #[test]
    fn null_elevation_is_missing() {
        let body: LookupResponse =
            serde_json::from_str(r#"{"results":[{"elevation":null}]}"#).unwrap();
        assert!(first_elevation(body, 0.0, 0.0).is_err());
    }
}
