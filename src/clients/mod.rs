//! Outbound HTTP
//!
//! Every request goes through the `Transport` trait so the weather, dog and
//! report clients can be exercised without a network.

pub(crate) mod dog;
pub(crate) mod weather;

#[cfg(test)]
pub(crate) mod testing;

use std::time::Duration;

use serde_json::Value;

use crate::consts::FETCH_TIMEOUT;
use crate::error::FetchError;

pub(crate) use dog::{DogClient, DogInfo};
pub(crate) use weather::{WeatherClient, WeatherInfo};

pub(crate) trait Transport {
    /// GET `url` with query parameters and decode the body as JSON
    fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, FetchError>;

    /// POST a JSON body with bearer auth and decode the response as JSON
    fn post_json(&self, url: &str, bearer: &str, body: &Value) -> Result<Value, FetchError>;
}

/// Blocking transport backed by `ureq`
pub(crate) struct UreqTransport {
    /// Weather and dog lookups: bounded by `FETCH_TIMEOUT`
    fetch_agent: ureq::Agent,
    /// Report generation: transport defaults
    generate_agent: ureq::Agent,
}

impl UreqTransport {
    pub(crate) fn new() -> Self {
        Self::with_fetch_timeout(FETCH_TIMEOUT)
    }

    /// Weather and dog lookups give up after `timeout`
    pub(crate) fn with_fetch_timeout(timeout: Duration) -> Self {
        let fetch_agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            fetch_agent,
            generate_agent: ureq::Agent::new_with_defaults(),
        }
    }
}

impl Transport for UreqTransport {
    fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, FetchError> {
        let mut request = self.fetch_agent.get(url);
        for (key, value) in query {
            request = request.query(*key, *value);
        }
        let response = request.call()?;
        let mut body = response.into_body();
        serde_json::from_reader(body.as_reader()).map_err(|e| FetchError::Malformed(e.to_string()))
    }

    fn post_json(&self, url: &str, bearer: &str, body: &Value) -> Result<Value, FetchError> {
        let response = self
            .generate_agent
            .post(url)
            .header("Authorization", format!("Bearer {bearer}"))
            .send_json(body)?;
        let mut body = response.into_body();
        serde_json::from_reader(body.as_reader()).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

/// Transport for `--offline`: every request fails without touching the network
pub(crate) struct OfflineTransport;

impl Transport for OfflineTransport {
    fn get_json(&self, _url: &str, _query: &[(&str, &str)]) -> Result<Value, FetchError> {
        Err(FetchError::Offline)
    }

    fn post_json(&self, _url: &str, _bearer: &str, _body: &Value) -> Result<Value, FetchError> {
        Err(FetchError::Offline)
    }
}
