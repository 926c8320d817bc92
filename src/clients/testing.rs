//! Scripted transport for unit tests

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::Value;

use super::Transport;
use crate::error::FetchError;

#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Json(Value),
    Status(u16),
    Timeout,
    Garbage,
}

#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub(crate) url: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) bearer: Option<String>,
    pub(crate) body: Option<Value>,
}

#[derive(Debug, Default)]
pub(crate) struct FakeTransport {
    routes: HashMap<String, Reply>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn route(mut self, url: &str, reply: Reply) -> Self {
        self.routes.insert(url.to_string(), reply);
        self
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn reply(&self, url: &str) -> Result<Value, FetchError> {
        match self.routes.get(url) {
            Some(Reply::Json(v)) => Ok(v.clone()),
            Some(Reply::Status(code)) => Err(FetchError::Status(*code)),
            Some(Reply::Timeout) => Err(FetchError::Timeout),
            Some(Reply::Garbage) => Err(FetchError::Malformed("expected value".to_string())),
            None => Err(FetchError::Transport(format!("no route for {url}"))),
        }
    }
}

impl Transport for FakeTransport {
    fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, FetchError> {
        self.calls.borrow_mut().push(RecordedCall {
            url: url.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            bearer: None,
            body: None,
        });
        self.reply(url)
    }

    fn post_json(&self, url: &str, bearer: &str, body: &Value) -> Result<Value, FetchError> {
        self.calls.borrow_mut().push(RecordedCall {
            url: url.to_string(),
            query: Vec::new(),
            bearer: Some(bearer.to_string()),
            body: Some(body.clone()),
        });
        self.reply(url)
    }
}
