#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use std::sync::{Arc, Mutex};

use griddle::{GriddleError, PreparedRequest, Response, Transport};

/// Transport double: records every prepared request and answers with a
/// canned response, or fails without answering at all.
pub struct RecordingTransport {
    requests: Mutex<Vec<PreparedRequest>>,
    status: StatusCode,
    body: Bytes,
    failure: Option<String>,
}

impl RecordingTransport {
    pub fn ok(body: &str) -> Arc<Self> {
        Self::with_status(StatusCode::OK, body)
    }

    pub fn with_status(status: StatusCode, body: &str) -> Arc<Self> {
        Arc::new(RecordingTransport {
            requests: Mutex::new(Vec::new()),
            status,
            body: Bytes::copy_from_slice(body.as_bytes()),
            failure: None,
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(RecordingTransport {
            requests: Mutex::new(Vec::new()),
            status: StatusCode::OK,
            body: Bytes::new(),
            failure: Some(message.to_string()),
        })
    }

    /// The most recent request, removed from the record.
    pub fn last_request(&self) -> PreparedRequest {
        self.requests
            .lock()
            .unwrap()
            .pop()
            .expect("no request recorded")
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn perform(&self, request: PreparedRequest) -> griddle::Result<Response> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref message) = self.failure {
            return Err(GriddleError::Transport(message.clone()));
        }

        Ok(Response::from_parts(
            self.status,
            HeaderMap::new(),
            self.body.clone(),
        ))
    }
}
