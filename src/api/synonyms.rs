use http::Method;
use serde::Serialize;
use std::time::Duration;

use super::ApiRequest;
use crate::error::Result;
use crate::response::Response;
use crate::transport::PreparedRequest;

#[derive(Serialize)]
struct CreateBody<'a> {
    synonyms: &'a [String],
}

// Field order is part of the wire contract: id first, then synonyms.
#[derive(Serialize)]
struct UpdateBody<'a> {
    id: &'a str,
    synonyms: &'a [String],
}

/// Retrieves all synonym sets for an engine.
pub struct SynonymsList {
    req: ApiRequest,
    engine: String,
    body: Option<Vec<u8>>,
}

impl SynonymsList {
    pub(crate) fn new(req: ApiRequest, engine: String) -> Self {
        SynonymsList {
            req,
            engine,
            body: None,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.req.timeout = Some(timeout);
        self
    }

    /// Raw request body, e.g. `{"page":{"current":2,"size":10}}` to page
    /// through a large collection.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub async fn send(self) -> Result<Response> {
        let path = format!("/api/as/v1/engines/{}/synonyms", self.engine);
        let mut prepared = PreparedRequest::new(Method::GET, path);
        if let Some(body) = self.body {
            prepared = prepared.json(body);
        }
        let prepared = prepared.timeout(self.req.timeout);
        self.req.transport.perform(prepared).await
    }
}

/// Retrieves a synonym set by id.
pub struct SynonymsGet {
    req: ApiRequest,
    engine: String,
    id: String,
}

impl SynonymsGet {
    pub(crate) fn new(req: ApiRequest, engine: String, id: String) -> Self {
        SynonymsGet { req, engine, id }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.req.timeout = Some(timeout);
        self
    }

    pub async fn send(self) -> Result<Response> {
        let path = format!("/api/as/v1/engines/{}/synonyms/{}", self.engine, self.id);
        let prepared = PreparedRequest::new(Method::GET, path).timeout(self.req.timeout);
        self.req.transport.perform(prepared).await
    }
}

/// Creates a synonym set for an engine.
pub struct SynonymsCreate {
    req: ApiRequest,
    engine: String,
    synonyms: Vec<String>,
}

impl SynonymsCreate {
    pub(crate) fn new(req: ApiRequest, engine: String, synonyms: Vec<String>) -> Self {
        SynonymsCreate {
            req,
            engine,
            synonyms,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.req.timeout = Some(timeout);
        self
    }

    pub async fn send(self) -> Result<Response> {
        let path = format!("/api/as/v1/engines/{}/synonyms", self.engine);
        let body = serde_json::to_vec(&CreateBody {
            synonyms: &self.synonyms,
        })?;
        let prepared = PreparedRequest::new(Method::POST, path)
            .json(body)
            .timeout(self.req.timeout);
        self.req.transport.perform(prepared).await
    }
}

/// Updates a synonym set by id.
pub struct SynonymsUpdate {
    req: ApiRequest,
    engine: String,
    id: String,
    synonyms: Vec<String>,
}

impl SynonymsUpdate {
    pub(crate) fn new(req: ApiRequest, engine: String, id: String, synonyms: Vec<String>) -> Self {
        SynonymsUpdate {
            req,
            engine,
            id,
            synonyms,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.req.timeout = Some(timeout);
        self
    }

    pub async fn send(self) -> Result<Response> {
        let path = format!("/api/as/v1/engines/{}/synonyms/{}", self.engine, self.id);
        let body = serde_json::to_vec(&UpdateBody {
            id: &self.id,
            synonyms: &self.synonyms,
        })?;
        let prepared = PreparedRequest::new(Method::PUT, path)
            .json(body)
            .timeout(self.req.timeout);
        self.req.transport.perform(prepared).await
    }
}

/// Deletes a synonym set by id.
pub struct SynonymsDelete {
    req: ApiRequest,
    engine: String,
    id: String,
}

impl SynonymsDelete {
    pub(crate) fn new(req: ApiRequest, engine: String, id: String) -> Self {
        SynonymsDelete { req, engine, id }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.req.timeout = Some(timeout);
        self
    }

    pub async fn send(self) -> Result<Response> {
        let path = format!("/api/as/v1/engines/{}/synonyms/{}", self.engine, self.id);
        let prepared = PreparedRequest::new(Method::DELETE, path).timeout(self.req.timeout);
        self.req.transport.perform(prepared).await
    }
}
