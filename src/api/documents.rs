use http::Method;
use std::time::Duration;

use super::ApiRequest;
use crate::error::Result;
use crate::response::Response;
use crate::transport::PreparedRequest;

/// Lists the documents of an engine.
pub struct DocumentsList {
    req: ApiRequest,
    engine: String,
}

impl DocumentsList {
    pub(crate) fn new(req: ApiRequest, engine: String) -> Self {
        DocumentsList { req, engine }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.req.timeout = Some(timeout);
        self
    }

    pub async fn send(self) -> Result<Response> {
        let path = format!("/api/as/v1/engines/{}/documents/list", self.engine);
        let prepared = PreparedRequest::new(Method::GET, path).timeout(self.req.timeout);
        self.req.transport.perform(prepared).await
    }
}

/// Indexes documents into an engine.
///
/// Repeated [`DocumentsCreate::documents`] calls append; with no documents
/// the request carries no body.
pub struct DocumentsCreate {
    req: ApiRequest,
    engine: String,
    documents: Vec<serde_json::Value>,
}

impl DocumentsCreate {
    pub(crate) fn new(req: ApiRequest, engine: String) -> Self {
        DocumentsCreate {
            req,
            engine,
            documents: Vec::new(),
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.req.timeout = Some(timeout);
        self
    }

    pub fn documents<I>(mut self, documents: I) -> Self
    where
        I: IntoIterator<Item = serde_json::Value>,
    {
        self.documents.extend(documents);
        self
    }

    pub async fn send(self) -> Result<Response> {
        let path = format!("/api/as/v1/engines/{}/documents", self.engine);
        let mut prepared = PreparedRequest::new(Method::POST, path);
        if !self.documents.is_empty() {
            prepared = prepared.json(serde_json::to_vec(&self.documents)?);
        }
        let prepared = prepared.timeout(self.req.timeout);
        self.req.transport.perform(prepared).await
    }
}

/// Deletes documents from an engine by id.
///
/// Repeated [`DocumentsDelete::ids`] calls append; with no ids the request
/// carries no body.
pub struct DocumentsDelete {
    req: ApiRequest,
    engine: String,
    ids: Vec<String>,
}

impl DocumentsDelete {
    pub(crate) fn new(req: ApiRequest, engine: String) -> Self {
        DocumentsDelete {
            req,
            engine,
            ids: Vec::new(),
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.req.timeout = Some(timeout);
        self
    }

    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids.extend(ids.into_iter().map(Into::into));
        self
    }

    pub async fn send(self) -> Result<Response> {
        let path = format!("/api/as/v1/engines/{}/documents", self.engine);
        let mut prepared = PreparedRequest::new(Method::DELETE, path);
        if !self.ids.is_empty() {
            prepared = prepared.json(serde_json::to_vec(&self.ids)?);
        }
        let prepared = prepared.timeout(self.req.timeout);
        self.req.transport.perform(prepared).await
    }
}
