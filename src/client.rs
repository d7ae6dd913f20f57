use std::sync::Arc;

use crate::api::documents::{DocumentsCreate, DocumentsDelete, DocumentsList};
use crate::api::engines::{EnginesCreate, EnginesDelete, EnginesGet, EnginesList};
use crate::api::health::Health;
use crate::api::search::Search;
use crate::api::synonyms::{
    SynonymsCreate, SynonymsDelete, SynonymsGet, SynonymsList, SynonymsUpdate,
};
use crate::api::ApiRequest;
use crate::config::Config;
use crate::error::Result;
use crate::transport::{HttpTransport, Transport};

/// Entry point to the API: a cheaply cloneable handle over the transport.
///
/// Every operation runs as a single exchange through the shared transport;
/// concurrent calls are safe whenever the transport is.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Connect to the service described by `config`.
    pub fn new(config: Config) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Client::with_transport(Arc::new(transport)))
    }

    /// Build a client over a custom transport, e.g. a mock or an
    /// instrumented wrapper around [`HttpTransport`].
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Client { transport }
    }

    /// App Search resource operations.
    pub fn app_search(&self) -> AppSearch {
        AppSearch {
            transport: self.transport.clone(),
        }
    }

    /// Service liveness and identity.
    pub fn health(&self) -> Health {
        Health::new(ApiRequest::new(self.transport.clone()))
    }
}

/// The App Search resource namespaces.
pub struct AppSearch {
    transport: Arc<dyn Transport>,
}

impl AppSearch {
    pub fn engines(&self) -> Engines {
        Engines {
            transport: self.transport.clone(),
        }
    }

    pub fn synonyms(&self) -> Synonyms {
        Synonyms {
            transport: self.transport.clone(),
        }
    }

    pub fn documents(&self) -> Documents {
        Documents {
            transport: self.transport.clone(),
        }
    }

    pub fn search(&self, engine: impl Into<String>, query: impl Into<String>) -> Search {
        Search::new(
            ApiRequest::new(self.transport.clone()),
            engine.into(),
            query.into(),
        )
    }
}

/// Engine operations.
pub struct Engines {
    transport: Arc<dyn Transport>,
}

impl Engines {
    fn req(&self) -> ApiRequest {
        ApiRequest::new(self.transport.clone())
    }

    pub fn list(&self) -> EnginesList {
        EnginesList::new(self.req())
    }

    pub fn get(&self, name: impl Into<String>) -> EnginesGet {
        EnginesGet::new(self.req(), name.into())
    }

    pub fn create(&self, name: impl Into<String>) -> EnginesCreate {
        EnginesCreate::new(self.req(), name.into())
    }

    pub fn delete(&self, name: impl Into<String>) -> EnginesDelete {
        EnginesDelete::new(self.req(), name.into())
    }
}

/// Synonym set operations.
pub struct Synonyms {
    transport: Arc<dyn Transport>,
}

impl Synonyms {
    fn req(&self) -> ApiRequest {
        ApiRequest::new(self.transport.clone())
    }

    pub fn list(&self, engine: impl Into<String>) -> SynonymsList {
        SynonymsList::new(self.req(), engine.into())
    }

    pub fn get(&self, engine: impl Into<String>, id: impl Into<String>) -> SynonymsGet {
        SynonymsGet::new(self.req(), engine.into(), id.into())
    }

    pub fn create<I, S>(&self, engine: impl Into<String>, synonyms: I) -> SynonymsCreate
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SynonymsCreate::new(
            self.req(),
            engine.into(),
            synonyms.into_iter().map(Into::into).collect(),
        )
    }

    pub fn update<I, S>(
        &self,
        engine: impl Into<String>,
        id: impl Into<String>,
        synonyms: I,
    ) -> SynonymsUpdate
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SynonymsUpdate::new(
            self.req(),
            engine.into(),
            id.into(),
            synonyms.into_iter().map(Into::into).collect(),
        )
    }

    pub fn delete(&self, engine: impl Into<String>, id: impl Into<String>) -> SynonymsDelete {
        SynonymsDelete::new(self.req(), engine.into(), id.into())
    }
}

/// Document operations.
pub struct Documents {
    transport: Arc<dyn Transport>,
}

impl Documents {
    fn req(&self) -> ApiRequest {
        ApiRequest::new(self.transport.clone())
    }

    pub fn list(&self, engine: impl Into<String>) -> DocumentsList {
        DocumentsList::new(self.req(), engine.into())
    }

    pub fn create(&self, engine: impl Into<String>) -> DocumentsCreate {
        DocumentsCreate::new(self.req(), engine.into())
    }

    pub fn delete(&self, engine: impl Into<String>) -> DocumentsDelete {
        DocumentsDelete::new(self.req(), engine.into())
    }
}
