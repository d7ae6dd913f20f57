//! # Griddle
//!
//! Typed async client for App Search-compatible search services: engines,
//! documents, synonyms, search, and health, each as a single stateless HTTP
//! round trip.
//!
//! Every operation is a small builder: required identifiers are positional,
//! optional parameters chain, and `send()` performs exactly one exchange
//! through a pluggable [`Transport`]. Responses come back unfiltered: a 404
//! is a normal [`Response`] with [`Response::is_error`] left to the caller,
//! not a client error.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use griddle::{Client, Config};
//! use serde_json::json;
//!
//! # async fn run() -> griddle::Result<()> {
//! let client = Client::new(
//!     Config::new("http://localhost:3002").with_basic_auth("elastic", "changeme"),
//! )?;
//!
//! client.app_search().engines().create("video-games").send().await?;
//!
//! client
//!     .app_search()
//!     .documents()
//!     .create("video-games")
//!     .documents([json!({"name": "Pack-Man", "year": "1980"})])
//!     .send()
//!     .await?;
//!
//! let mut resp = client.app_search().search("video-games", "pack").send().await?;
//! let hits: serde_json::Value = resp.json().await?;
//! println!("Found {} results", hits["results"].as_array().map_or(0, Vec::len));
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom transports
//!
//! [`Client::with_transport`] accepts any [`Transport`] implementation, which
//! is the one seam to the network. Tests substitute a recording mock, and
//! instrumented deployments can wrap [`HttpTransport`] without touching the
//! request builders.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod response;
pub mod transport;

pub use client::{AppSearch, Client, Documents, Engines, Synonyms};
pub use config::Config;
pub use error::{GriddleError, Result};
pub use response::Response;
pub use transport::{HttpTransport, PreparedRequest, Transport, CONTENT_TYPE_JSON};
