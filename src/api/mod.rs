//! Request builders for the search-service REST surface.
//!
//! Each operation is a small builder: required identifiers are constructor
//! arguments, optional parameters are chained setters, and `send()` performs
//! exactly one exchange through the configured [`Transport`]. Builders own
//! their fields exclusively and are consumed by `send()`, so the path and
//! body of a call depend only on the builder's state at that moment.

pub mod documents;
pub mod engines;
pub mod health;
pub mod search;
pub mod synonyms;

use std::sync::Arc;
use std::time::Duration;

use crate::transport::Transport;

/// Per-call state shared by every operation: the transport that will carry
/// the exchange and an optional deadline, enforced by the transport.
#[derive(Clone)]
pub(crate) struct ApiRequest {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) timeout: Option<Duration>,
}

impl ApiRequest {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        ApiRequest {
            transport,
            timeout: None,
        }
    }
}
