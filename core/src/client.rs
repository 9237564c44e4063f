//! `Webservice`: executes a `Resource` against a transport.
//!
//! # Design
//! The client holds nothing but a shared handle to its transport, so it is
//! cheap to clone and carries no per-request state. Each load is one
//! transport call followed by one parse:
//!
//! ```text
//! Resource -> HttpRequest -> Transport::send -> Resource::parse -> completion
//! ```
//!
//! Two result shapes are offered. `load` / `fetch` collapse every failure to
//! `None`. `load_result` / `try_fetch` keep transport failures apart from
//! parse failures. Non-2xx statuses are not failures here: the body is parsed
//! whatever the status.

use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::error::LoadError;
use crate::http::HttpRequest;
use crate::resource::Resource;
use crate::transport::{Transport, UreqTransport};

/// Asynchronous client for `Resource` values.
#[derive(Clone)]
pub struct Webservice {
    transport: Arc<dyn Transport>,
}

impl Webservice {
    pub fn new<T>(transport: T) -> Self
    where
        T: Transport + 'static,
    {
        Self {
            transport: Arc::new(transport),
        }
    }

    pub fn with_shared(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Load `resource` in the background and call `completion` once with the
    /// parsed value, or `None` if the transport failed or parsing rejected the
    /// response.
    ///
    /// The work is spawned on the current Tokio runtime. Outside a runtime the
    /// completion runs immediately with `None`.
    pub fn load<A, F>(&self, resource: &Resource<A>, completion: F)
    where
        A: Send + 'static,
        F: FnOnce(Option<A>) + Send + 'static,
    {
        let Ok(handle) = Handle::try_current() else {
            warn!(url = %resource.url(), "no Tokio runtime, delivering no result");
            return completion(None);
        };
        let this = self.clone();
        let resource = resource.clone();
        handle.spawn(async move {
            completion(this.fetch(&resource).await);
        });
    }

    /// Like [`Webservice::load`], but the completion learns why no value was
    /// produced.
    pub fn load_result<A, F>(&self, resource: &Resource<A>, completion: F)
    where
        A: Send + 'static,
        F: FnOnce(Result<A, LoadError>) + Send + 'static,
    {
        let Ok(handle) = Handle::try_current() else {
            return completion(Err(LoadError::NoRuntime));
        };
        let this = self.clone();
        let resource = resource.clone();
        handle.spawn(async move {
            completion(this.try_fetch(&resource).await);
        });
    }

    pub async fn fetch<A>(&self, resource: &Resource<A>) -> Option<A> {
        match self.try_fetch(resource).await {
            Ok(value) => Some(value),
            Err(LoadError::Transport(e)) => {
                warn!(url = %resource.url(), error = %e, "transport failed, delivering no result");
                None
            }
            Err(LoadError::Parse | LoadError::NoRuntime) => None,
        }
    }

    pub async fn try_fetch<A>(&self, resource: &Resource<A>) -> Result<A, LoadError> {
        let request = HttpRequest::from(resource);
        debug!(method = request.method.as_str(), url = %request.url, "dispatching request");

        let response = self.transport.send(request).await?;

        resource.parse(&response.body).ok_or_else(|| {
            debug!(url = %resource.url(), status = response.status, "response rejected by parser");
            LoadError::Parse
        })
    }
}

impl Default for Webservice {
    fn default() -> Self {
        Self::new(UreqTransport::new())
    }
}

impl std::fmt::Debug for Webservice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Webservice").finish_non_exhaustive()
    }
}
