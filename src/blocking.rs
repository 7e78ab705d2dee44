//! A synchronous facade over [`crate::Client`].
//!
//! The blocking client owns a private current-thread runtime and drives
//! every call to completion on it. Do not use it from inside an async
//! context; call the async [`crate::Client`] there instead.

use crate::options::{CreateOptions, DeleteOptions, FetchOptions, ReadOptions, Resource, UpdateOptions};
use crate::page::Page;
use crate::transport::{HttpTransport, Transport};
use crate::{Error, Result};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// A blocking client.
///
/// # Examples
///
/// ```no_run
/// use callwire::ClientBuilder;
/// use callwire::rest::notify::binding::ReadBindingOptions;
///
/// # fn example() -> Result<(), callwire::Error> {
/// let client = ClientBuilder::from_env().build_blocking()?;
///
/// for binding in client.read(&ReadBindingOptions::new("ISXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX").tag("vip"))? {
///     println!("{:?}", binding?.identity);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Client<T: Transport = HttpTransport> {
    inner: crate::Client<T>,
    runtime: Arc<Runtime>,
}

impl<T: Transport> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            runtime: Arc::clone(&self.runtime),
        }
    }
}

impl<T: Transport> Client<T> {
    /// Wraps an async client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationError`] if the runtime cannot be started.
    pub fn new(inner: crate::Client<T>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::ConfigurationError(format!("Failed to start runtime: {}", e)))?;

        Ok(Self {
            inner,
            runtime: Arc::new(runtime),
        })
    }

    /// The async client being driven.
    pub fn inner(&self) -> &crate::Client<T> {
        &self.inner
    }

    /// Fetches a single instance.
    pub fn fetch<O: FetchOptions>(&self, options: &O) -> Result<O::Resource> {
        self.runtime.block_on(self.inner.fetch(options))
    }

    /// Creates an instance.
    pub fn create<O: CreateOptions>(&self, options: &O) -> Result<O::Resource> {
        self.runtime.block_on(self.inner.create(options))
    }

    /// Updates an instance.
    pub fn update<O: UpdateOptions>(&self, options: &O) -> Result<O::Resource> {
        self.runtime.block_on(self.inner.update(options))
    }

    /// Deletes an instance; `true` means the server answered `204 No Content`.
    pub fn delete<O: DeleteOptions>(&self, options: &O) -> Result<bool> {
        self.runtime.block_on(self.inner.delete(options))
    }

    /// Lists a collection as an iterator that fetches pages on demand.
    pub fn read<O: ReadOptions>(&self, options: &O) -> Result<ResourceSet<O::Resource, T>> {
        let inner = self.runtime.block_on(self.inner.read(options))?;
        Ok(ResourceSet {
            inner,
            runtime: Arc::clone(&self.runtime),
            failed: false,
        })
    }

    /// Fetches one page of `R` from an absolute URL.
    pub fn page<R: Resource>(&self, url: &str) -> Result<Page<R>> {
        self.runtime.block_on(self.inner.page(url))
    }
}

/// Blocking counterpart of [`crate::ResourceSet`].
///
/// Yields `Err` at most once: after a failed page fetch the iterator ends.
pub struct ResourceSet<R: Resource, T: Transport = HttpTransport> {
    inner: crate::ResourceSet<R, T>,
    runtime: Arc<Runtime>,
    failed: bool,
}

impl<R: Resource, T: Transport> ResourceSet<R, T> {
    /// The async set being driven.
    pub fn inner(&self) -> &crate::ResourceSet<R, T> {
        &self.inner
    }

    /// Number of pages fetched so far, including the first.
    pub fn pages_fetched(&self) -> usize {
        self.inner.pages_fetched()
    }
}

impl<R: Resource, T: Transport> Iterator for ResourceSet<R, T> {
    type Item = Result<R>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.runtime.block_on(self.inner.next()) {
            Ok(record) => record.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
