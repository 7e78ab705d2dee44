//! Forward iteration across server-side pages.

use crate::options::Resource;
use crate::page::{Page, PageMeta};
use crate::transport::Transport;
use crate::{Client, HttpTransport, Result};
use std::collections::VecDeque;

/// The records of a read, fetched a page at a time.
///
/// Created by [`Client::read`] after the first page has arrived. Later pages
/// are requested only when the records already held run out, and never once
/// the optional `limit` has been reached. Once the server stops linking a
/// next page the set is exhausted for good; start a new read to go again.
///
/// A set has a single consumer: every method takes `&mut self`.
///
/// # Examples
///
/// ```no_run
/// use callwire::Client;
/// use callwire::rest::taskrouter::workspace::ReadWorkspaceOptions;
///
/// # async fn example() -> Result<(), callwire::Error> {
/// let client = Client::builder()
///     .account_sid("ACXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX")
///     .auth_token("your_auth_token")
///     .build()?;
///
/// let mut workspaces = client
///     .read(&ReadWorkspaceOptions::new().friendly_name("Support").limit(100))
///     .await?;
///
/// while let Some(workspace) = workspaces.next().await? {
///     println!("{:?}", workspace.sid);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ResourceSet<R: Resource, T: Transport = HttpTransport> {
    client: Client<T>,
    meta: PageMeta,
    pending: VecDeque<R>,
    page_size: u32,
    limit: Option<u64>,
    yielded: u64,
    pages_fetched: usize,
}

impl<R: Resource, T: Transport> ResourceSet<R, T> {
    pub(crate) fn new(client: Client<T>, first: Page<R>, page_size: u32, limit: Option<u64>) -> Self {
        Self {
            client,
            meta: first.meta,
            pending: first.records.into(),
            page_size,
            limit,
            yielded: 0,
            pages_fetched: 1,
        }
    }

    /// Yields the next record, fetching the next page when needed.
    ///
    /// Returns `Ok(None)` once the pages or the limit run out, and keeps
    /// returning it on every later call.
    pub async fn next(&mut self) -> Result<Option<R>> {
        loop {
            if self.limit_reached() {
                return Ok(None);
            }

            if let Some(record) = self.pending.pop_front() {
                self.yielded += 1;
                return Ok(Some(record));
            }

            if !self.advance().await? {
                return Ok(None);
            }
        }
    }

    /// Loads the next page if the current one is used up.
    ///
    /// Issues a `GET` of the next page link, with no added parameters, only
    /// when the current page is exhausted, a next page is linked and the
    /// limit has not been reached. Returns whether a page was loaded; after
    /// exhaustion this is a no-op returning `false`.
    pub async fn advance(&mut self) -> Result<bool> {
        if !self.pending.is_empty() || self.limit_reached() {
            return Ok(false);
        }

        let Some(url) = self.next_page_url() else {
            return Ok(false);
        };

        tracing::debug!(
            resource = R::ROUTE.name,
            page = self.pages_fetched,
            url = %url,
            "Fetching next page"
        );

        let page = self.client.page::<R>(&url).await?;
        self.meta = page.meta;
        self.pending = page.records.into();
        self.pages_fetched += 1;
        Ok(true)
    }

    /// Drains the remaining records into a vector.
    pub async fn collect_all(mut self) -> Result<Vec<R>> {
        let mut records = Vec::new();
        while let Some(record) = self.next().await? {
            records.push(record);
        }
        Ok(records)
    }

    /// Absolute URL of the page after the current one.
    pub fn next_page_url(&self) -> Option<String> {
        self.meta
            .next_page_url(R::ROUTE.domain, self.client.transport().region())
    }

    /// Metadata of the page currently being consumed.
    pub fn current_page(&self) -> &PageMeta {
        &self.meta
    }

    /// Records already held but not yet yielded.
    pub fn buffered(&self) -> usize {
        self.pending.len()
    }

    /// Number of records yielded so far.
    pub fn yielded(&self) -> u64 {
        self.yielded
    }

    /// Number of pages fetched so far, including the first.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Page size requested from the server.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Client-side cap on the records yielded.
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    fn limit_reached(&self) -> bool {
        self.limit.is_some_and(|limit| self.yielded >= limit)
    }
}
