//! # Callwire - a typed REST call protocol
//!
//! Callwire is a client for a multi-product telephony REST API built on top
//! of `reqwest`. Every endpoint is described declaratively, as a [`Route`]
//! plus an options struct, and every call runs through the same small
//! protocol: build the request, send it through a [`Transport`], interpret
//! the status, and deserialize the body into a typed resource.
//!
//! ## Quick Start
//!
//! ```no_run
//! use callwire::Client;
//! use callwire::rest::api::conference::{ConferenceStatus, ReadConferenceOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), callwire::Error> {
//!     let client = Client::builder()
//!         .account_sid("ACXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX")
//!         .auth_token("your_auth_token")
//!         .build()?;
//!
//!     let mut conferences = client
//!         .read(&ReadConferenceOptions::new().status(ConferenceStatus::InProgress).limit(20))
//!         .await?;
//!
//!     while let Some(conference) = conferences.next().await? {
//!         println!("{:?} {:?}", conference.sid, conference.friendly_name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Declarative endpoints** - one [`Route`] per resource, one options struct per operation
//! - **Precise parameters** - absent fields are never sent, `false` is, list fields repeat their key
//! - **Lazy paging** - [`ResourceSet`] fetches further pages only when the current one runs out
//! - **Structured errors** - connection, API and deserialization failures stay distinct
//! - **Transport-owned retries** - backoff strategies, retry predicates and `Retry-After`
//! - **Pluggable transport** - swap in any [`Transport`], such as an in-memory fake
//! - **Blocking facade** - [`blocking::Client`] for synchronous callers
//!
//! ## Error Handling
//!
//! ```no_run
//! use callwire::{Client, Error};
//! use callwire::rest::trunking::ip_access_control_list::DeleteIpAccessControlListOptions;
//!
//! # async fn example() -> Result<(), Error> {
//! # let client = Client::builder().account_sid("AC1").auth_token("token").build()?;
//! let options = DeleteIpAccessControlListOptions::new("TKXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX", "ALXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX");
//! match client.delete(&options).await {
//!     Ok(deleted) => println!("Deleted: {}", deleted),
//!     Err(Error::Api { status, message, .. }) => eprintln!("{}: {}", status, message),
//!     Err(e) if e.is_connection() => eprintln!("Network trouble: {}", e),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Retry Strategies
//!
//! Retrying is configured on the transport; the protocol itself never retries.
//!
//! ```no_run
//! use callwire::{Client, RetryStrategy, retry::{OrPredicate, RetryOnConnectionFailure, RetryOnTooManyRequests}};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), callwire::Error> {
//! let client = Client::builder()
//!     .account_sid("ACXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX")
//!     .auth_token("your_auth_token")
//!     .retry_strategy(RetryStrategy::ExponentialBackoff {
//!         initial_delay: Duration::from_millis(100),
//!         max_delay: Duration::from_secs(30),
//!         max_retries: 5,
//!         jitter: true,
//!     })
//!     .retry_predicate(Box::new(OrPredicate::new(vec![
//!         Box::new(RetryOnConnectionFailure),
//!         Box::new(RetryOnTooManyRequests),
//!     ])))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod blocking;
mod client;
pub mod converters;
mod domain;
mod error;
pub mod options;
mod page;
mod request;
mod resource_set;
mod response;
pub mod rest;
pub mod retry;
mod transport;

pub use client::{Client, ClientBuilder, ENV_ACCOUNT_SID, ENV_AUTH_TOKEN, ENV_REGION};
pub use domain::{Domain, BASE_HOST};
pub use error::{Error, Result, NO_CONTENT_MESSAGE};
pub use options::{
    Action, CreateOptions, DeleteOptions, FetchOptions, Operation, ReadOptions, Resource, Route,
    UpdateOptions,
};
pub use page::{Page, PageMeta};
pub use request::{ParamValue, Params, Request, RequestBuilder, Target};
pub use resource_set::ResourceSet;
pub use response::{interpret, materialize, ApiErrorBody, RawResponse};
pub use retry::{RetryPredicate, RetryStrategy};
pub use transport::{HttpTransport, Transport, TransportError};
