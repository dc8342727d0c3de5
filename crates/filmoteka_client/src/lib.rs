//! # Filmoteka Client
//!
//! Remote service client for the Filmoteka catalog.
//!
//! This crate provides:
//! - An [`HttpClient`] capability trait the hosting environment implements
//! - [`RemoteClient`] issuing the three catalog operations: fetch-all,
//!   update-one, bulk-sync
//! - Status validation and the typed failure taxonomy: transport failure,
//!   remote (non-2xx) failure, malformed body
//!
//! ## Contract
//!
//! - Every request carries the static `Authorization` credential
//! - Status 200-299 is success; anything else is [`ClientError::Remote`]
//! - No retries, no timeouts: callers wanting bounded latency wrap calls
//! - Operations resolve asynchronously; ordering between concurrent calls
//!   is whatever the underlying transport serializes

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod error;
mod http;

pub use client::RemoteClient;
pub use config::RemoteConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, HttpRequest, HttpResponse, Method};
