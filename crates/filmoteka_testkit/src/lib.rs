//! # Filmoteka Testkit
//!
//! Test utilities for the Filmoteka catalog.
//!
//! Provides an in-process stand-in for the remote service so tests can
//! drive the production client and coordinator code paths without sockets:
//!
//! - [`CatalogServer`] - the film table behind the three wire routes
//! - [`LoopbackClient`] - an `HttpClient` routing requests into the server,
//!   with per-call failure injection
//! - [`sample_raw`] / [`sample_raw_json`] - canonical wire fixtures

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod fixtures;
mod loopback;
mod server;

pub use fixtures::{sample_raw, sample_raw_json};
pub use loopback::LoopbackClient;
pub use server::CatalogServer;
