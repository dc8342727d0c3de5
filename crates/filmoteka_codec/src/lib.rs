//! # Filmoteka Codec
//!
//! Wire schema and domain model for the Filmoteka catalog.
//!
//! This crate converts between the remote service's JSON representation
//! ([`RawFilm`]) and the normalized in-memory form ([`Film`]). The raw form
//! is also what the local cache persists, so cached records are
//! schema-compatible with the service and can be replayed to it without
//! re-encoding.
//!
//! ## Conversion rules
//!
//! - Runtime minutes become milliseconds on decode, and back on encode
//! - Genres keep set semantics; re-serialization imposes first-seen order
//! - The three nested wire sections are required; missing leaf fields take
//!   defaults (empty string, empty list, zero)
//! - Unrecognized emoji categories are preserved verbatim
//!
//! `encode(decode(r))` reproduces `r` for every field except genre order.
//!
//! ## Usage
//!
//! ```
//! use filmoteka_codec::{decode, encode};
//! use serde_json::json;
//!
//! let film = decode(json!({
//!     "id": 1,
//!     "film_info": { "title": "Blue Blazes", "runtime": 94 },
//!     "user_details": {},
//!     "comments": []
//! }))
//! .unwrap();
//!
//! assert_eq!(film.info.duration_ms, 94 * 60_000);
//! assert_eq!(encode(&film).film_info.runtime, 94);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod codec;
mod emotion;
mod error;
mod film;
mod raw;

pub use codec::{decode, decode_many, encode};
pub use emotion::Emotion;
pub use error::{CodecError, CodecResult};
pub use film::{Comment, Film, FilmId, FilmInfo, UserState, MAX_PERSONAL_RATING};
pub use raw::{RawComment, RawFilm, RawFilmInfo, RawRelease, RawUserDetails};
