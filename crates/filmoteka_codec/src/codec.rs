//! Decode and encode entry points for untyped wire values.

use crate::error::{CodecError, CodecResult};
use crate::film::Film;
use crate::raw::RawFilm;
use serde_json::Value;

/// Decodes one untyped wire object into a domain film.
///
/// # Errors
///
/// Returns [`CodecError::MalformedEntity`] when a required section
/// (`film_info`, `user_details`, `comments`) is absent or has an
/// incompatible shape.
pub fn decode(raw: Value) -> CodecResult<Film> {
    let raw: RawFilm = serde_json::from_value(raw)?;
    Ok(Film::from_raw(raw))
}

/// Decodes a batch of untyped wire objects.
///
/// Elements decode independently, but a single failure fails the whole
/// batch; there is no partial-success reporting.
pub fn decode_many(raws: Vec<Value>) -> CodecResult<Vec<Film>> {
    raws.into_iter().map(decode).collect()
}

/// Encodes a domain film into its wire form.
///
/// Total and side-effect-free; see [`Film::to_raw`].
pub fn encode(film: &Film) -> RawFilm {
    film.to_raw()
}
