//! Wire representation of catalog entities.
//!
//! Field names in this module are part of the remote service contract and
//! must be preserved exactly. The local cache persists this same shape, so
//! cached records can be replayed to the service without re-encoding.

use crate::film::FilmId;
use serde::{Deserialize, Serialize};

/// One catalog entity as the remote service represents it.
///
/// The three nested sections (`film_info`, `user_details`, `comments`) are
/// required; decoding fails without them. All leaf fields are optional on
/// the wire and default to empty string, empty list, or zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFilm {
    /// Stable entity identity, assigned by the remote service.
    pub id: FilmId,
    /// Descriptive information.
    pub film_info: RawFilmInfo,
    /// Per-user state.
    pub user_details: RawUserDetails,
    /// Comment list.
    pub comments: Vec<RawComment>,
}

/// The `film_info` section of the wire schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFilmInfo {
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Original-language title.
    #[serde(default)]
    pub alternative_title: String,
    /// Synopsis.
    #[serde(default)]
    pub description: String,
    /// Poster asset reference, stored verbatim.
    #[serde(default)]
    pub poster: String,
    /// Running time in minutes.
    #[serde(default)]
    pub runtime: u64,
    /// Cast list.
    #[serde(default)]
    pub actors: Vec<String>,
    /// Genre list. Set semantics; order is normalized on decode.
    #[serde(default)]
    pub genre: Vec<String>,
    /// Age restriction code.
    #[serde(default)]
    pub age_rating: u8,
    /// Director name.
    #[serde(default)]
    pub director: String,
    /// Writer list.
    #[serde(default)]
    pub writers: Vec<String>,
    /// Release information.
    #[serde(default)]
    pub release: RawRelease,
    /// Public rating.
    #[serde(default)]
    pub total_rating: f64,
}

/// The `release` subsection of `film_info`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawRelease {
    /// Release date, milliseconds since the Unix epoch.
    #[serde(default)]
    pub date: i64,
    /// Release country.
    #[serde(default)]
    pub release_country: String,
}

/// The `user_details` section of the wire schema.
///
/// These are the only fields the client mutates and pushes back through
/// `update`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawUserDetails {
    /// Favorite flag.
    #[serde(default)]
    pub favorite: bool,
    /// Viewed flag.
    #[serde(default)]
    pub already_watched: bool,
    /// Want-to-watch flag.
    #[serde(default)]
    pub watchlist: bool,
    /// Personal rating; the service may carry fractional values.
    #[serde(default)]
    pub personal_rating: f64,
    /// Date of the last watched-state change, milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watching_date: Option<i64>,
}

/// One entry of the `comments` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawComment {
    /// Comment text.
    #[serde(default)]
    pub comment: String,
    /// Comment author.
    #[serde(default)]
    pub author: String,
    /// Emoji category name, e.g. `"sleeping"` or `"neutral-face"`.
    #[serde(default)]
    pub emotion: String,
    /// Comment timestamp, milliseconds since the epoch.
    #[serde(default)]
    pub date: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_names_match_wire_contract() {
        let raw = RawFilm {
            id: FilmId::from(7u64),
            film_info: RawFilmInfo {
                title: "t".into(),
                alternative_title: "at".into(),
                description: String::new(),
                poster: "images/posters/t.jpg".into(),
                runtime: 90,
                actors: vec![],
                genre: vec!["Drama".into()],
                age_rating: 16,
                director: String::new(),
                writers: vec![],
                release: RawRelease {
                    date: 0,
                    release_country: "Norway".into(),
                },
                total_rating: 7.5,
            },
            user_details: RawUserDetails::default(),
            comments: vec![],
        };

        let value = serde_json::to_value(&raw).unwrap();
        assert!(value.get("film_info").is_some());
        assert_eq!(value["film_info"]["alternative_title"], "at");
        assert_eq!(value["film_info"]["age_rating"], 16);
        assert_eq!(value["film_info"]["release"]["release_country"], "Norway");
        assert!(value.get("user_details").is_some());
        assert_eq!(value["user_details"]["already_watched"], false);
    }

    #[test]
    fn leaf_fields_take_defaults() {
        let value = json!({
            "id": 1,
            "film_info": { "release": {} },
            "user_details": {},
            "comments": []
        });

        let raw: RawFilm = serde_json::from_value(value).unwrap();
        assert_eq!(raw.film_info.title, "");
        assert_eq!(raw.film_info.runtime, 0);
        assert!(raw.film_info.writers.is_empty());
        assert_eq!(raw.user_details.personal_rating, 0.0);
        assert!(raw.user_details.watching_date.is_none());
    }

    #[test]
    fn missing_section_is_rejected() {
        let value = json!({
            "id": 1,
            "film_info": {},
            "comments": []
        });

        assert!(serde_json::from_value::<RawFilm>(value).is_err());
    }

    #[test]
    fn absent_watching_date_is_not_serialized() {
        let details = RawUserDetails::default();
        let value = serde_json::to_value(&details).unwrap();
        assert!(value.get("watching_date").is_none());

        let details = RawUserDetails {
            watching_date: Some(1_700_000_000_000),
            ..RawUserDetails::default()
        };
        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["watching_date"], 1_700_000_000_000i64);
    }
}
