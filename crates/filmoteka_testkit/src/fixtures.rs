//! Canonical wire fixtures.

use filmoteka_codec::{
    FilmId, RawComment, RawFilm, RawFilmInfo, RawRelease, RawUserDetails,
};
use serde_json::Value;

/// Builds a canonical raw film with the given numeric id.
pub fn sample_raw(id: u64) -> RawFilm {
    RawFilm {
        id: FilmId::from(id),
        film_info: RawFilmInfo {
            title: format!("Film {}", id),
            alternative_title: format!("Original Film {}", id),
            description: "A perfectly serviceable film.".into(),
            poster: format!("images/posters/film-{}.jpg", id),
            runtime: 94,
            actors: vec!["A. Actor".into(), "B. Actor".into()],
            genre: vec!["Comedy".into()],
            age_rating: 12,
            director: "D. Director".into(),
            writers: vec!["W. Writer".into()],
            release: RawRelease {
                date: 1_500_000_000_000,
                release_country: "USA".into(),
            },
            total_rating: 7.3,
        },
        user_details: RawUserDetails::default(),
        comments: vec![RawComment {
            comment: "seen better".into(),
            author: "viewer".into(),
            emotion: "neutral-face".into(),
            date: 1_600_000_000_000,
        }],
    }
}

/// Builds a canonical raw film as an untyped wire value.
pub fn sample_raw_json(id: u64) -> Value {
    serde_json::to_value(sample_raw(id)).expect("fixture serializes")
}
