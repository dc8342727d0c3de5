//! Normalized in-memory form of catalog entities.

use crate::emotion::Emotion;
use crate::raw::{RawComment, RawFilm, RawFilmInfo, RawRelease, RawUserDetails};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Milliseconds per minute of runtime.
const MINUTE_MS: u64 = 60_000;

/// Highest personal rating a user can give.
pub const MAX_PERSONAL_RATING: u8 = 9;

/// Opaque stable entity identity.
///
/// The remote service assigns ids and may use either integers or strings;
/// both shapes round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilmId {
    /// Numeric id.
    Int(u64),
    /// String id.
    Text(String),
}

impl FilmId {
    /// Returns the id rendered as a cache key.
    pub fn cache_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FilmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilmId::Int(id) => write!(f, "{}", id),
            FilmId::Text(id) => f.write_str(id),
        }
    }
}

impl From<u64> for FilmId {
    fn from(id: u64) -> Self {
        FilmId::Int(id)
    }
}

impl From<&str> for FilmId {
    fn from(id: &str) -> Self {
        FilmId::Text(id.to_string())
    }
}

/// One catalog entity in domain form.
#[derive(Debug, Clone, PartialEq)]
pub struct Film {
    /// Stable identity, immutable for the lifetime of the entity.
    pub id: FilmId,
    /// Descriptive information.
    pub info: FilmInfo,
    /// Per-user state.
    pub user: UserState,
    /// Ordered comment sequence.
    pub comments: Vec<Comment>,
}

/// Descriptive fields of a film.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmInfo {
    /// Display title.
    pub title: String,
    /// Original-language title.
    pub original_title: String,
    /// Synopsis.
    pub description: String,
    /// Poster asset reference.
    pub poster: String,
    /// Duration in milliseconds.
    pub duration_ms: u64,
    /// Cast list.
    pub actors: Vec<String>,
    /// Genres, unique, in first-seen order.
    pub genres: Vec<String>,
    /// Age restriction code.
    pub age_rating: u8,
    /// Director name.
    pub director: String,
    /// Writer list.
    pub writers: Vec<String>,
    /// Release date, milliseconds since the epoch.
    pub release_date: i64,
    /// Release country.
    pub release_country: String,
    /// Public rating.
    pub total_rating: f64,
}

/// User-mutable state of a film.
///
/// These fields are the only ones pushed back to the remote service.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserState {
    /// Favorite flag.
    pub favorite: bool,
    /// Viewed flag.
    pub already_watched: bool,
    /// Want-to-watch flag.
    pub watchlist: bool,
    /// Personal rating, 0-9 inclusive; 0 means unrated.
    pub personal_rating: u8,
    /// Date of the last watched-state change.
    pub watching_date: Option<i64>,
}

/// One user comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    /// Comment text.
    pub text: String,
    /// Comment author.
    pub author: String,
    /// Emoji category.
    pub emotion: Emotion,
    /// Timestamp, milliseconds since the epoch.
    pub date: i64,
}

impl Film {
    /// Builds a film from its wire form.
    ///
    /// Total: every well-typed raw record decodes. Genres are deduplicated
    /// into first-seen order and runtime minutes become milliseconds.
    pub fn from_raw(raw: RawFilm) -> Self {
        let info = raw.film_info;
        let user = raw.user_details;

        Film {
            id: raw.id,
            info: FilmInfo {
                title: info.title,
                original_title: info.alternative_title,
                description: info.description,
                poster: info.poster,
                duration_ms: info.runtime * MINUTE_MS,
                actors: info.actors,
                genres: dedup_first_seen(info.genre),
                age_rating: info.age_rating,
                director: info.director,
                writers: info.writers,
                release_date: info.release.date,
                release_country: info.release.release_country,
                total_rating: info.total_rating,
            },
            user: UserState {
                favorite: user.favorite,
                already_watched: user.already_watched,
                watchlist: user.watchlist,
                personal_rating: round_rating(user.personal_rating),
                watching_date: user.watching_date,
            },
            comments: raw
                .comments
                .into_iter()
                .map(|c| Comment {
                    text: c.comment,
                    author: c.author,
                    emotion: Emotion::from_wire(&c.emotion),
                    date: c.date,
                })
                .collect(),
        }
    }

    /// Renders the film back into its wire form.
    ///
    /// Total and side-effect-free. `from_raw(to_raw(f))` reproduces `f`
    /// exactly; `to_raw(from_raw(r))` reproduces `r` up to genre-order
    /// normalization.
    pub fn to_raw(&self) -> RawFilm {
        RawFilm {
            id: self.id.clone(),
            film_info: RawFilmInfo {
                title: self.info.title.clone(),
                alternative_title: self.info.original_title.clone(),
                description: self.info.description.clone(),
                poster: self.info.poster.clone(),
                runtime: self.info.duration_ms / MINUTE_MS,
                actors: self.info.actors.clone(),
                genre: self.info.genres.clone(),
                age_rating: self.info.age_rating,
                director: self.info.director.clone(),
                writers: self.info.writers.clone(),
                release: RawRelease {
                    date: self.info.release_date,
                    release_country: self.info.release_country.clone(),
                },
                total_rating: self.info.total_rating,
            },
            user_details: RawUserDetails {
                favorite: self.user.favorite,
                already_watched: self.user.already_watched,
                watchlist: self.user.watchlist,
                personal_rating: f64::from(self.user.personal_rating),
                watching_date: self.user.watching_date,
            },
            comments: self
                .comments
                .iter()
                .map(|c| RawComment {
                    comment: c.text.clone(),
                    author: c.author.clone(),
                    emotion: c.emotion.wire_name().to_string(),
                    date: c.date,
                })
                .collect(),
        }
    }

    /// Sets the favorite flag.
    pub fn set_favorite(&mut self, favorite: bool) {
        self.user.favorite = favorite;
    }

    /// Sets the want-to-watch flag.
    pub fn set_watchlist(&mut self, watchlist: bool) {
        self.user.watchlist = watchlist;
    }

    /// Sets the viewed flag, recording when the state changed.
    pub fn set_watched(&mut self, watched: bool, date: i64) {
        self.user.already_watched = watched;
        self.user.watching_date = Some(date);
    }

    /// Sets the personal rating, clamped to the valid range.
    pub fn set_personal_rating(&mut self, rating: u8) {
        self.user.personal_rating = rating.min(MAX_PERSONAL_RATING);
    }

    /// Appends a comment.
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Removes the most recent comment, if any.
    pub fn remove_last_comment(&mut self) -> Option<Comment> {
        self.comments.pop()
    }
}

/// Rounds a wire rating to the integer domain range.
fn round_rating(rating: f64) -> u8 {
    rating.round().clamp(0.0, f64::from(MAX_PERSONAL_RATING)) as u8
}

/// Deduplicates a genre list, keeping the first occurrence of each entry.
fn dedup_first_seen(genres: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(genres.len());
    for genre in genres {
        if !seen.contains(&genre) {
            seen.push(genre);
        }
    }
    seen
}
