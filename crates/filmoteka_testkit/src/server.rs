//! In-process catalog service.

use filmoteka_client::{HttpRequest, HttpResponse, Method};
use filmoteka_codec::RawFilm;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// An in-process stand-in for the remote catalog service.
///
/// Holds the film table and handles the three wire routes. For bulk sync it
/// is the merge authority: the pushed snapshot is upserted into the table
/// and the full merged table comes back as the new source of truth.
#[derive(Default)]
pub struct CatalogServer {
    films: RwLock<BTreeMap<String, RawFilm>>,
    authorization: Option<String>,
}

impl CatalogServer {
    /// Creates an empty server that accepts any credential.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a server that rejects requests without this credential.
    pub fn with_authorization(authorization: impl Into<String>) -> Self {
        Self {
            films: RwLock::new(BTreeMap::new()),
            authorization: Some(authorization.into()),
        }
    }

    /// Seeds one film into the table.
    pub fn insert(&self, raw: RawFilm) {
        self.films.write().insert(raw.id.cache_key(), raw);
    }

    /// Returns a copy of the film table.
    pub fn films(&self) -> BTreeMap<String, RawFilm> {
        self.films.read().clone()
    }

    /// Returns the number of films on the server.
    pub fn len(&self) -> usize {
        self.films.read().len()
    }

    /// Returns true if the server holds no films.
    pub fn is_empty(&self) -> bool {
        self.films.read().is_empty()
    }

    /// Handles one request. The path must start at the resource, e.g.
    /// `/movies` or `/movies/7`.
    pub fn handle(&self, request: &HttpRequest) -> HttpResponse {
        if let Some(expected) = &self.authorization {
            if request.header("Authorization") != Some(expected.as_str()) {
                return HttpResponse::new(401, "Unauthorized", Vec::new());
            }
        }

        let path = match resource_path(&request.url) {
            Some(path) => path,
            None => return HttpResponse::new(404, "Not Found", Vec::new()),
        };

        match (request.method, path) {
            (Method::Get, "/movies") => self.handle_fetch_all(),
            (Method::Post, "/movies/sync") => self.handle_bulk_sync(request.body.as_deref()),
            (Method::Put, _) => match path.strip_prefix("/movies/") {
                Some(id) if !id.is_empty() => self.handle_update(id, request.body.as_deref()),
                _ => HttpResponse::new(404, "Not Found", Vec::new()),
            },
            _ => HttpResponse::new(404, "Not Found", Vec::new()),
        }
    }

    fn handle_fetch_all(&self) -> HttpResponse {
        let films: Vec<RawFilm> = self.films.read().values().cloned().collect();
        json_response(&films)
    }

    fn handle_bulk_sync(&self, body: Option<&[u8]>) -> HttpResponse {
        let Some(body) = body else {
            return HttpResponse::new(400, "Bad Request", Vec::new());
        };
        let pushed: Vec<RawFilm> = match serde_json::from_slice(body) {
            Ok(pushed) => pushed,
            Err(_) => return HttpResponse::new(400, "Bad Request", Vec::new()),
        };

        let mut films = self.films.write();
        for raw in pushed {
            films.insert(raw.id.cache_key(), raw);
        }
        let merged: Vec<RawFilm> = films.values().cloned().collect();
        drop(films);

        json_response(&merged)
    }

    fn handle_update(&self, id: &str, body: Option<&[u8]>) -> HttpResponse {
        let Some(body) = body else {
            return HttpResponse::new(400, "Bad Request", Vec::new());
        };
        let raw: RawFilm = match serde_json::from_slice(body) {
            Ok(raw) => raw,
            Err(_) => return HttpResponse::new(400, "Bad Request", Vec::new()),
        };

        if raw.id.cache_key() != id {
            return HttpResponse::new(400, "Bad Request", Vec::new());
        }

        self.films.write().insert(id.to_string(), raw.clone());
        json_response(&raw)
    }
}

/// Extracts the resource path from an absolute URL.
fn resource_path(url: &str) -> Option<&str> {
    url.find("/movies").map(|i| &url[i..])
}

fn json_response<T: serde::Serialize>(value: &T) -> HttpResponse {
    match serde_json::to_vec(value) {
        Ok(body) => HttpResponse::ok(body),
        Err(_) => HttpResponse::new(500, "Internal Server Error", Vec::new()),
    }
}
