//! The remote catalog client.

use crate::config::RemoteConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::{HttpClient, HttpRequest, HttpResponse, Method};
use filmoteka_codec::{CodecError, Film, FilmId, RawFilm};
use tracing::debug;

/// Client for the catalog service.
///
/// Issues the three wire operations against the service, validates response
/// status, and decodes response bodies into domain entities. It performs no
/// retries and no caching; both belong to the sync layer above.
pub struct RemoteClient<C: HttpClient> {
    config: RemoteConfig,
    client: C,
}

impl<C: HttpClient> RemoteClient<C> {
    /// Creates a new client.
    pub fn new(config: RemoteConfig, client: C) -> Self {
        Self { config, client }
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Returns the underlying HTTP transport.
    pub fn http(&self) -> &C {
        &self.client
    }

    /// Fetches the whole catalog.
    ///
    /// `GET /movies`.
    pub async fn fetch_all(&self) -> ClientResult<Vec<Film>> {
        debug!(endpoint = %self.config.endpoint, "fetching catalog");
        let response = self.load(Method::Get, "movies", None).await?;
        decode_films(&response.body)
    }

    /// Replaces one entity with its full updated raw representation.
    ///
    /// `PUT /movies/{id}`. The service's response is the canonical record.
    pub async fn update(&self, id: &FilmId, raw: &RawFilm) -> ClientResult<Film> {
        debug!(%id, "updating entity");
        let body = serde_json::to_vec(raw).map_err(CodecError::from)?;
        let path = format!("movies/{}", id);
        let response = self.load(Method::Put, &path, Some(body)).await?;
        decode_film(&response.body)
    }

    /// Pushes an entire local snapshot for server-side merging.
    ///
    /// `POST /movies/sync`. The service is the authority for the merge
    /// outcome; the returned list is the new source of truth.
    pub async fn bulk_sync(&self, raws: &[RawFilm]) -> ClientResult<Vec<Film>> {
        debug!(count = raws.len(), "pushing snapshot for sync");
        let body = serde_json::to_vec(raws).map_err(CodecError::from)?;
        let response = self.load(Method::Post, "movies/sync", Some(body)).await?;
        decode_films(&response.body)
    }

    /// Sends one request with the standing headers and validates status.
    async fn load(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<HttpResponse> {
        let mut request = HttpRequest::new(method, self.config.url_for(path))
            .with_header("Authorization", &self.config.authorization);
        if let Some(body) = body {
            request = request
                .with_header("Content-Type", "application/json")
                .with_body(body);
        }

        let response = self
            .client
            .send(request)
            .await
            .map_err(ClientError::transport)?;

        check_status(response)
    }
}

/// Validates that a response landed in the 2xx range.
fn check_status(response: HttpResponse) -> ClientResult<HttpResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ClientError::Remote {
            status: response.status,
            text: response.status_text,
        })
    }
}

fn decode_film(body: &[u8]) -> ClientResult<Film> {
    let raw: RawFilm = serde_json::from_slice(body).map_err(CodecError::from)?;
    Ok(Film::from_raw(raw))
}

fn decode_films(body: &[u8]) -> ClientResult<Vec<Film>> {
    let raws: Vec<RawFilm> = serde_json::from_slice(body).map_err(CodecError::from)?;
    Ok(raws.into_iter().map(Film::from_raw).collect())
}
