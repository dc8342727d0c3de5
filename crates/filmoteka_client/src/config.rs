//! Configuration for the remote client.

/// Configuration for talking to the catalog service.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the service, without a trailing slash.
    pub endpoint: String,
    /// Static authorization credential attached to every request.
    pub authorization: String,
}

impl RemoteConfig {
    /// Creates a new configuration.
    ///
    /// A trailing slash on the endpoint is stripped so resource paths can
    /// be joined uniformly.
    pub fn new(endpoint: impl Into<String>, authorization: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            authorization: authorization.into(),
        }
    }

    /// Builds the absolute URL for a resource path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = RemoteConfig::new("https://example.com/moowle/", "Basic abc");
        assert_eq!(config.endpoint, "https://example.com/moowle");
        assert_eq!(config.url_for("movies"), "https://example.com/moowle/movies");
    }

    #[test]
    fn resource_paths_join() {
        let config = RemoteConfig::new("https://example.com", "Basic abc");
        assert_eq!(config.url_for("movies/sync"), "https://example.com/movies/sync");
        assert_eq!(config.url_for("movies/7"), "https://example.com/movies/7");
    }
}
