use std::time::Duration;

use color_eyre::eyre::{eyre, Result};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::config::Config;
use crate::tmdb::{CategoryKey, MoviePage, Movie};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin client over the TMDB v3 movie list endpoints.
///
/// Requests are bearer-authenticated with the configured read access token
/// and always ask for the first page in the configured language.
#[derive(Clone, Debug)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: Url,
    language: String,
    token: SecretString,
}

impl TmdbClient {
    pub fn new(config: &Config) -> Result<Self> {
        let token = config
            .api_token
            .clone()
            .ok_or_else(|| eyre!("TMDB API token is not configured"))?;

        // Url::join drops the last path segment unless the base ends with a
        // slash, so normalize here.
        let mut base = config.api_base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url,
            language: config.language.clone(),
            token,
        })
    }

    /// Fetch the first page of a catalog slice.
    pub async fn fetch_category(&self, key: CategoryKey) -> Result<Vec<Movie>> {
        let mut url = self.base_url.join(&key.path())?;
        url.query_pairs_mut()
            .append_pair("language", &self.language)
            .append_pair("page", "1");

        tracing::debug!("GET {url}");
        let page: MoviePage = self
            .http
            .get(url)
            .bearer_auth(self.token.expose_secret())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(page.results)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.api_token = Some(SecretString::from("test-token"));
        config
    }

    #[test]
    fn test_new_requires_token() {
        let config = Config::default();
        assert!(TmdbClient::new(&config).is_err());
        assert!(TmdbClient::new(&test_config()).is_ok());
    }

    #[test]
    fn test_base_url_is_normalized() {
        let mut config = test_config();
        config.api_base_url = String::from("https://api.themoviedb.org/3");
        let client = TmdbClient::new(&config).expect("client should build");
        let url = client
            .base_url
            .join(&CategoryKey::Popular.path())
            .expect("join should succeed");
        assert_eq!(url.as_str(), "https://api.themoviedb.org/3/movie/popular");
    }
}
