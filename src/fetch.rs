use thiserror::Error;
use tracing::info;
use url::Url;

use crate::parser::Site;

const USER_AGENT: &str = concat!("oj-mini/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("not a URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("invalid URL: only AtCoder and Codeforces are supported: {0}")]
    UnsupportedHost(String),
    #[error("failed to download HTML: {0}")]
    Http(#[from] reqwest::Error),
    #[error("the page is not valid UTF-8: {0}")]
    NotUtf8(#[from] std::string::FromUtf8Error),
}

impl FetchError {
    /// The server answered with an error status (e.g. a contest still running).
    pub fn is_status(&self) -> bool {
        matches!(self, FetchError::Http(e) if e.is_status())
    }
}

/// Pick the matcher for a problem URL from its host.
pub fn detect_site(url: &str) -> Result<(Url, Site), FetchError> {
    let parsed = Url::parse(url)?;
    let site = parsed
        .host_str()
        .and_then(Site::from_host)
        .ok_or_else(|| FetchError::UnsupportedHost(url.to_string()))?;
    Ok((parsed, site))
}

/// Download a problem page as text.
pub async fn fetch_page(url: Url) -> Result<String, FetchError> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

    info!("GET {}", url);
    let resp = client.get(url).send().await?.error_for_status()?;
    info!("{}", resp.status());
    let body = resp.bytes().await?;
    Ok(String::from_utf8(body.to_vec())?)
}

// ── Tests ──
