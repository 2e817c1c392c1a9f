pub mod pastebin;

use async_trait::async_trait;
use log::{ debug, info, warn };
use std::sync::Arc;
use thiserror::Error;
use url::Url;

use crate::command::PasteOptions;

pub use self::pastebin::PastebinClient;

#[derive(Debug, Error)]
pub enum PasteError {
    #[error("Paste request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Paste API returned HTTP {status}: {body}")]
    Status {
        status: u16,
        body: String,
    },
    #[error("Invalid result: {0}")]
    InvalidResult(String),
    #[error("Cannot build raw URL from '{0}'")]
    RawUrl(String),
}

/// Everything the paste API needs for one paste, already encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteRequest {
    pub content: String,
    pub visibility: u8,
    pub title: String,
    pub expire: String,
    pub format: String,
}

#[async_trait]
pub trait PasteClient: Send + Sync {
    /// Creates a paste and returns the raw response text, which should be the
    /// paste URL but is not guaranteed to be one.
    async fn create_paste(&self, request: &PasteRequest) -> Result<String, PasteError>;
}

pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate.trim()) {
        Ok(url) => !url.scheme().is_empty() && url.host_str().map_or(false, |host| !host.is_empty()),
        Err(_) => false,
    }
}

/// Rewrites `scheme://host/.../<id>` into `scheme://host/raw/<id>`, dropping
/// query and fragment.
pub fn build_raw_url(paste_url: &str) -> Result<String, PasteError> {
    let mut url = Url::parse(paste_url).map_err(|_| PasteError::RawUrl(paste_url.to_string()))?;
    let last_part = url.path().rsplit('/').next().unwrap_or("").to_string();
    url.set_path(&format!("/raw/{}", last_part));
    url.set_query(None);
    url.set_fragment(None);
    Ok(url.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteLinks {
    pub url: String,
    pub raw_url: Option<String>,
}

pub struct PasteSubmitter {
    client: Arc<dyn PasteClient>,
    format: String,
    include_raw_link: bool,
}

impl PasteSubmitter {
    pub fn new(client: Arc<dyn PasteClient>, format: String, include_raw_link: bool) -> Self {
        Self {
            client,
            format,
            include_raw_link,
        }
    }

    pub async fn submit(
        &self,
        content: String,
        options: &PasteOptions,
        default_title: &str
    ) -> Result<PasteLinks, PasteError> {
        let title = options.title.clone().unwrap_or_else(|| default_title.to_string());
        let request = PasteRequest {
            content,
            visibility: options.visibility.code(),
            title,
            expire: options.expire.code().to_string(),
            format: self.format.clone(),
        };
        debug!(
            "Submitting paste: {} bytes, format={}, private={}",
            request.content.len(),
            request.format,
            request.visibility
        );

        let result = self.client.create_paste(&request).await?;
        let paste_url = result.trim();
        if !is_valid_url(paste_url) {
            warn!("Paste API returned a non-URL result: {}", result);
            return Err(PasteError::InvalidResult(result));
        }
        info!("Paste created: {}", paste_url);

        let raw_url = if self.include_raw_link { Some(build_raw_url(paste_url)?) } else { None };
        Ok(PasteLinks {
            url: paste_url.to_string(),
            raw_url,
        })
    }
}
