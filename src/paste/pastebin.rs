use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use serde::Serialize;
use std::time::Duration;

use super::{ PasteClient, PasteError, PasteRequest };

pub const DEFAULT_API_URL: &str = "https://pastebin.com/api/api_post.php";

#[derive(Serialize)]
struct CreatePasteForm<'a> {
    api_dev_key: &'a str,
    api_option: &'a str,
    api_paste_code: &'a str,
    api_paste_private: u8,
    api_paste_name: &'a str,
    api_paste_expire_date: &'a str,
    api_paste_format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_user_key: Option<&'a str>,
}

#[derive(Clone)]
pub struct PastebinClient {
    http: HttpClient,
    api_url: String,
    api_developer_key: String,
    api_user_key: Option<String>,
}

impl PastebinClient {
    pub fn new(
        api_developer_key: String,
        api_user_key: Option<String>,
        api_url: Option<String>,
        timeout: Duration
    ) -> Result<Self, PasteError> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_developer_key,
            api_user_key: api_user_key.filter(|k| !k.is_empty()),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl PasteClient for PastebinClient {
    async fn create_paste(&self, request: &PasteRequest) -> Result<String, PasteError> {
        let form = CreatePasteForm {
            api_dev_key: &self.api_developer_key,
            api_option: "paste",
            api_paste_code: &request.content,
            api_paste_private: request.visibility,
            api_paste_name: &request.title,
            api_paste_expire_date: &request.expire,
            api_paste_format: &request.format,
            api_user_key: self.api_user_key.as_deref(),
        };
        debug!("POST {} (user key set: {})", self.api_url, self.api_user_key.is_some());

        let resp = self.http.post(&self.api_url).form(&form).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(PasteError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}
