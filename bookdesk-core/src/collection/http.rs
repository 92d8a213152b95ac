//! HTTP client for the remote book collection

use super::Collection;
use crate::error::{CollectionError, CollectionResult};
use crate::model::{BookFormData, RemoteBook};
use async_trait::async_trait;
use reqwest::{Client, Response};

/// Collection reached over HTTP at `{base_url}/books`
#[derive(Debug, Clone)]
pub struct HttpCollection {
    client: Client,
    base_url: String,
}

impl HttpCollection {
    /// Create a client for the collection rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client reusing an existing reqwest client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        // Ensure base_url doesn't have trailing slash
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn books_url(&self) -> String {
        format!("{}/books", self.base_url)
    }

    fn book_url(&self, id: &str) -> String {
        format!("{}/books/{}", self.base_url, id)
    }
}

/// Turn non-2xx responses into a status error
fn check_status(response: Response) -> CollectionResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(CollectionError::Status(status.as_u16()))
    }
}

#[async_trait]
impl Collection for HttpCollection {
    async fn list(&self) -> CollectionResult<Vec<RemoteBook>> {
        let url = self.books_url();
        tracing::debug!("GET {}", url);
        let response = check_status(self.client.get(&url).send().await?)?;
        Ok(response.json().await?)
    }

    async fn create(&self, data: &BookFormData) -> CollectionResult<RemoteBook> {
        let url = self.books_url();
        tracing::debug!("POST {}", url);
        let response = check_status(self.client.post(&url).json(data).send().await?)?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: &str, data: &BookFormData) -> CollectionResult<RemoteBook> {
        let url = self.book_url(id);
        tracing::debug!("PUT {}", url);
        let response = check_status(self.client.put(&url).json(data).send().await?)?;

        // Document stores often answer a replace with an empty body
        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(RemoteBook {
                id: None,
                data: data.clone(),
            });
        }
        serde_json::from_slice(&body).map_err(|e| CollectionError::Decode(e.to_string()))
    }

    async fn remove(&self, id: &str) -> CollectionResult<()> {
        let url = self.book_url(id);
        tracing::debug!("DELETE {}", url);
        check_status(self.client.delete(&url).send().await?)?;
        Ok(())
    }
}
