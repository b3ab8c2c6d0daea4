use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{LockStore, StoreError};

/// etcd (v2 keys API) implementation of [`LockStore`].
pub struct EtcdStore {
    base_url: String,
    client: reqwest::Client,
}

impl EtcdStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn key_url(&self, key: &str) -> String {
        format!("{}/v2/keys/{}", self.base_url, key.trim_start_matches('/'))
    }
}

#[async_trait]
impl LockStore for EtcdStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let resp = self
            .client
            .get(self.key_url(key))
            .send()
            .await
            .map_err(|e| StoreError::Internal(format!("get {key}: {e}")))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(StoreError::Internal(format!(
                "get {key}: {}",
                resp.status()
            )));
        }

        let body = resp
            .json::<serde_json::Value>()
            .await
            .map_err(|e| StoreError::Internal(format!("json decode: {e}")))?;
        Ok(body["node"]["value"].as_str().map(String::from))
    }

    async fn set(
        &self,
        key: &str,
        value: &str,
        ttl: Option<Duration>,
    ) -> Result<(), StoreError> {
        let mut form = vec![("value".to_string(), value.to_string())];
        if let Some(ttl) = ttl {
            form.push(("ttl".to_string(), ttl.as_secs().to_string()));
        }
        let resp = self
            .client
            .put(self.key_url(key))
            .form(&form)
            .send()
            .await
            .map_err(|e| StoreError::Internal(format!("set {key}: {e}")))?;

        if !resp.status().is_success() {
            return Err(StoreError::Internal(format!(
                "set {key}: {}",
                resp.status()
            )));
        }
        Ok(())
    }
}
