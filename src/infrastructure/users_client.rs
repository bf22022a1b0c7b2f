//! 远程用户 API 客户端
//!
//! 成功时把响应内容记录到 info 日志，失败时记录到 error 日志，
//! 同时把结果返回给调用方。

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::config::ClientConfig;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("请求失败: {0}")]
    Request(#[from] reqwest::Error),
    #[error("服务端返回错误状态: {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Clone)]
pub struct UsersClient {
    http: reqwest::Client,
    base_url: String,
}

impl UsersClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::new(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    /// GET `{base_url}/users`
    pub async fn fetch_users(&self) -> Result<Value, ClientError> {
        let result = self.send(self.http.get(self.users_url())).await;
        log_outcome("GET", &result);
        result
    }

    /// POST `{base_url}/users`，请求体为 JSON
    pub async fn post_user<T: Serialize + ?Sized>(&self, data: &T) -> Result<Value, ClientError> {
        let result = self.send(self.http.post(self.users_url()).json(data)).await;
        log_outcome("POST", &result);
        result
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }
        Ok(response.json().await?)
    }
}

fn log_outcome(method: &str, result: &Result<Value, ClientError>) {
    match result {
        Ok(body) => info!(method, "{}", body),
        Err(e) => error!(method, "{}", e),
    }
}
