//! HTTP Execution Gateway Adapter
//!
//! Posts `{"tool_name", "parameters"}` to a single endpoint (typically an
//! API Gateway or Lambda function URL in front of the tool handler) and
//! parses the reply. The handler may answer with the tool result itself or
//! with a Lambda proxy envelope `{"statusCode": n, "body": "<json>"}`.
//!
//! Transient failures are retried with exponential backoff.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use serde_json::{Map, Value};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::execution::{ToolRequest, ToolResult};
use crate::ports::{ExecutionGateway, GatewayError};

/// Configuration for the HTTP gateway.
#[derive(Debug, Clone)]
pub struct HttpGatewayConfig {
    /// Full URL the tool calls are posted to.
    pub endpoint: String,
    /// Optional key sent as `x-api-key`.
    api_key: Option<Secret<String>>,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
    /// First backoff delay; doubles on every retry.
    pub backoff: Duration,
}

impl HttpGatewayConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            timeout: Duration::from_secs(30),
            max_retries: 2,
            backoff: Duration::from_secs(1),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }
}

#[derive(Debug, Serialize)]
struct InvokeBody<'a> {
    tool_name: String,
    parameters: &'a Map<String, Value>,
}

/// Execution gateway reached over HTTP.
pub struct HttpExecutionGateway {
    config: HttpGatewayConfig,
    client: Client,
}

impl HttpExecutionGateway {
    pub fn new(config: HttpGatewayConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::unavailable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    async fn send(&self, request: &ToolRequest) -> Result<Response, GatewayError> {
        let parameters = request.parameters();
        let body = InvokeBody {
            tool_name: request.tool_name(),
            parameters: &parameters,
        };

        let mut builder = self
            .client
            .post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .json(&body);
        if let Some(key) = &self.config.api_key {
            builder = builder.header("x-api-key", key.expose_secret());
        }

        builder.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout {
                    timeout_secs: self.config.timeout.as_secs(),
                }
            } else if e.is_connect() {
                GatewayError::network(format!("Connection failed: {}", e))
            } else {
                GatewayError::network(e.to_string())
            }
        })
    }

    async fn parse(&self, response: Response) -> Result<ToolResult, GatewayError> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            return parse_tool_result(&body);
        }

        match status.as_u16() {
            401 | 403 => Err(GatewayError::AuthenticationFailed),
            code => Err(GatewayError::Status {
                status: code,
                message: body,
            }),
        }
    }

    async fn invoke_once(&self, request: &ToolRequest) -> Result<ToolResult, GatewayError> {
        let response = self.send(request).await?;
        self.parse(response).await
    }
}

/// Interprets a handler reply, unwrapping a Lambda proxy envelope if present.
pub fn parse_tool_result(body: &str) -> Result<ToolResult, GatewayError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| GatewayError::parse(format!("Invalid JSON: {}", e)))?;

    let Value::Object(object) = value else {
        return Err(GatewayError::parse("Expected a JSON object"));
    };

    let Some(status_code) = object.get("statusCode").and_then(Value::as_u64) else {
        return from_value(Value::Object(object));
    };

    let inner = match object.get("body") {
        Some(Value::String(raw)) => serde_json::from_str(raw)
            .map_err(|e| GatewayError::parse(format!("Invalid envelope body: {}", e)))?,
        Some(other) => other.clone(),
        None => Value::Object(Map::new()),
    };
    let mut result = from_value(inner)?;
    if status_code >= 400 {
        result.success = false;
        if result.error.is_none() {
            result.error = Some(format!("Tool handler returned status {}", status_code));
        }
    }
    Ok(result)
}

fn from_value(value: Value) -> Result<ToolResult, GatewayError> {
    serde_json::from_value(value).map_err(|e| GatewayError::parse(e.to_string()))
}

#[async_trait]
impl ExecutionGateway for HttpExecutionGateway {
    async fn invoke(&self, request: &ToolRequest) -> Result<ToolResult, GatewayError> {
        let mut retry_count = 0;

        loop {
            match self.invoke_once(request).await {
                Ok(result) => return Ok(result),
                Err(err) => {
                    if !err.is_retryable() || retry_count >= self.config.max_retries {
                        return Err(err);
                    }
                    tracing::warn!(
                        tool = %request.tool_name(),
                        attempt = retry_count + 1,
                        "Gateway call failed, retrying: {}",
                        err
                    );
                }
            }

            // Exponential backoff: base, 2x base, 4x base, ...
            sleep(self.config.backoff * (1 << retry_count)).await;
            retry_count += 1;
        }
    }
}
