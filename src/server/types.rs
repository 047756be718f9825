use crate::config::Config;
use crate::pipeline::Analysis;
use crate::pipeline::error::PipelineError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub http_client: Client,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, anyhow::Error> {
        // One client for both upstreams; the timeout bounds every call.
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;
        Ok(Self {
            http_client,
            config,
        })
    }
}

// Response envelope, identical shape for success and failure
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    pub data: Option<Analysis>,
}

impl ApiResponse {
    pub fn ok(data: Analysis) -> Self {
        Self {
            success: true,
            message: "Image processed successfully".to_string(),
            data: Some(data),
        }
    }

    pub fn failed(err: &PipelineError) -> Self {
        Self {
            success: false,
            message: err.safe_message(),
            data: None,
        }
    }
}
