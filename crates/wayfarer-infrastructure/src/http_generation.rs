//! HTTP client for the external generation/chat workflow service.

use crate::config::ApiConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use wayfarer_core::error::{Result, WayfarerError};
use wayfarer_core::generation::{FALLBACK_CHAT_REPLY, GenerationService};

const ITINERARY_ENDPOINT: &str = "/api/itinerary";
const CHAT_ENDPOINT: &str = "/api/chat";

#[derive(Debug, Serialize)]
struct ItineraryRequest<'a> {
    travel_request: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_override: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    question: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    itinerary_context: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_override: Option<&'a str>,
}

/// Envelope every workflow execution responds with.
#[derive(Debug, Deserialize)]
struct WorkflowResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    response: String,
    #[serde(default)]
    stderr: String,
    #[serde(default)]
    error_code: i64,
}

/// reqwest-based [`GenerationService`] implementation.
///
/// Talks to the workflow-execution backend over JSON. A non-success HTTP
/// status becomes an [`WayfarerError::Http`]; a zero-status envelope with a
/// non-zero `error_code` becomes an [`WayfarerError::Service`]. An empty
/// `response` field is papered over with a user-facing fallback text, as
/// the UI has nothing better to show.
pub struct HttpGenerationService {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpGenerationService {
    /// Creates a client over the given configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Creates a client from the default configuration sources.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read.
    pub fn from_default_config() -> Result<Self> {
        Ok(Self::new(ApiConfig::load()?))
    }

    async fn execute<T: Serialize + Sync>(
        &self,
        endpoint: &str,
        request: &T,
    ) -> Result<WorkflowResponse> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        tracing::debug!(%url, "calling generation backend");

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WayfarerError::Http(format!(
                "request to {endpoint} failed with status: {status}"
            )));
        }

        let data: WorkflowResponse = response.json().await?;
        if data.error_code != 0 {
            return Err(WayfarerError::Service {
                code: data.error_code,
                message: if data.stderr.is_empty() {
                    "Unknown error".to_string()
                } else {
                    data.stderr
                },
            });
        }
        Ok(data)
    }
}

#[async_trait]
impl GenerationService for HttpGenerationService {
    async fn generate_itinerary(&self, travel_request: &str) -> Result<String> {
        let request = ItineraryRequest {
            travel_request,
            model_override: self.config.model_override.as_deref(),
        };
        let data = self.execute(ITINERARY_ENDPOINT, &request).await?;

        if data.response.is_empty() {
            // Successful call, empty document: keep the UI renderable.
            return Ok(format!(
                "# No Itinerary Generated\n\nThe backend call was successful but no itinerary \
                 was returned.\n\n**Travel Request:** {travel_request}\n\n**Status:** {}",
                data.status
            ));
        }
        Ok(data.response)
    }

    async fn send_chat_message(
        &self,
        question: &str,
        itinerary_context: Option<&str>,
    ) -> Result<String> {
        let request = ChatRequest {
            question,
            itinerary_context,
            model_override: self.config.model_override.as_deref(),
        };
        let data = self.execute(CHAT_ENDPOINT, &request).await?;

        if data.response.is_empty() {
            return Ok(FALLBACK_CHAT_REPLY.to_string());
        }
        Ok(data.response)
    }
}
