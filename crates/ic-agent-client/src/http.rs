//! HTTP adapter for the agent-management REST API.
//!
//! Resource URLs follow `{endpoint}/v2/{resource-path}` with a
//! `languageCode` query parameter on mutating calls; bodies are the
//! `ic-protocol` records serialized as-is.

use async_trait::async_trait;
use serde::Deserialize;

use ic_protocol::{paths, DetectIntentResponse, EntityType, Intent, QueryInput};

use crate::backend::AgentBackend;
use crate::config::{ClientConfig, Credentials};
use crate::error::{ClientError, ClientResult};

/// Client for the remote management API.
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
    project_id: String,
    token: Option<String>,
}

#[derive(Deserialize)]
struct ListIntentsResponse {
    #[serde(default)]
    intents: Vec<Intent>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListEntityTypesResponse {
    #[serde(default)]
    entity_types: Vec<EntityType>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct DetectIntentRequest<'a> {
    query_input: &'a QueryInput,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig, credentials: &Credentials) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build reqwest client");
        Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            project_id: credentials.project_id.clone(),
            token: credentials.api_token.clone(),
        }
    }

    fn url(&self, resource: &str) -> String {
        format!("{}/v2/{resource}", self.endpoint)
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Map non-2xx responses to `ClientError::Api` with the body text.
    async fn checked(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn agent_resource(&self, collection: &str) -> String {
        format!("{}/{collection}", paths::project_agent(&self.project_id))
    }
}

#[async_trait]
impl AgentBackend for HttpBackend {
    async fn list_intents(&self) -> ClientResult<Vec<Intent>> {
        let url = self.url(&self.agent_resource("intents"));
        let response = self
            .request(reqwest::Method::GET, url)
            .query(&[("intentView", "INTENT_VIEW_FULL")])
            .send()
            .await?;
        let body: ListIntentsResponse = Self::checked(response).await?.json().await?;
        Ok(body.intents)
    }

    async fn create_intent(&self, intent: &Intent, language_code: &str) -> ClientResult<Intent> {
        let url = self.url(&self.agent_resource("intents"));
        let response = self
            .request(reqwest::Method::POST, url)
            .query(&[("languageCode", language_code)])
            .json(intent)
            .send()
            .await?;
        Ok(Self::checked(response).await?.json().await?)
    }

    async fn update_intent(&self, intent: &Intent, language_code: &str) -> ClientResult<Intent> {
        let name = intent
            .name
            .as_deref()
            .ok_or_else(|| ClientError::NotFound("intent without resource name".into()))?;
        let response = self
            .request(reqwest::Method::PATCH, self.url(name))
            .query(&[("languageCode", language_code)])
            .json(intent)
            .send()
            .await?;
        Ok(Self::checked(response).await?.json().await?)
    }

    async fn delete_intent(&self, name: &str) -> ClientResult<()> {
        let response = self
            .request(reqwest::Method::DELETE, self.url(name))
            .send()
            .await?;
        Self::checked(response).await?;
        Ok(())
    }

    async fn list_entity_types(&self) -> ClientResult<Vec<EntityType>> {
        let url = self.url(&self.agent_resource("entityTypes"));
        let response = self.request(reqwest::Method::GET, url).send().await?;
        let body: ListEntityTypesResponse = Self::checked(response).await?.json().await?;
        Ok(body.entity_types)
    }

    async fn create_entity_type(
        &self,
        entity_type: &EntityType,
        language_code: &str,
    ) -> ClientResult<EntityType> {
        let url = self.url(&self.agent_resource("entityTypes"));
        let response = self
            .request(reqwest::Method::POST, url)
            .query(&[("languageCode", language_code)])
            .json(entity_type)
            .send()
            .await?;
        Ok(Self::checked(response).await?.json().await?)
    }

    async fn update_entity_type(
        &self,
        entity_type: &EntityType,
        language_code: &str,
    ) -> ClientResult<EntityType> {
        let name = entity_type
            .name
            .as_deref()
            .ok_or_else(|| ClientError::NotFound("entity type without resource name".into()))?;
        let response = self
            .request(reqwest::Method::PATCH, self.url(name))
            .query(&[("languageCode", language_code)])
            .json(entity_type)
            .send()
            .await?;
        Ok(Self::checked(response).await?.json().await?)
    }

    async fn delete_entity_type(&self, name: &str) -> ClientResult<()> {
        let response = self
            .request(reqwest::Method::DELETE, self.url(name))
            .send()
            .await?;
        Self::checked(response).await?;
        Ok(())
    }

    async fn detect_intent(
        &self,
        session_path: &str,
        query: &QueryInput,
        _language_code: &str,
    ) -> ClientResult<DetectIntentResponse> {
        let url = format!("{}:detectIntent", self.url(session_path));
        let response = self
            .request(reqwest::Method::POST, url)
            .json(&DetectIntentRequest { query_input: query })
            .send()
            .await?;
        Ok(Self::checked(response).await?.json().await?)
    }
}
