use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::constants;
use crate::error::{PlacerError, PlacerResult};
use crate::models::GraphQLResponse;

/// Thin GraphQL transport: one POST per operation, errors surfaced as `PlacerError`.
pub struct GraphQLClient {
    client: Client,
    api_url: String,
}

impl GraphQLClient {
    pub fn new(api_url: &str, token: &str) -> PlacerResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(constants::USER_AGENT));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| PlacerError::ConfigError("github-token contains invalid characters".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Execute a GraphQL query
    pub async fn query<T>(&self, query: &str, variables: Value) -> PlacerResult<T>
    where
        T: DeserializeOwned,
    {
        self.execute(query, variables).await
    }

    /// Execute a GraphQL mutation
    pub async fn mutate<T>(&self, mutation: &str, variables: Value) -> PlacerResult<T>
    where
        T: DeserializeOwned,
    {
        self.execute(mutation, variables).await
    }

    async fn execute<T>(&self, query: &str, variables: Value) -> PlacerResult<T>
    where
        T: DeserializeOwned,
    {
        debug!(api_url = %self.api_url, %variables, "sending GraphQL request");

        let request_body = GraphQLRequest { query, variables };

        let response = self
            .client
            .post(&self.api_url)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PlacerError::ApiError(format!(
                "API request failed with status {}: {}",
                status, error_text
            )));
        }

        let body: GraphQLResponse<T> = response.json().await?;
        extract_data(body)
    }
}

/// Extract data from a GraphQL response; any reported error fails the whole call.
fn extract_data<T>(response: GraphQLResponse<T>) -> PlacerResult<T> {
    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        let error_messages = errors
            .iter()
            .map(|e| e.message.clone())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(PlacerError::GraphQLError(error_messages));
    }

    response
        .data
        .ok_or_else(|| PlacerError::GraphQLError("No data in response".to_string()))
}

#[derive(Debug, Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    variables: Value,
}
