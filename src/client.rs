use const_format::concatcp;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::{ReporterError, Result};

const API_ENDPOINT: &str = "https://api.github.com/graphql";

// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concatcp!("issue-reporter/", env!("CARGO_PKG_VERSION"));

pub struct GitHubClient {
    http: Client,
    endpoint: String,
    token: String,
}

#[derive(Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLError>>,
}

#[derive(Deserialize, Debug)]
struct GraphQLError {
    message: String,
}

impl GitHubClient {
    pub fn new(token: String) -> Self {
        Self::with_endpoint(token, API_ENDPOINT.to_string())
    }

    /// Point the client at a different GraphQL endpoint (used by tests).
    pub fn with_endpoint(token: String, endpoint: String) -> Self {
        Self {
            http: Client::new(),
            endpoint,
            token,
        }
    }

    pub async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<T> {
        let request = GraphQLRequest { query, variables };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .header("Content-Type", "application/json")
            .header("User-Agent", USER_AGENT)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ReporterError::Api {
                status: response.status().as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read response body>".to_string()),
            });
        }

        let gql_response: GraphQLResponse<T> = response.json().await?;

        if let Some(errors) = gql_response.errors {
            return Err(ReporterError::GraphQL {
                messages: errors.into_iter().map(|e| e.message).collect(),
            });
        }

        gql_response.data.ok_or(ReporterError::EmptyResponse)
    }
}
