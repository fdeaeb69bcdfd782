//! Proxies forwarding tool arguments to external record services.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value, json};
use url::Url;

use crate::TRACING_TARGET;
use crate::contract::ToolContract;
use crate::error::{Result, ToolError};
use crate::registry::ToolHandler;
use crate::result::ToolResult;

/// The record collections reachable through a proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Flight bookings.
    Bookings,
    /// Flight status records.
    Flights,
    /// Support incidents.
    Incidents,
}

impl RecordKind {
    /// Tool name registered for this kind.
    pub fn tool_name(self) -> &'static str {
        match self {
            Self::Bookings => "get_bookings",
            Self::Flights => "get_flights",
            Self::Incidents => "get_incidents",
        }
    }

    /// Resource path on the record service.
    pub fn path(self) -> &'static str {
        match self {
            Self::Bookings => "/api/bookings",
            Self::Flights => "/api/flights",
            Self::Incidents => "/api/incidents",
        }
    }

    /// Key naming the collection in the tool result.
    pub fn collection_key(self) -> &'static str {
        match self {
            Self::Bookings => "bookings",
            Self::Flights => "flights",
            Self::Incidents => "incidents",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Bookings => "Retrieve booking information from the bookings api.",
            Self::Flights => "Retrieve flight information from the flights api.",
            Self::Incidents => "Retrieve support incident records from the incidents api.",
        }
    }

    fn parameters(self) -> Value {
        match self {
            Self::Bookings => json!({
                "type": "object",
                "properties": {
                    "flight": {"type": "string", "description": "Flight ID"},
                    "name": {"type": "string", "description": "Name of the person"}
                },
                "required": [],
                "additionalProperties": false
            }),
            Self::Flights => json!({
                "type": "object",
                "properties": {
                    "flight": {"type": "string", "description": "Flight ID"}
                },
                "required": [],
                "additionalProperties": false
            }),
            Self::Incidents => json!({
                "type": "object",
                "properties": {
                    "id": {"type": "string", "description": "Incident ID"},
                    "name": {"type": "string", "description": "Name of the person"}
                },
                "required": [],
                "additionalProperties": false
            }),
        }
    }
}

/// Tool forwarding its arguments as query parameters to a record service.
///
/// One instance per [`RecordKind`], all sharing the same pooled HTTP client.
/// Non-success statuses propagate as [`ToolError::Upstream`]; the proxy
/// never retries and never converts a failure into an empty payload.
pub struct RecordLookupTool {
    http: Client,
    base_url: Url,
    kind: RecordKind,
}

impl RecordLookupTool {
    /// Creates a proxy for one record collection.
    pub fn new(http: Client, base_url: Url, kind: RecordKind) -> Self {
        Self {
            http,
            base_url,
            kind,
        }
    }

    /// The contract registered for this proxy.
    pub fn contract(kind: RecordKind) -> ToolContract {
        ToolContract::new(kind.tool_name(), kind.description(), kind.parameters())
    }

    fn request_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            self.kind.path()
        )
    }

    /// Flattens the arguments object into query parameters, skipping nulls.
    fn query_params(args: &Map<String, Value>) -> Vec<(&str, String)> {
        args.iter()
            .filter_map(|(key, value)| match value {
                Value::Null => None,
                Value::String(text) => Some((key.as_str(), text.clone())),
                other => Some((key.as_str(), other.to_string())),
            })
            .collect()
    }
}

#[async_trait]
impl ToolHandler for RecordLookupTool {
    #[tracing::instrument(target = "vocalis_tools", skip_all, fields(kind = self.kind.tool_name()))]
    async fn call(&self, args: Value) -> Result<ToolResult> {
        let args = match args {
            Value::Object(map) => map,
            other => {
                return Err(ToolError::schema(format!(
                    "expected an arguments object, got {other}"
                )));
            }
        };

        tracing::debug!(
            target: TRACING_TARGET,
            tool = self.kind.tool_name(),
            "Querying record service"
        );
        let response = self
            .http
            .get(self.request_url())
            .query(&Self::query_params(&args))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                target: TRACING_TARGET,
                tool = self.kind.tool_name(),
                status = status.as_u16(),
                "Record service returned failure"
            );
            return Err(ToolError::upstream(status.as_u16()));
        }

        let body: Value = response.json().await?;
        let key = self.kind.collection_key();
        // Some record services already envelope their collection.
        let payload = match &body {
            Value::Object(map) if map.contains_key(key) => body,
            _ => json!({key: body}),
        };
        Ok(ToolResult::agent_json(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contracts_are_closed_schemas() {
        for kind in [RecordKind::Bookings, RecordKind::Flights, RecordKind::Incidents] {
            let contract = RecordLookupTool::contract(kind);
            assert_eq!(contract.name, kind.tool_name());
            assert_eq!(contract.parameters["additionalProperties"], false);
            assert_eq!(contract.parameters["required"], json!([]));
        }
    }

    #[test]
    fn test_query_params_skip_nulls() {
        let args = json!({"flight": "VA123", "name": null});
        let Value::Object(map) = args else { unreachable!() };
        let params = RecordLookupTool::query_params(&map);
        assert_eq!(params, vec![("flight", "VA123".to_string())]);
    }

    #[test]
    fn test_request_url() {
        let tool = RecordLookupTool::new(
            Client::new(),
            Url::parse("http://records.example.com/").unwrap(),
            RecordKind::Incidents,
        );
        assert_eq!(tool.request_url(), "http://records.example.com/api/incidents");
    }

    /// Serves exactly one canned HTTP response on an ephemeral port.
    async fn one_shot_server(response: &'static str) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buffer = [0u8; 1024];
            let _ = tokio::io::AsyncReadExt::read(&mut stream, &mut buffer).await;
            tokio::io::AsyncWriteExt::write_all(&mut stream, response.as_bytes())
                .await
                .unwrap();
        });
        Url::parse(&format!("http://{addr}")).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_status_surfaces_as_upstream_error() {
        let base_url =
            one_shot_server("HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\n\r\n").await;
        let tool = RecordLookupTool::new(Client::new(), base_url, RecordKind::Incidents);
        let error = tool.call(json!({"id": "7"})).await.unwrap_err();
        assert!(matches!(error, ToolError::Upstream { status: 404 }));
    }

    #[tokio::test]
    async fn test_success_body_is_wrapped_under_collection_key() {
        let base_url = one_shot_server(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 21\r\n\r\n[{\"flight\":\"VA123\"}]\n",
        )
        .await;
        let tool = RecordLookupTool::new(Client::new(), base_url, RecordKind::Flights);
        let result = tool.call(json!({"flight": "VA123"})).await.unwrap();
        assert_eq!(
            result.as_json(),
            Some(&json!({"flights": [{"flight": "VA123"}]}))
        );
    }

    #[tokio::test]
    async fn test_unreachable_service_is_not_masked() {
        // Port 9 is discard; connecting fails fast and must surface as an
        // error, never as a successful empty payload.
        let tool = RecordLookupTool::new(
            Client::new(),
            Url::parse("http://127.0.0.1:9").unwrap(),
            RecordKind::Incidents,
        );
        let error = tool.call(json!({"id": "7"})).await.unwrap_err();
        assert!(matches!(error, ToolError::Transport(_)));
    }
}
