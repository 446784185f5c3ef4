//! Mock HTTP server setup for integration tests

use itop_api_client::{AuthMode, ITopClient, ITopClientBuilder};
use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const REST_PATH: &str = "/webservices/rest.php";
pub const USER: &str = "admin";
pub const PASSWORD: &str = "s3cret";
/// `Basic base64("admin:s3cret")`
pub const BASIC: &str = "Basic YWRtaW46czNjcmV0";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let url = format!("{}{}", server.url(), REST_PATH);
        Self {
            server: Arc::new(Mutex::new(server)),
            url,
        }
    }

    /// Connect a client over the real reqwest transport.
    pub async fn connect(&self, mode: AuthMode) -> itop_api_client::Result<ITopClient> {
        ITopClientBuilder::new(&self.url, USER, PASSWORD)
            .auth_mode(mode)
            .connect()
            .await
    }

    /// Answer `core/check_credentials` with the given flag.
    pub async fn mock_credentials(&self, authorized: bool) -> Mock {
        let body = serde_json::json!({ "code": 0, "message": "", "authorized": authorized });
        self.mock_operation("core/check_credentials", 200, &body.to_string())
            .await
    }

    /// Answer requests whose `json_data` names `operation`.
    pub async fn mock_operation(&self, operation: &str, status: usize, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", REST_PATH)
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("version".into(), "1.3".into()),
                Matcher::Regex(regex_escape_form(operation)),
            ]))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    pub async fn mock_envelope(&self, operation: &str, envelope: &Value) -> Mock {
        self.mock_operation(operation, 200, &envelope.to_string())
            .await
    }
}

/// Form-encoded operation name as it appears inside `json_data`.
fn regex_escape_form(operation: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(operation.as_bytes()).collect();
    format!("operation%22%3A%22{}%22", encoded)
}
