//! In-process stand-in for the ontology backend.
//!
//! Serves canned responses from a `tiny_http` server on an ephemeral port and
//! records the raw request target (path + query) of every request it sees.

use muso_client::ApiClient;
use muso_core::ClientConfig;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tiny_http::{Header, Response, Server};

/// Canned reply: status code and JSON body.
pub type Reply = (u16, String);

pub struct MockBackend {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    /// Start a server whose replies are computed from the raw request target.
    pub fn start<F>(route: F) -> Self
    where
        F: Fn(&str) -> Reply + Send + 'static,
    {
        Self::start_with_delay(Duration::ZERO, route)
    }

    /// Like [`MockBackend::start`], but sleeps before answering each request.
    pub fn start_with_delay<F>(delay: Duration, route: F) -> Self
    where
        F: Fn(&str) -> Reply + Send + 'static,
    {
        let server = Server::http("127.0.0.1:0").expect("Failed to bind mock backend");
        let port = server.server_addr().to_ip().expect("Mock backend has no IP address").port();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        std::thread::spawn(move || {
            for request in server.incoming_requests() {
                let target = request.url().to_string();
                seen.lock().unwrap().push(target.clone());
                if !delay.is_zero() {
                    std::thread::sleep(delay);
                }
                let (status, body) = route(&target);
                let header = Header::from_bytes("Content-Type", "application/json").unwrap();
                let response = Response::from_string(body).with_status_code(status).with_header(header);
                let _ = request.respond(response);
            }
        });

        Self { base_url: format!("http://127.0.0.1:{port}"), requests }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(ClientConfig::new(&self.base_url).unwrap()).unwrap()
    }

    pub fn client_with_timeout(&self, timeout: Duration) -> ApiClient {
        let config = ClientConfig::new(&self.base_url).unwrap().with_timeout(timeout).unwrap();
        ApiClient::new(config).unwrap()
    }

    /// Raw request targets received so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// A successful envelope around `data`.
pub fn ok(data: serde_json::Value) -> Reply {
    (200, serde_json::json!({ "success": true, "data": data }).to_string())
}
