//! HTTP client for the Formspark waitlist endpoint

use crate::constants::MSG_NETWORK_ERROR;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use tracing::{debug, error, info, warn};

/// Why a submission did not go through. `Display` is the message shown under the form.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Endpoint answered with a non-2xx status
    #[error("Submission failed: HTTP {status}{}", body_suffix(.body))]
    Rejected { status: u16, body: String },

    #[error("{}", MSG_NETWORK_ERROR)]
    Network(#[source] reqwest::Error),

    #[error("Submission failed: {0}")]
    Unexpected(String),
}

fn body_suffix(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        String::new()
    } else {
        format!(": {}", body)
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() || e.is_connect() || e.is_request() {
            SubmitError::Network(e)
        } else {
            SubmitError::Unexpected(e.to_string())
        }
    }
}

#[derive(Serialize)]
struct WaitlistRequest<'a> {
    email: &'a str,
}

#[derive(Clone)]
pub struct WaitlistClient {
    endpoint: String,
    http: reqwest::Client,
}

impl WaitlistClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("clipzy-waitlist/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `{"email": ...}` to the endpoint. Exactly one request, no retries.
    pub async fn submit(&self, email: &str) -> Result<(), SubmitError> {
        debug!(endpoint = %self.endpoint, "Submitting waitlist signup");

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&WaitlistRequest { email })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Waitlist request did not complete");
                SubmitError::from(e)
            })?;

        let status = response.status();
        if status.is_success() {
            info!(status = %status, "Waitlist signup accepted");
            return Ok(());
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(status = %status, error = %e, "Failed to read rejection body");
                String::new()
            }
        };
        error!(status = %status, body = %body, "Waitlist endpoint rejected signup");
        Err(SubmitError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn rejected_message_includes_status_and_body() {
        let err = SubmitError::Rejected {
            status: 422,
            body: "bad request".into(),
        };
        assert_eq!(err.to_string(), "Submission failed: HTTP 422: bad request");
    }

    #[test]
    fn rejected_message_omits_empty_body() {
        let err = SubmitError::Rejected {
            status: 500,
            body: "  \n".into(),
        };
        assert_eq!(err.to_string(), "Submission failed: HTTP 500");
    }

    #[test]
    fn unexpected_message_carries_diagnostic() {
        let err = SubmitError::Unexpected("decoder blew up".into());
        assert_eq!(err.to_string(), "Submission failed: decoder blew up");
    }

    #[tokio::test]
    async fn sends_json_with_expected_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/form"))
            .and(header("content-type", "application/json"))
            .and(header("accept", "application/json"))
            .and(body_json(serde_json::json!({ "email": "a@b.com" })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = WaitlistClient::new(format!("{}/form", server.uri())).unwrap();
        client.submit("a@b.com").await.unwrap();
    }

    #[tokio::test]
    async fn non_success_status_is_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_string("bad request"))
            .mount(&server)
            .await;

        let client = WaitlistClient::new(server.uri()).unwrap();
        let err = client.submit("a@b.com").await.unwrap_err();
        match err {
            SubmitError::Rejected { status, body } => {
                assert_eq!(status, 422);
                assert_eq!(body, "bad request");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn any_2xx_is_accepted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&server)
            .await;

        let client = WaitlistClient::new(server.uri()).unwrap();
        assert!(client.submit("a@b.com").await.is_ok());
    }

    #[tokio::test]
    async fn refused_connection_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = WaitlistClient::new(format!("http://{addr}/form")).unwrap();
        let err = client.submit("a@b.com").await.unwrap_err();
        assert!(matches!(err, SubmitError::Network(_)), "got {err:?}");
        assert_eq!(err.to_string(), MSG_NETWORK_ERROR);
    }

    #[tokio::test]
    async fn dropped_connection_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            for stream in listener.incoming() {
                drop(stream);
            }
        });

        let client = WaitlistClient::new(format!("http://{addr}/form")).unwrap();
        let err = client.submit("a@b.com").await.unwrap_err();
        assert!(matches!(err, SubmitError::Network(_)), "got {err:?}");
        assert_eq!(err.to_string(), MSG_NETWORK_ERROR);
    }

    #[tokio::test]
    async fn truncated_rejection_body_keeps_status() {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            // Consume the whole request so closing sends FIN rather than RST
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.ends_with(b"}") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => return,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let response = b"HTTP/1.1 502 Bad Gateway\r\nContent-Length: 100\r\n\r\npartial";
            let _ = stream.write_all(response);
            let _ = stream.flush();
        });

        let client = WaitlistClient::new(format!("http://{addr}/form")).unwrap();
        let err = client.submit("a@b.com").await.unwrap_err();
        match err {
            SubmitError::Rejected { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }
}
