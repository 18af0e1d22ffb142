//! Network side of form submission.

use std::time::Duration;

use async_trait::async_trait;
use landing_common::SubmitError;
use reqwest::header::ACCEPT;
use tracing::debug;

/// Named field values in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    pub fields: Vec<(String, String)>,
}

impl FormPayload {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Delivers a payload and reports the HTTP status the server answered with.
///
/// A non-2xx status is still `Ok`; only failures to obtain a response are
/// errors.
#[async_trait]
pub trait FormTransport: Send + Sync {
    async fn send(&self, endpoint: &str, payload: &FormPayload) -> Result<u16, SubmitError>;
}

/// `reqwest`-backed transport posting `multipart/form-data`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, SubmitError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .build()
            .map_err(|e| SubmitError::Request(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait]
impl FormTransport for HttpTransport {
    async fn send(&self, endpoint: &str, payload: &FormPayload) -> Result<u16, SubmitError> {
        debug!(endpoint, fields = payload.fields.len(), "posting form");

        let form = payload
            .fields
            .iter()
            .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                form.text(name.clone(), value.clone())
            });

        let response = self
            .http
            .post(endpoint)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        Ok(response.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn payload() -> FormPayload {
        FormPayload {
            fields: vec![
                ("name".into(), "Dana Smith".into()),
                ("email".into(), "dana@clinic.example".into()),
            ],
        }
    }

    fn transport() -> HttpTransport {
        HttpTransport::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn posts_multipart_with_json_accept() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/f/contact"))
            .and(header("accept", "application/json"))
            .and(body_string_contains("dana@clinic.example"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let status = transport()
            .send(&format!("{}/f/contact", server.uri()), &payload())
            .await
            .unwrap();
        assert_eq!(status, 200);
    }

    #[tokio::test]
    async fn error_status_is_reported_not_raised() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let status = transport().send(&server.uri(), &payload()).await.unwrap();
        assert_eq!(status, 503);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_transport_error() {
        let err = transport()
            .send("http://127.0.0.1:1/f/contact", &payload())
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::Transport(_)));
    }

    #[test]
    fn payload_lookup_by_name() {
        let p = payload();
        assert_eq!(p.get("email"), Some("dana@clinic.example"));
        assert_eq!(p.get("phone"), None);
    }
}
