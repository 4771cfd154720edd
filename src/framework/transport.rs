//! # HTTP Transport
//!
//! A thin wrapper around [`reqwest::Client`] shared by every store actor. It speaks JSON,
//! turns non-2xx responses into [`RequestError::Status`], and unwraps the backend's
//! `{"data": ...}` envelope so callers always see the payload.
//!
//! An object is only treated as an envelope when its `data` member has the shape the caller
//! asked for. A record that happens to carry its own `data` field is left whole.

use crate::framework::RequestError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Key under which the backend wraps response payloads.
pub const ENVELOPE_KEY: &str = "data";

/// Fields that mark an object as a record rather than an envelope.
const IDENTIFIER_KEYS: [&str; 2] = ["public_key", "id"];

/// What a response body is expected to carry once unwrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    /// A JSON array of records.
    List,
    /// A single JSON object.
    Record,
}

/// JSON-over-HTTP transport. Cheap to clone; clones share one connection pool.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, RequestError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RequestError::Setup(e.to_string()))?;
        Ok(Self { client })
    }

    /// GET a collection and decode the (unwrapped) array.
    pub async fn get_list<T: DeserializeOwned>(&self, url: &Url) -> Result<Vec<T>, RequestError> {
        self.get_json(url, Payload::List).await
    }

    /// GET a single record and decode the (unwrapped) object.
    pub async fn get_record<T: DeserializeOwned>(&self, url: &Url) -> Result<T, RequestError> {
        self.get_json(url, Payload::Record).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        payload: Payload,
    ) -> Result<T, RequestError> {
        debug!(%url, ?payload, "GET");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| RequestError::transport(url, e))?;
        let body = Self::read_body(url, response).await?;
        decode_payload(url, body, payload)
    }

    /// POST `body` as JSON to `url`. The response body is ignored.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &Url,
        body: &B,
    ) -> Result<(), RequestError> {
        debug!(%url, "POST");
        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| RequestError::transport(url, e))?;
        Self::read_body(url, response).await.map(|_| ())
    }

    async fn read_body(url: &Url, response: reqwest::Response) -> Result<Vec<u8>, RequestError> {
        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| RequestError::transport(url, e))?;
        Ok(bytes.to_vec())
    }
}

/// Decode a response body, unwrapping `{"data": payload}` when it is an envelope.
pub fn decode_payload<T: DeserializeOwned>(
    url: &Url,
    body: Vec<u8>,
    payload: Payload,
) -> Result<T, RequestError> {
    let value: Value = serde_json::from_slice(&body).map_err(|e| RequestError::decode(url, e))?;
    serde_json::from_value(unwrap_envelope(value, payload))
        .map_err(|e| RequestError::decode(url, e))
}

/// Strip the `data` envelope off a response value.
///
/// For [`Payload::List`] the envelope's `data` must be an array. For [`Payload::Record`] it
/// must be an object, and the outer object must not carry an identifier of its own. Anything
/// else passes through as-is.
pub fn unwrap_envelope(value: Value, payload: Payload) -> Value {
    let mut map = match value {
        Value::Object(map) => map,
        other => return other,
    };
    let is_envelope = match (payload, map.get(ENVELOPE_KEY)) {
        (Payload::List, Some(Value::Array(_))) => true,
        (Payload::Record, Some(Value::Object(_))) => {
            !IDENTIFIER_KEYS.iter().any(|key| map.contains_key(*key))
        }
        _ => false,
    };
    if is_envelope {
        if let Some(inner) = map.remove(ENVELOPE_KEY) {
            return inner;
        }
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Patient;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn endpoint(server: &MockServer, p: &str) -> Url {
        Url::parse(&format!("{}{}", server.uri(), p)).unwrap()
    }

    #[test]
    fn test_unwrap_envelope() {
        assert_eq!(unwrap_envelope(json!({"data": [1, 2]}), Payload::List), json!([1, 2]));
        assert_eq!(unwrap_envelope(json!([1, 2]), Payload::List), json!([1, 2]));
        assert_eq!(unwrap_envelope(json!({"id": 1}), Payload::Record), json!({"id": 1}));
        assert_eq!(
            unwrap_envelope(json!({"status": "ok", "data": {"id": 1}}), Payload::Record),
            json!({"id": 1})
        );
    }

    #[test]
    fn test_record_with_own_data_field_is_kept_whole() {
        let url = Url::parse("http://backend/api/patients/02aa").unwrap();
        let body = json!({"public_key": "02aa", "name": "Ada", "data": {"ward": 4}});

        let patient: Patient =
            decode_payload(&url, body.to_string().into_bytes(), Payload::Record).unwrap();
        assert_eq!(patient.public_key(), Some("02aa"));
        assert_eq!(patient.name(), Some("Ada"));
        assert_eq!(serde_json::to_value(&patient).unwrap(), body);
    }

    #[test]
    fn test_record_with_scalar_data_field_decodes() {
        let url = Url::parse("http://backend/api/patients/02aa").unwrap();
        let body = json!({"public_key": "02aa", "data": "blob"});

        let patient: Patient =
            decode_payload(&url, body.to_string().into_bytes(), Payload::Record).unwrap();
        assert_eq!(serde_json::to_value(&patient).unwrap(), body);
    }

    #[test]
    fn test_list_envelope_requires_array() {
        assert_eq!(
            unwrap_envelope(json!({"data": {"id": 1}}), Payload::List),
            json!({"data": {"id": 1}})
        );
        assert_eq!(
            unwrap_envelope(json!({"data": "blob"}), Payload::Record),
            json!({"data": "blob"})
        );
    }

    #[tokio::test]
    async fn test_get_list_bare_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/doctors"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "name": "A"}])))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let list: Vec<Value> = transport
            .get_list(&endpoint(&server, "/api/doctors"))
            .await
            .unwrap();
        assert_eq!(list, vec![json!({"id": 1, "name": "A"})]);
    }

    #[tokio::test]
    async fn test_get_list_enveloped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/clinics"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": [{"public_key": "02ab", "name": "North"}]})),
            )
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let list: Vec<Value> = transport
            .get_list(&endpoint(&server, "/api/clinics"))
            .await
            .unwrap();
        assert_eq!(list, vec![json!({"public_key": "02ab", "name": "North"})]);
    }

    #[tokio::test]
    async fn test_get_list_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/doctors"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let url = endpoint(&server, "/api/doctors");
        let err = transport.get_list::<Value>(&url).await.unwrap_err();
        assert_eq!(
            err,
            RequestError::Status {
                url: url.to_string(),
                status: 500
            }
        );
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_get_record_invalid_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/doctors"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let err = transport
            .get_record::<Value>(&endpoint(&server, "/api/doctors"))
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_post_json_sends_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/clinics"))
            .and(body_json(json!({"name": "North"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "DONE"})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        transport
            .post_json(&endpoint(&server, "/api/clinics"), &json!({"name": "North"}))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_post_json_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/clinics"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let err = transport
            .post_json(&endpoint(&server, "/api/clinics"), &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::Status { status: 400, .. }));
    }
}
