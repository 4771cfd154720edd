//! # Resource Endpoints
//!
//! Where a store actor sends its requests. The collection endpoint serves `load_list` and
//! `register`; the detail endpoint is the base for `load(id)` and may live on a different host.

use crate::framework::RequestError;
use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceEndpoints {
    pub collection: Url,
    pub detail: Url,
}

impl ResourceEndpoints {
    pub fn new(collection: Url, detail: Url) -> Self {
        Self { collection, detail }
    }

    /// Endpoints where single records live under the collection (`/api/patients/{id}`).
    pub fn nested(collection: Url) -> Self {
        Self {
            detail: collection.clone(),
            collection,
        }
    }

    /// URL of a single record: the detail base with `id` appended as one path segment.
    pub fn detail_url(&self, id: &str) -> Result<Url, RequestError> {
        let mut url = self.detail.clone();
        url.path_segments_mut()
            .map_err(|_| RequestError::InvalidUrl(self.detail.to_string()))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_detail_url_appends_id() {
        let endpoints = ResourceEndpoints::new(
            url("http://localhost:8000/api/doctors"),
            url("https://users.example.com/api/users"),
        );
        assert_eq!(
            endpoints.detail_url("7").unwrap().as_str(),
            "https://users.example.com/api/users/7"
        );
    }

    #[test]
    fn test_detail_url_with_trailing_slash() {
        let endpoints = ResourceEndpoints::nested(url("http://localhost:8000/api/patients/"));
        assert_eq!(
            endpoints.detail_url("abc").unwrap().as_str(),
            "http://localhost:8000/api/patients/abc"
        );
    }

    #[test]
    fn test_detail_url_escapes_id() {
        let endpoints = ResourceEndpoints::nested(url("http://localhost/api/patients"));
        assert_eq!(
            endpoints.detail_url("a/b c").unwrap().as_str(),
            "http://localhost/api/patients/a%2Fb%20c"
        );
    }

    #[test]
    fn test_detail_url_rejects_cannot_be_a_base() {
        let endpoints = ResourceEndpoints::nested(url("mailto:someone@example.com"));
        assert!(matches!(
            endpoints.detail_url("1"),
            Err(RequestError::InvalidUrl(_))
        ));
    }
}
