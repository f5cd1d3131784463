use reqwest::{Client, RequestBuilder};
use serde::Serialize;

/// HTTP client with explicit per-request credentials.
///
/// The token travels with the client value instead of living in a
/// process-wide default header, so two clients with different identities
/// can coexist. Login hands back the full header value (`Bearer <jwt>`)
/// and it is applied verbatim.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            http: Client::new(),
        }
    }

    /// New client carrying the given Authorization header value
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// New client with no credentials
    pub fn clear_token(mut self) -> Self {
        self.token = None;
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.apply_auth(self.http.get(self.url(path)))
    }

    pub fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> RequestBuilder {
        self.apply_auth(self.http.post(self.url(path)).json(body))
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.apply_auth(self.http.delete(self.url(path)))
    }

    fn apply_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", token),
            None => builder,
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_applied_to_requests() {
        let client = ApiClient::new("http://localhost:5000").with_token("Bearer abc.def.ghi");
        let request = client.get("/api/posts").build().expect("request");
        assert_eq!(
            request.headers().get("Authorization").unwrap(),
            "Bearer abc.def.ghi"
        );
    }

    #[test]
    fn cleared_client_sends_no_credentials() {
        let client = ApiClient::new("http://localhost:5000")
            .with_token("Bearer abc")
            .clear_token();
        let request = client.get("/api/posts").build().expect("request");
        assert!(request.headers().get("Authorization").is_none());
    }

    #[test]
    fn clearing_one_clone_leaves_the_other_authenticated() {
        let authed = ApiClient::new("http://localhost:5000").with_token("Bearer abc");
        let anonymous = authed.clone().clear_token();
        assert_eq!(authed.token(), Some("Bearer abc"));
        assert_eq!(anonymous.token(), None);
    }

    #[test]
    fn url_joining_normalizes_slashes() {
        let client = ApiClient::new("http://localhost:5000/");
        let request = client.get("api/posts/test").build().expect("request");
        assert_eq!(
            request.url().as_str(),
            "http://localhost:5000/api/posts/test"
        );
    }
}
