use reqwest::{Client, Response};

/// Mock browser client for integration testing
///
/// Redirects are not followed so tests can look at every `Location` and
/// `Set-Cookie` header. The auth cookie, when given, is sent by hand.
pub struct MockBrowser {
    client: Client,
    base_url: String,
    cookie: Option<String>,
}

impl MockBrowser {
    /// A browser without any cookie
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::none()) // Handle redirects manually
            .build()
            .unwrap();

        Self {
            client,
            base_url: base_url.to_string(),
            cookie: None,
        }
    }

    /// A browser holding `auth_token=<token>`
    pub fn with_token(base_url: &str, token: &str) -> Self {
        Self {
            cookie: Some(format!("auth_token={token}")),
            ..Self::new(base_url)
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request to the specified path
    pub async fn get(&self, path: &str) -> Result<Response, reqwest::Error> {
        let mut request = self.client.get(self.url(path));
        if let Some(cookie) = &self.cookie {
            request = request.header("cookie", cookie);
        }
        request.send().await
    }

    /// Make a POST request with form data
    pub async fn post_form(
        &self,
        path: &str,
        form_data: &[(&str, &str)],
    ) -> Result<Response, reqwest::Error> {
        let mut request = self.client.post(self.url(path)).form(form_data);
        if let Some(cookie) = &self.cookie {
            request = request.header("cookie", cookie);
        }
        request.send().await
    }
}

/// `Location` of a redirect response
pub fn location(response: &Response) -> String {
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// All `Set-Cookie` values of a response
pub fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_string)
        .collect()
}

/// True when the response deletes the auth cookie
pub fn clears_auth_cookie(response: &Response) -> bool {
    set_cookies(response)
        .iter()
        .any(|c| c.starts_with("auth_token=;") && c.contains("Max-Age=0"))
}
