//! Integration tests for the Sabrosa storefront.
//!
//! The tests drive the full axum router in-process with
//! `tower::ServiceExt::oneshot`, carrying the session cookie between
//! requests the way a browser would. No server, no network: the in-memory
//! session store lives inside the router's session layer, so a `TestApp`
//! behaves like one visitor's browsing session.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sabrosa-integration-tests
//! ```

use std::path::Path;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use tower::ServiceExt;

use sabrosa_storefront::config::StorefrontConfig;
use sabrosa_storefront::content::StoreContent;
use sabrosa_storefront::state::AppState;

/// One visitor's session against an in-process storefront.
pub struct TestApp {
    router: Router,
    cookie: Option<String>,
}

impl TestApp {
    /// Build the storefront with the shipped content file and a fixed test
    /// configuration.
    ///
    /// # Panics
    ///
    /// Panics if the shipped content file cannot be loaded; nothing can be
    /// tested without it.
    #[must_use]
    pub fn new() -> Self {
        let content_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../storefront/content/store.json");
        let config = StorefrontConfig {
            host: std::net::IpAddr::from([127, 0, 0, 1]),
            port: 0,
            base_url: "http://localhost:3000".to_string(),
            content_path: content_path.clone(),
            order_phone: "972555567714".to_string(),
        };
        let content = StoreContent::load(&content_path).expect("shipped store content must load");
        let state = AppState::new(config, content);

        Self {
            router: sabrosa_storefront::app(state),
            cookie: None,
        }
    }

    /// Send a GET request.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or routed.
    pub async fn get(&mut self, path: &str) -> Response<Body> {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("request builds");
        self.send(request).await
    }

    /// Send a POST request with a form-urlencoded body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or routed.
    pub async fn post_form(&mut self, path: &str, body: &str) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_owned()))
            .expect("request builds");
        self.send(request).await
    }

    async fn send(&mut self, mut request: Request<Body>) -> Response<Body> {
        if let Some(cookie) = &self.cookie {
            request
                .headers_mut()
                .insert(header::COOKIE, cookie.parse().expect("cookie header value"));
        }

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        // Keep the session cookie like a browser would.
        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let raw = set_cookie.to_str().expect("set-cookie is ascii");
            self.cookie = raw.split(';').next().map(str::to_owned);
        }

        response
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect a response body into a string.
///
/// # Panics
///
/// Panics if the body cannot be read as UTF-8.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    String::from_utf8(bytes.to_vec()).expect("body is utf-8")
}

/// Extract the first `data-line-id` attribute from a cart items fragment.
#[must_use]
pub fn first_line_id(html: &str) -> Option<String> {
    html.split("data-line-id=\"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .map(str::to_owned)
}
