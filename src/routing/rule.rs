//! Route rules and the compiled-in response variants.

use std::fmt;
use std::net::SocketAddr;

use axum::http::Method;
use serde::{Deserialize, Serialize};

/// Fixed body returned for a matched route.
///
/// Always non-empty; constructing an empty template in a const context fails
/// at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResponseTemplate(&'static str);

impl ResponseTemplate {
    pub const fn new(body: &'static str) -> Self {
        assert!(!body.is_empty(), "response template must not be empty");
        Self(body)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn as_bytes(&self) -> &'static [u8] {
        self.0.as_bytes()
    }
}

/// One of the three server presets. Each pins a body and a port.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// `I HOME !?!!!` on port 8080.
    #[default]
    Home,
    /// `Rizvan` on port 8080.
    Rizvan,
    /// `Rizvan!!!` on port 8089.
    RizvanLoud,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Home, Variant::Rizvan, Variant::RizvanLoud];

    const HOME: ResponseTemplate = ResponseTemplate::new("I HOME !?!!!");
    const RIZVAN: ResponseTemplate = ResponseTemplate::new("Rizvan");
    const RIZVAN_LOUD: ResponseTemplate = ResponseTemplate::new("Rizvan!!!");

    pub fn template(self) -> ResponseTemplate {
        match self {
            Variant::Home => Self::HOME,
            Variant::Rizvan => Self::RIZVAN,
            Variant::RizvanLoud => Self::RIZVAN_LOUD,
        }
    }

    pub fn port(self) -> u16 {
        match self {
            Variant::Home | Variant::Rizvan => 8080,
            Variant::RizvanLoud => 8089,
        }
    }

    /// All interfaces on the variant's port.
    pub fn listen_addr(self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Home => "home",
            Variant::Rizvan => "rizvan",
            Variant::RizvanLoud => "rizvan-loud",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (method, path) pair bound to the template it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    method: Method,
    path: &'static str,
    template: ResponseTemplate,
}

impl RouteRule {
    /// A GET rule for `path`.
    pub fn get(path: &'static str, template: ResponseTemplate) -> Self {
        Self {
            method: Method::GET,
            path,
            template,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn template(&self) -> ResponseTemplate {
        self.template
    }

    /// Exact, case-sensitive match on both method and path. A GET rule also
    /// serves HEAD.
    pub fn matches(&self, method: &Method, path: &str) -> bool {
        self.path == path && self.serves(method)
    }

    fn serves(&self, method: &Method) -> bool {
        self.method == *method || (self.method == Method::GET && *method == Method::HEAD)
    }

    /// Methods accepted on the rule's path, in the order axum lists them in
    /// `Allow`: the rule's method, HEAD for a GET rule, then OPTIONS.
    pub fn allowed_methods(&self) -> Vec<Method> {
        let mut methods = vec![self.method.clone()];
        if self.method == Method::GET {
            methods.push(Method::HEAD);
        }
        methods.push(Method::OPTIONS);
        methods
    }
}

impl From<Variant> for RouteRule {
    fn from(variant: Variant) -> Self {
        RouteRule::get("/", variant.template())
    }
}
