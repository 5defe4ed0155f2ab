//! Fixed catalog of OpenWebUI frontend routes.
//!
//! Sections group endpoints for presentation only. Every example URL is the
//! endpoint's template with the origin prepended and each `{name}` placeholder
//! replaced by its parameter's example value.

mod data;

use crate::origin::Origin;

/// Named placeholder in an endpoint's path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    pub name: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    /// One-line instruction on what real value to substitute.
    pub hint: &'static str,
}

impl Parameter {
    /// The `{name}` token as it appears in templates.
    pub fn token(&self) -> String {
        format!("{{{}}}", self.name)
    }
}

/// A single application route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub function: &'static str,
    /// Path relative to the origin; may contain `{placeholder}` tokens.
    pub url_pattern: &'static str,
    pub notes: &'static str,
    pub parameters: &'static [Parameter],
}

impl Endpoint {
    /// Example URL with the origin and every parameter example substituted.
    pub fn full_url(&self, origin: &Origin) -> String {
        let mut path = self.url_pattern.to_string();
        for param in self.parameters {
            path = path.replace(&param.token(), param.example);
        }
        format!("{}{}", origin, path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub name: &'static str,
    pub endpoints: &'static [Endpoint],
}

/// All sections in presentation order.
pub fn sections() -> &'static [Section] {
    data::SECTIONS
}

/// Every distinct parameter used in the catalog, in first-appearance order.
pub fn placeholders() -> Vec<&'static Parameter> {
    let mut seen: Vec<&'static Parameter> = Vec::new();
    for section in sections() {
        for endpoint in section.endpoints {
            for param in endpoint.parameters {
                if !seen.iter().any(|p| p.name == param.name) {
                    seen.push(param);
                }
            }
        }
    }
    seen
}
