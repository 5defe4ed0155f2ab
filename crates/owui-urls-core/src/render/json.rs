//! Machine-readable JSON reference document.
//!
//! Field order in the serialized output follows struct field order.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, Endpoint, Parameter, Section};
use crate::origin::Origin;

pub const DESCRIPTION: &str = "OpenWebUI frontend URLs for simplifying setup of advanced wrappers, clients, and multi-tiled window displays";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlDocument {
    pub metadata: Metadata,
    pub base_url: String,
    pub sections: Vec<SectionDoc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub last_updated: String,
    pub description: String,
    pub instance_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDoc {
    pub name: String,
    pub endpoints: Vec<EndpointDoc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDoc {
    pub function: String,
    pub url_pattern: String,
    pub full_url: String,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterDoc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDoc {
    pub name: String,
    pub description: String,
    pub example: String,
}

impl From<&Parameter> for ParameterDoc {
    fn from(p: &Parameter) -> Self {
        Self {
            name: p.name.to_string(),
            description: p.description.to_string(),
            example: p.example.to_string(),
        }
    }
}

impl EndpointDoc {
    fn from_endpoint(endpoint: &Endpoint, origin: &Origin) -> Self {
        Self {
            function: endpoint.function.to_string(),
            url_pattern: endpoint.url_pattern.to_string(),
            full_url: endpoint.full_url(origin),
            notes: endpoint.notes.to_string(),
            parameters: endpoint.parameters.iter().map(ParameterDoc::from).collect(),
        }
    }

    /// Rebuild the example URL from `base_url`, the pattern and the parameter examples.
    pub fn expand(&self, base_url: &str) -> String {
        let mut path = self.url_pattern.clone();
        for p in &self.parameters {
            path = path.replace(&format!("{{{}}}", p.name), &p.example);
        }
        format!("{}{}", base_url, path)
    }
}

impl SectionDoc {
    fn from_section(section: &Section, origin: &Origin) -> Self {
        Self {
            name: section.name.to_string(),
            endpoints: section
                .endpoints
                .iter()
                .map(|e| EndpointDoc::from_endpoint(e, origin))
                .collect(),
        }
    }
}

impl UrlDocument {
    pub fn build(origin: &Origin, date: NaiveDate) -> Self {
        Self {
            metadata: Metadata {
                last_updated: super::format_date(date),
                description: DESCRIPTION.to_string(),
                instance_url: origin.to_string(),
            },
            base_url: origin.to_string(),
            sections: catalog::sections()
                .iter()
                .map(|s| SectionDoc::from_section(s, origin))
                .collect(),
        }
    }
}

/// Render the catalog as pretty-printed JSON for `origin`.
pub fn render(origin: &Origin, date: NaiveDate) -> Result<String> {
    let doc = UrlDocument::build(origin, date);
    serde_json::to_string_pretty(&doc).context("serialize URL document")
}
