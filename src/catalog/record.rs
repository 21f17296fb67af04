//! Catalog record types.
//!
//! Records arrive fully parsed from the authoring toolchain; this crate never
//! reads raw source. The body payload is opaque to the catalog accessor - only
//! the [`RendererMap`](super::RendererMap) looks inside it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// DocumentRecord
// =============================================================================

/// One published log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Entry title. Non-empty.
    pub title: String,
    /// Publication date. Calendar date only, no time-of-day semantics.
    pub published_at: NaiveDate,
    /// Listing summary. Non-empty.
    pub summary: String,
    /// Unique identifier, derived deterministically from the record's source
    /// location. Doubles as the route fragment.
    pub slug: String,
    /// Renderable body payload.
    pub body: Body,
}

impl DocumentRecord {
    /// Create a record.
    pub fn new(
        title: impl Into<String>,
        published_at: NaiveDate,
        summary: impl Into<String>,
        slug: impl Into<String>,
        body: Body,
    ) -> Self {
        Self {
            title: title.into(),
            published_at,
            summary: summary.into(),
            slug: slug.into(),
            body,
        }
    }
}

// =============================================================================
// Body
// =============================================================================

/// The renderable payload of a record: an ordered run of typed elements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Body {
    pub elements: Vec<Element>,
}

impl Body {
    /// Create a body from elements.
    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self { elements }
    }
}

// =============================================================================
// Element
// =============================================================================

/// One body element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// What kind of element this is; drives renderer dispatch.
    pub kind: ElementKind,
    /// Element text content.
    pub text: String,
    /// Kind-specific extra: link target for links, language tag for code.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub detail: Option<String>,
}

impl Element {
    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Heading,
            text: text.into(),
            detail: None,
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Paragraph,
            text: text.into(),
            detail: None,
        }
    }

    pub fn code(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Code,
            text: text.into(),
            detail: Some(language.into()),
        }
    }

    pub fn quote(text: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Quote,
            text: text.into(),
            detail: None,
        }
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Link,
            text: text.into(),
            detail: Some(href.into()),
        }
    }

    pub fn divider() -> Self {
        Self {
            kind: ElementKind::Divider,
            text: String::new(),
            detail: None,
        }
    }
}

/// Element kinds the renderer map dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Heading,
    Paragraph,
    Code,
    Quote,
    Link,
    Divider,
}

impl ElementKind {
    /// Stable lowercase name, used in render-failure reports.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::Code => "code",
            Self::Quote => "quote",
            Self::Link => "link",
            Self::Divider => "divider",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serde_roundtrip() {
        let record = DocumentRecord::new(
            "Why we rewrote the pipeline",
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            "Lessons from the second attempt.",
            "why-we-rewrote-the-pipeline",
            Body::from_elements(vec![
                Element::heading("Background"),
                Element::paragraph("It started with a pager alert."),
                Element::code("cargo build --release", "sh"),
            ]),
        );

        let json = serde_json::to_string(&record).expect("serialize");
        let back: DocumentRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, record);
    }

    #[test]
    fn test_detail_omitted_when_none() {
        let json = serde_json::to_string(&Element::paragraph("plain")).expect("serialize");
        assert!(!json.contains("detail"));

        let json = serde_json::to_string(&Element::link("docs", "https://example.com"))
            .expect("serialize");
        assert!(json.contains("https://example.com"));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ElementKind::Heading.name(), "heading");
        assert_eq!(ElementKind::Divider.name(), "divider");
    }

    #[test]
    fn test_kind_serde_snake_case() {
        let json = serde_json::to_string(&ElementKind::Code).expect("serialize");
        assert_eq!(json, "\"code\"");
    }
}
