//! Renderer map - per-element render overrides.
//!
//! A dispatch table from element kind to rendering function, with a built-in
//! catch-all. Hosts override the kinds they style and inherit text output for
//! the rest.
//!
//! `render_body` is the render boundary: a failing renderer produces a
//! visible inline placeholder in the output instead of taking down the
//! surrounding page.
//!
//! # Example
//!
//! ```ignore
//! use tiltcard::catalog::{Element, ElementKind, RendererMap};
//!
//! let mut renderers = RendererMap::new();
//! renderers.set(ElementKind::Heading, |el| Ok(format!(">> {} <<", el.text)));
//!
//! let out = renderers.render_element(&Element::heading("Release notes"));
//! assert_eq!(out, ">> Release notes <<");
//! ```

use std::collections::HashMap;

use log::debug;

use crate::error::Result;

use super::record::{Body, Element, ElementKind};

/// Width of the rendered divider rule.
const DIVIDER_WIDTH: usize = 40;

/// A rendering function for one element.
pub type RenderFn = Box<dyn Fn(&Element) -> Result<String>>;

// =============================================================================
// RendererMap
// =============================================================================

/// Element-kind keyed dispatch table with a default entry.
#[derive(Default)]
pub struct RendererMap {
    overrides: HashMap<ElementKind, RenderFn>,
}

impl RendererMap {
    /// Create a map with no overrides; every kind falls through to the
    /// built-in default renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install an override for one element kind.
    pub fn set<F>(&mut self, kind: ElementKind, render: F)
    where
        F: Fn(&Element) -> Result<String> + 'static,
    {
        self.overrides.insert(kind, Box::new(render));
    }

    /// Remove an override, restoring the default for that kind.
    pub fn reset(&mut self, kind: ElementKind) {
        self.overrides.remove(&kind);
    }

    /// Render one element, propagating failure to the caller.
    pub fn try_render_element(&self, element: &Element) -> Result<String> {
        match self.overrides.get(&element.kind) {
            Some(render) => render(element),
            None => default_render(element),
        }
    }

    /// Render one element at the render boundary.
    ///
    /// A failure becomes a visible inline placeholder; the surrounding page
    /// keeps rendering.
    pub fn render_element(&self, element: &Element) -> String {
        match self.try_render_element(element) {
            Ok(text) => text,
            Err(err) => {
                debug!(
                    "event=render_failure kind={} reason={err}",
                    element.kind.name()
                );
                format!("[render error: {err}]")
            }
        }
    }

    /// Render a whole body, elements separated by blank lines.
    pub fn render_body(&self, body: &Body) -> String {
        body.elements
            .iter()
            .map(|el| self.render_element(el))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

// =============================================================================
// Default renderer (catch-all)
// =============================================================================

/// Plain-text rendering for every element kind.
fn default_render(element: &Element) -> Result<String> {
    let out = match element.kind {
        ElementKind::Heading => format!("# {}", element.text),
        ElementKind::Paragraph => element.text.clone(),
        ElementKind::Code => element
            .text
            .lines()
            .map(|line| format!("    {line}"))
            .collect::<Vec<_>>()
            .join("\n"),
        ElementKind::Quote => element
            .text
            .lines()
            .map(|line| format!("> {line}"))
            .collect::<Vec<_>>()
            .join("\n"),
        ElementKind::Link => match &element.detail {
            Some(href) => format!("{} ({href})", element.text),
            None => element.text.clone(),
        },
        ElementKind::Divider => "─".repeat(DIVIDER_WIDTH),
    };
    Ok(out)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_heading_and_paragraph() {
        let renderers = RendererMap::new();
        assert_eq!(
            renderers.render_element(&Element::heading("Release notes")),
            "# Release notes"
        );
        assert_eq!(
            renderers.render_element(&Element::paragraph("Plain prose.")),
            "Plain prose."
        );
    }

    #[test]
    fn test_default_code_indents_lines() {
        let renderers = RendererMap::new();
        let out = renderers.render_element(&Element::code("let a = 1;\nlet b = 2;", "rust"));
        assert_eq!(out, "    let a = 1;\n    let b = 2;");
    }

    #[test]
    fn test_default_quote_and_divider() {
        let renderers = RendererMap::new();
        assert_eq!(
            renderers.render_element(&Element::quote("first\nsecond")),
            "> first\n> second"
        );
        let rule = renderers.render_element(&Element::divider());
        assert_eq!(rule.chars().count(), DIVIDER_WIDTH);
    }

    #[test]
    fn test_default_link_with_and_without_target() {
        let renderers = RendererMap::new();
        assert_eq!(
            renderers.render_element(&Element::link("the docs", "https://example.com")),
            "the docs (https://example.com)"
        );

        let bare = Element {
            detail: None,
            ..Element::link("the docs", "")
        };
        assert_eq!(renderers.render_element(&bare), "the docs");
    }

    #[test]
    fn test_override_dispatch() {
        let mut renderers = RendererMap::new();
        renderers.set(ElementKind::Heading, |el| Ok(el.text.to_uppercase()));

        assert_eq!(
            renderers.render_element(&Element::heading("quiet title")),
            "QUIET TITLE"
        );
        // Other kinds still use the default.
        assert_eq!(
            renderers.render_element(&Element::paragraph("unchanged")),
            "unchanged"
        );

        renderers.reset(ElementKind::Heading);
        assert_eq!(
            renderers.render_element(&Element::heading("quiet title")),
            "# quiet title"
        );
    }

    #[test]
    fn test_failure_becomes_inline_placeholder() {
        let mut renderers = RendererMap::new();
        renderers.set(ElementKind::Code, |el| {
            Err(Error::RenderFailure {
                element: el.kind.name().to_string(),
                reason: "highlighter unavailable".to_string(),
            })
        });

        let body = Body::from_elements(vec![
            Element::paragraph("before"),
            Element::code("let x = 1;", "rust"),
            Element::paragraph("after"),
        ]);

        let out = renderers.render_body(&body);
        assert!(out.starts_with("before\n\n"));
        assert!(out.ends_with("\n\nafter"));
        assert!(out.contains("[render error: failed to render code element"));
    }

    #[test]
    fn test_try_render_propagates_failure() {
        let mut renderers = RendererMap::new();
        renderers.set(ElementKind::Quote, |_| {
            Err(Error::RenderFailure {
                element: "quote".to_string(),
                reason: "boom".to_string(),
            })
        });

        let err = renderers
            .try_render_element(&Element::quote("q"))
            .unwrap_err();
        assert!(matches!(err, Error::RenderFailure { .. }));
    }

    #[test]
    fn test_render_body_joins_elements() {
        let renderers = RendererMap::new();
        let body = Body::from_elements(vec![
            Element::heading("Title"),
            Element::paragraph("One."),
            Element::paragraph("Two."),
        ]);
        assert_eq!(renderers.render_body(&body), "# Title\n\nOne.\n\nTwo.");
    }

    #[test]
    fn test_empty_body_renders_empty() {
        let renderers = RendererMap::new();
        assert_eq!(renderers.render_body(&Body::default()), "");
    }
}
