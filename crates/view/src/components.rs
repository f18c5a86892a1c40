// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Display node types
//!
//! Nodes serialize the way the FastUI front end expects them: a `type` tag,
//! camelCase field names and no `null` fields.

use serde::{Deserialize, Serialize};

/// A single display node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Component {
    /// Sets the document title
    PageTitle(PageTitle),
    /// Top navigation bar
    Navbar(Navbar),
    /// Container for child nodes
    Div(Div),
    /// Section heading
    Heading(Heading),
    /// Image element
    Image(Image),
    /// Inline text, used for badges
    Span(Span),
    /// Block of text
    Paragraph(Paragraph),
}

/// Event fired by interactive nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AnyEvent {
    /// Client-side navigation
    #[serde(rename = "go-to")]
    GoTo {
        /// Target path
        url: String,
    },
}

/// Document title node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTitle {
    /// Title text
    pub text: String,
}

/// Navigation bar node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navbar {
    /// Brand text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Event fired when the brand is clicked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_event: Option<AnyEvent>,
    /// Links on the left side
    #[serde(default)]
    pub start_links: Vec<Component>,
    /// Links on the right side
    #[serde(default)]
    pub end_links: Vec<Component>,
}

/// Container node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Div {
    /// Child nodes
    pub components: Vec<Component>,
    /// CSS classes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

/// Heading node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading text
    pub text: String,
    /// Heading level, 1 to 6
    pub level: u8,
}

/// Image node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Image URL
    pub src: String,
    /// Alternative text
    pub alt: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Inline text node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    /// Text content
    pub text: String,
    /// CSS classes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

/// Paragraph node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    /// Text content
    pub text: String,
    /// CSS classes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl Component {
    /// `PageTitle` node
    pub fn page_title(text: impl Into<String>) -> Self {
        Self::PageTitle(PageTitle { text: text.into() })
    }

    /// `Navbar` with a brand title and an optional click target
    pub fn navbar(title: impl Into<String>, go_to: Option<&str>) -> Self {
        Self::Navbar(Navbar {
            title: Some(title.into()),
            title_event: go_to.map(|url| AnyEvent::GoTo {
                url: url.to_string(),
            }),
            start_links: Vec::new(),
            end_links: Vec::new(),
        })
    }

    /// `Div` holding `components`
    pub fn div(components: Vec<Component>, class_name: &str) -> Self {
        Self::Div(Div {
            components,
            class_name: Some(class_name.to_string()),
        })
    }

    /// `Heading` node
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Self::Heading(Heading {
            text: text.into(),
            level,
        })
    }

    /// `Image` node with fixed dimensions
    pub fn image(src: impl Into<String>, alt: impl Into<String>, width: u32, height: u32) -> Self {
        Self::Image(Image {
            src: src.into(),
            alt: alt.into(),
            width,
            height,
        })
    }

    /// `Span` node
    pub fn span(text: impl Into<String>, class_name: &str) -> Self {
        Self::Span(Span {
            text: text.into(),
            class_name: Some(class_name.to_string()),
        })
    }

    /// `Paragraph` node without styling
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph(Paragraph {
            text: text.into(),
            class_name: None,
        })
    }
}
