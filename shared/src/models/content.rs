//! Page content model (`cube45_various_contents`)
//!
//! Each site page is authored as a flat list of rows. `section` rows are group
//! headings; `card` rows name their section through the `parent_section` key of
//! `extra_attributes`.

use serde::{Deserialize, Serialize};

/// Attribute key a card uses to name its parent section
pub const PARENT_SECTION_KEY: &str = "parent_section";

/// Row kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Section,
    Card,
}

impl ContentType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "section" => Some(ContentType::Section),
            "card" => Some(ContentType::Card),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Section => "section",
            ContentType::Card => "card",
        }
    }
}

/// Content row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct VariousContent {
    pub id: i64,
    pub page_name: String,
    pub section_name: String,
    /// `section` or `card`
    pub content_type: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub extra_attributes: Option<serde_json::Value>,
}

impl VariousContent {
    pub fn kind(&self) -> Option<ContentType> {
        ContentType::parse(&self.content_type)
    }

    /// Section name a card is filed under, if it declares one
    pub fn parent_section(&self) -> Option<&str> {
        self.extra_attributes
            .as_ref()?
            .get(PARENT_SECTION_KEY)?
            .as_str()
    }
}
