//! Section/card grouping for content pages

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{ContentType, VariousContent};

/// Section name lifted out of the groups as the page banner
pub const BANNER_SECTION: &str = "banner";

/// A `section` row with the cards filed under it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionGroup {
    pub section: VariousContent,
    pub cards: Vec<VariousContent>,
}

/// View model of one content page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    pub page: String,
    pub banner: Option<VariousContent>,
    pub sections: Vec<SectionGroup>,
}

impl PageContent {
    /// Empty view, served when the page rows could not be read
    pub fn empty(page: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            banner: None,
            sections: Vec::new(),
        }
    }

    /// Build the page view from its flat rows
    pub fn build(page: impl Into<String>, rows: Vec<VariousContent>) -> Self {
        let mut sections = group_sections(rows);
        let banner = sections
            .iter()
            .position(|g| g.section.section_name == BANNER_SECTION)
            .map(|i| sections.remove(i).section);
        Self {
            page: page.into(),
            banner,
            sections,
        }
    }
}

/// Partition rows into sections and cards and file each card under the
/// section named by its `parent_section` attribute.
///
/// Sections and the cards of each section come out sorted by
/// `display_order`. Cards without a matching section are dropped, and rows of
/// any other content type are ignored.
pub fn group_sections(rows: Vec<VariousContent>) -> Vec<SectionGroup> {
    let mut sections = Vec::new();
    let mut cards_by_parent: HashMap<String, Vec<VariousContent>> = HashMap::new();

    for row in rows {
        match row.kind() {
            Some(ContentType::Section) => sections.push(row),
            Some(ContentType::Card) => {
                if let Some(parent) = row.parent_section() {
                    cards_by_parent
                        .entry(parent.to_string())
                        .or_default()
                        .push(row);
                }
            }
            None => {
                tracing::debug!(
                    id = row.id,
                    content_type = %row.content_type,
                    "Skipping content row with unknown type"
                );
            }
        }
    }

    for cards in cards_by_parent.values_mut() {
        cards.sort_by_key(|c| c.display_order);
    }
    sections.sort_by_key(|s| s.display_order);

    sections
        .into_iter()
        .map(|section| {
            let cards = cards_by_parent
                .get(&section.section_name)
                .cloned()
                .unwrap_or_default();
            SectionGroup { section, cards }
        })
        .collect()
}
