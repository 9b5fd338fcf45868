//! Room detail resolution: room rows over zone-default rows

use std::collections::HashMap;

use crate::models::RoomContent;

/// Merge a room's own rows with its zone defaults.
///
/// The result holds one entry per section name. A room row always replaces
/// the zone default of the same name; within each source the first row (in
/// input order) wins. Output is sorted by `display_order`, ties by section
/// name.
pub fn merge_room_contents(
    room_rows: Vec<RoomContent>,
    zone_rows: Vec<RoomContent>,
) -> Vec<RoomContent> {
    let mut by_section: HashMap<String, RoomContent> = HashMap::new();

    for row in room_rows.into_iter().chain(zone_rows) {
        by_section.entry(row.section_name.clone()).or_insert(row);
    }

    let mut merged: Vec<RoomContent> = by_section.into_values().collect();
    merged.sort_by(|a, b| {
        a.display_order
            .cmp(&b.display_order)
            .then_with(|| a.section_name.cmp(&b.section_name))
    });
    merged
}

/// Look up one section of a merged set by name
pub fn find_section<'a>(sections: &'a [RoomContent], name: &str) -> Option<&'a RoomContent> {
    sections.iter().find(|s| s.section_name == name)
}
