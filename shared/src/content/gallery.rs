//! Room gallery assembly

use crate::models::RoomContent;

/// Gallery slots probed on a room, in display order
pub const GALLERY_SECTIONS: [&str; 5] = [
    "gallery_1",
    "gallery_2",
    "gallery_3",
    "gallery_4",
    "gallery_5",
];

/// Collect gallery images from merged room sections.
///
/// Each existing `gallery_N` section contributes its `image_url`, or its
/// `content` when no image is set. Blank slots are skipped. Falls back to the
/// single `default_image` when nothing is found.
pub fn gallery_images(sections: &[RoomContent], default_image: &str) -> Vec<String> {
    let images: Vec<String> = GALLERY_SECTIONS
        .iter()
        .filter_map(|slot| sections.iter().find(|s| s.section_name == *slot))
        .filter_map(|s| {
            s.image_url
                .as_deref()
                .filter(|u| !u.trim().is_empty())
                .or_else(|| Some(s.content.as_str()).filter(|c| !c.trim().is_empty()))
                .map(str::to_string)
        })
        .collect();

    if images.is_empty() {
        vec![default_image.to_string()]
    } else {
        images
    }
}
