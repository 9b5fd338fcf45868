//! Page and room content shaping
//!
//! Pure functions over rows already read from the store: grouping page rows
//! into sections with cards, resolving a room's sections against its zone
//! defaults, picking gallery images, and the carousel index used to page
//! through them.

pub mod carousel;
pub mod gallery;
pub mod grouping;
pub mod merge;

pub use carousel::{Carousel, CarouselView};
pub use gallery::{GALLERY_SECTIONS, gallery_images};
pub use grouping::{BANNER_SECTION, PageContent, SectionGroup, group_sections};
pub use merge::{find_section, merge_room_contents};
