//! Site structure: pages, navigation trees, location and contact info

use serde::{Deserialize, Serialize};

use crate::models::Zone;

/// Content-backed pages of the public site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SitePage {
    Intro,
    Location,
    Tour,
    Room,
    Facilities,
    Guide,
    Special,
    Contact,
}

impl SitePage {
    pub const ALL: [SitePage; 8] = [
        SitePage::Intro,
        SitePage::Location,
        SitePage::Tour,
        SitePage::Room,
        SitePage::Facilities,
        SitePage::Guide,
        SitePage::Special,
        SitePage::Contact,
    ];

    /// Parse a page name, case-insensitive (`Contact` and `contact` both work)
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.page_name().eq_ignore_ascii_case(s.trim()))
    }

    /// `page_name` value of this page's content rows
    pub fn page_name(&self) -> &'static str {
        match self {
            SitePage::Intro => "intro",
            SitePage::Location => "location",
            SitePage::Tour => "tour",
            SitePage::Room => "room",
            SitePage::Facilities => "facilities",
            SitePage::Guide => "guide",
            SitePage::Special => "special",
            SitePage::Contact => "contact",
        }
    }

    /// Front-end route of this page
    pub fn path(&self) -> &'static str {
        match self {
            SitePage::Intro => "/intro",
            SitePage::Location => "/location",
            SitePage::Tour => "/tour",
            SitePage::Room => "/room/a",
            SitePage::Facilities => "/facilities",
            SitePage::Guide => "/guide",
            SitePage::Special => "/special",
            SitePage::Contact => "/Contact",
        }
    }
}

/// One navigation entry, optionally with nested entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<NavItem>) -> Self {
        self.children = children;
        self
    }
}

/// `/room/<zone>`
pub fn room_zone_path(zone: Zone) -> String {
    format!("/room/{}", zone.slug())
}

/// `/room/<zone>/<id>`
pub fn room_detail_path(zone: Zone, room_id: &str) -> String {
    format!("/room/{}/{}", zone.slug(), room_id)
}

/// Public header navigation
pub fn public_navigation() -> Vec<NavItem> {
    let rooms = Zone::ALL
        .into_iter()
        .map(|z| NavItem::new(format!("Zone {z}"), room_zone_path(z)))
        .collect();

    vec![
        NavItem::new("Intro", SitePage::Intro.path()),
        NavItem::new("Location", SitePage::Location.path()),
        NavItem::new("Tour", SitePage::Tour.path()),
        NavItem::new("Rooms", SitePage::Room.path()).with_children(rooms),
        NavItem::new("Facilities", SitePage::Facilities.path()),
        NavItem::new("Guide", SitePage::Guide.path()),
        NavItem::new("Special", SitePage::Special.path()),
        NavItem::new("Contact", SitePage::Contact.path()),
    ]
}

/// Admin side navigation (CMS management routes)
pub fn admin_navigation() -> Vec<NavItem> {
    vec![
        NavItem::new("Dashboard", "/admin"),
        NavItem::new("Rooms", "/admin/rooms"),
        NavItem::new("Room Contents", "/admin/room-contents"),
        NavItem::new("Page Contents", "/admin/contents").with_children(
            SitePage::ALL
                .into_iter()
                .filter(|p| *p != SitePage::Room)
                .map(|p| {
                    NavItem::new(
                        p.page_name(),
                        format!("/admin/contents/{}", p.page_name()),
                    )
                })
                .collect(),
        ),
        NavItem::new("Reservations", "/admin/reservations"),
    ]
}

/// Map widget configuration for the location page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    /// Info-window label
    pub label: String,
}

/// Contact page details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}
