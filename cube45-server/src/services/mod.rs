//! Service layer between handlers and repositories

pub mod pages;
pub mod reservations;
pub mod room_detail;
