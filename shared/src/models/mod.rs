//! Data models
//!
//! Rows of the hosted site tables, shared between the server and the site
//! front-end (via API). DB row types use
//! `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.

pub mod content;
pub mod reservation;
pub mod room;
pub mod room_content;
pub mod zone;

// Re-exports
pub use content::*;
pub use reservation::*;
pub use room::*;
pub use room_content::*;
pub use zone::*;
