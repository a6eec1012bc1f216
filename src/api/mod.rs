//! Wire models and the HTTP side of the player: folder metadata, directory
//! listings, and the parser that turns listings into tracks.

pub mod listing;
pub mod models;
pub mod source;

pub use models::*;
pub use source::{HttpLibrary, LibrarySource};
