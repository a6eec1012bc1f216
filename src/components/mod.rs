//! The components module contains all shared components for our app.

mod app;
mod audio_manager;
mod cards;
mod folder_loader;
mod icons;
mod player;
mod sidebar;
mod track_list;

pub use app::*;
pub use audio_manager::*;
pub use cards::*;
pub use folder_loader::*;
pub use icons::*;
pub use player::*;
pub use sidebar::*;
pub use track_list::*;
