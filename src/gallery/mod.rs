//! Gallery UI - sidebar, viewer, controls and the code modal
//!
//! Components own no domain logic: they read [`crate::state::Selection`],
//! forward raw widget values to it and push resolved scenes to the surface.

mod clipboard;
mod code_modal;
mod controls;
mod page;
mod sidebar;
pub mod surface;
mod viewer;

pub use code_modal::CodeModal;
pub use controls::Controls;
pub use page::{GalleryPage, Home, Model};
pub use sidebar::Sidebar;
pub use viewer::Viewer;
