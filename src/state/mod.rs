//! State - what the user has picked and edited
//!
//! - `Selection` → active model, live material parameters, view epoch
//! - `CopyFeedback` → generation-tokened "copied" flag
//! - `SidebarFilter` → name search and category restriction
//!
//! All of it is plain data mutated on the UI thread; components hold it in
//! signals and hand read-only views to the resolver and code generator.

mod copy;
mod filter;
mod params;
mod selection;

pub use copy::CopyFeedback;
pub use filter::{CategoryFilter, SidebarFilter, display_index};
pub use params::{MaterialParams, ParamUpdate};
pub use selection::Selection;
