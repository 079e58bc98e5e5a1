//! Export - source text the user can copy out of the gallery

mod codegen;

pub use codegen::generate_code;
