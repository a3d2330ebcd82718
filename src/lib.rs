// Library crate root.
//
// This crate is used both as a binary (src/main.rs) and as a library.
// Keeping modules here prevents "dead_code" warnings for public APIs that are
// intentionally exported for downstream crates.

pub mod v2;
pub mod mat3;
pub mod scene;
pub mod params;
pub mod desc;
pub mod error;
pub mod mesh;
pub mod im;
pub mod raster;
pub mod debug_ui;

pub use mat3::Mat3;
pub use v2::Vec2;

#[cfg(test)]
pub mod test_helpers;
