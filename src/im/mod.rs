pub mod core;
pub use self::core::{Im, RGBAIm};

// Optional extras
// -----------------------------------------------------------------------------

#[cfg(feature = "im-io")]
pub mod io;
