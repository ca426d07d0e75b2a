pub mod assets;
pub mod mod_writer;
pub mod skeleton;

pub use assets::{AssetFailure, AssetKind};
pub use mod_writer::*;
