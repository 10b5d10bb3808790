//! Visual theme: color palette and global styles.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
