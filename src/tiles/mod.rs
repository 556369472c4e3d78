pub mod constants;
pub mod grid;
pub mod types;

// Re-export commonly used items
pub use constants::*;
pub use grid::TileGrid;
pub use types::{TileKind, TilePos};
