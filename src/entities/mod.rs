pub mod input;
pub mod spawning;
pub mod systems;
pub mod types;

pub use input::InputTracker;
pub use spawning::*;
pub use systems::*;
pub use types::*;
