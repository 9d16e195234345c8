pub mod clock;
pub mod date;
pub mod state;

pub use clock::FixedTimestep;
pub use state::{ScaleMode, SimulationState, ViewPreset, SPEED_PRESETS};
