pub mod catalog;
pub mod color;
pub mod config;
pub mod events;
pub mod input;
pub mod orbit;
pub mod render;
pub mod sim;
pub mod viewport;

// Re-export key types at crate root for convenience
pub use catalog::{
    BodyDetail, BodyKind, Catalog, CatalogError, CatalogWarning, CelestialBody, DetailStore,
    SelectedBody,
};
pub use color::Color;
pub use config::VizConfig;
pub use events::ViewerEvent;
pub use input::{InputEvent, InputQueue};
pub use render::{DrawCmd, DrawList, FrameGeometry, RenderLoop, ScreenRect};
pub use sim::{FixedTimestep, ScaleMode, SimulationState, ViewPreset, SPEED_PRESETS};
pub use viewport::ViewportController;
