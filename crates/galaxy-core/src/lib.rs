pub mod axes;
pub mod color;
pub mod constants;
pub mod error;
pub mod galaxy;
pub mod orbit;
pub mod params;
pub mod scene;
pub mod state;
pub mod viewport;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use axes::*;
pub use color::*;
pub use constants::*;
pub use error::*;
pub use galaxy::*;
pub use orbit::*;
pub use params::*;
pub use scene::*;
pub use state::*;
pub use viewport::*;
