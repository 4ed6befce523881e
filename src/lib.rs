pub mod camera;
pub mod cli;
pub mod frame;
pub mod math;
pub mod mesh;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod types;
pub mod window;

pub use scenes::{create_furnished_scene, create_simple_scene};
