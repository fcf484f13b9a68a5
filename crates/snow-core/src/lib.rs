pub mod bridge;
pub mod config;
pub mod constants;
pub mod engine;
pub mod intensity;
pub mod particle;
pub mod pool;
pub mod scheduler;
pub mod surface;
pub mod window;

pub use bridge::*;
pub use config::*;
pub use engine::*;
pub use intensity::*;
pub use particle::*;
pub use pool::*;
pub use scheduler::*;
pub use surface::*;
pub use window::*;
