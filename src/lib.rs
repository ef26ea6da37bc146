pub mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod network;
pub mod particle;
pub mod pointer;
pub mod renderer;
pub mod surface;
pub mod utils;
pub mod web;

use wasm_bindgen::prelude::*;

pub use animation::{run, FrameClock, ManualClock, StopHandle};
pub use color::Color;
pub use config::NetworkConfig;
pub use error::NetworkError;
pub use network::{connection_opacity, Connection, ParticleNetwork};
pub use particle::Particle;
pub use pointer::PointerTracker;
pub use surface::{DrawCommand, FixedViewport, RecordingSurface, Surface, Viewport};
pub use web::{start_particle_network, start_particle_network_with_config, ParticleNetworkHandle};

// Use `wee_alloc` as the global allocator when the feature is on.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}
