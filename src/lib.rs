mod utils;

pub mod app;
pub mod canvas;
pub mod color;
pub mod config;
pub mod easter_egg;
pub mod field;
pub mod particle;
pub mod raf;
pub mod scheduler;
pub mod score;
pub mod surface;

use wasm_bindgen::prelude::*;
use web_sys::console;

pub use app::ParticleCanvas;
pub use config::FieldConfig;
pub use field::{Connection, ParticleField};
pub use particle::Particle;
pub use scheduler::{AnimationLoop, FrameHandle, FrameScheduler, LoopState};
pub use score::{ScoreBoard, ScoreManager, Scores};
pub use surface::{Bounds, Surface};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}
