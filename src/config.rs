// Tracker settings. The particle count is read once when the tracker starts,
// the motion mode and sluggish flag can be changed while it runs

use std::convert::TryFrom;
use wasm_bindgen::prelude::*;

use crate::error::TrackerError;
use crate::motion::MotionMode;

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    particle_count: u32,
    motion_mode: MotionMode,
    sluggish: bool,
}

#[wasm_bindgen]
impl TrackerConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> TrackerConfig {
        TrackerConfig::default()
    }

    #[wasm_bindgen(getter = particleCount)]
    pub fn particle_count(&self) -> u32 {
        self.particle_count
    }

    #[wasm_bindgen(setter = particleCount)]
    pub fn set_particle_count(&mut self, count: u32) {
        self.particle_count = count;
    }

    #[wasm_bindgen(getter = motionMode)]
    pub fn motion_mode_index(&self) -> u32 {
        self.motion_mode.index()
    }

    #[wasm_bindgen(js_name = setMotionMode)]
    pub fn set_motion_mode_index(&mut self, index: u32) -> Result<(), JsValue> {
        self.try_set_motion_mode(index).map_err(JsValue::from)
    }

    #[wasm_bindgen(getter)]
    pub fn sluggish(&self) -> bool {
        self.sluggish
    }

    #[wasm_bindgen(setter)]
    pub fn set_sluggish(&mut self, sluggish: bool) {
        self.sluggish = sluggish;
    }
}

impl TrackerConfig {
    pub const DEFAULT_PARTICLES: u32 = 10;

    pub fn motion_mode(&self) -> MotionMode {
        self.motion_mode
    }

    pub fn set_motion_mode(&mut self, mode: MotionMode) {
        self.motion_mode = mode;
    }

    // Out of range indices leave the current mode in place
    pub fn try_set_motion_mode(&mut self, index: u32) -> Result<(), TrackerError> {
        self.motion_mode = MotionMode::try_from(index)?;
        Ok(())
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            particle_count: TrackerConfig::DEFAULT_PARTICLES,
            motion_mode: MotionMode::Follow,
            sluggish: false,
        }
    }
}
