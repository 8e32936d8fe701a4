#[macro_use]
mod utils;

mod browser;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod motion;
pub mod particle;
pub mod pointer;
mod renderer;
pub mod surface;
mod webgl_helpers;

use std::cell::RefCell;
use std::convert::TryFrom;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::browser::{AnimationFrameScheduler, FrameCallback};
use crate::config::TrackerConfig;
use crate::error::TrackerError;
use crate::frame::FrameDriver;
use crate::motion::MotionMode;
use crate::renderer::Renderer;
use crate::surface::Surface;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Handle returned to the page, used to change settings while the trail runs
#[wasm_bindgen]
pub struct MouseTracker {
    driver: Rc<RefCell<FrameDriver>>,
}

#[wasm_bindgen]
impl MouseTracker {
    #[wasm_bindgen(getter = particleCount)]
    pub fn particle_count(&self) -> u32 {
        self.driver.borrow().particles().len() as u32
    }

    #[wasm_bindgen(getter = motionMode)]
    pub fn motion_mode(&self) -> u32 {
        self.driver.borrow().config().motion_mode().index()
    }

    #[wasm_bindgen(js_name = setMotionMode)]
    pub fn set_motion_mode(&self, index: u32) -> Result<(), JsValue> {
        let mode = MotionMode::try_from(index).map_err(|err| {
            console_error!("setMotionMode: {}", err);
            JsValue::from(err)
        })?;
        self.driver.borrow_mut().set_motion_mode(mode);
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn sluggish(&self) -> bool {
        self.driver.borrow().config().sluggish()
    }

    #[wasm_bindgen(js_name = setSluggish)]
    pub fn set_sluggish(&self, sluggish: bool) {
        self.driver.borrow_mut().set_sluggish(sluggish);
    }

    // Completed frames since start
    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> f64 {
        self.driver.borrow().frames() as f64
    }
}

#[wasm_bindgen(js_name = initMouseTracker)]
pub fn init_mouse_tracker() -> Result<MouseTracker, JsValue> {
    init_mouse_tracker_with_config(TrackerConfig::default())
}

#[wasm_bindgen(js_name = initMouseTrackerWithConfig)]
pub fn init_mouse_tracker_with_config(config: TrackerConfig) -> Result<MouseTracker, JsValue> {
    utils::set_panic_hook();
    start(config).map_err(|err| {
        console_error!("initMouseTracker: {}", err);
        JsValue::from(err)
    })
}

fn start(config: TrackerConfig) -> Result<MouseTracker, TrackerError> {
    let window = browser::window()?;
    let document = browser::document(&window)?;
    let canvas = browser::create_overlay_canvas(&window, &document)?;
    console_log!("particle canvas {}x{}", canvas.width(), canvas.height());

    let mut renderer = Renderer::new(&canvas)?;
    let surface = Surface::new(canvas.width() as f64, canvas.height() as f64);
    let driver = Rc::new(RefCell::new(FrameDriver::new(config, surface)));
    for particle in driver.borrow().particles() {
        console_log!("{:?}", particle);
    }

    browser::wire_pointer_events(&window, driver.clone());

    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let mut scheduler = AnimationFrameScheduler::new(window, callback.clone());
    let frame_driver = driver.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_driver
            .borrow_mut()
            .run_frame(&mut renderer, &mut scheduler);
    }) as Box<dyn FnMut()>));

    // First frame runs right away, later ones come from requestAnimationFrame
    if let Some(first_frame) = callback.borrow().as_ref() {
        first_frame
            .as_ref()
            .unchecked_ref::<js_sys::Function>()
            .call0(&JsValue::NULL)?;
    }

    Ok(MouseTracker { driver })
}
