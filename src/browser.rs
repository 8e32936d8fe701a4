// Browser side glue: the overlay canvas, requestAnimationFrame scheduling,
// and mouse event wiring

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, MouseEvent, Window};

use crate::error::TrackerError;
use crate::frame::{FrameDriver, Scheduler};

pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

// Canvas is a touch taller than the window so the trail reaches the bottom edge
const HEIGHT_SCALE: f64 = 1.01;

pub fn window() -> Result<Window, TrackerError> {
    web_sys::window().ok_or(TrackerError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, TrackerError> {
    window.document().ok_or(TrackerError::NoDocument)
}

// Full window canvas laid over the page, ignoring pointer events so the page
// underneath stays usable
pub fn create_overlay_canvas(
    window: &Window,
    document: &Document,
) -> Result<HtmlCanvasElement, TrackerError> {
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| TrackerError::NotACanvas)?;

    let style = canvas.style();
    style.set_property("overflow", "hidden")?;
    style.set_property("z-index", "100")?;
    style.set_property("position", "absolute")?;
    style.set_property("pointer-events", "none")?;
    style.set_property("padding", "0")?;
    style.set_property("margin", "0")?;

    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0) * HEIGHT_SCALE;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    document
        .body()
        .ok_or(TrackerError::NoBody)?
        .append_child(&canvas)?;
    Ok(canvas)
}

// Schedules the shared frame callback with requestAnimationFrame and keeps
// the id of the request still in flight
pub struct AnimationFrameScheduler {
    window: Window,
    callback: FrameCallback,
    pending: Option<i32>,
}

impl AnimationFrameScheduler {
    pub fn new(window: Window, callback: FrameCallback) -> Self {
        AnimationFrameScheduler {
            window,
            callback,
            pending: None,
        }
    }
}

impl Scheduler for AnimationFrameScheduler {
    fn schedule_next_tick(&mut self) {
        if let Some(callback) = self.callback.borrow().as_ref() {
            match self
                .window
                .request_animation_frame(callback.as_ref().unchecked_ref())
            {
                Ok(id) => self.pending = Some(id),
                Err(err) => crate::console_error!("requestAnimationFrame failed: {:?}", err),
            }
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                crate::console_error!("cancelAnimationFrame failed: {:?}", err);
            }
        }
    }
}

// Mouse handlers live as long as the page, so their closures are leaked
pub fn wire_pointer_events(window: &Window, driver: Rc<RefCell<FrameDriver>>) {
    let on_move = {
        let driver = driver.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            driver.borrow_mut().on_pointer_move(
                event.client_x() as f64,
                event.client_y() as f64,
                event.movement_x() as f64,
                event.movement_y() as f64,
            );
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    window.set_onmousemove(Some(on_move.as_ref().unchecked_ref()));
    on_move.forget();

    let on_out = Closure::wrap(Box::new(move || {
        driver.borrow_mut().on_pointer_leave();
    }) as Box<dyn FnMut()>);
    window.set_onmouseout(Some(on_out.as_ref().unchecked_ref()));
    on_out.forget();
}
