// JS-facing handle for the animated particle background. Owns the frame loop
// and the window listeners it needs (resize, unload, easter egg keys).

use crate::canvas::CanvasSurface;
use crate::color::Color;
use crate::config::FieldConfig;
use crate::easter_egg::KeySequence;
use crate::field::ParticleField;
use crate::raf::{FrameCallback, RafScheduler};
use crate::scheduler::AnimationLoop;
use crate::surface::Surface;
use crate::Timer;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Event, KeyboardEvent, Window};

type CanvasLoop = AnimationLoop<CanvasSurface, RafScheduler>;

struct Listener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

#[wasm_bindgen]
pub struct ParticleCanvas {
    window: Window,
    animation: Rc<RefCell<CanvasLoop>>,
    // Keeps the frame closure alive for as long as the loop may call it
    _frame_callback: FrameCallback,
    profiling: Rc<Cell<bool>>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl ParticleCanvas {
    // Starts the default 50 particle background on the canvas with the given id.
    // Returns None, without scheduling anything, when there is no such canvas
    // or it has no 2d context.
    pub fn start(canvas_id: &str) -> Result<Option<ParticleCanvas>, JsValue> {
        ParticleCanvas::start_with_count(canvas_id, FieldConfig::DEFAULT_PARTICLE_COUNT)
    }

    pub fn start_with_count(
        canvas_id: &str,
        particle_count: usize,
    ) -> Result<Option<ParticleCanvas>, JsValue> {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return Ok(None),
        };
        let surface = match CanvasSurface::from_element_id(canvas_id) {
            Some(surface) => surface,
            None => return Ok(None),
        };
        fit_to_window(&window, &surface);

        let config = FieldConfig::with_particle_count(particle_count);
        if config.exceeds_link_budget() {
            console::warn_1(
                &format!(
                    "{} particles means {} connection checks per frame",
                    config.particle_count,
                    config.link_pairs()
                )
                .into(),
            );
        }
        let field = ParticleField::initialize(config, surface.bounds(), &mut rand::thread_rng());

        let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
        let scheduler = RafScheduler::new(window.clone(), frame_callback.clone());
        let animation = Rc::new(RefCell::new(AnimationLoop::new(field, surface, scheduler)));
        let profiling = Rc::new(Cell::new(false));

        let weak = Rc::downgrade(&animation);
        let timed = profiling.clone();
        *frame_callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let _timer = if timed.get() {
                Some(Timer::new("ParticleCanvas::frame"))
            } else {
                None
            };
            with_loop(&weak, |animation| {
                animation.run_frame();
            });
        }) as Box<dyn FnMut()>));

        let mut canvas = ParticleCanvas {
            window,
            animation,
            _frame_callback: frame_callback,
            profiling,
            listeners: Vec::new(),
        };
        canvas.listen_for_resize()?;
        canvas.listen_for_unload()?;
        canvas.listen_for_rainbow()?;

        canvas.animation.borrow_mut().start();
        let count = canvas.particle_count();
        console::log_1(&format!("particle field running with {} particles", count).into());
        Ok(Some(canvas))
    }

    pub fn stop(&self) {
        if let Ok(mut animation) = self.animation.try_borrow_mut() {
            if animation.is_running() {
                animation.stop();
                console::log_1(&"particle field stopped".into());
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.animation.borrow().is_running()
    }

    pub fn particle_count(&self) -> usize {
        self.animation.borrow().field().len()
    }

    // Times every frame in the browser console
    pub fn set_profiling(&self, enabled: bool) {
        self.profiling.set(enabled);
    }

    pub fn rainbow(&self) {
        with_loop(&Rc::downgrade(&self.animation), recolor);
    }
}

impl ParticleCanvas {
    pub fn colors(&self) -> Vec<Color> {
        self.animation
            .borrow()
            .field()
            .particles()
            .iter()
            .map(|p| p.color)
            .collect()
    }

    fn listen_for_resize(&mut self) -> Result<(), JsValue> {
        let weak = Rc::downgrade(&self.animation);
        let window = self.window.clone();
        self.listen("resize", move |_| {
            with_loop(&weak, |animation| fit_to_window(&window, animation.surface_mut()));
        })
    }

    // The pending frame must not fire against a page being torn down
    fn listen_for_unload(&mut self) -> Result<(), JsValue> {
        let weak = Rc::downgrade(&self.animation);
        self.listen("beforeunload", move |_| {
            with_loop(&weak, |animation| animation.stop());
        })
    }

    fn listen_for_rainbow(&mut self) -> Result<(), JsValue> {
        let weak = Rc::downgrade(&self.animation);
        let mut sequence = KeySequence::rainbow();
        self.listen("keydown", move |event| {
            let key = match event.dyn_ref::<KeyboardEvent>() {
                Some(event) => event.key(),
                None => return,
            };
            if sequence.push(&key) {
                with_loop(&weak, recolor);
                console::log_1(&"Easter egg activated! Rainbow particles!".into());
            }
        })
    }

    fn listen<F>(&mut self, event: &'static str, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        self.window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        self.listeners.push(Listener { event, callback });
        Ok(())
    }
}

impl Drop for ParticleCanvas {
    fn drop(&mut self) {
        self.stop();
        for listener in self.listeners.drain(..) {
            self.window
                .remove_event_listener_with_callback(
                    listener.event,
                    listener.callback.as_ref().unchecked_ref(),
                )
                .ok();
        }
    }
}

// Runs f against the loop if it is still alive and not already borrowed
fn with_loop<F: FnOnce(&mut CanvasLoop)>(weak: &Weak<RefCell<CanvasLoop>>, f: F) {
    if let Some(animation) = weak.upgrade() {
        if let Ok(mut animation) = animation.try_borrow_mut() {
            f(&mut animation);
        }
    }
}

fn recolor(animation: &mut CanvasLoop) {
    animation.field_mut().recolor_rainbow(&mut rand::thread_rng());
}

// Resizing only moves the reflection bounds; particles keep their positions
fn fit_to_window(window: &Window, surface: &CanvasSurface) {
    let width = window.inner_width().ok().and_then(|w| w.as_f64());
    let height = window.inner_height().ok().and_then(|h| h.as_f64());
    if let (Some(width), Some(height)) = (width, height) {
        surface.resize(width as u32, height as u32);
    }
}
