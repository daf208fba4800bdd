//! # ArtPad WASM Application
//!
//! Mounts the ArtPad menu and drawing screens into a page and wires mouse
//! input to the drawing model.
//!
//! ## Usage
//!
//! Build for WASM:
//! ```bash
//! wasm-pack build --target web artpad-app
//! ```
//!
//! Then import in JavaScript:
//! ```javascript
//! import init, { ArtPadApp } from './pkg/artpad_app.js';
//!
//! await init();
//! const app = new ArtPadApp('root', JSON.stringify({ logLevel: 'debug' }));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod controller;
pub mod error;
pub mod options;
mod shell;
pub mod surface;
pub mod ui;

use std::{cell::RefCell, rc::Rc};

use artpad_core::{Mode, Point, PointerEvent, PointerPhase, Route, Router};
use artpad_renderer::Renderer;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Event, EventTarget, HtmlCanvasElement, MouseEvent, Window};

pub use error::{AppError, AppResult};
pub use options::AppOptions;
pub use surface::ContextSurface;

use controller::Controller;
use shell::Shell;

type ControllerHandle = Rc<RefCell<Controller>>;

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init_wasm() {
    console_error_panic_hook::set_once();
}

fn init_logging(level: log::Level) {
    if console_log::init_with_level(level).is_err() {
        // Already installed by an earlier app instance; just retune.
        log::set_max_level(level.to_level_filter());
    }
}

/// A DOM listener that is removed again when dropped.
struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> AppResult<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| AppError::dom(&format!("Failed to listen for {event}"), &e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            tracing::debug!("Failed to remove {} listener: {:?}", self.event, e);
        }
    }
}

/// Run `f` against the controller unless another handler holds it.
fn with_controller(handle: &ControllerHandle, f: impl FnOnce(&mut Controller)) {
    match handle.try_borrow_mut() {
        Ok(mut controller) => f(&mut controller),
        Err(_) => tracing::debug!("Controller busy, dropping event"),
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn surface_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    Point::from_client(
        event.client_x() as f32,
        event.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
    )
}

fn push_history(window: &Window, route: Route) {
    let pushed = window
        .history()
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(route.path())));
    if let Err(e) = pushed {
        tracing::warn!("Failed to push {}: {:?}", route.path(), e);
    }
}

fn current_path(window: &Window) -> String {
    window
        .location()
        .pathname()
        .unwrap_or_else(|_| Route::Menu.path().to_string())
}

/// The ArtPad application mounted in a page.
#[wasm_bindgen]
pub struct ArtPadApp {
    handle: ControllerHandle,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl ArtPadApp {
    /// Mount the app inside the element with id `root_id`.
    ///
    /// `options_json` is an optional JSON object, see [`AppOptions`].
    ///
    /// # Errors
    ///
    /// Returns an error if the root element is missing or the options are
    /// invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(root_id: &str, options_json: Option<String>) -> Result<ArtPadApp, JsValue> {
        Ok(Self::mount(root_id, options_json.as_deref())?)
    }

    /// Switch the drawing mode by name; unknown names select the default mode.
    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&self, name: &str) {
        let mode = Mode::from_name(name);
        with_controller(&self.handle, |c| c.set_mode(mode));
    }

    /// Clear every stroke and stamp.
    pub fn clear(&self) {
        with_controller(&self.handle, Controller::clear);
    }

    /// Open the drawing screen.
    pub fn play(&self) {
        self.go(Route::Play);
    }

    /// Return to the menu, discarding the drawing.
    pub fn back(&self) {
        self.go(Route::Menu);
    }

    /// Name of the active mode, or `undefined` on the menu.
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn mode(&self) -> Option<String> {
        self.handle
            .try_borrow()
            .ok()?
            .router
            .session()
            .map(|state| state.mode().name().to_string())
    }

    /// Path of the current screen.
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn route(&self) -> String {
        self.handle
            .try_borrow()
            .map(|c| c.router.route().path().to_string())
            .unwrap_or_default()
    }

    /// Number of recorded strokes.
    #[wasm_bindgen(js_name = strokeCount)]
    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.handle
            .try_borrow()
            .ok()
            .and_then(|c| c.router.session().map(|s| s.scene().stroke_count()))
            .unwrap_or(0)
    }

    /// Number of placed stamps.
    #[wasm_bindgen(js_name = stampCount)]
    #[must_use]
    pub fn stamp_count(&self) -> usize {
        self.handle
            .try_borrow()
            .ok()
            .and_then(|c| c.router.session().map(|s| s.scene().stamp_count()))
            .unwrap_or(0)
    }

    /// Number of full redraws so far.
    #[wasm_bindgen(js_name = frameCount)]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.handle
            .try_borrow()
            .map(|c| c.frame_count())
            .unwrap_or(0)
    }

    /// Snapshot of the current drawing as JSON, for debugging.
    ///
    /// # Errors
    ///
    /// Returns an error when no drawing screen is open.
    #[wasm_bindgen(js_name = sceneJson)]
    pub fn scene_json(&self) -> Result<String, JsValue> {
        let controller = self
            .handle
            .try_borrow()
            .map_err(|_| JsValue::from_str("App is busy"))?;
        let state = controller
            .router
            .session()
            .ok_or_else(|| JsValue::from_str("No drawing open"))?;
        Ok(state.scene().to_json().map_err(AppError::from)?)
    }
}

impl ArtPadApp {
    /// Build the page and attach every listener.
    ///
    /// # Errors
    ///
    /// Returns an error if the DOM cannot be built or the options are invalid.
    pub fn mount(root_id: &str, options_json: Option<&str>) -> AppResult<Self> {
        let options = AppOptions::from_json(options_json)?;
        init_logging(options.level()?);

        let window = web_sys::window().ok_or_else(|| AppError::Dom("No window object".into()))?;
        let document = window
            .document()
            .ok_or_else(|| AppError::Dom("No document object".into()))?;
        let root = document
            .get_element_by_id(root_id)
            .ok_or_else(|| AppError::Dom(format!("Root element '{root_id}' not found")))?;

        let shell = Shell::build(&document, root)?;
        let surface = match ContextSurface::attach(&shell.canvas) {
            Ok(surface) => Some(surface),
            Err(err) => {
                tracing::warn!("Drawing will not be painted: {err}");
                None
            }
        };

        let router = Router::at_path(&current_path(&window));
        let renderer = Renderer::new(options.renderer_config());
        let handle = Rc::new(RefCell::new(Controller::new(
            router, renderer, surface, shell,
        )));

        let listeners = Self::wire(&window, &handle)?;
        tracing::info!(
            "ArtPad mounted in #{root_id} with {} listeners",
            listeners.len()
        );

        Ok(Self { handle, listeners })
    }

    fn go(&self, route: Route) {
        let mut changed = false;
        with_controller(&self.handle, |c| changed = c.navigate(route));
        if changed {
            if let Some(window) = web_sys::window() {
                push_history(&window, route);
            }
        }
    }

    fn wire(window: &Window, handle: &ControllerHandle) -> AppResult<Vec<Listener>> {
        let controller = handle.borrow();
        let shell = &controller.shell;
        let mut listeners = Vec::new();

        let nav = |route: Route| {
            let handle = Rc::clone(handle);
            let window = window.clone();
            move |event: Event| {
                event.prevent_default();
                let mut changed = false;
                with_controller(&handle, |c| changed = c.navigate(route));
                if changed {
                    push_history(&window, route);
                }
            }
        };
        listeners.push(Listener::attach(&shell.play_link, "click", nav(Route::Play))?);
        listeners.push(Listener::attach(&shell.back_button, "click", nav(Route::Menu))?);

        {
            let handle = Rc::clone(handle);
            let window_for_path = window.clone();
            listeners.push(Listener::attach(window, "popstate", move |_| {
                let route = Route::from_path(&current_path(&window_for_path));
                with_controller(&handle, |c| {
                    c.navigate(route);
                });
            })?);
        }

        for (mode, button) in &shell.mode_buttons {
            let handle = Rc::clone(handle);
            let mode = *mode;
            listeners.push(Listener::attach(button, "click", move |_| {
                with_controller(&handle, |c| c.set_mode(mode));
            })?);
        }

        {
            let handle = Rc::clone(handle);
            listeners.push(Listener::attach(&shell.clear_button, "click", move |_| {
                with_controller(&handle, Controller::clear);
            })?);
        }

        for event_type in ["mousedown", "mousemove", "mouseup", "mouseout", "click"] {
            let Some(phase) = PointerPhase::from_dom_event(event_type) else {
                continue;
            };
            let handle = Rc::clone(handle);
            let canvas = shell.canvas.clone();
            listeners.push(Listener::attach(&shell.canvas, event_type, move |event| {
                let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let pointer = PointerEvent::new(phase, surface_point(&canvas, mouse));
                with_controller(&handle, |c| c.pointer(&pointer));
            })?);
        }

        Ok(listeners)
    }
}

impl Drop for ArtPadApp {
    fn drop(&mut self) {
        self.listeners.clear();
        if let Ok(controller) = self.handle.try_borrow() {
            controller.shell.unmount();
        }
    }
}
