//! Browser glue: DOM mouse/wheel events into [`InputEvent`]s.
//!
//! [`attach_listeners`] wires a canvas to a shared [`Viewer`]. The host's
//! `requestAnimationFrame` callback keeps calling
//! [`Viewer::frame`](crate::viewer::Viewer::frame) on the same
//! `Rc<RefCell<Viewer>>`; listeners and the frame callback run on the one
//! JS thread and never overlap.

use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    AddEventListenerOptions, Event, HtmlCanvasElement, MouseEvent, WheelEvent,
};

use super::event::{InputEvent, MouseButton};
use crate::{error::ViewerError, viewer::Viewer};

/// Legacy `wheelDelta` units per wheel notch.
const NOTCH: f64 = 120.0;
/// Pixels per notch reported by most browsers in pixel mode.
const PIXELS_PER_NOTCH: f64 = 100.0;
/// Lines per notch in line mode (Firefox).
const LINES_PER_NOTCH: f64 = 3.0;

type Handler = Closure<dyn FnMut(Event)>;

/// Route `log` output to the browser console and panics to
/// `console.error`. Call once at startup.
///
/// # Errors
///
/// [`ViewerError::Web`] if a logger is already installed.
pub fn init_logging(level: log::Level) -> Result<(), ViewerError> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(level)
        .map_err(|e| ViewerError::Web(e.to_string()))
}

/// Look up a canvas element by id.
///
/// # Errors
///
/// [`ViewerError::Web`] if there is no such element or it is not a canvas.
pub fn canvas_by_id(id: &str) -> Result<HtmlCanvasElement, ViewerError> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .ok_or_else(|| ViewerError::Web(format!("no element with id '{id}'")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| ViewerError::Web(format!("element '{id}' is not a canvas")))
}

/// Match the canvas backing store to its displayed size (the default is
/// 300x150) and return that size.
pub fn fit_canvas_to_display(canvas: &HtmlCanvasElement) -> (u32, u32) {
    let width = canvas.client_width().max(0) as u32;
    let height = canvas.client_height().max(0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    (width, height)
}

/// Convert a DOM mouse event of the given type (`"mousedown"`,
/// `"mousemove"`, `"mouseup"`) into canvas-relative pointer input.
#[must_use]
pub fn pointer_event(kind: &str, event: &MouseEvent) -> Option<InputEvent> {
    let x = event.offset_x() as f32;
    let y = event.offset_y() as f32;
    let button = MouseButton::from_dom_button(event.button());
    match kind {
        "mousedown" => Some(InputEvent::PointerDown { x, y, button }),
        "mousemove" => Some(InputEvent::PointerMove { x, y }),
        "mouseup" => Some(InputEvent::PointerUp { x, y, button }),
        _ => None,
    }
}

/// Wheel delta in legacy `wheelDelta` units: one notch ≈ 120, positive
/// when scrolling up (zoom in).
#[must_use]
pub fn wheel_delta(event: &WheelEvent) -> f32 {
    let notches = match event.delta_mode() {
        WheelEvent::DOM_DELTA_LINE => event.delta_y() / LINES_PER_NOTCH,
        WheelEvent::DOM_DELTA_PAGE => event.delta_y(),
        _ => event.delta_y() / PIXELS_PER_NOTCH,
    };
    (-notches * NOTCH) as f32
}

/// Registered canvas listeners. Dropping this removes them.
pub struct Listeners {
    canvas: HtmlCanvasElement,
    handlers: Vec<(&'static str, Handler)>,
}

impl Drop for Listeners {
    fn drop(&mut self) {
        for (kind, handler) in &self.handlers {
            let _ = self.canvas.remove_event_listener_with_callback(
                kind,
                handler.as_ref().unchecked_ref(),
            );
        }
        log::debug!("removed {} canvas listeners", self.handlers.len());
    }
}

fn forward(viewer: &Rc<RefCell<Viewer>>, input: InputEvent) {
    match viewer.try_borrow_mut() {
        Ok(mut viewer) => {
            if let Some(click) = viewer.handle_event(input) {
                log::debug!("canvas click {:?}", click);
            }
        }
        Err(_) => log::warn!("viewer busy, dropped {input:?}"),
    }
}

fn mouse_handler(kind: &'static str, viewer: Rc<RefCell<Viewer>>) -> Handler {
    Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        if let Some(input) = pointer_event(kind, mouse) {
            forward(&viewer, input);
        }
        event.stop_propagation();
    })
}

fn wheel_handler(viewer: Rc<RefCell<Viewer>>) -> Handler {
    Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
            return;
        };
        forward(&viewer, InputEvent::Wheel { delta: wheel_delta(wheel) });
        event.prevent_default();
        event.stop_propagation();
    })
}

/// Register mouse, wheel and context-menu listeners on `canvas` that feed
/// `viewer`. The right button pans, so the context menu is suppressed.
///
/// # Errors
///
/// [`ViewerError::Web`] if the browser rejects a listener.
pub fn attach_listeners(
    canvas: &HtmlCanvasElement,
    viewer: &Rc<RefCell<Viewer>>,
) -> Result<Listeners, ViewerError> {
    let mut listeners = Listeners {
        canvas: canvas.clone(),
        handlers: Vec::new(),
    };

    for kind in ["mousedown", "mousemove", "mouseup"] {
        let handler = mouse_handler(kind, Rc::clone(viewer));
        canvas
            .add_event_listener_with_callback(
                kind,
                handler.as_ref().unchecked_ref(),
            )
            .map_err(|e| ViewerError::Web(format!("{kind} listener: {e:?}")))?;
        listeners.handlers.push((kind, handler));
    }

    // Non-passive so the page does not scroll while zooming.
    let wheel = wheel_handler(Rc::clone(viewer));
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    canvas
        .add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            wheel.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| ViewerError::Web(format!("wheel listener: {e:?}")))?;
    listeners.handlers.push(("wheel", wheel));

    let context_menu =
        Closure::<dyn FnMut(Event)>::new(|event: Event| event.prevent_default());
    canvas
        .add_event_listener_with_callback(
            "contextmenu",
            context_menu.as_ref().unchecked_ref(),
        )
        .map_err(|e| ViewerError::Web(format!("contextmenu listener: {e:?}")))?;
    listeners.handlers.push(("contextmenu", context_menu));

    log::info!("attached {} canvas listeners", listeners.handlers.len());
    Ok(listeners)
}
