// Browser glue: finds the canvas, hooks window resize and mouse move, and drives
// the network with requestAnimationFrame.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use crate::animation::{self, FrameCallback, FrameClock, StopHandle};
use crate::config::NetworkConfig;
use crate::log;
use crate::network::ParticleNetwork;
use crate::renderer::CanvasRenderer;
use crate::surface::Viewport;

pub struct WindowViewport {
    window: Window,
}

impl Viewport for WindowViewport {
    fn size(&self) -> (u32, u32) {
        let dimension = |value: Result<JsValue, JsValue>| {
            value
                .ok()
                .and_then(|v| v.as_f64())
                .map(|v| v.max(0.0) as u32)
                .unwrap_or(0)
        };
        (
            dimension(self.window.inner_width()),
            dimension(self.window.inner_height()),
        )
    }
}

pub struct AnimationFrameClock {
    window: Window,
}

impl FrameClock for AnimationFrameClock {
    fn request_frame(&self, callback: FrameCallback) {
        let closure = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        if let Err(e) = self
            .window
            .request_animation_frame(closure.unchecked_ref::<js_sys::Function>())
        {
            log!("particle network: requestAnimationFrame failed: {:?}", e);
        }
    }
}

#[wasm_bindgen]
pub struct ParticleNetworkHandle {
    stop: StopHandle,
}

#[wasm_bindgen]
impl ParticleNetworkHandle {
    /// Stops the animation after the current frame.
    pub fn stop(&self) {
        if !self.stop.is_stopped() {
            log!("particle network: stopped");
        }
        self.stop.stop();
    }

    pub fn is_running(&self) -> bool {
        !self.stop.is_stopped()
    }
}

/// Starts a network with the default config on the canvas with id `canvas_id`.
/// Returns `undefined` if there is no such canvas.
#[wasm_bindgen]
pub fn start_particle_network(canvas_id: &str) -> Result<Option<ParticleNetworkHandle>, JsValue> {
    start_particle_network_with_config(canvas_id, &NetworkConfig::default())
}

#[wasm_bindgen]
pub fn start_particle_network_with_config(
    canvas_id: &str,
    config: &NetworkConfig,
) -> Result<Option<ParticleNetworkHandle>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas = match document.get_element_by_id(canvas_id) {
        Some(el) => match el.dyn_into::<HtmlCanvasElement>() {
            Ok(canvas) => Some(canvas),
            Err(_) => {
                log!("particle network: #{} is not a canvas", canvas_id);
                None
            }
        },
        None => {
            log!("particle network: no element #{}", canvas_id);
            None
        }
    };
    let surface = canvas.map(CanvasRenderer::new).transpose()?;

    let network = ParticleNetwork::initialize(
        surface,
        Box::new(WindowViewport {
            window: window.clone(),
        }),
        config.clone(),
        StdRng::from_entropy(),
    )?;
    let network = match network {
        Some(network) => Rc::new(RefCell::new(network)),
        None => return Ok(None),
    };
    log!(
        "particle network: started with {} particles",
        network.borrow().particles().len()
    );

    {
        let network = network.clone();
        let closure = Closure::wrap(Box::new(move || {
            let mut network = network.borrow_mut();
            network.resize();
            let canvas = &network.surface().canvas;
            log!("particle network: resized to {}x{}", canvas.width(), canvas.height());
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let pointer = network.borrow().pointer();
        let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
            pointer.moved(evt.client_x() as f64, evt.client_y() as f64);
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Pointer left the window: stop attracting toward a stale position
    {
        let pointer = network.borrow().pointer();
        let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
            if evt.related_target().is_none() {
                pointer.clear();
            }
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback("mouseout", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let clock = Rc::new(AnimationFrameClock { window });
    let stop = animation::run(network, clock);
    Ok(Some(ParticleNetworkHandle { stop }))
}
