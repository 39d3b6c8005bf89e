//! Browser listeners. Each one only translates a DOM event into an
//! `InputEvent` and posts it; the animation loop applies them at frame start.

use crate::audio::{ensure_audio_graph, SharedGraph};
use crate::constants::{MUTE_ID, OPENING_SCREEN_ID, PLAY_PAUSE_ID, PROGRESS_ID, STOP_ID};
use crate::dom::{add_click_listener, set_progress_width, sync_canvas_backing_size, viewport_size};
use heart_core::{progress_percent, Asset, InputEvent, InputPort, TransportCommand};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct EventWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub audio: web::HtmlMediaElement,
    pub graph: SharedGraph,
    pub port: InputPort,
}

pub fn wire_all(w: &EventWiring) {
    wire_resize(w);
    wire_pointer(w);
    wire_gesture(w);
    wire_transport(w);
    wire_media(w);
}

fn listen<E: JsCast + 'static>(
    target: &web::EventTarget,
    name: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref()) {
        log::warn!("[events] {name} listener: {:?}", e);
    }
    closure.forget();
}

fn wire_resize(w: &EventWiring) {
    let port = w.port.clone();
    let canvas = w.canvas.clone();
    listen::<web::Event>(&w.window, "resize", move |_| {
        sync_canvas_backing_size(&canvas);
        let [width, height] = viewport_size();
        port.send(InputEvent::Resize { width, height });
    });
}

fn wire_pointer(w: &EventWiring) {
    let port = w.port.clone();
    listen::<web::MouseEvent>(&w.window, "mousemove", move |ev| {
        port.send(InputEvent::PointerMove {
            x: ev.client_x() as f32,
            y: ev.client_y() as f32,
        });
    });
}

fn wire_gesture(w: &EventWiring) {
    let port = w.port.clone();
    let graph = w.graph.clone();
    let audio = w.audio.clone();
    // The audio graph has to be created inside the gesture handler itself.
    add_click_listener(&w.document, OPENING_SCREEN_ID, move || {
        ensure_audio_graph(&graph, &audio);
        port.send(InputEvent::StartRequested);
    });
}

fn wire_transport(w: &EventWiring) {
    for (id, cmd) in [
        (PLAY_PAUSE_ID, TransportCommand::TogglePlayPause),
        (STOP_ID, TransportCommand::Stop),
        (MUTE_ID, TransportCommand::ToggleMute),
    ] {
        let port = w.port.clone();
        add_click_listener(&w.document, id, move || {
            port.send(InputEvent::Transport(cmd));
        });
    }
}

fn wire_media(w: &EventWiring) {
    {
        let port = w.port.clone();
        let audio = w.audio.clone();
        let document = w.document.clone();
        listen::<web::Event>(&w.audio, "timeupdate", move |_| {
            let t = audio.current_time();
            set_progress_width(&document, PROGRESS_ID, progress_percent(t, audio.duration()));
            port.send(InputEvent::MediaTimeUpdate { current_time: t });
        });
    }
    {
        let port = w.port.clone();
        let audio = w.audio.clone();
        listen::<web::Event>(&w.audio, "error", move |_| {
            let reason = audio
                .error()
                .map(|e| format!("media error code {}", e.code()))
                .unwrap_or_else(|| "unknown media error".to_string());
            port.send(InputEvent::AssetFailed {
                asset: Asset::Music,
                reason,
            });
        });
    }
    {
        let port = w.port.clone();
        listen::<web::Event>(&w.audio, "canplaythrough", move |_| {
            port.send(InputEvent::AssetReady(Asset::Music));
        });
    }
}
