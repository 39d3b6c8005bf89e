#![cfg(target_arch = "wasm32")]
mod audio;
mod constants;
mod dom;
mod events;
mod frame;

use crate::audio::{AnalyserSampler, MediaPlayback, SharedGraph};
use crate::constants::*;
use crate::dom::{query, sync_canvas_backing_size, viewport_size, ButtonTrigger, CaptionElement};
use crate::events::{wire_all, EventWiring};
use crate::frame::{start_loop, JsRenderSurface};
use heart_core::particles::{flatten, seed_heart_particles, seed_snow_particles};
use heart_core::{
    AnimationLoop, Asset, InputEvent, InputPort, StageIo, StageParams, HEART_PARTICLE_COUNT,
    SNOW_PARTICLE_COUNT,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-web loaded");
    Ok(())
}

/// Handle returned to the page so its asset loaders can report back.
#[wasm_bindgen]
pub struct StageHandle {
    port: InputPort,
}

#[wasm_bindgen]
impl StageHandle {
    pub fn asset_ready(&self, name: &str) -> Result<(), JsValue> {
        let asset = asset_from_name(name)?;
        self.port.send(InputEvent::AssetReady(asset));
        Ok(())
    }

    pub fn asset_failed(&self, name: &str, reason: String) -> Result<(), JsValue> {
        let asset = asset_from_name(name)?;
        self.port.send(InputEvent::AssetFailed { asset, reason });
        Ok(())
    }

    pub fn load_progress(&self, loaded: f64, total: f64) {
        self.port.send(InputEvent::LoadProgress { loaded, total });
    }
}

fn asset_from_name(name: &str) -> Result<Asset, JsValue> {
    match name {
        "heart_model" | "model" => Ok(Asset::HeartModel),
        "matcap" => Ok(Asset::Matcap),
        "particle_texture" | "texture" => Ok(Asset::ParticleTexture),
        "music" => Ok(Asset::Music),
        other => Err(JsValue::from_str(&format!("unknown asset '{other}'"))),
    }
}

/// Wire the stage to the page and start the frame loop. `render` is called
/// once per animation frame with the packed uniform block.
#[wasm_bindgen]
pub fn mount(render: js_sys::Function) -> Result<StageHandle, JsValue> {
    init(render).map_err(|e| {
        log::error!("init error: {e:#}");
        JsValue::from_str(&format!("{e:#}"))
    })
}

fn init(render: js_sys::Function) -> anyhow::Result<StageHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = query(&document, CANVAS_SELECTOR)?;
    sync_canvas_backing_size(&canvas);
    let trigger: web::HtmlButtonElement = query(&document, TRIGGER_SELECTOR)?;
    let audio: web::HtmlMediaElement = query(&document, AUDIO_SELECTOR)?;
    let caption = document
        .get_element_by_id(CAPTION_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CAPTION_ID}"))?;
    let script = caption
        .get_attribute(CAPTION_SCRIPT_ATTR)
        .unwrap_or_else(|| DEFAULT_CAPTION.to_string());

    let graph: SharedGraph = Rc::new(RefCell::new(None));
    let io = StageIo {
        sampler: Box::new(AnalyserSampler::new(graph.clone())),
        playback: Box::new(MediaPlayback::new(audio.clone())),
        trigger: Box::new(ButtonTrigger::new(trigger)),
        surface: Box::new(JsRenderSurface::new(render)),
        caption: Box::new(CaptionElement::new(&document, caption)),
    };
    let stage = AnimationLoop::new(StageParams::default(), io, viewport_size(), &script);
    let port = stage.input_port();

    wire_all(&EventWiring {
        window,
        document,
        canvas,
        audio,
        graph,
        port: port.clone(),
    });

    log::info!("stage mounted");
    start_loop(Rc::new(RefCell::new(stage)), Instant::now());
    Ok(StageHandle { port })
}

/// Per-instance attributes for the heart particle cloud, seven floats each.
#[wasm_bindgen]
pub fn heart_particle_attributes(seed: u32) -> Vec<f32> {
    flatten(&seed_heart_particles(HEART_PARTICLE_COUNT, seed as u64)).to_vec()
}

#[wasm_bindgen]
pub fn snow_particle_attributes(seed: u32) -> Vec<f32> {
    flatten(&seed_snow_particles(SNOW_PARTICLE_COUNT, seed as u64)).to_vec()
}
