use heart_core::{AnimationLoop, FrameState, PlaybackPhase, RenderSurface, StageError, StageResult};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Hands each frame to the page's renderer as
/// `render(uniforms: Float32Array, modelVisible: bool, phase: string)`.
pub struct JsRenderSurface {
    callback: js_sys::Function,
}

impl JsRenderSurface {
    pub fn new(callback: js_sys::Function) -> Self {
        Self { callback }
    }
}

fn phase_label(phase: PlaybackPhase) -> &'static str {
    match phase {
        PlaybackPhase::Idle => "idle",
        PlaybackPhase::Running => "running",
        PlaybackPhase::JustFinished => "finished",
    }
}

impl RenderSurface for JsRenderSurface {
    fn render(&mut self, frame: &FrameState) -> StageResult<()> {
        let uniforms = js_sys::Float32Array::from(frame.uniforms.as_f32_slice());
        self.callback
            .call3(
                &JsValue::NULL,
                &uniforms,
                &JsValue::from_bool(frame.model_visible),
                &JsValue::from_str(phase_label(frame.phase)),
            )
            .map(|_| ())
            .map_err(|e| StageError::Render(format!("{:?}", e)))
    }
}

pub fn start_loop(stage: Rc<RefCell<AnimationLoop>>, clock_origin: Instant) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        stage.borrow_mut().tick(clock_origin.elapsed().as_secs_f64());
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    let slot = tick.borrow();
    if let Some(cb) = slot.as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame: {:?}", e);
        }
    }
}
