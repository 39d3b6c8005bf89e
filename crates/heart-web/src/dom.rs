use crate::constants::{BACKDROP_REVEALED_CLASS, BACKDROP_SELECTOR};
use heart_core::{CaptionSink, TriggerControl, TypewriterStep};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::debug!("[dom] no #{element_id}; click handler skipped");
    }
}

pub fn query<T: JsCast>(document: &web::Document, selector: &str) -> anyhow::Result<T> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("bad selector {selector}: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {selector}"))?
        .dyn_into::<T>()
        .map_err(|_| anyhow::anyhow!("{selector} has unexpected element type"))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(2.0);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Inner window size in CSS pixels; falls back to 1x1 so aspect stays finite.
pub fn viewport_size() -> [f32; 2] {
    let Some(w) = web::window() else {
        return [1.0, 1.0];
    };
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0).max(1.0) as f32
    };
    [px(w.inner_width()), px(w.inner_height())]
}

pub fn set_progress_width(document: &web::Document, id: &str, percent: u32) {
    if let Some(el) = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
    {
        let _ = el.style().set_property("width", &format!("{percent}%"));
    }
}

/// The start button shown over the stage.
pub struct ButtonTrigger {
    button: web::HtmlButtonElement,
}

impl ButtonTrigger {
    pub fn new(button: web::HtmlButtonElement) -> Self {
        Self { button }
    }
}

impl TriggerControl for ButtonTrigger {
    fn set_enabled(&mut self, enabled: bool) {
        self.button.set_disabled(!enabled);
    }

    fn set_opacity(&mut self, opacity: f32) {
        let _ = self
            .button
            .style()
            .set_property("opacity", &format!("{:.3}", opacity.clamp(0.0, 1.0)));
    }
}

pub struct CaptionElement {
    text: web::Element,
    backdrop: Option<web::Element>,
}

impl CaptionElement {
    pub fn new(document: &web::Document, text: web::Element) -> Self {
        let backdrop = document.query_selector(BACKDROP_SELECTOR).ok().flatten();
        if backdrop.is_none() {
            log::debug!("[caption] no {BACKDROP_SELECTOR}; reveal is a no-op");
        }
        Self { text, backdrop }
    }
}

impl CaptionSink for CaptionElement {
    fn apply(&mut self, step: TypewriterStep) {
        match step {
            TypewriterStep::Append(c) => {
                let mut buf = [0u8; 4];
                let _ = self.text.insert_adjacent_text("beforeend", c.encode_utf8(&mut buf));
            }
            TypewriterStep::LineBreak => {
                let _ = self.text.insert_adjacent_html("beforeend", "<br>");
            }
            TypewriterStep::Clear => self.text.set_inner_html(""),
            TypewriterStep::RevealBackdrop => {
                if let Some(bg) = &self.backdrop {
                    let _ = bg.class_list().add_1(BACKDROP_REVEALED_CLASS);
                }
            }
        }
    }
}
