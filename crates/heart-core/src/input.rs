//! Host inputs, queued by event handlers and applied at frame boundaries.

use std::sync::mpsc::{Receiver, Sender};

use smallvec::SmallVec;

use crate::constants::PARALLAX_RANGE;
use crate::error::Asset;
use crate::transport::TransportCommand;

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    Resize { width: f32, height: f32 },
    /// Pointer position in client pixels.
    PointerMove { x: f32, y: f32 },
    StartRequested,
    Transport(TransportCommand),
    MediaTimeUpdate { current_time: f64 },
    LoadProgress { loaded: f64, total: f64 },
    AssetReady(Asset),
    AssetFailed { asset: Asset, reason: String },
}

/// Cloneable sending half handed to event handlers.
#[derive(Clone, Debug)]
pub struct InputPort {
    tx: Sender<InputEvent>,
}

impl InputPort {
    pub(crate) fn new(tx: Sender<InputEvent>) -> Self {
        Self { tx }
    }

    pub fn send(&self, ev: InputEvent) {
        if self.tx.send(ev).is_err() {
            log::warn!("[input] stage dropped; event discarded");
        }
    }
}

/// Pull everything queued since the last frame.
pub(crate) fn drain(rx: &Receiver<InputEvent>) -> SmallVec<[InputEvent; 8]> {
    rx.try_iter().collect()
}

/// Linear remap of `v` from `[in_min, in_max]` to `[out_min, out_max]`,
/// unclamped.
#[inline]
pub fn map_range(in_min: f32, in_max: f32, out_min: f32, out_max: f32, v: f32) -> f32 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    out_min + (v - in_min) / span * (out_max - out_min)
}

/// Camera x/y offset for a pointer position. The y term maps the negated
/// client y, so it sits in `[0.2, 0.6]` across the viewport.
#[inline]
pub fn parallax_offset(x: f32, y: f32, width: f32, height: f32) -> [f32; 2] {
    let [near, far] = PARALLAX_RANGE;
    [
        map_range(0.0, width, near, far, x),
        map_range(0.0, height, near, far, -y),
    ]
}
