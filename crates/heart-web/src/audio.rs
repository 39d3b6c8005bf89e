use heart_core::{
    average_byte_frequency, FrequencySampler, PlaybackElement, StageError, StageResult,
    ANALYSER_FFT_SIZE,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Analyser tap on the page's `<audio>` element. Built on the first user
/// gesture, since browsers refuse to start an `AudioContext` before one.
pub struct AudioGraph {
    _ctx: web::AudioContext,
    _source: web::MediaElementAudioSourceNode,
    pub analyser: web::AnalyserNode,
}

pub type SharedGraph = Rc<RefCell<Option<AudioGraph>>>;

pub fn build_audio_graph(audio: &web::HtmlMediaElement) -> anyhow::Result<AudioGraph> {
    let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("AudioContext: {:?}", e))?;
    let source = ctx
        .create_media_element_source(audio)
        .map_err(|e| anyhow::anyhow!("media source: {:?}", e))?;
    let analyser = ctx
        .create_analyser()
        .map_err(|e| anyhow::anyhow!("analyser: {:?}", e))?;
    analyser.set_fft_size(ANALYSER_FFT_SIZE);
    source
        .connect_with_audio_node(&analyser)
        .map_err(|e| anyhow::anyhow!("connect source: {:?}", e))?;
    analyser
        .connect_with_audio_node(&ctx.destination())
        .map_err(|e| anyhow::anyhow!("connect analyser: {:?}", e))?;
    _ = ctx.resume();
    Ok(AudioGraph {
        _ctx: ctx,
        _source: source,
        analyser,
    })
}

/// Build the graph once; later gestures reuse it.
pub fn ensure_audio_graph(slot: &SharedGraph, audio: &web::HtmlMediaElement) {
    if slot.borrow().is_some() {
        return;
    }
    match build_audio_graph(audio) {
        Ok(g) => {
            log::info!("[audio] analyser ready ({} bins)", g.analyser.frequency_bin_count());
            *slot.borrow_mut() = Some(g);
        }
        Err(e) => log::error!("[audio] {e:#}"),
    }
}

pub struct AnalyserSampler {
    graph: SharedGraph,
    bins: Vec<u8>,
}

impl AnalyserSampler {
    pub fn new(graph: SharedGraph) -> Self {
        Self {
            graph,
            bins: Vec::new(),
        }
    }
}

impl FrequencySampler for AnalyserSampler {
    fn average_frequency(&mut self) -> StageResult<f32> {
        let graph = self.graph.borrow();
        let g = graph.as_ref().ok_or(StageError::SamplerUnavailable)?;
        let n = g.analyser.frequency_bin_count() as usize;
        if self.bins.len() != n {
            self.bins.resize(n, 0);
        }
        g.analyser.get_byte_frequency_data(&mut self.bins);
        Ok(average_byte_frequency(&self.bins))
    }
}

pub struct MediaPlayback {
    el: web::HtmlMediaElement,
}

impl MediaPlayback {
    pub fn new(el: web::HtmlMediaElement) -> Self {
        Self { el }
    }
}

fn host_err(e: wasm_bindgen::JsValue) -> StageError {
    StageError::Host(format!("{:?}", e))
}

impl PlaybackElement for MediaPlayback {
    fn is_playing(&self) -> StageResult<bool> {
        Ok(!self.el.paused())
    }

    fn play(&mut self) -> StageResult<()> {
        let promise = self.el.play().map_err(host_err)?;
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] play rejected: {:?}", e);
            }
        });
        Ok(())
    }

    fn pause(&mut self) -> StageResult<()> {
        self.el.pause().map_err(host_err)
    }

    fn volume(&self) -> f32 {
        self.el.volume() as f32
    }

    fn set_volume(&mut self, volume: f32) {
        self.el.set_volume(volume.clamp(0.0, 1.0) as f64);
    }

    fn seek(&mut self, seconds: f64) {
        self.el.set_current_time(seconds);
    }

    fn current_time(&self) -> f64 {
        self.el.current_time()
    }

    fn duration(&self) -> f64 {
        self.el.duration()
    }
}
