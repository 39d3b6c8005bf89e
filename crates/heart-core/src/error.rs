use thiserror::Error;

use crate::phase::PlaybackPhase;

/// Assets the stage can wait on. Loading itself happens outside the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Asset {
    HeartModel,
    Matcap,
    ParticleTexture,
    Music,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StageError {
    /// No frequency data yet (audio graph not built or not loaded).
    #[error("frequency sampler unavailable")]
    SamplerUnavailable,
    /// The playback element could not report its state.
    #[error("playback state unavailable: {0}")]
    PlaybackSignalMissing(String),
    #[error("failed to load {asset:?}: {reason}")]
    AssetLoad { asset: Asset, reason: String },
    #[error("start requested while {0:?}")]
    NotIdle(PlaybackPhase),
    #[error("render failed: {0}")]
    Render(String),
    #[error("host error: {0}")]
    Host(String),
}

pub type StageResult<T> = Result<T, StageError>;
