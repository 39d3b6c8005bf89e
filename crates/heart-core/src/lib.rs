pub mod clock;
pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod input;
pub mod intensity;
pub mod orbit;
pub mod particles;
pub mod phase;
pub mod state;
pub mod transport;
pub mod tween;
pub mod typewriter;
pub mod uniforms;

pub use clock::{DeltaMode, TimeState};
pub use config::{ClockRates, OrbitParams, StageParams};
pub use constants::*;
pub use driver::{AnimationLoop, RenderSurface, StageIo, TriggerControl};
pub use error::{Asset, StageError, StageResult};
pub use input::{InputEvent, InputPort};
pub use intensity::{average_byte_frequency, intensity_from_average, FrequencySampler};
pub use orbit::{orbit_position, CameraOrbitDriver, OrbitAngle, OrbitPosition};
pub use phase::{PhaseTransition, PlaybackPhase, PlaybackPhaseController};
pub use state::{Camera, FrameState, FrameUniforms};
pub use transport::{progress_percent, PlaybackElement, Transport, TransportCommand};
pub use typewriter::{CaptionSink, Typewriter, TypewriterStep};
pub use uniforms::{ShaderClocks, UniformTimeAdvancer};
