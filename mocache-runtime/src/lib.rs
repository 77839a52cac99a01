//! Capture and playback runtime for MoCache clips
//!
//! Sits between a host application and the clip codec:
//!
//! - [`rig`] - Pose source/sink traits the host implements for its
//!   scene objects; the runtime never touches scene-graph state
//! - [`clip`] - The clip asset: in-memory frames plus the compressed
//!   blob, bridged by explicit compress/decompress
//! - [`recorder`] - One-sample-per-tick frame capture
//! - [`player`] - Record/play state machine with a fixed-timestep
//!   accumulator decoupling playback rate from the host tick rate
//! - [`registry`] - Explicit update registry the host loop owns,
//!   advancing every live controller once per tick

mod clip;
mod error;
mod player;
mod recorder;
mod registry;
mod rig;

pub use clip::MotionClip;
pub use error::PlaybackError;
pub use player::{DEFAULT_FRAME_RATE, MotionPlayer, PlayerState};
pub use recorder::capture_frame;
pub use registry::{ControllerHandle, MotionController, Tick, UpdateRegistry};
pub use rig::{PoseSink, PoseSource};

// Re-export the codec types callers handle directly
pub use mocache_codec::{CodecError, Frame, Pose};
