//! Record/playback state machine
//!
//! A fixed-timestep accumulator replays decoded frames at the clip's
//! frame rate regardless of the host's variable tick rate: a large dt
//! applies several frames in one tick (catch-up), a small dt applies
//! none. Recording ignores dt entirely; one tick captures one sample,
//! so the capture cadence is the host's tick cadence.

use mocache_codec::{CodecError, Frame};
use tracing::warn;

use crate::clip::MotionClip;
use crate::error::PlaybackError;
use crate::recorder::capture_frame;
use crate::rig::{PoseSink, PoseSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Recording,
    Playing,
}

/// Drives one clip against one rig.
#[derive(Debug, Default)]
pub struct MotionPlayer {
    clip: MotionClip,
    frame_rate: f32,
    state: PlayerState,
    cursor: usize,
    accumulator: f32,
}

/// Default playback/capture frame rate (frames per second)
pub const DEFAULT_FRAME_RATE: f32 = 30.0;

impl MotionPlayer {
    pub fn new(clip: MotionClip, frame_rate: f32) -> Self {
        Self {
            clip,
            frame_rate: if frame_rate > 0.0 {
                frame_rate
            } else {
                DEFAULT_FRAME_RATE
            },
            state: PlayerState::Idle,
            cursor: 0,
            accumulator: 0.0,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn clip(&self) -> &MotionClip {
        &self.clip
    }

    pub fn clip_mut(&mut self) -> &mut MotionClip {
        &mut self.clip
    }

    pub fn frame_rate(&self) -> f32 {
        self.frame_rate
    }

    /// Next frame to be applied while playing
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Begin a recording session, discarding the clip's frames.
    pub fn start_record(&mut self) {
        self.clip.clear();
        self.state = PlayerState::Recording;
    }

    /// End the recording session and compress the captured frames.
    ///
    /// Outside `Recording` this is a warned no-op.
    pub fn stop_record(&mut self) -> Result<(), CodecError> {
        if self.state != PlayerState::Recording {
            warn!(state = ?self.state, "stop_record called while not recording");
            return Ok(());
        }
        self.state = PlayerState::Idle;
        self.clip.compress()
    }

    /// Begin playback from frame 0.
    pub fn start_play(&mut self) {
        self.cursor = 0;
        self.accumulator = 0.0;
        self.state = PlayerState::Playing;
    }

    pub fn stop_play(&mut self) {
        if self.state == PlayerState::Playing {
            self.state = PlayerState::Idle;
        }
    }

    /// Advance the player by one host tick.
    ///
    /// Recording captures exactly one frame from `rig` per call.
    /// Playing applies zero or more frames to `rig` depending on the
    /// accumulated time, and falls back to `Idle` once the cursor
    /// passes the last frame.
    pub fn advance<R>(&mut self, dt: f32, rig: &mut R) -> Result<(), PlaybackError>
    where
        R: PoseSource + PoseSink,
    {
        match self.state {
            PlayerState::Idle => Ok(()),
            PlayerState::Recording => self.record_tick(rig),
            PlayerState::Playing => self.play_tick(dt, rig),
        }
    }

    fn record_tick<R: PoseSource>(&mut self, rig: &R) -> Result<(), PlaybackError> {
        // The object count is pinned by the first captured frame.
        let expected = self.clip.object_count();
        if self.clip.frame_count() > 0 && rig.object_count() != expected {
            return Err(PlaybackError::DimensionMismatch {
                expected,
                actual: rig.object_count(),
            });
        }
        self.clip.push_frame(capture_frame(rig));
        Ok(())
    }

    fn play_tick<R: PoseSink>(&mut self, dt: f32, rig: &mut R) -> Result<(), PlaybackError> {
        self.accumulator += dt;
        let frame_period = 1.0 / self.frame_rate;

        while self.state == PlayerState::Playing && self.accumulator >= frame_period {
            let Some(frame) = self.clip.frame(self.cursor) else {
                // Past the last frame: playback ends, no looping.
                self.state = PlayerState::Idle;
                break;
            };
            apply_frame(frame, rig)?;
            self.cursor += 1;
            self.accumulator -= frame_period;
        }
        Ok(())
    }
}

/// Write every pose of `frame` to the rig at matching indices.
fn apply_frame<R: PoseSink>(frame: &Frame, rig: &mut R) -> Result<(), PlaybackError> {
    if rig.object_count() != frame.object_count() {
        return Err(PlaybackError::DimensionMismatch {
            expected: frame.object_count(),
            actual: rig.object_count(),
        });
    }
    for index in 0..frame.object_count() {
        let Some(pose) = frame.pose(index) else {
            break;
        };
        rig.set_pose(index, pose);
    }
    Ok(())
}
