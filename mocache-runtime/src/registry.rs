//! Update registry
//!
//! An explicit value the host's update loop owns instead of a global
//! singleton updater: controllers register for per-tick advancement and
//! unregister by handle. A failing controller is logged and skipped so
//! one bad entry cannot stall the others.

use tracing::warn;

use crate::error::PlaybackError;
use crate::player::MotionPlayer;
use crate::rig::{PoseSink, PoseSource};

/// Anything the registry can advance once per host tick.
pub trait Tick {
    fn tick(&mut self, dt: f32) -> Result<(), PlaybackError>;
}

/// A player bundled with the rig it records from and plays onto.
#[derive(Debug)]
pub struct MotionController<R> {
    pub player: MotionPlayer,
    pub rig: R,
}

impl<R> MotionController<R> {
    pub fn new(player: MotionPlayer, rig: R) -> Self {
        Self { player, rig }
    }
}

impl<R: PoseSource + PoseSink> Tick for MotionController<R> {
    fn tick(&mut self, dt: f32) -> Result<(), PlaybackError> {
        self.player.advance(dt, &mut self.rig)
    }
}

/// Opaque handle returned by [`UpdateRegistry::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerHandle(usize);

/// Collection of active controllers, advanced together once per tick.
#[derive(Default)]
pub struct UpdateRegistry {
    entries: Vec<Option<Box<dyn Tick>>>,
}

impl UpdateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a controller; freed slots are reused.
    pub fn add(&mut self, controller: Box<dyn Tick>) -> ControllerHandle {
        if let Some(slot) = self.entries.iter().position(Option::is_none) {
            self.entries[slot] = Some(controller);
            return ControllerHandle(slot);
        }
        self.entries.push(Some(controller));
        ControllerHandle(self.entries.len() - 1)
    }

    /// Unregister and return a controller; `None` for stale handles.
    pub fn remove(&mut self, handle: ControllerHandle) -> Option<Box<dyn Tick>> {
        self.entries.get_mut(handle.0)?.take()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Advance every live controller by `dt`. Per-entry failures are
    /// logged, not propagated.
    pub fn tick_all(&mut self, dt: f32) {
        for (slot, entry) in self.entries.iter_mut().enumerate() {
            if let Some(controller) = entry
                && let Err(error) = controller.tick(dt)
            {
                warn!(slot, %error, "controller tick failed");
            }
        }
    }
}
