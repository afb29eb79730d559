// Frame loop state machine. The loop draws one tick per display frame and
// re-registers itself until stopped.

use crate::field::ParticleField;
use crate::surface::Surface;

/// Registration returned by a frame scheduler, needed to cancel it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

pub trait FrameScheduler {
    /// Ask for the loop's frame callback to run on the next display frame.
    /// `None` means the request could not be registered.
    fn schedule_next_frame(&mut self) -> Option<FrameHandle>;

    fn cancel(&mut self, handle: FrameHandle);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

pub struct AnimationLoop<S, F> {
    field: ParticleField,
    surface: S,
    scheduler: F,
    state: LoopState,
    pending: Option<FrameHandle>,
}

impl<S: Surface, F: FrameScheduler> AnimationLoop<S, F> {
    pub fn new(field: ParticleField, surface: S, scheduler: F) -> Self {
        AnimationLoop {
            field,
            surface,
            scheduler,
            state: LoopState::Stopped,
            pending: None,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.pending = self.scheduler.schedule_next_frame();
        self.state = self.state_for_pending();
    }

    // Called by the scheduler's callback. Returns whether a tick ran.
    pub fn run_frame(&mut self) -> bool {
        self.pending = None;
        if !self.is_running() {
            return false;
        }
        self.field.tick(&mut self.surface);
        self.pending = self.scheduler.schedule_next_frame();
        self.state = self.state_for_pending();
        true
    }

    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    // Without a registered frame nothing will ever call run_frame again
    fn state_for_pending(&self) -> LoopState {
        if self.pending.is_some() {
            LoopState::Running
        } else {
            LoopState::Stopped
        }
    }
}
