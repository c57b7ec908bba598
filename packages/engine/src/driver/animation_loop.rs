use crate::render::surface::Surface;
use crate::simulation::CosmosCore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

/// What the scheduler should do after a frame callback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Request another frame
    Continue,
    /// The loop was stopped; do not reschedule
    Halted,
}

/// Owns the simulation and its surface and decides whether frames keep
/// coming. Hosts call [`AnimationLoop::frame`] from their frame callback and
/// schedule the next one only on [`FrameOutcome::Continue`], so at most one
/// tick is ever queued.
pub struct AnimationLoop<S: Surface> {
    core: CosmosCore,
    surface: S,
    state: LoopState,
}

impl<S: Surface> AnimationLoop<S> {
    pub fn new(core: CosmosCore, surface: S) -> Self {
        Self {
            core,
            surface,
            state: LoopState::Idle,
        }
    }

    /// Returns true when the loop transitioned to running and the host
    /// should request the first frame
    pub fn start(&mut self) -> bool {
        if self.state == LoopState::Running {
            return false;
        }
        self.state = LoopState::Running;
        log::info!("animation loop started with {} particles", self.core.particle_count());
        true
    }

    /// Idempotent; returns true only for the call that actually stopped it
    pub fn stop(&mut self) -> bool {
        if self.state != LoopState::Running {
            return false;
        }
        self.state = LoopState::Stopped;
        log::info!("animation loop stopped after {} ticks", self.core.ticks());
        true
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Frame callback body: tick once if running
    pub fn frame(&mut self) -> FrameOutcome {
        if !self.is_running() {
            return FrameOutcome::Halted;
        }
        self.core.tick(&mut self.surface);
        FrameOutcome::Continue
    }

    /// Pump up to `frames` frames synchronously (native hosts, tests).
    /// Returns how many ticks ran.
    pub fn run_frames(&mut self, frames: usize) -> usize {
        let mut ran = 0;
        while ran < frames {
            if self.frame() == FrameOutcome::Halted {
                break;
            }
            ran += 1;
        }
        ran
    }

    /// Resize signal: new frame, new particle batch, resized surface.
    /// Runs between frames, never inside one.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.core.on_resize(width, height);
        let frame = self.core.frame();
        self.surface.resize(frame.width() as u32, frame.height() as u32);
    }

    pub fn core(&self) -> &CosmosCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut CosmosCore {
        &mut self.core
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::CosmosConfig;
    use crate::render::pixels::PixelSurface;
    use crate::render::recording::RecordingSurface;

    fn core(width: f64, height: f64) -> CosmosCore {
        let mut config = CosmosConfig::default();
        config.field.seed = Some(17);
        CosmosCore::with_config(width, height, config).unwrap()
    }

    #[test]
    fn idle_loop_does_not_tick() {
        let mut animation = AnimationLoop::new(core(800.0, 600.0), RecordingSurface::new());
        assert_eq!(animation.state(), LoopState::Idle);
        assert_eq!(animation.frame(), FrameOutcome::Halted);
        assert_eq!(animation.core().ticks(), 0);
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut animation = AnimationLoop::new(core(800.0, 600.0), RecordingSurface::new());
        assert!(animation.start());
        assert!(!animation.start());
        assert_eq!(animation.run_frames(5), 5);

        assert!(animation.stop());
        assert!(!animation.stop());
        assert_eq!(animation.state(), LoopState::Stopped);
        assert_eq!(animation.run_frames(5), 0);
        assert_eq!(animation.core().ticks(), 5);

        // restart after a stop
        assert!(animation.start());
        assert_eq!(animation.run_frames(2), 2);
        assert_eq!(animation.core().ticks(), 7);
    }

    #[test]
    fn start_rolled_back_before_any_frame_can_be_retried() {
        let mut animation = AnimationLoop::new(core(800.0, 600.0), RecordingSurface::new());
        assert!(animation.start());
        // host failed to schedule the first frame
        assert!(animation.stop());
        assert!(!animation.is_running());

        assert!(animation.start());
        assert_eq!(animation.frame(), FrameOutcome::Continue);
        assert_eq!(animation.core().ticks(), 1);
    }

    #[test]
    fn resize_between_frames_swaps_generation() {
        let mut animation = AnimationLoop::new(core(1920.0, 1080.0), PixelSurface::new(1920, 1080));
        animation.start();
        animation.run_frames(1);
        animation.resize(640.0, 480.0);

        assert_eq!(animation.core().particle_count(), 600);
        assert_eq!(animation.core().generation(), 2);
        assert_eq!(animation.surface().width(), 640);
        assert_eq!(animation.surface().pixels().len(), 640 * 480);
        assert_eq!(animation.run_frames(1), 1);
    }
}
