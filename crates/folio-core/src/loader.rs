use crate::constants::{
    LOADER_EXIT_DELAY, LOADER_FALLBACK_TIMEOUT, LOADER_STEP_INTERVAL, LOADER_STEP_MAX,
};
use rand::prelude::*;
use smallvec::SmallVec;
use std::time::Duration;

/// What has to happen before the intro screen lets the page through.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReadyCondition {
    /// Fixed delay with simulated progress.
    Timer(Duration),
    /// A bounded set of assets; failures count as settled.
    Assets { total: usize },
    /// An intro clip playing to its end.
    ClipEnded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderPhase {
    Loading,
    /// Progress hit 100; the overlay is fading out.
    Exiting,
    Ready,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderEvent {
    Exiting,
    Ready,
}

pub type LoaderEvents = SmallVec<[LoaderEvent; 2]>;

/// Startup gate with a monotonic progress percentage.
///
/// Every condition is backed by a fallback timeout, so a stalled image or a
/// clip that never fires `ended` cannot keep the page hidden.
pub struct LoadingSequencer {
    condition: ReadyCondition,
    phase: LoaderPhase,
    progress: f32,
    elapsed: Duration,
    fallback: Duration,
    exit_delay: Duration,
    exit_remaining: Duration,
    settled: usize,
    step_accum: Duration,
    rng: StdRng,
}

impl LoadingSequencer {
    pub fn new(condition: ReadyCondition, fallback: Duration, seed: u64) -> Self {
        let progress = match condition {
            ReadyCondition::Assets { total: 0 } => 100.0,
            _ => 0.0,
        };
        Self {
            condition,
            phase: LoaderPhase::Loading,
            progress,
            elapsed: Duration::ZERO,
            fallback,
            exit_delay: LOADER_EXIT_DELAY,
            exit_remaining: Duration::ZERO,
            settled: 0,
            step_accum: Duration::ZERO,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn with_defaults(condition: ReadyCondition, seed: u64) -> Self {
        Self::new(condition, LOADER_FALLBACK_TIMEOUT, seed)
    }

    pub fn with_exit_delay(mut self, exit_delay: Duration) -> Self {
        self.exit_delay = exit_delay;
        self
    }

    pub fn tick(&mut self, dt: Duration) -> LoaderEvents {
        let mut events = LoaderEvents::new();
        match self.phase {
            LoaderPhase::Ready => {}
            LoaderPhase::Loading => {
                self.elapsed += dt;
                if let ReadyCondition::Timer(duration) = self.condition {
                    // Simulated steps stall just short of 100 until the timer runs out.
                    self.step_accum += dt;
                    while self.step_accum >= LOADER_STEP_INTERVAL {
                        self.step_accum -= LOADER_STEP_INTERVAL;
                        let step = self.rng.gen::<f32>() * LOADER_STEP_MAX;
                        self.raise((self.progress + step).min(99.0));
                    }
                    if self.elapsed >= duration {
                        self.raise(100.0);
                    } else {
                        self.raise(self.elapsed.as_secs_f32() / duration.as_secs_f32() * 100.0);
                    }
                }
                if self.elapsed >= self.fallback {
                    log::warn!(
                        "[loader] fallback after {:?}; forcing ready",
                        self.fallback
                    );
                    self.force_ready(&mut events);
                    return events;
                }
                self.maybe_begin_exit(&mut events);
            }
            LoaderPhase::Exiting => {
                self.elapsed += dt;
                self.exit_remaining = self.exit_remaining.saturating_sub(dt);
                if self.exit_remaining.is_zero() {
                    self.finish(&mut events);
                }
            }
        }
        events
    }

    /// One preload attempt finished, successfully or not.
    pub fn asset_settled(&mut self, loaded: bool) -> LoaderEvents {
        let mut events = LoaderEvents::new();
        if self.phase != LoaderPhase::Loading {
            return events;
        }
        if let ReadyCondition::Assets { total } = self.condition {
            if !loaded {
                log::debug!("[loader] asset failed; counting it as settled");
            }
            self.settled = (self.settled + 1).min(total);
            self.raise(self.settled as f32 / total.max(1) as f32 * 100.0);
            self.maybe_begin_exit(&mut events);
        }
        events
    }

    /// Playback position of the intro clip as a fraction. Completion only
    /// comes from [`LoadingSequencer::clip_ended`].
    pub fn clip_progress(&mut self, fraction: f64) {
        if self.phase == LoaderPhase::Loading && fraction.is_finite() {
            self.raise((fraction.clamp(0.0, 1.0) * 99.0) as f32);
        }
    }

    pub fn clip_ended(&mut self) -> LoaderEvents {
        let mut events = LoaderEvents::new();
        if self.phase == LoaderPhase::Loading {
            self.raise(100.0);
            self.maybe_begin_exit(&mut events);
        }
        events
    }

    /// Visitor asked to skip the intro.
    pub fn skip(&mut self) -> LoaderEvents {
        let mut events = LoaderEvents::new();
        if self.phase != LoaderPhase::Ready {
            log::info!("[loader] skipped");
            self.force_ready(&mut events);
        }
        events
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Rounded percentage for the label.
    pub fn percent_label(&self) -> String {
        format!("{}%", self.progress.round().min(100.0) as u32)
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == LoaderPhase::Ready
    }

    pub fn condition(&self) -> ReadyCondition {
        self.condition
    }

    fn raise(&mut self, value: f32) {
        if value.is_finite() {
            self.progress = self.progress.max(value.min(100.0));
        }
    }

    fn maybe_begin_exit(&mut self, events: &mut LoaderEvents) {
        if self.phase != LoaderPhase::Loading || self.progress < 100.0 {
            return;
        }
        self.phase = LoaderPhase::Exiting;
        self.exit_remaining = self.exit_delay;
        events.push(LoaderEvent::Exiting);
        log::info!("[loader] complete; exiting");
        if self.exit_delay.is_zero() {
            self.finish(events);
        }
    }

    fn force_ready(&mut self, events: &mut LoaderEvents) {
        self.progress = 100.0;
        self.finish(events);
    }

    fn finish(&mut self, events: &mut LoaderEvents) {
        self.phase = LoaderPhase::Ready;
        events.push(LoaderEvent::Ready);
        log::info!("[loader] ready");
    }
}
