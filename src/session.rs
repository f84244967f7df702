//! Frame loop state machine
//!
//! A [`Session`] owns one game's entities and drives tick -> render ->
//! reschedule through a host [`Scheduler`]. At most one tick is ever pending:
//! the handle is stored in the session and cancelled before anything that
//! could schedule a second one.

use crate::config::GameConfig;
use crate::input::{InputState, Intent};
use crate::renderer::{self, Surface};
use crate::sim::{self, GameState};

/// Host frame scheduler ("call me again before the next frame")
pub trait Scheduler {
    type Handle: Copy;

    /// Request one invocation of the session's frame callback
    fn request_tick(&mut self) -> Self::Handle;

    /// Cancel a previously requested invocation (no-op if it already ran)
    fn cancel_tick(&mut self, handle: Self::Handle);
}

/// Visibility of the host's restart affordance
pub trait RestartControl {
    fn set_visible(&mut self, visible: bool);
}

/// Render state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    Playing,
    GameOverShown,
}

/// One game session: entities, input anchor, render phase and pending tick
pub struct Session<Sch: Scheduler, Surf: Surface, Ctl: RestartControl> {
    state: GameState,
    input: InputState,
    phase: RenderPhase,
    pending: Option<Sch::Handle>,
    scheduler: Sch,
    surface: Surf,
    restart: Ctl,
}

impl<Sch: Scheduler, Surf: Surface, Ctl: RestartControl> Session<Sch, Surf, Ctl> {
    pub fn new(config: GameConfig, scheduler: Sch, surface: Surf, restart: Ctl) -> Self {
        let state = GameState::new(config);
        let input = InputState::new(&state);
        Self {
            state,
            input,
            phase: RenderPhase::Playing,
            pending: None,
            scheduler,
            surface,
            restart,
        }
    }

    /// Begin the loop by requesting the first frame
    pub fn start(&mut self) {
        log::info!(
            "Session starting on {}x{} surface",
            self.state.config.width,
            self.state.config.height
        );
        self.restart.set_visible(false);
        self.schedule();
    }

    /// Host callback for a scheduled frame
    pub fn on_frame(&mut self) {
        if self.phase == RenderPhase::GameOverShown {
            return;
        }

        sim::tick(&mut self.state);

        if self.state.is_over() {
            self.enter_game_over();
        } else {
            renderer::render_scene(&mut self.surface, &self.state);
            self.schedule();
        }
    }

    /// Apply a player intent; takes effect on the next tick
    pub fn handle_intent(&mut self, intent: Intent) {
        self.input.apply(&mut self.state, intent);
    }

    /// Reinitialize every entity and resume from `Playing` with one pending tick
    pub fn reset(&mut self) {
        self.state.reset();
        self.input.reset(&self.state);
        self.restart.set_visible(false);
        self.phase = RenderPhase::Playing;
        self.schedule();
        log::info!("Game reset");
    }

    fn enter_game_over(&mut self) {
        renderer::render_game_over(&mut self.surface);
        self.restart.set_visible(true);
        self.cancel_pending();
        self.phase = RenderPhase::GameOverShown;
        log::info!("Game over after {} ticks", self.state.time_ticks);
    }

    /// Replace any outstanding request with a fresh one
    fn schedule(&mut self) {
        self.cancel_pending();
        self.pending = Some(self.scheduler.request_tick());
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_tick(handle);
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    pub fn is_tick_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn scheduler(&self) -> &Sch {
        &self.scheduler
    }

    pub fn surface(&self) -> &Surf {
        &self.surface
    }

    pub fn restart_control(&self) -> &Ctl {
        &self.restart
    }

    /// Mutable state access for hosts and tests that set up positions directly
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}

/// Scheduler driven by explicit calls, for headless runs and tests
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_handle: u64,
    /// Requested and not yet fired or cancelled, oldest first
    queued: Vec<u64>,
    requested: usize,
    cancelled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest outstanding request, if any
    pub fn fire(&mut self) -> Option<u64> {
        if self.queued.is_empty() {
            None
        } else {
            Some(self.queued.remove(0))
        }
    }

    /// Requests still outstanding
    pub fn outstanding(&self) -> usize {
        self.queued.len()
    }

    /// Total `request_tick` calls
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Total `cancel_tick` calls that removed an outstanding request
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn request_tick(&mut self) -> u64 {
        self.next_handle += 1;
        self.requested += 1;
        self.queued.push(self.next_handle);
        self.next_handle
    }

    fn cancel_tick(&mut self, handle: u64) {
        if let Some(i) = self.queued.iter().position(|&h| h == handle) {
            self.queued.remove(i);
            self.cancelled += 1;
        }
    }
}

impl<Surf: Surface, Ctl: RestartControl> Session<ManualScheduler, Surf, Ctl> {
    /// Fire the next outstanding frame; false when nothing is scheduled
    pub fn run_pending(&mut self) -> bool {
        if self.scheduler.fire().is_some() {
            self.on_frame();
            true
        } else {
            false
        }
    }
}

/// Restart affordance that just remembers its visibility
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RestartFlag {
    pub visible: bool,
}

impl RestartControl for RestartFlag {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
