//! The simulation state machine.
//!
//! ## States
//!
//! - `Configuring` (initial): density may be changed, ticks do nothing
//! - `Running`: each tick computes one generation
//!
//! `ToggleRun` moves between the two forever; there is no terminal state.
//!
//! ## Generation counter
//!
//! Reset to 0 when a run starts. On stop it keeps its last value so the
//! host can still display how far the run got.

use tracing::{debug, info, trace, warn};

use super::event::{SimEvent, SimulationMode};
use super::snapshot::Snapshot;
use crate::core::{Cell, Density, LifeError, LifeRng, LifeRngState, SimulationConfig};
use crate::grid::GridState;
use crate::rules::step;

/// Owns the current generation and sequences host events.
///
/// Hosts only ever get shared references or owned snapshots; the grid is
/// replaced wholesale on every tick.
#[derive(Clone, Debug)]
pub struct SimulationController {
    config: SimulationConfig,
    rng: LifeRng,
    mode: SimulationMode,
    density: Density,
    grid: GridState,
    generation: u64,
    runs_started: u64,
}

impl SimulationController {
    /// Create a controller seeded from `config.seed`.
    pub fn new(config: SimulationConfig) -> Result<Self, LifeError> {
        let rng = LifeRng::new(config.seed);
        Self::with_rng(config, rng)
    }

    /// Create a controller drawing initial layouts from `rng`.
    pub fn with_rng(config: SimulationConfig, rng: LifeRng) -> Result<Self, LifeError> {
        config.validate()?;
        let density = config.default_density;

        Ok(Self {
            config,
            rng,
            mode: SimulationMode::Configuring,
            density,
            grid: GridState::empty(density.side()),
            generation: 0,
            runs_started: 0,
        })
    }

    // === Events ===

    /// Dispatch a host event.
    ///
    /// Only a density the configuration does not enable is an error;
    /// events that do not apply to the current mode are ignored.
    pub fn handle(&mut self, event: SimEvent) -> Result<(), LifeError> {
        match event {
            SimEvent::SelectDensity(density) => self.select_density(density)?,
            SimEvent::ToggleRun => self.toggle_run(),
            SimEvent::Tick => {
                self.tick();
            }
        }
        Ok(())
    }

    /// Select the grid density. Ignored while running.
    pub fn select_density(&mut self, density: Density) -> Result<(), LifeError> {
        if self.mode.is_running() {
            debug!(%density, "ignoring density change while running");
            return Ok(());
        }

        if !self.config.allows(density) {
            warn!(%density, "rejected density not enabled by configuration");
            return Err(LifeError::DensityNotEnabled(density.side()));
        }

        if density != self.density {
            debug!(from = %self.density, to = %density, "density selected");
            self.density = density;
            self.grid = GridState::empty(density.side());
        }
        Ok(())
    }

    /// Start a run with a fresh random layout, or stop the current run.
    pub fn toggle_run(&mut self) {
        match self.mode {
            SimulationMode::Configuring => self.start_run(),
            SimulationMode::Running => self.stop_run(),
        }
    }

    /// Advance one generation.
    ///
    /// Returns `true` if a generation was computed, `false` while configuring.
    pub fn tick(&mut self) -> bool {
        if !self.mode.is_running() {
            return false;
        }

        self.grid = step(&self.grid);
        self.generation += 1;
        trace!(
            generation = self.generation,
            population = self.grid.population(),
            "generation computed"
        );
        true
    }

    fn start_run(&mut self) {
        // Each run gets its own branch so its layout depends only on the
        // seed and the run index.
        let mut run_rng = self.rng.fork();
        self.grid = GridState::random_with_probability(
            self.density.side(),
            self.config.fill_probability,
            &mut run_rng,
        );
        self.generation = 0;
        self.runs_started += 1;
        self.mode = SimulationMode::Running;

        info!(
            density = %self.density,
            population = self.grid.population(),
            run = self.runs_started,
            "simulation started"
        );
    }

    fn stop_run(&mut self) {
        self.grid = GridState::empty(self.density.side());
        self.mode = SimulationMode::Configuring;

        info!(generation = self.generation, "simulation stopped");
    }

    // === Queries ===

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> SimulationMode {
        self.mode
    }

    /// Selected density.
    #[must_use]
    pub fn density(&self) -> Density {
        self.density
    }

    /// Generations computed in the current (or last) run.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of runs started since construction.
    #[must_use]
    pub fn runs_started(&self) -> u64 {
        self.runs_started
    }

    /// Current generation's grid. Empty while configuring.
    #[must_use]
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// Iterate over the current live cells.
    pub fn live_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.grid.cells()
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// RNG state, for reproducing the next run's layout elsewhere.
    #[must_use]
    pub fn rng_state(&self) -> LifeRngState {
        self.rng.state()
    }

    /// Owned, row-major view of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.mode,
            density: self.density,
            generation: self.generation,
            population: self.grid.population(),
            cells: self.grid.sorted_cells(),
        }
    }
}
