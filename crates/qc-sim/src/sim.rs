//! Run state machine and per-tick record synthesis.

use crate::error::{SimError, SimResult};
use crate::record::{CycleRecord, SIGNAL_MAX, SIGNAL_MIN};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Run length used by the stock protocol.
pub const DEFAULT_TOTAL_CYCLES: usize = 40;

/// Lifecycle of one run. `Completed` and `Stopped` are terminal until the
/// controller hands the records off and calls `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Completed,
    Stopped,
}

impl RunState {
    pub fn name(&self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Completed => "completed",
            RunState::Stopped => "stopped",
        }
    }
}

/// How a finished run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Stopped,
}

/// Result of one `tick` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick arrived outside `Running`; nothing happened.
    Ignored,
    /// One cycle recorded, run still in progress.
    Cycle { elapsed: usize },
    /// The run just finished; records are ready for hand-off.
    Finished(RunOutcome),
}

/// Options for the run simulator.
#[derive(Debug, Clone)]
pub struct SimOptions {
    /// Fixed tick period. The simulator itself is clock-free; the adapter
    /// schedules `tick` at this interval.
    pub tick_interval: Duration,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
        }
    }
}

/// Tick-driven simulator for one experiment run.
///
/// Owns its counters and record buffer exclusively; the presentation layer
/// polls state for redraws and never mutates it.
pub struct RunSimulator {
    opts: SimOptions,
    state: RunState,
    total_cycles: usize,
    current_cycle: usize,
    stop_requested: bool,
    records: Vec<CycleRecord>,
    temp_c: f64,
    rng: StdRng,
}

impl RunSimulator {
    pub fn new(opts: SimOptions) -> Self {
        Self::with_rng(opts, StdRng::from_entropy())
    }

    /// Deterministic variant for tests.
    pub fn seeded(opts: SimOptions, seed: u64) -> Self {
        Self::with_rng(opts, StdRng::seed_from_u64(seed))
    }

    fn with_rng(opts: SimOptions, rng: StdRng) -> Self {
        Self {
            opts,
            state: RunState::Idle,
            total_cycles: DEFAULT_TOTAL_CYCLES,
            current_cycle: 0,
            stop_requested: false,
            records: Vec::new(),
            temp_c: 25.0,
            rng,
        }
    }

    /// Begin a run of `total_cycles` cycles.
    ///
    /// Only legal from `Idle`. Starting from any other state is a contract
    /// violation and leaves the in-progress run untouched.
    pub fn start(&mut self, total_cycles: usize) -> SimResult<()> {
        if self.state != RunState::Idle {
            return Err(SimError::NotIdle {
                state: self.state.name(),
            });
        }
        self.total_cycles = total_cycles;
        self.current_cycle = 0;
        self.stop_requested = false;
        self.records.clear();
        self.state = RunState::Running;
        tracing::info!(total_cycles, "run started");
        Ok(())
    }

    /// Advance one cycle.
    ///
    /// The interval in flight always completes with its record; the stop
    /// flag is observed only afterwards, so a stop requested after k
    /// completed ticks yields exactly k+1 records.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != RunState::Running {
            return TickOutcome::Ignored;
        }

        let elapsed = self.current_cycle;
        let record = self.synthesize(elapsed);
        self.records.push(record);
        self.current_cycle += 1;
        self.temp_c = 60.0 + self.rng.gen_range(-0.5..0.5);

        if self.stop_requested {
            self.state = RunState::Stopped;
            tracing::info!(cycles = self.current_cycle, "run stopped on request");
            return TickOutcome::Finished(RunOutcome::Stopped);
        }
        if self.current_cycle >= self.total_cycles {
            self.state = RunState::Completed;
            tracing::info!(cycles = self.current_cycle, "run completed");
            return TickOutcome::Finished(RunOutcome::Completed);
        }
        TickOutcome::Cycle { elapsed }
    }

    /// Set stop intent. Realized at the next tick boundary, never
    /// immediately.
    pub fn request_stop(&mut self) {
        if self.state == RunState::Running {
            self.stop_requested = true;
            tracing::debug!("stop requested");
        }
    }

    /// Return to `Idle` after the finished records have been handed off.
    pub fn reset(&mut self) {
        self.state = RunState::Idle;
        self.stop_requested = false;
    }

    fn synthesize(&mut self, elapsed: usize) -> CycleRecord {
        CycleRecord {
            elapsed,
            cy5_avg_values: [self.draw(), self.draw(), self.draw()],
            fam_avg_values: [self.draw(), self.draw(), self.draw()],
            hex_value: self.draw(),
        }
    }

    fn draw(&mut self) -> f64 {
        self.rng.gen_range(SIGNAL_MIN..SIGNAL_MAX)
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn records(&self) -> &[CycleRecord] {
        &self.records
    }

    /// Hand off the finished record sequence, leaving the buffer empty.
    pub fn take_records(&mut self) -> Vec<CycleRecord> {
        std::mem::take(&mut self.records)
    }

    pub fn current_cycle(&self) -> usize {
        self.current_cycle
    }

    pub fn total_cycles(&self) -> usize {
        self.total_cycles
    }

    /// Fraction complete in [0, 1] for the progress readout.
    pub fn progress(&self) -> f32 {
        if self.total_cycles == 0 {
            return 0.0;
        }
        (self.current_cycle as f32 / self.total_cycles as f32).min(1.0)
    }

    /// Block temperature readout, sampled once per tick.
    pub fn temp_c(&self) -> f64 {
        self.temp_c
    }

    pub fn options(&self) -> &SimOptions {
        &self.opts
    }
}
