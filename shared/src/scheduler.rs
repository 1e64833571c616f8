use std::time::{Duration, Instant};

use crate::engine;
use crate::error::Result;
use crate::grid::Grid;

/// Fixed cadence of the simulation.
pub const TICK_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy)]
struct Timer {
    next_tick: Instant,
}

/// Drives the simulation from the event loop.
///
/// The scheduler owns at most one timer. It never sleeps or spawns: the
/// caller polls it with the current time, and a due tick evolves the grid
/// synchronously inside [`Scheduler::poll`]. Dropping the timer therefore
/// cancels it exactly.
#[derive(Debug, Default)]
pub struct Scheduler {
    timer: Option<Timer>,
    generation: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer, replacing any running one. The first tick is due one
    /// interval after `now`.
    pub fn start(&mut self, now: Instant) {
        if self.timer.is_some() {
            log::debug!("restarting simulation at generation {}", self.generation);
        } else {
            log::debug!("starting simulation at generation {}", self.generation);
        }
        self.timer = Some(Timer {
            next_tick: now + TICK_INTERVAL,
        });
    }

    pub fn stop(&mut self) {
        if self.timer.take().is_some() {
            log::debug!("simulation stopped at generation {}", self.generation);
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Time left before the next tick, `None` when stopped.
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.timer
            .map(|timer| timer.next_tick.saturating_duration_since(now))
    }

    /// Generations applied by ticks since the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn reset_generation(&mut self) {
        self.generation = 0;
    }

    /// Fires the tick if one is due. Returns whether the grid was evolved.
    ///
    /// At most one generation is applied per call. Ticks missed while the
    /// caller was not polling are skipped, keeping the next one on the
    /// original phase. A failed tick leaves the grid as it was and the timer
    /// armed.
    pub fn poll(&mut self, now: Instant, grid: &mut Grid) -> Result<bool> {
        let Some(timer) = self.timer.as_mut() else {
            return Ok(false);
        };
        if now < timer.next_tick {
            return Ok(false);
        }

        let behind = now.duration_since(timer.next_tick);
        let missed = (behind.as_nanos() / TICK_INTERVAL.as_nanos()) as u32;
        if missed > 0 {
            log::trace!("skipping {missed} missed ticks");
        }
        timer.next_tick += TICK_INTERVAL * (missed + 1);

        let next = engine::compute_next_generation(grid);
        grid.replace_all(next)?;
        self.generation += 1;
        log::trace!("tick: generation {}", self.generation);
        Ok(true)
    }
}
