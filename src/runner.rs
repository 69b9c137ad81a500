//! Main loop: event pump, simulation tick, render, frame-rate cap.

use std::thread;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::clock::{Clock, ManualClock};
use crate::config::ArrivalPolicy;
use crate::render::{self, Frame};
use crate::simulation::{Simulation, TickOutcome};
use crate::surface::{Surface, SurfaceError, SurfaceEvent};

/// Result of one loop iteration
#[derive(Debug)]
pub enum FrameStep {
    /// Quit requested; nothing was simulated or rendered
    Quit,
    /// Frame to present. `finished` is set when the loop should end after it.
    Present { frame: Frame, finished: bool },
}

/// Why the loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    Quit,
    Arrived,
    FrameLimit,
}

/// Summary returned by [`run_loop`]
#[derive(Debug, Clone, Copy)]
pub struct LoopOutcome {
    pub stop: StopReason,
    pub frames_presented: u64,
}

/// Waits out the remainder of a frame
pub trait Pacer {
    fn pace(&mut self);
}

/// Sleeps so that iterations are at least one frame interval apart
pub struct FrameLimiter {
    interval: Duration,
    last: Option<Instant>,
}

impl FrameLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn from_fps(fps: u32) -> Self {
        Self::new(Duration::from_secs(1) / fps.max(1))
    }
}

impl Pacer for FrameLimiter {
    fn pace(&mut self) {
        if let Some(last) = self.last {
            let spent = last.elapsed();
            if spent < self.interval {
                thread::sleep(self.interval - spent);
            }
        }
        self.last = Some(Instant::now());
    }
}

/// Advances a [`ManualClock`] by one frame interval instead of sleeping
pub struct SimulatedPacer<'a> {
    clock: &'a ManualClock,
    interval: Duration,
}

impl<'a> SimulatedPacer<'a> {
    pub fn new(clock: &'a ManualClock, interval: Duration) -> Self {
        Self { clock, interval }
    }
}

impl Pacer for SimulatedPacer<'_> {
    fn pace(&mut self) {
        self.clock.advance(self.interval);
    }
}

/// One iteration of the loop body given the events drained this frame
pub fn advance_frame<C: Clock>(sim: &mut Simulation<C>, events: &[SurfaceEvent]) -> FrameStep {
    if events.iter().any(|e| *e == SurfaceEvent::Quit) {
        log::info!("Quit requested");
        return FrameStep::Quit;
    }

    let outcome = sim.tick();
    let frame = render::compose(sim);
    let finished = matches!(outcome, TickOutcome::Arrived | TickOutcome::Idle)
        && sim.config().arrival == ArrivalPolicy::Exit;

    FrameStep::Present { frame, finished }
}

/// Drive `sim` on `surface` until quit, arrival (with [`ArrivalPolicy::Exit`])
/// or `max_frames` presented frames. The surface is released before returning,
/// on success and on error.
pub fn run_loop<C, S, P>(
    sim: &mut Simulation<C>,
    surface: &mut S,
    pacer: &mut P,
    max_frames: Option<u64>,
) -> Result<LoopOutcome, SurfaceError>
where
    C: Clock,
    S: Surface,
    P: Pacer,
{
    let result = drive(sim, surface, pacer, max_frames);
    surface.close();

    if let Ok(outcome) = &result {
        log::info!(
            "Loop ended ({:?}) after {} frames",
            outcome.stop,
            outcome.frames_presented
        );
    }
    result
}

fn drive<C, S, P>(
    sim: &mut Simulation<C>,
    surface: &mut S,
    pacer: &mut P,
    max_frames: Option<u64>,
) -> Result<LoopOutcome, SurfaceError>
where
    C: Clock,
    S: Surface,
    P: Pacer,
{
    let mut frames_presented = 0;

    loop {
        if max_frames.is_some_and(|max| frames_presented >= max) {
            return Ok(LoopOutcome {
                stop: StopReason::FrameLimit,
                frames_presented,
            });
        }

        let events = surface.poll_events()?;
        match advance_frame(sim, &events) {
            FrameStep::Quit => {
                return Ok(LoopOutcome {
                    stop: StopReason::Quit,
                    frames_presented,
                })
            }
            FrameStep::Present { frame, finished } => {
                surface.present(&frame)?;
                frames_presented += 1;
                if finished {
                    return Ok(LoopOutcome {
                        stop: StopReason::Arrived,
                        frames_presented,
                    });
                }
            }
        }

        pacer.pace();
    }
}
