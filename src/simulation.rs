//! Simulation state and per-frame update.

use crate::clock::Clock;
use crate::config::Config;
use crate::duty_cycle::{DutyCycle, Gate, Phase};
use crate::robot::Robot;
use crate::stats::SimStats;

/// What a single tick did to the robot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Motion applied and recorded in the path
    Moved,
    /// Gate held the robot in place
    Held,
    /// Robot came within one step and was snapped onto the target
    Arrived,
    /// Already on target; nothing left to do
    Idle,
}

/// The robot, its duty-cycle gate and the clock driving it
pub struct Simulation<C: Clock> {
    config: Config,
    robot: Robot,
    duty_cycle: DutyCycle,
    clock: C,
    stats: SimStats,
}

impl<C: Clock> Simulation<C> {
    /// Create a simulation; the duty cycle starts Moving at the clock's current time
    pub fn new(config: Config, clock: C) -> Self {
        let robot = Robot::from_config(&config);
        let duty_cycle = DutyCycle::new(
            config.duty_cycle.move_time(),
            config.duty_cycle.stop_time(),
            clock.now(),
        );

        log::info!(
            "Robot at ({:.1}, {:.1}) px heading for ({:.1}, {:.1}) px, {:.2} px away",
            robot.position.x,
            robot.position.y,
            robot.target.x,
            robot.target.y,
            robot.distance_to_target()
        );

        Self {
            config,
            robot,
            duty_cycle,
            clock,
            stats: SimStats::new(),
        }
    }

    /// Advance one frame
    pub fn tick(&mut self) -> TickOutcome {
        self.stats.frames += 1;

        if self.robot.has_arrived() {
            return TickOutcome::Idle;
        }

        if self.robot.within_reach() {
            let before = self.robot.position;
            self.robot.snap_to_target();
            self.stats.distance_traveled += before.distance(self.robot.position);
            self.stats.arrived_at_frame = Some(self.stats.frames);
            self.stats.arrived_at_secs = Some(self.clock.now().as_secs_f64());
            log::info!(
                "Target reached after {} frames ({:.2}s), path of {} points",
                self.stats.frames,
                self.clock.now().as_secs_f64(),
                self.robot.trail().total_recorded()
            );
            return TickOutcome::Arrived;
        }

        let gate = self.duty_cycle.poll(self.clock.now());
        self.stats.phase_transitions = self.duty_cycle.transitions();

        match gate {
            Gate::Move => {
                let before = self.robot.position;
                let step = self.robot.calculate_movement();
                self.robot.update_position(step);
                self.stats.motion_updates += 1;
                self.stats.distance_traveled += before.distance(self.robot.position);
                TickOutcome::Moved
            }
            Gate::Hold => TickOutcome::Held,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    pub fn phase(&self) -> Phase {
        self.duty_cycle.phase()
    }

    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn has_arrived(&self) -> bool {
        self.robot.has_arrived()
    }
}
