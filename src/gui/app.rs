//! Main GUI application.

use std::time::Duration;

use eframe::egui;

use crate::clock::MonotonicClock;
use crate::config::Config;
use crate::render::Frame;
use crate::runner::{advance_frame, FrameStep};
use crate::simulation::Simulation;
use crate::surface::SurfaceEvent;

use super::views::ArenaView;

const STATUS_BAR_HEIGHT: f32 = 24.0;
const CONTROLS_HEIGHT: f32 = 24.0;

/// Main application state
pub struct RobotApp {
    /// Simulation driven one tick per repaint
    sim: Simulation<MonotonicClock>,
    /// Last composed frame
    frame: Option<Frame>,
    /// Arena view component
    arena_view: ArenaView,
    /// Repaint interval for the frame-rate cap
    frame_interval: Duration,
    /// Set once the window has been asked to close
    closing: bool,
}

impl RobotApp {
    /// Create a new application with the given configuration
    pub fn new(config: Config) -> Self {
        let frame_interval = config.render.frame_interval();
        Self {
            sim: Simulation::new(config, MonotonicClock::new()),
            frame: None,
            arena_view: ArenaView::new(),
            frame_interval,
            closing: false,
        }
    }

    fn close(&mut self, ctx: &egui::Context, window_closing: bool) {
        if self.closing {
            return;
        }
        self.closing = true;
        // A close button press is already being honoured by eframe
        if !window_closing {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl eframe::App for RobotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.closing {
            return;
        }

        // Event pump
        let (window_closing, escape) = ctx.input(|i| {
            (
                i.viewport().close_requested(),
                i.key_pressed(egui::Key::Escape),
            )
        });
        let events = if window_closing || escape {
            vec![SurfaceEvent::Quit]
        } else {
            Vec::new()
        };

        match advance_frame(&mut self.sim, &events) {
            FrameStep::Quit => {
                self.close(ctx, window_closing);
                return;
            }
            FrameStep::Present { frame, finished } => {
                self.frame = Some(frame);
                if finished {
                    log::info!("Arrival policy is exit, closing window");
                    self.close(ctx, false);
                }
            }
        }

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let robot = self.sim.robot();
                    ui.label(format!(
                        "Frame: {} | Phase: {:?} | Position: ({:.1}, {:.1}) | Remaining: {:.1} px | Path: {}",
                        self.sim.stats().frames,
                        self.sim.phase(),
                        robot.position.x,
                        robot.position.y,
                        robot.distance_to_target(),
                        robot.trail().len()
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if self.sim.has_arrived() {
                            ui.label("Arrived");
                        }
                    });
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                if let Some(ref frame) = self.frame {
                    self.arena_view.show(ui, frame);
                }
            });

        ctx.request_repaint_after(self.frame_interval);
    }
}

impl Drop for RobotApp {
    fn drop(&mut self) {
        log::info!(
            "Window released after {} frames",
            self.sim.stats().frames
        );
    }
}

/// Run the GUI application
pub fn run_gui(config: Config) -> eframe::Result<()> {
    let title = config.render.title.clone();
    let width = config.arena.width_px;
    let height = config.arena.height_px + STATUS_BAR_HEIGHT + CONTROLS_HEIGHT;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_resizable(false)
            .with_title(title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        native_options,
        Box::new(|_cc| Box::new(RobotApp::new(config))),
    )
}
