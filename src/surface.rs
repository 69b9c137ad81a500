//! Drawable surfaces.
//!
//! A [`Surface`] is the display resource the main loop owns: it yields input
//! events, accepts finished frames and is released exactly once, either via
//! [`Surface::close`] or when dropped.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use thiserror::Error;

use crate::render::Frame;

/// Errors raised by the windowing/graphics collaborator
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The surface could not be created
    #[error("failed to create surface: {0}")]
    Create(String),

    /// A frame was submitted after the surface was released
    #[error("surface already closed")]
    Closed,
}

/// Input/window events relevant to the loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The window was closed or quit was requested
    Quit,
    /// Any other input, ignored by the loop
    Other,
}

/// Display resource driven by the main loop
pub trait Surface {
    /// Drain pending events
    fn poll_events(&mut self) -> Result<Vec<SurfaceEvent>, SurfaceError>;

    /// Present a finished frame
    fn present(&mut self, frame: &Frame) -> Result<(), SurfaceError>;

    /// Release the display resource. Calling it again is a no-op.
    fn close(&mut self);
}

/// In-memory surface for headless runs and tests.
///
/// Keeps the last presented frame and counts frames and releases.
pub struct HeadlessSurface {
    width: f32,
    height: f32,
    pending: VecDeque<SurfaceEvent>,
    quit_after: Option<u64>,
    frames_presented: u64,
    last_frame: Option<Frame>,
    closed: bool,
    releases: Rc<Cell<u32>>,
}

impl HeadlessSurface {
    pub fn new(width: f32, height: f32) -> Result<Self, SurfaceError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(SurfaceError::Create(format!(
                "invalid surface size {}x{}",
                width, height
            )));
        }
        log::debug!("Headless surface {}x{} created", width, height);
        Ok(Self {
            width,
            height,
            pending: VecDeque::new(),
            quit_after: None,
            frames_presented: 0,
            last_frame: None,
            closed: false,
            releases: Rc::new(Cell::new(0)),
        })
    }

    /// Deliver a quit event once `frames` frames have been presented
    pub fn quit_after(mut self, frames: u64) -> Self {
        self.quit_after = Some(frames);
        self
    }

    /// Queue an event for the next poll
    pub fn push_event(&mut self, event: SurfaceEvent) {
        self.pending.push_back(event);
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Shared release counter, still readable after the surface is dropped
    pub fn release_counter(&self) -> Rc<Cell<u32>> {
        Rc::clone(&self.releases)
    }
}

impl Surface for HeadlessSurface {
    fn poll_events(&mut self) -> Result<Vec<SurfaceEvent>, SurfaceError> {
        if self.closed {
            return Err(SurfaceError::Closed);
        }
        if self.quit_after == Some(self.frames_presented) {
            self.quit_after = None;
            self.pending.push_back(SurfaceEvent::Quit);
        }
        Ok(self.pending.drain(..).collect())
    }

    fn present(&mut self, frame: &Frame) -> Result<(), SurfaceError> {
        if self.closed {
            return Err(SurfaceError::Closed);
        }
        if frame.width != self.width || frame.height != self.height {
            log::warn!(
                "Frame {}x{} does not match surface {}x{}",
                frame.width,
                frame.height,
                self.width,
                self.height
            );
        }
        self.frames_presented += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.releases.set(self.releases.get() + 1);
        log::debug!("Headless surface released after {} frames", self.frames_presented);
    }
}

impl Drop for HeadlessSurface {
    fn drop(&mut self) {
        self.close();
    }
}
