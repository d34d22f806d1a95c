//! Posture analysis flow: camera, analyzing, results, exercises.
//!
//! ```text
//! Camera --start--> Analyzing --(timer)--> Results --> Exercises
//!   ^                                        |            |
//!   +-------------- new analysis ------------+------------+
//! ```
//!
//! The user cannot abort an analysis once it starts. Only teardown cancels
//! the timer. The report lives inside the results/exercises states, so
//! going back to the camera throws it away.

use std::time::Duration;

use super::Back;
use crate::app::TimerEvent;
use crate::models::PostureReport;
use crate::scheduler::{Scheduler, TimerHandle};
use crate::traits::ContentSource;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PostureView {
    #[default]
    Camera,
    Analyzing {
        timer: TimerHandle,
    },
    Results {
        report: PostureReport,
    },
    Exercises {
        report: PostureReport,
    },
}

#[derive(Debug, Default)]
pub struct PostureIqScreen {
    view: PostureView,
}

impl PostureIqScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &PostureView {
        &self.view
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.view, PostureView::Analyzing { .. })
    }

    pub fn report(&self) -> Option<&PostureReport> {
        match &self.view {
            PostureView::Results { report } | PostureView::Exercises { report } => Some(report),
            _ => None,
        }
    }

    /// Start the simulated analysis. Only valid from the camera view.
    pub fn start_analysis(
        &mut self,
        delay: Duration,
        scheduler: &mut Scheduler<TimerEvent>,
    ) -> bool {
        if self.view != PostureView::Camera {
            return false;
        }
        let timer = scheduler.schedule(delay, TimerEvent::AnalysisComplete);
        tracing::debug!(handle = timer.id(), "posture analysis started");
        self.view = PostureView::Analyzing { timer };
        true
    }

    /// Deliver a fired analysis timer. Handles other than the live one are
    /// ignored.
    pub fn complete_analysis(&mut self, handle: TimerHandle, content: &dyn ContentSource) -> bool {
        match self.view {
            PostureView::Analyzing { timer } if timer == handle => {
                self.view = PostureView::Results {
                    report: content.posture_report().clone(),
                };
                tracing::debug!("posture analysis complete");
                true
            }
            _ => {
                tracing::warn!(handle = handle.id(), "ignoring stale analysis timer");
                false
            }
        }
    }

    pub fn view_exercises(&mut self) -> bool {
        match std::mem::take(&mut self.view) {
            PostureView::Results { report } => {
                self.view = PostureView::Exercises { report };
                true
            }
            other => {
                self.view = other;
                false
            }
        }
    }

    /// Return to the camera, dropping the report.
    pub fn new_analysis(&mut self) -> bool {
        match self.view {
            PostureView::Results { .. } | PostureView::Exercises { .. } => {
                self.view = PostureView::Camera;
                true
            }
            _ => false,
        }
    }

    /// Exercises go back to results; everything else leaves the screen.
    pub fn back(&mut self) -> Back {
        match std::mem::take(&mut self.view) {
            PostureView::Exercises { report } => {
                self.view = PostureView::Results { report };
                Back::Handled
            }
            other => {
                self.view = other;
                Back::Leave
            }
        }
    }

    pub fn teardown(&mut self, scheduler: &mut Scheduler<TimerEvent>) {
        if let PostureView::Analyzing { timer } = self.view {
            scheduler.cancel(timer);
            self.view = PostureView::Camera;
        }
    }
}
