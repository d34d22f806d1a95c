//! Events carried by the app's one-shot timers.

/// What a fired timer means to the app.
///
/// The handle that comes back with the event identifies which arming it
/// belongs to; owners compare it against the handle they hold before acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The splash countdown finished.
    SplashElapsed,
    /// The simulated posture analysis finished.
    AnalysisComplete,
    /// No orientation change arrived for the settle window.
    OrientationSettled,
}
