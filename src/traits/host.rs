//! Presentation host abstraction.
//!
//! The environment adapter never touches the renderer directly. It writes
//! presentation hints through [`PresentationHost`], which the terminal
//! front end implements and tests replace with a recorder.

/// Sink for document-level presentation hints.
pub trait PresentationHost {
    /// Toggle the document-level dark theme flag.
    fn set_dark_class(&mut self, enabled: bool);

    /// Whether a named hint has been registered.
    fn has_hint(&self, name: &str) -> bool;

    /// Register or overwrite a named hint.
    fn set_hint(&mut self, name: &str, content: &str);

    /// Current value of a named hint.
    fn hint(&self, name: &str) -> Option<&str>;

    /// Ask the surface to re-evaluate its layout.
    fn request_layout(&mut self);
}
