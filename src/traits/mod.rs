//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`ContentSource`] - Read-only sample content for the screens
//! - [`PresentationHost`] - Receiver of theme, viewport and layout hints

pub mod content;
pub mod host;

pub use content::ContentSource;
pub use host::PresentationHost;
