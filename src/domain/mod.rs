//! Domain layer containing business entities and storage contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait definitions
//! - [`clock`] - Injectable time source
//!
//! The domain layer depends on neither infrastructure nor presentation code.

pub mod clock;
pub mod entities;
pub mod repositories;
