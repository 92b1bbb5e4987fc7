//! Core domain entities.
//!
//! - [`ShortUrl`] - A shortcode mapped to its destination, with click history
//! - [`Click`] - A single served redirect
//!
//! Creation input is kept separate from the stored entity ([`NewShortUrl`]).

pub mod click;
pub mod short_url;

pub use click::Click;
pub use short_url::{NewShortUrl, ShortUrl};
