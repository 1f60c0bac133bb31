//! Textual color notations: hex, W3C named colors and CSS functions.

pub mod css;
pub mod hex;
pub mod named;

pub use css::CssMode;
pub use hex::HexMode;
