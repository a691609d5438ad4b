//! Library components of the `iir` command-line browser.

pub mod browse;
pub mod convert;
pub mod logging;
pub mod render;
