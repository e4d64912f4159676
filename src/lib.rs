//! # Thermoregulation Models
//!
//! Multi-segment models of the human body losing heat to a cold environment,
//! built for [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: The physiology engine and its [`twine_core::Model`] adapter.
//! - [`support`]: Environmental forcing, units, and numeric constraints used by
//!   the models.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger.
//! Each simulated minute is logged at `debug`, per-segment balances at `trace`,
//! and changes of core temperature band at `info`.
//!
//! Note: Modules in [`support`] are public because they're useful on their own
//! (wind chill, hypoxia, clothing insulance), but their APIs are not stable.

pub mod models;
pub mod support;
