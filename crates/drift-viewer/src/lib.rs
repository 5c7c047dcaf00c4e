//! Drift Viewer - host wiring and the live tuning panel
//!
//! `BackgroundApp` assembles the whole background: mount gating, parameter
//! resolution, the particle field, and the derived camera/effects state, all
//! against an injected render surface. The panel module is the optional,
//! non-production control surface for tuning the parameter groups live.

pub mod app;
pub mod panels;

pub use app::{BackgroundApp, GroupSet};
pub use panels::{group_controls, tuning_panel, TuningAction, TuningOutput};
