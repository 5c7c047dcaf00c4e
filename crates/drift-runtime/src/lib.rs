//! Drift Runtime - frame loop infrastructure
//!
//! Building blocks between a host's per-frame callback and the simulation:
//! - `FrameClock` — per-frame time bookkeeping with a clamped delta
//! - `TickScheduler` — the per-frame subscription as an explicit seam, so the
//!   update logic is testable without a live render surface
//! - `LifecycleGuard` / `HostEnv` — mount gating and the environment
//!   capabilities resolved exactly once after mount

mod clock;
mod lifecycle;
mod scheduler;

pub use clock::FrameClock;
pub use lifecycle::{HostEnv, LifecycleGuard, Viewport};
pub use scheduler::{ManualScheduler, TickFn, TickScheduler};
