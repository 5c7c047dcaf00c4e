//! The per-frame callback subscription as an explicit seam
//!
//! Hosts with a real render loop (requestAnimationFrame, a winit redraw loop)
//! implement [`TickScheduler`] over it; tests and headless drivers use
//! [`ManualScheduler`] and step frames by hand. Either way the simulation's
//! update logic never knows where frames come from.

/// A frame callback. Receives the delta time in seconds.
pub type TickFn = Box<dyn FnMut(f32)>;

/// Subscription to a host's per-frame callback
pub trait TickScheduler {
    /// Install the frame callback, replacing any previous one
    fn on_tick(&mut self, callback: TickFn);

    /// Drop the subscription; no further frames are delivered
    fn cancel(&mut self);
}

/// A scheduler driven by hand; each `step` delivers one frame
#[derive(Default)]
pub struct ManualScheduler {
    callback: Option<TickFn>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver one frame. Returns false when no callback is installed.
    pub fn step(&mut self, dt: f32) -> bool {
        match self.callback.as_mut() {
            Some(callback) => {
                callback(dt);
                true
            }
            None => false,
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.callback.is_some()
    }
}

impl TickScheduler for ManualScheduler {
    fn on_tick(&mut self, callback: TickFn) {
        self.callback = Some(callback);
    }

    fn cancel(&mut self) {
        self.callback = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn steps_drive_the_callback() {
        let count = Rc::new(Cell::new(0u32));
        let seen = count.clone();

        let mut scheduler = ManualScheduler::new();
        scheduler.on_tick(Box::new(move |_| seen.set(seen.get() + 1)));

        for _ in 0..3 {
            assert!(scheduler.step(1.0 / 60.0));
        }
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn cancel_stops_delivery() {
        let count = Rc::new(Cell::new(0u32));
        let seen = count.clone();

        let mut scheduler = ManualScheduler::new();
        scheduler.on_tick(Box::new(move |_| seen.set(seen.get() + 1)));
        scheduler.step(0.016);
        scheduler.cancel();

        assert!(!scheduler.step(0.016));
        assert_eq!(count.get(), 1);
        assert!(!scheduler.is_subscribed());
    }

    #[test]
    fn resubscribe_replaces_callback() {
        let count = Rc::new(Cell::new(0u32));
        let first = count.clone();
        let second = count.clone();

        let mut scheduler = ManualScheduler::new();
        scheduler.on_tick(Box::new(move |_| first.set(first.get() + 1)));
        scheduler.on_tick(Box::new(move |_| second.set(second.get() + 10)));
        scheduler.step(0.016);
        assert_eq!(count.get(), 10);
    }
}
