// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Scoped wall-clock timing.
//!
//! A [`Timer`] measures whatever runs while one of its [`TimerScope`] guards is
//! alive. The elapsed time is recorded when the guard is dropped, which also
//! happens on early returns and unwinding panics.
//!
//! ```
//! use als_core::utils::Timer;
//!
//! let mut timer = Timer::new();
//! {
//!     let _scope = timer.scope();
//!     // timed work
//! }
//! let elapsed = timer.elapsed().unwrap();
//! tracing::info!("code ran in {} ms", elapsed.in_milli_as_str());
//! ```

use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};

/// Elapsed time of one timed block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elapsed {
    millis: f64,
}

impl Elapsed {
    pub fn from_duration(duration: Duration) -> Self {
        Self {
            millis: duration.as_secs_f64() * 1000.0,
        }
    }

    pub fn from_millis(millis: f64) -> Self {
        Self { millis }
    }

    /// Elapsed time in milliseconds.
    pub fn in_milli(&self) -> f64 {
        self.millis
    }

    /// Elapsed time in milliseconds, rendered with exactly 3 decimal positions.
    pub fn in_milli_as_str(&self) -> String {
        format!("{:.3}", self.millis)
    }
}

impl Display for Elapsed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{:.3}", self.millis)
    }
}

/// Times any portion of code enclosed by one of its scopes.
#[derive(Debug, Default)]
pub struct Timer {
    elapsed: Option<Elapsed>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a timed block. The block ends when the returned guard is dropped.
    pub fn scope(&mut self) -> TimerScope<'_> {
        TimerScope {
            timer: self,
            start: Instant::now(),
        }
    }

    /// Result of the last completed scope, `None` while no scope has ended yet.
    pub fn elapsed(&self) -> Option<Elapsed> {
        self.elapsed
    }

    /// Runs `f` inside a scope and hands back its result with the elapsed time.
    pub fn measure<R>(f: impl FnOnce() -> R) -> (R, Elapsed) {
        let start = Instant::now();
        let result = f();
        (result, Elapsed::from_duration(start.elapsed()))
    }
}

/// Guard returned by [`Timer::scope`].
pub struct TimerScope<'a> {
    timer: &'a mut Timer,
    start: Instant,
}

impl Drop for TimerScope<'_> {
    fn drop(&mut self) {
        self.timer.elapsed = Some(Elapsed::from_duration(self.start.elapsed()));
    }
}
