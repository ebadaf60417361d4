// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Cross-cutting helpers for application developers: call instrumentation and
//! scoped timing.

pub mod instrument;
mod timer;

pub use timer::{Elapsed, Timer, TimerScope};
