// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod image;
mod observers;
mod store;


pub use image::{Image, PixelType};
pub use observers::{CallbackObserver, StateLogger};
pub use store::DataStore;
