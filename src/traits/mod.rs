pub mod observer;

pub use observer::AppStateObserver;
