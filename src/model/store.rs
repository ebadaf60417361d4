// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::errors::{AlsError, AlsResult, ErrorDetails};
use crate::observability::messages::store::{
    AppStateChanged, ObserverNotRegistered, ObserverRegistrationChanged,
};
use crate::observability::messages::StructuredLog;
use crate::traits::AppStateObserver;

/// Holds and maintains the application dynamic data.
///
/// The store is created once by the application and shared with every
/// collaborator through an `Rc`. All operations take `&self`, so observers
/// holding the same `Rc` can read the flags while being notified.
///
/// Each flag write, even one that does not change the value, is followed by a
/// synchronous notification of every registered observer in registration
/// order. The store is single-threaded: it is neither `Send` nor `Sync`.
///
/// # Example
/// ```
/// use std::rc::Rc;
/// use als_core::model::{CallbackObserver, DataStore};
///
/// let store = DataStore::shared();
/// store.add_observer(Rc::new(CallbackObserver::new("ui", || println!("refresh"))));
///
/// store.set_scan_in_progress(true);
/// assert!(store.scan_in_progress());
/// ```
#[derive(Default)]
pub struct DataStore {
    scan_in_progress: Cell<bool>,
    web_server_is_running: Cell<bool>,
    observers: RefCell<Vec<Rc<dyn AppStateObserver>>>,
}

impl DataStore {
    /// Both flags start cleared, with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    /// Is the input scanner running.
    pub fn scan_in_progress(&self) -> bool {
        crate::logged!("DataStore::scan_in_progress", (), self.scan_in_progress.get())
    }

    /// Sets the scanner running flag and notifies observers.
    pub fn set_scan_in_progress(&self, in_progress: bool) {
        crate::logged!("DataStore::set_scan_in_progress", (in_progress,), {
            self.scan_in_progress.set(in_progress);
            self.notify_observers("scan_in_progress", in_progress);
        })
    }

    /// Is the web server running.
    pub fn web_server_is_running(&self) -> bool {
        crate::logged!(
            "DataStore::web_server_is_running",
            (),
            self.web_server_is_running.get()
        )
    }

    /// Sets the web server running flag and notifies observers.
    pub fn set_web_server_is_running(&self, running: bool) {
        crate::logged!("DataStore::set_web_server_is_running", (running,), {
            self.web_server_is_running.set(running);
            self.notify_observers("web_server_is_running", running);
        })
    }

    /// Appends an observer. The same observer may be registered more than once.
    pub fn add_observer(&self, observer: Rc<dyn AppStateObserver>) {
        crate::logged!("DataStore::add_observer", (observer.name(),), {
            let mut observers = self.observers.borrow_mut();
            observers.push(observer);

            ObserverRegistrationChanged {
                registered: true,
                observer_count: observers.len(),
            }
            .log();
        })
    }

    /// Removes the first registration of `observer`, matched by identity.
    ///
    /// Fails with [`ErrorDetails::ObserverNotFound`] when it is not registered.
    pub fn remove_observer<O>(&self, observer: &Rc<O>) -> AlsResult<()>
    where
        O: AppStateObserver + ?Sized,
    {
        crate::try_logged!("DataStore::remove_observer", (observer.name(),), {
            let target = Rc::as_ptr(observer).cast::<()>();
            let mut observers = self.observers.borrow_mut();

            let position = observers
                .iter()
                .position(|registered| Rc::as_ptr(registered).cast::<()>() == target);

            match position {
                Some(index) => {
                    observers.remove(index);
                    ObserverRegistrationChanged {
                        registered: false,
                        observer_count: observers.len(),
                    }
                    .log();
                    Ok(())
                }
                None => {
                    ObserverNotRegistered {
                        observer_count: observers.len(),
                    }
                    .log();
                    Err(AlsError::new(
                        "Could not remove observer",
                        ErrorDetails::ObserverNotFound {
                            registered: observers.len(),
                        },
                    ))
                }
            }
        })
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Tells all registered observers to update according to the new state.
    ///
    /// Works on a snapshot of the observer list: registrations changed by an
    /// observer during the pass take effect on the next one.
    fn notify_observers(&self, flag: &str, value: bool) {
        crate::logged!("DataStore::notify_observers", (flag, value), {
            let observers: Vec<Rc<dyn AppStateObserver>> = self.observers.borrow().clone();

            let msg = AppStateChanged {
                flag,
                value,
                observer_count: observers.len(),
            };
            let span = msg.span("notify_observers");
            let _guard = span.enter();
            msg.log();

            for observer in &observers {
                observer.update_according_to_app_state();
            }
        })
    }
}

impl fmt::Debug for DataStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let observers = self.observers.borrow();
        f.debug_struct("DataStore")
            .field("scan_in_progress", &self.scan_in_progress.get())
            .field("web_server_is_running", &self.web_server_is_running.get())
            .field(
                "observers",
                &observers.iter().map(|o| o.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
