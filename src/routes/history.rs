//! In-memory navigation history for hosts without a browser router.

use std::cell::RefCell;

use crate::routes::Navigator;

/// Stack of visited paths; the last entry is the current location.
#[derive(Debug)]
pub struct HistoryNavigator {
    entries: RefCell<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: RefCell::new(vec![initial.into()]),
        }
    }

    /// Path of the current entry, if any remains.
    pub fn current(&self) -> Option<String> {
        self.entries.borrow().last().cloned()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, path: &str) {
        log::info!("Navigating to {path}");
        self.entries.borrow_mut().push(path.to_string());
    }

    fn go_back(&self) {
        let mut entries = self.entries.borrow_mut();
        let left = entries.pop();
        log::info!(
            "Navigating back from {}",
            left.as_deref().unwrap_or("<empty history>")
        );
    }
}
