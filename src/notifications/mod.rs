//! Toast notifications shown to the user after page actions.

#[cfg(feature = "test-mocks")]
pub mod mock;

/// A single transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    /// Rendered with error styling when set.
    pub destructive: bool,
}

impl Toast {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            destructive: false,
        }
    }

    pub fn destructive(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            destructive: true,
        }
    }
}

/// Sink for toasts, provided by the hosting UI.
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

/// Prints toasts to the terminal, destructive ones on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, toast: Toast) {
        if toast.destructive {
            log::warn!("Toast: {}", toast.title);
            eprintln!("✗ {}", toast.title);
        } else {
            log::info!("Toast: {}", toast.title);
            println!("✓ {}", toast.title);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_severity() {
        assert!(!Toast::success("Saved").destructive);
        let failure = Toast::destructive("Failed");
        assert!(failure.destructive);
        assert_eq!(failure.title, "Failed");
    }
}
