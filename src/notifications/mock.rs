//! Mock notifier for page tests.

use mockall::mock;

use crate::notifications::{Notifier, Toast};

mock! {
    pub ToastSink {}

    impl Notifier for ToastSink {
        fn notify(&self, toast: Toast);
    }
}
