//! Mock router for page tests.

use mockall::mock;

use crate::routes::Navigator;

mock! {
    pub Router {}

    impl Navigator for Router {
        fn navigate(&self, path: &str);
        fn go_back(&self);
    }
}
