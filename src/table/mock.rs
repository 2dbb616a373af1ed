//! Mock viewport classifier for isolating table controllers in tests.

use mockall::mock;

use crate::table::viewport::{ViewportClass, ViewportClassifier};

mock! {
    pub Classifier {}

    impl ViewportClassifier for Classifier {
        fn classify(&self) -> ViewportClass;
    }
}
