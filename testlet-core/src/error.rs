use thiserror::Error;

use crate::constants::{REQUIRED_OPERATIONAL_COUNT, REQUIRED_PRETEST_COUNT};

/// Construction-time validation failures. No testlet is produced when any of
/// these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TestletError {
    #[error("testlet identifier is missing")]
    MissingIdentifier,

    #[error("testlet items are missing")]
    MissingItems,

    #[error(
        "invalid testlet composition: found {pretest} pretest and {operational} operational items, \
         expected exactly {expected_pretest} pretest and {expected_operational} operational",
        expected_pretest = REQUIRED_PRETEST_COUNT,
        expected_operational = REQUIRED_OPERATIONAL_COUNT
    )]
    InvalidComposition { pretest: usize, operational: usize },
}
