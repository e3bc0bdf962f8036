/// Number of items tagged `Pretest` every testlet must contain.
pub const REQUIRED_PRETEST_COUNT: usize = 5;

/// Number of items tagged `Operational` every testlet must contain.
pub const REQUIRED_OPERATIONAL_COUNT: usize = 20;

/// Number of pretest items forced into the first positions of a randomized testlet.
///
/// Which pretest items lead, and in what order, comes from the preceding full
/// shuffle. The remaining `REQUIRED_PRETEST_COUNT - LEADING_PRETEST_COUNT`
/// pretest items are mixed in with the operational items after them.
pub const LEADING_PRETEST_COUNT: usize = 2;

/// Total number of items in a valid testlet.
pub const TESTLET_SIZE: usize = REQUIRED_PRETEST_COUNT + REQUIRED_OPERATIONAL_COUNT;

const _: () = assert!(
    LEADING_PRETEST_COUNT <= REQUIRED_PRETEST_COUNT,
    "LEADING_PRETEST_COUNT cannot exceed REQUIRED_PRETEST_COUNT"
);
