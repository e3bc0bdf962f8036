/// Validated testlet and its randomization.
///
/// A `Testlet` can only be obtained through validation, and it owns its item
/// vector, so the composition checked at construction holds for its whole
/// lifetime without re-checking.
use rand::Rng;
use tracing::{debug, trace, warn};

use crate::constants::{LEADING_PRETEST_COUNT, REQUIRED_OPERATIONAL_COUNT, REQUIRED_PRETEST_COUNT};
use crate::error::TestletError;
use crate::shuffle::{fisher_yates, front_load_pretest};
use crate::types::{CompositionCounts, Item, TestletInput};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testlet {
    id: String,
    items: Vec<Item>,
}

impl Testlet {
    /// Validate and build a testlet.
    ///
    /// Fails with `MissingIdentifier` for a blank id, otherwise with
    /// `InvalidComposition` unless the items hold exactly
    /// `REQUIRED_PRETEST_COUNT` pretest and `REQUIRED_OPERATIONAL_COUNT`
    /// operational entries.
    pub fn new(id: impl Into<String>, items: Vec<Item>) -> Result<Self, TestletError> {
        let id = id.into();
        if id.trim().is_empty() {
            warn!("rejected testlet: missing identifier");
            return Err(TestletError::MissingIdentifier);
        }

        if let Err(e) = validate_composition(&items) {
            warn!(testlet_id = %id, error = %e, "rejected testlet");
            return Err(e);
        }

        debug!(testlet_id = %id, items = items.len(), "testlet validated");
        Ok(Testlet { id, items })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Items in the order they were supplied.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Randomize using the thread-local generator.
    pub fn randomize(&self) -> Vec<Item> {
        self.randomize_with(&mut rand::rng())
    }

    /// Return a new ordering of this testlet's items.
    ///
    /// Phase 1 shuffles a copy uniformly. Phase 2 swaps the first
    /// `LEADING_PRETEST_COUNT` pretest items (in shuffled order) into the
    /// leading positions. The testlet itself is left untouched.
    pub fn randomize_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Item> {
        let mut result = self.items.clone();
        fisher_yates(&mut result, rng);
        let placed = front_load_pretest(&mut result, LEADING_PRETEST_COUNT);
        debug_assert_eq!(placed, LEADING_PRETEST_COUNT);

        trace!(testlet_id = %self.id, leading = placed, "testlet randomized");
        result
    }
}

impl TryFrom<TestletInput> for Testlet {
    type Error = TestletError;

    fn try_from(input: TestletInput) -> Result<Self, Self::Error> {
        let id = input.testlet_id.ok_or(TestletError::MissingIdentifier)?;
        let items = input.items.ok_or(TestletError::MissingItems)?;
        Testlet::new(id, items)
    }
}

/// Check that `items` has exactly the required number of items per category.
pub fn validate_composition(items: &[Item]) -> Result<(), TestletError> {
    let counts = CompositionCounts::of(items);
    if counts.pretest != REQUIRED_PRETEST_COUNT || counts.operational != REQUIRED_OPERATIONAL_COUNT {
        return Err(TestletError::InvalidComposition {
            pretest: counts.pretest,
            operational: counts.operational,
        });
    }
    Ok(())
}
