//! testlet-core: Fixed-composition testlet validation and randomization.
//!
//! A testlet holds exactly `REQUIRED_PRETEST_COUNT` pretest items and
//! `REQUIRED_OPERATIONAL_COUNT` operational items. Randomizing it shuffles the
//! items and then forces `LEADING_PRETEST_COUNT` pretest items to the front.
//! No IO: bring your own item source.
//!
//! # Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use testlet_core::{Item, Testlet, LEADING_PRETEST_COUNT};
//!
//! let mut items: Vec<Item> = (1..=5).map(|x| Item::pretest(format!("Pretest{x}"))).collect();
//! items.extend((6..=25).map(|x| Item::operational(format!("Operational{x}"))));
//!
//! let testlet = Testlet::new("t1", items).unwrap();
//! let ordered = testlet.randomize_with(&mut StdRng::seed_from_u64(7));
//!
//! assert_eq!(ordered.len(), 25);
//! assert!(ordered[..LEADING_PRETEST_COUNT].iter().all(|i| i.is_pretest()));
//! ```

pub mod constants;
pub mod error;
pub mod shuffle;
pub mod testlet;
pub mod types;

// Re-export primary public API at crate root.
pub use constants::{LEADING_PRETEST_COUNT, REQUIRED_OPERATIONAL_COUNT, REQUIRED_PRETEST_COUNT, TESTLET_SIZE};
pub use error::TestletError;
pub use testlet::{validate_composition, Testlet};
pub use types::{CompositionCounts, Item, ItemKind, TestletInput};
