use std::fmt;

/// Item category. The set is closed: every item is exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ItemKind {
    /// Field-tested item, not scored. Count and front placement are constrained.
    Pretest,
    /// Scored item.
    Operational,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Pretest => "pretest",
            ItemKind::Operational => "operational",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single test item.
///
/// Identifiers are opaque and not required to be unique; the randomizer only
/// moves items around, it never inspects `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    #[cfg_attr(feature = "serde", serde(rename = "item_id"))]
    pub id: String,
    #[cfg_attr(feature = "serde", serde(rename = "item_type"))]
    pub kind: ItemKind,
}

impl Item {
    pub fn new(id: impl Into<String>, kind: ItemKind) -> Self {
        Item { id: id.into(), kind }
    }

    pub fn pretest(id: impl Into<String>) -> Self {
        Item::new(id, ItemKind::Pretest)
    }

    pub fn operational(id: impl Into<String>) -> Self {
        Item::new(id, ItemKind::Operational)
    }

    pub fn is_pretest(&self) -> bool {
        self.kind == ItemKind::Pretest
    }
}

/// Raw testlet description as handed over by an input collaborator.
///
/// Both fields may be absent; `Testlet::try_from` turns a missing field into
/// the matching `TestletError` instead of a deserialization failure.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestletInput {
    #[cfg_attr(feature = "serde", serde(default))]
    pub testlet_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Option<Vec<Item>>,
}

/// Per-category tally of an item collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompositionCounts {
    pub pretest: usize,
    pub operational: usize,
}

impl CompositionCounts {
    pub fn of(items: &[Item]) -> Self {
        items.iter().fold(CompositionCounts::default(), |mut counts, item| {
            match item.kind {
                ItemKind::Pretest => counts.pretest += 1,
                ItemKind::Operational => counts.operational += 1,
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.pretest + self.operational
    }
}
