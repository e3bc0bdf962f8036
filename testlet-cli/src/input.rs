/// Testlet descriptions: JSON or plain text, auto-detected.
///
/// JSON: `{"testlet_id": "t1", "items": [{"item_id": "Pretest1", "item_type": "pretest"}, ...]}`
///
/// Plain text:
/// ```text
/// # comments and blank lines are ignored
/// testlet t1
/// Pretest1 pretest
/// Operational6 operational
/// ```
use testlet_core::{Item, ItemKind, TestletInput, REQUIRED_PRETEST_COUNT, TESTLET_SIZE};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("input looks like JSON but failed to parse: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line}: expected \"<item_id> <pretest|operational>\", got \"{text}\"")]
    MalformedLine { line: usize, text: String },

    #[error("line {line}: unknown item type \"{kind}\" (use \"pretest\" or \"operational\")")]
    UnknownKind { line: usize, kind: String },

    #[error("line {line}: testlet identifier declared twice")]
    DuplicateHeader { line: usize },
}

/// Parse a testlet description. Missing fields stay `None` so that the core
/// reports them as validation errors.
pub fn parse_testlet(content: &str) -> Result<TestletInput, InputError> {
    let trimmed = content.trim();
    if trimmed.starts_with('{') {
        Ok(serde_json::from_str(trimmed)?)
    } else {
        parse_plain(trimmed)
    }
}

fn parse_plain(content: &str) -> Result<TestletInput, InputError> {
    let mut testlet_id: Option<String> = None;
    let mut items: Vec<Item> = Vec::new();

    for (i, raw) in content.lines().enumerate() {
        let line = i + 1;
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        let fields: Vec<&str> = text.split_whitespace().collect();
        match fields.as_slice() {
            ["testlet", id] => {
                if testlet_id.is_some() {
                    return Err(InputError::DuplicateHeader { line });
                }
                testlet_id = Some((*id).to_string());
            }
            [id, kind] => items.push(Item::new(*id, parse_kind(kind, line)?)),
            _ => {
                return Err(InputError::MalformedLine { line, text: text.to_string() });
            }
        }
    }

    Ok(TestletInput {
        testlet_id,
        items: if items.is_empty() { None } else { Some(items) },
    })
}

fn parse_kind(kind: &str, line: usize) -> Result<ItemKind, InputError> {
    match kind.to_ascii_lowercase().as_str() {
        "pretest" => Ok(ItemKind::Pretest),
        "operational" => Ok(ItemKind::Operational),
        _ => Err(InputError::UnknownKind { line, kind: kind.to_string() }),
    }
}

/// A valid testlet: `Pretest1..PretestP` followed by `Operational{P+1}..Operational{N}`.
pub fn sample_input(testlet_id: &str) -> TestletInput {
    let mut items = Vec::with_capacity(TESTLET_SIZE);
    items.extend((1..=REQUIRED_PRETEST_COUNT).map(|x| Item::pretest(format!("Pretest{x}"))));
    items.extend((REQUIRED_PRETEST_COUNT + 1..=TESTLET_SIZE).map(|x| Item::operational(format!("Operational{x}"))));

    TestletInput {
        testlet_id: Some(testlet_id.to_string()),
        items: Some(items),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testlet_core::{Testlet, TestletError};

    #[test]
    fn test_parse_json() {
        let input = parse_testlet(
            r#"{"testlet_id": "t1", "items": [
                {"item_id": "Pretest1", "item_type": "pretest"},
                {"item_id": "Operational2", "item_type": "operational"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(input.testlet_id.as_deref(), Some("t1"));
        assert_eq!(
            input.items.unwrap(),
            vec![Item::pretest("Pretest1"), Item::operational("Operational2")]
        );
    }

    #[test]
    fn test_parse_json_missing_fields() {
        let input = parse_testlet(r#"{"items": null}"#).unwrap();
        assert!(input.testlet_id.is_none());
        assert!(input.items.is_none());
    }

    #[test]
    fn test_parse_json_bad_kind() {
        let err = parse_testlet(r#"{"testlet_id": "t", "items": [{"item_id": "x", "item_type": "bonus"}]}"#);
        assert!(matches!(err, Err(InputError::Json(_))));
    }

    #[test]
    fn test_parse_plain_text() {
        let input = parse_testlet("# header\ntestlet t9\n\nP1 pretest\nO1 Operational # trailing\n").unwrap();
        assert_eq!(input.testlet_id.as_deref(), Some("t9"));
        assert_eq!(input.items.unwrap(), vec![Item::pretest("P1"), Item::operational("O1")]);
    }

    #[test]
    fn test_parse_plain_without_items_or_header() {
        let input = parse_testlet("testlet only\n").unwrap();
        assert!(input.items.is_none());

        let input = parse_testlet("P1 pretest\n").unwrap();
        assert!(input.testlet_id.is_none());
    }

    #[test]
    fn test_parse_plain_errors() {
        assert!(matches!(
            parse_testlet("testlet t\nP1 bonus\n"),
            Err(InputError::UnknownKind { line: 2, .. })
        ));
        assert!(matches!(
            parse_testlet("testlet t\nP1 pretest extra\n"),
            Err(InputError::MalformedLine { line: 2, .. })
        ));
        assert!(matches!(
            parse_testlet("testlet a\ntestlet b\n"),
            Err(InputError::DuplicateHeader { line: 2 })
        ));
    }

    #[test]
    fn test_sample_input_is_valid() {
        let t = Testlet::try_from(sample_input("s1")).unwrap();
        assert_eq!(t.id(), "s1");
        assert_eq!(t.items().len(), TESTLET_SIZE);
        assert_eq!(t.items()[0], Item::pretest("Pretest1"));
        assert_eq!(t.items()[TESTLET_SIZE - 1], Item::operational(format!("Operational{TESTLET_SIZE}")));
    }

    #[test]
    fn test_sample_round_trips_through_json() {
        let json = serde_json::to_string(&sample_input("s1")).unwrap();
        let t = Testlet::try_from(parse_testlet(&json).unwrap()).unwrap();
        assert_eq!(t.items().len(), TESTLET_SIZE);
    }

    #[test]
    fn test_missing_header_surfaces_as_missing_identifier() {
        let input = parse_testlet("P1 pretest\n").unwrap();
        assert_eq!(Testlet::try_from(input), Err(TestletError::MissingIdentifier));
    }
}
