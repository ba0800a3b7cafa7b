use costbench_core::{Item, NewItem, Scores};
use serde_json::json;

fn sample_item() -> Item {
    let input = NewItem::new("Leaky faucet", 50.0, 3, 5);
    Item::from_parts(7, &input, input.scores(), 1_700_000_000)
}

#[test]
fn new_item_scores_match_scoring_engine() {
    let input = NewItem::new("Leaky faucet", 50.0, 3, 5);
    assert_eq!(
        input.scores(),
        Scores {
            benefit_score: 8,
            cost_score: 3,
            net_score: 5,
        }
    );
}

#[test]
fn item_serialization_uses_expected_wire_fields() {
    let value = serde_json::to_value(sample_item()).unwrap();

    assert_eq!(
        value,
        json!({
            "id": 7,
            "description": "Leaky faucet",
            "cost": 50.0,
            "severity": 3,
            "frequency": 5,
            "benefit_score": 8,
            "cost_score": 3,
            "net_score": 5,
            "created_at": 1_700_000_000,
        })
    );
}

#[test]
fn new_item_deserializes_from_create_payload() {
    let input: NewItem = serde_json::from_value(json!({
        "description": "Drafty window",
        "cost": 120,
        "severity": 4,
        "frequency": 6,
    }))
    .unwrap();

    assert_eq!(input, NewItem::new("Drafty window", 120.0, 4, 6));
}
