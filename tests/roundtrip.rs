use serde_json::json;
use xmljson::{ParseOptions, build, parse, parse_with};

#[test]
fn multi_key_input_round_trips_through_the_synthetic_root() {
    let input = json!({
        "amount": 725,
        "business": "Langworth Group",
        "name": "Money Market Account 0964",
        "type": "payment",
        "account": 62025968
    });

    let xml = build(&input).expect("build XML");
    assert!(xml.contains("<root>"));

    let back = parse(&xml).expect("parse built XML");
    assert_eq!(back, input);
}

#[test]
fn single_key_input_round_trips_through_its_own_root() {
    let input = json!({
        "payment": {
            "amount": 725,
            "business": "Langworth Group",
            "name": "Money Market Account 0964",
            "type": "payment",
            "account": 62025968
        }
    });

    let xml = build(&input).expect("build XML");
    assert!(xml.contains("<payment>"));

    let options = ParseOptions {
        root: "payment".to_string(),
        ..ParseOptions::default()
    };
    let back = parse_with(&xml, &options).expect("parse built XML");
    assert_eq!(back, input["payment"]);
}

#[test]
fn nested_structures_round_trip() {
    let input = json!({
        "order": {
            "id": 93,
            "customer": {
                "name": "Langworth Group",
                "vip": false
            },
            "total": 1299.5
        }
    });

    let xml = build(&input).expect("build XML");
    let options = ParseOptions {
        root: "order".to_string(),
        ..ParseOptions::default()
    };
    let back = parse_with(&xml, &options).expect("parse built XML");
    assert_eq!(back, input["order"]);
}

#[test]
fn attributes_and_text_round_trip() {
    let input = json!({
        "note": {
            "$": { "lang": "en" },
            "_": "hello"
        }
    });

    let xml = build(&input).expect("build XML");
    let back = parse(&xml).expect("parse built XML");
    assert_eq!(back, input);
}

#[test]
fn repeated_elements_round_trip() {
    let input = json!({
        "playlist": {
            "track": ["one", "two", "three"]
        }
    });

    let xml = build(&input).expect("build XML");
    let options = ParseOptions {
        root: "playlist".to_string(),
        ..ParseOptions::default()
    };
    let back = parse_with(&xml, &options).expect("parse built XML");
    assert_eq!(back, input["playlist"]);
}

#[test]
fn escaped_text_round_trips() {
    let input = json!({
        "expr": "1 < 2 && \"quoted\""
    });

    let xml = build(&input).expect("build XML");
    let back = parse(&xml).expect("parse built XML");
    assert_eq!(back, input);
}
