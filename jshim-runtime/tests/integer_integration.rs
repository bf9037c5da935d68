use std::collections::{BTreeSet, HashMap, HashSet};

use insta::assert_snapshot;
use jshim_runtime::Value;
use jshim_runtime::integer::Integer;

fn describe_parse(inputs: &[&str]) -> String {
    inputs
        .iter()
        .map(|input| match Integer::parse_int(input) {
            Ok(v) => format!("{:?} -> {}", input, v),
            Err(e) => format!("{:?} -> error: {}", input, e),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn concrete_scenarios() {
    assert!(Integer::new(5).equals(&Value::Integer(Integer::new(5))));
    assert!(!Integer::new(5).equals(&Value::Integer(Integer::new(6))));
    assert_eq!(Integer::parse_int("123"), Ok(123));
    assert_eq!(Integer::parse_int("-7"), Ok(-7));
    assert!(Integer::parse_int("not_a_number").is_err());
    assert_eq!(Integer::new(0).to_display_string(), "0");
}

#[test]
fn parse_outcomes() {
    let report = describe_parse(&[
        "123",
        "-7",
        "+5",
        "",
        "abc",
        "12a",
        "  12",
        "-",
        "2147483647",
        "2147483648",
        "-2147483648",
        "-2147483649",
    ]);
    assert_snapshot!(report, @r#"
    "123" -> 123
    "-7" -> -7
    "+5" -> 5
    "" -> error: For input string: ""
    "abc" -> error: For input string: "abc"
    "12a" -> error: For input string: "12a"
    "  12" -> error: For input string: "  12"
    "-" -> error: For input string: "-"
    "2147483647" -> 2147483647
    "2147483648" -> error: For input string: "2147483648"
    "-2147483648" -> -2147483648
    "-2147483649" -> error: For input string: "-2147483649"
    "#);
}

#[test]
fn radix_error_messages() {
    let messages = [
        Integer::parse_int_radix("zz", 16),
        Integer::parse_int_radix("", 2),
        Integer::parse_int_radix("7", 1),
        Integer::parse_int_radix("7", 40),
    ]
    .into_iter()
    .map(|r| r.map_or_else(|e| e.to_string(), |v| v.to_string()))
    .collect::<Vec<_>>()
    .join("\n");
    assert_snapshot!(messages, @r#"
    For input string: "zz" under radix 16
    For input string: "" under radix 2
    radix 1 less than Character.MIN_RADIX
    radix 40 greater than Character.MAX_RADIX
    "#);
}

#[test]
fn renderings() {
    let rendered = [0, 7, -42, i32::MAX, i32::MIN]
        .into_iter()
        .map(Integer::new)
        .map(|i| format!("{} {:?} {}", i, i, Value::Integer(i)))
        .collect::<Vec<_>>()
        .join("\n");
    assert_snapshot!(rendered, @r"
    0 0 0
    7 7 7
    -42 -42 -42
    2147483647 2147483647 2147483647
    -2147483648 -2147483648 -2147483648
    ");
}

#[test]
fn equals_never_crosses_variants() {
    let seven = Integer::new(7);
    let others = [
        Value::Null,
        Value::Bool(true),
        Value::Int(7),
        Value::Str("7".to_string()),
    ];
    for other in &others {
        assert!(!seven.equals(other), "7 should not equal {}", other.type_name());
        assert!(!other.equals(&Value::Integer(seven)));
    }
    assert!(Value::Integer(seven).equals(&Value::Integer(Integer::new(7))));
    assert!(!Value::Null.equals(&Value::Null));
}

#[test]
fn value_of_boxes_parsed_value() {
    let boxed: Integer = "-42".parse().expect("valid integer");
    assert_eq!(boxed, Integer::new(-42));
    assert_eq!(boxed.int_value(), -42);
    assert_eq!(Integer::value_of("x").unwrap_err().input(), Some("x"));
}

#[test]
fn boxed_integers_key_collections_by_value() {
    let mut counts: HashMap<Integer, usize> = HashMap::new();
    for text in ["1", "2", "1", "+1", "3", "2"] {
        let key = Integer::value_of(text).expect("valid integer");
        *counts.entry(key).or_default() += 1;
    }
    assert_eq!(counts[&Integer::new(1)], 3);
    assert_eq!(counts[&Integer::new(2)], 2);
    assert_eq!(counts[&Integer::new(3)], 1);

    let set: HashSet<Value> = [Value::Integer(Integer::new(4)), Value::Integer(Integer::new(4))]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 1);

    let ordered: BTreeSet<Integer> = [3, -1, 2].into_iter().map(Integer::from).collect();
    let rendered: Vec<String> = ordered.iter().map(Integer::to_display_string).collect();
    assert_eq!(rendered, ["-1", "2", "3"]);
}

#[test]
fn boxed_integers_are_shareable_across_threads() {
    let shared = std::sync::Arc::new(Integer::new(99));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = std::sync::Arc::clone(&shared);
            std::thread::spawn(move || shared.equals(&Value::Integer(Integer::new(99))))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().expect("thread panicked"));
    }
}
