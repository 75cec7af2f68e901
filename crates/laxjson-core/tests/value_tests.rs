use laxjson_core::{parse, Array, LaxError, Number, Object, Value, ValueKind};
use serde_json::json;

fn parse_obj(text: &str) -> Object {
    parse(text).expect("document must parse to an object")
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn render_single_key_unwraps() {
    let obj = parse_obj(r#"{"only":"v"}"#);
    assert_eq!(obj.to_string(), "v");
    assert_eq!(obj.render().as_deref(), Some("v"));
}

#[test]
fn render_two_keys_as_map() {
    let obj = parse_obj(r#"{"a":"x","b":"y"}"#);
    assert_eq!(obj.to_string(), "{a=x, b=y}");
}

#[test]
fn render_single_array_key_as_map() {
    let obj = parse_obj(r#"{"tags":["a","b"]}"#);
    assert_eq!(obj.to_string(), "{tags=[a, b]}");
}

#[test]
fn render_nested_single_key_unwraps_inside_map() {
    let obj = parse_obj(r#"{"user":{"name":"Ann"},"role":"admin"}"#);
    assert_eq!(obj.to_string(), "{user=Ann, role=admin}");
}

#[test]
fn render_nested_single_key_chain_unwraps() {
    let obj = parse_obj(r#"{"a":{"b":{"c":"leaf"}}}"#);
    assert_eq!(obj.to_string(), "leaf");
}

#[test]
fn render_absent_values_as_null() {
    let obj = parse_obj(r#"{"a":[],"b":{},"c":null}"#);
    assert_eq!(obj.to_string(), "{a=null, b=null, c=null}");
}

#[test]
fn render_numbers() {
    let obj = parse_obj(r#"{"n":[1,2.0,2.5]}"#);
    assert_eq!(obj.to_string(), "{n=[1, 2.0, 2.5]}");
}

#[test]
fn render_object_array() {
    let obj = parse_obj(r#"{"list":[{"a":"1"},{"a":"2","b":"3"}],"n":"x"}"#);
    assert_eq!(obj.to_string(), "{list=[1, {a=2, b=3}], n=x}");
}

#[test]
fn render_empty_object() {
    let obj = Object::new();
    assert_eq!(obj.render(), None);
    assert_eq!(obj.to_string(), "");
}

#[test]
fn render_single_absent_value_as_map() {
    let mut obj = Object::new();
    obj.insert("gone", None);
    assert_eq!(obj.to_string(), "{gone=null}");
}

// ============================================================================
// Typed Accessors
// ============================================================================

#[test]
fn accessors_return_none_for_missing_key() {
    let obj = parse_obj(r#"{"a":"x"}"#);
    assert_eq!(obj.get("zzz"), None);
    assert_eq!(obj.get_str("zzz").unwrap(), None);
    assert_eq!(obj.get_object("zzz").unwrap(), None);
    assert_eq!(obj.get_array("zzz").unwrap(), None);
    assert_eq!(obj.get_object_array("zzz").unwrap(), None);
}

#[test]
fn get_object_on_string_is_type_mismatch() {
    let obj = parse_obj(r#"{"a":"x"}"#);
    let err = obj.get_object("a").unwrap_err();
    assert_eq!(
        err,
        LaxError::TypeMismatch {
            key: "a".to_string(),
            expected: "object",
            found: ValueKind::String,
        }
    );
}

#[test]
fn get_object_array_on_string_array_is_type_mismatch() {
    let obj = parse_obj(r#"{"tags":["a"]}"#);
    let err = obj.get_object_array("tags").unwrap_err();
    assert!(matches!(
        err,
        LaxError::TypeMismatch {
            found: ValueKind::StringArray,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "type mismatch for key 'tags': expected object array, found string array"
    );
}

#[test]
fn get_str_on_object_is_type_mismatch() {
    let obj = parse_obj(r#"{"o":{"a":"1"}}"#);
    assert!(obj.get_str("o").is_err());
}

#[test]
fn get_numbers_on_object_array_is_type_mismatch() {
    let obj = parse_obj(r#"{"list":[{"a":"1"}]}"#);
    let err = obj.get_numbers("list").unwrap_err();
    assert!(matches!(
        err,
        LaxError::TypeMismatch {
            expected: "number array",
            found: ValueKind::ObjectArray,
            ..
        }
    ));
}

#[test]
fn get_array_accepts_any_element_kind() {
    let obj = parse_obj(r#"{"s":["a"],"n":[1],"o":[{"a":"1"}]}"#);
    assert_eq!(obj.get_array("s").unwrap().map(Array::len), Some(1));
    assert_eq!(obj.get_array("n").unwrap().map(Array::len), Some(1));
    assert_eq!(obj.get_array("o").unwrap().map(Array::len), Some(1));
}

#[test]
fn value_kind_reports_variant() {
    let obj = parse_obj(r#"{"s":"x","n":[1],"o":{"a":"1"},"z":null}"#);
    assert_eq!(obj.get("s").map(Value::kind), Some(ValueKind::String));
    assert_eq!(obj.get("n").map(Value::kind), Some(ValueKind::NumberArray));
    assert_eq!(obj.get("o").map(Value::kind), Some(ValueKind::Object));
    assert_eq!(obj.get("z").map(Value::kind), Some(ValueKind::Null));
}

#[test]
fn iter_includes_absent_values_in_order() {
    let obj = parse_obj(r#"{"a":"1","b":[],"c":"3"}"#);
    let entries: Vec<(&str, Option<&Value>)> = obj.iter().collect();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0], ("a", Some(&Value::from("1"))));
    assert_eq!(entries[1], ("b", None));
    assert_eq!(entries[2], ("c", Some(&Value::from("3"))));
}

// ============================================================================
// Object Construction
// ============================================================================

#[test]
fn insert_overwrites_in_place() {
    let mut obj = Object::new();
    obj.insert("a", Some(Value::from("1")));
    obj.insert("b", Some(Value::from("2")));
    obj.insert("a", Some(Value::from("3")));
    let keys: Vec<&str> = obj.keys().collect();
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(obj.get_str("a").unwrap(), Some("3"));
}

#[test]
fn collect_into_object() {
    let obj: Object = [("x", Some(Value::from("1"))), ("y", None)]
        .into_iter()
        .collect();
    assert_eq!(obj.len(), 2);
    assert!(obj.contains_key("y"));
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn number_from_literal() {
    assert_eq!(Number::from_literal("42"), Some(Number::Int(42)));
    assert_eq!(Number::from_literal("4.5"), Some(Number::Float(4.5)));
    assert_eq!(Number::from_literal(".5"), Some(Number::Float(0.5)));
    assert_eq!(Number::from_literal("1..2"), None);
    assert_eq!(Number::from_literal("99999999999999999999"), None);
}

#[test]
fn number_conversions() {
    assert_eq!(Number::Int(3).as_i64(), Some(3));
    assert_eq!(Number::Float(3.5).as_i64(), None);
    assert_eq!(Number::Int(3).as_f64(), 3.0);
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn serialize_to_json_value() {
    let obj = parse_obj(r#"{"a":"1","n":[1,2.5],"o":{"k":"v"},"z":null,"e":[]}"#);
    let value = serde_json::to_value(&obj).unwrap();
    assert_eq!(
        value,
        json!({"a": "1", "n": [1, 2.5], "o": {"k": "v"}, "z": null, "e": null})
    );
}

#[test]
fn serialize_preserves_key_order() {
    let obj = parse_obj(r#"{"z":"1","a":"2","m":"3"}"#);
    let text = serde_json::to_string(&obj).unwrap();
    assert_eq!(text, r#"{"z":"1","a":"2","m":"3"}"#);
}
