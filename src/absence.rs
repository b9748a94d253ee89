use crate::checks::{need, SUCCESS};
use crate::value::Value;

pub fn should_be_nil(actual: &Value, expected: &[Value]) -> String {
    if let Err(message) = need(0, expected) {
        return message;
    }
    if !actual.is_nil() {
        return format!("Expected '{}' to be nil (but it wasn't)!", actual);
    }
    SUCCESS.to_string()
}

pub fn should_not_be_nil(actual: &Value, expected: &[Value]) -> String {
    if let Err(message) = need(0, expected) {
        return message;
    }
    if actual.is_nil() {
        return format!("Expected '{}' to NOT be nil (but it was)!", actual);
    }
    SUCCESS.to_string()
}

fn should_be_bool(actual: &Value, expected: &[Value], want: bool) -> String {
    if let Err(message) = need(0, expected) {
        return message;
    }
    match actual.concrete() {
        Value::Boolean(b) if *b == want => SUCCESS.to_string(),
        _ => format!("Expected '{}' (not '{}')!", want, actual),
    }
}

pub fn should_be_true(actual: &Value, expected: &[Value]) -> String {
    should_be_bool(actual, expected, true)
}

pub fn should_be_false(actual: &Value, expected: &[Value]) -> String {
    should_be_bool(actual, expected, false)
}

#[cfg(test)]
mod test {
    use crate::absence::{should_be_false, should_be_nil, should_be_true, should_not_be_nil};
    use crate::value::{Struct, Value};

    #[test]
    fn every_nil_kind() {
        for value in &[
            Value::Nil,
            Value::nil_pointer(),
            Value::empty_interface(),
            Value::interface(Value::nil_pointer()),
            Value::Slice(None),
            Value::Map(None),
            Value::Function(None),
            Value::Channel(None),
        ] {
            assert_eq!(should_be_nil(value, &[]), "", "{}", value.kind());
        }
    }

    #[test]
    fn empty_values_are_not_nil() {
        assert_eq!(
            should_be_nil(&Value::slice(Vec::new()), &[]),
            "Expected '[]' to be nil (but it wasn't)!"
        );
        assert_eq!(
            should_be_nil(&Value::map(Vec::new()), &[]),
            "Expected 'map[]' to be nil (but it wasn't)!"
        );
        assert_eq!(should_not_be_nil(&Value::from(""), &[]), "");
        assert_eq!(should_not_be_nil(&Value::function(), &[]), "");
    }

    #[test]
    fn nil_pointer_renders_as_nil() {
        assert_eq!(
            should_not_be_nil(&Value::nil_pointer(), &[]),
            "Expected '<nil>' to NOT be nil (but it was)!"
        );
    }

    #[test]
    fn interface_holding_a_struct_pointer() {
        let thing = Value::interface(Value::pointer(Struct::new("Thing")));
        assert_eq!(
            should_be_nil(&thing, &[]),
            "Expected '&{}' to be nil (but it wasn't)!"
        );
    }

    #[test]
    fn booleans_must_match_exactly() {
        assert_eq!(should_be_true(&Value::interface(true), &[]), "");
        assert_eq!(
            should_be_true(&"true".into(), &[]),
            "Expected 'true' (not 'true')!"
        );
        assert_eq!(
            should_be_false(&Value::Nil, &[]),
            "Expected 'false' (not '<nil>')!"
        );
        assert_eq!(
            should_be_false(&0.into(), &[]),
            "Expected 'false' (not '0')!"
        );
    }
}
