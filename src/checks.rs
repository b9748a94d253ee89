use crate::value::Value;
use log::trace;

/// Returned by an assertion that passed.
pub const SUCCESS: &str = "";

/// Checks that an assertion received exactly `required` comparison values.
pub fn need(required: usize, expected: &[Value]) -> Result<(), String> {
    if expected.len() != required {
        trace!(
            "arity mismatch: required {}, provided {}",
            required,
            expected.len()
        );
        return Err(format!(
            "This assertion requires exactly {} comparison values (you provided {}).",
            required,
            expected.len()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::checks::need;
    use crate::value::Value;

    #[test]
    fn exact_count_passes() {
        assert_eq!(need(0, &[]), Ok(()));
        assert_eq!(need(1, &[Value::Nil]), Ok(()));
    }

    #[test]
    fn wrong_count_fails() {
        assert_eq!(
            need(1, &[]),
            Err("This assertion requires exactly 1 comparison values (you provided 0).".to_string())
        );
        assert_eq!(
            need(0, &[Value::from(1), Value::from(2), Value::from(3)]),
            Err("This assertion requires exactly 0 comparison values (you provided 3).".to_string())
        );
    }
}
