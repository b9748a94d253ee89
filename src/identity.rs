use crate::checks::{need, SUCCESS};
use crate::value::Value;
use log::trace;

const SHOULD_BE_POINTERS: &str = "Both arguments should be pointers";

enum Operand {
    First,
    Second,
}

impl Operand {
    fn ordinal(&self) -> &'static str {
        match self {
            Operand::First => "first",
            Operand::Second => "second",
        }
    }
}

fn pointer_address(value: &Value, operand: Operand) -> Result<usize, String> {
    if value.is_nil() {
        return Err(format!(
            "{} (the {} was nil)!",
            SHOULD_BE_POINTERS,
            operand.ordinal()
        ));
    }
    value.address().ok_or_else(|| {
        format!(
            "{} (the {} was not)!",
            SHOULD_BE_POINTERS,
            operand.ordinal()
        )
    })
}

/// Resolves both operands to addresses, failing on the first operand that is nil or not a
/// pointer.
fn addresses(actual: &Value, expected: &Value) -> Result<(usize, usize), String> {
    let first = pointer_address(actual, Operand::First)?;
    let second = pointer_address(expected, Operand::Second)?;
    Ok((first, second))
}

pub fn should_point_to(actual: &Value, expected: &[Value]) -> String {
    if let Err(message) = need(1, expected) {
        return message;
    }
    let expected = &expected[0];
    let (first, second) = match addresses(actual, expected) {
        Ok(addresses) => addresses,
        Err(message) => return message,
    };
    if first != second {
        trace!("0x{:x} and 0x{:x} are different addresses", first, second);
        return format!(
            "Expected '{}' (address: '{}') and '{}' (address: '{}') to be the same address (but their weren't)!",
            actual, first, expected, second
        );
    }
    SUCCESS.to_string()
}

pub fn should_not_point_to(actual: &Value, expected: &[Value]) -> String {
    if let Err(message) = need(1, expected) {
        return message;
    }
    let expected = &expected[0];
    let (first, second) = match addresses(actual, expected) {
        Ok(addresses) => addresses,
        Err(message) => return message,
    };
    if first == second {
        return format!(
            "Expected '{}' and '{}' to be different references (but they matched: '{}')!",
            actual, expected, first
        );
    }
    SUCCESS.to_string()
}
