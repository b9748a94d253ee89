use crate::checks::{need, SUCCESS};
use crate::eq::{loosely_equal, resembles};
use crate::value::Value;
use log::trace;

pub fn should_equal(actual: &Value, expected: &[Value]) -> String {
    if let Err(message) = need(1, expected) {
        return message;
    }
    let expected = &expected[0];
    if !loosely_equal(actual, expected) {
        trace!("{} ({}) != {} ({})", actual, actual.kind(), expected, expected.kind());
        return format!(
            "Expected '{}'\nto equal '{}'\n(but it didn't)!",
            actual, expected
        );
    }
    SUCCESS.to_string()
}

pub fn should_not_equal(actual: &Value, expected: &[Value]) -> String {
    if let Err(message) = need(1, expected) {
        return message;
    }
    let expected = &expected[0];
    if loosely_equal(actual, expected) {
        return format!(
            "Expected     '{}'\nto NOT equal '{}'\n(but it did)!",
            actual, expected
        );
    }
    SUCCESS.to_string()
}

pub fn should_resemble(actual: &Value, expected: &[Value]) -> String {
    if let Err(message) = need(1, expected) {
        return message;
    }
    let expected = &expected[0];
    if !resembles(actual, expected) {
        return format!(
            "Expected '{}'\nto resemble '{}'\n(but it didn't)!",
            actual, expected
        );
    }
    SUCCESS.to_string()
}

pub fn should_not_resemble(actual: &Value, expected: &[Value]) -> String {
    if let Err(message) = need(1, expected) {
        return message;
    }
    let expected = &expected[0];
    if resembles(actual, expected) {
        return format!(
            "Expected        '{}'\nto NOT resemble '{}'\n(but it did)!",
            actual, expected
        );
    }
    SUCCESS.to_string()
}
