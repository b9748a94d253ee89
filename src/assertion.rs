use crate::absence::{should_be_false, should_be_nil, should_be_true, should_not_be_nil};
use crate::equality::{should_equal, should_not_equal, should_not_resemble, should_resemble};
use crate::identity::{should_not_point_to, should_point_to};
use crate::value::Value;
use log::debug;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Assertion {
    ShouldEqual,
    ShouldNotEqual,
    ShouldResemble,
    ShouldNotResemble,
    ShouldPointTo,
    ShouldNotPointTo,
    ShouldBeNil,
    ShouldNotBeNil,
    ShouldBeTrue,
    ShouldBeFalse,
}

impl Assertion {
    pub const ALL: [Assertion; 10] = [
        Assertion::ShouldEqual,
        Assertion::ShouldNotEqual,
        Assertion::ShouldResemble,
        Assertion::ShouldNotResemble,
        Assertion::ShouldPointTo,
        Assertion::ShouldNotPointTo,
        Assertion::ShouldBeNil,
        Assertion::ShouldNotBeNil,
        Assertion::ShouldBeTrue,
        Assertion::ShouldBeFalse,
    ];

    // Accepts both `ShouldEqual` and `should_equal`
    pub fn from_name(s: &str) -> Option<Assertion> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Assertion::ALL
            .iter()
            .copied()
            .find(|assertion| assertion.name().to_ascii_lowercase() == normalized)
    }

    pub fn name(self) -> &'static str {
        match self {
            Assertion::ShouldEqual => "ShouldEqual",
            Assertion::ShouldNotEqual => "ShouldNotEqual",
            Assertion::ShouldResemble => "ShouldResemble",
            Assertion::ShouldNotResemble => "ShouldNotResemble",
            Assertion::ShouldPointTo => "ShouldPointTo",
            Assertion::ShouldNotPointTo => "ShouldNotPointTo",
            Assertion::ShouldBeNil => "ShouldBeNil",
            Assertion::ShouldNotBeNil => "ShouldNotBeNil",
            Assertion::ShouldBeTrue => "ShouldBeTrue",
            Assertion::ShouldBeFalse => "ShouldBeFalse",
        }
    }

    /// The number of comparison values the assertion takes besides the actual value.
    pub fn arity(self) -> usize {
        match self {
            Assertion::ShouldEqual => 1,
            Assertion::ShouldNotEqual => 1,
            Assertion::ShouldResemble => 1,
            Assertion::ShouldNotResemble => 1,
            Assertion::ShouldPointTo => 1,
            Assertion::ShouldNotPointTo => 1,
            Assertion::ShouldBeNil => 0,
            Assertion::ShouldNotBeNil => 0,
            Assertion::ShouldBeTrue => 0,
            Assertion::ShouldBeFalse => 0,
        }
    }

    pub fn check(self, actual: &Value, expected: &[Value]) -> String {
        let f: fn(&Value, &[Value]) -> String = match self {
            Assertion::ShouldEqual => should_equal,
            Assertion::ShouldNotEqual => should_not_equal,
            Assertion::ShouldResemble => should_resemble,
            Assertion::ShouldNotResemble => should_not_resemble,
            Assertion::ShouldPointTo => should_point_to,
            Assertion::ShouldNotPointTo => should_not_point_to,
            Assertion::ShouldBeNil => should_be_nil,
            Assertion::ShouldNotBeNil => should_not_be_nil,
            Assertion::ShouldBeTrue => should_be_true,
            Assertion::ShouldBeFalse => should_be_false,
        };
        let result = f(actual, expected);
        debug!(
            "{} {} ({} comparison values): {}",
            self.name(),
            actual,
            expected.len(),
            if result.is_empty() { "pass" } else { "fail" }
        );
        result
    }
}

/// Runs `assertion` on `actual`, returning an empty string on success and the failure message
/// otherwise.
pub fn so(actual: &Value, assertion: Assertion, expected: &[Value]) -> String {
    assertion.check(actual, expected)
}
