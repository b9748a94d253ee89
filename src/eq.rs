use crate::value::{Number, Value, Widened};
use std::iter::zip;
use std::rc::Rc;

// Bounds of the integer types as floats; the upper ones are exclusive
const I64_START: f64 = -9.223372036854775808e18;
const I64_END: f64 = 9.223372036854775808e18;
const U64_END: f64 = 1.8446744073709551616e19;

/// Compares two numbers by value, regardless of their concrete types.
pub fn numbers_equal(x: Number, y: Number) -> bool {
    match (x.widen(), y.widen()) {
        (Widened::Signed(a), Widened::Signed(b)) => a == b,
        (Widened::Unsigned(a), Widened::Unsigned(b)) => a == b,
        (Widened::Float(a), Widened::Float(b)) => a == b,
        (Widened::Signed(s), Widened::Unsigned(u)) | (Widened::Unsigned(u), Widened::Signed(s)) => {
            s >= 0 && s as u64 == u
        }
        (Widened::Signed(i), Widened::Float(f)) | (Widened::Float(f), Widened::Signed(i)) => {
            f.fract() == 0.0 && f >= I64_START && f < I64_END && f as i64 == i
        }
        (Widened::Unsigned(u), Widened::Float(f)) | (Widened::Float(f), Widened::Unsigned(u)) => {
            f.fract() == 0.0 && f >= 0.0 && f < U64_END && f as u64 == u
        }
    }
}

fn same_number_type(x: Number, y: Number) -> bool {
    x.kind() == y.kind()
}

/// Loose equality: numbers are coerced, references compare by identity and composite values
/// never compare equal.
pub fn loosely_equal(x: &Value, y: &Value) -> bool {
    let (x, y) = (x.concrete(), y.concrete());
    match (x, y) {
        (Value::Nil, Value::Nil)
        | (Value::Nil, Value::Interface(None))
        | (Value::Interface(None), Value::Nil)
        | (Value::Interface(None), Value::Interface(None)) => true,
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(*a, *b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Pointer(a), Value::Pointer(b)) => match (a, b) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        },
        (Value::Function(a), Value::Function(b)) | (Value::Channel(a), Value::Channel(b)) => {
            match (a, b) {
                (Some(a), Some(b)) => a.same(b),
                (None, None) => true,
                _ => false,
            }
        }
        _ => false,
    }
}

fn all_resemble<'a, I>(pairs: I) -> bool
where
    I: Iterator<Item = (&'a Value, &'a Value)>,
{
    let mut matched = true;
    for (x, y) in pairs {
        if !resembles(x, y) {
            matched = false;
        }
    }
    matched
}

// Pairs every entry of `a` with a distinct entry of `b`
fn entries_resemble(a: &[(Value, Value)], b: &[(Value, Value)]) -> bool {
    let mut used = vec![false; b.len()];
    for (key, value) in a {
        let found = b.iter().enumerate().position(|(i, (key1, value1))| {
            !used[i] && resembles(key, key1) && resembles(value, value1)
        });
        match found {
            Some(i) => used[i] = true,
            None => return false,
        }
    }
    true
}

/// Deep structural equality. Values must have the same kinds all the way down; pointers are
/// followed rather than compared by address.
pub fn resembles(x: &Value, y: &Value) -> bool {
    let (x, y) = (x.concrete(), y.concrete());
    match (x, y) {
        (Value::Nil, Value::Nil)
        | (Value::Nil, Value::Interface(None))
        | (Value::Interface(None), Value::Nil)
        | (Value::Interface(None), Value::Interface(None)) => true,
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => same_number_type(*a, *b) && numbers_equal(*a, *b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Struct(a), Value::Struct(b)) => {
            a.name == b.name
                && a.fields.len() == b.fields.len()
                && zip(&a.fields, &b.fields).all(|((name, _), (name1, _))| name == name1)
                && all_resemble(zip(&a.fields, &b.fields).map(|((_, v), (_, v1))| (v, v1)))
        }
        (Value::Slice(a), Value::Slice(b)) => match (a, b) {
            (Some(a), Some(b)) => a.len() == b.len() && all_resemble(zip(a, b)),
            (None, None) => true,
            _ => false,
        },
        (Value::Map(a), Value::Map(b)) => match (a, b) {
            (Some(a), Some(b)) => a.len() == b.len() && entries_resemble(a, b),
            (None, None) => true,
            _ => false,
        },
        (Value::Pointer(a), Value::Pointer(b)) => match (a, b) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b) || resembles(a, b),
            (None, None) => true,
            _ => false,
        },
        // Functions are only alike when both are nil
        (Value::Function(a), Value::Function(b)) => a.is_none() && b.is_none(),
        (Value::Channel(a), Value::Channel(b)) => match (a, b) {
            (Some(a), Some(b)) => a.same(b),
            (None, None) => true,
            _ => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use crate::eq::{loosely_equal, numbers_equal, resembles};
    use crate::value::{Number, Struct, Value};

    fn thing(s: &str) -> Value {
        Struct::new("Thing1").field("a", s).into()
    }

    #[test]
    fn numbers_across_types() {
        assert!(numbers_equal(Number::I32(42), Number::U32(42)));
        assert!(numbers_equal(Number::I64(42), Number::U64(42)));
        assert!(numbers_equal(Number::U8(3), Number::F64(3.0)));
        assert!(numbers_equal(Number::F32(0.5), Number::F64(0.5)));
        assert!(!numbers_equal(Number::I8(-1), Number::U64(u64::MAX)));
        assert!(!numbers_equal(Number::I64(1), Number::F64(1.5)));
        assert!(!numbers_equal(Number::F64(f64::NAN), Number::F64(f64::NAN)));
    }

    #[test]
    fn integers_at_the_float_boundaries() {
        assert!(!numbers_equal(Number::I64(i64::MAX), Number::F64(9.223372036854775808e18)));
        assert!(!numbers_equal(Number::U64(u64::MAX), Number::F64(1.8446744073709551616e19)));
        assert!(numbers_equal(Number::I64(i64::MIN), Number::F64(-9.223372036854775808e18)));
        assert!(!numbers_equal(Number::I64(i64::MIN), Number::F64(-1e19)));
        assert!(numbers_equal(Number::U64(1 << 63), Number::F64(9.223372036854775808e18)));
        assert!(!numbers_equal(Number::U64(0), Number::F64(-0.5)));
    }

    #[test]
    fn loose_equality_of_scalars() {
        assert!(loosely_equal(&1.into(), &1u8.into()));
        assert!(loosely_equal(&"hi".into(), &"hi".into()));
        assert!(!loosely_equal(&"1".into(), &1.into()));
        assert!(loosely_equal(&Value::Nil, &Value::empty_interface()));
        assert!(!loosely_equal(&Value::Nil, &Value::nil_pointer()));
    }

    #[test]
    fn loose_equality_of_references() {
        let p1 = Value::pointer(thing("hi"));
        let p2 = p1.clone();
        assert!(loosely_equal(&p1, &p2));
        assert!(!loosely_equal(&p1, &Value::pointer(thing("hi"))));
        assert!(!loosely_equal(&thing("hi"), &thing("hi")));
        assert!(!loosely_equal(
            &Value::slice(Vec::new()),
            &Value::slice(Vec::new())
        ));
        let f = Value::function();
        assert!(loosely_equal(&f, &f.clone()));
        assert!(!loosely_equal(&f, &Value::function()));
    }

    #[test]
    fn resemblance() {
        assert!(resembles(&thing("hi"), &thing("hi")));
        assert!(!resembles(&thing("hi"), &thing("bye")));
        assert!(!resembles(
            &Struct::new("Thing1").into(),
            &Struct::new("Thing2").into()
        ));
        assert!(resembles(
            &Value::pointer(thing("hi")),
            &Value::pointer(thing("hi"))
        ));
        assert!(!resembles(&42.into(), &42u32.into()));
        assert!(resembles(
            &Value::interface(Value::pointer(1)),
            &Value::pointer(1)
        ));
    }

    #[test]
    fn resemblance_of_collections() {
        let a = Value::slice(vec![1.into(), Value::pointer(thing("x"))]);
        let b = Value::slice(vec![1.into(), Value::pointer(thing("x"))]);
        assert!(resembles(&a, &b));
        assert!(!resembles(&Value::Slice(None), &Value::slice(Vec::new())));
        let m1 = Value::map(vec![("a".into(), 1.into()), ("b".into(), 2.into())]);
        let m2 = Value::map(vec![("b".into(), 2.into()), ("a".into(), 1.into())]);
        assert!(resembles(&m1, &m2));
        assert!(!resembles(&Value::function(), &Value::function()));
        assert!(resembles(&Value::Function(None), &Value::Function(None)));
    }

    #[test]
    fn map_resemblance_is_symmetric() {
        let repeated = Value::map(vec![(1.into(), 1.into()), (1.into(), 1.into())]);
        let distinct = Value::map(vec![(1.into(), 1.into()), (2.into(), 2.into())]);
        assert!(!resembles(&repeated, &distinct));
        assert!(!resembles(&distinct, &repeated));
        assert!(resembles(&repeated, &repeated.clone()));
    }
}
