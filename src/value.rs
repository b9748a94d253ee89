use crate::eq::resembles;
use std::fmt;
use std::fmt::{Display, Formatter, LowerExp};
use std::rc::Rc;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
}

/// A number widened to the 64 bit representation of its class, used to compare numbers of
/// different concrete types.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Widened {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl Number {
    pub fn widen(self) -> Widened {
        match self {
            Number::I8(x) => Widened::Signed(x.into()),
            Number::I16(x) => Widened::Signed(x.into()),
            Number::I32(x) => Widened::Signed(x.into()),
            Number::I64(x) => Widened::Signed(x),
            Number::U8(x) => Widened::Unsigned(x.into()),
            Number::U16(x) => Widened::Unsigned(x.into()),
            Number::U32(x) => Widened::Unsigned(x.into()),
            Number::U64(x) => Widened::Unsigned(x),
            Number::F32(x) => Widened::Float(x.into()),
            Number::F64(x) => Widened::Float(x),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Number::I8(_) => "i8",
            Number::I16(_) => "i16",
            Number::I32(_) => "i32",
            Number::I64(_) => "i64",
            Number::U8(_) => "u8",
            Number::U16(_) => "u16",
            Number::U32(_) => "u32",
            Number::U64(_) => "u64",
            Number::F32(_) => "f32",
            Number::F64(_) => "f64",
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Number::I8(x) => Display::fmt(x, f),
            Number::I16(x) => Display::fmt(x, f),
            Number::I32(x) => Display::fmt(x, f),
            Number::I64(x) => Display::fmt(x, f),
            Number::U8(x) => Display::fmt(x, f),
            Number::U16(x) => Display::fmt(x, f),
            Number::U32(x) => Display::fmt(x, f),
            Number::U64(x) => Display::fmt(x, f),
            Number::F32(x) => write_float(f, *x, (*x).into()),
            Number::F64(x) => write_float(f, *x, *x),
        }
    }
}

// Shortest representation, switching to an exponent outside of [1e-4, 1e6) like Go's `%v`
fn write_float<T: Display + LowerExp>(f: &mut Formatter<'_>, x: T, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("NaN");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "+Inf" } else { "-Inf" });
    }
    let scientific = format!("{:e}", x);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };
    if !(-4..6).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{}e{}{:02}", mantissa, sign, exponent.abs())
    } else {
        Display::fmt(&x, f)
    }
}

/// Something only comparable by identity, such as a function or a channel.
#[derive(Debug, Clone, Default)]
pub struct Handle(Rc<()>);

impl Handle {
    pub fn new() -> Self {
        Handle(Rc::new(()))
    }

    pub fn address(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }

    pub fn same(&self, other: &Handle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug, Clone)]
pub struct Struct {
    pub name: String,
    pub fields: Vec<(String, Value)>,
}

impl Struct {
    pub fn new(name: &str) -> Self {
        Struct {
            name: name.to_string(),
            fields: Vec::new(),
        }
    }

    pub fn field<V: Into<Value>>(mut self, name: &str, value: V) -> Self {
        self.fields.push((name.to_string(), value.into()));
        self
    }
}

/// A dynamically typed value as seen by the assertions. The `Option` payloads distinguish a
/// typed nil (a pointer without a target, a nil slice...) from an empty value of that kind.
#[derive(Debug, Clone)]
pub enum Value {
    Nil,
    Boolean(bool),
    Number(Number),
    String(String),
    Struct(Struct),
    Slice(Option<Vec<Value>>),
    Map(Option<Vec<(Value, Value)>>),
    Pointer(Option<Rc<Value>>),
    // A value stored behind an interface type, which may itself be empty
    Interface(Option<Box<Value>>),
    Function(Option<Handle>),
    Channel(Option<Handle>),
}

impl Value {
    pub fn pointer<V: Into<Value>>(target: V) -> Self {
        Value::Pointer(Some(Rc::new(target.into())))
    }

    pub fn nil_pointer() -> Self {
        Value::Pointer(None)
    }

    pub fn interface<V: Into<Value>>(value: V) -> Self {
        Value::Interface(Some(Box::new(value.into())))
    }

    pub fn empty_interface() -> Self {
        Value::Interface(None)
    }

    pub fn slice(values: Vec<Value>) -> Self {
        Value::Slice(Some(values))
    }

    pub fn map(entries: Vec<(Value, Value)>) -> Self {
        Value::Map(Some(entries))
    }

    pub fn function() -> Self {
        Value::Function(Some(Handle::new()))
    }

    pub fn channel() -> Self {
        Value::Channel(Some(Handle::new()))
    }

    /// Looks through interface holders to the value stored in them.
    pub fn concrete(&self) -> &Value {
        match self {
            Value::Interface(Some(value)) => value.concrete(),
            _ => self,
        }
    }

    pub fn is_nil(&self) -> bool {
        match self.concrete() {
            Value::Nil => true,
            Value::Interface(None) => true,
            Value::Pointer(target) => target.is_none(),
            Value::Slice(values) => values.is_none(),
            Value::Map(entries) => entries.is_none(),
            Value::Function(handle) | Value::Channel(handle) => handle.is_none(),
            Value::Boolean(_) | Value::Number(_) | Value::String(_) | Value::Struct(_) => false,
            Value::Interface(Some(_)) => unreachable!("concrete values are never interfaces"),
        }
    }

    /// The address a non-nil pointer points to.
    pub fn address(&self) -> Option<usize> {
        match self.concrete() {
            Value::Pointer(Some(target)) => Some(Rc::as_ptr(target) as usize),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Boolean(_) => "bool",
            Value::Number(n) => n.kind(),
            Value::String(_) => "string",
            Value::Struct(_) => "struct",
            Value::Slice(_) => "slice",
            Value::Map(_) => "map",
            Value::Pointer(_) => "ptr",
            Value::Interface(_) => "interface",
            Value::Function(_) => "func",
            Value::Channel(_) => "chan",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        resembles(self, other)
    }
}

macro_rules! number_from {
    ($($t:ty => $variant:ident),*) => {
        $(
            impl From<$t> for Value {
                fn from(x: $t) -> Self {
                    Value::Number(Number::$variant(x))
                }
            }
        )*
    };
}

number_from!(
    i8 => I8, i16 => I16, i32 => I32, i64 => I64,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64,
    f32 => F32, f64 => F64
);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Struct> for Value {
    fn from(s: Struct) -> Self {
        Value::Struct(s)
    }
}

fn write_separated<'v, W, I>(f: &mut Formatter<'_>, values: I, mut write: W) -> fmt::Result
where
    I: IntoIterator<Item = &'v Value>,
    W: FnMut(&mut Formatter<'_>, &'v Value) -> fmt::Result,
{
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            " ".fmt(f)?;
        }
        write(f, value)?;
    }
    Ok(())
}

fn write_address(f: &mut Formatter<'_>, address: usize) -> fmt::Result {
    write!(f, "0x{:x}", address)
}

// Pointers are only followed at the top level; nested pointers print as addresses.
fn render(value: &Value, f: &mut Formatter<'_>, depth: usize) -> fmt::Result {
    match value {
        Value::Nil => write!(f, "<nil>"),
        Value::Boolean(b) => b.fmt(f),
        Value::Number(n) => n.fmt(f),
        Value::String(s) => f.write_str(s),
        Value::Struct(s) => {
            write!(f, "{{")?;
            write_separated(f, s.fields.iter().map(|(_, v)| v), |f, v| {
                render(v, f, depth + 1)
            })?;
            write!(f, "}}")
        }
        Value::Slice(values) => {
            write!(f, "[")?;
            if let Some(values) = values {
                write_separated(f, values, |f, v| render(v, f, depth + 1))?;
            }
            write!(f, "]")
        }
        Value::Map(entries) => {
            write!(f, "map[")?;
            if let Some(entries) = entries {
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        " ".fmt(f)?;
                    }
                    render(k, f, depth + 1)?;
                    write!(f, ":")?;
                    render(v, f, depth + 1)?;
                }
            }
            write!(f, "]")
        }
        Value::Pointer(None) => write!(f, "<nil>"),
        Value::Pointer(Some(target)) => match target.as_ref() {
            Value::Struct(_) | Value::Slice(_) | Value::Map(_) if depth == 0 => {
                write!(f, "&")?;
                render(target, f, depth + 1)
            }
            _ => write_address(f, Rc::as_ptr(target) as usize),
        },
        Value::Interface(None) => write!(f, "<nil>"),
        Value::Interface(Some(value)) => render(value, f, depth),
        Value::Function(None) | Value::Channel(None) => write!(f, "<nil>"),
        Value::Function(Some(handle)) | Value::Channel(Some(handle)) => {
            write_address(f, handle.address())
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render(self, f, 0)
    }
}
