use crate::token::{tokenize, Spanned, Token};
use crate::value::{Handle, Struct, Value};
use log::trace;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unexpected character")]
    UnexpectedCharacter(usize),
    #[error("invalid numeric literal '{literal}'")]
    InvalidNumber { offset: usize, literal: String },
    #[error("invalid escape sequence")]
    InvalidEscape(usize),
    #[error("unexpected token")]
    UnexpectedToken(usize),
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("${index} does not refer to an earlier value")]
    UnknownReference { offset: usize, index: usize },
}

impl ParseError {
    /// The byte offset in the input the error was found at, if any.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedCharacter(offset)
            | ParseError::InvalidEscape(offset)
            | ParseError::UnexpectedToken(offset) => Some(*offset),
            ParseError::InvalidNumber { offset, .. }
            | ParseError::UnknownReference { offset, .. } => Some(*offset),
            ParseError::UnexpectedEnd => None,
        }
    }
}

struct Parser<'a> {
    tokens: Vec<Spanned>,
    position: usize,
    // Values parsed before this one, reachable through `$n`
    earlier: &'a [Value],
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.position)
    }

    fn next(&mut self) -> Result<Spanned, ParseError> {
        let token = self
            .tokens
            .get(self.position)
            .cloned()
            .ok_or(ParseError::UnexpectedEnd)?;
        self.position += 1;
        Ok(token)
    }

    fn peek_punctuation(&self, c: char) -> bool {
        matches!(self.peek(), Some((_, Token::Punctuation(p))) if *p == c)
    }

    fn expect_punctuation(&mut self, c: char) -> Result<(), ParseError> {
        match self.next()? {
            (_, Token::Punctuation(p)) if p == c => Ok(()),
            (offset, _) => Err(ParseError::UnexpectedToken(offset)),
        }
    }

    // Parses values until the closing punctuation, which is consumed
    fn values_until(&mut self, close: char) -> Result<Vec<Value>, ParseError> {
        let mut values = Vec::new();
        while !self.peek_punctuation(close) {
            values.push(self.value()?);
        }
        self.expect_punctuation(close)?;
        Ok(values)
    }

    fn structure(&mut self, name: &str) -> Result<Value, ParseError> {
        let fields = self.values_until('}')?;
        let mut result = Struct::new(name);
        for (i, field) in fields.into_iter().enumerate() {
            result = result.field(&format!("f{}", i), field);
        }
        Ok(Value::Struct(result))
    }

    fn map(&mut self) -> Result<Value, ParseError> {
        self.expect_punctuation('[')?;
        let mut entries = Vec::new();
        while !self.peek_punctuation(']') {
            let key = self.value()?;
            self.expect_punctuation(':')?;
            entries.push((key, self.value()?));
        }
        self.expect_punctuation(']')?;
        Ok(Value::map(entries))
    }

    fn interface(&mut self) -> Result<Value, ParseError> {
        self.expect_punctuation('(')?;
        if self.peek_punctuation(')') {
            self.next()?;
            return Ok(Value::empty_interface());
        }
        let value = self.value()?;
        self.expect_punctuation(')')?;
        Ok(Value::interface(value))
    }

    fn word(&mut self, offset: usize, word: &str) -> Result<Value, ParseError> {
        match word {
            "nil" => Ok(Value::Nil),
            "nilptr" => Ok(Value::nil_pointer()),
            "nilslice" => Ok(Value::Slice(None)),
            "nilmap" => Ok(Value::Map(None)),
            "nilfunc" => Ok(Value::Function(None)),
            "nilchan" => Ok(Value::Channel(None)),
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            "func" => Ok(Value::Function(Some(Handle::new()))),
            "chan" => Ok(Value::Channel(Some(Handle::new()))),
            "map" => self.map(),
            "iface" => self.interface(),
            name if self.peek_punctuation('{') => {
                self.next()?;
                self.structure(name)
            }
            _ => Err(ParseError::UnexpectedToken(offset)),
        }
    }

    fn value(&mut self) -> Result<Value, ParseError> {
        match self.next()? {
            (_, Token::StringLiteral(s)) => Ok(Value::String(s)),
            (_, Token::NumericLiteral(n)) => Ok(Value::Number(n)),
            (offset, Token::Reference(index)) => self
                .earlier
                .get(index)
                .cloned()
                .ok_or(ParseError::UnknownReference { offset, index }),
            (offset, Token::Word(word)) => self.word(offset, &word),
            (_, Token::Punctuation('&')) => Ok(Value::Pointer(Some(Rc::new(self.value()?)))),
            (_, Token::Punctuation('{')) => self.structure(""),
            (_, Token::Punctuation('[')) => Ok(Value::slice(self.values_until(']')?)),
            (offset, Token::Punctuation(_)) => Err(ParseError::UnexpectedToken(offset)),
        }
    }
}

/// Parses a single value literal. `$n` in the literal refers to `earlier[n]`; copying a pointer
/// this way keeps its address.
pub fn parse_value(input: &str, earlier: &[Value]) -> Result<Value, ParseError> {
    let mut parser = Parser {
        tokens: tokenize(input)?,
        position: 0,
        earlier,
    };
    let value = parser.value()?;
    if let Some((offset, _)) = parser.peek() {
        return Err(ParseError::UnexpectedToken(*offset));
    }
    trace!("parsed {:?} as {}", input, value.kind());
    Ok(value)
}

/// Parses each literal in turn, so that later literals can refer to earlier ones.
pub fn parse_values<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<Value>, (usize, ParseError)> {
    let mut values = Vec::new();
    for (i, input) in inputs.iter().enumerate() {
        let value = parse_value(input.as_ref(), &values).map_err(|e| (i, e))?;
        values.push(value);
    }
    Ok(values)
}

#[cfg(test)]
mod test {
    use crate::literal::{parse_value, parse_values, ParseError};
    use crate::value::{Number, Struct, Value};

    fn parse(s: &str) -> Value {
        parse_value(s, &[]).unwrap()
    }

    #[test]
    fn scalars() {
        assert!(matches!(parse("nil"), Value::Nil));
        assert!(matches!(parse("true"), Value::Boolean(true)));
        assert!(matches!(parse("7u16"), Value::Number(Number::U16(7))));
        assert!(matches!(parse("\"hi\""), Value::String(ref s) if s == "hi"));
    }

    #[test]
    fn structs() {
        assert_eq!(
            parse("Thing1{\"hi\"}"),
            Value::from(Struct::new("Thing1").field("f0", "hi"))
        );
        assert_eq!(parse("{}").to_string(), "{}");
        assert_eq!(parse("{1 {2 3}}").to_string(), "{1 {2 3}}");
    }

    #[test]
    fn pointers_and_collections() {
        assert_eq!(parse("&Thing1{\"hi\"}").to_string(), "&{hi}");
        assert_eq!(parse("[1 2 3]").to_string(), "[1 2 3]");
        assert_eq!(parse("map[\"a\":1 \"b\":[]]").to_string(), "map[a:1 b:[]]");
        assert!(parse("nilslice").is_nil());
        assert!(!parse("[]").is_nil());
        assert!(parse("iface()").is_nil());
        assert!(parse("iface(nilptr)").is_nil());
        assert!(!parse("iface(&{})").is_nil());
    }

    #[test]
    fn each_pointer_literal_allocates() {
        let a = parse("&{}");
        let b = parse("&{}");
        assert_ne!(a.address(), b.address());
    }

    #[test]
    fn references_keep_addresses() {
        let values = parse_values(&["&{}", "$0", "&{}"]).unwrap();
        assert_eq!(values[0].address(), values[1].address());
        assert_ne!(values[0].address(), values[2].address());
    }

    #[test]
    fn errors() {
        assert_eq!(parse_value("{1", &[]), Err(ParseError::UnexpectedEnd));
        assert_eq!(parse_value("1 2", &[]), Err(ParseError::UnexpectedToken(2)));
        assert_eq!(parse_value("bogus", &[]), Err(ParseError::UnexpectedToken(0)));
        assert_eq!(parse_value("map[1]", &[]), Err(ParseError::UnexpectedToken(5)));
        assert_eq!(
            parse_values(&["1", "$1"]),
            Err((1, ParseError::UnknownReference { offset: 0, index: 1 }))
        );
        assert_eq!(ParseError::UnexpectedEnd.offset(), None);
    }
}
