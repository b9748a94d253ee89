use crate::literal::ParseError;
use crate::value::Number;
use regex::Regex;

const TOKEN_PATTERN: &str = r#"(?x)
    ^\s*(?:
        (?P<string>"(?:[^"\\]|\\.)*")
      | (?P<number>-?[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?(?P<suffix>[iu](?:8|16|32|64)|f(?:32|64))?)
      | \$(?P<reference>[0-9]+)
      | (?P<word>[A-Za-z_][A-Za-z0-9_]*)
      | (?P<punctuation>[&{}\[\]():])
    )"#;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    StringLiteral(String),
    NumericLiteral(Number),
    Reference(usize),
    Word(String),
    Punctuation(char),
}

/// A token together with the byte offset it starts at.
pub type Spanned = (usize, Token);

fn unescape(quoted: &str, offset: usize) -> Result<String, ParseError> {
    let mut result = String::new();
    let mut chars = quoted[1..quoted.len() - 1].chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => result.push('"'),
            Some('\\') => result.push('\\'),
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            _ => return Err(ParseError::InvalidEscape(offset)),
        }
    }
    Ok(result)
}

fn read_number(literal: &str, suffix: Option<&str>, offset: usize) -> Result<Number, ParseError> {
    let invalid = || ParseError::InvalidNumber {
        offset,
        literal: literal.to_string(),
    };
    let body = &literal[..literal.len() - suffix.map_or(0, str::len)];
    let fractional = body.contains(|c: char| c == '.' || c == 'e' || c == 'E');
    let suffix = match suffix {
        Some(suffix) => suffix,
        None if fractional => "f64",
        None => "i64",
    };
    let number = match suffix {
        "f32" => body.parse().map(Number::F32).ok(),
        "f64" => body.parse().map(Number::F64).ok(),
        _ if fractional => None,
        "i8" => body.parse().map(Number::I8).ok(),
        "i16" => body.parse().map(Number::I16).ok(),
        "i32" => body.parse().map(Number::I32).ok(),
        "i64" => body.parse().map(Number::I64).ok(),
        "u8" => body.parse().map(Number::U8).ok(),
        "u16" => body.parse().map(Number::U16).ok(),
        "u32" => body.parse().map(Number::U32).ok(),
        "u64" => body.parse().map(Number::U64).ok(),
        _ => None,
    };
    number.ok_or_else(invalid)
}

pub fn tokenize(input: &str) -> Result<Vec<Spanned>, ParseError> {
    let pattern = Regex::new(TOKEN_PATTERN).expect("invalid token pattern");
    let mut tokens = Vec::new();
    let mut position = 0;
    while !input[position..].trim().is_empty() {
        let captures = match pattern.captures(&input[position..]) {
            Some(captures) => captures,
            None => {
                let skipped = input[position..].len() - input[position..].trim_start().len();
                return Err(ParseError::UnexpectedCharacter(position + skipped));
            }
        };
        let whole = captures.get(0).expect("group 0 always matches");
        let token = if let Some(m) = captures.name("string") {
            (position + m.start(), Token::StringLiteral(unescape(m.as_str(), position + m.start())?))
        } else if let Some(m) = captures.name("number") {
            let suffix = captures.name("suffix").map(|s| s.as_str());
            let number = read_number(m.as_str(), suffix, position + m.start())?;
            (position + m.start(), Token::NumericLiteral(number))
        } else if let Some(m) = captures.name("reference") {
            let start = position + m.start() - 1;
            let index = m.as_str().parse().map_err(|_| ParseError::InvalidNumber {
                offset: start,
                literal: m.as_str().to_string(),
            })?;
            (start, Token::Reference(index))
        } else if let Some(m) = captures.name("word") {
            (position + m.start(), Token::Word(m.as_str().to_string()))
        } else if let Some(m) = captures.name("punctuation") {
            let c = m.as_str().chars().next().expect("punctuation is one character");
            (position + m.start(), Token::Punctuation(c))
        } else {
            return Err(ParseError::UnexpectedCharacter(position));
        };
        tokens.push(token);
        position += whole.end();
    }
    Ok(tokens)
}
