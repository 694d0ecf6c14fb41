//! Common test utilities for the feature-arff test suite.
//!
//! A small ARFF reader so tests can check exported files structurally instead
//! of by exact text.

#![allow(dead_code)]

/// Parsed contents of an ARFF file.
#[derive(Debug, Default)]
pub struct ParsedArff {
    pub comments: Vec<String>,
    pub relation: String,
    /// `(name, type)` with nominal types kept as their raw `{...}` text
    pub attributes: Vec<(String, String)>,
    pub data: Vec<Vec<String>>,
}

impl ParsedArff {
    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Values of a nominal attribute, or `None` for other types.
    pub fn nominal_values(&self, name: &str) -> Option<Vec<String>> {
        let (_, kind) = self.attributes.iter().find(|(n, _)| n == name)?;
        let inner = kind.strip_prefix('{')?.strip_suffix('}')?;
        Some(split_fields(inner))
    }

    /// Data rows parsed as reals; `?` becomes NaN.
    pub fn real_rows(&self) -> Vec<Vec<f64>> {
        self.data
            .iter()
            .map(|row| {
                row.iter()
                    .map(|field| {
                        if field == "?" {
                            f64::NAN
                        } else {
                            field.parse().expect("numeric field")
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

/// Parse ARFF text. Panics on anything unexpected; only meant for tests.
pub fn parse_arff(text: &str) -> ParsedArff {
    let mut parsed = ParsedArff::default();
    let mut in_data = false;

    for line in text.lines() {
        if in_data {
            if !line.trim().is_empty() {
                parsed.data.push(split_fields(line));
            }
            continue;
        }
        let trimmed = line.trim();
        if let Some(comment) = trimmed.strip_prefix('%') {
            parsed.comments.push(comment.trim_start().to_string());
        } else if let Some(rest) = strip_keyword(trimmed, "@RELATION") {
            let (name, _) = read_token(rest);
            parsed.relation = name;
        } else if let Some(rest) = strip_keyword(trimmed, "@ATTRIBUTE") {
            let (name, kind) = read_token(rest);
            parsed.attributes.push((name, kind.trim().to_string()));
        } else if trimmed.eq_ignore_ascii_case("@DATA") {
            in_data = true;
        } else {
            assert!(trimmed.is_empty(), "unexpected header line: {line}");
        }
    }

    parsed
}

fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let head = line.get(..keyword.len())?;
    if head.eq_ignore_ascii_case(keyword) {
        Some(line[keyword.len()..].trim_start())
    } else {
        None
    }
}

/// Read one possibly-quoted token, returning it unquoted plus the remainder.
fn read_token(input: &str) -> (String, &str) {
    if let Some(quoted) = input.strip_prefix('\'') {
        let mut value = String::new();
        let mut chars = quoted.char_indices();
        while let Some((idx, c)) = chars.next() {
            match c {
                '\\' => {
                    if let Some((_, escaped)) = chars.next() {
                        value.push(unescape(escaped));
                    }
                }
                '\'' => return (value, &quoted[idx + 1..]),
                _ => value.push(c),
            }
        }
        panic!("unterminated quote in {input}");
    }
    match input.find(char::is_whitespace) {
        Some(end) => (input[..end].to_string(), &input[end..]),
        None => (input.to_string(), ""),
    }
}

/// Split a comma-separated line, honouring single quotes and escapes.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' if in_quotes => {
                if let Some(escaped) = chars.next() {
                    current.push(unescape(escaped));
                }
            }
            '\'' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        other => other,
    }
}
