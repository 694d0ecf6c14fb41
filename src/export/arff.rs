//! ARFF text serialization
//!
//! Writes an [`ExportDocument`] in the attribute-relation file format read by
//! WEKA: `%` comment header, `@RELATION`, one `@ATTRIBUTE` line per column,
//! then `@DATA` with one comma-separated line per instance.

use std::{borrow::Cow, io::Write};

use crate::{
    Error, Result,
    document::{ExportDocument, Value},
    schema::{Attribute, AttributeType},
};

/// ARFF missing-value marker.
const MISSING: &str = "?";

/// Largest accepted fixed precision. f64 carries at most 17 significant
/// decimal digits; more only pads zeros.
pub const MAX_PRECISION: usize = 17;

/// Characters that force a name or nominal value into single quotes.
const SPECIAL_CHARS: &[char] = &[',', '{', '}', '%', '\'', '"', '\\'];

/// Serializer for ARFF text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArffSerializer {
    precision: Option<usize>,
}

impl ArffSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write reals with a fixed number of decimals.
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    /// Reject a precision above [`MAX_PRECISION`].
    pub fn check(&self) -> Result<()> {
        match self.precision {
            Some(precision) if precision > MAX_PRECISION => Err(Error::InvalidConfiguration {
                message: format!("precision {precision} exceeds maximum of {MAX_PRECISION}"),
            }),
            _ => Ok(()),
        }
    }

    /// Validate `document` and write it to `writer`.
    ///
    /// The writer is not flushed; callers owning a buffered writer flush it.
    pub fn write<W: Write>(&self, document: &ExportDocument, writer: &mut W) -> Result<()> {
        self.check()?;
        document.validate()?;

        Self::write_header(document, writer)?;
        for attribute in &document.attributes {
            Self::write_attribute(attribute, writer)?;
        }
        writeln!(writer)?;
        writeln!(writer, "@DATA")?;
        for row in &document.data {
            self.write_row(row, writer)?;
        }
        Ok(())
    }

    /// Render `document` into a string.
    pub fn render(&self, document: &ExportDocument) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(document, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| Error::serialization(e.to_string()))
    }

    fn write_header<W: Write>(document: &ExportDocument, writer: &mut W) -> Result<()> {
        if !document.description.is_empty() {
            for line in document.description.lines() {
                if line.is_empty() {
                    writeln!(writer, "%")?;
                } else {
                    writeln!(writer, "% {line}")?;
                }
            }
        }
        writeln!(writer, "@RELATION {}", quote(&document.relation))?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_attribute<W: Write>(attribute: &Attribute, writer: &mut W) -> Result<()> {
        let name = quote(&attribute.name);
        match &attribute.kind {
            AttributeType::Real => writeln!(writer, "@ATTRIBUTE {name} REAL")?,
            AttributeType::Nominal(values) => {
                let values: Vec<Cow<'_, str>> = values.iter().map(|v| quote(v)).collect();
                writeln!(writer, "@ATTRIBUTE {name} {{{}}}", values.join(","))?;
            }
        }
        Ok(())
    }

    fn write_row<W: Write>(&self, row: &[Value], writer: &mut W) -> Result<()> {
        for (idx, value) in row.iter().enumerate() {
            if idx > 0 {
                writer.write_all(b",")?;
            }
            match value {
                Value::Real(v) => write!(writer, "{}", self.format_real(*v))?,
                Value::Nominal(v) => write!(writer, "{}", quote(v))?,
            }
        }
        writeln!(writer)?;
        Ok(())
    }

    fn format_real(&self, value: f64) -> Cow<'static, str> {
        if value.is_nan() {
            Cow::Borrowed(MISSING)
        } else if value.is_infinite() {
            if value.is_sign_positive() {
                Cow::Borrowed("Infinity")
            } else {
                Cow::Borrowed("-Infinity")
            }
        } else {
            match self.precision {
                Some(precision) => Cow::Owned(format!("{value:.precision$}")),
                None => Cow::Owned(format!("{value}")),
            }
        }
    }
}

/// Quote an identifier or nominal value if ARFF would otherwise misread it.
pub fn quote(raw: &str) -> Cow<'_, str> {
    let needs_quotes = raw.is_empty()
        || raw == MISSING
        || raw.chars().any(|c| c.is_whitespace() || SPECIAL_CHARS.contains(&c));
    if !needs_quotes {
        return Cow::Borrowed(raw);
    }

    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('\'');
    for c in raw.chars() {
        match c {
            '\'' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    Cow::Owned(quoted)
}
