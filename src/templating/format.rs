//! Printf-style positional formatting.
//!
//! Supported conversions:
//!
//! | Spec   | Meaning                                   |
//! |--------|-------------------------------------------|
//! | `%s`   | argument as text                          |
//! | `%S`   | argument as uppercase text                |
//! | `%d`   | integer argument in decimal               |
//! | `%x`   | integer argument in lowercase hex         |
//! | `%b`   | `false` for a false boolean, else `true`  |
//! | `%n`   | newline                                   |
//! | `%%`   | literal `%`                               |
//!
//! An explicit 1-based index (`%2$s`) selects an argument without moving
//! the implicit cursor. Surplus arguments are ignored.

use std::fmt;

use crate::core::{McgError, Result};

/// A positional formatting argument.
///
/// The accepted kinds are closed: text, integers and booleans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatArg {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl FormatArg {
    /// Interpret command-line text, preferring integer then boolean.
    #[must_use]
    pub fn infer(text: &str) -> Self {
        if let Ok(value) = text.parse::<i64>() {
            Self::Int(value)
        } else if let Ok(value) = text.parse::<bool>() {
            Self::Bool(value)
        } else {
            Self::Str(text.to_string())
        }
    }

    fn write(&self, conversion: char, out: &mut String, template: &str) -> Result<()> {
        match (conversion, self) {
            ('s', arg) => out.push_str(&arg.to_string()),
            ('S', arg) => out.push_str(&arg.to_string().to_uppercase()),
            ('d', Self::Int(value)) => out.push_str(&value.to_string()),
            ('x', Self::Int(value)) => out.push_str(&format!("{value:x}")),
            ('b', Self::Bool(value)) => out.push_str(if *value { "true" } else { "false" }),
            ('b', _) => out.push_str("true"),
            (conversion, arg) => {
                return Err(invalid(
                    template,
                    format!("%{conversion} cannot format argument {arg:?}"),
                ));
            }
        }
        Ok(())
    }
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FormatArg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for FormatArg {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for FormatArg {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for FormatArg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Apply positional formatting to an already expanded string.
///
/// # Errors
///
/// [`McgError::InvalidFormat`] for an unknown conversion, a dangling `%`,
/// a missing argument, index `0`, or an integer conversion applied to a
/// non-integer argument.
pub fn format_positional(template: &str, args: &[FormatArg]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut cursor = 0usize;

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }

        let mut digits = String::new();
        while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
            digits.push(c);
            chars.next();
        }

        let explicit = if digits.is_empty() {
            None
        } else if chars.next_if_eq(&'$').is_some() {
            let index: usize = digits
                .parse()
                .map_err(|_| invalid(template, format!("argument index {digits} is too large")))?;
            if index == 0 {
                return Err(invalid(template, "argument indices start at 1"));
            }
            Some(index - 1)
        } else {
            return Err(invalid(template, format!("width '%{digits}' is not supported")));
        };

        let conversion = chars.next().ok_or_else(|| invalid(template, "dangling '%' at end"))?;

        match conversion {
            '%' if explicit.is_none() => out.push('%'),
            'n' if explicit.is_none() => out.push('\n'),
            's' | 'S' | 'd' | 'x' | 'b' => {
                let index = explicit.unwrap_or_else(|| {
                    let index = cursor;
                    cursor += 1;
                    index
                });
                let arg = args.get(index).ok_or_else(|| {
                    invalid(template, format!("missing argument {} for %{conversion}", index + 1))
                })?;
                arg.write(conversion, &mut out, template)?;
            }
            other => {
                return Err(invalid(template, format!("unknown conversion '%{other}'")));
            }
        }
    }

    Ok(out)
}

fn invalid(template: &str, reason: impl Into<String>) -> McgError {
    McgError::InvalidFormat {
        template: template.to_string(),
        reason: reason.into(),
    }
}
