//! Token expansion and final rendering.

use tracing::trace;

use super::format::{FormatArg, format_positional};
use super::replacements::ReplacementTable;
use super::{contains_token, token_pattern};
use super::utils::find_similar;
use crate::constants::{MAX_EXPANDED_LENGTH, MAX_EXPANSION_PASSES};
use crate::core::{McgError, Result};

/// Expand every placeholder token in `template` against `table`.
///
/// Tokens are substituted pass by pass until none remain, so a replacement
/// value may reference other tokens. No positional formatting is applied.
///
/// # Errors
///
/// - [`McgError::UnresolvedReplacement`] when a token has no entry; the
///   error names the token and suggests similarly named entries.
/// - [`McgError::ExpansionLimitExceeded`] when tokens are still present after
///   [`MAX_EXPANSION_PASSES`] passes, or when the result grows past
///   [`MAX_EXPANDED_LENGTH`] bytes (self-referencing values end up here).
pub fn expand(table: &ReplacementTable, template: &str) -> Result<String> {
    let limit_exceeded = |passes| McgError::ExpansionLimitExceeded {
        template: template.to_string(),
        passes,
    };
    let mut current = template.to_string();

    for pass in 1..=MAX_EXPANSION_PASSES {
        if !contains_token(&current) {
            return Ok(current);
        }
        current = substitute_pass(table, &current)?.ok_or_else(|| limit_exceeded(pass))?;
        trace!(pass, len = current.len(), "expanded placeholders");
    }

    if contains_token(&current) {
        return Err(limit_exceeded(MAX_EXPANSION_PASSES));
    }
    Ok(current)
}

/// Expand placeholders, then apply positional formatting with `args`.
///
/// This is the full resolution used for every context string.
pub fn render(table: &ReplacementTable, template: &str, args: &[FormatArg]) -> Result<String> {
    let expanded = expand(table, template)?;
    format_positional(&expanded, args)
}

/// Replace every token found in `input` once, left to right.
///
/// Returns `None` as soon as the output exceeds [`MAX_EXPANDED_LENGTH`].
fn substitute_pass(table: &ReplacementTable, input: &str) -> Result<Option<String>> {
    let mut output = String::with_capacity(input.len());
    let mut last = 0;

    for token in token_pattern().find_iter(input) {
        let value = table.get(token.as_str()).ok_or_else(|| McgError::UnresolvedReplacement {
            token: token.as_str().to_string(),
            suggestions: find_similar(token.as_str(), table.names()),
        })?;

        output.push_str(&input[last..token.start()]);
        output.push_str(value);
        last = token.end();

        if output.len() > MAX_EXPANDED_LENGTH {
            return Ok(None);
        }
    }

    output.push_str(&input[last..]);
    Ok(Some(output))
}
