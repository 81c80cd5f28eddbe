//! Variable interpolation for recipe templates.
//!
//! Templates reference metadata using `${variable}` syntax.
//!
//! # Syntax
//!
//! - `${variable_name}` - replaced with variable value
//! - `$${escaped}` - produces literal `${escaped}` in output
//! - any other `$` is copied through, so `$Id$` and `$(...)` are untouched
//!
//! # Example
//!
//! ```text
//! DESCRIPTION="${description}"
//! # With description="Rack middleware", produces: DESCRIPTION="Rack middleware"
//! ```

use crate::error::{EbuildgenError, Result};

/// A segment of an interpolated string.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Variable reference: ${name}
    Variable(String),
}

/// Parse a string containing ${var} interpolations.
pub fn parse_interpolation(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut chars = input.chars().peekable();
    let mut current_literal = String::new();

    while let Some(c) = chars.next() {
        if c != '$' {
            current_literal.push(c);
            continue;
        }

        match chars.peek() {
            Some('$') => {
                chars.next();
                if chars.peek() == Some(&'{') {
                    // $${...} -> literal ${...}
                    chars.next();
                    current_literal.push_str("${");
                    while let Some(c) = chars.next() {
                        current_literal.push(c);
                        if c == '}' {
                            break;
                        }
                    }
                } else {
                    current_literal.push('$');
                }
            }
            Some('{') => {
                chars.next();

                if !current_literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut current_literal)));
                }

                let mut var_name = String::new();
                for c in chars.by_ref() {
                    if c == '}' {
                        break;
                    }
                    var_name.push(c);
                }

                segments.push(Segment::Variable(var_name.trim().to_string()));
            }
            _ => current_literal.push(c),
        }
    }

    if !current_literal.is_empty() {
        segments.push(Segment::Literal(current_literal));
    }

    segments
}

/// Resolve all variables in `input` with `lookup`.
///
/// A line made up of nothing but variables that all render empty is
/// dropped together with its line break.
///
/// # Errors
///
/// Returns `UnknownVariable` for the first variable `lookup` cannot resolve.
pub fn resolve_string<F>(input: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut result = String::with_capacity(input.len());

    for line in input.split_inclusive('\n') {
        let body = line.trim_end_matches(['\r', '\n']);
        let segments = parse_interpolation(body);

        let mut rendered = String::new();
        let mut only_variables = !segments.is_empty();
        for segment in segments {
            match segment {
                Segment::Literal(text) => {
                    if !text.trim().is_empty() {
                        only_variables = false;
                    }
                    rendered.push_str(&text);
                }
                Segment::Variable(name) => {
                    let value = lookup(&name)
                        .ok_or_else(|| EbuildgenError::UnknownVariable { name: name.clone() })?;
                    rendered.push_str(&value);
                }
            }
        }

        if only_variables && rendered.trim().is_empty() {
            continue;
        }

        result.push_str(&rendered);
        result.push_str(&line[body.len()..]);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(name: &str) -> Option<String> {
        match name {
            "name" => Some("rack".to_string()),
            "empty" => Some(String::new()),
            _ => None,
        }
    }

    #[test]
    fn parse_simple_variable() {
        let segments = parse_interpolation("gem ${name}");
        assert_eq!(
            segments,
            vec![
                Segment::Literal("gem ".to_string()),
                Segment::Variable("name".to_string()),
            ]
        );
    }

    #[test]
    fn parse_escaped_variable() {
        let segments = parse_interpolation("cd $${S}");
        assert_eq!(segments, vec![Segment::Literal("cd ${S}".to_string())]);
    }

    #[test]
    fn parse_keeps_lone_dollar() {
        let segments = parse_interpolation("# $Id$");
        assert_eq!(segments, vec![Segment::Literal("# $Id$".to_string())]);
    }

    #[test]
    fn resolve_replaces_variables() {
        let out = resolve_string("PN=\"${name}\"\n", vars).unwrap();
        assert_eq!(out, "PN=\"rack\"\n");
    }

    #[test]
    fn resolve_rejects_unknown_variable() {
        let err = resolve_string("${maintainer}", vars).unwrap_err();
        assert!(matches!(err, EbuildgenError::UnknownVariable { name } if name == "maintainer"));
    }

    #[test]
    fn resolve_drops_lines_with_only_empty_variables() {
        let out = resolve_string("a\n${empty}\nb\n", vars).unwrap();
        assert_eq!(out, "a\nb\n");
    }

    #[test]
    fn resolve_keeps_lines_with_literal_text() {
        let out = resolve_string("X=\"${empty}\"\n", vars).unwrap();
        assert_eq!(out, "X=\"\"\n");
    }

    #[test]
    fn resolve_keeps_blank_lines() {
        let out = resolve_string("a\n\nb", vars).unwrap();
        assert_eq!(out, "a\n\nb");
    }
}
