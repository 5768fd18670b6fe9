//! Brace scanner: splits a template into literal text and placeholders

use crate::ast::{Placeholder, Segment, Template};
use crate::error::FormatError;

/// Scan a template into segments
///
/// Never fails. `{{` and `}}` collapse to literal braces, a lone `}` is kept
/// as literal text, and a placeholder that is still open at the end of the
/// input is dropped. Both of the latter are recorded in
/// [`Template::diagnostics`].
pub fn tokenize(input: &str) -> Template {
    let mut segments = Vec::new();
    let mut diagnostics = Vec::new();
    let mut literal = String::new();
    let mut chars = input.char_indices().peekable();

    let mut depth = 0usize;
    let mut open_pos = 0;
    let mut body_start = 0;

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' if depth == 0 => {
                if let Some(&(_, '{')) = chars.peek() {
                    chars.next();
                    literal.push('{');
                    continue;
                }

                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                depth = 1;
                open_pos = pos;
                body_start = pos + 1;
            }
            // Nested braces are part of the format spec, e.g. `{:>{1}}`
            '{' => depth += 1,
            '}' if depth == 0 => {
                if let Some(&(_, '}')) = chars.peek() {
                    chars.next();
                } else {
                    log::debug!("unmatched '}}' at offset {} kept as literal text", pos);
                    diagnostics.push(FormatError::malformed(pos, "unmatched '}'"));
                }
                literal.push('}');
            }
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let body = &input[body_start..pos];
                    segments.push(Segment::Placeholder(split_body(body, open_pos)));
                }
            }
            _ if depth == 0 => literal.push(ch),
            _ => {}
        }
    }

    if depth > 0 {
        log::debug!(
            "placeholder opened at offset {} never closes, dropping '{}'",
            open_pos,
            &input[open_pos..]
        );
        diagnostics.push(FormatError::malformed(open_pos, "unclosed placeholder"));
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    Template::new(segments, input.to_string(), diagnostics)
}

/// Split a placeholder body on its first `:` into index text and spec text
fn split_body(body: &str, position: usize) -> Placeholder {
    let (index, spec) = body.split_once(':').unwrap_or((body, ""));
    let index = if index.is_empty() {
        None
    } else {
        Some(index.to_string())
    };
    Placeholder::new(index, spec, position)
}
