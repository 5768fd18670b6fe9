//! Format spec parser
//!
//! Grammar, every stage optional and tried in this order:
//!
//! ```text
//! spec ::= [[fill]align][sign]["#"]["0"][width]["." precision]["L"][type]
//! ```
//!
//! Each stage takes the unconsumed remainder and returns what it did not
//! consume, so a stage that does not match leaves the input untouched.
//! Anything left over after the type stage is ignored.

use crate::ast::{Align, FillAlign, FormatDescriptor, FormatType, Sign};

/// Widths and precisions are clamped to this value
pub const MAX_WIDTH: usize = u16::MAX as usize;

/// Parse spec text (already substituted) into a descriptor
pub fn parse_spec(text: &str) -> FormatDescriptor {
    let mut desc = FormatDescriptor::default();

    let rest = parse_fill_align(text, &mut desc);
    let rest = parse_sign(rest, &mut desc);
    let rest = parse_alternate(rest, &mut desc);
    let rest = parse_zero_pad(rest, &mut desc);
    let rest = parse_width(rest, &mut desc);
    let rest = parse_precision(rest, &mut desc);
    let rest = parse_localized(rest, &mut desc);
    let rest = parse_type(rest, &mut desc);

    if !rest.is_empty() {
        log::trace!("ignoring trailing spec text '{}' in '{}'", rest, text);
    }
    desc
}

fn parse_fill_align<'a>(input: &'a str, desc: &mut FormatDescriptor) -> &'a str {
    let mut chars = input.chars();
    let Some(first) = chars.next() else {
        return input;
    };

    if let Some(align) = Align::from_char(first) {
        desc.fill_align = Some(FillAlign { fill: ' ', align });
        return chars.as_str();
    }

    if let Some(align) = chars.next().and_then(Align::from_char) {
        desc.fill_align = Some(FillAlign { fill: first, align });
        return chars.as_str();
    }

    input
}

fn parse_sign<'a>(input: &'a str, desc: &mut FormatDescriptor) -> &'a str {
    let mut chars = input.chars();
    match chars.next().and_then(Sign::from_char) {
        Some(sign) => {
            desc.sign = Some(sign);
            chars.as_str()
        }
        None => input,
    }
}

fn parse_alternate<'a>(input: &'a str, desc: &mut FormatDescriptor) -> &'a str {
    match input.strip_prefix('#') {
        Some(rest) => {
            desc.alternate = true;
            rest
        }
        None => input,
    }
}

fn parse_zero_pad<'a>(input: &'a str, desc: &mut FormatDescriptor) -> &'a str {
    match input.strip_prefix('0') {
        Some(rest) => {
            desc.zero_pad = true;
            rest
        }
        None => input,
    }
}

fn parse_width<'a>(input: &'a str, desc: &mut FormatDescriptor) -> &'a str {
    let (digits, rest) = split_digits(input);
    desc.width = accumulate(digits);
    rest
}

/// `.` followed by at least one digit; a bare `.` is left unconsumed
fn parse_precision<'a>(input: &'a str, desc: &mut FormatDescriptor) -> &'a str {
    let Some(after_dot) = input.strip_prefix('.') else {
        return input;
    };
    let (digits, rest) = split_digits(after_dot);
    if digits.is_empty() {
        return input;
    }
    desc.precision = Some(accumulate(digits));
    rest
}

fn parse_localized<'a>(input: &'a str, desc: &mut FormatDescriptor) -> &'a str {
    match input.strip_prefix('L') {
        Some(rest) => {
            desc.localized = true;
            rest
        }
        None => input,
    }
}

fn parse_type<'a>(input: &'a str, desc: &mut FormatDescriptor) -> &'a str {
    let mut chars = input.chars();
    match chars.next().and_then(FormatType::from_char) {
        Some(ty) => {
            desc.format_type = Some(ty);
            chars.as_str()
        }
        None => input,
    }
}

fn split_digits(input: &str) -> (&str, &str) {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    input.split_at(end)
}

/// `value = value * 10 + digit`, left to right, clamped to [`MAX_WIDTH`]
fn accumulate(digits: &str) -> usize {
    digits
        .bytes()
        .fold(0usize, |acc, b| {
            acc.saturating_mul(10).saturating_add(usize::from(b - b'0'))
        })
        .min(MAX_WIDTH)
}
