//! Type-directed rendering of argument values

use std::collections::BTreeMap;

use crate::ast::{Align, FormatDescriptor, FormatType};
use crate::value::Argument;

/// Anything that can be rendered under a format descriptor
pub trait Formattable {
    fn render(&self, desc: &FormatDescriptor) -> String;
}

/// Pad `text` to the descriptor width with its fill and alignment
///
/// Text already at or above the width is returned unchanged, never truncated.
/// Widths count `char`s.
pub fn pad_align(text: &str, desc: &FormatDescriptor) -> String {
    let len = text.chars().count();
    if len >= desc.width {
        return text.to_string();
    }

    let deficit = desc.width - len;
    let fill = desc.fill();
    let (left, right) = match desc.align() {
        Align::Left => (0, deficit),
        Align::Right => (deficit, 0),
        Align::Center => (deficit / 2, deficit - deficit / 2),
    };

    let mut out = String::with_capacity(text.len() + deficit * fill.len_utf8());
    out.extend(std::iter::repeat_n(fill, left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(fill, right));
    out
}

/// Render string-like text: the characters as is, then padded
pub fn render_str(text: &str, desc: &FormatDescriptor) -> String {
    pad_align(text, desc)
}

/// Render an integer given as sign and magnitude
///
/// Layout is `[-][prefix]digits`, where the prefix (`0`, `0x`, `0b`, or the
/// upper-case variants) only appears with `#`. Working on the magnitude keeps
/// `i64::MIN` representable.
pub fn render_int(negative: bool, magnitude: u64, desc: &FormatDescriptor) -> String {
    let ty = desc.format_type.unwrap_or(FormatType::Decimal);
    let radix = ty.radix();
    let upper = ty.is_upper();

    let mut out = String::with_capacity(66);
    if negative {
        out.push('-');
    }

    if desc.alternate {
        let prefix = match (radix, upper) {
            (16, false) => "0x",
            (16, true) => "0X",
            (8, _) => "0",
            (2, false) => "0b",
            (2, true) => "0B",
            _ => "",
        };
        out.push_str(prefix);
    }

    out.push_str(&digits(magnitude, radix, upper));
    pad_align(&out, desc)
}

/// Digits of `value` in `radix`, most significant first
fn digits(mut value: u64, radix: u64, upper: bool) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut reversed = Vec::with_capacity(64);
    while value > 0 {
        // radix is at most 16, so the remainder always fits a digit
        let digit = (value % radix) as u32;
        let ch = std::char::from_digit(digit, radix as u32).unwrap_or('?');
        reversed.push(if upper { ch.to_ascii_uppercase() } else { ch });
        value /= radix;
    }
    reversed.iter().rev().collect()
}

/// Render `{a, b, c}`; elements are never padded, the whole result is
pub fn render_seq<'a, T, I>(items: I, desc: &FormatDescriptor) -> String
where
    T: Formattable + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let inner = desc.for_elements();
    let body = items
        .into_iter()
        .map(|item| item.render(&inner))
        .collect::<Vec<_>>()
        .join(", ");
    pad_align(&format!("{{{}}}", body), desc)
}

/// Render `{k: v, ...}` in iteration order, padded like a sequence
pub fn render_map<'a, K, V, I>(entries: I, desc: &FormatDescriptor) -> String
where
    K: Formattable + ?Sized + 'a,
    V: Formattable + ?Sized + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let inner = desc.for_elements();
    let body = entries
        .into_iter()
        .map(|(k, v)| format!("{}: {}", k.render(&inner), v.render(&inner)))
        .collect::<Vec<_>>()
        .join(", ");
    pad_align(&format!("{{{}}}", body), desc)
}

impl Formattable for Argument {
    fn render(&self, desc: &FormatDescriptor) -> String {
        match self {
            Argument::Int(i) => render_int(*i < 0, i.unsigned_abs(), desc),
            Argument::UInt(u) => render_int(false, *u, desc),
            Argument::Str(s) => render_str(s, desc),
            Argument::Seq(items) => render_seq(items, desc),
            Argument::Map(entries) => render_map(entries.iter().map(|(k, v)| (k, v)), desc),
        }
    }
}

impl Formattable for str {
    fn render(&self, desc: &FormatDescriptor) -> String {
        render_str(self, desc)
    }
}

impl Formattable for String {
    fn render(&self, desc: &FormatDescriptor) -> String {
        render_str(self, desc)
    }
}

impl<T: Formattable + ?Sized> Formattable for &T {
    fn render(&self, desc: &FormatDescriptor) -> String {
        (**self).render(desc)
    }
}

macro_rules! impl_formattable_signed {
    ($($ty:ty),*) => {
        $(
            impl Formattable for $ty {
                fn render(&self, desc: &FormatDescriptor) -> String {
                    render_int(*self < 0, u64::from(self.unsigned_abs()), desc)
                }
            }
        )*
    };
}

macro_rules! impl_formattable_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Formattable for $ty {
                fn render(&self, desc: &FormatDescriptor) -> String {
                    render_int(false, u64::from(*self), desc)
                }
            }
        )*
    };
}

impl_formattable_signed!(i8, i16, i32, i64);
impl_formattable_unsigned!(u8, u16, u32, u64);

impl<T: Formattable> Formattable for [T] {
    fn render(&self, desc: &FormatDescriptor) -> String {
        render_seq(self, desc)
    }
}

impl<T: Formattable> Formattable for Vec<T> {
    fn render(&self, desc: &FormatDescriptor) -> String {
        render_seq(self, desc)
    }
}

impl<K: Formattable, V: Formattable> Formattable for BTreeMap<K, V> {
    fn render(&self, desc: &FormatDescriptor) -> String {
        render_map(self, desc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::parse_spec;

    fn render(arg: impl Into<Argument>, spec: &str) -> String {
        let arg: Argument = arg.into();
        arg.render(&parse_spec(spec))
    }

    #[test]
    fn test_pad_align_directions() {
        assert_eq!(render("foo", "->10"), "-------foo");
        assert_eq!(render("foo", "-<10"), "foo-------");
        assert_eq!(render("foo", "-^10"), "---foo----");
    }

    #[test]
    fn test_pad_default_is_left_space() {
        assert_eq!(render("ab", "5"), "ab   ");
    }

    #[test]
    fn test_pad_never_truncates() {
        assert_eq!(render("abcdef", "5"), "abcdef");
        assert_eq!(render("abcde", "5"), "abcde");
    }

    #[test]
    fn test_pad_counts_chars() {
        assert_eq!(render("héé", "*>5"), "**héé");
        assert_eq!(render("x", "é^4"), "éxéé");
    }

    #[test]
    fn test_int_decimal() {
        assert_eq!(render(0, ""), "0");
        assert_eq!(render(42, "d"), "42");
        assert_eq!(render(-42, "d"), "-42");
        assert_eq!(render(u64::MAX, ""), "18446744073709551615");
    }

    #[test]
    fn test_int_min_value() {
        assert_eq!(render(i64::MIN, ""), "-9223372036854775808");
        assert_eq!(render(i64::MIN, "#x"), "-0x8000000000000000");
        assert_eq!(render(i8::MIN, "b"), "-10000000");
    }

    #[test]
    fn test_int_bases() {
        assert_eq!(render(255, "x"), "ff");
        assert_eq!(render(255, "X"), "FF");
        assert_eq!(render(255, "#x"), "0xff");
        assert_eq!(render(255, "#X"), "0XFF");
        assert_eq!(render(8, "o"), "10");
        assert_eq!(render(8, "#o"), "010");
        assert_eq!(render(5, "b"), "101");
        assert_eq!(render(5, "#B"), "0B101");
        assert_eq!(render(-5, "#b"), "-0b101");
        assert_eq!(render(0, "#x"), "0x0");
    }

    #[test]
    fn test_int_non_numeric_type_is_decimal() {
        assert_eq!(render(65, "c"), "65");
        assert_eq!(render(65, "s"), "65");
    }

    #[test]
    fn test_int_padding_uses_fill_not_zeros() {
        assert_eq!(render(42, "05"), "42   ");
        assert_eq!(render(42, ">5"), "   42");
        assert_eq!(render(255, "*^#8x"), "**0xff**");
    }

    #[test]
    fn test_sign_flag_does_not_change_output() {
        assert_eq!(render(42, "+"), "42");
        assert_eq!(render(-42, " "), "-42");
    }

    #[test]
    fn test_seq() {
        assert_eq!(render(vec![1, 2, 3], ""), "{1, 2, 3}");
        assert_eq!(render(Vec::<i32>::new(), ""), "{}");
        assert_eq!(render(["a", "b"], ""), "{a, b}");
    }

    #[test]
    fn test_seq_padding_applies_to_whole() {
        assert_eq!(render(vec![1, 2], "*>10"), "****{1, 2}");
        assert_eq!(render(vec![10, 11], "#x"), "{0xa, 0xb}");
    }

    #[test]
    fn test_nested_seq() {
        assert_eq!(
            render([[1, 2, 3], [4, 5, 6]], "-<30"),
            "{{1, 2, 3}, {4, 5, 6}}--------"
        );
    }

    #[test]
    fn test_map() {
        assert_eq!(render(Argument::map([("a", 1), ("b", 2)]), ""), "{a: 1, b: 2}");
        assert_eq!(render(Argument::map(Vec::<(i32, i32)>::new()), ""), "{}");
        assert_eq!(
            render(Argument::map([("hello", 123), ("world", 456)]), "-^#20x"),
            "{hello: 0x7b, world: 0x1c8}"
        );
        assert_eq!(render(Argument::map([("k", "v")]), ".^10"), "..{k: v}..");
    }

    #[test]
    fn test_map_of_seqs() {
        let arg = Argument::map([("odd", vec![1, 3]), ("even", vec![2])]);
        assert_eq!(render(arg, ""), "{odd: {1, 3}, even: {2}}");
    }

    #[test]
    fn test_native_impls_match_argument() {
        let desc = parse_spec("#x");
        assert_eq!(255u8.render(&desc), "0xff");
        assert_eq!((-1i16).render(&desc), "-0x1");
        assert_eq!("foo".render(&parse_spec(">4")), " foo");
        assert_eq!(vec![1u32, 2].render(&desc), "{0x1, 0x2}");

        let mut m = BTreeMap::new();
        m.insert(1u8, "one".to_string());
        assert_eq!(m.render(&FormatDescriptor::default()), "{1: one}");
    }
}
