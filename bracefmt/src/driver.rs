//! Template evaluation: tokenize, resolve, parse specs, render

use crate::ast::Segment;
use crate::buffer::BoundedString;
use crate::error::FormatError;
use crate::options::FormatOptions;
use crate::render::Formattable;
use crate::resolver::{IndexCounter, resolve};
use crate::spec::parse_spec;
use crate::tokenizer::tokenize;
use crate::value::Argument;

/// How deep format specs may nest placeholders inside placeholders
pub const MAX_SPEC_NESTING: usize = 16;

/// Format a template against positional arguments
///
/// Total: malformed braces and indices without an argument contribute
/// nothing, and the rest of the template is still rendered.
pub fn format(template: &str, args: &[Argument]) -> String {
    let driver = Driver {
        args,
        options: FormatOptions::lenient(),
    };
    // Lenient evaluation reports nothing, so this never falls back
    driver.evaluate(template, 0).unwrap_or_default()
}

/// Format with explicit options; in strict mode the first problem is returned
pub fn try_format(
    template: &str,
    args: &[Argument],
    options: &FormatOptions,
) -> Result<String, FormatError> {
    Driver {
        args,
        options: *options,
    }
    .evaluate(template, 0)
}

/// Format into a buffer of `capacity` bytes, NUL-filled after the text
pub fn format_bounded(template: &str, args: &[Argument], capacity: usize) -> BoundedString {
    BoundedString::from_text(&format(template, args), capacity)
}

struct Driver<'a> {
    args: &'a [Argument],
    options: FormatOptions,
}

impl Driver<'_> {
    /// Fail in strict mode, otherwise note the problem and carry on
    fn report(&self, err: FormatError) -> Result<(), FormatError> {
        if self.options.strict {
            return Err(err);
        }
        log::debug!("ignoring: {}", err);
        Ok(())
    }

    /// Evaluate one template string with its own implicit-index counter
    ///
    /// `depth` counts the enclosing specs; past [`MAX_SPEC_NESTING`] a spec
    /// that still holds placeholders is dropped.
    fn evaluate(&self, text: &str, depth: usize) -> Result<String, FormatError> {
        let template = tokenize(text);
        if self.options.strict {
            if let Some(err) = template.diagnostics.first() {
                return Err(err.clone());
            }
        }

        let mut counter = IndexCounter::new();
        let mut result = String::with_capacity(text.len());

        for segment in &template.segments {
            let placeholder = match segment {
                Segment::Literal(s) => {
                    result.push_str(s);
                    continue;
                }
                Segment::Placeholder(p) => p,
            };

            let index = match resolve(placeholder, &mut counter) {
                Ok(index) => index,
                Err(err) => {
                    self.report(err)?;
                    continue;
                }
            };

            // Spec text may hold placeholders of its own, e.g. `{:>{1}}`
            let spec_text = if depth >= MAX_SPEC_NESTING && placeholder.spec.contains('{') {
                self.report(FormatError::malformed(
                    placeholder.position,
                    "format spec nested too deeply",
                ))?;
                String::new()
            } else {
                self.evaluate(&placeholder.spec, depth + 1)?
            };
            let desc = parse_spec(&spec_text);

            match index.position().and_then(|i| self.args.get(i)) {
                Some(arg) => {
                    log::trace!(
                        "placeholder at offset {} -> {} argument {} with spec '{}'",
                        placeholder.position,
                        arg.kind(),
                        index.value(),
                        desc
                    );
                    result.push_str(&arg.render(&desc));
                }
                None => self.report(FormatError::MissingArgument {
                    index: index.value(),
                    available: self.args.len(),
                })?,
            }
        }

        Ok(result)
    }
}

/// Format a template with arguments converted through [`Argument::from`]
///
/// ```
/// let s = bracefmt::interpolate!("{} has {:#x} items: {}", "box", 255, vec![1, 2]);
/// assert_eq!(s, "box has 0xff items: {1, 2}");
/// ```
#[macro_export]
macro_rules! interpolate {
    ($template:expr $(,)?) => {
        $crate::format($template, &[])
    };
    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::format($template, &[$($crate::Argument::from($arg)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolate;
    use serde_json::json;

    fn strict(template: &str, args: &[Argument]) -> Result<String, FormatError> {
        try_format(template, args, &FormatOptions::strict())
    }

    #[test]
    fn test_format_identity_without_braces() {
        for text in ["", "Hello, World!", "a:b<c>^d", "naïve ☃"] {
            assert_eq!(format(text, &[]), text);
        }
    }

    #[test]
    fn test_format_escapes() {
        assert_eq!(format("{{}}", &[]), "{}");
        assert_eq!(format("a{{b}}c", &[]), "a{b}c");
        assert_eq!(interpolate!("{{{}}}", 5), "{5}");
    }

    #[test]
    fn test_format_implicit_and_explicit_indices() {
        assert_eq!(interpolate!("{} {0} {}", "a", "b", "c"), "a a b");
        assert_eq!(interpolate!("{1} {} {0} {}", 1, 2), "2 1 1 2");
        assert_eq!(interpolate!("{2}{1}{0}", "a", "b", "c"), "cba");
    }

    #[test]
    fn test_format_width_and_align() {
        assert_eq!(interpolate!("{:->10}", "foo"), "-------foo");
        assert_eq!(interpolate!("{:-<10}", "foo"), "foo-------");
        assert_eq!(interpolate!("{:-^10}", "foo"), "---foo----");
        assert_eq!(interpolate!("{:5}", "abcdef"), "abcdef");
    }

    #[test]
    fn test_format_width_is_capped() {
        let out = interpolate!("{:70000}", "x");
        assert_eq!(out.chars().count(), crate::spec::MAX_WIDTH);
        assert!(out.starts_with('x'));

        let out = interpolate!("{:>99999999999999999999}", 7);
        assert_eq!(out.len(), crate::spec::MAX_WIDTH);
        assert!(out.ends_with(" 7"));
    }

    #[test]
    fn test_format_integers() {
        assert_eq!(interpolate!("{:#x}", 255), "0xff");
        assert_eq!(interpolate!("{:X}", 255), "FF");
        assert_eq!(interpolate!("{:#X}", 255), "0XFF");
        assert_eq!(interpolate!("{:d}", -42), "-42");
        assert_eq!(interpolate!("{:#b}", -5), "-0b101");
        assert_eq!(interpolate!("{}", i64::MIN), "-9223372036854775808");
    }

    #[test]
    fn test_format_collections() {
        assert_eq!(interpolate!("{}", vec![1, 2, 3]), "{1, 2, 3}");
        assert_eq!(
            interpolate!("{}", Argument::map([("a", 1), ("b", 2)])),
            "{a: 1, b: 2}"
        );
    }

    #[test]
    fn test_format_mixed_demo() {
        let contained = [[1, 2, 3], [4, 5, 6]];
        let mapped = Argument::map([("hello", 123), ("world", 456)]);
        assert_eq!(
            interpolate!("Hello {:-<30} <{:-^#20x}> world", contained, mapped),
            "Hello {{1, 2, 3}, {4, 5, 6}}-------- <{hello: 0x7b, world: 0x1c8}> world"
        );
    }

    #[test]
    fn test_format_out_of_range_is_noop() {
        assert_eq!(interpolate!("{5}", "a"), "");
        assert_eq!(interpolate!("x{5}y", "a"), "xy");
        assert_eq!(interpolate!("{} {} {}", "a"), "a  ");
        assert_eq!(interpolate!("[{-1}]", "a"), "[]");
    }

    #[test]
    fn test_format_invalid_index_is_noop() {
        assert_eq!(interpolate!("[{name}] {}", "a"), "[] a");
    }

    #[test]
    fn test_format_dynamic_width() {
        assert_eq!(interpolate!("{:>{1}}", "ab", 5), "   ab");
        assert_eq!(interpolate!("{0:*^{1}}|", "x", 5), "**x**|");
        assert_eq!(interpolate!("{:{2}<{1}}", "ab", 4, "."), "ab..");
    }

    #[test]
    fn test_nested_spec_has_its_own_counter() {
        // The nested `{}` is index 0 of the same arguments, and the outer
        // counter only moves for the outer placeholders
        assert_eq!(interpolate!("{:>{}}|{}", 7, "x"), "      7|x");
    }

    #[test]
    fn test_format_malformed_degrades() {
        assert_eq!(interpolate!("a}b{}", 1), "a}b1");
        assert_eq!(interpolate!("{} {unclosed", 1), "1 ");
        assert_eq!(format("}", &[]), "}");
    }

    fn deeply_nested(levels: usize) -> String {
        "{:".repeat(levels) + &"}".repeat(levels)
    }

    #[test]
    fn test_deep_spec_nesting_is_cut_off() {
        // Every level renders the argument as the next level's width
        assert_eq!(format(&deeply_nested(3000), &[Argument::from(1)]), "1");
        assert_eq!(
            format(&deeply_nested(MAX_SPEC_NESTING + 1), &[Argument::from(1)]),
            "1"
        );
    }

    #[test]
    fn test_strict_rejects_deep_spec_nesting() {
        let args = [Argument::from(1)];
        assert!(strict(&deeply_nested(MAX_SPEC_NESTING + 1), &args).is_ok());
        assert_eq!(
            strict(&deeply_nested(MAX_SPEC_NESTING + 2), &args),
            Err(FormatError::MalformedTemplate {
                position: 0,
                message: "format spec nested too deeply".to_string()
            })
        );
        assert!(strict(&deeply_nested(3000), &args).is_err());
    }

    #[test]
    fn test_format_reuses_argument() {
        assert_eq!(interpolate!("{0}{0}{0:>3}", 7), "77  7");
    }

    #[test]
    fn test_format_json_arguments() {
        let args = vec![
            Argument::from(json!({"b": [1, 2], "a": "x"})),
            Argument::from(json!(16)),
        ];
        assert_eq!(format("{} {1:#o}", &args), "{b: {1, 2}, a: x} 020");
    }

    #[test]
    fn test_strict_ok() {
        assert_eq!(
            strict("{} and {0:>3}", &[Argument::from(1)]),
            Ok("1 and   1".to_string())
        );
    }

    #[test]
    fn test_strict_missing_argument() {
        assert_eq!(
            strict("{5}", &[Argument::from("a")]),
            Err(FormatError::MissingArgument {
                index: 5,
                available: 1
            })
        );
    }

    #[test]
    fn test_strict_malformed() {
        assert_eq!(
            strict("oops}", &[]),
            Err(FormatError::MalformedTemplate {
                position: 4,
                message: "unmatched '}'".to_string()
            })
        );
        assert!(matches!(
            strict("{", &[]),
            Err(FormatError::MalformedTemplate { position: 0, .. })
        ));
    }

    #[test]
    fn test_strict_invalid_index() {
        assert_eq!(
            strict("{abc}", &[Argument::from(1)]),
            Err(FormatError::InvalidIndex {
                text: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_strict_checks_nested_spec() {
        assert_eq!(
            strict("{:{3}}", &[Argument::from(1)]),
            Err(FormatError::MissingArgument {
                index: 3,
                available: 1
            })
        );
    }

    #[test]
    fn test_format_bounded() {
        let buf = format_bounded("{}-{}", &[Argument::from("ab"), Argument::from(12)], 8);
        assert_eq!(buf, "ab-12");
        assert_eq!(buf.as_bytes(), b"ab-12\0\0\0");

        let buf = format_bounded("{:>10}", &[Argument::from("x")], 4);
        assert_eq!(buf, "    ");
        assert!(buf.is_truncated());
    }

    #[test]
    fn test_format_is_thread_safe() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let args = vec![Argument::from(i), Argument::from("t")];
                    format("{1}{0:#x}", &args)
                })
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec!["t0x0", "t0x1", "t0x2", "t0x3"]);
    }
}
