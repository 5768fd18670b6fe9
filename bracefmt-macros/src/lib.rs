use proc_macro::TokenStream;

mod const_format;

/// Format a template at compile time and expand to a `&'static str`
///
/// Arguments must be literals: integers (optionally negated), strings,
/// chars, arrays of those (sequences) or arrays of 2-tuples (maps, in the
/// order written). The template is checked strictly, so stray braces and
/// missing arguments are compile errors.
///
/// ```
/// use bracefmt_macros::const_format;
///
/// const BANNER: &str = const_format!("[{:^9}] {:#x}", "ready", 255);
/// assert_eq!(BANNER, "[  ready  ] 0xff");
/// ```
#[proc_macro]
pub fn const_format(input: TokenStream) -> TokenStream {
    const_format::const_format(input)
}
