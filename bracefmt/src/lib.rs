//! Brace-placeholder string interpolation
//!
//! Supports:
//! - Implicit and explicit positions: `{}`, `{0}`, `{1}`
//! - Escapes: `{{` and `}}`
//! - Format specs: `{:-^#20x}` (`[[fill]align][sign][#][0][width][.precision][L][type]`)
//! - Dynamic specs: `{:>{1}}` takes its width from argument 1
//! - Integers in bases 2, 8, 10 and 16, text, sequences and ordered maps
//!
//! ```
//! use bracefmt::{Argument, format};
//!
//! let args = [Argument::from("foo"), Argument::from(255)];
//! assert_eq!(format("{:->10}|{1:#X}", &args), "-------foo|0XFF");
//! ```
//!
//! Formatting is lenient by default: stray braces and indices without an
//! argument contribute nothing. [`try_format`] with
//! [`FormatOptions::strict`] reports them instead.

pub mod ast;
pub mod buffer;
pub mod driver;
pub mod error;
pub mod options;
pub mod render;
pub mod resolver;
pub mod spec;
pub mod tokenizer;
pub mod value;

pub use ast::{Align, FillAlign, FormatDescriptor, FormatType, Placeholder, Segment, Sign, Template};
pub use buffer::BoundedString;
pub use driver::{format, format_bounded, try_format};
pub use error::FormatError;
pub use options::FormatOptions;
pub use render::Formattable;
pub use resolver::{ArgumentIndex, IndexCounter, resolve};
pub use spec::parse_spec;
pub use tokenizer::tokenize;
pub use value::Argument;
