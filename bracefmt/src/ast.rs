//! AST types for brace templates

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// A tokenized template: literal text and placeholders in output order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// The segments of the template
    pub segments: Vec<Segment>,
    /// The original template string (for display/debugging)
    #[serde(default)]
    pub source: String,
    /// Problems found while scanning; the segments are still usable
    #[serde(skip)]
    pub diagnostics: Vec<FormatError>,
}

impl Template {
    pub fn new(segments: Vec<Segment>, source: String, diagnostics: Vec<FormatError>) -> Self {
        Self {
            segments,
            source,
            diagnostics,
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// A part of a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// Literal text, escapes already collapsed
    Literal(String),
    /// A brace-delimited argument reference: `{...}`
    Placeholder(Placeholder),
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Literal(text) => {
                for ch in text.chars() {
                    match ch {
                        '{' => write!(f, "{{{{")?,
                        '}' => write!(f, "}}}}")?,
                        _ => write!(f, "{}", ch)?,
                    }
                }
                Ok(())
            }
            Segment::Placeholder(p) => write!(f, "{}", p),
        }
    }
}

/// The body of a placeholder, split on its first `:`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    /// Raw index text; `None` when the placeholder takes the next implicit index
    pub index: Option<String>,
    /// Raw spec text, possibly containing nested placeholders
    pub spec: String,
    /// Byte offset of the opening brace in the source template
    #[serde(default)]
    pub position: usize,
}

impl Placeholder {
    pub fn new(index: Option<String>, spec: impl Into<String>, position: usize) -> Self {
        Self {
            index,
            spec: spec.into(),
            position,
        }
    }
}

impl std::fmt::Display for Placeholder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}", self.index.as_deref().unwrap_or(""))?;
        if !self.spec.is_empty() {
            write!(f, ":{}", self.spec)?;
        }
        write!(f, "}}")
    }
}

/// Alignment of a value within its field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    /// `<`
    Left,
    /// `>`
    Right,
    /// `^`
    Center,
}

impl Align {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '<' => Some(Align::Left),
            '>' => Some(Align::Right),
            '^' => Some(Align::Center),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Align::Left => '<',
            Align::Right => '>',
            Align::Center => '^',
        }
    }
}

/// A fill character together with the alignment it applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillAlign {
    pub fill: char,
    pub align: Align,
}

/// Sign display mode (`+`, `-` or space)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    Plus,
    Minus,
    Space,
}

impl Sign {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Sign::Plus),
            '-' => Some(Sign::Minus),
            ' ' => Some(Sign::Space),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
            Sign::Space => ' ',
        }
    }
}

/// Presentation type selected by the trailing type character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatType {
    /// `b`
    Binary,
    /// `B`
    BinaryUpper,
    /// `c`
    Char,
    /// `d`
    Decimal,
    /// `o`
    Octal,
    /// `x`
    Hex,
    /// `X`
    HexUpper,
    /// `p`
    Pointer,
    /// `s`
    Str,
}

impl FormatType {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'b' => Some(FormatType::Binary),
            'B' => Some(FormatType::BinaryUpper),
            'c' => Some(FormatType::Char),
            'd' => Some(FormatType::Decimal),
            'o' => Some(FormatType::Octal),
            'x' => Some(FormatType::Hex),
            'X' => Some(FormatType::HexUpper),
            'p' => Some(FormatType::Pointer),
            's' => Some(FormatType::Str),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            FormatType::Binary => 'b',
            FormatType::BinaryUpper => 'B',
            FormatType::Char => 'c',
            FormatType::Decimal => 'd',
            FormatType::Octal => 'o',
            FormatType::Hex => 'x',
            FormatType::HexUpper => 'X',
            FormatType::Pointer => 'p',
            FormatType::Str => 's',
        }
    }

    /// Numeric base used when rendering integers; non-numeric types fall back to 10
    pub fn radix(self) -> u64 {
        match self {
            FormatType::Binary | FormatType::BinaryUpper => 2,
            FormatType::Octal => 8,
            FormatType::Hex | FormatType::HexUpper => 16,
            _ => 10,
        }
    }

    pub fn is_upper(self) -> bool {
        matches!(self, FormatType::BinaryUpper | FormatType::HexUpper)
    }
}

/// Parsed form of `[[fill]align][sign][#][0][width][.precision][L][type]`
///
/// `sign`, `zero_pad`, `precision` and `localized` are recorded but have no
/// effect on rendering; padding always uses the fill character.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormatDescriptor {
    pub fill_align: Option<FillAlign>,
    pub sign: Option<Sign>,
    /// `#`: emit the `0`, `0x` or `0b` base prefix
    pub alternate: bool,
    pub zero_pad: bool,
    pub width: usize,
    pub precision: Option<usize>,
    pub localized: bool,
    pub format_type: Option<FormatType>,
}

impl FormatDescriptor {
    /// Fill character, space when unset
    pub fn fill(&self) -> char {
        self.fill_align.map(|fa| fa.fill).unwrap_or(' ')
    }

    /// Alignment, left when unset
    pub fn align(&self) -> Align {
        self.fill_align.map(|fa| fa.align).unwrap_or(Align::Left)
    }

    /// Copy used for the elements of a collection: never padded individually
    pub fn for_elements(&self) -> Self {
        Self {
            fill_align: None,
            width: 0,
            ..self.clone()
        }
    }
}

impl std::fmt::Display for FormatDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(fa) = self.fill_align {
            if fa.fill != ' ' {
                write!(f, "{}", fa.fill)?;
            }
            write!(f, "{}", fa.align.as_char())?;
        }
        if let Some(sign) = self.sign {
            write!(f, "{}", sign.as_char())?;
        }
        if self.alternate {
            write!(f, "#")?;
        }
        if self.zero_pad {
            write!(f, "0")?;
        }
        if self.width > 0 {
            write!(f, "{}", self.width)?;
        }
        if let Some(prec) = self.precision {
            write!(f, ".{}", prec)?;
        }
        if self.localized {
            write!(f, "L")?;
        }
        if let Some(ty) = self.format_type {
            write!(f, "{}", ty.as_char())?;
        }
        Ok(())
    }
}
