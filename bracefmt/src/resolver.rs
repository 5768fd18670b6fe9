//! Placeholder index resolution

use crate::ast::Placeholder;
use crate::error::FormatError;

/// Next implicit argument position for one parse of one template
///
/// Only placeholders without an explicit index advance it. Nested spec
/// parses get a fresh counter of their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexCounter {
    next: usize,
}

impl IndexCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the current value and advance
    pub fn take(&mut self) -> usize {
        let current = self.next;
        self.next += 1;
        current
    }
}

/// The argument a placeholder refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentIndex {
    /// Written in the template, possibly negative
    Explicit(i64),
    /// Assigned from the counter
    Implicit(usize),
}

impl ArgumentIndex {
    /// Position in the argument list, `None` for negative explicit indices
    pub fn position(self) -> Option<usize> {
        match self {
            ArgumentIndex::Explicit(i) => usize::try_from(i).ok(),
            ArgumentIndex::Implicit(i) => Some(i),
        }
    }

    /// Index as written, for diagnostics
    pub fn value(self) -> i64 {
        match self {
            ArgumentIndex::Explicit(i) => i,
            ArgumentIndex::Implicit(i) => i64::try_from(i).unwrap_or(i64::MAX),
        }
    }
}

/// Resolve which argument a placeholder refers to
///
/// Explicit index text is parsed as an optionally signed base-10 integer and
/// leaves the counter untouched. Text that does not parse is reported as
/// [`FormatError::InvalidIndex`]; the counter is not advanced for it either.
pub fn resolve(
    placeholder: &Placeholder,
    counter: &mut IndexCounter,
) -> Result<ArgumentIndex, FormatError> {
    match placeholder.index.as_deref() {
        None | Some("") => {
            let index = counter.take();
            log::trace!("implicit placeholder resolved to argument {}", index);
            Ok(ArgumentIndex::Implicit(index))
        }
        Some(text) => text
            .parse::<i64>()
            .map(ArgumentIndex::Explicit)
            .map_err(|_| FormatError::InvalidIndex {
                text: text.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explicit(text: &str) -> Placeholder {
        Placeholder::new(Some(text.to_string()), "", 0)
    }

    fn implicit() -> Placeholder {
        Placeholder::new(None, "", 0)
    }

    #[test]
    fn test_implicit_indices_advance() {
        let mut counter = IndexCounter::new();
        let placeholder = implicit();
        assert_eq!(resolve(&placeholder, &mut counter), Ok(ArgumentIndex::Implicit(0)));
        assert_eq!(resolve(&placeholder, &mut counter), Ok(ArgumentIndex::Implicit(1)));
        assert_eq!(counter.next, 2);
    }

    #[test]
    fn test_explicit_index_leaves_counter() {
        let mut counter = IndexCounter::new();
        assert_eq!(
            resolve(&implicit(), &mut counter),
            Ok(ArgumentIndex::Implicit(0))
        );
        assert_eq!(resolve(&explicit("0"), &mut counter), Ok(ArgumentIndex::Explicit(0)));
        assert_eq!(resolve(&explicit("7"), &mut counter), Ok(ArgumentIndex::Explicit(7)));
        assert_eq!(
            resolve(&implicit(), &mut counter),
            Ok(ArgumentIndex::Implicit(1))
        );
    }

    #[test]
    fn test_signed_explicit_index() {
        let mut counter = IndexCounter::new();
        let index = resolve(&explicit("-1"), &mut counter).unwrap();
        assert_eq!(index, ArgumentIndex::Explicit(-1));
        assert_eq!(index.position(), None);
        assert_eq!(index.value(), -1);

        let index = resolve(&explicit("+2"), &mut counter).unwrap();
        assert_eq!(index.position(), Some(2));
        assert_eq!(counter.next, 0);
    }

    #[test]
    fn test_invalid_index_text() {
        let mut counter = IndexCounter::new();
        assert_eq!(
            resolve(&explicit("name"), &mut counter),
            Err(FormatError::InvalidIndex {
                text: "name".to_string()
            })
        );
        assert_eq!(counter.next, 0);
    }
}
