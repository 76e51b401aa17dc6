//! Mapping from token [`Kind`] to display class name.
//!
//! An empty class means "do not wrap": printers emit the escaped text
//! alone, annotators emit nothing, and line builders fold the token into
//! the surrounding literal run.

use std::borrow::Cow;

use hilite_lexer::Kind;

/// Default class names, matching google-code-prettify stylesheets.
///
/// `Whitespace` is intentionally absent and therefore unmapped.
const PRETTIFY: [(Kind, &str); 12] = [
    (Kind::String, "str"),
    (Kind::Keyword, "kwd"),
    (Kind::Comment, "com"),
    (Kind::Type, "typ"),
    (Kind::Literal, "lit"),
    (Kind::Punctuation, "pun"),
    (Kind::PlainText, "pln"),
    (Kind::Tag, "tag"),
    (Kind::HtmlTag, "htm"),
    (Kind::HtmlAttrName, "atn"),
    (Kind::HtmlAttrValue, "atv"),
    (Kind::Decimal, "dec"),
];

/// Fixed-size `Kind -> class` table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassMap {
    classes: [Cow<'static, str>; Kind::COUNT],
}

impl ClassMap {
    /// A map with every kind unmapped.
    pub fn empty() -> Self {
        Self {
            classes: std::array::from_fn(|_| Cow::Borrowed("")),
        }
    }

    /// Class for `kind`; empty if unmapped.
    #[inline]
    pub fn get(&self, kind: Kind) -> &str {
        &self.classes[kind.index()]
    }

    /// Returns `true` if tokens of `kind` are wrapped.
    #[inline]
    pub fn is_mapped(&self, kind: Kind) -> bool {
        !self.classes[kind.index()].is_empty()
    }

    /// Replace the class for `kind`. An empty string unmaps it.
    pub fn set(&mut self, kind: Kind, class: impl Into<Cow<'static, str>>) {
        self.classes[kind.index()] = class.into();
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, kind: Kind, class: impl Into<Cow<'static, str>>) -> Self {
        self.set(kind, class);
        self
    }

    /// All `(kind, class)` pairs in kind order, unmapped kinds included.
    pub fn iter(&self) -> impl Iterator<Item = (Kind, &str)> + '_ {
        Kind::ALL.iter().map(move |&kind| (kind, self.get(kind)))
    }
}

impl Default for ClassMap {
    fn default() -> Self {
        let mut map = Self::empty();
        for (kind, class) in PRETTIFY {
            map.set(kind, class);
        }
        map
    }
}
