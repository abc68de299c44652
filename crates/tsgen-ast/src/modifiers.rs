use bitflags::bitflags;
use serde::{Serialize, Serializer};

bitflags! {
    /// Modifier keywords on declarations, class members and parameters.
    #[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
    pub struct Modifiers: u16 {
        const EXPORT = 1 << 0;
        const DEFAULT = 1 << 1;
        const DECLARE = 1 << 2;
        const PUBLIC = 1 << 3;
        const PRIVATE = 1 << 4;
        const PROTECTED = 1 << 5;
        const STATIC = 1 << 6;
        const ABSTRACT = 1 << 7;
        const READONLY = 1 << 8;
        const ASYNC = 1 << 9;
        const CONST = 1 << 10;

        const ACCESSIBILITY = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
    }
}

/// Canonical source order of modifier keywords.
const KEYWORDS: &[(Modifiers, &str)] = &[
    (Modifiers::EXPORT, "export"),
    (Modifiers::DEFAULT, "default"),
    (Modifiers::DECLARE, "declare"),
    (Modifiers::PUBLIC, "public"),
    (Modifiers::PRIVATE, "private"),
    (Modifiers::PROTECTED, "protected"),
    (Modifiers::STATIC, "static"),
    (Modifiers::ABSTRACT, "abstract"),
    (Modifiers::READONLY, "readonly"),
    (Modifiers::ASYNC, "async"),
    (Modifiers::CONST, "const"),
];

impl Modifiers {
    /// Look up a modifier keyword.
    pub fn from_keyword(text: &str) -> Option<Modifiers> {
        KEYWORDS
            .iter()
            .find(|(_, keyword)| *keyword == text)
            .map(|(flag, _)| *flag)
    }

    /// The keywords of the set flags, in canonical order.
    pub fn keywords(self) -> impl Iterator<Item = &'static str> {
        KEYWORDS
            .iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, keyword)| *keyword)
    }
}

impl Serialize for Modifiers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.keywords())
    }
}
