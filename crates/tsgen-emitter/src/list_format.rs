//! Layout descriptions for every list the printer writes.
//!
//! A single routine (`Printer::emit_list`) lays out all lists; a
//! [`ListFormat`] only says what surrounds and separates the items.

/// The shape of one kind of list.
///
/// In an inline list, items are separated by `delimiter` and a space. In a
/// multi-line list, a line break follows `prefix`, each item (and its
/// delimiter) sits on its own indented line, and `suffix` starts a new line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListFormat {
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub delimiter: &'static str,
    /// Write the delimiter after the last item too.
    pub trailing_delimiter: bool,
    pub multi_line: bool,
    /// Written instead of prefix and suffix when there are no items.
    pub empty: &'static str,
    /// Honor `BlankLine` trivia on the items.
    pub preserve_blank_lines: bool,
}

impl ListFormat {
    const INLINE: ListFormat = ListFormat {
        prefix: "",
        suffix: "",
        delimiter: ",",
        trailing_delimiter: false,
        multi_line: false,
        empty: "",
        preserve_blank_lines: false,
    };

    const BRACED: ListFormat = ListFormat {
        prefix: "{",
        suffix: "}",
        delimiter: "",
        trailing_delimiter: false,
        multi_line: true,
        empty: "{}",
        preserve_blank_lines: true,
    };

    // =========================================================================
    // Inline lists
    // =========================================================================

    /// `(a: T, b?: U)`
    pub const PARAMETERS: ListFormat = ListFormat {
        prefix: "(",
        suffix: ")",
        empty: "()",
        ..Self::INLINE
    };

    /// `f(a, b)`
    pub const ARGUMENTS: ListFormat = Self::PARAMETERS;

    /// `<T, U>`; nothing at all when empty.
    pub const TYPE_ARGUMENTS: ListFormat = ListFormat {
        prefix: "<",
        suffix: ">",
        ..Self::INLINE
    };

    pub const TYPE_PARAMETERS: ListFormat = Self::TYPE_ARGUMENTS;

    /// `[a, b]`
    pub const ARRAY_LITERAL: ListFormat = ListFormat {
        prefix: "[",
        suffix: "]",
        empty: "[]",
        ..Self::INLINE
    };

    /// `[A, B]`
    pub const TUPLE_ELEMENTS: ListFormat = Self::ARRAY_LITERAL;

    /// `{ a: 1, b }`
    pub const INLINE_OBJECT_LITERAL: ListFormat = ListFormat {
        prefix: "{ ",
        suffix: " }",
        empty: "{}",
        ..Self::INLINE
    };

    /// `{ a, b as c }`
    pub const NAMED_IMPORTS: ListFormat = Self::INLINE_OBJECT_LITERAL;

    /// `extends A, B` / `implements A, B`
    pub const HERITAGE_CLAUSE: ListFormat = Self::INLINE;

    /// `a = 1, b: T`
    pub const VARIABLE_DECLARATORS: ListFormat = Self::INLINE;

    /// `A | B`
    pub const UNION_TYPE: ListFormat = ListFormat {
        delimiter: " |",
        ..Self::INLINE
    };

    /// `A & B`
    pub const INTERSECTION_TYPE: ListFormat = ListFormat {
        delimiter: " &",
        ..Self::INLINE
    };

    // =========================================================================
    // Multi-line lists
    // =========================================================================

    /// Statements of a block, function body or namespace body.
    pub const BLOCK_STATEMENTS: ListFormat = Self::BRACED;

    /// Class members; each member writes its own terminator.
    pub const CLASS_MEMBERS: ListFormat = Self::BRACED;

    /// Interface bodies and object types: `;`-terminated members.
    pub const TYPE_MEMBERS: ListFormat = ListFormat {
        delimiter: ";",
        trailing_delimiter: true,
        ..Self::BRACED
    };

    /// Enum members: `,`-separated with a trailing comma.
    pub const ENUM_MEMBERS: ListFormat = ListFormat {
        delimiter: ",",
        trailing_delimiter: true,
        ..Self::BRACED
    };

    /// An object literal too complex for one line.
    pub const MULTI_LINE_OBJECT_LITERAL: ListFormat = Self::ENUM_MEMBERS;

    /// `case` and `default` clauses; blank lines are decided by the printer.
    pub const SWITCH_CLAUSES: ListFormat = ListFormat {
        preserve_blank_lines: false,
        ..Self::BRACED
    };

    /// Statements without braces or indentation of their own: the top level
    /// of a file and the body of a `case` clause.
    pub const STATEMENT_SEQUENCE: ListFormat = ListFormat {
        prefix: "",
        suffix: "",
        empty: "",
        ..Self::BRACED
    };
}
