//! Token kinds.
//!
//! Only reserved words get their own kind. Contextual keywords (`type`,
//! `interface`, `as`, `let`, `readonly`, ...) are scanned as `Identifier` and
//! recognised by the parser from their text, so they stay usable as names.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SyntaxKind {
    EndOfFileToken,

    // Literals and names
    Identifier,
    PrivateIdentifier,
    StringLiteral,
    NumericLiteral,
    BigIntLiteral,
    TemplateLiteral,

    // Punctuation
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    DotToken,
    DotDotDotToken,
    SemicolonToken,
    CommaToken,
    LessThanToken,
    LessThanEqualsToken,
    LessThanLessThanToken,
    LessThanLessThanEqualsToken,
    /// `>` is always scanned alone; the parser glues adjacent `>` and `=`
    /// tokens into shift and comparison operators so that `A<B<C>>` closes
    /// two type argument lists.
    GreaterThanToken,
    EqualsToken,
    EqualsEqualsToken,
    EqualsEqualsEqualsToken,
    EqualsGreaterThanToken,
    ExclamationToken,
    ExclamationEqualsToken,
    ExclamationEqualsEqualsToken,
    PlusToken,
    PlusPlusToken,
    PlusEqualsToken,
    MinusToken,
    MinusMinusToken,
    MinusEqualsToken,
    AsteriskToken,
    AsteriskEqualsToken,
    AsteriskAsteriskToken,
    AsteriskAsteriskEqualsToken,
    SlashToken,
    SlashEqualsToken,
    PercentToken,
    PercentEqualsToken,
    AmpersandToken,
    AmpersandEqualsToken,
    AmpersandAmpersandToken,
    AmpersandAmpersandEqualsToken,
    BarToken,
    BarEqualsToken,
    BarBarToken,
    BarBarEqualsToken,
    CaretToken,
    CaretEqualsToken,
    TildeToken,
    QuestionToken,
    QuestionDotToken,
    QuestionQuestionToken,
    QuestionQuestionEqualsToken,
    ColonToken,
    AtToken,

    // Reserved words
    BreakKeyword,
    CaseKeyword,
    CatchKeyword,
    ClassKeyword,
    ConstKeyword,
    ContinueKeyword,
    DebuggerKeyword,
    DefaultKeyword,
    DeleteKeyword,
    DoKeyword,
    ElseKeyword,
    EnumKeyword,
    ExportKeyword,
    ExtendsKeyword,
    FalseKeyword,
    FinallyKeyword,
    ForKeyword,
    FunctionKeyword,
    IfKeyword,
    ImportKeyword,
    InKeyword,
    InstanceOfKeyword,
    NewKeyword,
    NullKeyword,
    ReturnKeyword,
    SuperKeyword,
    SwitchKeyword,
    ThisKeyword,
    ThrowKeyword,
    TrueKeyword,
    TryKeyword,
    TypeOfKeyword,
    VarKeyword,
    VoidKeyword,
    WhileKeyword,
    WithKeyword,
}

impl SyntaxKind {
    /// Look up a reserved word.
    pub fn from_keyword(text: &str) -> Option<SyntaxKind> {
        use SyntaxKind::*;
        let kind = match text {
            "break" => BreakKeyword,
            "case" => CaseKeyword,
            "catch" => CatchKeyword,
            "class" => ClassKeyword,
            "const" => ConstKeyword,
            "continue" => ContinueKeyword,
            "debugger" => DebuggerKeyword,
            "default" => DefaultKeyword,
            "delete" => DeleteKeyword,
            "do" => DoKeyword,
            "else" => ElseKeyword,
            "enum" => EnumKeyword,
            "export" => ExportKeyword,
            "extends" => ExtendsKeyword,
            "false" => FalseKeyword,
            "finally" => FinallyKeyword,
            "for" => ForKeyword,
            "function" => FunctionKeyword,
            "if" => IfKeyword,
            "import" => ImportKeyword,
            "in" => InKeyword,
            "instanceof" => InstanceOfKeyword,
            "new" => NewKeyword,
            "null" => NullKeyword,
            "return" => ReturnKeyword,
            "super" => SuperKeyword,
            "switch" => SwitchKeyword,
            "this" => ThisKeyword,
            "throw" => ThrowKeyword,
            "true" => TrueKeyword,
            "try" => TryKeyword,
            "typeof" => TypeOfKeyword,
            "var" => VarKeyword,
            "void" => VoidKeyword,
            "while" => WhileKeyword,
            "with" => WithKeyword,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_keyword(self) -> bool {
        self >= SyntaxKind::BreakKeyword
    }

    /// Identifiers and reserved words are both valid property names
    /// (`a.default`, `{ delete: 1 }`).
    pub fn is_identifier_or_keyword(self) -> bool {
        self == SyntaxKind::Identifier || self.is_keyword()
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            SyntaxKind::StringLiteral
                | SyntaxKind::NumericLiteral
                | SyntaxKind::BigIntLiteral
                | SyntaxKind::TemplateLiteral
        )
    }

    /// Fixed source text of punctuation and keywords.
    pub fn text(self) -> &'static str {
        use SyntaxKind::*;
        match self {
            EndOfFileToken => "<end of input>",
            Identifier => "identifier",
            PrivateIdentifier => "private identifier",
            StringLiteral => "string literal",
            NumericLiteral => "numeric literal",
            BigIntLiteral => "bigint literal",
            TemplateLiteral => "template literal",
            OpenBraceToken => "{",
            CloseBraceToken => "}",
            OpenParenToken => "(",
            CloseParenToken => ")",
            OpenBracketToken => "[",
            CloseBracketToken => "]",
            DotToken => ".",
            DotDotDotToken => "...",
            SemicolonToken => ";",
            CommaToken => ",",
            LessThanToken => "<",
            LessThanEqualsToken => "<=",
            LessThanLessThanToken => "<<",
            LessThanLessThanEqualsToken => "<<=",
            GreaterThanToken => ">",
            EqualsToken => "=",
            EqualsEqualsToken => "==",
            EqualsEqualsEqualsToken => "===",
            EqualsGreaterThanToken => "=>",
            ExclamationToken => "!",
            ExclamationEqualsToken => "!=",
            ExclamationEqualsEqualsToken => "!==",
            PlusToken => "+",
            PlusPlusToken => "++",
            PlusEqualsToken => "+=",
            MinusToken => "-",
            MinusMinusToken => "--",
            MinusEqualsToken => "-=",
            AsteriskToken => "*",
            AsteriskEqualsToken => "*=",
            AsteriskAsteriskToken => "**",
            AsteriskAsteriskEqualsToken => "**=",
            SlashToken => "/",
            SlashEqualsToken => "/=",
            PercentToken => "%",
            PercentEqualsToken => "%=",
            AmpersandToken => "&",
            AmpersandEqualsToken => "&=",
            AmpersandAmpersandToken => "&&",
            AmpersandAmpersandEqualsToken => "&&=",
            BarToken => "|",
            BarEqualsToken => "|=",
            BarBarToken => "||",
            BarBarEqualsToken => "||=",
            CaretToken => "^",
            CaretEqualsToken => "^=",
            TildeToken => "~",
            QuestionToken => "?",
            QuestionDotToken => "?.",
            QuestionQuestionToken => "??",
            QuestionQuestionEqualsToken => "??=",
            ColonToken => ":",
            AtToken => "@",
            BreakKeyword => "break",
            CaseKeyword => "case",
            CatchKeyword => "catch",
            ClassKeyword => "class",
            ConstKeyword => "const",
            ContinueKeyword => "continue",
            DebuggerKeyword => "debugger",
            DefaultKeyword => "default",
            DeleteKeyword => "delete",
            DoKeyword => "do",
            ElseKeyword => "else",
            EnumKeyword => "enum",
            ExportKeyword => "export",
            ExtendsKeyword => "extends",
            FalseKeyword => "false",
            FinallyKeyword => "finally",
            ForKeyword => "for",
            FunctionKeyword => "function",
            IfKeyword => "if",
            ImportKeyword => "import",
            InKeyword => "in",
            InstanceOfKeyword => "instanceof",
            NewKeyword => "new",
            NullKeyword => "null",
            ReturnKeyword => "return",
            SuperKeyword => "super",
            SwitchKeyword => "switch",
            ThisKeyword => "this",
            ThrowKeyword => "throw",
            TrueKeyword => "true",
            TryKeyword => "try",
            TypeOfKeyword => "typeof",
            VarKeyword => "var",
            VoidKeyword => "void",
            WhileKeyword => "while",
            WithKeyword => "with",
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
