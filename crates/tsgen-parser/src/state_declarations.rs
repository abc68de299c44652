//! Parser state - declarations and class members

use crate::state::{ParseResult, ParserState};
use tsgen_ast::decl::{EnumMember, ImportSpecifier};
use tsgen_ast::factory;
use tsgen_ast::{
    AccessorKind, ClassMember, Decl, Modifiers, ModuleKeyword, ModuleName, PropertyName, Stmt,
    TsType,
};
use tsgen_scanner::SyntaxKind;

/// Contextual keywords that modify a top-level declaration.
const DECLARATION_MODIFIERS: &[&str] = &["declare", "abstract", "async"];

/// Contextual keywords that modify a class member.
const MEMBER_MODIFIERS: &[&str] = &[
    "public",
    "private",
    "protected",
    "static",
    "abstract",
    "readonly",
    "async",
    "declare",
    "override",
];

impl ParserState {
    // =========================================================================
    // Declaration dispatch
    // =========================================================================

    /// Parse a declaration: function, class, interface, enum, namespace, type
    /// alias, import, or a variable statement with modifiers. Returned as a
    /// statement, since exported variables are variable statements.
    pub fn parse_declaration(&mut self) -> ParseResult<Stmt> {
        if !self.is_start_of_declaration() {
            return Err(self.error("expected a declaration"));
        }
        self.parse_list_element(false, |p| p.nested(|p| p.parse_declaration_worker()))
    }

    /// Look past `export` / `declare` / `abstract` / `async` for a declaration
    /// keyword.
    pub(crate) fn is_start_of_declaration(&self) -> bool {
        let mut n = 0;
        loop {
            let token = self.peek(n);
            match token.kind {
                SyntaxKind::ExportKeyword => return true,
                SyntaxKind::Identifier
                    if DECLARATION_MODIFIERS.contains(&token.text.as_str())
                        && !self.peek(n + 1).has_preceding_line_break =>
                {
                    n += 1;
                }
                _ => break,
            }
        }
        self.is_declaration_keyword_at(n)
    }

    fn is_declaration_keyword_at(&self, n: usize) -> bool {
        let token = self.peek(n);
        let next = self.peek(n + 1);
        let name_follows = next.kind == SyntaxKind::Identifier && !next.has_preceding_line_break;
        match token.kind {
            SyntaxKind::FunctionKeyword | SyntaxKind::ClassKeyword | SyntaxKind::EnumKeyword => true,
            SyntaxKind::ImportKeyword => {
                !matches!(next.kind, SyntaxKind::OpenParenToken | SyntaxKind::DotToken)
            }
            SyntaxKind::ConstKeyword => n > 0 || next.kind == SyntaxKind::EnumKeyword,
            SyntaxKind::VarKeyword => n > 0,
            SyntaxKind::Identifier => match token.text.as_str() {
                "interface" | "type" | "namespace" => name_follows,
                "module" => {
                    (name_follows || next.kind == SyntaxKind::StringLiteral)
                        && !next.has_preceding_line_break
                }
                "let" => n > 0,
                _ => false,
            },
            _ => false,
        }
    }

    pub(crate) fn parse_declaration_worker(&mut self) -> ParseResult<Stmt> {
        let modifiers = self.parse_declaration_modifiers()?;
        let is_class = self.is_token(SyntaxKind::ClassKeyword);
        let is_function = self.is_token(SyntaxKind::FunctionKeyword);
        if modifiers.contains(Modifiers::ABSTRACT) && !is_class {
            return Err(self.error("`abstract` can only modify a class declaration"));
        }
        if modifiers.contains(Modifiers::ASYNC) && !is_function {
            return Err(self.error("`async` can only modify a function declaration"));
        }

        let decl = match self.token().kind {
            SyntaxKind::FunctionKeyword => self.parse_function_declaration(modifiers)?,
            SyntaxKind::ClassKeyword => self.parse_class_declaration(modifiers)?,
            SyntaxKind::EnumKeyword => self.parse_enum_declaration(modifiers)?,
            SyntaxKind::ConstKeyword if self.peek(1).kind == SyntaxKind::EnumKeyword => {
                self.next_token();
                self.parse_enum_declaration(modifiers | Modifiers::CONST)?
            }
            SyntaxKind::VarKeyword | SyntaxKind::ConstKeyword => {
                return self.parse_variable_statement(modifiers);
            }
            SyntaxKind::ImportKeyword => {
                if !modifiers.is_empty() {
                    return Err(self.error("an import declaration cannot have modifiers"));
                }
                self.parse_import_declaration()?
            }
            SyntaxKind::Identifier => match self.token().text.as_str() {
                "let" if self.is_let_declaration() => {
                    return self.parse_variable_statement(modifiers);
                }
                "interface" => self.parse_interface_declaration(modifiers)?,
                "type" => self.parse_type_alias_declaration(modifiers)?,
                "namespace" | "module" => self.parse_module_declaration(modifiers)?,
                _ => return Err(self.error("expected a declaration")),
            },
            _ => return Err(self.error("expected a declaration")),
        };
        Ok(Stmt::from(decl))
    }

    fn parse_declaration_modifiers(&mut self) -> ParseResult<Modifiers> {
        let mut modifiers = Modifiers::empty();
        loop {
            let flag = match self.token().kind {
                SyntaxKind::ExportKeyword => {
                    self.check_export_form()?;
                    Modifiers::EXPORT
                }
                SyntaxKind::Identifier
                    if DECLARATION_MODIFIERS.contains(&self.token().text.as_str())
                        && self.peek(1).kind.is_identifier_or_keyword()
                        && !self.peek(1).has_preceding_line_break =>
                {
                    match Modifiers::from_keyword(&self.token().text) {
                        Some(flag) => flag,
                        None => return Ok(modifiers),
                    }
                }
                _ => return Ok(modifiers),
            };
            if modifiers.contains(flag) {
                return Err(self.error("duplicate modifier"));
            }
            self.next_token();
            modifiers |= flag;
        }
    }

    /// Only `export <declaration>` is modelled.
    fn check_export_form(&self) -> ParseResult<()> {
        let next = self.peek(1);
        match next.kind {
            SyntaxKind::DefaultKeyword => Err(self.unsupported("`export default` is not supported")),
            SyntaxKind::OpenBraceToken | SyntaxKind::AsteriskToken => {
                Err(self.unsupported("export lists and re-exports are not supported"))
            }
            SyntaxKind::EqualsToken => {
                Err(self.unsupported("export assignments are not supported"))
            }
            SyntaxKind::ImportKeyword => Err(self.unsupported("import aliases are not supported")),
            SyntaxKind::Identifier if next.text == "as" => {
                Err(self.unsupported("`export as namespace` is not supported"))
            }
            _ => Ok(()),
        }
    }

    // =========================================================================
    // Functions, type aliases, interfaces
    // =========================================================================

    fn parse_function_declaration(&mut self, modifiers: Modifiers) -> ParseResult<Decl> {
        self.parse_expected(SyntaxKind::FunctionKeyword)?;
        if self.is_token(SyntaxKind::AsteriskToken) {
            return Err(self.unsupported("generators are not supported"));
        }
        let name = self.parse_identifier("a function name")?;
        let type_params = self.parse_optional_type_parameters()?;
        let params = self.parse_parameter_list()?;
        let return_type = self.parse_type_annotation()?;
        let body = self.parse_optional_function_body()?;
        self.build(factory::function_decl(
            name,
            type_params,
            params,
            return_type,
            body,
            modifiers,
        ))
    }

    /// A body, or `;` for overload signatures and ambient declarations.
    fn parse_optional_function_body(&mut self) -> ParseResult<Option<tsgen_ast::Block>> {
        if self.is_token(SyntaxKind::OpenBraceToken) {
            Ok(Some(self.parse_function_body()?))
        } else {
            self.parse_semicolon()?;
            Ok(None)
        }
    }

    fn parse_type_alias_declaration(&mut self, modifiers: Modifiers) -> ParseResult<Decl> {
        self.parse_expected_contextual("type")?;
        let name = self.parse_identifier("a type alias name")?;
        let type_params = self.parse_optional_type_parameters()?;
        self.parse_expected(SyntaxKind::EqualsToken)?;
        let ty = self.parse_type()?;
        self.parse_semicolon()?;
        self.build(factory::type_alias_decl(name, type_params, ty, modifiers))
    }

    fn parse_interface_declaration(&mut self, modifiers: Modifiers) -> ParseResult<Decl> {
        self.parse_expected_contextual("interface")?;
        let name = self.parse_identifier("an interface name")?;
        let type_params = self.parse_optional_type_parameters()?;
        let extends = if self.parse_optional(SyntaxKind::ExtendsKeyword) {
            self.parse_heritage_types()?
        } else {
            Vec::new()
        };
        let members = self.parse_type_member_block()?;
        self.build(factory::interface_decl(
            name,
            type_params,
            extends,
            members,
            modifiers,
        ))
    }

    /// `A, B.C<T>` after `extends` or `implements`.
    fn parse_heritage_types(&mut self) -> ParseResult<Vec<TsType>> {
        let mut types = vec![self.parse_type()?];
        while self.parse_optional(SyntaxKind::CommaToken) {
            types.push(self.parse_type()?);
        }
        Ok(types)
    }

    // =========================================================================
    // Enums and namespaces
    // =========================================================================

    fn parse_enum_declaration(&mut self, modifiers: Modifiers) -> ParseResult<Decl> {
        self.parse_expected(SyntaxKind::EnumKeyword)?;
        let name = self.parse_identifier("an enum name")?;
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut members = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken) && !self.is_at_end() {
            let first = members.is_empty();
            members.push(self.parse_list_element(first, |p| {
                let member = p.parse_enum_member()?;
                if !p.is_token(SyntaxKind::CloseBraceToken) {
                    p.parse_expected(SyntaxKind::CommaToken)?;
                }
                Ok(member)
            })?);
        }
        self.claim_dangling_into(&mut members);
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        self.build(factory::enum_decl(name, members, modifiers))
    }

    fn parse_enum_member(&mut self) -> ParseResult<EnumMember> {
        let name = match self.parse_property_name()? {
            PropertyName::Computed(_) => {
                return Err(self.error("an enum member cannot have a computed name"));
            }
            name => name,
        };
        let init = if self.parse_optional(SyntaxKind::EqualsToken) {
            Some(self.with_in_allowed(true, |p| p.parse_assignment_expression())?)
        } else {
            None
        };
        Ok(factory::enum_member(name, init))
    }

    /// `namespace a.b { ... }` or `declare module "m" { ... }`.
    fn parse_module_declaration(&mut self, modifiers: Modifiers) -> ParseResult<Decl> {
        let keyword = if self.parse_optional_contextual("namespace") {
            ModuleKeyword::Namespace
        } else {
            self.parse_expected_contextual("module")?;
            ModuleKeyword::Module
        };
        let name = if keyword == ModuleKeyword::Module && self.is_token(SyntaxKind::StringLiteral) {
            let token = self.next_token();
            if !self.is_token(SyntaxKind::OpenBraceToken) {
                return Err(
                    self.unsupported("ambient module declarations without a body are not supported")
                );
            }
            ModuleName::String(token.value.unwrap_or_default())
        } else {
            ModuleName::Identifier(self.parse_entity_name()?)
        };

        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut body = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken) && !self.is_at_end() {
            let first = body.is_empty();
            body.push(self.parse_statement_in_list(first)?);
        }
        self.claim_dangling_into(&mut body);
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        self.build(factory::module_decl(keyword, name, body, modifiers))
    }

    // =========================================================================
    // Imports
    // =========================================================================

    /// `import "m"`, `import d from "m"`, `import * as ns from "m"`,
    /// `import d, { a, b as c } from "m"`.
    fn parse_import_declaration(&mut self) -> ParseResult<Decl> {
        self.parse_expected(SyntaxKind::ImportKeyword)?;

        if self.is_token(SyntaxKind::StringLiteral) {
            let module = self.parse_module_specifier()?;
            self.parse_semicolon()?;
            return self.build(factory::import_decl(None, None, Vec::new(), module));
        }
        if self.is_contextual("type")
            && (matches!(
                self.peek(1).kind,
                SyntaxKind::OpenBraceToken | SyntaxKind::AsteriskToken
            ) || (self.peek(1).kind == SyntaxKind::Identifier
                && !self.peek(1).is_contextual("from")))
        {
            return Err(self.unsupported("type-only imports are not supported"));
        }

        let mut default = None;
        let mut namespace = None;
        let mut named = Vec::new();

        if self.is_token(SyntaxKind::Identifier) {
            if self.peek(1).kind == SyntaxKind::EqualsToken {
                return Err(self.unsupported("import aliases are not supported"));
            }
            default = Some(self.next_token().text);
        }
        if default.is_none() || self.parse_optional(SyntaxKind::CommaToken) {
            if self.parse_optional(SyntaxKind::AsteriskToken) {
                self.parse_expected_contextual("as")?;
                namespace = Some(self.parse_identifier("a namespace import name")?);
            } else if self.is_token(SyntaxKind::OpenBraceToken) {
                named = self.parse_import_specifiers()?;
            } else {
                return Err(self.error("expected `*` or `{` in an import declaration"));
            }
        }

        self.parse_expected_contextual("from")?;
        let module = self.parse_module_specifier()?;
        if (self.is_token(SyntaxKind::WithKeyword) || self.is_contextual("assert"))
            && !self.has_line_break_before_token()
        {
            return Err(self.unsupported("import attributes are not supported"));
        }
        self.parse_semicolon()?;
        self.build(factory::import_decl(default, namespace, named, module))
    }

    fn parse_import_specifiers(&mut self) -> ParseResult<Vec<ImportSpecifier>> {
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut specifiers = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken) {
            if self.is_contextual("type") && self.peek(1).kind.is_identifier_or_keyword() {
                return Err(self.unsupported("type-only import specifiers are not supported"));
            }
            let name = self.parse_identifier_name("an imported name")?;
            let alias = if self.parse_optional_contextual("as") {
                Some(self.parse_identifier("a local name")?)
            } else {
                None
            };
            specifiers.push(self.build(factory::import_specifier(name, alias))?);
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(specifiers)
    }

    fn parse_module_specifier(&mut self) -> ParseResult<String> {
        if self.is_token(SyntaxKind::StringLiteral) {
            Ok(self.next_token().value.unwrap_or_default())
        } else {
            Err(self.error("expected a module specifier string"))
        }
    }

    // =========================================================================
    // Classes
    // =========================================================================

    fn parse_class_declaration(&mut self, modifiers: Modifiers) -> ParseResult<Decl> {
        self.parse_expected(SyntaxKind::ClassKeyword)?;
        let name = self.parse_identifier("a class name")?;
        let type_params = self.parse_optional_type_parameters()?;
        let extends = if self.parse_optional(SyntaxKind::ExtendsKeyword) {
            Some(self.parse_type()?)
        } else {
            None
        };
        let implements = if self.parse_optional_contextual("implements") {
            self.parse_heritage_types()?
        } else {
            Vec::new()
        };

        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut members = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken) && !self.is_at_end() {
            // Stray semicolons are class elements without content.
            if self.parse_optional(SyntaxKind::SemicolonToken) {
                continue;
            }
            let first = members.is_empty();
            members.push(self.parse_list_element(first, |p| {
                p.nested(|p| p.parse_class_member())
            })?);
        }
        self.claim_dangling_into(&mut members);
        self.parse_expected(SyntaxKind::CloseBraceToken)?;

        self.build(factory::class_decl(
            name,
            type_params,
            extends,
            implements,
            members,
            modifiers,
        ))
    }

    fn parse_class_member(&mut self) -> ParseResult<ClassMember> {
        if self.is_token(SyntaxKind::AtToken) {
            return Err(self.unsupported("decorators are not supported"));
        }
        if self.is_contextual("static") && self.peek(1).kind == SyntaxKind::OpenBraceToken {
            return Err(self.unsupported("static blocks are not supported"));
        }
        let modifiers = self.parse_member_modifiers()?;

        if self.is_contextual("constructor") && self.peek(1).kind == SyntaxKind::OpenParenToken {
            self.next_token();
            let params = self.parse_parameter_list()?;
            let body = self.parse_optional_function_body()?;
            return Ok(factory::constructor_member(params, body, modifiers));
        }

        if (self.is_contextual("get") || self.is_contextual("set"))
            && self.is_property_name_start(1)
            && !self.peek(1).has_preceding_line_break
        {
            let kind = if self.next_token().text == "get" {
                AccessorKind::Get
            } else {
                AccessorKind::Set
            };
            let name = self.parse_property_name()?;
            let params = self.parse_parameter_list()?;
            let return_type = self.parse_type_annotation()?;
            let body = self.parse_optional_function_body()?;
            return Ok(factory::accessor_member(
                kind,
                name,
                params,
                return_type,
                body,
                modifiers,
            ));
        }

        if self.is_index_signature_start() {
            let index = self.parse_index_signature(modifiers)?;
            self.parse_semicolon()?;
            return Ok(ClassMember::Index(index));
        }

        if self.is_token(SyntaxKind::AsteriskToken) {
            return Err(self.unsupported("generator methods are not supported"));
        }

        let name = self.parse_property_name()?;
        let optional = self.parse_optional(SyntaxKind::QuestionToken);
        if self.is_token(SyntaxKind::ExclamationToken) {
            return Err(self.unsupported("definite assignment assertions are not supported"));
        }

        if matches!(
            self.token().kind,
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken
        ) {
            let type_params = self.parse_optional_type_parameters()?;
            let params = self.parse_parameter_list()?;
            let return_type = self.parse_type_annotation()?;
            let body = self.parse_optional_function_body()?;
            return Ok(factory::method_member(
                name,
                optional,
                type_params,
                params,
                return_type,
                body,
                modifiers,
            ));
        }

        let ty = self.parse_type_annotation()?;
        let init = if self.parse_optional(SyntaxKind::EqualsToken) {
            Some(self.in_function_body(|p| p.parse_assignment_expression())?)
        } else {
            None
        };
        self.parse_semicolon()?;
        Ok(factory::property_member(name, optional, ty, init, modifiers))
    }

    fn parse_member_modifiers(&mut self) -> ParseResult<Modifiers> {
        let mut modifiers = Modifiers::empty();
        loop {
            let token = self.token();
            let is_modifier = token.kind == SyntaxKind::Identifier
                && MEMBER_MODIFIERS.contains(&token.text.as_str())
                && (self.is_property_name_start(1) || self.peek(1).kind == SyntaxKind::AsteriskToken);
            if !is_modifier {
                return Ok(modifiers);
            }
            if token.text == "async" && self.peek(1).has_preceding_line_break {
                return Ok(modifiers);
            }
            let Some(flag) = Modifiers::from_keyword(&token.text) else {
                return Err(self.unsupported(format!(
                    "the `{}` modifier is not supported",
                    token.text
                )));
            };
            if modifiers.contains(flag) {
                return Err(self.error("duplicate modifier"));
            }
            self.next_token();
            modifiers |= flag;
        }
    }
}
