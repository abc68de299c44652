//! Parser state - types, type members, parameters and type parameters

use crate::state::{ParseResult, ParserState};
use tsgen_ast::factory;
use tsgen_ast::{
    LiteralValue, Modifiers, Parameter, ParameterKind, ParameterList, PropertyName, TsType,
    TypeKeyword, TypeMember, TypeParameter,
};
use tsgen_scanner::SyntaxKind;

impl ParserState {
    // =========================================================================
    // Types
    // =========================================================================

    /// Parse a type: a function or constructor type, or a union of
    /// intersections of array/primary types.
    pub fn parse_type(&mut self) -> ParseResult<TsType> {
        self.nested(|p| p.parse_type_worker())
    }

    fn parse_type_worker(&mut self) -> ParseResult<TsType> {
        if self.is_token(SyntaxKind::NewKeyword) {
            return self.parse_constructor_type();
        }
        if self.is_token(SyntaxKind::LessThanToken) {
            return self.parse_function_type();
        }
        if self.is_token(SyntaxKind::OpenParenToken)
            && let Some(ty) = self.try_parse(|p| p.parse_function_type())
        {
            return Ok(ty);
        }
        let ty = self.parse_union_type()?;
        if self.is_token(SyntaxKind::ExtendsKeyword) && !self.has_line_break_before_token() {
            return Err(self.unsupported("conditional types are not supported"));
        }
        Ok(ty)
    }

    fn parse_function_type(&mut self) -> ParseResult<TsType> {
        let type_params = self.parse_optional_type_parameters()?;
        let params = self.parse_parameter_list()?;
        self.parse_expected(SyntaxKind::EqualsGreaterThanToken)?;
        let return_type = self.parse_type()?;
        Ok(factory::function_type(type_params, params, return_type))
    }

    fn parse_constructor_type(&mut self) -> ParseResult<TsType> {
        self.parse_expected(SyntaxKind::NewKeyword)?;
        let type_params = self.parse_optional_type_parameters()?;
        let params = self.parse_parameter_list()?;
        self.parse_expected(SyntaxKind::EqualsGreaterThanToken)?;
        let return_type = self.parse_type()?;
        Ok(factory::constructor_type(type_params, params, return_type))
    }

    /// `A | B | C`, with an optional leading `|`.
    fn parse_union_type(&mut self) -> ParseResult<TsType> {
        self.parse_optional(SyntaxKind::BarToken);
        let mut types = vec![self.parse_intersection_type()?];
        while self.parse_optional(SyntaxKind::BarToken) {
            types.push(self.parse_intersection_type()?);
        }
        if types.len() == 1 {
            return Ok(types.remove(0));
        }
        self.build(factory::union_type(types))
    }

    /// `A & B & C`, with an optional leading `&`.
    fn parse_intersection_type(&mut self) -> ParseResult<TsType> {
        self.parse_optional(SyntaxKind::AmpersandToken);
        let mut types = vec![self.parse_array_type()?];
        while self.parse_optional(SyntaxKind::AmpersandToken) {
            types.push(self.parse_array_type()?);
        }
        if types.len() == 1 {
            return Ok(types.remove(0));
        }
        self.build(factory::intersection_type(types))
    }

    fn parse_array_type(&mut self) -> ParseResult<TsType> {
        let mut ty = self.parse_primary_type()?;
        while self.is_token(SyntaxKind::OpenBracketToken) && !self.has_line_break_before_token() {
            if self.peek(1).kind != SyntaxKind::CloseBracketToken {
                return Err(self.unsupported("indexed access types are not supported"));
            }
            self.skip_tokens(2);
            ty = factory::array_type(ty);
        }
        Ok(ty)
    }

    fn parse_primary_type(&mut self) -> ParseResult<TsType> {
        match self.token().kind {
            SyntaxKind::Identifier => self.parse_type_reference_or_keyword(),
            SyntaxKind::VoidKeyword => {
                self.next_token();
                Ok(TsType::VOID)
            }
            SyntaxKind::NullKeyword => {
                self.next_token();
                Ok(factory::literal_type(LiteralValue::Null))
            }
            SyntaxKind::ThisKeyword => {
                self.next_token();
                if self.is_contextual("is") && !self.has_line_break_before_token() {
                    return Err(self.unsupported("type predicates are not supported"));
                }
                Ok(TsType::THIS)
            }
            SyntaxKind::TypeOfKeyword => {
                self.next_token();
                if self.is_token(SyntaxKind::ImportKeyword) {
                    return Err(self.unsupported("`typeof import` types are not supported"));
                }
                let name = self.parse_entity_name()?;
                self.build(factory::type_query(name))
            }
            SyntaxKind::OpenBraceToken => {
                if self.is_start_of_mapped_type() {
                    return Err(self.unsupported("mapped types are not supported"));
                }
                let members = self.parse_type_member_block()?;
                Ok(factory::object_type(members))
            }
            SyntaxKind::OpenBracketToken => self.parse_tuple_type(),
            SyntaxKind::OpenParenToken => {
                self.next_token();
                let ty = self.parse_type()?;
                self.parse_expected(SyntaxKind::CloseParenToken)?;
                Ok(factory::paren_type(ty))
            }
            SyntaxKind::StringLiteral => {
                let token = self.next_token();
                let value = token.value.unwrap_or_default();
                Ok(factory::literal_type(LiteralValue::String(value)))
            }
            SyntaxKind::NumericLiteral => {
                let token = self.next_token();
                Ok(factory::literal_type(LiteralValue::Number(token.text)))
            }
            SyntaxKind::MinusToken if self.peek(1).kind == SyntaxKind::NumericLiteral => {
                self.next_token();
                let token = self.next_token();
                Ok(factory::literal_type(LiteralValue::Number(format!(
                    "-{}",
                    token.text
                ))))
            }
            SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword => {
                let token = self.next_token();
                Ok(factory::literal_type(LiteralValue::Boolean(
                    token.kind == SyntaxKind::TrueKeyword,
                )))
            }
            SyntaxKind::BigIntLiteral => {
                Err(self.unsupported("bigint literal types are not supported"))
            }
            SyntaxKind::TemplateLiteral => {
                Err(self.unsupported("template literal types are not supported"))
            }
            _ => Err(self.error("expected a type")),
        }
    }

    fn parse_type_reference_or_keyword(&mut self) -> ParseResult<TsType> {
        let text = self.token().text.clone();
        let next = self.peek(1);
        let operand_follows = !next.has_preceding_line_break
            && (next.kind == SyntaxKind::Identifier
                || matches!(
                    next.kind,
                    SyntaxKind::OpenParenToken
                        | SyntaxKind::OpenBraceToken
                        | SyntaxKind::OpenBracketToken
                        | SyntaxKind::TypeOfKeyword
                ));
        match text.as_str() {
            "keyof" | "infer" | "unique" | "asserts" if operand_follows => {
                return Err(self.unsupported(format!("`{text}` types are not supported")));
            }
            _ => {}
        }
        if self.peek(1).kind != SyntaxKind::DotToken
            && let Some(keyword) = TypeKeyword::from_text(&text)
        {
            self.next_token();
            return Ok(factory::keyword_type(keyword));
        }

        let name = self.parse_entity_name()?;
        if self.is_contextual("is") && !self.has_line_break_before_token() {
            return Err(self.unsupported("type predicates are not supported"));
        }
        let type_args = if self.is_token(SyntaxKind::LessThanToken) {
            self.parse_type_arguments()?
        } else {
            Vec::new()
        };
        self.build(factory::type_reference(name, type_args))
    }

    /// `a.b.c`
    pub(crate) fn parse_entity_name(&mut self) -> ParseResult<tsgen_ast::EntityName> {
        let mut parts = vec![self.parse_identifier("a type name")?];
        while self.is_token(SyntaxKind::DotToken) {
            self.next_token();
            parts.push(self.parse_identifier_name("a name after `.`")?);
        }
        self.build(factory::entity_name(parts))
    }

    fn parse_tuple_type(&mut self) -> ParseResult<TsType> {
        self.parse_expected(SyntaxKind::OpenBracketToken)?;
        if self.is_token(SyntaxKind::CloseBracketToken) {
            return Err(self.unsupported("empty tuple types are not supported"));
        }
        let mut elements = Vec::new();
        while !self.is_token(SyntaxKind::CloseBracketToken) {
            if self.is_token(SyntaxKind::DotDotDotToken) {
                return Err(self.unsupported("rest elements in tuple types are not supported"));
            }
            if self.token().kind.is_identifier_or_keyword()
                && matches!(
                    self.peek(1).kind,
                    SyntaxKind::ColonToken | SyntaxKind::QuestionToken
                )
            {
                return Err(self.unsupported("named tuple elements are not supported"));
            }
            elements.push(self.parse_type()?);
            if self.is_token(SyntaxKind::QuestionToken) {
                return Err(self.unsupported("optional tuple elements are not supported"));
            }
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseBracketToken)?;
        self.build(factory::tuple_type(elements))
    }

    /// `{ [K in T]: U }` or `{ readonly [K in T]: U }`.
    fn is_start_of_mapped_type(&self) -> bool {
        let mut n = 1;
        if self.peek(n).is_contextual("readonly")
            || matches!(self.peek(n).kind, SyntaxKind::PlusToken | SyntaxKind::MinusToken)
        {
            n += 1;
            if self.peek(n).is_contextual("readonly") {
                n += 1;
            }
        }
        self.peek(n).kind == SyntaxKind::OpenBracketToken
            && self.peek(n + 1).kind == SyntaxKind::Identifier
            && self.peek(n + 2).kind == SyntaxKind::InKeyword
    }

    /// `: T` when present.
    pub(crate) fn parse_type_annotation(&mut self) -> ParseResult<Option<TsType>> {
        if self.parse_optional(SyntaxKind::ColonToken) {
            Ok(Some(self.parse_type()?))
        } else {
            Ok(None)
        }
    }

    // =========================================================================
    // Type arguments and type parameters
    // =========================================================================

    /// `<A, B>`
    pub fn parse_type_arguments(&mut self) -> ParseResult<Vec<TsType>> {
        self.parse_expected(SyntaxKind::LessThanToken)?;
        let mut args = vec![self.parse_type()?];
        while self.parse_optional(SyntaxKind::CommaToken) {
            args.push(self.parse_type()?);
        }
        self.parse_expected(SyntaxKind::GreaterThanToken)?;
        Ok(args)
    }

    /// `<T extends C = D, U>`
    pub fn parse_type_parameters(&mut self) -> ParseResult<Vec<TypeParameter>> {
        self.parse_expected(SyntaxKind::LessThanToken)?;
        let mut params = Vec::new();
        loop {
            params.push(self.parse_type_parameter()?);
            if !self.parse_optional(SyntaxKind::CommaToken)
                || self.is_token(SyntaxKind::GreaterThanToken)
            {
                break;
            }
        }
        self.parse_expected(SyntaxKind::GreaterThanToken)?;
        Ok(params)
    }

    pub(crate) fn parse_optional_type_parameters(&mut self) -> ParseResult<Vec<TypeParameter>> {
        if self.is_token(SyntaxKind::LessThanToken) {
            self.parse_type_parameters()
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_type_parameter(&mut self) -> ParseResult<TypeParameter> {
        if (self.is_contextual("const")
            || self.is_token(SyntaxKind::ConstKeyword)
            || self.is_token(SyntaxKind::InKeyword)
            || self.is_contextual("out"))
            && self.peek(1).kind == SyntaxKind::Identifier
        {
            return Err(self.unsupported("type parameter modifiers are not supported"));
        }
        let name = self.parse_identifier("a type parameter name")?;
        let constraint = if self.parse_optional(SyntaxKind::ExtendsKeyword) {
            Some(self.parse_type()?)
        } else {
            None
        };
        let default = if self.parse_optional(SyntaxKind::EqualsToken) {
            Some(self.parse_type()?)
        } else {
            None
        };
        self.build(factory::type_parameter(name, constraint, default))
    }

    // =========================================================================
    // Parameters
    // =========================================================================

    /// `(a: A, b?: B, c = 1, ...rest: R[])`. The returned list is partitioned
    /// into required, optional and rest parameters.
    pub fn parse_parameter_list(&mut self) -> ParseResult<ParameterList> {
        self.parse_expected(SyntaxKind::OpenParenToken)?;
        let mut params = Vec::new();
        while !self.is_token(SyntaxKind::CloseParenToken) {
            let param = self.parse_parameter()?;
            let is_rest = param.kind == ParameterKind::Rest;
            params.push(param);
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
            if is_rest && !self.is_token(SyntaxKind::CloseParenToken) {
                return Err(self.error("a rest parameter must be last in a parameter list"));
            }
        }
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        self.build(factory::parameter_list(params))
    }

    fn parse_parameter(&mut self) -> ParseResult<Parameter> {
        if self.is_token(SyntaxKind::AtToken) {
            return Err(self.unsupported("decorators are not supported"));
        }
        let modifiers = self.parse_parameter_modifiers();
        let rest = self.parse_optional(SyntaxKind::DotDotDotToken);

        let name = match self.token().kind {
            SyntaxKind::Identifier => self.next_token().text,
            SyntaxKind::ThisKeyword if !rest => self.next_token().text,
            SyntaxKind::OpenBraceToken | SyntaxKind::OpenBracketToken => {
                return Err(self.unsupported("destructuring parameters are not supported"));
            }
            _ => return Err(self.error("expected a parameter name")),
        };

        let optional = self.parse_optional(SyntaxKind::QuestionToken);
        if rest && optional {
            return Err(self.error("a rest parameter cannot be optional"));
        }
        let ty = self.parse_type_annotation()?;
        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            if rest {
                return Err(self.error("a rest parameter cannot have an initializer"));
            }
            Some(self.with_in_allowed(true, |p| p.parse_assignment_expression())?)
        } else {
            None
        };

        let kind = match (rest, optional) {
            (true, _) => ParameterKind::Rest,
            (false, true) => ParameterKind::Optional,
            (false, false) => ParameterKind::Required,
        };
        let param = self.build(factory::parameter(kind, name, ty))?;
        Ok(param.with_initializer(initializer).with_modifiers(modifiers))
    }

    /// Accessibility and `readonly` on constructor parameter properties.
    fn parse_parameter_modifiers(&mut self) -> Modifiers {
        let mut modifiers = Modifiers::empty();
        loop {
            let token = self.token();
            let flag = match token.text.as_str() {
                "public" | "private" | "protected" | "readonly"
                    if token.kind == SyntaxKind::Identifier =>
                {
                    Modifiers::from_keyword(&token.text)
                }
                _ => None,
            };
            let next = self.peek(1).kind;
            let applies = matches!(
                next,
                SyntaxKind::Identifier
                    | SyntaxKind::ThisKeyword
                    | SyntaxKind::OpenBraceToken
                    | SyntaxKind::OpenBracketToken
                    | SyntaxKind::DotDotDotToken
            );
            match flag {
                Some(flag) if applies => {
                    self.next_token();
                    modifiers |= flag;
                }
                _ => return modifiers,
            }
        }
    }

    // =========================================================================
    // Type members
    // =========================================================================

    /// `{ member; member }` as in object types and interface bodies.
    pub(crate) fn parse_type_member_block(&mut self) -> ParseResult<Vec<TypeMember>> {
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut members = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken) && !self.is_at_end() {
            let first = members.is_empty();
            members.push(self.parse_list_element(first, |p| p.parse_type_member_worker())?);
        }
        // Comments in an empty body have no node to live on.
        let _ = self.claim_dangling_into(&mut members);
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(members)
    }

    /// Parse one member of an object type or interface body, including its
    /// `;` or `,` separator.
    pub fn parse_type_member(&mut self) -> ParseResult<TypeMember> {
        self.parse_list_element(false, |p| p.parse_type_member_worker())
    }

    fn parse_type_member_worker(&mut self) -> ParseResult<TypeMember> {
        let member = self.nested(|p| p.parse_type_member_body())?;
        self.parse_type_member_separator()?;
        Ok(member)
    }

    fn parse_type_member_body(&mut self) -> ParseResult<TypeMember> {
        if matches!(
            self.token().kind,
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken
        ) {
            let type_params = self.parse_optional_type_parameters()?;
            let params = self.parse_parameter_list()?;
            let return_type = self.parse_type_annotation()?;
            return Ok(factory::call_signature(type_params, params, return_type));
        }
        if self.is_token(SyntaxKind::NewKeyword)
            && matches!(
                self.peek(1).kind,
                SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken
            )
        {
            self.next_token();
            let type_params = self.parse_optional_type_parameters()?;
            let params = self.parse_parameter_list()?;
            let return_type = self.parse_type_annotation()?;
            return Ok(factory::construct_signature(type_params, params, return_type));
        }
        if (self.is_contextual("get") || self.is_contextual("set"))
            && self.is_property_name_start(1)
        {
            return Err(self.unsupported("accessor signatures are not supported"));
        }

        let mut modifiers = Modifiers::empty();
        if self.is_contextual("readonly") && self.is_property_name_start(1) {
            self.next_token();
            modifiers |= Modifiers::READONLY;
        }

        if self.is_index_signature_start() {
            let index = self.parse_index_signature(modifiers)?;
            return Ok(TypeMember::Index(index));
        }

        let name = self.parse_property_name()?;
        let optional = self.parse_optional(SyntaxKind::QuestionToken);
        if matches!(
            self.token().kind,
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken
        ) {
            let type_params = self.parse_optional_type_parameters()?;
            let params = self.parse_parameter_list()?;
            let return_type = self.parse_type_annotation()?;
            return Ok(factory::method_signature(
                name,
                optional,
                type_params,
                params,
                return_type,
            ));
        }
        let ty = self.parse_type_annotation()?;
        Ok(factory::property_signature(name, optional, ty, modifiers))
    }

    fn parse_type_member_separator(&mut self) -> ParseResult<()> {
        if self.parse_optional(SyntaxKind::SemicolonToken)
            || self.parse_optional(SyntaxKind::CommaToken)
            || self.is_token(SyntaxKind::CloseBraceToken)
            || self.has_line_break_before_token()
        {
            Ok(())
        } else {
            Err(self.error("expected `;` or `,` after a type member"))
        }
    }

    /// `[` ident `:` starts an index signature; any other `[` is a computed
    /// property name.
    pub(crate) fn is_index_signature_start(&self) -> bool {
        self.is_token(SyntaxKind::OpenBracketToken)
            && self.peek(1).kind == SyntaxKind::Identifier
            && self.peek(2).kind == SyntaxKind::ColonToken
    }

    /// `[key: K]: T`
    pub(crate) fn parse_index_signature(
        &mut self,
        modifiers: Modifiers,
    ) -> ParseResult<std::sync::Arc<tsgen_ast::types::IndexSignature>> {
        self.parse_expected(SyntaxKind::OpenBracketToken)?;
        let param_name = self.parse_identifier("an index parameter name")?;
        self.parse_expected(SyntaxKind::ColonToken)?;
        let param_type = self.parse_type()?;
        self.parse_expected(SyntaxKind::CloseBracketToken)?;
        self.parse_expected(SyntaxKind::ColonToken)?;
        let ty = self.parse_type()?;
        self.build(factory::index_signature(param_name, param_type, ty, modifiers))
    }

    // =========================================================================
    // Property names
    // =========================================================================

    /// Whether the token `n` ahead can start a property name.
    pub(crate) fn is_property_name_start(&self, n: usize) -> bool {
        let token = self.peek(n);
        token.kind.is_identifier_or_keyword()
            || matches!(
                token.kind,
                SyntaxKind::StringLiteral
                    | SyntaxKind::NumericLiteral
                    | SyntaxKind::OpenBracketToken
                    | SyntaxKind::PrivateIdentifier
            )
    }

    /// `name`, `"name"`, `1`, `#name` or `[expr]`.
    pub(crate) fn parse_property_name(&mut self) -> ParseResult<PropertyName> {
        let kind = self.token().kind;
        if kind.is_identifier_or_keyword() || kind == SyntaxKind::PrivateIdentifier {
            return Ok(PropertyName::Identifier(self.next_token().text));
        }
        match kind {
            SyntaxKind::StringLiteral => {
                let token = self.next_token();
                Ok(PropertyName::String(token.value.unwrap_or_default()))
            }
            SyntaxKind::NumericLiteral => Ok(PropertyName::Number(self.next_token().text)),
            SyntaxKind::OpenBracketToken => {
                self.next_token();
                let expr = self.with_in_allowed(true, |p| p.parse_assignment_expression())?;
                self.parse_expected(SyntaxKind::CloseBracketToken)?;
                Ok(PropertyName::Computed(expr))
            }
            _ => Err(self.error("expected a property name")),
        }
    }
}
