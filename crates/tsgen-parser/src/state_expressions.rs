//! Parser state - expression parsing methods
//!
//! Layers, loosest first: comma, assignment (and arrow functions),
//! conditional, the binary operator ladder, exponent, unary (and `<T>` casts),
//! postfix, member/call chains and primary expressions. Binary operators of
//! equal precedence associate to the left; `**`, assignment and the
//! conditional operator associate to the right.

use crate::state::{ParseResult, ParserState};
use tsgen_ast::factory;
use tsgen_ast::{
    ArrowBody, BinaryOp, Block, Expr, Modifiers, ObjectProperty, ParameterKind, ParameterList,
    PostfixOp, PropertyName, TsType, TypeParameter, UnaryOp,
};
use tsgen_scanner::SyntaxKind;

/// Binding power of the binary operator layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    /// `||` and `??`
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    /// `<`, `>`, `<=`, `>=`, `instanceof`, `in`, `as`
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Exponent,
}

/// A binary operator found at the cursor.
#[derive(Clone, Copy, Debug)]
enum BinaryOperator {
    Op {
        op: BinaryOp,
        precedence: Precedence,
        width: usize,
    },
    /// `expr as T`
    As,
}

impl BinaryOperator {
    fn precedence(self) -> Precedence {
        match self {
            BinaryOperator::Op { precedence, .. } => precedence,
            BinaryOperator::As => Precedence::Relational,
        }
    }
}

/// Everything of an arrow function before its body.
struct ArrowHead {
    modifiers: Modifiers,
    type_params: Vec<TypeParameter>,
    params: ParameterList,
    return_type: Option<TsType>,
}

/// `-a`, `typeof a`, `await a` or `<T>a`: operands TypeScript rejects on the
/// left of `**`. Prefix `++`/`--` are allowed.
fn is_bare_unary(expr: &Expr) -> bool {
    match expr {
        Expr::Unary(unary) => !matches!(unary.op, UnaryOp::PreIncrement | UnaryOp::PreDecrement),
        Expr::Cast(_) => true,
        _ => false,
    }
}

/// Whether `expr` can appear on the left of an assignment or as the operand
/// of `++` / `--`.
fn is_assignment_target(expr: &Expr) -> bool {
    match expr {
        Expr::Identifier(_) | Expr::Member(_) | Expr::ElementAccess(_) => true,
        Expr::Paren(paren) => is_assignment_target(&paren.expr),
        Expr::NonNull(non_null) => is_assignment_target(&non_null.expr),
        Expr::As(as_expr) => is_assignment_target(&as_expr.expr),
        _ => false,
    }
}

/// Tokens after `await` that make it an operator rather than an identifier.
fn starts_await_operand(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Identifier
            | SyntaxKind::PrivateIdentifier
            | SyntaxKind::StringLiteral
            | SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::OpenParenToken
            | SyntaxKind::OpenBracketToken
            | SyntaxKind::OpenBraceToken
            | SyntaxKind::ExclamationToken
            | SyntaxKind::TildeToken
            | SyntaxKind::PlusPlusToken
            | SyntaxKind::MinusMinusToken
            | SyntaxKind::ThisKeyword
            | SyntaxKind::SuperKeyword
            | SyntaxKind::NewKeyword
            | SyntaxKind::FunctionKeyword
            | SyntaxKind::TypeOfKeyword
            | SyntaxKind::VoidKeyword
            | SyntaxKind::DeleteKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
    )
}

impl ParserState {
    // =========================================================================
    // Comma and assignment
    // =========================================================================

    /// Parse an expression, including the comma operator.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_assignment_expression()?;
        while self.parse_optional(SyntaxKind::CommaToken) {
            let right = self.parse_assignment_expression()?;
            expr = factory::binary(expr, BinaryOp::Comma, right);
        }
        Ok(expr)
    }

    /// Parse an assignment expression: an arrow function, a conditional
    /// expression, or `target op= value`.
    pub fn parse_assignment_expression(&mut self) -> ParseResult<Expr> {
        self.nested(|p| p.parse_assignment_expression_worker())
    }

    fn parse_assignment_expression_worker(&mut self) -> ParseResult<Expr> {
        if let Some(arrow) = self.parse_arrow_function_if_present()? {
            return Ok(arrow);
        }

        let left = self.parse_conditional_expression()?;
        let Some((op, width)) = self.assignment_operator() else {
            return Ok(left);
        };
        match left.unparenthesized() {
            Expr::Object(_) | Expr::Array(_) => {
                return Err(self.unsupported("destructuring assignments are not supported"));
            }
            _ if !is_assignment_target(&left) => {
                return Err(self.error("invalid assignment target"));
            }
            _ => {}
        }
        self.skip_tokens(width);
        let right = self.parse_assignment_expression()?;
        Ok(factory::binary(left, op, right))
    }

    fn assignment_operator(&self) -> Option<(BinaryOp, usize)> {
        if let Some(glued) = self.glued_greater_than() {
            return BinaryOp::from_assignment_text(glued.text).map(|op| (op, glued.width));
        }
        let kind = self.token().kind;
        let op = match kind {
            SyntaxKind::EqualsToken
            | SyntaxKind::PlusEqualsToken
            | SyntaxKind::MinusEqualsToken
            | SyntaxKind::AsteriskEqualsToken
            | SyntaxKind::AsteriskAsteriskEqualsToken
            | SyntaxKind::SlashEqualsToken
            | SyntaxKind::PercentEqualsToken
            | SyntaxKind::LessThanLessThanEqualsToken
            | SyntaxKind::AmpersandEqualsToken
            | SyntaxKind::BarEqualsToken
            | SyntaxKind::CaretEqualsToken
            | SyntaxKind::AmpersandAmpersandEqualsToken
            | SyntaxKind::BarBarEqualsToken
            | SyntaxKind::QuestionQuestionEqualsToken => {
                BinaryOp::from_assignment_text(kind.text())
            }
            _ => None,
        }?;
        Some((op, 1))
    }

    // =========================================================================
    // Arrow functions
    // =========================================================================

    /// Parse an arrow function when one starts at the cursor. Only the head
    /// (`async`, type parameters, parameters, return type and `=>`) is
    /// speculative; the body is parsed for real once `=>` is seen.
    fn parse_arrow_function_if_present(&mut self) -> ParseResult<Option<Expr>> {
        // x => ...
        if self.is_token(SyntaxKind::Identifier)
            && self.peek(1).kind == SyntaxKind::EqualsGreaterThanToken
            && !self.peek(1).has_preceding_line_break
        {
            let name = self.next_token().text;
            self.next_token();
            let params = self.single_parameter(name)?;
            let body = self.parse_arrow_body()?;
            return Ok(Some(factory::arrow_function(
                Vec::new(),
                params,
                None,
                body,
                Modifiers::empty(),
            )));
        }

        let is_async = self.is_contextual("async") && !self.peek(1).has_preceding_line_break;
        let head_offset = usize::from(is_async);
        let might_be_arrow = match self.peek(head_offset).kind {
            SyntaxKind::OpenParenToken => self.is_parenthesized_arrow_head(head_offset),
            SyntaxKind::LessThanToken => true,
            SyntaxKind::Identifier => is_async,
            _ => false,
        };
        if !might_be_arrow {
            return Ok(None);
        }

        let key = (self.tokens.position(), self.disallow_in);
        if self.failed_arrow_heads.contains(&key) {
            return Ok(None);
        }
        let Some(head) = self.try_parse(|p| p.parse_arrow_head()) else {
            self.failed_arrow_heads.insert(key);
            return Ok(None);
        };
        let body = self.parse_arrow_body()?;
        Ok(Some(factory::arrow_function(
            head.type_params,
            head.params,
            head.return_type,
            body,
            head.modifiers,
        )))
    }

    /// Whether the `(` at `offset` closes with a `)` followed by `=>` or by
    /// the `:` of a return type. Only a token scan; the head itself is still
    /// parsed speculatively.
    fn is_parenthesized_arrow_head(&self, offset: usize) -> bool {
        let mut depth = 0usize;
        let mut n = offset;
        loop {
            match self.peek(n).kind {
                SyntaxKind::OpenParenToken
                | SyntaxKind::OpenBracketToken
                | SyntaxKind::OpenBraceToken => depth += 1,
                SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBracketToken
                | SyntaxKind::CloseBraceToken => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        break;
                    }
                }
                SyntaxKind::EndOfFileToken => return false,
                _ => {}
            }
            n += 1;
        }
        matches!(
            self.peek(n + 1).kind,
            SyntaxKind::EqualsGreaterThanToken | SyntaxKind::ColonToken
        )
    }

    fn parse_arrow_head(&mut self) -> ParseResult<ArrowHead> {
        let modifiers = if self.parse_optional_contextual("async") {
            Modifiers::ASYNC
        } else {
            Modifiers::empty()
        };

        // async x => ...
        if modifiers.contains(Modifiers::ASYNC) && self.is_token(SyntaxKind::Identifier) {
            let name = self.next_token().text;
            let params = self.single_parameter(name)?;
            self.parse_arrow_token()?;
            return Ok(ArrowHead {
                modifiers,
                type_params: Vec::new(),
                params,
                return_type: None,
            });
        }

        let type_params = self.parse_optional_type_parameters()?;
        let params = self.parse_parameter_list()?;
        let return_type = self.parse_type_annotation()?;
        self.parse_arrow_token()?;
        Ok(ArrowHead {
            modifiers,
            type_params,
            params,
            return_type,
        })
    }

    /// The parameter list of `x => ...`.
    fn single_parameter(&self, name: String) -> ParseResult<ParameterList> {
        let param = self.build(factory::parameter(ParameterKind::Required, name, None))?;
        self.build(factory::parameter_list(vec![param]))
    }

    fn parse_arrow_token(&mut self) -> ParseResult<()> {
        if self.has_line_break_before_token() {
            return Err(self.error("line terminator not permitted before `=>`"));
        }
        self.parse_expected(SyntaxKind::EqualsGreaterThanToken)?;
        Ok(())
    }

    fn parse_arrow_body(&mut self) -> ParseResult<ArrowBody> {
        if self.is_token(SyntaxKind::OpenBraceToken) {
            Ok(ArrowBody::Block(self.parse_function_body()?))
        } else {
            Ok(ArrowBody::Expr(self.parse_assignment_expression()?))
        }
    }

    /// A function body: a block in which enclosing labels are not visible.
    pub(crate) fn parse_function_body(&mut self) -> ParseResult<Block> {
        self.in_function_body(|p| p.parse_block())
    }

    // =========================================================================
    // Conditional and binary
    // =========================================================================

    fn parse_conditional_expression(&mut self) -> ParseResult<Expr> {
        let test = self.parse_binary_expression(Precedence::Lowest)?;
        if !self.parse_optional(SyntaxKind::QuestionToken) {
            return Ok(test);
        }
        let consequent = self.with_in_allowed(true, |p| p.parse_assignment_expression())?;
        self.parse_expected(SyntaxKind::ColonToken)?;
        let alternate = self.parse_assignment_expression()?;
        Ok(factory::conditional(test, consequent, alternate))
    }

    /// Parse operators binding tighter than `min`. Operators of equal
    /// precedence end the inner loop and are picked up by the caller's, so
    /// `a - b - c` groups as `(a - b) - c`.
    fn parse_binary_expression(&mut self, min: Precedence) -> ParseResult<Expr> {
        let mut left = self.parse_unary_expression()?;
        while let Some(operator) = self.binary_operator() {
            let precedence = operator.precedence();
            if precedence <= min {
                break;
            }
            match operator {
                BinaryOperator::As => {
                    self.next_token();
                    if self.is_token(SyntaxKind::ConstKeyword) {
                        return Err(self.unsupported("`as const` assertions are not supported"));
                    }
                    let ty = self.parse_type()?;
                    left = factory::as_expr(left, ty);
                }
                BinaryOperator::Op { op, width, .. } => {
                    if op == BinaryOp::Exp && is_bare_unary(&left) {
                        return Err(self.error(
                            "a unary expression is not allowed on the left of `**`; \
                             parenthesize it",
                        ));
                    }
                    self.skip_tokens(width);
                    // `**` is right associative: its right operand may itself
                    // contain `**`.
                    let right_min = if op == BinaryOp::Exp {
                        Precedence::Multiplicative
                    } else {
                        precedence
                    };
                    let right = self.nested(|p| p.parse_binary_expression(right_min))?;
                    left = factory::binary(left, op, right);
                }
            }
        }
        Ok(left)
    }

    fn binary_operator(&self) -> Option<BinaryOperator> {
        use Precedence::*;
        let token = self.token();
        if let Some(glued) = self.glued_greater_than() {
            let (op, precedence) = match glued.text {
                ">" => (BinaryOp::Gt, Relational),
                ">=" => (BinaryOp::GtEq, Relational),
                ">>" => (BinaryOp::Shr, Shift),
                ">>>" => (BinaryOp::UShr, Shift),
                _ => return None,
            };
            return Some(BinaryOperator::Op {
                op,
                precedence,
                width: glued.width,
            });
        }
        if token.is_contextual("as") && !token.has_preceding_line_break {
            return Some(BinaryOperator::As);
        }
        let (op, precedence) = match token.kind {
            SyntaxKind::BarBarToken => (BinaryOp::Or, LogicalOr),
            SyntaxKind::QuestionQuestionToken => (BinaryOp::Coalesce, LogicalOr),
            SyntaxKind::AmpersandAmpersandToken => (BinaryOp::And, LogicalAnd),
            SyntaxKind::BarToken => (BinaryOp::BitOr, BitwiseOr),
            SyntaxKind::CaretToken => (BinaryOp::BitXor, BitwiseXor),
            SyntaxKind::AmpersandToken => (BinaryOp::BitAnd, BitwiseAnd),
            SyntaxKind::EqualsEqualsToken => (BinaryOp::Eq, Equality),
            SyntaxKind::ExclamationEqualsToken => (BinaryOp::NotEq, Equality),
            SyntaxKind::EqualsEqualsEqualsToken => (BinaryOp::StrictEq, Equality),
            SyntaxKind::ExclamationEqualsEqualsToken => (BinaryOp::StrictNotEq, Equality),
            SyntaxKind::LessThanToken => (BinaryOp::Lt, Relational),
            SyntaxKind::LessThanEqualsToken => (BinaryOp::LtEq, Relational),
            SyntaxKind::InstanceOfKeyword => (BinaryOp::InstanceOf, Relational),
            SyntaxKind::InKeyword if !self.disallow_in => (BinaryOp::In, Relational),
            SyntaxKind::LessThanLessThanToken => (BinaryOp::Shl, Shift),
            SyntaxKind::PlusToken => (BinaryOp::Add, Additive),
            SyntaxKind::MinusToken => (BinaryOp::Sub, Additive),
            SyntaxKind::AsteriskToken => (BinaryOp::Mul, Multiplicative),
            SyntaxKind::SlashToken => (BinaryOp::Div, Multiplicative),
            SyntaxKind::PercentToken => (BinaryOp::Mod, Multiplicative),
            SyntaxKind::AsteriskAsteriskToken => (BinaryOp::Exp, Exponent),
            _ => return None,
        };
        Some(BinaryOperator::Op {
            op,
            precedence,
            width: 1,
        })
    }

    // =========================================================================
    // Unary and postfix
    // =========================================================================

    fn parse_unary_expression(&mut self) -> ParseResult<Expr> {
        self.nested(|p| p.parse_unary_expression_worker())
    }

    fn parse_unary_expression_worker(&mut self) -> ParseResult<Expr> {
        let op = match self.token().kind {
            SyntaxKind::PlusToken => Some(UnaryOp::Plus),
            SyntaxKind::MinusToken => Some(UnaryOp::Minus),
            SyntaxKind::ExclamationToken => Some(UnaryOp::Not),
            SyntaxKind::TildeToken => Some(UnaryOp::BitNot),
            SyntaxKind::PlusPlusToken => Some(UnaryOp::PreIncrement),
            SyntaxKind::MinusMinusToken => Some(UnaryOp::PreDecrement),
            SyntaxKind::TypeOfKeyword => Some(UnaryOp::TypeOf),
            SyntaxKind::VoidKeyword => Some(UnaryOp::Void),
            SyntaxKind::DeleteKeyword => Some(UnaryOp::Delete),
            SyntaxKind::Identifier
                if self.is_contextual("await") && starts_await_operand(self.peek(1).kind) =>
            {
                Some(UnaryOp::Await)
            }
            SyntaxKind::LessThanToken => return self.parse_cast_expression(),
            _ => None,
        };
        let Some(op) = op else {
            return self.parse_postfix_expression();
        };

        self.next_token();
        let operand = self.parse_unary_expression()?;
        if matches!(op, UnaryOp::PreIncrement | UnaryOp::PreDecrement)
            && !is_assignment_target(&operand)
        {
            return Err(self.error("invalid operand for an increment or decrement operator"));
        }
        Ok(factory::unary(op, operand))
    }

    /// `<T>expr`
    fn parse_cast_expression(&mut self) -> ParseResult<Expr> {
        self.parse_expected(SyntaxKind::LessThanToken)?;
        let ty = self.parse_type()?;
        self.parse_expected(SyntaxKind::GreaterThanToken)?;
        let expr = self.parse_unary_expression()?;
        Ok(factory::cast(ty, expr))
    }

    fn parse_postfix_expression(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_left_hand_side_expression()?;
        if self.has_line_break_before_token() {
            return Ok(expr);
        }
        let op = match self.token().kind {
            SyntaxKind::PlusPlusToken => PostfixOp::Increment,
            SyntaxKind::MinusMinusToken => PostfixOp::Decrement,
            _ => return Ok(expr),
        };
        if !is_assignment_target(&expr) {
            return Err(self.error("invalid operand for an increment or decrement operator"));
        }
        self.next_token();
        Ok(factory::postfix(op, expr))
    }

    // =========================================================================
    // Member access, calls and `new`
    // =========================================================================

    fn parse_left_hand_side_expression(&mut self) -> ParseResult<Expr> {
        let expr = if self.is_token(SyntaxKind::NewKeyword) {
            self.parse_new_expression()?
        } else {
            self.parse_primary_expression()?
        };
        self.parse_member_chain(expr, true)
    }

    fn parse_new_expression(&mut self) -> ParseResult<Expr> {
        self.parse_expected(SyntaxKind::NewKeyword)?;
        if self.is_token(SyntaxKind::DotToken) {
            return Err(self.unsupported("`new.target` is not supported"));
        }
        let callee = if self.is_token(SyntaxKind::NewKeyword) {
            self.nested(|p| p.parse_new_expression())?
        } else {
            self.parse_primary_expression()?
        };
        let callee = self.parse_member_chain(callee, false)?;
        let type_args = if self.is_token(SyntaxKind::LessThanToken) {
            self.try_parse(|p| p.parse_type_arguments_before_call())
                .unwrap_or_default()
        } else {
            Vec::new()
        };
        let args = if self.is_token(SyntaxKind::OpenParenToken) {
            Some(self.parse_arguments()?)
        } else {
            None
        };
        Ok(factory::new_expr(callee, type_args, args))
    }

    /// Type arguments that must be followed by an argument list, as in
    /// `f<T>(x)`. Otherwise `<` is a comparison and this fails.
    fn parse_type_arguments_before_call(&mut self) -> ParseResult<Vec<TsType>> {
        let args = self.parse_type_arguments()?;
        if !self.is_token(SyntaxKind::OpenParenToken) {
            return Err(self.error("expected `(` after type arguments"));
        }
        Ok(args)
    }

    /// Member accesses, element accesses, non-null assertions and, when
    /// `calls` is set, calls following `expr`.
    fn parse_member_chain(&mut self, mut expr: Expr, calls: bool) -> ParseResult<Expr> {
        loop {
            match self.token().kind {
                SyntaxKind::DotToken => {
                    self.next_token();
                    let name = self.parse_member_name()?;
                    expr = self.build(factory::member(expr, name))?;
                }
                SyntaxKind::QuestionDotToken => {
                    if !calls {
                        return Err(self.error("optional chains are not allowed in `new`"));
                    }
                    self.next_token();
                    expr = match self.token().kind {
                        SyntaxKind::OpenParenToken => {
                            let args = self.parse_arguments()?;
                            factory::optional_call(expr, Vec::new(), args)
                        }
                        SyntaxKind::LessThanToken => {
                            let type_args = self.parse_type_arguments_before_call()?;
                            let args = self.parse_arguments()?;
                            factory::optional_call(expr, type_args, args)
                        }
                        SyntaxKind::OpenBracketToken => {
                            let index = self.parse_element_index()?;
                            factory::element_access(expr, index, true)
                        }
                        _ => {
                            let name = self.parse_member_name()?;
                            self.build(factory::optional_member(expr, name))?
                        }
                    };
                }
                SyntaxKind::OpenBracketToken => {
                    let index = self.parse_element_index()?;
                    expr = factory::element_access(expr, index, false);
                }
                SyntaxKind::ExclamationToken if !self.has_line_break_before_token() => {
                    self.next_token();
                    expr = factory::non_null(expr);
                }
                SyntaxKind::OpenParenToken if calls => {
                    let args = self.parse_arguments()?;
                    expr = factory::call(expr, Vec::new(), args);
                }
                SyntaxKind::LessThanToken if calls => {
                    let Some(type_args) =
                        self.try_parse(|p| p.parse_type_arguments_before_call())
                    else {
                        return Ok(expr);
                    };
                    let args = self.parse_arguments()?;
                    expr = factory::call(expr, type_args, args);
                }
                SyntaxKind::TemplateLiteral => {
                    return Err(self.unsupported("tagged template literals are not supported"));
                }
                _ => return Ok(expr),
            }
        }
    }

    fn parse_member_name(&mut self) -> ParseResult<String> {
        if self.is_token(SyntaxKind::PrivateIdentifier) {
            return Ok(self.next_token().text);
        }
        self.parse_identifier_name("a property name after `.`")
    }

    fn parse_element_index(&mut self) -> ParseResult<Expr> {
        self.parse_expected(SyntaxKind::OpenBracketToken)?;
        let index = self.with_in_allowed(true, |p| p.parse_expression())?;
        self.parse_expected(SyntaxKind::CloseBracketToken)?;
        Ok(index)
    }

    /// `(a, ...rest)`
    fn parse_arguments(&mut self) -> ParseResult<Vec<Expr>> {
        self.parse_expected(SyntaxKind::OpenParenToken)?;
        let mut args = Vec::new();
        self.with_in_allowed(true, |p| {
            while !p.is_token(SyntaxKind::CloseParenToken) {
                args.push(p.parse_spread_or_assignment()?);
                if !p.parse_optional(SyntaxKind::CommaToken) {
                    break;
                }
            }
            Ok(())
        })?;
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        Ok(args)
    }

    fn parse_spread_or_assignment(&mut self) -> ParseResult<Expr> {
        if self.parse_optional(SyntaxKind::DotDotDotToken) {
            Ok(factory::spread(self.parse_assignment_expression()?))
        } else {
            self.parse_assignment_expression()
        }
    }

    // =========================================================================
    // Primary expressions
    // =========================================================================

    fn parse_primary_expression(&mut self) -> ParseResult<Expr> {
        match self.token().kind {
            SyntaxKind::Identifier => {
                if self.is_contextual("async")
                    && self.peek(1).kind == SyntaxKind::FunctionKeyword
                    && !self.peek(1).has_preceding_line_break
                {
                    self.next_token();
                    return self.parse_function_expression(Modifiers::ASYNC);
                }
                let name = self.next_token().text;
                self.build(factory::identifier(name))
            }
            SyntaxKind::ThisKeyword => {
                self.next_token();
                Ok(Expr::THIS)
            }
            SyntaxKind::SuperKeyword => {
                self.next_token();
                Ok(Expr::SUPER)
            }
            SyntaxKind::NullKeyword => {
                self.next_token();
                Ok(factory::null_literal())
            }
            SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword => {
                let token = self.next_token();
                Ok(factory::boolean_literal(token.kind == SyntaxKind::TrueKeyword))
            }
            SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral => {
                Ok(factory::number_literal(self.next_token().text))
            }
            SyntaxKind::StringLiteral => {
                let token = self.next_token();
                Ok(factory::string_literal(token.value.unwrap_or_default()))
            }
            SyntaxKind::OpenParenToken => {
                self.next_token();
                let expr = self.with_in_allowed(true, |p| p.parse_expression())?;
                self.parse_expected(SyntaxKind::CloseParenToken)?;
                Ok(factory::paren(expr))
            }
            SyntaxKind::OpenBracketToken => self.parse_array_literal(),
            SyntaxKind::OpenBraceToken => self.parse_object_literal(),
            SyntaxKind::FunctionKeyword => self.parse_function_expression(Modifiers::empty()),
            SyntaxKind::ClassKeyword => {
                Err(self.unsupported("class expressions are not supported"))
            }
            SyntaxKind::TemplateLiteral => {
                Err(self.unsupported("template literals are not supported"))
            }
            SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken => {
                Err(self.unsupported("regular expression literals are not supported"))
            }
            SyntaxKind::ImportKeyword => {
                Err(self.unsupported("dynamic imports are not supported"))
            }
            SyntaxKind::AtToken => Err(self.unsupported("decorators are not supported")),
            _ => Err(self.error("expected an expression")),
        }
    }

    fn parse_array_literal(&mut self) -> ParseResult<Expr> {
        self.parse_expected(SyntaxKind::OpenBracketToken)?;
        let mut elements = Vec::new();
        self.with_in_allowed(true, |p| {
            while !p.is_token(SyntaxKind::CloseBracketToken) {
                if p.is_token(SyntaxKind::CommaToken) {
                    return Err(p.unsupported("array holes are not supported"));
                }
                elements.push(p.parse_spread_or_assignment()?);
                if !p.parse_optional(SyntaxKind::CommaToken) {
                    break;
                }
            }
            Ok(())
        })?;
        self.parse_expected(SyntaxKind::CloseBracketToken)?;
        Ok(factory::array_literal(elements))
    }

    /// `function name<T>(a: A): R { ... }`
    fn parse_function_expression(&mut self, modifiers: Modifiers) -> ParseResult<Expr> {
        self.parse_expected(SyntaxKind::FunctionKeyword)?;
        if self.is_token(SyntaxKind::AsteriskToken) {
            return Err(self.unsupported("generators are not supported"));
        }
        let name = if self.is_token(SyntaxKind::Identifier) {
            Some(self.next_token().text)
        } else {
            None
        };
        let type_params = self.parse_optional_type_parameters()?;
        let params = self.parse_parameter_list()?;
        let return_type = self.parse_type_annotation()?;
        let body = self.parse_function_body()?;
        Ok(factory::function_expr(
            name,
            type_params,
            params,
            return_type,
            body,
            modifiers,
        ))
    }

    // =========================================================================
    // Object literals
    // =========================================================================

    /// Object literal properties keep their comments, so a commented
    /// configuration object survives formatting.
    fn parse_object_literal(&mut self) -> ParseResult<Expr> {
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut properties = Vec::new();
        self.with_in_allowed(true, |p| {
            while !p.is_token(SyntaxKind::CloseBraceToken) && !p.is_at_end() {
                let first = properties.is_empty();
                let property = p.parse_list_element(first, |p| {
                    let property = p.parse_object_property()?;
                    if !p.is_token(SyntaxKind::CloseBraceToken) {
                        p.parse_expected(SyntaxKind::CommaToken)?;
                    }
                    Ok(property)
                })?;
                properties.push(property);
            }
            Ok(())
        })?;
        let dangling = self.claim_dangling_into(&mut properties);
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        let object = factory::object_literal(properties);
        Ok(crate::state::attach_trivia(object, Vec::new(), dangling))
    }

    fn parse_object_property(&mut self) -> ParseResult<ObjectProperty> {
        if self.parse_optional(SyntaxKind::DotDotDotToken) {
            return Ok(factory::spread_property(self.parse_assignment_expression()?));
        }
        if self.is_token(SyntaxKind::AsteriskToken) {
            return Err(self.unsupported("generator methods are not supported"));
        }
        if (self.is_contextual("get") || self.is_contextual("set"))
            && self.is_property_name_start(1)
        {
            return Err(self.unsupported("object literal accessors are not supported"));
        }

        let mut modifiers = Modifiers::empty();
        if self.is_contextual("async")
            && self.is_property_name_start(1)
            && !self.peek(1).has_preceding_line_break
        {
            self.next_token();
            modifiers |= Modifiers::ASYNC;
        }

        let name_token_kind = self.token().kind;
        let name = self.parse_property_name()?;
        if matches!(
            self.token().kind,
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken
        ) {
            let type_params = self.parse_optional_type_parameters()?;
            let params = self.parse_parameter_list()?;
            let return_type = self.parse_type_annotation()?;
            let body = self.parse_function_body()?;
            return Ok(factory::method_property(
                name,
                type_params,
                params,
                return_type,
                body,
                modifiers,
            ));
        }
        if !modifiers.is_empty() {
            return Err(self.error("expected `(` after an async method name"));
        }
        if self.parse_optional(SyntaxKind::ColonToken) {
            let value = self.parse_assignment_expression()?;
            return Ok(factory::key_value_property(name, value));
        }
        match name {
            PropertyName::Identifier(name) if name_token_kind == SyntaxKind::Identifier => {
                if self.is_token(SyntaxKind::EqualsToken) {
                    return Err(
                        self.unsupported("shorthand property initializers are not supported")
                    );
                }
                self.build(factory::shorthand_property(name))
            }
            _ => Err(self.error("expected `:` after a property name")),
        }
    }
}
