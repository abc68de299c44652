use super::Printer;
use crate::list_format::ListFormat;
use tsgen_ast::expr::{
    ArrowFunction, CallExpr, FunctionExpr, MethodProperty, NewExpr, ObjectLiteral, UnaryExpr,
};
use tsgen_ast::{ArrowBody, BinaryOp, Expr, HasTrivia, ObjectProperty, Trivia, UnaryOp};
use tsgen_common::limits::MAX_INLINE_OBJECT_LITERAL_PROPERTIES;

impl Printer {
    // =========================================================================
    // Expressions
    // =========================================================================

    pub(super) fn emit_expression(&mut self, expr: &Expr) {
        self.emit_leading_comments_inline(expr.leading_trivia());
        self.emit_expression_body(expr);
        // An empty object literal keeps its comments inside the braces.
        if !matches!(expr, Expr::Object(object) if object.properties.is_empty()) {
            self.emit_trailing_comments(expr.trailing_trivia());
        }
    }

    fn emit_expression_body(&mut self, expr: &Expr) {
        match expr {
            Expr::Identifier(ident) => self.write(&ident.name),
            Expr::This(_) => self.write("this"),
            Expr::Super(_) => self.write("super"),
            Expr::Literal(literal) => self.emit_literal_value(&literal.value),
            Expr::Array(array) => {
                self.emit_list(&array.elements, ListFormat::ARRAY_LITERAL, |p, element| {
                    p.emit_expression(element)
                });
            }
            Expr::Object(object) => self.emit_object_literal(object),
            Expr::Function(function) => self.emit_function_expression(function),
            Expr::Arrow(arrow) => self.emit_arrow_function(arrow),
            Expr::Paren(paren) => {
                self.write("(");
                self.emit_expression(&paren.expr);
                self.write(")");
            }
            Expr::Unary(unary) => self.emit_unary_expression(unary),
            Expr::Postfix(postfix) => {
                self.emit_expression(&postfix.operand);
                self.write(postfix.op.as_str());
            }
            Expr::Binary(binary) => {
                self.emit_expression(&binary.left);
                if binary.op != BinaryOp::Comma {
                    self.write_space();
                }
                self.write(binary.op.as_str());
                self.write_space();
                self.emit_expression(&binary.right);
            }
            Expr::Conditional(conditional) => {
                self.emit_expression(&conditional.test);
                self.write(" ? ");
                self.emit_expression(&conditional.consequent);
                self.write(" : ");
                self.emit_expression(&conditional.alternate);
            }
            Expr::Call(call) => self.emit_call_expression(call),
            Expr::New(new) => self.emit_new_expression(new),
            Expr::Member(member) => {
                self.emit_expression(&member.object);
                self.write(if member.optional { "?." } else { "." });
                self.write(&member.property);
            }
            Expr::ElementAccess(access) => {
                self.emit_expression(&access.object);
                self.write(if access.optional { "?.[" } else { "[" });
                self.emit_expression(&access.index);
                self.write("]");
            }
            Expr::Cast(cast) => {
                self.write("<");
                self.emit_type(&cast.ty);
                self.write(">");
                self.emit_expression(&cast.expr);
            }
            Expr::As(as_expr) => {
                self.emit_expression(&as_expr.expr);
                self.write(" as ");
                self.emit_type(&as_expr.ty);
            }
            Expr::NonNull(non_null) => {
                self.emit_expression(&non_null.expr);
                self.write("!");
            }
            Expr::Spread(spread) => {
                self.write("...");
                self.emit_expression(&spread.expr);
            }
        }
    }

    fn emit_unary_expression(&mut self, unary: &UnaryExpr) {
        self.write(unary.op.as_str());
        // `- -x` and `+ ++x` must not fuse into `--x` / `+++x`.
        let fuses = match (unary.op, &unary.operand) {
            (UnaryOp::Plus | UnaryOp::PreIncrement, Expr::Unary(operand)) => {
                matches!(operand.op, UnaryOp::Plus | UnaryOp::PreIncrement)
            }
            (UnaryOp::Minus | UnaryOp::PreDecrement, Expr::Unary(operand)) => {
                matches!(operand.op, UnaryOp::Minus | UnaryOp::PreDecrement)
            }
            _ => false,
        };
        if unary.op.is_keyword() || fuses {
            self.write_space();
        }
        self.emit_expression(&unary.operand);
    }

    fn emit_call_expression(&mut self, call: &CallExpr) {
        self.emit_expression(&call.callee);
        if call.optional {
            self.write("?.");
        }
        self.emit_type_arguments(&call.type_args);
        self.emit_list(&call.args, ListFormat::ARGUMENTS, |p, arg| p.emit_expression(arg));
    }

    fn emit_new_expression(&mut self, new: &NewExpr) {
        self.write("new ");
        self.emit_expression(&new.callee);
        self.emit_type_arguments(&new.type_args);
        if let Some(args) = &new.args {
            self.emit_list(args, ListFormat::ARGUMENTS, |p, arg| p.emit_expression(arg));
        }
    }

    // =========================================================================
    // Functions
    // =========================================================================

    fn emit_function_expression(&mut self, function: &FunctionExpr) {
        self.emit_modifiers(function.modifiers);
        self.write("function");
        if let Some(name) = &function.name {
            self.write_space();
            self.write(name);
        }
        self.emit_type_parameters(&function.type_params);
        self.emit_parameters(&function.params);
        self.emit_type_annotation(function.return_type.as_ref());
        self.write_space();
        self.emit_block(&function.body);
    }

    fn emit_arrow_function(&mut self, arrow: &ArrowFunction) {
        self.emit_modifiers(arrow.modifiers);
        self.emit_type_parameters(&arrow.type_params);
        self.emit_parameters(&arrow.params);
        self.emit_type_annotation(arrow.return_type.as_ref());
        self.write(" => ");
        match &arrow.body {
            ArrowBody::Expr(expr) => self.emit_expression(expr),
            ArrowBody::Block(block) => self.emit_block(block),
        }
    }

    // =========================================================================
    // Object literals
    // =========================================================================

    fn emit_object_literal(&mut self, object: &ObjectLiteral) {
        if object.properties.is_empty() {
            let dangling = object.trailing_trivia();
            if dangling.iter().any(Trivia::is_comment) {
                self.emit_comment_only_body(dangling);
            } else {
                self.write("{}");
            }
            return;
        }

        let format = if fits_on_one_line(object) {
            ListFormat::INLINE_OBJECT_LITERAL
        } else {
            ListFormat::MULTI_LINE_OBJECT_LITERAL
        };
        self.emit_list(&object.properties, format, |p, property| {
            p.emit_object_property(property)
        });
    }

    fn emit_object_property(&mut self, property: &ObjectProperty) {
        match property {
            ObjectProperty::KeyValue(kv) => {
                self.emit_property_name(&kv.name);
                self.write(": ");
                self.emit_expression(&kv.value);
            }
            ObjectProperty::Shorthand(shorthand) => self.write(&shorthand.name),
            ObjectProperty::Spread(spread) => {
                self.write("...");
                self.emit_expression(&spread.expr);
            }
            ObjectProperty::Method(method) => self.emit_method_property(method),
        }
    }

    fn emit_method_property(&mut self, method: &MethodProperty) {
        self.emit_modifiers(method.modifiers);
        self.emit_property_name(&method.name);
        self.emit_type_parameters(&method.type_params);
        self.emit_parameters(&method.params);
        self.emit_type_annotation(method.return_type.as_ref());
        self.write_space();
        self.emit_block(&method.body);
    }
}

/// Short objects of plain values print inline; anything holding a function,
/// a nested object or array, or a comment gets one property per line.
fn fits_on_one_line(object: &ObjectLiteral) -> bool {
    object.properties.len() <= MAX_INLINE_OBJECT_LITERAL_PROPERTIES
        && object.properties.iter().all(|property| {
            property.trivia().is_empty()
                && match property {
                    ObjectProperty::Shorthand(_) | ObjectProperty::Spread(_) => true,
                    ObjectProperty::KeyValue(kv) => !matches!(
                        kv.value.unparenthesized(),
                        Expr::Function(_) | Expr::Arrow(_) | Expr::Object(_) | Expr::Array(_)
                    ),
                    ObjectProperty::Method(_) => false,
                }
        })
}
