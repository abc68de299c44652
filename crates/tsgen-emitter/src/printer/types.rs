use super::Printer;
use crate::list_format::ListFormat;
use tsgen_ast::types::{CallSignature, ConstructSignature, IndexSignature, MethodSignature};
use tsgen_ast::{Parameter, ParameterKind, ParameterList, TsType, TypeMember, TypeParameter};

impl Printer {
    // =========================================================================
    // Types
    // =========================================================================

    /// Types carry no comments of their own in printed output; the parser
    /// attaches comments to the enclosing member or statement.
    pub(super) fn emit_type(&mut self, ty: &TsType) {
        match ty {
            TsType::Keyword(keyword) => self.write(keyword.keyword.as_str()),
            TsType::This(_) => self.write("this"),
            TsType::Reference(reference) => {
                self.write(&reference.name.to_string());
                self.emit_type_arguments(&reference.type_args);
            }
            TsType::Array(array) => {
                self.emit_type(&array.element);
                self.write("[]");
            }
            TsType::Tuple(tuple) => {
                self.emit_list(&tuple.elements, ListFormat::TUPLE_ELEMENTS, |p, element| {
                    p.emit_type(element)
                });
            }
            TsType::Union(union) => {
                self.emit_list(&union.types, ListFormat::UNION_TYPE, |p, ty| p.emit_type(ty));
            }
            TsType::Intersection(intersection) => {
                self.emit_list(&intersection.types, ListFormat::INTERSECTION_TYPE, |p, ty| {
                    p.emit_type(ty)
                });
            }
            TsType::Function(function) => {
                self.emit_type_parameters(&function.type_params);
                self.emit_parameters(&function.params);
                self.write(" => ");
                self.emit_type(&function.return_type);
            }
            TsType::Constructor(constructor) => {
                self.write("new ");
                self.emit_type_parameters(&constructor.type_params);
                self.emit_parameters(&constructor.params);
                self.write(" => ");
                self.emit_type(&constructor.return_type);
            }
            TsType::Object(object) => self.emit_type_members(&object.members),
            TsType::Query(query) => {
                self.write("typeof ");
                self.write(&query.name.to_string());
            }
            TsType::Paren(paren) => {
                self.write("(");
                self.emit_type(&paren.ty);
                self.write(")");
            }
            TsType::Literal(literal) => self.emit_literal_value(&literal.value),
        }
    }

    /// `{ ... }` body of an object type or interface.
    pub(super) fn emit_type_members(&mut self, members: &[TypeMember]) {
        self.emit_list(members, ListFormat::TYPE_MEMBERS, |p, member| {
            p.emit_type_member(member)
        });
    }

    /// A member without its `;` delimiter.
    pub(super) fn emit_type_member(&mut self, member: &TypeMember) {
        match member {
            TypeMember::Property(property) => {
                self.emit_modifiers(property.modifiers);
                self.emit_property_name(&property.name);
                if property.optional {
                    self.write("?");
                }
                self.emit_type_annotation(property.ty.as_ref());
            }
            TypeMember::Method(method) => self.emit_method_signature(method),
            TypeMember::Call(call) => self.emit_call_signature(call),
            TypeMember::Construct(construct) => self.emit_construct_signature(construct),
            TypeMember::Index(index) => self.emit_index_signature(index),
        }
    }

    fn emit_method_signature(&mut self, method: &MethodSignature) {
        self.emit_property_name(&method.name);
        if method.optional {
            self.write("?");
        }
        self.emit_type_parameters(&method.type_params);
        self.emit_parameters(&method.params);
        self.emit_type_annotation(method.return_type.as_ref());
    }

    fn emit_call_signature(&mut self, call: &CallSignature) {
        self.emit_type_parameters(&call.type_params);
        self.emit_parameters(&call.params);
        self.emit_type_annotation(call.return_type.as_ref());
    }

    fn emit_construct_signature(&mut self, construct: &ConstructSignature) {
        self.write("new ");
        self.emit_type_parameters(&construct.type_params);
        self.emit_parameters(&construct.params);
        self.emit_type_annotation(construct.return_type.as_ref());
    }

    /// `readonly [key: string]: T`, shared by classes and object types.
    pub(super) fn emit_index_signature(&mut self, index: &IndexSignature) {
        self.emit_modifiers(index.modifiers);
        self.write("[");
        self.write(&index.param_name);
        self.write(": ");
        self.emit_type(&index.param_type);
        self.write("]: ");
        self.emit_type(&index.ty);
    }

    // =========================================================================
    // Parameters
    // =========================================================================

    pub(super) fn emit_parameters(&mut self, params: &ParameterList) {
        let params: Vec<&Parameter> = params.iter().collect();
        self.emit_list(&params, ListFormat::PARAMETERS, |p, param| p.emit_parameter(param));
    }

    fn emit_parameter(&mut self, param: &Parameter) {
        self.emit_modifiers(param.modifiers);
        if param.kind == ParameterKind::Rest {
            self.write("...");
        }
        self.write(&param.name);
        // An initializer already makes the parameter optional.
        if param.kind == ParameterKind::Optional && param.initializer.is_none() {
            self.write("?");
        }
        self.emit_type_annotation(param.ty.as_ref());
        if let Some(init) = &param.initializer {
            self.write(" = ");
            self.emit_expression(init);
        }
    }

    pub(super) fn emit_type_parameters(&mut self, type_params: &[TypeParameter]) {
        self.emit_list(type_params, ListFormat::TYPE_PARAMETERS, |p, param| {
            p.write(&param.name);
            if let Some(constraint) = &param.constraint {
                p.write(" extends ");
                p.emit_type(constraint);
            }
            if let Some(default) = &param.default {
                p.write(" = ");
                p.emit_type(default);
            }
        });
    }

    pub(super) fn emit_type_arguments(&mut self, type_args: &[TsType]) {
        self.emit_list(type_args, ListFormat::TYPE_ARGUMENTS, |p, ty| p.emit_type(ty));
    }
}
