use super::Printer;
use crate::list_format::ListFormat;
use tsgen_ast::decl::{
    AccessorMember, ClassDecl, ConstructorMember, EnumDecl, FunctionDecl, ImportDecl,
    InterfaceDecl, MethodMember, ModuleDecl, PropertyMember, TypeAliasDecl,
};
use tsgen_ast::{Block, ClassMember, Decl, ModuleName};

impl Printer {
    // =========================================================================
    // Declarations
    // =========================================================================

    pub(super) fn emit_declaration(&mut self, decl: &Decl) {
        match decl {
            Decl::Function(function) => self.emit_function_declaration(function),
            Decl::Class(class) => self.emit_class_declaration(class),
            Decl::Interface(interface) => self.emit_interface_declaration(interface),
            Decl::Enum(enum_decl) => self.emit_enum_declaration(enum_decl),
            Decl::Module(module) => self.emit_module_declaration(module),
            Decl::TypeAlias(alias) => self.emit_type_alias_declaration(alias),
            Decl::Import(import) => self.emit_import_declaration(import),
        }
    }

    fn emit_function_declaration(&mut self, function: &FunctionDecl) {
        self.emit_modifiers(function.modifiers);
        self.write("function ");
        self.write(&function.name);
        self.emit_type_parameters(&function.type_params);
        self.emit_parameters(&function.params);
        self.emit_type_annotation(function.return_type.as_ref());
        self.emit_optional_body(function.body.as_ref());
    }

    /// ` { ... }` for an implementation, `;` for a signature.
    fn emit_optional_body(&mut self, body: Option<&Block>) {
        match body {
            Some(body) => {
                self.write_space();
                self.emit_block(body);
            }
            None => self.write_semicolon(),
        }
    }

    fn emit_type_alias_declaration(&mut self, alias: &TypeAliasDecl) {
        self.emit_modifiers(alias.modifiers);
        self.write("type ");
        self.write(&alias.name);
        self.emit_type_parameters(&alias.type_params);
        self.write(" = ");
        self.emit_type(&alias.ty);
        self.write_semicolon();
    }

    fn emit_interface_declaration(&mut self, interface: &InterfaceDecl) {
        self.emit_modifiers(interface.modifiers);
        self.write("interface ");
        self.write(&interface.name);
        self.emit_type_parameters(&interface.type_params);
        if !interface.extends.is_empty() {
            self.write(" extends ");
            self.emit_list(&interface.extends, ListFormat::HERITAGE_CLAUSE, |p, ty| {
                p.emit_type(ty)
            });
        }
        self.write_space();
        self.emit_type_members(&interface.members);
    }

    fn emit_enum_declaration(&mut self, enum_decl: &EnumDecl) {
        self.emit_modifiers(enum_decl.modifiers);
        self.write("enum ");
        self.write(&enum_decl.name);
        self.write_space();
        self.emit_list(&enum_decl.members, ListFormat::ENUM_MEMBERS, |p, member| {
            p.emit_property_name(&member.name);
            if let Some(init) = &member.init {
                p.write(" = ");
                p.emit_expression(init);
            }
        });
    }

    fn emit_module_declaration(&mut self, module: &ModuleDecl) {
        self.emit_modifiers(module.modifiers);
        self.write(module.keyword.as_str());
        self.write_space();
        match &module.name {
            ModuleName::Identifier(name) => self.write(&name.to_string()),
            ModuleName::String(name) => self.write(&super::helpers::quote_string(name)),
        }
        self.write_space();
        self.emit_list(&module.body, ListFormat::BLOCK_STATEMENTS, |p, stmt| {
            p.emit_statement_body(stmt)
        });
    }

    fn emit_import_declaration(&mut self, import: &ImportDecl) {
        self.write("import ");
        let has_bindings =
            import.default.is_some() || import.namespace.is_some() || !import.named.is_empty();

        if let Some(default) = &import.default {
            self.write(default);
        }
        if let Some(namespace) = &import.namespace {
            if import.default.is_some() {
                self.write(", ");
            }
            self.write("* as ");
            self.write(namespace);
        }
        if !import.named.is_empty() {
            if import.default.is_some() || import.namespace.is_some() {
                self.write(", ");
            }
            self.emit_list(&import.named, ListFormat::NAMED_IMPORTS, |p, specifier| {
                p.write(&specifier.name);
                if let Some(alias) = &specifier.alias {
                    p.write(" as ");
                    p.write(alias);
                }
            });
        }

        if has_bindings {
            self.write(" from ");
        }
        self.write(&super::helpers::quote_string(&import.module));
        self.write_semicolon();
    }

    // =========================================================================
    // Classes
    // =========================================================================

    fn emit_class_declaration(&mut self, class: &ClassDecl) {
        self.emit_modifiers(class.modifiers);
        self.write("class ");
        self.write(&class.name);
        self.emit_type_parameters(&class.type_params);
        if let Some(extends) = &class.extends {
            self.write(" extends ");
            self.emit_type(extends);
        }
        if !class.implements.is_empty() {
            self.write(" implements ");
            self.emit_list(&class.implements, ListFormat::HERITAGE_CLAUSE, |p, ty| {
                p.emit_type(ty)
            });
        }
        self.write_space();
        self.emit_list(&class.members, ListFormat::CLASS_MEMBERS, |p, member| {
            p.emit_class_member(member)
        });
    }

    pub(super) fn emit_class_member(&mut self, member: &ClassMember) {
        match member {
            ClassMember::Property(property) => self.emit_property_member(property),
            ClassMember::Method(method) => self.emit_method_member(method),
            ClassMember::Constructor(constructor) => self.emit_constructor_member(constructor),
            ClassMember::Accessor(accessor) => self.emit_accessor_member(accessor),
            ClassMember::Index(index) => {
                self.emit_index_signature(index);
                self.write_semicolon();
            }
        }
    }

    fn emit_property_member(&mut self, property: &PropertyMember) {
        self.emit_modifiers(property.modifiers);
        self.emit_property_name(&property.name);
        if property.optional {
            self.write("?");
        }
        self.emit_type_annotation(property.ty.as_ref());
        if let Some(init) = &property.init {
            self.write(" = ");
            self.emit_expression(init);
        }
        self.write_semicolon();
    }

    fn emit_method_member(&mut self, method: &MethodMember) {
        self.emit_modifiers(method.modifiers);
        self.emit_property_name(&method.name);
        if method.optional {
            self.write("?");
        }
        self.emit_type_parameters(&method.type_params);
        self.emit_parameters(&method.params);
        self.emit_type_annotation(method.return_type.as_ref());
        self.emit_optional_body(method.body.as_ref());
    }

    fn emit_constructor_member(&mut self, constructor: &ConstructorMember) {
        self.emit_modifiers(constructor.modifiers);
        self.write("constructor");
        self.emit_parameters(&constructor.params);
        self.emit_optional_body(constructor.body.as_ref());
    }

    fn emit_accessor_member(&mut self, accessor: &AccessorMember) {
        self.emit_modifiers(accessor.modifiers);
        self.write(accessor.kind.as_str());
        self.write_space();
        self.emit_property_name(&accessor.name);
        self.emit_parameters(&accessor.params);
        self.emit_type_annotation(accessor.return_type.as_ref());
        self.emit_optional_body(accessor.body.as_ref());
    }
}
