//! Declaration nodes and class members.

use crate::expr::Expr;
use crate::modifiers::Modifiers;
use crate::node::PropertyName;
use crate::params::{ParameterList, TypeParameter};
use crate::stmt::{Block, Stmt};
use crate::trivia::{impl_has_trivia, impl_has_trivia_for_enum, NodeTrivia};
use crate::types::{EntityName, IndexSignature, TsType, TypeMember};
use serde::Serialize;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Decl {
    Function(Arc<FunctionDecl>),
    Class(Arc<ClassDecl>),
    Interface(Arc<InterfaceDecl>),
    Enum(Arc<EnumDecl>),
    Module(Arc<ModuleDecl>),
    TypeAlias(Arc<TypeAliasDecl>),
    Import(Arc<ImportDecl>),
}

impl_has_trivia_for_enum!(Decl {
    Function,
    Class,
    Interface,
    Enum,
    Module,
    TypeAlias,
    Import,
});

impl Decl {
    pub fn modifiers(&self) -> Modifiers {
        match self {
            Decl::Function(decl) => decl.modifiers,
            Decl::Class(decl) => decl.modifiers,
            Decl::Interface(decl) => decl.modifiers,
            Decl::Enum(decl) => decl.modifiers,
            Decl::Module(decl) => decl.modifiers,
            Decl::TypeAlias(decl) => decl.modifiers,
            Decl::Import(_) => Modifiers::empty(),
        }
    }

    /// A copy of this declaration with its modifiers replaced. Imports carry
    /// no modifiers and are returned unchanged.
    pub fn with_modifiers(&self, modifiers: Modifiers) -> Decl {
        match self {
            Decl::Function(decl) => Decl::Function(Arc::new(FunctionDecl {
                modifiers,
                ..(**decl).clone()
            })),
            Decl::Class(decl) => Decl::Class(Arc::new(ClassDecl {
                modifiers,
                ..(**decl).clone()
            })),
            Decl::Interface(decl) => Decl::Interface(Arc::new(InterfaceDecl {
                modifiers,
                ..(**decl).clone()
            })),
            Decl::Enum(decl) => Decl::Enum(Arc::new(EnumDecl {
                modifiers,
                ..(**decl).clone()
            })),
            Decl::Module(decl) => Decl::Module(Arc::new(ModuleDecl {
                modifiers,
                ..(**decl).clone()
            })),
            Decl::TypeAlias(decl) => Decl::TypeAlias(Arc::new(TypeAliasDecl {
                modifiers,
                ..(**decl).clone()
            })),
            Decl::Import(_) => self.clone(),
        }
    }

    /// The declared name, when the declaration has a single one.
    pub fn name(&self) -> Option<String> {
        match self {
            Decl::Function(decl) => Some(decl.name.clone()),
            Decl::Class(decl) => Some(decl.name.clone()),
            Decl::Interface(decl) => Some(decl.name.clone()),
            Decl::Enum(decl) => Some(decl.name.clone()),
            Decl::Module(decl) => Some(decl.name.to_string()),
            Decl::TypeAlias(decl) => Some(decl.name.clone()),
            Decl::Import(_) => None,
        }
    }
}

/// A function declaration. `body` is `None` for overload signatures and
/// ambient declarations.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FunctionDecl {
    pub name: String,
    pub type_params: Vec<TypeParameter>,
    pub params: ParameterList,
    pub return_type: Option<TsType>,
    pub body: Option<Block>,
    pub modifiers: Modifiers,
    pub trivia: NodeTrivia,
}

impl FunctionDecl {
    pub fn with_body(&self, body: Option<Block>) -> Self {
        FunctionDecl {
            body,
            ..self.clone()
        }
    }

    pub fn with_params(&self, params: ParameterList) -> Self {
        FunctionDecl {
            params,
            ..self.clone()
        }
    }

    pub fn with_return_type(&self, return_type: Option<TsType>) -> Self {
        FunctionDecl {
            return_type,
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClassDecl {
    pub name: String,
    pub type_params: Vec<TypeParameter>,
    pub extends: Option<TsType>,
    pub implements: Vec<TsType>,
    pub members: Vec<ClassMember>,
    pub modifiers: Modifiers,
    pub trivia: NodeTrivia,
}

impl ClassDecl {
    pub fn with_members(&self, members: Vec<ClassMember>) -> Self {
        ClassDecl {
            members,
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InterfaceDecl {
    pub name: String,
    pub type_params: Vec<TypeParameter>,
    pub extends: Vec<TsType>,
    pub members: Vec<TypeMember>,
    pub modifiers: Modifiers,
    pub trivia: NodeTrivia,
}

impl InterfaceDecl {
    pub fn with_members(&self, members: Vec<TypeMember>) -> Self {
        InterfaceDecl {
            members,
            ..self.clone()
        }
    }
}

/// `const enum` is `Modifiers::CONST`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnumDecl {
    pub name: String,
    pub members: Vec<EnumMember>,
    pub modifiers: Modifiers,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnumMember {
    pub name: PropertyName,
    pub init: Option<Expr>,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ModuleKeyword {
    Module,
    Namespace,
}

impl ModuleKeyword {
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleKeyword::Module => "module",
            ModuleKeyword::Namespace => "namespace",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ModuleName {
    /// `a.b.c`
    Identifier(EntityName),
    /// `"module-name"`, for ambient external module declarations.
    String(String),
}

impl std::fmt::Display for ModuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModuleName::Identifier(name) => write!(f, "{name}"),
            ModuleName::String(name) => write!(f, "{name:?}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModuleDecl {
    pub keyword: ModuleKeyword,
    pub name: ModuleName,
    pub body: Vec<Stmt>,
    pub modifiers: Modifiers,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypeAliasDecl {
    pub name: String,
    pub type_params: Vec<TypeParameter>,
    pub ty: TsType,
    pub modifiers: Modifiers,
    pub trivia: NodeTrivia,
}

/// `import d, * as ns from "m"`, `import { a, b as c } from "m"`,
/// `import "m"`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImportDecl {
    pub default: Option<String>,
    pub namespace: Option<String>,
    pub named: Vec<ImportSpecifier>,
    pub module: String,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImportSpecifier {
    pub name: String,
    pub alias: Option<String>,
}

// =============================================================================
// Class members
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ClassMember {
    Property(Arc<PropertyMember>),
    Method(Arc<MethodMember>),
    Constructor(Arc<ConstructorMember>),
    Accessor(Arc<AccessorMember>),
    Index(Arc<IndexSignature>),
}

impl_has_trivia_for_enum!(ClassMember {
    Property,
    Method,
    Constructor,
    Accessor,
    Index,
});

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PropertyMember {
    pub name: PropertyName,
    pub optional: bool,
    pub ty: Option<TsType>,
    pub init: Option<Expr>,
    pub modifiers: Modifiers,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MethodMember {
    pub name: PropertyName,
    pub optional: bool,
    pub type_params: Vec<TypeParameter>,
    pub params: ParameterList,
    pub return_type: Option<TsType>,
    /// `None` for overload signatures and abstract methods.
    pub body: Option<Block>,
    pub modifiers: Modifiers,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConstructorMember {
    pub params: ParameterList,
    pub body: Option<Block>,
    pub modifiers: Modifiers,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AccessorKind {
    Get,
    Set,
}

impl AccessorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AccessorKind::Get => "get",
            AccessorKind::Set => "set",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AccessorMember {
    pub kind: AccessorKind,
    pub name: PropertyName,
    pub params: ParameterList,
    pub return_type: Option<TsType>,
    pub body: Option<Block>,
    pub modifiers: Modifiers,
    pub trivia: NodeTrivia,
}

impl_has_trivia!(
    FunctionDecl,
    ClassDecl,
    InterfaceDecl,
    EnumDecl,
    EnumMember,
    ModuleDecl,
    TypeAliasDecl,
    ImportDecl,
    PropertyMember,
    MethodMember,
    ConstructorMember,
    AccessorMember,
);
