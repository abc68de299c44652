//! Type nodes and type members.

use crate::modifiers::Modifiers;
use crate::node::{LiteralValue, PropertyName};
use crate::params::{ParameterList, TypeParameter};
use crate::trivia::{impl_has_trivia, impl_has_trivia_for_enum, NodeTrivia};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum TsType {
    Keyword(KeywordType),
    This(ThisType),
    Reference(Arc<TypeReference>),
    Array(Arc<ArrayType>),
    Tuple(Arc<TupleType>),
    Union(Arc<UnionType>),
    Intersection(Arc<IntersectionType>),
    Function(Arc<FunctionType>),
    Constructor(Arc<ConstructorType>),
    Object(Arc<ObjectType>),
    Query(Arc<TypeQuery>),
    Paren(Arc<ParenType>),
    Literal(Arc<LiteralType>),
}

impl_has_trivia_for_enum!(TsType {
    Keyword,
    This,
    Reference,
    Array,
    Tuple,
    Union,
    Intersection,
    Function,
    Constructor,
    Object,
    Query,
    Paren,
    Literal,
});

impl TsType {
    /// The canonical `this` type.
    pub const THIS: TsType = TsType::This(ThisType {
        trivia: NodeTrivia::EMPTY,
    });

    pub const ANY: TsType = TsType::keyword(TypeKeyword::Any);
    pub const NUMBER: TsType = TsType::keyword(TypeKeyword::Number);
    pub const STRING: TsType = TsType::keyword(TypeKeyword::String);
    pub const BOOLEAN: TsType = TsType::keyword(TypeKeyword::Boolean);
    pub const VOID: TsType = TsType::keyword(TypeKeyword::Void);

    pub const fn keyword(keyword: TypeKeyword) -> TsType {
        TsType::Keyword(KeywordType {
            keyword,
            trivia: NodeTrivia::EMPTY,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TypeKeyword {
    Any,
    Number,
    String,
    Boolean,
    Void,
    Undefined,
    Null,
    Never,
    Unknown,
    Object,
    Symbol,
    BigInt,
}

impl TypeKeyword {
    pub fn from_text(text: &str) -> Option<TypeKeyword> {
        let keyword = match text {
            "any" => TypeKeyword::Any,
            "number" => TypeKeyword::Number,
            "string" => TypeKeyword::String,
            "boolean" => TypeKeyword::Boolean,
            "void" => TypeKeyword::Void,
            "undefined" => TypeKeyword::Undefined,
            "null" => TypeKeyword::Null,
            "never" => TypeKeyword::Never,
            "unknown" => TypeKeyword::Unknown,
            "object" => TypeKeyword::Object,
            "symbol" => TypeKeyword::Symbol,
            "bigint" => TypeKeyword::BigInt,
            _ => return None,
        };
        Some(keyword)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeKeyword::Any => "any",
            TypeKeyword::Number => "number",
            TypeKeyword::String => "string",
            TypeKeyword::Boolean => "boolean",
            TypeKeyword::Void => "void",
            TypeKeyword::Undefined => "undefined",
            TypeKeyword::Null => "null",
            TypeKeyword::Never => "never",
            TypeKeyword::Unknown => "unknown",
            TypeKeyword::Object => "object",
            TypeKeyword::Symbol => "symbol",
            TypeKeyword::BigInt => "bigint",
        }
    }
}

impl fmt::Display for TypeKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A possibly qualified name: `a`, `a.b.c`. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EntityName(pub Vec<String>);

impl EntityName {
    pub fn simple(name: impl Into<String>) -> Self {
        EntityName(vec![name.into()])
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KeywordType {
    pub keyword: TypeKeyword,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThisType {
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypeReference {
    pub name: EntityName,
    pub type_args: Vec<TsType>,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArrayType {
    pub element: TsType,
    pub trivia: NodeTrivia,
}

/// At least one element.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TupleType {
    pub elements: Vec<TsType>,
    pub trivia: NodeTrivia,
}

/// At least two members.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UnionType {
    pub types: Vec<TsType>,
    pub trivia: NodeTrivia,
}

/// At least two members.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IntersectionType {
    pub types: Vec<TsType>,
    pub trivia: NodeTrivia,
}

/// `<T>(a: A) => R`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FunctionType {
    pub type_params: Vec<TypeParameter>,
    pub params: ParameterList,
    pub return_type: TsType,
    pub trivia: NodeTrivia,
}

/// `new <T>(a: A) => R`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConstructorType {
    pub type_params: Vec<TypeParameter>,
    pub params: ParameterList,
    pub return_type: TsType,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectType {
    pub members: Vec<TypeMember>,
    pub trivia: NodeTrivia,
}

/// `typeof a.b`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypeQuery {
    pub name: EntityName,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParenType {
    pub ty: TsType,
    pub trivia: NodeTrivia,
}

/// `"a"`, `1`, `-1`, `true`. `Null` is not a literal type; it is
/// [`TypeKeyword::Null`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LiteralType {
    pub value: LiteralValue,
    pub trivia: NodeTrivia,
}

// =============================================================================
// Type members
// =============================================================================

/// A member of an object type or interface body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum TypeMember {
    Property(Arc<PropertySignature>),
    Method(Arc<MethodSignature>),
    Call(Arc<CallSignature>),
    Construct(Arc<ConstructSignature>),
    Index(Arc<IndexSignature>),
}

impl_has_trivia_for_enum!(TypeMember {
    Property,
    Method,
    Call,
    Construct,
    Index,
});

/// `readonly name?: T`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PropertySignature {
    pub name: PropertyName,
    pub optional: bool,
    pub ty: Option<TsType>,
    pub modifiers: Modifiers,
    pub trivia: NodeTrivia,
}

/// `name?<T>(a: A): R`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MethodSignature {
    pub name: PropertyName,
    pub optional: bool,
    pub type_params: Vec<TypeParameter>,
    pub params: ParameterList,
    pub return_type: Option<TsType>,
    pub trivia: NodeTrivia,
}

/// `<T>(a: A): R`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CallSignature {
    pub type_params: Vec<TypeParameter>,
    pub params: ParameterList,
    pub return_type: Option<TsType>,
    pub trivia: NodeTrivia,
}

/// `new <T>(a: A): R`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConstructSignature {
    pub type_params: Vec<TypeParameter>,
    pub params: ParameterList,
    pub return_type: Option<TsType>,
    pub trivia: NodeTrivia,
}

/// `readonly [key: string]: T`. Also used as a class member.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IndexSignature {
    pub param_name: String,
    pub param_type: TsType,
    pub ty: TsType,
    pub modifiers: Modifiers,
    pub trivia: NodeTrivia,
}

impl_has_trivia!(
    KeywordType,
    ThisType,
    TypeReference,
    ArrayType,
    TupleType,
    UnionType,
    IntersectionType,
    FunctionType,
    ConstructorType,
    ObjectType,
    TypeQuery,
    ParenType,
    LiteralType,
    PropertySignature,
    MethodSignature,
    CallSignature,
    ConstructSignature,
    IndexSignature,
);
