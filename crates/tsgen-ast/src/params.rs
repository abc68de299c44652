//! Parameters, parameter lists and type parameters.

use crate::error::BuildError;
use crate::expr::Expr;
use crate::modifiers::Modifiers;
use crate::trivia::{impl_has_trivia, NodeTrivia};
use crate::types::TsType;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ParameterKind {
    Required,
    /// `a?: T` or `a: T = init`.
    Optional,
    /// `...rest: T[]`
    Rest,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Parameter {
    pub kind: ParameterKind,
    pub name: String,
    pub ty: Option<TsType>,
    pub initializer: Option<Expr>,
    /// Accessibility and `readonly` on constructor parameter properties.
    pub modifiers: Modifiers,
    pub trivia: NodeTrivia,
}

impl_has_trivia!(Parameter);

impl Parameter {
    pub fn new(kind: ParameterKind, name: impl Into<String>, ty: Option<TsType>) -> Self {
        Parameter {
            kind,
            name: name.into(),
            ty,
            initializer: None,
            modifiers: Modifiers::empty(),
            trivia: NodeTrivia::default(),
        }
    }

    pub fn with_type(&self, ty: Option<TsType>) -> Self {
        Parameter {
            ty,
            ..self.clone()
        }
    }

    /// A parameter with an initializer is optional.
    pub fn with_initializer(&self, initializer: Option<Expr>) -> Self {
        let kind = match (&initializer, self.kind) {
            (Some(_), ParameterKind::Required) => ParameterKind::Optional,
            (_, kind) => kind,
        };
        Parameter {
            kind,
            initializer,
            ..self.clone()
        }
    }

    pub fn with_modifiers(&self, modifiers: Modifiers) -> Self {
        Parameter {
            modifiers,
            ..self.clone()
        }
    }
}

/// Parameters partitioned as required, then optional, then at most one rest
/// parameter. The partition is established at construction regardless of the
/// order the parameters were supplied in.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ParameterList {
    required: Vec<Parameter>,
    optional: Vec<Parameter>,
    rest: Option<Parameter>,
}

impl ParameterList {
    pub const EMPTY: ParameterList = ParameterList {
        required: Vec::new(),
        optional: Vec::new(),
        rest: None,
    };

    pub fn new(params: impl IntoIterator<Item = Parameter>) -> Result<Self, BuildError> {
        let mut list = ParameterList::default();
        for param in params {
            match param.kind {
                ParameterKind::Required => list.required.push(param),
                ParameterKind::Optional => list.optional.push(param),
                ParameterKind::Rest => {
                    if list.rest.is_some() {
                        return Err(BuildError::MultipleRestParameters);
                    }
                    list.rest = Some(param);
                }
            }
        }
        Ok(list)
    }

    pub fn required(&self) -> &[Parameter] {
        &self.required
    }

    pub fn optional(&self) -> &[Parameter] {
        &self.optional
    }

    pub fn rest(&self) -> Option<&Parameter> {
        self.rest.as_ref()
    }

    /// All parameters in signature order.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.required
            .iter()
            .chain(self.optional.iter())
            .chain(self.rest.iter())
    }

    pub fn len(&self) -> usize {
        self.required.len() + self.optional.len() + usize::from(self.rest.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.iter().find(|p| p.name == name)
    }

    /// A copy of this list with the named parameter's type replaced.
    /// Unknown names leave the list unchanged.
    pub fn with_parameter_type(&self, name: &str, ty: Option<TsType>) -> ParameterList {
        let retype = |p: &Parameter| {
            if p.name == name {
                p.with_type(ty.clone())
            } else {
                p.clone()
            }
        };
        ParameterList {
            required: self.required.iter().map(retype).collect(),
            optional: self.optional.iter().map(retype).collect(),
            rest: self.rest.as_ref().map(retype),
        }
    }
}

/// `T extends C = D`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypeParameter {
    pub name: String,
    pub constraint: Option<TsType>,
    pub default: Option<TsType>,
}

impl TypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        TypeParameter {
            name: name.into(),
            constraint: None,
            default: None,
        }
    }
}
