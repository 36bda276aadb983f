// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Resolution of data type specifications against known user-defined types.

#[cfg(not(feature = "std"))]
use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
};
use core::fmt;
#[cfg(feature = "std")]
use std::collections::BTreeMap;

use crate::ast::{DataTypeSpec, ObjectName};
use crate::location::{Span, Spanned};
use crate::types::{LogicalType, SqlTypeFactory, TypeFactory};

/// What went wrong while validating a data type specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A collection keyword other than `ARRAY` or `MULTISET`
    UnknownDatatypeName(String),
    /// A type name that is neither built-in nor a known user-defined type
    UnknownType(String),
}

impl ValidationErrorKind {
    /// A stable key identifying the message, e.g. for localization
    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationErrorKind::UnknownDatatypeName(_) => "unknownDatatypeName",
            ValidationErrorKind::UnknownType(_) => "unknownType",
        }
    }

    /// The offending name
    pub fn name(&self) -> &str {
        match self {
            ValidationErrorKind::UnknownDatatypeName(name)
            | ValidationErrorKind::UnknownType(name) => name,
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationErrorKind::UnknownDatatypeName(name) => {
                write!(f, "Unknown datatype name '{name}'")
            }
            ValidationErrorKind::UnknownType(name) => write!(f, "Unknown type '{name}'"),
        }
    }
}

/// A validation error, with the position of the offending node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    span: Span,
    kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(span: Span, kind: ValidationErrorKind) -> Self {
        ValidationError { span, kind }
    }

    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }
}

impl Spanned for ValidationError {
    fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.kind, self.span.start)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

/// What [`DataTypeSpec::derive_type`] needs from a validator: a type
/// factory, the types of user-defined names, and a way to build errors.
pub trait ResolutionContext {
    fn type_factory(&self) -> &dyn TypeFactory;

    /// The type bound to a user-defined type name, or an
    /// [`ValidationErrorKind::UnknownType`] error if there is none.
    fn validated_node_type(&self, name: &ObjectName) -> Result<LogicalType, ValidationError>;

    fn new_validation_error(&self, span: Span, kind: ValidationErrorKind) -> ValidationError {
        ValidationError::new(span, kind)
    }
}

/// A [`ResolutionContext`] holding a registry of user-defined types.
///
/// # Example
///
/// ```
/// use sqltypespec::ast::{DataTypeSpec, Ident, ObjectName, SqlTypeName};
/// use sqltypespec::types::{LogicalType, TypeFactory};
/// use sqltypespec::validator::Validator;
///
/// let mut validator = Validator::default();
/// let money = validator
///     .type_factory()
///     .create_sql_type(SqlTypeName::Decimal, Some(10), Some(2))
///     .unwrap();
/// validator.register_type(Ident::new("money"), LogicalType::user_defined(Ident::new("MONEY"), money));
///
/// let spec = DataTypeSpec::from(ObjectName::from(Ident::new("MONEY")));
/// let ty = validator.validate_data_type(&spec).unwrap();
/// assert_eq!(ty.to_string(), "MONEY NOT NULL");
/// ```
#[derive(Debug, Clone)]
pub struct Validator<F: TypeFactory = SqlTypeFactory> {
    type_factory: F,
    types: BTreeMap<String, LogicalType>,
}

impl Default for Validator {
    fn default() -> Self {
        Validator::new(SqlTypeFactory::default())
    }
}

impl<F: TypeFactory> Validator<F> {
    pub fn new(type_factory: F) -> Self {
        Validator {
            type_factory,
            types: BTreeMap::new(),
        }
    }

    pub fn type_factory(&self) -> &F {
        &self.type_factory
    }

    /// Binds `name` to `ty`, returning the type previously bound to it.
    /// Names are matched case insensitively unless the type system says
    /// otherwise.
    pub fn register_type(
        &mut self,
        name: impl Into<ObjectName>,
        ty: LogicalType,
    ) -> Option<LogicalType> {
        let key = self.key(&name.into());
        log::debug!("registering user-defined type {key} as {ty}");
        self.types.insert(key, ty)
    }

    /// Derives the type of `spec`, resolving user-defined types against the
    /// registered ones
    pub fn validate_data_type(&self, spec: &DataTypeSpec) -> Result<LogicalType, ValidationError> {
        spec.derive_type(self)
    }

    fn key(&self, name: &ObjectName) -> String {
        let key = name.to_string();
        if self.type_factory.type_system().type_names_case_sensitive() {
            key
        } else {
            key.to_uppercase()
        }
    }
}

impl<F: TypeFactory> ResolutionContext for Validator<F> {
    fn type_factory(&self) -> &dyn TypeFactory {
        &self.type_factory
    }

    fn validated_node_type(&self, name: &ObjectName) -> Result<LogicalType, ValidationError> {
        match self.types.get(&self.key(name)) {
            Some(ty) => {
                log::debug!("resolved user-defined type {name} to {ty}");
                Ok(ty.clone())
            }
            None => Err(self.new_validation_error(
                name.span(),
                ValidationErrorKind::UnknownType(name.to_string()),
            )),
        }
    }
}
