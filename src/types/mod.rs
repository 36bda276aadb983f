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

//! Logical types: the resolved form of a data type specification.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String, vec::Vec};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use self::factory::{SqlTypeFactory, TypeFactory};
pub use self::type_system::{GenericTypeSystem, TypeSystem};

use crate::ast::{ObjectName, SqlTypeName};
use crate::display_utils::parenthesized_list;

mod factory;
mod type_system;

/// Maximum cardinality of a collection type whose size is not bounded
pub const UNBOUNDED_CARDINALITY: i64 = -1;

/// A resolved type together with its nullability
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LogicalType {
    kind: LogicalTypeKind,
    nullable: bool,
}

/// The shape of a [`LogicalType`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LogicalTypeKind {
    /// A built-in scalar type, e.g. `INTEGER` or `DECIMAL(10, 2)`
    Basic {
        type_name: SqlTypeName,
        precision: Option<u64>,
        scale: Option<u64>,
    },
    /// `<element> ARRAY`
    Array {
        element: Box<LogicalType>,
        max_cardinality: i64,
    },
    /// `<element> MULTISET`
    Multiset {
        element: Box<LogicalType>,
        max_cardinality: i64,
    },
    /// `ROW(<field>, ...)`
    Struct { fields: Vec<LogicalField> },
    /// A named user-defined type, e.g. a distinct type over `DECIMAL(10, 2)`
    /// or a structured type over a `ROW`
    UserDefined {
        name: ObjectName,
        definition: Box<LogicalType>,
    },
}

/// A named field of a struct type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LogicalField {
    pub name: String,
    pub data_type: LogicalType,
}

impl LogicalField {
    pub fn new(name: impl Into<String>, data_type: LogicalType) -> Self {
        LogicalField {
            name: name.into(),
            data_type,
        }
    }
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.name, self.data_type)
    }
}

impl LogicalType {
    pub fn new(kind: LogicalTypeKind, nullable: bool) -> Self {
        LogicalType { kind, nullable }
    }

    /// A non-nullable user-defined type with the given definition
    pub fn user_defined(name: impl Into<ObjectName>, definition: LogicalType) -> Self {
        LogicalType::new(
            LogicalTypeKind::UserDefined {
                name: name.into(),
                definition: Box::new(definition),
            },
            false,
        )
    }

    pub fn kind(&self) -> &LogicalTypeKind {
        &self.kind
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// The built-in type name closest to this type; user-defined types report
    /// the name of their definition.
    pub fn sql_type_name(&self) -> SqlTypeName {
        match &self.kind {
            LogicalTypeKind::Basic { type_name, .. } => *type_name,
            LogicalTypeKind::Array { .. } => SqlTypeName::Array,
            LogicalTypeKind::Multiset { .. } => SqlTypeName::Multiset,
            LogicalTypeKind::Struct { .. } => SqlTypeName::Row,
            LogicalTypeKind::UserDefined { definition, .. } => definition.sql_type_name(),
        }
    }

    /// The element type of an `ARRAY` or `MULTISET`
    pub fn component_type(&self) -> Option<&LogicalType> {
        match &self.kind {
            LogicalTypeKind::Array { element, .. } | LogicalTypeKind::Multiset { element, .. } => {
                Some(element)
            }
            _ => None,
        }
    }

    /// The maximum cardinality of an `ARRAY` or `MULTISET`;
    /// [`UNBOUNDED_CARDINALITY`] when the size is not bounded
    pub fn max_cardinality(&self) -> Option<i64> {
        match &self.kind {
            LogicalTypeKind::Array {
                max_cardinality, ..
            }
            | LogicalTypeKind::Multiset {
                max_cardinality, ..
            } => Some(*max_cardinality),
            _ => None,
        }
    }

    /// The fields of a struct type, or of the struct a user-defined type is
    /// defined as
    pub fn fields(&self) -> &[LogicalField] {
        match &self.kind {
            LogicalTypeKind::Struct { fields } => fields,
            LogicalTypeKind::UserDefined { definition, .. } => definition.fields(),
            _ => &[],
        }
    }

    pub fn precision(&self) -> Option<u64> {
        match &self.kind {
            LogicalTypeKind::Basic { precision, .. } => *precision,
            _ => None,
        }
    }

    pub fn scale(&self) -> Option<u64> {
        match &self.kind {
            LogicalTypeKind::Basic { scale, .. } => *scale,
            _ => None,
        }
    }
}

/// Renders the full type string, including the nullability of nested types,
/// e.g. `INTEGER NOT NULL ARRAY`.
impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            LogicalTypeKind::Basic {
                type_name,
                precision,
                scale,
            } => type_name.fmt_with_facets(f, *precision, *scale)?,
            LogicalTypeKind::Array { element, .. } => write!(f, "{element} ARRAY")?,
            LogicalTypeKind::Multiset { element, .. } => write!(f, "{element} MULTISET")?,
            LogicalTypeKind::Struct { fields } => {
                f.write_str("ROW")?;
                parenthesized_list(f, fields)?;
            }
            LogicalTypeKind::UserDefined { name, .. } => write!(f, "{name}")?,
        }
        if !self.nullable {
            f.write_str(" NOT NULL")?;
        }
        Ok(())
    }
}
