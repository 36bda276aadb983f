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

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

use super::{GenericTypeSystem, LogicalField, LogicalType, LogicalTypeKind, TypeSystem};
use crate::ast::{CollectionKind, SqlTypeName};

/// Creates [`LogicalType`]s.
///
/// Every method except [`TypeFactory::type_system`] has a default
/// implementation, so a factory only needs to say which [`TypeSystem`] it
/// follows. Types created by the factory are `NOT NULL`; use
/// [`TypeFactory::create_type_with_nullability`] to change that.
pub trait TypeFactory {
    fn type_system(&self) -> &dyn TypeSystem;

    /// Creates a built-in scalar type.
    ///
    /// Missing precision and scale are filled in from the type system, and
    /// values above its maximum are clamped. Returns `None` when the name
    /// is not a scalar type (`ARRAY`, `MULTISET`, `ROW`), or when a
    /// precision or scale is given to a type that takes none, e.g.
    /// `INTEGER(5)`.
    fn create_sql_type(
        &self,
        type_name: SqlTypeName,
        precision: Option<u64>,
        scale: Option<u64>,
    ) -> Option<LogicalType> {
        if type_name.collection_kind().is_some() || type_name == SqlTypeName::Row {
            return None;
        }
        if (precision.is_some() && !type_name.allows_precision())
            || (scale.is_some() && !type_name.allows_scale())
        {
            return None;
        }
        let type_system = self.type_system();
        let precision = clamp(
            type_name,
            "precision",
            precision.or_else(|| type_system.default_precision(type_name)),
            type_system.max_precision(type_name),
        );
        let scale = clamp(
            type_name,
            "scale",
            scale.or_else(|| type_system.default_scale(type_name)),
            type_system.max_scale(type_name),
        );
        Some(LogicalType::new(
            LogicalTypeKind::Basic {
                type_name,
                precision,
                scale,
            },
            false,
        ))
    }

    /// Creates an `ARRAY` type; `max_cardinality` of `-1` means unbounded
    fn create_array_type(&self, element: LogicalType, max_cardinality: i64) -> LogicalType {
        LogicalType::new(
            LogicalTypeKind::Array {
                element: Box::new(element),
                max_cardinality,
            },
            false,
        )
    }

    /// Creates a `MULTISET` type; `max_cardinality` of `-1` means unbounded
    fn create_multiset_type(&self, element: LogicalType, max_cardinality: i64) -> LogicalType {
        LogicalType::new(
            LogicalTypeKind::Multiset {
                element: Box::new(element),
                max_cardinality,
            },
            false,
        )
    }

    /// Wraps `element` in the given collection kind
    fn create_collection_type(
        &self,
        kind: CollectionKind,
        element: LogicalType,
        max_cardinality: i64,
    ) -> LogicalType {
        match kind {
            CollectionKind::Multiset => self.create_multiset_type(element, max_cardinality),
            CollectionKind::Array => self.create_array_type(element, max_cardinality),
        }
    }

    fn create_struct_type(&self, fields: Vec<LogicalField>) -> LogicalType {
        LogicalType::new(LogicalTypeKind::Struct { fields }, false)
    }

    /// Returns `ty` with the given nullability
    fn create_type_with_nullability(&self, ty: LogicalType, nullable: bool) -> LogicalType {
        LogicalType {
            kind: ty.kind,
            nullable,
        }
    }
}

fn clamp(
    type_name: SqlTypeName,
    facet: &str,
    value: Option<u64>,
    max: Option<u64>,
) -> Option<u64> {
    match (value, max) {
        (Some(v), Some(max)) if v > max => {
            log::debug!("{facet} {v} of {type_name} exceeds the maximum {max}, clamping");
            Some(max)
        }
        _ => value,
    }
}

/// The default [`TypeFactory`], parameterized by a [`TypeSystem`]
#[derive(Debug, Clone)]
pub struct SqlTypeFactory<S: TypeSystem = GenericTypeSystem> {
    type_system: S,
}

impl Default for SqlTypeFactory {
    fn default() -> Self {
        SqlTypeFactory::new(GenericTypeSystem)
    }
}

impl<S: TypeSystem> SqlTypeFactory<S> {
    pub fn new(type_system: S) -> Self {
        SqlTypeFactory { type_system }
    }
}

impl<S: TypeSystem> TypeFactory for SqlTypeFactory<S> {
    fn type_system(&self) -> &dyn TypeSystem {
        &self.type_system
    }
}
