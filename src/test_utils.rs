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

/// This module contains internal utilities used for testing the library.
/// While technically public, the library's users are not supposed to rely
/// on this module, as it will change without notice.
//
// Integration tests (i.e. everything under `tests/`) import this
// via `sqltypespec::test_utils::*`.

#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec::Vec};

use crate::ast::*;
use crate::location::{Location, Span};
use crate::types::{LogicalType, TypeFactory};
use crate::validator::Validator;

#[cfg(test)]
use pretty_assertions::assert_eq;

pub fn only<T>(v: impl IntoIterator<Item = T>) -> T {
    let mut iter = v.into_iter();
    if let (Some(item), None) = (iter.next(), iter.next()) {
        item
    } else {
        panic!("only called on collection without exactly one item")
    }
}

/// A span on a single line, from `start` to `end` column
pub fn span(line: u64, start: u64, end: u64) -> Span {
    Span::new(Location::new(line, start), Location::new(line, end))
}

pub fn basic(type_name: SqlTypeName) -> TypeNameSpec {
    type_name.into()
}

pub fn basic_with_precision(type_name: SqlTypeName, precision: u64) -> TypeNameSpec {
    BasicTypeNameSpec::new(type_name)
        .with_precision(precision)
        .into()
}

/// A user-defined type name; `name` may be compound, e.g. `s.my_type`
pub fn udt(name: &str) -> TypeNameSpec {
    let idents = name.split('.').map(Ident::new).collect::<Vec<_>>();
    UserDefinedTypeNameSpec::new(ObjectName::from(idents)).into()
}

/// A non-collection specification with the given nullability
pub fn spec(type_name_spec: TypeNameSpec, nullable: Nullability) -> DataTypeSpec {
    DataTypeSpec::without_base(None, type_name_spec, None, nullable, Span::empty())
}

pub fn array_of(type_name_spec: TypeNameSpec) -> DataTypeSpec {
    DataTypeSpec::collection(Ident::new("ARRAY"), type_name_spec, Span::empty())
}

pub fn multiset_of(type_name_spec: TypeNameSpec) -> DataTypeSpec {
    DataTypeSpec::collection(Ident::new("MULTISET"), type_name_spec, Span::empty())
}

/// A `ROW` type from `(field name, field specification)` pairs
pub fn row<'a>(fields: impl IntoIterator<Item = (&'a str, DataTypeSpec)>) -> TypeNameSpec {
    RowTypeNameSpec::new(
        fields
            .into_iter()
            .map(|(name, data_type)| RowField::new(name, data_type))
            .collect(),
    )
    .into()
}

/// A validator that knows the given user-defined types, each defined as a
/// built-in type
pub fn validator_with_types(types: &[(&str, SqlTypeName)]) -> Validator {
    let mut validator = Validator::default();
    for (name, type_name) in types {
        let definition = validator
            .type_factory()
            .create_sql_type(*type_name, None, None)
            .unwrap_or_else(|| panic!("{type_name} is not a scalar type"));
        let ty = LogicalType::user_defined(Ident::new(*name), definition);
        validator.register_type(Ident::new(*name), ty);
    }
    validator
}

pub fn assert_eq_display<T: ToString>(expected: &str, actual: &T) {
    assert_eq!(expected, actual.to_string());
}
