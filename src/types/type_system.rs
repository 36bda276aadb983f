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

use core::fmt::Debug;

use crate::ast::SqlTypeName;

/// Encapsulates the limits and defaults of a type system.
///
/// # Type systems
/// SQL implementations disagree on details such as the maximum precision of
/// a `DECIMAL` or whether user-defined type names are case sensitive. This
/// trait collects those differences; every method has a default matching
/// [`GenericTypeSystem`], so an implementation only overrides what differs.
///
/// # Examples
///
/// ```
/// # use sqltypespec::ast::SqlTypeName;
/// # use sqltypespec::types::TypeSystem;
/// #[derive(Debug)]
/// struct WideDecimals;
///
/// impl TypeSystem for WideDecimals {
///     fn max_precision(&self, type_name: SqlTypeName) -> Option<u64> {
///         match type_name {
///             SqlTypeName::Decimal => Some(38),
///             other => sqltypespec::types::GenericTypeSystem.max_precision(other),
///         }
///     }
/// }
///
/// assert_eq!(WideDecimals.max_precision(SqlTypeName::Decimal), Some(38));
/// assert_eq!(WideDecimals.max_precision(SqlTypeName::Varchar), Some(65536));
/// ```
pub trait TypeSystem: Debug {
    /// Precision applied when a type specification does not give one, e.g.
    /// `CHAR` is `CHAR(1)`. `None` means the type has no precision.
    fn default_precision(&self, type_name: SqlTypeName) -> Option<u64> {
        match type_name {
            SqlTypeName::Char | SqlTypeName::Binary => Some(1),
            SqlTypeName::Decimal => self.max_precision(type_name),
            SqlTypeName::Time
            | SqlTypeName::TimeWithLocalTimeZone
            | SqlTypeName::Timestamp
            | SqlTypeName::TimestampWithLocalTimeZone => Some(0),
            _ => None,
        }
    }

    /// Scale applied when a type specification does not give one
    fn default_scale(&self, type_name: SqlTypeName) -> Option<u64> {
        match type_name {
            SqlTypeName::Decimal => Some(0),
            _ => None,
        }
    }

    /// Largest precision the type accepts; larger precisions are clamped
    fn max_precision(&self, type_name: SqlTypeName) -> Option<u64> {
        match type_name {
            SqlTypeName::Decimal => Some(19),
            SqlTypeName::Char
            | SqlTypeName::Varchar
            | SqlTypeName::Binary
            | SqlTypeName::Varbinary => Some(65536),
            SqlTypeName::Time
            | SqlTypeName::TimeWithLocalTimeZone
            | SqlTypeName::Timestamp
            | SqlTypeName::TimestampWithLocalTimeZone => Some(3),
            _ => None,
        }
    }

    /// Largest scale the type accepts; larger scales are clamped
    fn max_scale(&self, type_name: SqlTypeName) -> Option<u64> {
        match type_name {
            SqlTypeName::Decimal => self.max_precision(type_name),
            _ => None,
        }
    }

    /// Whether user-defined type names are matched case sensitively
    fn type_names_case_sensitive(&self) -> bool {
        false
    }
}

/// The default [`TypeSystem`]
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericTypeSystem;

impl TypeSystem for GenericTypeSystem {}
