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

//! Structural ("deep") equality of AST nodes.
//!
//! Unlike `PartialEq`, deep equality reports *where* two nodes first differ.
//! Callers that only need a yes/no answer use [`EqualsDeep::is_equal_deep`];
//! callers that want to fail fast propagate the [`Mismatch`] with `?`.

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
use core::fmt;

/// The point at which two nodes were found to differ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MismatchKind {
    /// The time zones differ
    TimeZone,
    /// One node is a collection and the other is not, or the collection
    /// keywords differ
    CollectionTypeName,
    /// The type names differ
    TypeName,
    Precision,
    Scale,
    /// The row types have a different number of fields
    FieldCount,
    FieldName,
    /// A row field is declared `NULL` on one side and `NOT NULL` (or
    /// nothing) on the other
    Nullability,
    /// The type name descriptors are of different shapes, e.g. a `ROW` type
    /// compared with a basic type
    Descriptor,
}

impl MismatchKind {
    /// Whether the mismatch was found inside the type name descriptor rather
    /// than on the time zone or collection wrapper of the specification.
    pub fn is_type_name_mismatch(&self) -> bool {
        !matches!(
            self,
            MismatchKind::TimeZone | MismatchKind::CollectionTypeName
        )
    }
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            MismatchKind::TimeZone => "time zone",
            MismatchKind::CollectionTypeName => "collection type name",
            MismatchKind::TypeName => "type name",
            MismatchKind::Precision => "precision",
            MismatchKind::Scale => "scale",
            MismatchKind::FieldCount => "field count",
            MismatchKind::FieldName => "field name",
            MismatchKind::Nullability => "nullability",
            MismatchKind::Descriptor => "type name descriptor",
        })
    }
}

/// The first difference found between two nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub kind: MismatchKind,
    /// Rendering of the differing part of the left-hand node
    pub expected: String,
    /// Rendering of the differing part of the right-hand node
    pub actual: String,
}

impl Mismatch {
    pub fn new(kind: MismatchKind, expected: impl fmt::Display, actual: impl fmt::Display) -> Self {
        Mismatch {
            kind,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} mismatch: {} != {}", self.kind, self.expected, self.actual)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Mismatch {}

/// Structural equality that reports the first mismatch.
pub trait EqualsDeep {
    /// Returns `Ok(())` if `self` and `other` are structurally equal, or the
    /// first [`Mismatch`] otherwise.
    fn equals_deep(&self, other: &Self) -> Result<(), Mismatch>;

    fn is_equal_deep(&self, other: &Self) -> bool {
        self.equals_deep(other).is_ok()
    }
}

/// Compares two values with `PartialEq`, reporting `kind` on a difference.
pub(crate) fn check_eq<T>(kind: MismatchKind, left: &T, right: &T) -> Result<(), Mismatch>
where
    T: PartialEq + fmt::Display,
{
    if left == right {
        Ok(())
    } else {
        Err(Mismatch::new(kind, left, right))
    }
}

/// Same as [`check_eq`] for optional values; two absent values are equal.
pub(crate) fn check_eq_opt<T>(
    kind: MismatchKind,
    left: &Option<T>,
    right: &Option<T>,
) -> Result<(), Mismatch>
where
    T: PartialEq + fmt::Display,
{
    match (left, right) {
        (None, None) => Ok(()),
        (Some(l), Some(r)) => check_eq(kind, l, r),
        _ => Err(Mismatch::new(kind, DisplayOpt(left), DisplayOpt(right))),
    }
}

struct DisplayOpt<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for DisplayOpt<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(v) => v.fmt(f),
            None => f.write_str("<none>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_eq_opt() {
        assert_eq!(check_eq_opt::<u64>(MismatchKind::Precision, &None, &None), Ok(()));
        assert_eq!(check_eq_opt(MismatchKind::Scale, &Some(2), &Some(2)), Ok(()));
        let mismatch = check_eq_opt(MismatchKind::Precision, &Some(5), &None).unwrap_err();
        assert_eq!(mismatch.kind, MismatchKind::Precision);
        assert_eq!(mismatch.to_string(), "precision mismatch: 5 != <none>");
    }

    #[test]
    fn test_type_name_mismatch_kinds() {
        assert!(!MismatchKind::TimeZone.is_type_name_mismatch());
        assert!(!MismatchKind::CollectionTypeName.is_type_name_mismatch());
        assert!(MismatchKind::TypeName.is_type_name_mismatch());
        assert!(MismatchKind::FieldName.is_type_name_mismatch());
    }
}
