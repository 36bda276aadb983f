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

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Built-in SQL type names
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SqlTypeName {
    Boolean,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    /// Decimal type with optional precision and scale e.g. DECIMAL(10,2)
    Decimal,
    Float,
    Real,
    Double,
    Date,
    Time,
    /// `TIME WITH LOCAL TIME ZONE`
    TimeWithLocalTimeZone,
    Timestamp,
    /// `TIMESTAMP WITH LOCAL TIME ZONE`
    TimestampWithLocalTimeZone,
    /// Fixed-length character type e.g. CHAR(10)
    Char,
    /// Variable-length character type e.g. VARCHAR(10)
    Varchar,
    Binary,
    Varbinary,
    Null,
    Any,
    Array,
    Multiset,
    Row,
}

impl SqlTypeName {
    /// All built-in type names, in declaration order
    pub const ALL: &'static [SqlTypeName] = &[
        SqlTypeName::Boolean,
        SqlTypeName::TinyInt,
        SqlTypeName::SmallInt,
        SqlTypeName::Integer,
        SqlTypeName::BigInt,
        SqlTypeName::Decimal,
        SqlTypeName::Float,
        SqlTypeName::Real,
        SqlTypeName::Double,
        SqlTypeName::Date,
        SqlTypeName::Time,
        SqlTypeName::TimeWithLocalTimeZone,
        SqlTypeName::Timestamp,
        SqlTypeName::TimestampWithLocalTimeZone,
        SqlTypeName::Char,
        SqlTypeName::Varchar,
        SqlTypeName::Binary,
        SqlTypeName::Varbinary,
        SqlTypeName::Null,
        SqlTypeName::Any,
        SqlTypeName::Array,
        SqlTypeName::Multiset,
        SqlTypeName::Row,
    ];

    /// The SQL spelling of the type name
    pub fn name(&self) -> &'static str {
        match self {
            SqlTypeName::Boolean => "BOOLEAN",
            SqlTypeName::TinyInt => "TINYINT",
            SqlTypeName::SmallInt => "SMALLINT",
            SqlTypeName::Integer => "INTEGER",
            SqlTypeName::BigInt => "BIGINT",
            SqlTypeName::Decimal => "DECIMAL",
            SqlTypeName::Float => "FLOAT",
            SqlTypeName::Real => "REAL",
            SqlTypeName::Double => "DOUBLE",
            SqlTypeName::Date => "DATE",
            SqlTypeName::Time => "TIME",
            SqlTypeName::TimeWithLocalTimeZone => "TIME WITH LOCAL TIME ZONE",
            SqlTypeName::Timestamp => "TIMESTAMP",
            SqlTypeName::TimestampWithLocalTimeZone => "TIMESTAMP WITH LOCAL TIME ZONE",
            SqlTypeName::Char => "CHAR",
            SqlTypeName::Varchar => "VARCHAR",
            SqlTypeName::Binary => "BINARY",
            SqlTypeName::Varbinary => "VARBINARY",
            SqlTypeName::Null => "NULL",
            SqlTypeName::Any => "ANY",
            SqlTypeName::Array => "ARRAY",
            SqlTypeName::Multiset => "MULTISET",
            SqlTypeName::Row => "ROW",
        }
    }

    /// Looks up a built-in type name, ignoring case. Words may be separated
    /// by spaces or underscores (`TIMESTAMP_WITH_LOCAL_TIME_ZONE`), and the
    /// common aliases `INT`, `DEC`, `NUMERIC`, `CHARACTER` and
    /// `CHARACTER VARYING` are accepted.
    pub fn from_name(name: &str) -> Option<SqlTypeName> {
        let mut words = name
            .split(|c: char| c == '_' || c.is_whitespace())
            .filter(|w| !w.is_empty());
        let first = words.next()?;
        let rest = words;
        // Compare word by word so that no normalized copy of `name` is needed.
        let matches = |candidate: &str| {
            let mut expected = candidate.split(' ');
            let mut actual = core::iter::once(first).chain(rest.clone());
            loop {
                match (expected.next(), actual.next()) {
                    (Some(e), Some(a)) if e.eq_ignore_ascii_case(a) => continue,
                    (None, None) => return true,
                    _ => return false,
                }
            }
        };
        if let Some(found) = SqlTypeName::ALL.iter().find(|t| matches(t.name())) {
            return Some(*found);
        }
        [
            ("INT", SqlTypeName::Integer),
            ("DEC", SqlTypeName::Decimal),
            ("NUMERIC", SqlTypeName::Decimal),
            ("CHARACTER", SqlTypeName::Char),
            ("CHARACTER VARYING", SqlTypeName::Varchar),
        ]
        .into_iter()
        .find(|(alias, _)| matches(alias))
        .map(|(_, type_name)| type_name)
    }

    /// Whether a precision may be given, e.g. `VARCHAR(10)` or `TIME(3)`
    pub fn allows_precision(&self) -> bool {
        matches!(
            self,
            SqlTypeName::Decimal
                | SqlTypeName::Float
                | SqlTypeName::Time
                | SqlTypeName::TimeWithLocalTimeZone
                | SqlTypeName::Timestamp
                | SqlTypeName::TimestampWithLocalTimeZone
                | SqlTypeName::Char
                | SqlTypeName::Varchar
                | SqlTypeName::Binary
                | SqlTypeName::Varbinary
        )
    }

    /// Whether a scale may be given, e.g. `DECIMAL(10, 2)`
    pub fn allows_scale(&self) -> bool {
        matches!(self, SqlTypeName::Decimal)
    }

    /// Whether the name carries a `WITH LOCAL TIME ZONE` suffix
    pub fn has_local_time_zone(&self) -> bool {
        matches!(
            self,
            SqlTypeName::TimeWithLocalTimeZone | SqlTypeName::TimestampWithLocalTimeZone
        )
    }

    /// The collection kind denoted by this name, if any
    pub fn collection_kind(&self) -> Option<CollectionKind> {
        match self {
            SqlTypeName::Array => Some(CollectionKind::Array),
            SqlTypeName::Multiset => Some(CollectionKind::Multiset),
            _ => None,
        }
    }
}

impl SqlTypeName {
    /// Writes the type name with its precision and scale, putting them
    /// before a `WITH LOCAL TIME ZONE` suffix, e.g. `TIME(3) WITH LOCAL TIME ZONE`.
    /// A scale without a precision is not rendered.
    pub(crate) fn fmt_with_facets(
        &self,
        f: &mut fmt::Formatter,
        precision: Option<u64>,
        scale: Option<u64>,
    ) -> fmt::Result {
        f.write_str(match self {
            SqlTypeName::TimeWithLocalTimeZone => "TIME",
            SqlTypeName::TimestampWithLocalTimeZone => "TIMESTAMP",
            other => other.name(),
        })?;
        match (precision, scale) {
            (Some(p), Some(s)) => write!(f, "({p}, {s})")?,
            (Some(p), None) => write!(f, "({p})")?,
            _ => {}
        }
        if self.has_local_time_zone() {
            f.write_str(" WITH LOCAL TIME ZONE")?;
        }
        Ok(())
    }
}

impl fmt::Display for SqlTypeName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The collection types a type specification can be wrapped in, e.g.
/// `INTEGER ARRAY` or `VARCHAR(10) MULTISET`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CollectionKind {
    Array,
    Multiset,
}

impl CollectionKind {
    /// Recognizes a collection keyword, ignoring case
    pub fn from_keyword(keyword: &str) -> Option<CollectionKind> {
        if keyword.eq_ignore_ascii_case("ARRAY") {
            Some(CollectionKind::Array)
        } else if keyword.eq_ignore_ascii_case("MULTISET") {
            Some(CollectionKind::Multiset)
        } else {
            None
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            CollectionKind::Array => "ARRAY",
            CollectionKind::Multiset => "MULTISET",
        }
    }
}

impl From<CollectionKind> for SqlTypeName {
    fn from(kind: CollectionKind) -> Self {
        match kind {
            CollectionKind::Array => SqlTypeName::Array,
            CollectionKind::Multiset => SqlTypeName::Multiset,
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
