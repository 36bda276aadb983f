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

#![warn(clippy::all)]
//! Test rendering data type specifications back to SQL, in both the compact
//! (`{}`) and pretty (`{:#}`) forms.

use pretty_assertions::assert_eq;

use sqltypespec::ast::*;
use sqltypespec::test_utils::*;

#[test]
fn display_basic_types() {
    assert_eq_display("INTEGER", &spec(basic(SqlTypeName::Integer), Nullability::NotNull));
    assert_eq_display(
        "VARCHAR(10)",
        &spec(basic_with_precision(SqlTypeName::Varchar, 10), Nullability::Unspecified),
    );
    let decimal = BasicTypeNameSpec::new(SqlTypeName::Decimal)
        .with_precision(5)
        .with_scale(2);
    assert_eq_display("DECIMAL(5, 2) ARRAY", &array_of(decimal.into()));
    assert_eq_display(
        "TIME(3) WITH LOCAL TIME ZONE",
        &spec(
            basic_with_precision(SqlTypeName::TimeWithLocalTimeZone, 3),
            Nullability::Unspecified,
        ),
    );
}

#[test]
fn display_collection_keyword_is_uppercased() {
    let spec = DataTypeSpec::collection(
        Ident::new("array"),
        basic(SqlTypeName::Boolean),
        span(1, 1, 13),
    );
    assert_eq!(spec.to_string(), "BOOLEAN ARRAY");
    assert_eq!(spec.collection_type_name().unwrap().value, "array");
}

#[test]
fn display_nested_collection() {
    let nested = CollectionTypeNameSpec::new(basic(SqlTypeName::Integer), CollectionKind::Array);
    assert_eq_display("INTEGER ARRAY MULTISET", &multiset_of(nested.into()));
}

#[test]
fn display_user_defined_type() {
    assert_eq_display("s.myudt", &spec(udt("s.myudt"), Nullability::Unspecified));
    let quoted = UserDefinedTypeNameSpec::new(Ident::with_quote('"', "My Type"));
    assert_eq_display("\"My Type\" MULTISET", &multiset_of(quoted.into()));
}

#[test]
fn display_row() {
    let row_spec = spec(
        row([
            ("b", spec(basic(SqlTypeName::Boolean), Nullability::Unspecified)),
            ("i", spec(udt("MYUDT"), Nullability::NotNull)),
            ("n", spec(basic(SqlTypeName::Date), Nullability::Nullable)),
        ]),
        Nullability::Unspecified,
    );
    assert_eq!(
        row_spec.to_string(),
        "ROW(b BOOLEAN, i MYUDT NOT NULL, n DATE NULL)"
    );
}

#[test]
fn display_row_pretty() {
    let inner = spec(
        row([
            ("x", spec(basic(SqlTypeName::Integer), Nullability::Unspecified)),
            ("y", spec(basic(SqlTypeName::Integer), Nullability::Unspecified)),
        ]),
        Nullability::NotNull,
    );
    let outer = array_of(row([
        ("id", spec(basic(SqlTypeName::BigInt), Nullability::NotNull)),
        ("point", inner),
    ]));
    assert_eq!(
        outer.to_string(),
        "ROW(id BIGINT NOT NULL, point ROW(x INTEGER, y INTEGER) NOT NULL) ARRAY"
    );
    assert_eq!(
        format!("{outer:#}"),
        r#"ROW(
  id BIGINT NOT NULL,
  point ROW(
    x INTEGER,
    y INTEGER
  ) NOT NULL
) ARRAY"#
    );
}

#[test]
fn display_type_name() {
    assert_eq!(
        array_of(basic(SqlTypeName::Integer)).type_name().to_string(),
        "INTEGER"
    );
    assert_eq!(spec(udt("a.b.c"), Nullability::Unspecified).type_name().0.len(), 3);
    let row_spec = spec(
        row(Vec::<(&str, DataTypeSpec)>::new()),
        Nullability::Unspecified,
    );
    assert_eq!(row_spec.type_name().to_string(), "ROW");
    assert_eq!(only(row_spec.type_name().0).value, "ROW");
}
