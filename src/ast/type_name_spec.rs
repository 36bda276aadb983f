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

//! Type name descriptors: the part of a data type specification that names
//! the type, e.g. `DECIMAL(5, 2)`, `ROW(a INTEGER)` or `my_schema.my_type`.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::equality::{check_eq, check_eq_opt};
use super::{
    CollectionKind, DataTypeSpec, EqualsDeep, Ident, Mismatch, MismatchKind, Nullability,
    ObjectName, SqlTypeName,
};
use crate::display_utils::parenthesized_list;
use crate::location::{Span, Spanned};
use crate::types::{LogicalField, LogicalType, TypeFactory, UNBOUNDED_CARDINALITY};
use crate::validator::{ResolutionContext, ValidationError, ValidationErrorKind};

/// Names the type of a [`DataTypeSpec`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeNameSpec {
    /// A built-in type, e.g. `INTEGER` or `VARCHAR(10)`
    Basic(BasicTypeNameSpec),
    /// A collection nested inside the type name, e.g. the `INTEGER ARRAY`
    /// of `INTEGER ARRAY MULTISET`
    Collection(CollectionTypeNameSpec),
    /// `ROW(<field> <type> [NULL | NOT NULL], ...)`
    Row(RowTypeNameSpec),
    /// A reference to a user-defined type
    UserDefined(UserDefinedTypeNameSpec),
}

impl TypeNameSpec {
    /// The name of the type, e.g. `INTEGER`, `ARRAY`, `ROW` or `s.my_type`
    pub fn type_name(&self) -> ObjectName {
        match self {
            TypeNameSpec::Basic(basic) => {
                Ident::with_span(basic.span, basic.type_name.name()).into()
            }
            TypeNameSpec::Collection(collection) => {
                Ident::with_span(collection.span, collection.kind.keyword()).into()
            }
            TypeNameSpec::Row(row) => Ident::with_span(row.span, "ROW").into(),
            TypeNameSpec::UserDefined(udt) => udt.name.clone(),
        }
    }

    /// Derives the type from built-in types only.
    ///
    /// Returns `None` if the name is not built-in, including a `ROW` with a
    /// field that is not built-in. Callers fall back to user-defined type
    /// resolution in that case.
    pub fn derive_type(&self, type_factory: &dyn TypeFactory) -> Option<LogicalType> {
        match self {
            TypeNameSpec::Basic(basic) => {
                type_factory.create_sql_type(basic.type_name, basic.precision, basic.scale)
            }
            TypeNameSpec::Collection(collection) => {
                let element = collection.element.derive_type(type_factory)?;
                Some(type_factory.create_collection_type(
                    collection.kind,
                    element,
                    UNBOUNDED_CARDINALITY,
                ))
            }
            TypeNameSpec::Row(row) => {
                let fields = row
                    .fields
                    .iter()
                    .map(|field| {
                        field
                            .data_type
                            .derive_type_with_nullability(type_factory, false)
                            .map(|ty| LogicalField::new(field.name.value.clone(), ty))
                    })
                    .collect::<Option<Vec<_>>>()?;
                Some(type_factory.create_struct_type(fields))
            }
            TypeNameSpec::UserDefined(_) => None,
        }
    }

    /// Resolves a type that [`TypeNameSpec::derive_type`] did not find, by
    /// looking up user-defined types in `ctx`.
    pub(crate) fn resolve(
        &self,
        ctx: &dyn ResolutionContext,
    ) -> Result<LogicalType, ValidationError> {
        let type_factory = ctx.type_factory();
        match self {
            // a built-in name the factory rejected, e.g. `INTEGER(5)`
            TypeNameSpec::Basic(basic) => Err(ctx.new_validation_error(
                basic.span,
                ValidationErrorKind::UnknownType(basic.to_string()),
            )),
            TypeNameSpec::UserDefined(udt) => ctx.validated_node_type(&udt.name),
            TypeNameSpec::Collection(collection) => {
                let element = match collection.element.derive_type(type_factory) {
                    Some(element) => element,
                    None => collection.element.resolve(ctx)?,
                };
                Ok(type_factory.create_collection_type(
                    collection.kind,
                    element,
                    UNBOUNDED_CARDINALITY,
                ))
            }
            TypeNameSpec::Row(row) => {
                let mut fields = Vec::with_capacity(row.fields.len());
                for field in &row.fields {
                    let ty = field.data_type.derive_type(ctx)?;
                    let nullable = field.data_type.nullable().resolve(false);
                    let ty = type_factory.create_type_with_nullability(ty, nullable);
                    fields.push(LogicalField::new(field.name.value.clone(), ty));
                }
                Ok(type_factory.create_struct_type(fields))
            }
        }
    }
}

impl fmt::Display for TypeNameSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TypeNameSpec::Basic(basic) => fmt::Display::fmt(basic, f),
            TypeNameSpec::Collection(collection) => fmt::Display::fmt(collection, f),
            TypeNameSpec::Row(row) => fmt::Display::fmt(row, f),
            TypeNameSpec::UserDefined(udt) => fmt::Display::fmt(udt, f),
        }
    }
}

impl EqualsDeep for TypeNameSpec {
    fn equals_deep(&self, other: &Self) -> Result<(), Mismatch> {
        match (self, other) {
            (TypeNameSpec::Basic(l), TypeNameSpec::Basic(r)) => l.equals_deep(r),
            (TypeNameSpec::Collection(l), TypeNameSpec::Collection(r)) => l.equals_deep(r),
            (TypeNameSpec::Row(l), TypeNameSpec::Row(r)) => l.equals_deep(r),
            (TypeNameSpec::UserDefined(l), TypeNameSpec::UserDefined(r)) => l.equals_deep(r),
            _ => Err(Mismatch::new(MismatchKind::Descriptor, self, other)),
        }
    }
}

impl Spanned for TypeNameSpec {
    fn span(&self) -> Span {
        match self {
            TypeNameSpec::Basic(basic) => basic.span,
            TypeNameSpec::Collection(collection) => collection.span,
            TypeNameSpec::Row(row) => row.span,
            TypeNameSpec::UserDefined(udt) => udt.span,
        }
    }
}

impl From<SqlTypeName> for TypeNameSpec {
    fn from(type_name: SqlTypeName) -> Self {
        TypeNameSpec::Basic(BasicTypeNameSpec::new(type_name))
    }
}

impl From<BasicTypeNameSpec> for TypeNameSpec {
    fn from(basic: BasicTypeNameSpec) -> Self {
        TypeNameSpec::Basic(basic)
    }
}

impl From<CollectionTypeNameSpec> for TypeNameSpec {
    fn from(collection: CollectionTypeNameSpec) -> Self {
        TypeNameSpec::Collection(collection)
    }
}

impl From<RowTypeNameSpec> for TypeNameSpec {
    fn from(row: RowTypeNameSpec) -> Self {
        TypeNameSpec::Row(row)
    }
}

impl From<UserDefinedTypeNameSpec> for TypeNameSpec {
    fn from(udt: UserDefinedTypeNameSpec) -> Self {
        TypeNameSpec::UserDefined(udt)
    }
}

/// A built-in type with optional precision and scale, e.g. `DECIMAL(5, 2)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BasicTypeNameSpec {
    pub type_name: SqlTypeName,
    pub precision: Option<u64>,
    pub scale: Option<u64>,
    pub span: Span,
}

impl BasicTypeNameSpec {
    pub fn new(type_name: SqlTypeName) -> Self {
        BasicTypeNameSpec {
            type_name,
            precision: None,
            scale: None,
            span: Span::empty(),
        }
    }

    pub fn with_precision(mut self, precision: u64) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_scale(mut self, scale: u64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

impl fmt::Display for BasicTypeNameSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.type_name.fmt_with_facets(f, self.precision, self.scale)
    }
}

impl EqualsDeep for BasicTypeNameSpec {
    fn equals_deep(&self, other: &Self) -> Result<(), Mismatch> {
        check_eq(MismatchKind::TypeName, &self.type_name, &other.type_name)?;
        check_eq_opt(MismatchKind::Precision, &self.precision, &other.precision)?;
        check_eq_opt(MismatchKind::Scale, &self.scale, &other.scale)
    }
}

/// `<element> ARRAY` or `<element> MULTISET` used as a type name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CollectionTypeNameSpec {
    pub element: Box<TypeNameSpec>,
    pub kind: CollectionKind,
    pub span: Span,
}

impl CollectionTypeNameSpec {
    pub fn new(element: TypeNameSpec, kind: CollectionKind) -> Self {
        CollectionTypeNameSpec {
            element: Box::new(element),
            kind,
            span: Span::empty(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

impl fmt::Display for CollectionTypeNameSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.element, f)?;
        write!(f, " {}", self.kind)
    }
}

impl EqualsDeep for CollectionTypeNameSpec {
    fn equals_deep(&self, other: &Self) -> Result<(), Mismatch> {
        self.element.equals_deep(&other.element)?;
        check_eq(MismatchKind::TypeName, &self.kind, &other.kind)
    }
}

/// `ROW(<field>, ...)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RowTypeNameSpec {
    pub fields: Vec<RowField>,
    pub span: Span,
}

impl RowTypeNameSpec {
    pub fn new(fields: Vec<RowField>) -> Self {
        RowTypeNameSpec {
            fields,
            span: Span::empty(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// Field types go on their own lines when pretty-printed with `{:#}`
impl fmt::Display for RowTypeNameSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("ROW")?;
        parenthesized_list(f, &self.fields)
    }
}

impl EqualsDeep for RowTypeNameSpec {
    fn equals_deep(&self, other: &Self) -> Result<(), Mismatch> {
        check_eq(
            MismatchKind::FieldCount,
            &self.fields.len(),
            &other.fields.len(),
        )?;
        for (l, r) in self.fields.iter().zip(&other.fields) {
            check_eq(MismatchKind::FieldName, &l.name.value, &r.name.value)?;
            l.data_type.equals_deep(&r.data_type)?;
            check_eq(
                MismatchKind::Nullability,
                &l.data_type.nullable(),
                &r.data_type.nullable(),
            )?;
        }
        Ok(())
    }
}

/// A field of a `ROW` type. The nullability of the field is the
/// nullability of its [`DataTypeSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RowField {
    pub name: Ident,
    pub data_type: DataTypeSpec,
}

impl RowField {
    pub fn new(name: impl Into<Ident>, data_type: DataTypeSpec) -> Self {
        RowField {
            name: name.into(),
            data_type,
        }
    }
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ", self.name)?;
        fmt::Display::fmt(&self.data_type, f)?;
        match self.data_type.nullable() {
            Nullability::Nullable => f.write_str(" NULL"),
            Nullability::NotNull => f.write_str(" NOT NULL"),
            Nullability::Unspecified => Ok(()),
        }
    }
}

impl Spanned for RowField {
    fn span(&self) -> Span {
        self.name.span.union(&self.data_type.span())
    }
}

/// A reference to a user-defined type by its (possibly compound) name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserDefinedTypeNameSpec {
    pub name: ObjectName,
    pub span: Span,
}

impl UserDefinedTypeNameSpec {
    pub fn new(name: impl Into<ObjectName>) -> Self {
        let name = name.into();
        let span = name.span();
        UserDefinedTypeNameSpec { name, span }
    }
}

impl fmt::Display for UserDefinedTypeNameSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl EqualsDeep for UserDefinedTypeNameSpec {
    fn equals_deep(&self, other: &Self) -> Result<(), Mismatch> {
        check_eq(MismatchKind::TypeName, &self.name, &other.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SqlTypeFactory;

    fn int_field(name: &str, nullable: Nullability) -> RowField {
        RowField::new(
            name,
            DataTypeSpec::simple(SqlTypeName::Integer.into(), Span::empty())
                .with_nullable(nullable)
                .into_owned(),
        )
    }

    #[test]
    fn test_basic_display() {
        let decimal = BasicTypeNameSpec::new(SqlTypeName::Decimal)
            .with_precision(5)
            .with_scale(2);
        assert_eq!(decimal.to_string(), "DECIMAL(5, 2)");
        let ts = BasicTypeNameSpec::new(SqlTypeName::TimestampWithLocalTimeZone).with_precision(3);
        assert_eq!(ts.to_string(), "TIMESTAMP(3) WITH LOCAL TIME ZONE");
        assert_eq!(
            TypeNameSpec::from(SqlTypeName::Varchar).type_name(),
            ObjectName::from(Ident::new("VARCHAR"))
        );
    }

    #[test]
    fn test_row_display() {
        let row = TypeNameSpec::from(RowTypeNameSpec::new(vec![
            int_field("a", Nullability::Unspecified),
            int_field("b", Nullability::NotNull),
            int_field("c", Nullability::Nullable),
        ]));
        assert_eq!(row.to_string(), "ROW(a INTEGER, b INTEGER NOT NULL, c INTEGER NULL)");
        assert_eq!(
            format!("{row:#}"),
            "ROW(\n  a INTEGER,\n  b INTEGER NOT NULL,\n  c INTEGER NULL\n)"
        );
        assert_eq!(row.type_name().to_string(), "ROW");
    }

    #[test]
    fn test_collection_display() {
        let nested = TypeNameSpec::from(CollectionTypeNameSpec::new(
            SqlTypeName::Integer.into(),
            CollectionKind::Array,
        ));
        assert_eq!(nested.to_string(), "INTEGER ARRAY");
        assert_eq!(nested.type_name().to_string(), "ARRAY");
    }

    #[test]
    fn test_basic_equals_deep() {
        let l = BasicTypeNameSpec::new(SqlTypeName::Decimal).with_precision(5);
        let r = BasicTypeNameSpec::new(SqlTypeName::Decimal).with_precision(6);
        assert_eq!(l.equals_deep(&l.clone()), Ok(()));
        assert_eq!(l.equals_deep(&r).unwrap_err().kind, MismatchKind::Precision);

        let scaled = l.clone().with_scale(1);
        assert_eq!(l.equals_deep(&scaled).unwrap_err().kind, MismatchKind::Scale);

        let varchar = BasicTypeNameSpec::new(SqlTypeName::Varchar).with_precision(5);
        let mismatch = l.equals_deep(&varchar).unwrap_err();
        assert_eq!(mismatch.kind, MismatchKind::TypeName);
        assert_eq!(mismatch.to_string(), "type name mismatch: DECIMAL != VARCHAR");
    }

    #[test]
    fn test_row_equals_deep() {
        let row = |fields| TypeNameSpec::from(RowTypeNameSpec::new(fields));
        let ab = row(vec![
            int_field("a", Nullability::Unspecified),
            int_field("b", Nullability::Unspecified),
        ]);
        assert_eq!(ab.equals_deep(&ab.clone()), Ok(()));

        let a = row(vec![int_field("a", Nullability::Unspecified)]);
        assert_eq!(ab.equals_deep(&a).unwrap_err().kind, MismatchKind::FieldCount);

        let ac = row(vec![
            int_field("a", Nullability::Unspecified),
            int_field("c", Nullability::Unspecified),
        ]);
        assert_eq!(ab.equals_deep(&ac).unwrap_err().kind, MismatchKind::FieldName);

        let ab_not_null = row(vec![
            int_field("a", Nullability::Unspecified),
            int_field("b", Nullability::NotNull),
        ]);
        assert_eq!(
            ab.equals_deep(&ab_not_null).unwrap_err().kind,
            MismatchKind::Nullability
        );

        let basic = TypeNameSpec::from(SqlTypeName::Integer);
        assert_eq!(ab.equals_deep(&basic).unwrap_err().kind, MismatchKind::Descriptor);
    }

    #[test]
    fn test_derive_row() {
        let factory = SqlTypeFactory::default();
        let row = TypeNameSpec::from(RowTypeNameSpec::new(vec![
            int_field("a", Nullability::Unspecified),
            int_field("b", Nullability::Nullable),
        ]));
        let ty = row.derive_type(&factory).unwrap();
        assert_eq!(ty.to_string(), "ROW(a INTEGER NOT NULL, b INTEGER) NOT NULL");

        let with_udt = TypeNameSpec::from(RowTypeNameSpec::new(vec![RowField::new(
            "i",
            DataTypeSpec::simple(
                UserDefinedTypeNameSpec::new(Ident::new("MYUDT")).into(),
                Span::empty(),
            ),
        )]));
        assert_eq!(with_udt.derive_type(&factory), None);
    }

    #[test]
    fn test_derive_nested_collection() {
        let factory = SqlTypeFactory::default();
        let nested = TypeNameSpec::from(CollectionTypeNameSpec::new(
            SqlTypeName::Boolean.into(),
            CollectionKind::Multiset,
        ));
        let ty = nested.derive_type(&factory).unwrap();
        assert_eq!(ty.sql_type_name(), SqlTypeName::Multiset);
        assert_eq!(ty.max_cardinality(), Some(UNBOUNDED_CARDINALITY));

        let udt = TypeNameSpec::from(UserDefinedTypeNameSpec::new(Ident::new("MYUDT")));
        assert_eq!(udt.derive_type(&factory), None);
    }

    #[test]
    fn test_spans() {
        use crate::location::Location;

        let at = |start, end| Span::new(Location::new(1, start), Location::new(1, end));

        let basic =
            TypeNameSpec::from(BasicTypeNameSpec::new(SqlTypeName::Date).with_span(at(1, 5)));
        assert_eq!(basic.span().start, Location::new(1, 1));
        assert_eq!(only_ident(&basic).span.end, Location::new(1, 5));

        let collection = TypeNameSpec::from(
            CollectionTypeNameSpec::new(basic.clone(), CollectionKind::Array).with_span(at(1, 11)),
        );
        assert_eq!(collection.span().end, Location::new(1, 11));
        assert_eq!(only_ident(&collection).span.start, Location::new(1, 1));

        let row = TypeNameSpec::from(
            RowTypeNameSpec::new(vec![int_field("a", Nullability::Unspecified)])
                .with_span(at(3, 20)),
        );
        assert_eq!(row.span().start, Location::new(1, 3));
        assert_eq!(only_ident(&row).span.end, Location::new(1, 20));

        let udt = TypeNameSpec::from(UserDefinedTypeNameSpec::new(Ident::with_span(
            at(4, 9),
            "MYUDT",
        )));
        assert_eq!(udt.span().start, Location::new(1, 4));
    }

    fn only_ident(type_name_spec: &TypeNameSpec) -> Ident {
        crate::test_utils::only(type_name_spec.type_name().0)
    }
}
