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
use alloc::borrow::Cow;
use core::fmt::{self, Write};
#[cfg(feature = "std")]
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::equality::check_eq_opt;
use super::{CollectionKind, EqualsDeep, Ident, Mismatch, MismatchKind, ObjectName, TimeZone};
use super::{TypeNameSpec, UserDefinedTypeNameSpec};
use crate::location::{Span, Spanned};
use crate::types::{LogicalType, TypeFactory, UNBOUNDED_CARDINALITY};
use crate::validator::{ResolutionContext, ValidationError, ValidationErrorKind};

/// Whether a type specification admits `NULL`.
///
/// `Unspecified` is distinct from both other values: it means the
/// nullability is inherited from the context, e.g. a `CAST` keeps the
/// nullability of its operand.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Nullability {
    /// `NULL`
    Nullable,
    /// `NOT NULL`
    NotNull,
    #[default]
    Unspecified,
}

impl Nullability {
    /// Collapses to a `bool`, using `default` when unspecified
    pub fn resolve(self, default: bool) -> bool {
        match self {
            Nullability::Nullable => true,
            Nullability::NotNull => false,
            Nullability::Unspecified => default,
        }
    }

    pub fn as_bool(self) -> Option<bool> {
        match self {
            Nullability::Nullable => Some(true),
            Nullability::NotNull => Some(false),
            Nullability::Unspecified => None,
        }
    }
}

impl From<bool> for Nullability {
    fn from(nullable: bool) -> Self {
        if nullable {
            Nullability::Nullable
        } else {
            Nullability::NotNull
        }
    }
}

impl From<Option<bool>> for Nullability {
    fn from(nullable: Option<bool>) -> Self {
        nullable.map_or(Nullability::Unspecified, Nullability::from)
    }
}

impl fmt::Display for Nullability {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Nullability::Nullable => "NULL",
            Nullability::NotNull => "NOT NULL",
            Nullability::Unspecified => "unspecified",
        })
    }
}

/// The specification of a data type, as in `CAST(x AS INTEGER)`, a column
/// definition `foo DECIMAL(5, 2) NOT NULL` or a row field
/// `ROW(i MYUDT NOT NULL)`.
///
/// A specification is either a plain type name, optionally with a time
/// zone, or a collection (`INTEGER ARRAY`, `VARCHAR(5) MULTISET`). It is
/// immutable: methods such as [`DataTypeSpec::with_nullable`] return a new
/// node.
///
/// # Example
///
/// ```
/// use sqltypespec::ast::{DataTypeSpec, Nullability, SqlTypeName};
/// use sqltypespec::location::Span;
/// use sqltypespec::types::SqlTypeFactory;
///
/// let spec = DataTypeSpec::simple(SqlTypeName::Integer.into(), Span::empty());
/// let factory = SqlTypeFactory::default();
///
/// let ty = spec.derive_type_with_nullability(&factory, true).unwrap();
/// assert!(ty.is_nullable());
///
/// let not_null = spec.with_nullable(Nullability::NotNull);
/// let ty = not_null.derive_type_with_nullability(&factory, true).unwrap();
/// assert!(!ty.is_nullable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DataTypeSpec {
    /// `ARRAY` or `MULTISET` if this is a collection
    collection_type_name: Option<Ident>,
    type_name_spec: TypeNameSpec,
    base_type_name_spec: TypeNameSpec,
    time_zone: Option<TimeZone>,
    nullable: Nullability,
    span: Span,
}

impl DataTypeSpec {
    /// Creates a specification from all of its parts. A missing
    /// `base_type_name_spec` defaults to `type_name_spec`.
    pub fn new(
        collection_type_name: Option<Ident>,
        type_name_spec: TypeNameSpec,
        base_type_name_spec: Option<TypeNameSpec>,
        time_zone: Option<TimeZone>,
        nullable: Nullability,
        span: Span,
    ) -> Self {
        let base_type_name_spec = base_type_name_spec.unwrap_or_else(|| type_name_spec.clone());
        DataTypeSpec {
            collection_type_name,
            type_name_spec,
            base_type_name_spec,
            time_zone,
            nullable,
            span,
        }
    }

    /// A plain type name, e.g. `INTEGER`
    pub fn simple(type_name_spec: TypeNameSpec, span: Span) -> Self {
        Self::new(None, type_name_spec, None, None, Nullability::Unspecified, span)
    }

    /// A plain type name with a time zone
    pub fn with_time_zone(
        type_name_spec: TypeNameSpec,
        time_zone: Option<TimeZone>,
        span: Span,
    ) -> Self {
        Self::new(None, type_name_spec, None, time_zone, Nullability::Unspecified, span)
    }

    /// A collection of `type_name_spec`, e.g. `BOOLEAN ARRAY`
    pub fn collection(
        collection_type_name: Ident,
        type_name_spec: TypeNameSpec,
        span: Span,
    ) -> Self {
        Self::new(
            Some(collection_type_name),
            type_name_spec,
            None,
            None,
            Nullability::Unspecified,
            span,
        )
    }

    /// All parts except the base type name, which defaults to `type_name_spec`
    pub fn without_base(
        collection_type_name: Option<Ident>,
        type_name_spec: TypeNameSpec,
        time_zone: Option<TimeZone>,
        nullable: Nullability,
        span: Span,
    ) -> Self {
        Self::new(collection_type_name, type_name_spec, None, time_zone, nullable, span)
    }

    pub fn builder(type_name_spec: TypeNameSpec) -> DataTypeSpecBuilder {
        DataTypeSpecBuilder::new(type_name_spec)
    }

    /// The `ARRAY` or `MULTISET` keyword of a collection
    pub fn collection_type_name(&self) -> Option<&Ident> {
        self.collection_type_name.as_ref()
    }

    pub fn is_collection(&self) -> bool {
        self.collection_type_name.is_some()
    }

    /// The name of the type, without any collection keyword
    pub fn type_name(&self) -> ObjectName {
        self.type_name_spec.type_name()
    }

    pub fn type_name_spec(&self) -> &TypeNameSpec {
        &self.type_name_spec
    }

    pub fn base_type_name_spec(&self) -> &TypeNameSpec {
        &self.base_type_name_spec
    }

    pub fn time_zone(&self) -> Option<&TimeZone> {
        self.time_zone.as_ref()
    }

    pub fn nullable(&self) -> Nullability {
        self.nullable
    }

    /// Returns a specification with the given nullability. The result
    /// borrows `self` if the nullability is already `nullable`.
    pub fn with_nullable(&self, nullable: Nullability) -> Cow<'_, DataTypeSpec> {
        if self.nullable == nullable {
            return Cow::Borrowed(self);
        }
        Cow::Owned(DataTypeSpec {
            nullable,
            ..self.clone()
        })
    }

    /// The specification of the element type of a collection.
    ///
    /// # Panics
    ///
    /// Panics if this specification is not a collection.
    pub fn component_type_spec(&self) -> DataTypeSpec {
        assert!(
            self.is_collection(),
            "component_type_spec called on non-collection type {self}"
        );
        DataTypeSpec::with_time_zone(
            self.type_name_spec.clone(),
            self.time_zone.clone(),
            self.span,
        )
    }

    /// Copies the specification to a new position. The nullability is not
    /// carried over.
    pub fn clone_at(&self, span: Span) -> DataTypeSpec {
        match &self.collection_type_name {
            Some(collection_type_name) => DataTypeSpec::collection(
                collection_type_name.clone(),
                self.type_name_spec.clone(),
                span,
            ),
            None => DataTypeSpec::with_time_zone(
                self.type_name_spec.clone(),
                self.time_zone.clone(),
                span,
            ),
        }
    }

    /// Derives the type, falling back to the user-defined types known to
    /// `ctx` when the name is not a built-in type.
    ///
    /// Fails with [`ValidationErrorKind::UnknownDatatypeName`] if the
    /// collection keyword is not `ARRAY` or `MULTISET`, before the element
    /// type is looked at. A name that is neither built-in nor known to `ctx`
    /// fails with the error `ctx` reports for it.
    ///
    /// A bare user-defined type name is returned as registered, without this
    /// specification's nullability. A `ROW` or nested collection that is
    /// assembled from resolved parts gets the nullability, as it does on the
    /// built-in path.
    ///
    /// A built-in name with a precision or scale it does not take, e.g.
    /// `INTEGER(5)`, fails with [`ValidationErrorKind::UnknownType`] naming
    /// the whole descriptor.
    pub fn derive_type(
        &self,
        ctx: &dyn ResolutionContext,
    ) -> Result<LogicalType, ValidationError> {
        let collection_kind = self.validate_collection_type_names(ctx)?;
        let type_factory = ctx.type_factory();
        if let Some(ty) = self.derive_type_with_factory(type_factory) {
            return Ok(ty);
        }

        log::debug!(
            "{} is not a built-in type, resolving as user-defined type",
            self.type_name()
        );
        let mut ty = self.type_name_spec.resolve(ctx)?;
        if let Some(kind) = collection_kind {
            ty = type_factory.create_collection_type(kind, ty, UNBOUNDED_CARDINALITY);
        }
        Ok(match self.type_name_spec {
            TypeNameSpec::Row(_) | TypeNameSpec::Collection(_) => {
                type_factory.create_type_with_nullability(ty, self.nullable.resolve(false))
            }
            TypeNameSpec::Basic(_) | TypeNameSpec::UserDefined(_) => ty,
        })
    }

    /// Same as [`DataTypeSpec::derive_type_with_nullability`] with a
    /// default nullability of `false`
    pub fn derive_type_with_factory(&self, type_factory: &dyn TypeFactory) -> Option<LogicalType> {
        self.derive_type_with_nullability(type_factory, false)
    }

    /// Derives the type from built-in types only.
    ///
    /// Returns `None` if the type name is not built-in; no collection or
    /// nullability is applied in that case. Otherwise the type is wrapped in
    /// its collection (with unbounded cardinality) and gets the nullability
    /// of this specification, or `nullable` if that is unspecified.
    ///
    /// # Panics
    ///
    /// Panics if the collection keyword is not `ARRAY` or `MULTISET`.
    /// [`DataTypeSpec::derive_type`] reports such a keyword as an error
    /// instead.
    pub fn derive_type_with_nullability(
        &self,
        type_factory: &dyn TypeFactory,
        nullable: bool,
    ) -> Option<LogicalType> {
        let mut ty = self.type_name_spec.derive_type(type_factory)?;
        if let Some(collection_type_name) = &self.collection_type_name {
            let Some(kind) = CollectionKind::from_keyword(&collection_type_name.value) else {
                panic!(
                    "unexpected value: collection type name {}",
                    collection_type_name.value
                );
            };
            ty = type_factory.create_collection_type(kind, ty, UNBOUNDED_CARDINALITY);
        }
        Some(type_factory.create_type_with_nullability(ty, self.nullable.resolve(nullable)))
    }

    /// Checks the collection keyword of this specification and of every
    /// specification nested in it, returning the collection kind of this one.
    fn validate_collection_type_names(
        &self,
        ctx: &dyn ResolutionContext,
    ) -> Result<Option<CollectionKind>, ValidationError> {
        let kind = self
            .collection_type_name
            .as_ref()
            .map(|name| {
                CollectionKind::from_keyword(&name.value).ok_or_else(|| {
                    ctx.new_validation_error(
                        self.span,
                        ValidationErrorKind::UnknownDatatypeName(name.value.clone()),
                    )
                })
            })
            .transpose()?;
        validate_nested_collection_type_names(&self.type_name_spec, ctx)?;
        Ok(kind)
    }
}

fn validate_nested_collection_type_names(
    type_name_spec: &TypeNameSpec,
    ctx: &dyn ResolutionContext,
) -> Result<(), ValidationError> {
    match type_name_spec {
        TypeNameSpec::Row(row) => {
            for field in &row.fields {
                field.data_type.validate_collection_type_names(ctx)?;
            }
            Ok(())
        }
        TypeNameSpec::Collection(collection) => {
            validate_nested_collection_type_names(&collection.element, ctx)
        }
        TypeNameSpec::Basic(_) | TypeNameSpec::UserDefined(_) => Ok(()),
    }
}

/// Renders the type name followed by the collection keyword, if any.
/// Nullability is not part of the rendering.
impl fmt::Display for DataTypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.type_name_spec, f)?;
        if let Some(collection_type_name) = &self.collection_type_name {
            f.write_char(' ')?;
            for c in collection_type_name.value.chars() {
                f.write_char(c.to_ascii_uppercase())?;
            }
        }
        Ok(())
    }
}

/// Compares the time zone, the collection keyword and the type name, in that
/// order. Nullability and spans are ignored.
impl EqualsDeep for DataTypeSpec {
    fn equals_deep(&self, other: &Self) -> Result<(), Mismatch> {
        check_eq_opt(MismatchKind::TimeZone, &self.time_zone, &other.time_zone)?;
        check_eq_opt(
            MismatchKind::CollectionTypeName,
            &self.collection_type_name,
            &other.collection_type_name,
        )?;
        self.type_name_spec.equals_deep(&other.type_name_spec)
    }
}

impl Spanned for DataTypeSpec {
    fn span(&self) -> Span {
        self.span
    }
}

impl From<ObjectName> for DataTypeSpec {
    fn from(name: ObjectName) -> Self {
        let span = name.span();
        DataTypeSpec::simple(UserDefinedTypeNameSpec::new(name).into(), span)
    }
}

/// Builder for [`DataTypeSpec`].
///
/// # Example
/// ```rust
/// use sqltypespec::ast::{DataTypeSpec, Ident, Nullability, SqlTypeName};
///
/// let spec = DataTypeSpec::builder(SqlTypeName::Varchar.into())
///     .collection_type_name(Ident::new("MULTISET"))
///     .nullable(Nullability::NotNull)
///     .build();
/// assert!(spec.is_collection());
/// assert_eq!(spec.to_string(), "VARCHAR MULTISET");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DataTypeSpecBuilder {
    pub collection_type_name: Option<Ident>,
    pub type_name_spec: TypeNameSpec,
    pub base_type_name_spec: Option<TypeNameSpec>,
    pub time_zone: Option<TimeZone>,
    pub nullable: Nullability,
    pub span: Span,
}

impl DataTypeSpecBuilder {
    pub fn new(type_name_spec: TypeNameSpec) -> Self {
        Self {
            collection_type_name: None,
            type_name_spec,
            base_type_name_spec: None,
            time_zone: None,
            nullable: Nullability::Unspecified,
            span: Span::empty(),
        }
    }

    pub fn collection_type_name(mut self, collection_type_name: Ident) -> Self {
        self.collection_type_name = Some(collection_type_name);
        self
    }

    pub fn base_type_name_spec(mut self, base_type_name_spec: TypeNameSpec) -> Self {
        self.base_type_name_spec = Some(base_type_name_spec);
        self
    }

    pub fn time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = Some(time_zone);
        self
    }

    pub fn nullable(mut self, nullable: impl Into<Nullability>) -> Self {
        self.nullable = nullable.into();
        self
    }

    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn build(self) -> DataTypeSpec {
        DataTypeSpec::new(
            self.collection_type_name,
            self.type_name_spec,
            self.base_type_name_spec,
            self.time_zone,
            self.nullable,
            self.span,
        )
    }
}

impl From<DataTypeSpec> for DataTypeSpecBuilder {
    fn from(spec: DataTypeSpec) -> Self {
        DataTypeSpecBuilder {
            collection_type_name: spec.collection_type_name,
            type_name_spec: spec.type_name_spec,
            base_type_name_spec: Some(spec.base_type_name_spec),
            time_zone: spec.time_zone,
            nullable: spec.nullable,
            span: spec.span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BasicTypeNameSpec, SqlTypeName};
    use crate::location::Location;
    use crate::types::SqlTypeFactory;

    fn integer() -> DataTypeSpec {
        DataTypeSpec::simple(SqlTypeName::Integer.into(), Span::empty())
    }

    #[test]
    fn test_nullability_resolve() {
        assert!(Nullability::Unspecified.resolve(true));
        assert!(!Nullability::Unspecified.resolve(false));
        assert!(Nullability::Nullable.resolve(false));
        assert!(!Nullability::NotNull.resolve(true));
        assert_eq!(Nullability::from(Some(false)), Nullability::NotNull);
        assert_eq!(Nullability::from(None), Nullability::Unspecified);
        assert_eq!(Nullability::default().as_bool(), None);
    }

    #[test]
    fn test_base_type_name_defaults_to_type_name() {
        let spec = integer();
        assert_eq!(spec.base_type_name_spec(), spec.type_name_spec());

        let varchar = TypeNameSpec::from(SqlTypeName::Varchar);
        let spec = DataTypeSpec::builder(SqlTypeName::Char.into())
            .base_type_name_spec(varchar.clone())
            .build();
        assert_eq!(spec.base_type_name_spec(), &varchar);
        assert_eq!(spec.type_name().to_string(), "CHAR");
    }

    #[test]
    fn test_with_nullable_borrows_when_unchanged() {
        let spec = integer();
        match spec.with_nullable(Nullability::Unspecified) {
            Cow::Borrowed(same) => assert!(core::ptr::eq(same, &spec)),
            Cow::Owned(_) => panic!("expected the same instance"),
        }

        let not_null = spec.with_nullable(Nullability::NotNull).into_owned();
        assert_eq!(not_null.nullable(), Nullability::NotNull);
        assert_eq!(not_null.type_name_spec(), spec.type_name_spec());
        assert_eq!(not_null.base_type_name_spec(), spec.base_type_name_spec());
        assert!(not_null.equals_deep(&spec).is_ok());
    }

    #[test]
    fn test_display_uppercases_collection_keyword() {
        let spec = DataTypeSpec::collection(
            Ident::new("multiset"),
            BasicTypeNameSpec::new(SqlTypeName::Decimal)
                .with_precision(5)
                .with_scale(2)
                .into(),
            Span::empty(),
        );
        assert_eq!(spec.to_string(), "DECIMAL(5, 2) MULTISET");
        assert_eq!(integer().to_string(), "INTEGER");
    }

    #[test]
    fn test_clone_at_drops_nullability() {
        let spec = DataTypeSpec::without_base(
            None,
            SqlTypeName::Timestamp.into(),
            Some(TimeZone::utc()),
            Nullability::NotNull,
            Span::empty(),
        );
        let copy = spec.clone_at(Span::new((2, 1).into(), (2, 10).into()));
        assert_eq!(copy.time_zone(), Some(&TimeZone::utc()));
        assert_eq!(copy.nullable(), Nullability::Unspecified);
        assert_eq!(copy.span().start, Location::new(2, 1));
        assert!(copy.is_equal_deep(&spec));

        let array = DataTypeSpec::collection(
            Ident::new("ARRAY"),
            SqlTypeName::Boolean.into(),
            Span::empty(),
        );
        assert!(array.clone_at(Span::empty()).is_collection());
    }

    #[test]
    #[should_panic(expected = "non-collection")]
    fn test_component_type_spec_requires_collection() {
        integer().component_type_spec();
    }

    #[test]
    #[should_panic(expected = "unexpected value")]
    fn test_unknown_collection_keyword_panics_in_factory_path() {
        let spec = DataTypeSpec::collection(
            Ident::new("FOOBAR"),
            SqlTypeName::Boolean.into(),
            Span::empty(),
        );
        spec.derive_type_with_factory(&SqlTypeFactory::default());
    }

    #[test]
    fn test_derive_unknown_name_is_none() {
        let factory = SqlTypeFactory::default();
        let spec = DataTypeSpec::from(ObjectName::from(Ident::new("MYUDT")))
            .with_nullable(Nullability::NotNull)
            .into_owned();
        assert_eq!(spec.derive_type_with_nullability(&factory, true), None);

        let array = DataTypeSpec::collection(
            Ident::new("ARRAY"),
            UserDefinedTypeNameSpec::new(Ident::new("MYUDT")).into(),
            Span::empty(),
        );
        assert_eq!(array.derive_type_with_factory(&factory), None);
    }

    #[test]
    fn test_builder_round_trip() {
        let spec = DataTypeSpec::builder(SqlTypeName::Time.into())
            .time_zone(TimeZone::new("America/Los_Angeles"))
            .nullable(true)
            .build();
        let rebuilt = DataTypeSpecBuilder::from(spec.clone()).build();
        assert_eq!(rebuilt, spec);
        assert_eq!(rebuilt.nullable(), Nullability::Nullable);
    }
}
