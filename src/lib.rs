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

//! # SQL data type specifications
//!
//! This crate models the data type specification that appears in SQL
//! statements such as `CAST(x AS INTEGER)`, column definitions
//! (`foo DECIMAL(5, 2) NOT NULL`) or nested row types
//! (`ROW(b BOOLEAN, i MYUDT NOT NULL)`), and derives such a specification
//! into a concrete [`LogicalType`](types::LogicalType).
//!
//! A [`DataTypeSpec`](ast::DataTypeSpec) can be:
//!
//! 1. rendered back to SQL text with [`Display`](core::fmt::Display),
//! 2. compared structurally with [`EqualsDeep`](ast::EqualsDeep),
//! 3. derived into a logical type, either against a bare
//!    [`TypeFactory`](types::TypeFactory) or against a
//!    [`ResolutionContext`](validator::ResolutionContext) that also knows
//!    about user-defined types.
//!
//! # Example
//!
//! ```
//! use sqltypespec::ast::{BasicTypeNameSpec, DataTypeSpec, Ident, Nullability, SqlTypeName};
//! use sqltypespec::location::Span;
//! use sqltypespec::types::SqlTypeFactory;
//!
//! let spec = DataTypeSpec::collection(
//!     Ident::new("ARRAY"),
//!     BasicTypeNameSpec::new(SqlTypeName::Boolean).into(),
//!     Span::empty(),
//! );
//! assert_eq!(spec.to_string(), "BOOLEAN ARRAY");
//!
//! let factory = SqlTypeFactory::default();
//! let ty = spec
//!     .with_nullable(Nullability::NotNull)
//!     .derive_type_with_factory(&factory)
//!     .unwrap();
//! assert_eq!(ty.to_string(), "BOOLEAN NOT NULL ARRAY NOT NULL");
//! ```
//!
//! # Features
//!
//! * `std` (default): implements [`std::error::Error`] for the error types.
//!   Without it the crate is `no_std` and only needs `alloc`.
//! * `serde`: derives `Serialize` and `Deserialize` for every AST node and
//!   logical type.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::upper_case_acronyms)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod ast;
mod display_utils;
pub mod location;
pub mod types;
pub mod validator;

#[doc(hidden)]
// This is required to make utilities accessible by both the crate-internal
// unit-tests and by the integration tests <https://stackoverflow.com/a/44541071/1026>
// External users are not supposed to rely on this module.
pub mod test_utils;
