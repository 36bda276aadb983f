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

use criterion::{criterion_group, criterion_main, Criterion};
use sqltypespec::ast::{Nullability, SqlTypeName};
use sqltypespec::test_utils::{array_of, basic, row, spec, udt, validator_with_types};
use sqltypespec::types::SqlTypeFactory;

fn derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqltypespec derivation benchmark");
    let factory = SqlTypeFactory::default();
    let validator = validator_with_types(&[("MYUDT", SqlTypeName::Integer)]);

    let integer = spec(basic(SqlTypeName::Integer), Nullability::NotNull);
    group.bench_function("sqltypespec::basic", |b| {
        b.iter(|| integer.derive_type_with_nullability(&factory, true));
    });

    let array = array_of(basic(SqlTypeName::Boolean));
    group.bench_function("sqltypespec::array", |b| {
        b.iter(|| array.derive_type_with_factory(&factory));
    });

    let nested = spec(
        row([
            ("b", spec(basic(SqlTypeName::Boolean), Nullability::Unspecified)),
            ("i", spec(udt("MYUDT"), Nullability::NotNull)),
        ]),
        Nullability::Unspecified,
    );
    group.bench_function("sqltypespec::row_with_udt", |b| {
        b.iter(|| validator.validate_data_type(&nested));
    });
}

criterion_group!(benches, derivation);
criterion_main!(benches);
