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

//! Source positions attached to AST nodes and validation errors.

use core::cmp::Ordering;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Location in input string
#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Line number, starting from 1.
    ///
    /// Note: Line 0 is used for empty spans
    pub line: u64,
    /// Line column, starting from 1.
    ///
    /// Note: Column 0 is used for empty spans
    pub column: u64,
}

impl Location {
    /// Return an "empty" / default location
    pub const fn empty() -> Self {
        Self { line: 0, column: 0 }
    }

    /// Create a new `Location` for a given line and column
    pub const fn new(line: u64, column: u64) -> Self {
        Self { line, column }
    }

    pub fn valid(&self) -> bool {
        self.line > 0 && self.column > 0
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.line == other.line {
            self.column.cmp(&other.column)
        } else {
            self.line.cmp(&other.line)
        }
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.line == 0 {
            return Ok(());
        }
        write!(f, " at Line: {}, Column: {}", self.line, self.column)
    }
}

impl From<(u64, u64)> for Location {
    fn from((line, column): (u64, u64)) -> Self {
        Self { line, column }
    }
}

/// A span of source text, from `start` (inclusive) to `end` (exclusive).
///
/// Spans never take part in AST comparisons: all spans are equal and hash to
/// the same value, so two nodes parsed from different places compare equal
/// when their contents do. Compare [`Span::start`] and [`Span::end`] directly
/// to check positions.
#[derive(Debug, Clone, Copy, Default, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

/// All spans are equal
impl PartialEq for Span {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

/// All spans hash to the same value
impl core::hash::Hash for Span {
    fn hash<H: core::hash::Hasher>(&self, _: &mut H) {}
}

impl Span {
    const EMPTY: Span = Self::empty();

    pub const fn new(start: Location, end: Location) -> Span {
        Span { start, end }
    }

    /// Returns an empty span `(0, 0) -> (0, 0)`.
    ///
    /// Empty spans represent no knowledge of source location.
    pub const fn empty() -> Span {
        Span {
            start: Location::empty(),
            end: Location::empty(),
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.start.valid() && !self.end.valid()
    }

    /// Returns the smallest span that contains both `self` and `other`.
    /// If either span is empty, the other span is returned.
    pub fn union(&self, other: &Span) -> Span {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Span {
            start: core::cmp::min(self.start, other.start),
            end: core::cmp::max(self.end, other.end),
        }
    }

    /// Returns the union of all spans in the iterator, or an empty span for
    /// an empty iterator.
    pub fn union_iter<I: IntoIterator<Item = Span>>(iter: I) -> Span {
        iter.into_iter()
            .reduce(|acc, item| acc.union(&item))
            .unwrap_or(Span::EMPTY)
    }
}

impl From<(Location, Location)> for Span {
    fn from((start, end): (Location, Location)) -> Self {
        Span::new(start, end)
    }
}

/// A trait for AST nodes that have a source location information.
pub trait Spanned {
    /// Return the [`Span`] (the minimum and maximum [`Location`]) for this
    /// node, recursively including all of its children.
    fn span(&self) -> Span;
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union() {
        let a = Span::new((1, 1).into(), (1, 5).into());
        let b = Span::new((1, 3).into(), (2, 1).into());
        let c = a.union(&b);
        assert_eq!(c.start, Location::new(1, 1));
        assert_eq!(c.end, Location::new(2, 1));
    }

    #[test]
    fn test_union_with_empty() {
        let a = Span::new((3, 7).into(), (3, 14).into());
        let u = Span::empty().union(&a);
        assert_eq!((u.start, u.end), (a.start, a.end));
        let u = a.union(&Span::empty());
        assert_eq!((u.start, u.end), (a.start, a.end));
        assert!(Span::union_iter(Vec::new()).is_empty());
    }

    #[test]
    fn test_location_display() {
        assert_eq!(Location::new(2, 9).to_string(), " at Line: 2, Column: 9");
        assert_eq!(Location::empty().to_string(), "");
    }
}
