//! Query AST structures
//!
//! The parsed representation handed to the planner. tableql never parses
//! SQL text; a parser (or the host) builds these values directly.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::value::{CompareOp, Value};

/// One entry of the selected-column list, or an operand of a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Column {
    /// Field reference: `c1`
    Field(String),
    /// Function call: `concat(c2, 'string')`
    Function { name: String, args: Vec<Column> },
    /// Literal: `10`, `'text'`, `true`
    Literal(Value),
    /// `*`, expanded to every registered field of the table
    Wildcard,
}

impl Column {
    pub fn field(name: impl Into<String>) -> Self {
        Column::Field(name.into())
    }

    pub fn function(name: impl Into<String>, args: Vec<Column>) -> Self {
        Column::Function {
            name: name.into(),
            args,
        }
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        Column::Literal(value.into())
    }

    /// Returns true for `*`
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Column::Wildcard)
    }
}

/// Boolean connective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        }
    }
}

/// WHERE expression tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    /// Bare field used as a condition: `WHERE c3`
    Field(String),
    /// `left op right`
    Compare {
        op: CompareOp,
        left: Column,
        right: Column,
    },
    /// `field IS NULL`
    IsNull(String),
    /// `a AND b AND ...` / `a OR b OR ...`
    Logical {
        op: LogicalOp,
        children: Vec<Predicate>,
    },
    /// `WHERE true`
    Literal(bool),
}

impl Predicate {
    pub fn field(name: impl Into<String>) -> Self {
        Predicate::Field(name.into())
    }

    pub fn compare(op: CompareOp, left: Column, right: Column) -> Self {
        Predicate::Compare { op, left, right }
    }

    /// `field = value`
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(CompareOp::Eq, Column::field(field), Column::literal(value))
    }

    /// `field > value`
    pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(CompareOp::Gt, Column::field(field), Column::literal(value))
    }

    /// `field < value`
    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(CompareOp::Lt, Column::field(field), Column::literal(value))
    }

    /// `field >= value`
    pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(CompareOp::Gte, Column::field(field), Column::literal(value))
    }

    /// `field <= value`
    pub fn lte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(CompareOp::Lte, Column::field(field), Column::literal(value))
    }

    /// `field LIKE 'pattern'`
    pub fn like(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::compare(
            CompareOp::Like,
            Column::field(field),
            Column::Literal(Value::String(pattern.into())),
        )
    }

    pub fn is_null(field: impl Into<String>) -> Self {
        Predicate::IsNull(field.into())
    }

    pub fn and(children: Vec<Predicate>) -> Self {
        Predicate::Logical {
            op: LogicalOp::And,
            children,
        }
    }

    pub fn or(children: Vec<Predicate>) -> Self {
        Predicate::Logical {
            op: LogicalOp::Or,
            children,
        }
    }

    pub fn literal(value: bool) -> Self {
        Predicate::Literal(value)
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Sort specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Field to sort by
    pub field: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Pagination window: skip `offset` rows, then keep at most `count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub offset: usize,
    pub count: usize,
}

impl Pagination {
    /// `LIMIT n`
    pub fn limit(count: usize) -> Self {
        Self { offset: 0, count }
    }

    /// `LIMIT o, n`
    pub fn offset_limit(offset: usize, count: usize) -> Self {
        Self { offset, count }
    }

    /// Index range selected out of `len` rows. Empty when `offset >= len`.
    pub fn window(&self, len: usize) -> Range<usize> {
        let start = self.offset.min(len);
        let end = start.saturating_add(self.count).min(len);
        start..end
    }
}

/// Parsed query AST
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Target table name
    pub table: String,
    /// Selected columns, in output order
    pub columns: Vec<Column>,
    /// WHERE tree
    pub predicate: Option<Predicate>,
    /// ORDER BY (single field)
    pub sort: Option<SortSpec>,
    /// LIMIT window
    pub pagination: Option<Pagination>,
}

impl Query {
    /// Creates a query with no columns selected
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            predicate: None,
            sort: None,
            pagination: None,
        }
    }

    /// `SELECT * FROM table`
    pub fn select_all(table: impl Into<String>) -> Self {
        Self::new(table).with_column(Column::Wildcard)
    }

    /// Appends a selected column
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Appends field references for each name
    pub fn with_fields<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.columns.extend(names.into_iter().map(Column::field));
        self
    }

    /// Sets the WHERE tree
    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Sets the sort specification
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// `LIMIT n`
    pub fn with_limit(mut self, count: usize) -> Self {
        self.pagination = Some(Pagination::limit(count));
        self
    }

    /// `LIMIT o, n`
    pub fn with_offset_limit(mut self, offset: usize, count: usize) -> Self {
        self.pagination = Some(Pagination::offset_limit(offset, count));
        self
    }
}
