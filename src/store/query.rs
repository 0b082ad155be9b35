use std::cmp::Ordering;

use crate::store::document::Document;
use crate::store::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Equal,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl FilterOp {
    fn accepts(self, ordering: Ordering) -> bool {
        match self {
            FilterOp::Equal => ordering == Ordering::Equal,
            FilterOp::LessThan => ordering == Ordering::Less,
            FilterOp::LessThanOrEqual => ordering != Ordering::Greater,
            FilterOp::GreaterThan => ordering == Ordering::Greater,
            FilterOp::GreaterThanOrEqual => ordering != Ordering::Less,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub op: FilterOp,
    pub value: Value,
}

impl Filter {
    /// A document without the field never matches.
    pub fn matches(&self, doc: &Document) -> bool {
        doc.get(&self.field)
            .and_then(|actual| actual.compare(&self.value))
            .map(|ordering| self.op.accepts(ordering))
            .unwrap_or(false)
    }
}

/// A collection query: AND-ed filters and an optional result limit.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub collection: String,
    pub filters: Vec<Filter>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn collection(name: impl Into<String>) -> Self {
        Self {
            collection: name.into(),
            filters: Vec::new(),
            limit: None,
        }
    }

    pub fn where_eq(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.where_op(field, FilterOp::Equal, value)
    }

    pub fn where_op(
        mut self,
        field: impl Into<String>,
        op: FilterOp,
        value: impl Into<Value>,
    ) -> Self {
        self.filters.push(Filter {
            field: field.into(),
            op,
            value: value.into(),
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, doc: &Document) -> bool {
        self.filters.iter().all(|f| f.matches(doc))
    }
}
