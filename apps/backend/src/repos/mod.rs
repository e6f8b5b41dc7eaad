//! Repository functions for the domain layer.
//!
//! Reads are generic over `ConnectionTrait`; writes take the request's
//! transaction. Everything returns `DomainError`.

pub mod games;
pub mod guesses;
pub mod phrases;
pub mod rounds;
pub mod teams;

use crate::adapters::PageRows;
use crate::errors::domain::{DomainError, ValidationKind};

pub const DEFAULT_PER_PAGE: u64 = 20;
pub const MAX_PER_PAGE: u64 = 10_000;

/// One page of domain values with totals for the whole listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub(crate) fn from_rows<M>(rows: PageRows<M>) -> Self
    where
        M: Into<T>,
    {
        Self {
            items: rows.items.into_iter().map(Into::into).collect(),
            total_items: rows.total_items,
            total_pages: rows.total_pages,
        }
    }
}

/// Validated 1-based paging request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    /// Reject paging the database cannot serve. The row offset
    /// `(page - 1) * per_page` must fit a signed 64-bit bind parameter.
    pub fn validate(self) -> Result<Self, DomainError> {
        if self.page == 0 {
            return Err(DomainError::validation(
                ValidationKind::Pagination,
                "page must be at least 1",
            ));
        }
        if !(1..=MAX_PER_PAGE).contains(&self.per_page) {
            return Err(DomainError::validation(
                ValidationKind::Pagination,
                format!("per_page must be between 1 and {MAX_PER_PAGE}"),
            ));
        }
        match (self.page - 1).checked_mul(self.per_page) {
            Some(offset) if offset <= i64::MAX as u64 => Ok(self),
            _ => Err(DomainError::validation(
                ValidationKind::Pagination,
                "page is out of range",
            )),
        }
    }
}
