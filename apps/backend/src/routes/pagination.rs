//! `?page=&per_page=` parsing and the paged response envelope.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::{Page, PageRequest, DEFAULT_PER_PAGE};

#[derive(Debug, Deserialize)]
struct RawPageQuery {
    page: Option<u64>,
    per_page: Option<u64>,
}

/// Validated paging parameters for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging(pub PageRequest);

fn parse_paging(query: &str) -> Result<PageRequest, AppError> {
    let raw = web::Query::<RawPageQuery>::from_query(query)
        .map_err(|_| {
            AppError::invalid(
                ErrorCode::ValidationError,
                "page and per_page must be positive integers",
            )
        })?
        .into_inner();

    let paging = PageRequest {
        page: raw.page.unwrap_or(1),
        per_page: raw.per_page.unwrap_or(DEFAULT_PER_PAGE),
    };
    Ok(paging.validate()?)
}

impl FromRequest for Paging {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_paging(req.query_string()).map(Paging))
    }
}

#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub current_entries_size: usize,
    pub total_entries_size: u64,
    pub total_pages: u64,
}

#[derive(Debug, Serialize)]
pub struct PagedResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PagedResponse<T> {
    /// Project a repo page into the response envelope.
    pub fn from_page<D>(paging: PageRequest, page: Page<D>, project: impl FnMut(D) -> T) -> Self {
        let items: Vec<T> = page.items.into_iter().map(project).collect();
        Self {
            pagination: PaginationMeta {
                page: paging.page,
                per_page: paging.per_page,
                current_entries_size: items.len(),
                total_entries_size: page.total_items,
                total_pages: page.total_pages,
            },
            items,
        }
    }
}
