//! SeaORM adapters: thin query/mutation functions returning `sea_orm::DbErr`.
//!
//! Repos wrap these and convert errors to `DomainError`.

pub mod games_sea;
pub mod guesses_sea;
pub mod phrases_sea;
pub mod rounds_sea;
pub mod teams_sea;

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, ItemsAndPagesNumber, PaginatorTrait, Select};

/// One page of rows plus totals for the whole filtered set.
#[derive(Debug, Clone)]
pub struct PageRows<M> {
    pub items: Vec<M>,
    pub total_items: u64,
    pub total_pages: u64,
}

/// Fetch 1-based `page` of `select`, `per_page` rows each.
pub(crate) async fn fetch_page<C, E>(
    conn: &C,
    select: Select<E>,
    page: u64,
    per_page: u64,
) -> Result<PageRows<E::Model>, DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: Sync,
{
    let paginator = select.paginate(conn, per_page);
    let ItemsAndPagesNumber {
        number_of_items,
        number_of_pages,
    } = paginator.num_items_and_pages().await?;
    let items = paginator.fetch_page(page.saturating_sub(1)).await?;

    Ok(PageRows {
        items,
        total_items: number_of_items,
        total_pages: number_of_pages,
    })
}
