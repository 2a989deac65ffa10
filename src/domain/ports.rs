use bigdecimal::BigDecimal;
use uuid::Uuid;

use super::admin::SortSpec;
use super::catalog::{
    CategoryListItem, CommentListItem, CommentStatus, OrderListItem, OrderStatus, Page,
    ProductListItem,
};
use super::errors::DomainError;
use super::filters::{DateRange, InventoryBucket};

/// One resolved change-list read. Filters that the model does not declare
/// are already dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: i64,
    pub per_page: i64,
    pub sort: SortSpec,
    pub inventory: Option<InventoryBucket>,
    pub created: Option<DateRange>,
}

impl ListQuery {
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

pub trait AdminRepository: Send + Sync + 'static {
    fn list_products(&self, query: &ListQuery) -> Result<Page<ProductListItem>, DomainError>;
    fn list_categories(&self, query: &ListQuery) -> Result<Page<CategoryListItem>, DomainError>;
    fn list_comments(&self, query: &ListQuery) -> Result<Page<CommentListItem>, DomainError>;
    fn list_orders(&self, query: &ListQuery) -> Result<Page<OrderListItem>, DomainError>;

    fn update_product_unit_price(&self, id: Uuid, unit_price: BigDecimal)
        -> Result<(), DomainError>;
    fn update_comment_status(&self, id: Uuid, status: CommentStatus) -> Result<(), DomainError>;
    fn update_order_status(&self, id: Uuid, status: OrderStatus) -> Result<(), DomainError>;
}
