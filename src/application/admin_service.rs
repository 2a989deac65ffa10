use std::collections::BTreeMap;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::admin::{AdminSite, Entity, ListFilter, SortSpec};
use crate::domain::catalog::{
    CategoryListItem, CommentListItem, CommentStatus, OrderListItem, OrderStatus, ProductListItem,
};
use crate::domain::errors::DomainError;
use crate::domain::filters::{CreatedWithin, InventoryBucket};
use crate::domain::ports::{AdminRepository, ListQuery};

/// Shape of `products.unit_price`, `NUMERIC(10, 2)`.
const UNIT_PRICE_DECIMAL_PLACES: i64 = 2;
const UNIT_PRICE_WHOLE_DIGITS: i64 = 8;

/// Raw change-list parameters as they arrive from the query string.
#[derive(Debug, Clone, Default)]
pub struct ChangeListParams {
    pub page: Option<i64>,
    pub o: Option<String>,
    pub inventory: Option<String>,
    pub datetime_created: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ChangeListRows {
    Products(Vec<ProductListItem>),
    Categories(Vec<CategoryListItem>),
    Comments(Vec<CommentListItem>),
    Orders(Vec<OrderListItem>),
}

/// One rendered page of a model's list view.
#[derive(Debug, Clone)]
pub struct ChangeList {
    pub entity: Entity,
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub sort: SortSpec,
    pub inventory: Option<InventoryBucket>,
    pub created_within: Option<CreatedWithin>,
    pub rows: ChangeListRows,
}

enum InlineChange {
    UnitPrice(BigDecimal),
    CommentStatus(CommentStatus),
    OrderStatus(OrderStatus),
}

pub struct AdminService<R> {
    site: AdminSite,
    repo: R,
}

impl<R: AdminRepository> AdminService<R> {
    pub fn new(site: AdminSite, repo: R) -> Self {
        Self { site, repo }
    }

    pub fn site(&self) -> &AdminSite {
        &self.site
    }

    pub fn change_list(
        &self,
        entity: Entity,
        params: &ChangeListParams,
    ) -> Result<ChangeList, DomainError> {
        self.change_list_at(entity, params, Utc::now())
    }

    /// Builds the change list with date filters resolved against `now`.
    pub fn change_list_at(
        &self,
        entity: Entity,
        params: &ChangeListParams,
        now: DateTime<Utc>,
    ) -> Result<ChangeList, DomainError> {
        let admin = self.site.get(entity)?;

        // Unrecognised choices and undeclared filters are ignored, not rejected.
        let inventory = if admin.has_filter(&ListFilter::Inventory) {
            params.inventory.as_deref().and_then(InventoryBucket::from_param)
        } else {
            None
        };
        let created_within = if admin.has_filter(&ListFilter::DateCreated {
            field: "datetime_created",
        }) {
            params
                .datetime_created
                .as_deref()
                .and_then(CreatedWithin::from_param)
        } else {
            None
        };

        let page = params.page.unwrap_or(1).max(1);
        let per_page = admin.list_per_page as i64;
        if (page - 1).checked_mul(per_page).is_none() {
            return Err(DomainError::InvalidInput(format!("page {page} is out of range")));
        }

        let query = ListQuery {
            page,
            per_page,
            sort: admin.resolve_sort(params.o.as_deref()),
            inventory,
            created: created_within.map(|choice| choice.range(now)),
        };

        log::debug!(
            "change list {}: page={} sort={} inventory={:?} created={:?}",
            entity,
            query.page,
            query.sort.token(),
            inventory,
            created_within
        );

        let (rows, total) = match entity {
            Entity::Product => {
                let page = self.repo.list_products(&query)?;
                (ChangeListRows::Products(page.items), page.total)
            }
            Entity::Category => {
                let page = self.repo.list_categories(&query)?;
                (ChangeListRows::Categories(page.items), page.total)
            }
            Entity::Comment => {
                let page = self.repo.list_comments(&query)?;
                (ChangeListRows::Comments(page.items), page.total)
            }
            Entity::Order => {
                let page = self.repo.list_orders(&query)?;
                (ChangeListRows::Orders(page.items), page.total)
            }
        };

        Ok(ChangeList {
            entity,
            page: query.page,
            per_page: query.per_page,
            total,
            sort: query.sort,
            inventory,
            created_within,
            rows,
        })
    }

    /// Applies list-view edits to one row. Every field must be declared
    /// editable for the model; nothing is written if any field is rejected.
    pub fn inline_edit(
        &self,
        entity: Entity,
        id: Uuid,
        changes: &BTreeMap<String, String>,
    ) -> Result<(), DomainError> {
        let admin = self.site.get(entity)?;

        if changes.is_empty() {
            return Err(DomainError::InvalidInput("no fields to update".to_string()));
        }
        if let Some(field) = changes.keys().find(|field| !admin.is_editable(field)) {
            log::warn!("rejected inline edit of {}.{}", entity, field);
            return Err(DomainError::NotEditable(field.clone()));
        }

        let parsed = changes
            .iter()
            .map(|(field, value)| parse_change(entity, field, value))
            .collect::<Result<Vec<_>, _>>()?;

        for change in parsed {
            match change {
                InlineChange::UnitPrice(price) => self.repo.update_product_unit_price(id, price)?,
                InlineChange::CommentStatus(status) => self.repo.update_comment_status(id, status)?,
                InlineChange::OrderStatus(status) => self.repo.update_order_status(id, status)?,
            }
        }

        log::info!(
            "inline edit on {} {}: {:?}",
            entity,
            id,
            changes.keys().collect::<Vec<_>>()
        );
        Ok(())
    }
}

fn parse_change(entity: Entity, field: &str, value: &str) -> Result<InlineChange, DomainError> {
    match (entity, field) {
        (Entity::Product, "unit_price") => {
            let price = BigDecimal::from_str(value.trim()).map_err(|e| {
                DomainError::InvalidInput(format!("invalid unit_price '{value}': {e}"))
            })?;
            if price < BigDecimal::from(0) {
                return Err(DomainError::InvalidInput(
                    "unit_price must not be negative".to_string(),
                ));
            }
            check_unit_price_shape(&price)?;
            Ok(InlineChange::UnitPrice(price))
        }
        (Entity::Comment, "status") => Ok(InlineChange::CommentStatus(value.parse()?)),
        (Entity::Order, "status") => Ok(InlineChange::OrderStatus(value.parse()?)),
        _ => Err(DomainError::NotEditable(field.to_string())),
    }
}

/// Rejects prices the column would round or overflow, so the stored value
/// always equals the submitted one.
fn check_unit_price_shape(price: &BigDecimal) -> Result<(), DomainError> {
    let normalized = price.normalized();
    let (_, scale) = normalized.as_bigint_and_exponent();
    let whole_digits = normalized.digits() as i64 - scale;

    if scale > UNIT_PRICE_DECIMAL_PLACES {
        return Err(DomainError::InvalidInput(format!(
            "unit_price allows at most {UNIT_PRICE_DECIMAL_PLACES} decimal places"
        )));
    }
    if whole_digits > UNIT_PRICE_WHOLE_DIGITS {
        return Err(DomainError::InvalidInput(format!(
            "unit_price allows at most {UNIT_PRICE_WHOLE_DIGITS} digits before the decimal point"
        )));
    }
    Ok(())
}
