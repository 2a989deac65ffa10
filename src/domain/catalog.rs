use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::errors::DomainError;

/// Stock level shown next to each product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InventoryStatus {
    Low,
    Medium,
    High,
}

impl InventoryStatus {
    /// Below 10 is low, above 50 is high; both edges are medium.
    pub fn from_inventory(inventory: i32) -> Self {
        if inventory < 10 {
            return InventoryStatus::Low;
        }
        if inventory > 50 {
            return InventoryStatus::High;
        }
        InventoryStatus::Medium
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InventoryStatus::Low => "Low",
            InventoryStatus::Medium => "Medium",
            InventoryStatus::High => "High",
        }
    }
}

impl fmt::Display for InventoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommentStatus {
    Waiting,
    Approved,
    NotApproved,
}

impl CommentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CommentStatus::Waiting => "waiting",
            CommentStatus::Approved => "approved",
            CommentStatus::NotApproved => "not_approved",
        }
    }
}

impl FromStr for CommentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waiting" => Ok(CommentStatus::Waiting),
            "approved" => Ok(CommentStatus::Approved),
            "not_approved" => Ok(CommentStatus::NotApproved),
            other => Err(DomainError::InvalidInput(format!(
                "'{other}' is not a comment status"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderStatus {
    Unpaid,
    Paid,
    Canceled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Unpaid => "unpaid",
            OrderStatus::Paid => "paid",
            OrderStatus::Canceled => "canceled",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unpaid" => Ok(OrderStatus::Unpaid),
            "paid" => Ok(OrderStatus::Paid),
            "canceled" => Ok(OrderStatus::Canceled),
            other => Err(DomainError::InvalidInput(format!(
                "'{other}' is not an order status"
            ))),
        }
    }
}

// ── List rows ────────────────────────────────────────────────────────────────
//
// Transient view models: derived columns are attached here and never written
// back to the store.

#[derive(Debug, Clone)]
pub struct ProductListItem {
    pub id: Uuid,
    pub name: String,
    pub inventory: i32,
    pub unit_price: BigDecimal,
    pub inventory_status: InventoryStatus,
    pub product_category: String,
    pub datetime_created: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CategoryListItem {
    pub id: Uuid,
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct CommentListItem {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product: String,
    pub status: CommentStatus,
}

#[derive(Debug, Clone)]
pub struct OrderListItem {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub customer: String,
    pub status: OrderStatus,
    pub datetime_created: DateTime<Utc>,
    pub num_of_items: i64,
}

#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}
