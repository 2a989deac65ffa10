//! Admin registry: which models the back office lists and how.
//!
//! [`AdminSite::store`] builds the registry once at start-up. Every
//! [`ModelAdmin`] is plain data: displayed columns, the inline-editable
//! subset, page size, list filters and default ordering.

use std::collections::BTreeMap;
use std::fmt;

use super::errors::DomainError;
use super::filters::{CreatedWithin, InventoryBucket};

/// Page size used when a model does not declare one.
pub const DEFAULT_LIST_PER_PAGE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Entity {
    Product,
    Category,
    Comment,
    Order,
}

impl Entity {
    pub const ALL: [Entity; 4] = [
        Entity::Product,
        Entity::Category,
        Entity::Comment,
        Entity::Order,
    ];

    /// URL segment under `/admin`.
    pub fn slug(self) -> &'static str {
        match self {
            Entity::Product => "products",
            Entity::Category => "categories",
            Entity::Comment => "comments",
            Entity::Order => "orders",
        }
    }

    pub fn verbose_name(self) -> &'static str {
        match self {
            Entity::Product => "Product",
            Entity::Category => "Category",
            Entity::Comment => "Comment",
            Entity::Order => "Order",
        }
    }

    pub fn from_slug(slug: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|entity| entity.slug() == slug)
            .ok_or_else(|| DomainError::UnknownEntity(slug.to_string()))
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A list-view column. Derived columns name the stored field they sort by,
/// or `None` when they cannot be sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub label: &'static str,
    pub sort_field: Option<&'static str>,
}

impl Column {
    /// A stored field, sorted by itself.
    pub const fn field(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            sort_field: Some(name),
        }
    }

    pub const fn derived(
        name: &'static str,
        label: &'static str,
        sort_field: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            label,
            sort_field,
        }
    }

    pub fn sortable(&self) -> bool {
        self.sort_field.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFilter {
    /// Date drill-down on a timestamp field.
    DateCreated { field: &'static str },
    /// The inventory bucket filter.
    Inventory,
}

impl ListFilter {
    /// Query-string parameter carrying the selected choice.
    pub fn parameter(&self) -> &'static str {
        match self {
            ListFilter::DateCreated { field } => field,
            ListFilter::Inventory => InventoryBucket::PARAMETER,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ListFilter::DateCreated { .. } => "Datetime created",
            ListFilter::Inventory => InventoryBucket::TITLE,
        }
    }

    /// `(value, label)` pairs in display order.
    pub fn choices(&self) -> Vec<(&'static str, &'static str)> {
        match self {
            ListFilter::DateCreated { .. } => CreatedWithin::ALL
                .into_iter()
                .map(|choice| (choice.param(), choice.label()))
                .collect(),
            ListFilter::Inventory => InventoryBucket::ALL
                .into_iter()
                .map(|bucket| (bucket.param(), bucket.label()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: &'static str,
    pub descending: bool,
}

impl SortSpec {
    /// Parses `"field"` / `"-field"`.
    pub fn parse(token: &'static str) -> Self {
        match token.strip_prefix('-') {
            Some(field) => Self {
                field,
                descending: true,
            },
            None => Self {
                field: token,
                descending: false,
            },
        }
    }

    pub fn token(&self) -> String {
        if self.descending {
            format!("-{}", self.field)
        } else {
            self.field.to_string()
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModelAdmin {
    pub entity: Entity,
    pub list_display: Vec<Column>,
    pub list_editable: Vec<&'static str>,
    pub list_per_page: usize,
    pub list_filter: Vec<ListFilter>,
    pub ordering: Option<SortSpec>,
}

impl ModelAdmin {
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            list_display: vec![Column::field("id", "ID")],
            list_editable: Vec::new(),
            list_per_page: DEFAULT_LIST_PER_PAGE,
            list_filter: Vec::new(),
            ordering: None,
        }
    }

    #[must_use]
    pub fn list_display(mut self, columns: Vec<Column>) -> Self {
        self.list_display = columns;
        self
    }

    #[must_use]
    pub fn list_editable(mut self, fields: Vec<&'static str>) -> Self {
        self.list_editable = fields;
        self
    }

    #[must_use]
    pub fn list_per_page(mut self, per_page: usize) -> Self {
        self.list_per_page = per_page;
        self
    }

    #[must_use]
    pub fn list_filter(mut self, filters: Vec<ListFilter>) -> Self {
        self.list_filter = filters;
        self
    }

    #[must_use]
    pub fn ordering(mut self, token: &'static str) -> Self {
        self.ordering = Some(SortSpec::parse(token));
        self
    }

    pub fn is_editable(&self, field: &str) -> bool {
        self.list_editable.iter().any(|f| *f == field)
    }

    pub fn has_filter(&self, filter: &ListFilter) -> bool {
        self.list_filter.contains(filter)
    }

    /// Declared ordering, or newest primary key first.
    pub fn default_sort(&self) -> SortSpec {
        self.ordering.unwrap_or(SortSpec {
            field: "id",
            descending: true,
        })
    }

    /// Maps a requested `o` token (column name, optional `-`) onto the field
    /// to sort by. Unknown or unsortable columns fall back to the default.
    pub fn resolve_sort(&self, requested: Option<&str>) -> SortSpec {
        requested
            .and_then(|token| {
                let (descending, name) = match token.strip_prefix('-') {
                    Some(name) => (true, name),
                    None => (false, token),
                };
                self.list_display
                    .iter()
                    .find(|column| column.name == name)?
                    .sort_field
                    .map(|field| SortSpec { field, descending })
            })
            .unwrap_or_else(|| self.default_sort())
    }
}

#[derive(Debug, Clone, Default)]
pub struct AdminSite {
    models: BTreeMap<Entity, ModelAdmin>,
}

impl AdminSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, admin: ModelAdmin) {
        self.models.insert(admin.entity, admin);
    }

    pub fn get(&self, entity: Entity) -> Result<&ModelAdmin, DomainError> {
        self.models
            .get(&entity)
            .ok_or_else(|| DomainError::UnknownEntity(entity.slug().to_string()))
    }

    pub fn models(&self) -> impl Iterator<Item = &ModelAdmin> {
        self.models.values()
    }

    /// The store's back office.
    pub fn store() -> Self {
        let mut site = Self::new();

        site.register(
            ModelAdmin::new(Entity::Product)
                .list_display(vec![
                    Column::field("id", "ID"),
                    Column::field("name", "Name"),
                    Column::field("inventory", "Inventory"),
                    Column::field("unit_price", "Unit price"),
                    Column::derived("inventory_status", "Inventory status", None),
                    Column::derived("product_category", "Product category", Some("category__title")),
                ])
                .list_editable(vec!["unit_price"])
                .list_per_page(10)
                .list_filter(vec![
                    ListFilter::DateCreated {
                        field: "datetime_created",
                    },
                    ListFilter::Inventory,
                ]),
        );

        site.register(ModelAdmin::new(Entity::Category).list_display(vec![
            Column::field("id", "ID"),
            Column::field("title", "Title"),
        ]));

        site.register(
            ModelAdmin::new(Entity::Comment)
                .list_display(vec![
                    Column::field("id", "ID"),
                    Column::field("product", "Product"),
                    Column::field("status", "Status"),
                ])
                .list_editable(vec!["status"])
                .list_per_page(10),
        );

        site.register(
            ModelAdmin::new(Entity::Order)
                .list_display(vec![
                    Column::field("id", "ID"),
                    Column::field("customer", "Customer"),
                    Column::field("status", "Status"),
                    Column::field("datetime_created", "Datetime created"),
                    Column::derived("num_of_items", "Num of items", Some("items_count")),
                ])
                .list_editable(vec!["status"])
                .list_per_page(10)
                .ordering("-datetime_created"),
        );

        site
    }
}
