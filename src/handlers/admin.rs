use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::admin_service::{
    AdminService, ChangeList, ChangeListParams, ChangeListRows,
};
use crate::domain::admin::{Entity, ListFilter, ModelAdmin};
use crate::domain::catalog::{CategoryListItem, CommentListItem, OrderListItem, ProductListItem};
use crate::errors::AppError;
use crate::infrastructure::admin_repo::DieselAdminRepository;

pub type StoreAdmin = AdminService<DieselAdminRepository>;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangeListQuery {
    /// Page number (1-based). Defaults to 1.
    pub page: Option<i64>,
    /// Column to sort by; prefix with `-` for descending.
    pub o: Option<String>,
    /// Inventory bucket: `<3`, `3<=10` or `>10`.
    pub inventory: Option<String>,
    /// Creation date choice: `today`, `past_7_days`, `this_month`, `this_year`.
    pub datetime_created: Option<String>,
}

/// Field/value pairs to write, e.g. `{"unit_price": "12.50"}`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct InlineEditRequest(pub BTreeMap<String, serde_json::Value>);

#[derive(Debug, Serialize, ToSchema)]
pub struct InlineEditResponse {
    pub id: Uuid,
    pub updated: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ColumnResponse {
    pub name: String,
    pub label: String,
    pub sortable: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FilterChoiceResponse {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FilterResponse {
    pub parameter: String,
    pub title: String,
    pub choices: Vec<FilterChoiceResponse>,
    pub selected: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ModelAdminResponse {
    pub entity: String,
    pub verbose_name: String,
    pub columns: Vec<ColumnResponse>,
    pub editable: Vec<String>,
    pub filters: Vec<FilterResponse>,
    pub per_page: usize,
    pub ordering: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminIndexResponse {
    pub models: Vec<ModelAdminResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductRowResponse {
    pub id: Uuid,
    pub name: String,
    pub inventory: i32,
    /// Decimal price as a string to avoid floating-point issues, e.g. "9.99"
    pub unit_price: String,
    pub inventory_status: String,
    pub product_category: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryRowResponse {
    pub id: Uuid,
    pub title: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentRowResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product: String,
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderRowResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub customer: String,
    pub status: String,
    pub datetime_created: String,
    pub num_of_items: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ChangeListResults {
    Products(Vec<ProductRowResponse>),
    Categories(Vec<CategoryRowResponse>),
    Comments(Vec<CommentRowResponse>),
    Orders(Vec<OrderRowResponse>),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChangeListResponse {
    pub entity: String,
    pub columns: Vec<ColumnResponse>,
    pub editable: Vec<String>,
    pub filters: Vec<FilterResponse>,
    pub sort: String,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub results: ChangeListResults,
}

// ── Conversions ──────────────────────────────────────────────────────────────

fn columns(model: &ModelAdmin) -> Vec<ColumnResponse> {
    model
        .list_display
        .iter()
        .map(|c| ColumnResponse {
            name: c.name.to_string(),
            label: c.label.to_string(),
            sortable: c.sortable(),
        })
        .collect()
}

fn filter(list_filter: &ListFilter, selected: Option<&str>) -> FilterResponse {
    FilterResponse {
        parameter: list_filter.parameter().to_string(),
        title: list_filter.title().to_string(),
        choices: list_filter
            .choices()
            .into_iter()
            .map(|(value, label)| FilterChoiceResponse {
                value: value.to_string(),
                label: label.to_string(),
            })
            .collect(),
        selected: selected.map(str::to_string),
    }
}

impl From<&ModelAdmin> for ModelAdminResponse {
    fn from(model: &ModelAdmin) -> Self {
        Self {
            entity: model.entity.slug().to_string(),
            verbose_name: model.entity.verbose_name().to_string(),
            columns: columns(model),
            editable: model.list_editable.iter().map(|f| f.to_string()).collect(),
            filters: model.list_filter.iter().map(|f| filter(f, None)).collect(),
            per_page: model.list_per_page,
            ordering: model.default_sort().token(),
        }
    }
}

impl From<ProductListItem> for ProductRowResponse {
    fn from(p: ProductListItem) -> Self {
        Self {
            id: p.id,
            name: p.name,
            inventory: p.inventory,
            unit_price: p.unit_price.to_string(),
            inventory_status: p.inventory_status.to_string(),
            product_category: p.product_category,
        }
    }
}

impl From<CategoryListItem> for CategoryRowResponse {
    fn from(c: CategoryListItem) -> Self {
        Self {
            id: c.id,
            title: c.title,
        }
    }
}

impl From<CommentListItem> for CommentRowResponse {
    fn from(c: CommentListItem) -> Self {
        Self {
            id: c.id,
            product_id: c.product_id,
            product: c.product,
            status: c.status.as_str().to_string(),
        }
    }
}

impl From<OrderListItem> for OrderRowResponse {
    fn from(o: OrderListItem) -> Self {
        Self {
            id: o.id,
            customer_id: o.customer_id,
            customer: o.customer,
            status: o.status.as_str().to_string(),
            datetime_created: o.datetime_created.to_rfc3339(),
            num_of_items: o.num_of_items,
        }
    }
}

impl ChangeListResponse {
    fn new(model: &ModelAdmin, list: ChangeList) -> Self {
        let filters = model
            .list_filter
            .iter()
            .map(|f| {
                let selected = match f {
                    ListFilter::Inventory => list.inventory.map(|b| b.param()),
                    ListFilter::DateCreated { .. } => list.created_within.map(|c| c.param()),
                };
                filter(f, selected)
            })
            .collect();

        let results = match list.rows {
            ChangeListRows::Products(rows) => {
                ChangeListResults::Products(rows.into_iter().map(Into::into).collect())
            }
            ChangeListRows::Categories(rows) => {
                ChangeListResults::Categories(rows.into_iter().map(Into::into).collect())
            }
            ChangeListRows::Comments(rows) => {
                ChangeListResults::Comments(rows.into_iter().map(Into::into).collect())
            }
            ChangeListRows::Orders(rows) => {
                ChangeListResults::Orders(rows.into_iter().map(Into::into).collect())
            }
        };

        Self {
            entity: list.entity.slug().to_string(),
            columns: columns(model),
            editable: model.list_editable.iter().map(|f| f.to_string()).collect(),
            filters,
            sort: list.sort.token(),
            total: list.total,
            page: list.page,
            per_page: list.per_page,
            results,
        }
    }
}

/// Inline edits accept JSON strings or numbers; everything else is rejected.
fn edit_values(
    body: BTreeMap<String, serde_json::Value>,
) -> Result<BTreeMap<String, String>, AppError> {
    body.into_iter()
        .map(|(field, value)| match value {
            serde_json::Value::String(s) => Ok((field, s)),
            serde_json::Value::Number(n) => Ok((field, n.to_string())),
            other => Err(AppError::BadRequest(format!(
                "value for '{field}' must be a string or number, got {other}"
            ))),
        })
        .collect()
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /admin
///
/// Lists every registered model with its list-view configuration.
#[utoipa::path(
    get,
    path = "/admin",
    responses(
        (status = 200, description = "Registered admin models", body = AdminIndexResponse),
    ),
    tag = "admin"
)]
pub async fn index(admin: web::Data<StoreAdmin>) -> HttpResponse {
    let models = admin.site().models().map(ModelAdminResponse::from).collect();
    HttpResponse::Ok().json(AdminIndexResponse { models })
}

/// GET /admin/{entity}
///
/// Returns one page of the model's list view. Unknown filter choices and
/// unsortable columns are ignored.
#[utoipa::path(
    get,
    path = "/admin/{entity}",
    params(
        ("entity" = String, Path, description = "products, categories, comments or orders"),
        ("page" = Option<i64>, Query, description = "Page number (1-based, default 1)"),
        ("o" = Option<String>, Query, description = "Sort column, `-` prefix for descending"),
        ("inventory" = Option<String>, Query, description = "Inventory bucket (products only)"),
        ("datetime_created" = Option<String>, Query, description = "Creation date choice (products only)"),
    ),
    responses(
        (status = 200, description = "Change list page", body = ChangeListResponse),
        (status = 404, description = "Unknown model"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "admin"
)]
pub async fn change_list(
    admin: web::Data<StoreAdmin>,
    path: web::Path<String>,
    query: web::Query<ChangeListQuery>,
) -> Result<HttpResponse, AppError> {
    let entity = Entity::from_slug(&path.into_inner())?;
    let query = query.into_inner();
    let params = ChangeListParams {
        page: query.page,
        o: query.o,
        inventory: query.inventory,
        datetime_created: query.datetime_created,
    };

    let service = admin.clone();
    let list = web::block(move || service.change_list(entity, &params))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let model = admin.site().get(entity)?;
    Ok(HttpResponse::Ok().json(ChangeListResponse::new(model, list)))
}

/// PATCH /admin/{entity}/{id}
///
/// Writes list-editable fields of one row. Fields outside the model's
/// editable set are rejected and nothing is written.
#[utoipa::path(
    patch,
    path = "/admin/{entity}/{id}",
    params(
        ("entity" = String, Path, description = "products, comments or orders"),
        ("id" = Uuid, Path, description = "Row UUID"),
    ),
    request_body = InlineEditRequest,
    responses(
        (status = 200, description = "Row updated", body = InlineEditResponse),
        (status = 400, description = "Field not editable or value invalid"),
        (status = 404, description = "Unknown model or row"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "admin"
)]
pub async fn inline_edit(
    admin: web::Data<StoreAdmin>,
    path: web::Path<(String, Uuid)>,
    body: web::Json<InlineEditRequest>,
) -> Result<HttpResponse, AppError> {
    let (slug, id) = path.into_inner();
    let entity = Entity::from_slug(&slug)?;
    let changes = edit_values(body.into_inner().0)?;
    let updated: Vec<String> = changes.keys().cloned().collect();

    let service = admin.clone();
    web::block(move || service.inline_edit(entity, id, &changes))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(InlineEditResponse { id, updated }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::admin::AdminSite;
    use serde_json::json;

    #[test]
    fn edit_values_accept_strings_and_numbers() {
        let body: BTreeMap<String, serde_json::Value> =
            serde_json::from_value(json!({ "unit_price": 12.5, "status": "paid" })).unwrap();
        let values = edit_values(body).unwrap();
        assert_eq!(values["unit_price"], "12.5");
        assert_eq!(values["status"], "paid");
    }

    #[test]
    fn edit_values_reject_other_json_types() {
        let body: BTreeMap<String, serde_json::Value> =
            serde_json::from_value(json!({ "status": null })).unwrap();
        assert!(matches!(edit_values(body), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn model_response_describes_product_listing() {
        let site = AdminSite::store();
        let model = site.get(Entity::Product).unwrap();
        let resp = ModelAdminResponse::from(model);

        assert_eq!(resp.entity, "products");
        assert_eq!(resp.per_page, 10);
        assert_eq!(resp.editable, ["unit_price"]);
        let status = resp
            .columns
            .iter()
            .find(|c| c.name == "inventory_status")
            .unwrap();
        assert!(!status.sortable);

        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["filters"][1]["parameter"], "inventory");
        assert_eq!(value["filters"][1]["choices"][0]["label"], "High");
    }

    #[test]
    fn order_model_response_reports_default_ordering() {
        let site = AdminSite::store();
        let resp = ModelAdminResponse::from(site.get(Entity::Order).unwrap());
        assert_eq!(resp.ordering, "-datetime_created");
    }
}
