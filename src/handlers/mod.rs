pub mod admin;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(admin::index, admin::change_list, admin::inline_edit),
    components(schemas(
        admin::AdminIndexResponse,
        admin::ChangeListResponse,
        admin::InlineEditRequest,
        admin::InlineEditResponse,
    )),
    tags((name = "admin", description = "Store back office list views"))
)]
pub struct ApiDoc;
