use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MenuItemDoc {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub ingredients: Vec<String>,
    pub available: bool,
}

/// Create requires `name` and `price`; update accepts any subset.
#[derive(ToSchema)]
pub struct MenuItemInputDoc {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub available: Option<bool>,
}

#[derive(ToSchema)]
pub struct RemovedMenuItemDoc {
    pub message: String,
    pub item: MenuItemDoc,
}

#[derive(ToSchema)]
pub struct ErrorResponseDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::menu::list_menu,
        crate::routes::menu::get_menu_item,
        crate::routes::menu::create_menu_item,
        crate::routes::menu::update_menu_item,
        crate::routes::menu::delete_menu_item,
    ),
    components(
        schemas(
            HealthResponse,
            MenuItemDoc,
            MenuItemInputDoc,
            RemovedMenuItemDoc,
            ErrorResponseDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "menu")
    )
)]
pub struct ApiDoc;
