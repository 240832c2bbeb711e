use rocket::serde::json::Json;
use rocket_okapi::openapi;

use crate::models::{CategoryInfo, Season, category};
use crate::utils::ApiResponse;

#[openapi(tag = "Categories")]
#[get("/categories")]
pub async fn list_categories() -> Json<ApiResponse<Vec<CategoryInfo>>> {
    Json(ApiResponse::success(category::catalog(Season::current())))
}
