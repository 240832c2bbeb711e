use rocket::State;
use rocket::serde::json::Json;
use rocket_okapi::openapi;

use crate::models::{CreateReviewDto, Review, ReviewListQuery};
use crate::services::MarketplaceService;
use crate::store::Store;
use crate::utils::{ApiError, ApiResponse};

#[openapi(tag = "Reviews")]
#[get("/reviews?<query..>")]
pub async fn list_reviews(
    store: &State<Store>,
    query: ReviewListQuery,
) -> Result<Json<ApiResponse<Vec<Review>>>, ApiError> {
    let mut reviews = store.reviews.all().await;
    // jobId wins when both filters are present.
    if let Some(ref job_id) = query.job_id {
        reviews.retain(|review| &review.job_id == job_id);
    } else if let Some(ref profile_id) = query.profile_id {
        reviews.retain(|review| &review.reviewee_id == profile_id);
    }
    Ok(Json(ApiResponse::success(reviews)))
}

#[openapi(tag = "Reviews")]
#[post("/reviews", data = "<dto>")]
pub async fn create_review(
    store: &State<Store>,
    dto: Json<CreateReviewDto>,
) -> Result<Json<ApiResponse<Review>>, ApiError> {
    let review = MarketplaceService::submit_review(store, dto.into_inner()).await?;
    Ok(Json(ApiResponse::success_with_message(
        "Review submitted successfully".to_string(),
        review,
    )))
}
