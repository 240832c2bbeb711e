use rocket::State;
use rocket::serde::json::Json;
use rocket_okapi::openapi;

use crate::models::{AcceptJobDto, CreateJobDto, Job, JobListQuery, UpdateJobDto};
use crate::services::MarketplaceService;
use crate::store::Store;
use crate::utils::{ApiError, ApiResponse};

// ============================================================================
// JOB BOARD ENDPOINTS
// ============================================================================

#[openapi(tag = "Jobs")]
#[get("/jobs?<query..>")]
pub async fn list_jobs(
    store: &State<Store>,
    query: JobListQuery,
) -> Result<Json<ApiResponse<Vec<Job>>>, ApiError> {
    let jobs = MarketplaceService::list_jobs(store, &query).await;
    Ok(Json(ApiResponse::success(jobs)))
}

#[openapi(tag = "Jobs")]
#[post("/jobs", data = "<dto>")]
pub async fn create_job(
    store: &State<Store>,
    dto: Json<CreateJobDto>,
) -> Result<Json<ApiResponse<Job>>, ApiError> {
    let job = MarketplaceService::create_job(store, dto.into_inner()).await?;
    Ok(Json(ApiResponse::success_with_message(
        "Job posted successfully".to_string(),
        job,
    )))
}

#[openapi(tag = "Jobs")]
#[get("/jobs/<id>")]
pub async fn get_job(
    store: &State<Store>,
    id: String,
) -> Result<Json<ApiResponse<Job>>, ApiError> {
    let job = store
        .jobs
        .get(&id)
        .await
        .ok_or_else(|| ApiError::not_found("Job not found"))?;
    Ok(Json(ApiResponse::success(job)))
}

#[openapi(tag = "Jobs")]
#[put("/jobs/<id>", data = "<dto>")]
pub async fn update_job(
    store: &State<Store>,
    id: String,
    dto: Json<UpdateJobDto>,
) -> Result<Json<ApiResponse<Job>>, ApiError> {
    let job = MarketplaceService::update_job(store, &id, dto.into_inner()).await?;
    Ok(Json(ApiResponse::success(job)))
}

#[openapi(tag = "Jobs")]
#[delete("/jobs/<id>")]
pub async fn delete_job(
    store: &State<Store>,
    id: String,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    MarketplaceService::delete_job(store, &id).await?;
    Ok(Json(ApiResponse::success_with_message(
        "Job deleted successfully".to_string(),
        serde_json::json!({ "id": id }),
    )))
}

// ============================================================================
// LIFECYCLE TRANSITIONS
// ============================================================================

#[openapi(tag = "Jobs")]
#[post("/jobs/<id>/accept", data = "<dto>")]
pub async fn accept_job(
    store: &State<Store>,
    id: String,
    dto: Json<AcceptJobDto>,
) -> Result<Json<ApiResponse<Job>>, ApiError> {
    let job = MarketplaceService::accept_job(store, &id, &dto.profile_id).await?;
    Ok(Json(ApiResponse::success(job)))
}

#[openapi(tag = "Jobs")]
#[post("/jobs/<id>/complete")]
pub async fn complete_job(
    store: &State<Store>,
    id: String,
) -> Result<Json<ApiResponse<Job>>, ApiError> {
    let job = MarketplaceService::complete_job(store, &id).await?;
    Ok(Json(ApiResponse::success(job)))
}

#[openapi(tag = "Jobs")]
#[post("/jobs/<id>/cancel")]
pub async fn cancel_job(
    store: &State<Store>,
    id: String,
) -> Result<Json<ApiResponse<Job>>, ApiError> {
    let job = MarketplaceService::cancel_job(store, &id).await?;
    Ok(Json(ApiResponse::success(job)))
}
