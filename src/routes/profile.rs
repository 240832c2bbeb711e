use rocket::State;
use rocket::serde::json::Json;
use rocket_okapi::openapi;

use crate::models::{
    AddFavouriteDto, CreateProfileDto, Profile, ProfileListQuery, UpdateProfileDto,
};
use crate::services::MarketplaceService;
use crate::store::Store;
use crate::utils::{ApiError, ApiResponse, validate_email, validate_phone};

fn check_contact(email: Option<&str>, phone: Option<&str>) -> Result<(), ApiError> {
    if let Some(email) = email {
        if !validate_email(email) {
            return Err(ApiError::bad_request("Invalid email address"));
        }
    }
    if let Some(phone) = phone {
        if !validate_phone(phone) {
            return Err(ApiError::bad_request("Invalid phone number"));
        }
    }
    Ok(())
}

#[openapi(tag = "Profiles")]
#[get("/profiles?<query..>")]
pub async fn list_profiles(
    store: &State<Store>,
    query: ProfileListQuery,
) -> Result<Json<ApiResponse<Vec<Profile>>>, ApiError> {
    let mut profiles = store.profiles.all().await;
    if let Some(kind) = query.profile_type {
        profiles.retain(|profile| profile.profile_type == kind);
    }
    Ok(Json(ApiResponse::success(profiles)))
}

#[openapi(tag = "Profiles")]
#[post("/profiles", data = "<dto>")]
pub async fn create_profile(
    store: &State<Store>,
    dto: Json<CreateProfileDto>,
) -> Result<Json<ApiResponse<Profile>>, ApiError> {
    let dto = dto.into_inner();
    check_contact(dto.email.as_deref(), dto.phone.as_deref())?;

    let profile = MarketplaceService::create_profile(store, dto).await?;
    Ok(Json(ApiResponse::success_with_message(
        "Profile created successfully".to_string(),
        profile,
    )))
}

#[openapi(tag = "Profiles")]
#[get("/profiles/<id>")]
pub async fn get_profile(
    store: &State<Store>,
    id: String,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let profile = store
        .profiles
        .get(&id)
        .await
        .ok_or_else(|| ApiError::not_found("Profile not found"))?;
    let jobs = MarketplaceService::jobs_for_profile(store, &id).await;

    Ok(Json(ApiResponse::success(serde_json::json!({
        "profile": profile,
        "jobs": jobs,
    }))))
}

#[openapi(tag = "Profiles")]
#[put("/profiles/<id>", data = "<dto>")]
pub async fn update_profile(
    store: &State<Store>,
    id: String,
    dto: Json<UpdateProfileDto>,
) -> Result<Json<ApiResponse<Profile>>, ApiError> {
    let dto = dto.into_inner();
    check_contact(dto.email.as_deref(), dto.phone.as_deref())?;

    let profile = MarketplaceService::update_profile(store, &id, dto).await?;
    Ok(Json(ApiResponse::success(profile)))
}

// ============================================================================
// FAVOURITES (seniors bookmarking youth workers)
// ============================================================================

#[openapi(tag = "Profiles")]
#[post("/profiles/<id>/favourites", data = "<dto>")]
pub async fn add_favourite(
    store: &State<Store>,
    id: String,
    dto: Json<AddFavouriteDto>,
) -> Result<Json<ApiResponse<Profile>>, ApiError> {
    let profile = MarketplaceService::add_favourite(store, &id, &dto.youth_id).await?;
    Ok(Json(ApiResponse::success(profile)))
}

#[openapi(tag = "Profiles")]
#[delete("/profiles/<id>/favourites/<youth_id>")]
pub async fn remove_favourite(
    store: &State<Store>,
    id: String,
    youth_id: String,
) -> Result<Json<ApiResponse<Profile>>, ApiError> {
    let profile = MarketplaceService::remove_favourite(store, &id, &youth_id).await?;
    Ok(Json(ApiResponse::success(profile)))
}
