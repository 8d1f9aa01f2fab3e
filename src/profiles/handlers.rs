/**
 * Profile Handlers
 *
 * HTTP handlers for the profile routes.
 *
 * # Routes
 *
 * - `POST /api/profiles` - create the caller's profile
 * - `PUT /api/profiles` - update the caller's profile fields
 * - `GET /api/profiles/me` - the caller's profile
 * - `GET /api/profiles/users/{user_id}` - any user's profile (public)
 * - `DELETE /api/profiles/users/{user_id}` - remove profile and user
 * - `PUT /api/profiles/experience` - add a work-history entry
 * - `DELETE /api/profiles/experience/{exp_id}` - remove one entry
 * - `PUT /api/profiles/education` - add an education entry
 * - `DELETE /api/profiles/education/{edu_id}` - remove one entry
 * - `GET /api/profiles/all` - list every profile (public)
 *
 * Experience and education additions return the updated profile; removals
 * return only a confirmation message. That asymmetry is part of the
 * existing contract and is kept as-is.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::users::delete_user;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::profiles::db;
use crate::profiles::types::{
    AddEducationRequest, AddExperienceRequest, CreateProfileResponse, Education, Experience,
    ProfileResponse, ProfilesResponse, UpsertProfileRequest,
};
use crate::shared::idlist::{insert_front, remove_by_id};
use crate::shared::{MessageResponse, Validator};

fn validate_profile_body(request: &UpsertProfileRequest) -> Result<(), ApiError> {
    Validator::new()
        .require("company", "Company", &request.company)
        .require("website", "Website", &request.website)
        .require("location", "Location", &request.location)
        .require("designation", "Designation", &request.designation)
        .require_list("skills", "Skills", &request.skills)
        .require("bio", "Bio", &request.bio)
        .require("githubUsername", "GitHub Username", &request.github_username)
        .require("youtube", "YouTube", &request.youtube)
        .require("facebook", "Facebook", &request.facebook)
        .require("twitter", "Twitter", &request.twitter)
        .require("linkedin", "LinkedIn", &request.linkedin)
        .require("instagram", "Instagram", &request.instagram)
        .finish(StatusCode::BAD_REQUEST)
}

fn no_profile() -> ApiError {
    ApiError::not_found(StatusCode::NOT_FOUND, "There is no profile for this user")
}

/// Create the caller's profile
///
/// One profile per user: a second POST is rejected, the PUT route is the
/// update path.
pub async fn create_profile(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Json(request): Json<UpsertProfileRequest>,
) -> Result<Json<CreateProfileResponse>, ApiError> {
    validate_profile_body(&request)?;

    if db::get_profile_by_user(&pool, user.id).await?.is_some() {
        return Err(ApiError::conflict(
            StatusCode::BAD_REQUEST,
            "Profile already exists",
        ));
    }

    let profile = db::create_profile(&pool, user.id, request.into_fields()).await?;

    tracing::info!("Profile created for user {}", user.id);

    Ok(Json(CreateProfileResponse {
        msg: "Profile is created successfully".to_string(),
        profile,
    }))
}

/// Update the caller's profile fields
pub async fn update_profile(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Json(request): Json<UpsertProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    validate_profile_body(&request)?;

    let profile = db::update_profile(&pool, user.id, request.into_fields())
        .await?
        .ok_or_else(no_profile)?;

    Ok(Json(ProfileResponse { profile }))
}

/// Get the caller's profile
pub async fn get_my_profile(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = db::get_profile_by_user(&pool, user.id)
        .await?
        .ok_or_else(no_profile)?;

    Ok(Json(ProfileResponse { profile }))
}

/// Get a profile by user id (public)
pub async fn get_profile_by_user(
    State(pool): State<PgPool>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = db::get_profile_by_user(&pool, user_id)
        .await?
        .ok_or_else(no_profile)?;

    Ok(Json(ProfileResponse { profile }))
}

/// Delete a user's profile, then the user record itself.
///
/// Two independent deletes against two collections with no surrounding
/// transaction: a crash after the first leaves a user without a profile.
pub async fn delete_profile(
    State(pool): State<PgPool>,
    AuthUser(_caller): AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    db::delete_profile_by_user(&pool, user_id).await?;
    delete_user(&pool, user_id).await?;

    tracing::info!("Profile and user deleted: {}", user_id);

    Ok(Json(MessageResponse::new("Account is deleted")))
}

/// List all profiles (public)
pub async fn list_profiles(State(pool): State<PgPool>) -> Result<Json<ProfilesResponse>, ApiError> {
    let profiles = db::list_profiles(&pool).await?;
    Ok(Json(ProfilesResponse { profiles }))
}

/// Add a work-history entry to the caller's profile
///
/// The entry is prepended with a freshly generated id, keeping the list
/// most-recent-first.
pub async fn add_experience(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Json(request): Json<AddExperienceRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    Validator::new()
        .require("title", "Title", &request.title)
        .require("company", "Company", &request.company)
        .require("location", "Location", &request.location)
        .require("from", "From", &request.from)
        .require("description", "Description", &request.description)
        .finish(StatusCode::BAD_REQUEST)?;

    let mut profile = db::get_profile_by_user(&pool, user.id)
        .await?
        .ok_or_else(no_profile)?;

    insert_front(
        &mut profile.experience,
        Experience {
            id: Uuid::new_v4(),
            title: request.title,
            company: request.company,
            location: request.location,
            from: request.from,
            to: request.to,
            current: request.current,
            description: request.description,
        },
    );

    let profile = db::update_experience(&pool, user.id, &profile.experience)
        .await?
        .ok_or_else(no_profile)?;

    Ok(Json(ProfileResponse { profile }))
}

/// Remove one work-history entry by its id
pub async fn remove_experience(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(exp_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut profile = db::get_profile_by_user(&pool, user.id)
        .await?
        .ok_or_else(no_profile)?;

    if remove_by_id(&mut profile.experience, &exp_id).is_none() {
        return Err(ApiError::not_found(
            StatusCode::NOT_FOUND,
            "Experience entry not found",
        ));
    }

    db::update_experience(&pool, user.id, &profile.experience)
        .await?
        .ok_or_else(no_profile)?;

    Ok(Json(MessageResponse::new("Experience is deleted")))
}

/// Add an education entry to the caller's profile
pub async fn add_education(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Json(request): Json<AddEducationRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    Validator::new()
        .require("school", "School", &request.school)
        .require("degree", "Degree", &request.degree)
        .require("fieldOfStudy", "Field Of Study", &request.field_of_study)
        .require("from", "From", &request.from)
        .require("description", "Description", &request.description)
        .finish(StatusCode::BAD_REQUEST)?;

    let mut profile = db::get_profile_by_user(&pool, user.id)
        .await?
        .ok_or_else(no_profile)?;

    insert_front(
        &mut profile.education,
        Education {
            id: Uuid::new_v4(),
            school: request.school,
            degree: request.degree,
            field_of_study: request.field_of_study,
            from: request.from,
            to: request.to,
            current: request.current,
            description: request.description,
        },
    );

    let profile = db::update_education(&pool, user.id, &profile.education)
        .await?
        .ok_or_else(no_profile)?;

    Ok(Json(ProfileResponse { profile }))
}

/// Remove one education entry by its id
pub async fn remove_education(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(edu_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut profile = db::get_profile_by_user(&pool, user.id)
        .await?
        .ok_or_else(no_profile)?;

    if remove_by_id(&mut profile.education, &edu_id).is_none() {
        return Err(ApiError::not_found(
            StatusCode::NOT_FOUND,
            "Education entry not found",
        ));
    }

    db::update_education(&pool, user.id, &profile.education)
        .await?
        .ok_or_else(no_profile)?;

    Ok(Json(MessageResponse::new("Education is deleted")))
}
