//! Database operations for profiles
//!
//! The embedded lists (`experience`, `education`) and the `social`
//! sub-record live in JSONB columns read and written whole. List mutations
//! follow the same read-modify-write shape as post likes: the handler loads
//! the profile, splices the list in memory, and one of the update functions
//! persists the full list back. No row locks, no conditional updates.

use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::profiles::types::{Education, Experience, Profile, ProfileFields, Social};

fn profile_from_row(row: &PgRow) -> Profile {
    Profile {
        id: row.get("id"),
        user: row.get("user_id"),
        company: row.get("company"),
        website: row.get("website"),
        location: row.get("location"),
        designation: row.get("designation"),
        skills: row.get("skills"),
        bio: row.get("bio"),
        github_username: row.get("github_username"),
        experience: row.get::<Json<Vec<Experience>>, _>("experience").0,
        education: row.get::<Json<Vec<Education>>, _>("education").0,
        social: row.get::<Json<Social>, _>("social").0,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Create a profile for a user
pub async fn create_profile(
    pool: &PgPool,
    user_id: Uuid,
    fields: ProfileFields,
) -> Result<Profile, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO profiles
            (id, user_id, company, website, location, designation, skills, bio,
             github_username, experience, education, social, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, '[]'::jsonb, '[]'::jsonb, $10, $11, $12)
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(&fields.company)
    .bind(&fields.website)
    .bind(&fields.location)
    .bind(&fields.designation)
    .bind(&fields.skills)
    .bind(&fields.bio)
    .bind(&fields.github_username)
    .bind(Json(&fields.social))
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(Profile {
        id,
        user: user_id,
        company: fields.company,
        website: fields.website,
        location: fields.location,
        designation: fields.designation,
        skills: fields.skills,
        bio: fields.bio,
        github_username: fields.github_username,
        experience: Vec::new(),
        education: Vec::new(),
        social: fields.social,
        created_at: now,
        updated_at: now,
    })
}

/// Update a user's profile fields, returning the updated profile.
///
/// Returns `None` when the user has no profile. Embedded lists are left
/// untouched; they have their own update paths.
pub async fn update_profile(
    pool: &PgPool,
    user_id: Uuid,
    fields: ProfileFields,
) -> Result<Option<Profile>, sqlx::Error> {
    let now = Utc::now();

    let row = sqlx::query(
        r#"
        UPDATE profiles
        SET company = $1, website = $2, location = $3, designation = $4,
            skills = $5, bio = $6, github_username = $7, social = $8, updated_at = $9
        WHERE user_id = $10
        RETURNING id, user_id, company, website, location, designation, skills, bio,
                  github_username, experience, education, social, created_at, updated_at
        "#,
    )
    .bind(&fields.company)
    .bind(&fields.website)
    .bind(&fields.location)
    .bind(&fields.designation)
    .bind(&fields.skills)
    .bind(&fields.bio)
    .bind(&fields.github_username)
    .bind(Json(&fields.social))
    .bind(now)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(profile_from_row))
}

/// Get a profile by its owning user's id
pub async fn get_profile_by_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<Profile>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, user_id, company, website, location, designation, skills, bio,
               github_username, experience, education, social, created_at, updated_at
        FROM profiles
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(profile_from_row))
}

/// Get all profiles, newest first
pub async fn list_profiles(pool: &PgPool) -> Result<Vec<Profile>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, user_id, company, website, location, designation, skills, bio,
               github_username, experience, education, social, created_at, updated_at
        FROM profiles
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(profile_from_row).collect())
}

/// Delete a user's profile
///
/// Returns the number of rows removed (0 when the user had no profile).
pub async fn delete_profile_by_user(pool: &PgPool, user_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Persist a profile's full experience list, returning the updated profile.
pub async fn update_experience(
    pool: &PgPool,
    user_id: Uuid,
    experience: &[Experience],
) -> Result<Option<Profile>, sqlx::Error> {
    let now = Utc::now();

    let row = sqlx::query(
        r#"
        UPDATE profiles
        SET experience = $1, updated_at = $2
        WHERE user_id = $3
        RETURNING id, user_id, company, website, location, designation, skills, bio,
                  github_username, experience, education, social, created_at, updated_at
        "#,
    )
    .bind(Json(experience))
    .bind(now)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(profile_from_row))
}

/// Persist a profile's full education list, returning the updated profile.
pub async fn update_education(
    pool: &PgPool,
    user_id: Uuid,
    education: &[Education],
) -> Result<Option<Profile>, sqlx::Error> {
    let now = Utc::now();

    let row = sqlx::query(
        r#"
        UPDATE profiles
        SET education = $1, updated_at = $2
        WHERE user_id = $3
        RETURNING id, user_id, company, website, location, designation, skills, bio,
                  github_username, experience, education, social, created_at, updated_at
        "#,
    )
    .bind(Json(education))
    .bind(now)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(profile_from_row))
}
