/**
 * Profile Types
 *
 * The profile record, its embedded experience/education entries, the
 * social-links sub-record, and the request/response types for the profile
 * routes.
 *
 * Wire names are camelCase (`githubUsername`, `fieldOfStudy`, `createdAt`)
 * to match the JSON contract.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::HasId;

/// External social links, stored as a sub-record on the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    pub youtube: String,
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
    pub instagram: String,
}

/// One entry in a profile's work history.
///
/// The id is generated when the entry is added and never changes; it is
/// how removal addresses the entry regardless of list position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub from: String,
    pub to: String,
    pub current: bool,
    pub description: String,
}

impl HasId for Experience {
    type Id = Uuid;

    fn id(&self) -> &Uuid {
        &self.id
    }
}

/// One entry in a profile's education history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: String,
    pub to: String,
    pub current: bool,
    pub description: String,
}

impl HasId for Education {
    type Id = Uuid;

    fn id(&self) -> &Uuid {
        &self.id
    }
}

/// A developer profile, as persisted and as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Unique profile ID
    pub id: Uuid,
    /// Owning user's id (reference, not embedded; one profile per user by
    /// application convention)
    pub user: Uuid,
    pub company: String,
    pub website: String,
    pub location: String,
    pub designation: String,
    pub skills: Vec<String>,
    pub bio: String,
    pub github_username: String,
    /// Ordered work history, most recent first
    pub experience: Vec<Experience>,
    /// Ordered education history, most recent first
    pub education: Vec<Education>,
    pub social: Social,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The caller-settable profile fields, shared by create and update.
#[derive(Debug, Clone)]
pub struct ProfileFields {
    pub company: String,
    pub website: String,
    pub location: String,
    pub designation: String,
    pub skills: Vec<String>,
    pub bio: String,
    pub github_username: String,
    pub social: Social,
}

/// Create/update profile request (social links arrive flattened)
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct UpsertProfileRequest {
    pub company: String,
    pub website: String,
    pub location: String,
    pub designation: String,
    pub skills: Vec<String>,
    pub bio: String,
    pub github_username: String,
    pub youtube: String,
    pub facebook: String,
    pub twitter: String,
    pub linkedin: String,
    pub instagram: String,
}

impl UpsertProfileRequest {
    /// Regroup the flattened request into the persisted field layout.
    pub fn into_fields(self) -> ProfileFields {
        ProfileFields {
            company: self.company,
            website: self.website,
            location: self.location,
            designation: self.designation,
            skills: self.skills,
            bio: self.bio,
            github_username: self.github_username,
            social: Social {
                youtube: self.youtube,
                twitter: self.twitter,
                facebook: self.facebook,
                linkedin: self.linkedin,
                instagram: self.instagram,
            },
        }
    }
}

/// Add-experience request; `to` and `current` are optional
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AddExperienceRequest {
    pub title: String,
    pub company: String,
    pub location: String,
    pub from: String,
    pub to: String,
    pub current: bool,
    pub description: String,
}

/// Add-education request; `to` and `current` are optional
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct AddEducationRequest {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: String,
    pub to: String,
    pub current: bool,
    pub description: String,
}

/// Response carrying a single profile
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: Profile,
}

/// Response carrying the profile listing
#[derive(Debug, Serialize)]
pub struct ProfilesResponse {
    pub profiles: Vec<Profile>,
}

/// Create-profile response: confirmation message plus the stored profile
#[derive(Debug, Serialize)]
pub struct CreateProfileResponse {
    pub msg: String,
    pub profile: Profile,
}
