use chrono::Utc;
use log::warn;

use super::{LifecycleService, MarketError, RatingService};
use crate::models::{
    CreateJobDto, CreateProfileDto, CreateReviewDto, Job, JobListQuery, JobSort, JobStatus,
    Profile, ProfileType, Review, UpdateJobDto, UpdateProfileDto,
};
use crate::store::Store;
use crate::utils::generate_id;

/// Composes the store, the lifecycle rules and rating upkeep into the
/// operations the HTTP layer exposes.
pub struct MarketplaceService;

impl MarketplaceService {
    /* ------------------------------ jobs ------------------------------ */

    pub async fn create_job(store: &Store, dto: CreateJobDto) -> Result<Job, MarketError> {
        if dto.title.trim().is_empty() {
            return Err(MarketError::Validation("Title cannot be empty".to_string()));
        }
        if dto.pay < 0.0 {
            return Err(MarketError::Validation("Pay cannot be negative".to_string()));
        }

        let job = Job {
            id: generate_id(),
            title: dto.title,
            description: dto.description,
            category: dto.category,
            location: dto.location,
            time_preference: dto.time_preference,
            scheduled_date: dto.scheduled_date,
            pay: dto.pay,
            photos: dto.photos,
            posted_by: dto.posted_by,
            posted_at: Utc::now(),
            status: JobStatus::Open,
            accepted_by: None,
            accepted_at: None,
            completed_at: None,
        };
        Ok(store.jobs.insert(job).await?)
    }

    pub async fn list_jobs(store: &Store, query: &JobListQuery) -> Vec<Job> {
        let mut jobs: Vec<Job> = store
            .jobs
            .all()
            .await
            .into_iter()
            .filter(|job| {
                query.category.map_or(true, |c| job.category == c)
                    && query.status.map_or(true, |s| job.status == s)
                    && query.min_pay.map_or(true, |min| job.pay >= min)
                    && query.max_pay.map_or(true, |max| job.pay <= max)
                    && query
                        .time_preference
                        .map_or(true, |t| job.time_preference == t)
            })
            .collect();

        match query.sort.unwrap_or(JobSort::Newest) {
            JobSort::Newest => jobs.sort_by(|a, b| b.posted_at.cmp(&a.posted_at)),
            JobSort::PayHigh => jobs.sort_by(|a, b| b.pay.total_cmp(&a.pay)),
            JobSort::PayLow => jobs.sort_by(|a, b| a.pay.total_cmp(&b.pay)),
        }
        jobs
    }

    pub async fn update_job(
        store: &Store,
        job_id: &str,
        dto: UpdateJobDto,
    ) -> Result<Job, MarketError> {
        if dto.title.as_deref().is_some_and(|title| title.trim().is_empty()) {
            return Err(MarketError::Validation("Title cannot be empty".to_string()));
        }
        if dto.pay.is_some_and(|pay| pay < 0.0) {
            return Err(MarketError::Validation("Pay cannot be negative".to_string()));
        }

        store
            .jobs
            .update(job_id, |job| -> Result<(), MarketError> {
                if let Some(title) = dto.title {
                    job.title = title;
                }
                if let Some(description) = dto.description {
                    job.description = description;
                }
                if let Some(category) = dto.category {
                    job.category = category;
                }
                if let Some(location) = dto.location {
                    job.location = location;
                }
                if let Some(time_preference) = dto.time_preference {
                    job.time_preference = time_preference;
                }
                if let Some(scheduled_date) = dto.scheduled_date {
                    job.scheduled_date = Some(scheduled_date);
                }
                if let Some(pay) = dto.pay {
                    job.pay = pay;
                }
                if let Some(photos) = dto.photos {
                    job.photos = photos;
                }
                Ok(())
            })
            .await?
            .ok_or(MarketError::NotFound("Job"))
    }

    /// Removes the posting. Reviews that reference the job stay behind;
    /// they belong to the people, not the posting.
    pub async fn delete_job(store: &Store, job_id: &str) -> Result<(), MarketError> {
        if !store.jobs.remove(job_id).await? {
            return Err(MarketError::NotFound("Job"));
        }
        Ok(())
    }

    /* --------------------------- lifecycle ---------------------------- */

    pub async fn accept_job(
        store: &Store,
        job_id: &str,
        profile_id: &str,
    ) -> Result<Job, MarketError> {
        store
            .jobs
            .update(job_id, |job| LifecycleService::accept(job, profile_id))
            .await?
            .ok_or(MarketError::NotFound("Job"))
    }

    pub async fn complete_job(store: &Store, job_id: &str) -> Result<Job, MarketError> {
        store
            .jobs
            .update(job_id, LifecycleService::complete)
            .await?
            .ok_or(MarketError::NotFound("Job"))
    }

    pub async fn cancel_job(store: &Store, job_id: &str) -> Result<Job, MarketError> {
        store
            .jobs
            .update(job_id, LifecycleService::cancel)
            .await?
            .ok_or(MarketError::NotFound("Job"))
    }

    /* ----------------------------- profiles --------------------------- */

    pub async fn create_profile(
        store: &Store,
        dto: CreateProfileDto,
    ) -> Result<Profile, MarketError> {
        if dto.name.trim().is_empty() {
            return Err(MarketError::Validation("Name cannot be empty".to_string()));
        }

        let is_youth = dto.profile_type == ProfileType::Youth;
        let profile = Profile {
            id: generate_id(),
            name: dto.name,
            profile_type: dto.profile_type,
            bio: dto.bio,
            school: dto.school,
            skills: Some(dto.skills.unwrap_or_default()),
            phone: dto.phone,
            email: dto.email,
            photo: dto.photo,
            rating: 0.0,
            total_jobs: 0,
            total_earned: is_youth.then_some(0.0),
            total_spent: (!is_youth).then_some(0.0),
            favourites: (!is_youth).then(Vec::new),
            joined_at: Utc::now(),
            neighborhood: dto.neighborhood,
        };
        Ok(store.profiles.insert(profile).await?)
    }

    pub async fn update_profile(
        store: &Store,
        profile_id: &str,
        dto: UpdateProfileDto,
    ) -> Result<Profile, MarketError> {
        if dto.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(MarketError::Validation("Name cannot be empty".to_string()));
        }

        store
            .profiles
            .update(profile_id, |profile| -> Result<(), MarketError> {
                if let Some(name) = dto.name {
                    profile.name = name;
                }
                if let Some(bio) = dto.bio {
                    profile.bio = Some(bio);
                }
                if let Some(school) = dto.school {
                    profile.school = Some(school);
                }
                if let Some(skills) = dto.skills {
                    profile.skills = Some(skills);
                }
                if let Some(phone) = dto.phone {
                    profile.phone = Some(phone);
                }
                if let Some(email) = dto.email {
                    profile.email = Some(email);
                }
                if let Some(photo) = dto.photo {
                    profile.photo = Some(photo);
                }
                if let Some(neighborhood) = dto.neighborhood {
                    profile.neighborhood = Some(neighborhood);
                }
                Ok(())
            })
            .await?
            .ok_or(MarketError::NotFound("Profile"))
    }

    /// Jobs a member posted or took on, for the profile detail view.
    pub async fn jobs_for_profile(store: &Store, profile_id: &str) -> Vec<Job> {
        store
            .jobs
            .all()
            .await
            .into_iter()
            .filter(|job| {
                job.posted_by == profile_id || job.accepted_by.as_deref() == Some(profile_id)
            })
            .collect()
    }

    /* ---------------------------- favourites -------------------------- */

    pub async fn add_favourite(
        store: &Store,
        senior_id: &str,
        youth_id: &str,
    ) -> Result<Profile, MarketError> {
        let target = store
            .profiles
            .get(youth_id)
            .await
            .ok_or(MarketError::NotFound("Profile"))?;
        if target.profile_type != ProfileType::Youth {
            return Err(MarketError::Validation(
                "Favourites can only point at youth profiles".to_string(),
            ));
        }

        store
            .profiles
            .update(senior_id, |profile| -> Result<(), MarketError> {
                if profile.profile_type != ProfileType::Senior {
                    return Err(MarketError::Validation(
                        "Only senior profiles keep favourites".to_string(),
                    ));
                }
                let favourites = profile.favourites.get_or_insert_with(Vec::new);
                if !favourites.iter().any(|id| id == youth_id) {
                    favourites.push(youth_id.to_owned());
                }
                Ok(())
            })
            .await?
            .ok_or(MarketError::NotFound("Profile"))
    }

    pub async fn remove_favourite(
        store: &Store,
        senior_id: &str,
        youth_id: &str,
    ) -> Result<Profile, MarketError> {
        store
            .profiles
            .update(senior_id, |profile| -> Result<(), MarketError> {
                if profile.profile_type != ProfileType::Senior {
                    return Err(MarketError::Validation(
                        "Only senior profiles keep favourites".to_string(),
                    ));
                }
                if let Some(favourites) = profile.favourites.as_mut() {
                    favourites.retain(|id| id != youth_id);
                }
                Ok(())
            })
            .await?
            .ok_or(MarketError::NotFound("Profile"))
    }

    /* ----------------------------- reviews ---------------------------- */

    pub async fn submit_review(
        store: &Store,
        dto: CreateReviewDto,
    ) -> Result<Review, MarketError> {
        if !(1..=5).contains(&dto.rating) {
            return Err(MarketError::Validation(
                "Rating must be between 1 and 5".to_string(),
            ));
        }

        let review = Review {
            id: generate_id(),
            job_id: dto.job_id,
            reviewer_id: dto.reviewer_id,
            reviewee_id: dto.reviewee_id,
            rating: dto.rating,
            comment: dto.comment,
            created_at: Utc::now(),
        };
        let review = store.reviews.insert(review).await?;

        // The review is the source of truth; a failed rating refresh must
        // not roll it back.
        if let Err(e) = RatingService::recompute(store, &review.reviewee_id).await {
            warn!(
                "rating refresh for profile {} failed: {}",
                review.reviewee_id, e
            );
        }

        Ok(review)
    }
}
