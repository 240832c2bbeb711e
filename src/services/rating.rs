use super::MarketError;
use crate::store::Store;

/// Keeps `Profile.rating` consistent with the reviews a member has
/// received.
pub struct RatingService;

impl RatingService {
    /// Mean of `ratings`, rounded half-up to one decimal place. Callers
    /// guard against an empty slice.
    pub fn average(ratings: &[i32]) -> f64 {
        let sum: i32 = ratings.iter().sum();
        let mean = f64::from(sum) / ratings.len() as f64;
        (mean * 10.0).round() / 10.0
    }

    /// Recomputes the stored rating from every review addressed to
    /// `profile_id`. A profile with no reviews keeps its current rating,
    /// so a fresh member is not dragged to zero by the recompute itself.
    pub async fn recompute(store: &Store, profile_id: &str) -> Result<(), MarketError> {
        let ratings: Vec<i32> = store
            .reviews
            .all()
            .await
            .into_iter()
            .filter(|review| review.reviewee_id == profile_id)
            .map(|review| review.rating)
            .collect();

        if ratings.is_empty() {
            return Ok(());
        }

        let rating = Self::average(&ratings);
        store
            .profiles
            .update(profile_id, |profile| -> Result<(), MarketError> {
                profile.rating = rating;
                Ok(())
            })
            .await?
            .ok_or(MarketError::NotFound("Profile"))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateProfileDto, CreateReviewDto, ProfileType};
    use crate::services::MarketplaceService;
    use tempfile::TempDir;

    #[test]
    fn average_rounds_half_up_to_one_decimal() {
        assert_eq!(RatingService::average(&[5, 3]), 4.0);
        assert_eq!(RatingService::average(&[5, 4, 4]), 4.3); // 4.333…
        assert_eq!(RatingService::average(&[4, 5]), 4.5);
        assert_eq!(RatingService::average(&[2, 3, 3]), 2.7); // 2.666…
        assert_eq!(RatingService::average(&[1, 2]), 1.5);
        assert_eq!(RatingService::average(&[5]), 5.0);
    }

    fn profile_dto(name: &str, profile_type: ProfileType) -> CreateProfileDto {
        CreateProfileDto {
            name: name.to_string(),
            profile_type,
            bio: None,
            school: None,
            skills: None,
            phone: None,
            email: None,
            photo: None,
            neighborhood: None,
        }
    }

    fn review_dto(reviewee_id: &str, rating: i32) -> CreateReviewDto {
        CreateReviewDto {
            job_id: "job-1".to_string(),
            reviewer_id: "senior-1".to_string(),
            reviewee_id: reviewee_id.to_string(),
            rating,
            comment: "Quick and friendly".to_string(),
        }
    }

    #[tokio::test]
    async fn recompute_with_no_reviews_keeps_the_rating() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path()).unwrap();
        let profile = MarketplaceService::create_profile(&store, profile_dto("Jamie", ProfileType::Youth))
            .await
            .unwrap();

        RatingService::recompute(&store, &profile.id).await.unwrap();
        assert_eq!(store.profiles.get(&profile.id).await.unwrap().rating, 0.0);
    }

    #[tokio::test]
    async fn recompute_averages_only_the_reviewees_reviews() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path()).unwrap();
        let jamie = MarketplaceService::create_profile(&store, profile_dto("Jamie", ProfileType::Youth))
            .await
            .unwrap();
        let alex = MarketplaceService::create_profile(&store, profile_dto("Alex", ProfileType::Youth))
            .await
            .unwrap();

        MarketplaceService::submit_review(&store, review_dto(&jamie.id, 5))
            .await
            .unwrap();
        MarketplaceService::submit_review(&store, review_dto(&jamie.id, 4))
            .await
            .unwrap();
        MarketplaceService::submit_review(&store, review_dto(&alex.id, 1))
            .await
            .unwrap();

        assert_eq!(store.profiles.get(&jamie.id).await.unwrap().rating, 4.5);
        assert_eq!(store.profiles.get(&alex.id).await.unwrap().rating, 1.0);
    }
}
