use chrono::Utc;

use super::MarketError;
use crate::models::{Job, JobStatus};

/// The job lifecycle state machine.
///
/// `open → accepted → completed`, with `cancelled` reachable from `open`
/// and `accepted`. Completed and cancelled jobs never change again. Each
/// transition stamps its timestamp only if it is still unset, so a
/// replayed call can never shift history.
pub struct LifecycleService;

impl LifecycleService {
    /// Claims an open job for `profile_id`.
    pub fn accept(job: &mut Job, profile_id: &str) -> Result<(), MarketError> {
        if job.status != JobStatus::Open {
            return Err(MarketError::InvalidTransition {
                action: "accept",
                status: job.status,
            });
        }

        job.status = JobStatus::Accepted;
        job.accepted_by = Some(profile_id.to_owned());
        if job.accepted_at.is_none() {
            job.accepted_at = Some(Utc::now());
        }
        Ok(())
    }

    /// Marks an accepted job as done.
    pub fn complete(job: &mut Job) -> Result<(), MarketError> {
        if job.status != JobStatus::Accepted {
            return Err(MarketError::InvalidTransition {
                action: "complete",
                status: job.status,
            });
        }

        job.status = JobStatus::Completed;
        if job.completed_at.is_none() {
            job.completed_at = Some(Utc::now());
        }
        Ok(())
    }

    /// Calls off a job that has not finished yet.
    pub fn cancel(job: &mut Job) -> Result<(), MarketError> {
        match job.status {
            JobStatus::Open | JobStatus::Accepted => {
                job.status = JobStatus::Cancelled;
                Ok(())
            }
            status => Err(MarketError::InvalidTransition {
                action: "cancel",
                status,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JobCategory, Location, TimePreference};

    fn open_job() -> Job {
        Job {
            id: "j1".to_string(),
            title: "Shovel the driveway".to_string(),
            description: "Fresh snow overnight".to_string(),
            category: JobCategory::SnowRemoval,
            location: Location {
                address: "12 Oak St".to_string(),
                lat: 46.24,
                lng: -63.13,
                neighborhood: None,
            },
            time_preference: TimePreference::Asap,
            scheduled_date: None,
            pay: 60.0,
            photos: vec![],
            posted_by: "senior-1".to_string(),
            posted_at: Utc::now(),
            status: JobStatus::Open,
            accepted_by: None,
            accepted_at: None,
            completed_at: None,
        }
    }

    #[test]
    fn accept_claims_an_open_job() {
        let mut job = open_job();
        LifecycleService::accept(&mut job, "youth-1").unwrap();

        assert_eq!(job.status, JobStatus::Accepted);
        assert_eq!(job.accepted_by.as_deref(), Some("youth-1"));
        assert!(job.accepted_at.is_some());
        assert!(job.completed_at.is_none());
    }

    #[test]
    fn accept_rejects_every_non_open_status() {
        for status in [JobStatus::Accepted, JobStatus::Completed, JobStatus::Cancelled] {
            let mut job = open_job();
            job.status = status;
            let err = LifecycleService::accept(&mut job, "youth-2").unwrap_err();
            assert!(matches!(err, MarketError::InvalidTransition { action: "accept", .. }));
            assert_eq!(job.status, status);
        }
    }

    #[test]
    fn second_accept_does_not_steal_the_job() {
        let mut job = open_job();
        LifecycleService::accept(&mut job, "youth-1").unwrap();
        let first_stamp = job.accepted_at;

        LifecycleService::accept(&mut job, "youth-2").unwrap_err();
        assert_eq!(job.accepted_by.as_deref(), Some("youth-1"));
        assert_eq!(job.accepted_at, first_stamp);
    }

    #[test]
    fn complete_requires_an_accepted_job() {
        let mut job = open_job();
        let err = LifecycleService::complete(&mut job).unwrap_err();
        assert!(matches!(err, MarketError::InvalidTransition { action: "complete", .. }));

        LifecycleService::accept(&mut job, "youth-1").unwrap();
        LifecycleService::complete(&mut job).unwrap();
        assert_eq!(job.status, JobStatus::Completed);

        // A finished job carries the full ordered history.
        let accepted_at = job.accepted_at.unwrap();
        let completed_at = job.completed_at.unwrap();
        assert!(job.posted_at <= accepted_at);
        assert!(accepted_at <= completed_at);
    }

    #[test]
    fn cancel_works_from_open_and_accepted_only() {
        let mut job = open_job();
        LifecycleService::cancel(&mut job).unwrap();
        assert_eq!(job.status, JobStatus::Cancelled);

        let mut job = open_job();
        LifecycleService::accept(&mut job, "youth-1").unwrap();
        LifecycleService::cancel(&mut job).unwrap();
        assert_eq!(job.status, JobStatus::Cancelled);

        let mut done = open_job();
        LifecycleService::accept(&mut done, "youth-1").unwrap();
        LifecycleService::complete(&mut done).unwrap();
        let err = LifecycleService::cancel(&mut done).unwrap_err();
        assert!(matches!(
            err,
            MarketError::InvalidTransition { action: "cancel", status: JobStatus::Completed }
        ));
    }

    #[test]
    fn terminal_states_stay_terminal() {
        let mut job = open_job();
        LifecycleService::cancel(&mut job).unwrap();

        assert!(LifecycleService::accept(&mut job, "youth-1").is_err());
        assert!(LifecycleService::complete(&mut job).is_err());
        assert!(LifecycleService::cancel(&mut job).is_err());
        assert_eq!(job.status, JobStatus::Cancelled);
        assert!(job.accepted_by.is_none());

        let mut done = open_job();
        LifecycleService::accept(&mut done, "youth-1").unwrap();
        LifecycleService::complete(&mut done).unwrap();
        let finished_at = done.completed_at;

        let err = LifecycleService::complete(&mut done).unwrap_err();
        assert!(matches!(
            err,
            MarketError::InvalidTransition { action: "complete", status: JobStatus::Completed }
        ));
        assert!(LifecycleService::accept(&mut done, "youth-2").is_err());
        assert_eq!(done.status, JobStatus::Completed);
        assert_eq!(done.completed_at, finished_at);
    }

    #[test]
    fn timestamps_are_not_overwritten_once_set() {
        let mut job = open_job();
        let stamp = Utc::now() - chrono::Duration::hours(2);
        job.accepted_at = Some(stamp);

        LifecycleService::accept(&mut job, "youth-1").unwrap();
        assert_eq!(job.accepted_at, Some(stamp));

        job.completed_at = Some(stamp);
        LifecycleService::complete(&mut job).unwrap();
        assert_eq!(job.completed_at, Some(stamp));
    }
}
