//! Aggregate statistics over a user's resources.
//!
//! Stats are always computed over the full, unfiltered set: the dashboard
//! numbers describe the library, not whatever the search box currently shows.

use serde::Serialize;

use crate::model::{Resource, Status};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ResourceStats {
    pub total: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub favorites: usize,
    /// Mean of every resource's progress. `0.0` for an empty library.
    pub avg_progress: f64,
}

impl ResourceStats {
    /// Average progress rounded to the nearest whole percent.
    pub fn rounded_avg_progress(&self) -> u8 {
        self.avg_progress.round() as u8
    }

    /// Share of resources marked completed, as a percentage.
    pub fn completion_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 * 100.0 / self.total as f64
    }
}

pub fn compute_stats(resources: &[Resource]) -> ResourceStats {
    let mut stats = ResourceStats {
        total: resources.len(),
        ..Default::default()
    };
    let mut progress_sum: u64 = 0;

    for resource in resources {
        match resource.status {
            Status::NotStarted => stats.not_started += 1,
            Status::InProgress => stats.in_progress += 1,
            Status::Completed => stats.completed += 1,
            // Counted in `total` and the average, but in no status bucket.
            Status::Unknown => {}
        }
        if resource.is_favorite {
            stats.favorites += 1;
        }
        progress_sum += u64::from(resource.progress.value());
    }

    stats.avg_progress = if stats.total == 0 {
        0.0
    } else {
        progress_sum as f64 / stats.total as f64
    };

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Level, Priority, Progress};
    use chrono::Utc;
    use uuid::Uuid;

    fn resource(progress: u8, status: Status) -> Resource {
        let now = Utc::now();
        Resource {
            id: Uuid::new_v4(),
            user_id: "u1".into(),
            title: "Item".into(),
            description: None,
            category_id: None,
            level: Level::Beginner,
            priority: Priority::Medium,
            status,
            progress: Progress::new(progress).unwrap(),
            links: Vec::new(),
            files: Vec::new(),
            is_favorite: false,
            is_public: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn empty_library_has_zero_stats() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.in_progress, 0);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.avg_progress, 0.0);
        assert!(!stats.avg_progress.is_nan());
        assert_eq!(stats.completion_rate(), 0.0);
    }

    #[test]
    fn single_in_progress_resource() {
        let stats = compute_stats(&[resource(40, Status::InProgress)]);
        assert_eq!(stats.total, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.avg_progress, 40.0);
    }

    #[test]
    fn average_of_zero_fifty_hundred_is_fifty() {
        let stats = compute_stats(&[
            resource(0, Status::NotStarted),
            resource(50, Status::InProgress),
            resource(100, Status::Completed),
        ]);
        assert_eq!(stats.avg_progress, 50.0);
        assert_eq!(stats.not_started, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.completed, 1);
    }

    #[test]
    fn result_does_not_depend_on_order() {
        let mut list = vec![
            resource(10, Status::Completed),
            resource(35, Status::InProgress),
            resource(90, Status::NotStarted),
        ];
        let forward = compute_stats(&list);
        list.reverse();
        assert_eq!(forward, compute_stats(&list));
    }

    #[test]
    fn unknown_status_is_left_out_of_every_bucket() {
        let stats = compute_stats(&[
            resource(60, Status::Unknown),
            resource(20, Status::InProgress),
        ]);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.not_started, 0);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.avg_progress, 40.0);
    }

    #[test]
    fn completed_status_is_independent_of_progress() {
        // Completed at 40% still counts as completed.
        let stats = compute_stats(&[resource(40, Status::Completed)]);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.avg_progress, 40.0);
    }

    #[test]
    fn rounding_and_rates() {
        let mut fav = resource(33, Status::Completed);
        fav.is_favorite = true;
        let stats = compute_stats(&[fav, resource(34, Status::InProgress), resource(0, Status::NotStarted)]);

        assert_eq!(stats.favorites, 1);
        assert!((stats.avg_progress - 22.333).abs() < 0.01);
        assert_eq!(stats.rounded_avg_progress(), 22);
        assert!((stats.completion_rate() - 33.333).abs() < 0.01);
    }
}
