#[cfg(test)]
mod tests {
    use crate::constants::MAX_ACTIVE_GOALS;
    use crate::errors::{Error, ValidationError};
    use crate::events::{DomainEvent, MockDomainEventSink};
    use crate::goals::{
        Goal, GoalError, GoalService, GoalServiceTrait, GoalStatus, GoalUpdate, NewGoal,
    };
    use crate::storage::{EntityKind, InMemoryKeyValueStore, YearStore};
    use crate::utils::time_utils::local_year;
    use crate::utils::{Clock, FixedClock};
    use chrono::{DateTime, Duration, Local, TimeZone, Utc};
    use std::sync::Arc;

    struct Harness {
        service: GoalService,
        store: Arc<YearStore>,
        clock: Arc<FixedClock>,
        sink: MockDomainEventSink,
    }

    fn mid_2025() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn harness() -> Harness {
        let store = Arc::new(YearStore::new(Arc::new(InMemoryKeyValueStore::new())));
        let clock = Arc::new(FixedClock::new(mid_2025()));
        let sink = MockDomainEventSink::new();
        let service = GoalService::new(store.clone(), clock.clone())
            .with_event_sink(Arc::new(sink.clone()));
        Harness {
            service,
            store,
            clock,
            sink,
        }
    }

    fn stored_goal(id: &str, status: GoalStatus) -> Goal {
        Goal {
            id: id.to_string(),
            title: format!("Goal {}", id),
            description: String::new(),
            category: "general".to_string(),
            target_date: None,
            status,
            progress: if status == GoalStatus::Achieved { 100 } else { 0 },
            created_at: mid_2025(),
            updated_at: mid_2025(),
            achieved_at: (status == GoalStatus::Achieved).then(mid_2025),
            year: 2025,
        }
    }

    async fn seed(store: &YearStore, goals: &[Goal]) {
        assert!(store.write(EntityKind::Goals, 2025, goals).await);
    }

    fn new_goal(title: &str) -> NewGoal {
        NewGoal {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_goal_applies_defaults() {
        let h = harness();
        let goal = h
            .service
            .create_goal(NewGoal {
                title: "  Run a 10k ".to_string(),
                description: None,
                category: None,
                target_date: None,
            })
            .await
            .unwrap();

        assert_eq!(goal.title, "Run a 10k");
        assert_eq!(goal.description, "");
        assert_eq!(goal.category, "general");
        assert_eq!(goal.status, GoalStatus::Active);
        assert_eq!(goal.progress, 0);
        assert_eq!(goal.created_at, mid_2025());
        assert_eq!(goal.updated_at, mid_2025());
        assert_eq!(goal.achieved_at, None);
        assert_eq!(goal.year, 2025);

        let stored: Vec<Goal> = h.store.read(EntityKind::Goals, 2025);
        assert_eq!(stored, vec![goal.clone()]);
        assert_eq!(
            h.sink.events(),
            vec![DomainEvent::goal_created(goal.id, 2025)]
        );
    }

    #[tokio::test]
    async fn test_create_goal_assigns_unique_ids() {
        let h = harness();
        let a = h.service.create_goal(new_goal("A")).await.unwrap();
        let b = h.service.create_goal(new_goal("B")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(h.service.get_all_goals(None).unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_goal_rejects_invalid_input() {
        let h = harness();
        let err = h.service.create_goal(new_goal("   ")).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(_))
        ));
        assert!(h.service.get_all_goals(None).unwrap().is_empty());
        assert!(h.sink.is_empty());
    }

    #[tokio::test]
    async fn test_create_goal_fails_at_active_cap() {
        let h = harness();
        let goals: Vec<Goal> = (0..MAX_ACTIVE_GOALS)
            .map(|i| stored_goal(&i.to_string(), GoalStatus::Active))
            .collect();
        seed(&h.store, &goals).await;

        let err = h.service.create_goal(new_goal("One too many")).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Goal(GoalError::CapacityExceeded { max: 150 })
        ));
        assert_eq!(err.to_string(), "Maximum 150 active goals allowed per year");
        assert_eq!(
            h.service.get_all_goals(None).unwrap().len(),
            MAX_ACTIVE_GOALS
        );
    }

    #[tokio::test]
    async fn test_create_goal_succeeds_just_below_cap() {
        let h = harness();
        let goals: Vec<Goal> = (0..MAX_ACTIVE_GOALS - 1)
            .map(|i| stored_goal(&i.to_string(), GoalStatus::Active))
            .collect();
        seed(&h.store, &goals).await;

        h.service.create_goal(new_goal("Last one")).await.unwrap();
        assert_eq!(
            h.service.get_active_goals().unwrap().len(),
            MAX_ACTIVE_GOALS
        );

        let err = h.service.create_goal(new_goal("Over")).await.unwrap_err();
        assert!(matches!(err, Error::Goal(GoalError::CapacityExceeded { .. })));
    }

    #[tokio::test]
    async fn test_achieved_goals_do_not_count_towards_cap() {
        let h = harness();
        let mut goals: Vec<Goal> = (0..MAX_ACTIVE_GOALS - 1)
            .map(|i| stored_goal(&i.to_string(), GoalStatus::Active))
            .collect();
        goals.push(stored_goal("done", GoalStatus::Achieved));
        seed(&h.store, &goals).await;

        assert!(h.service.create_goal(new_goal("Fits")).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_goal_merges_fields_and_refreshes_timestamp() {
        let h = harness();
        let goal = h.service.create_goal(new_goal("Learn piano")).await.unwrap();
        h.clock.advance(Duration::hours(1));

        let updated = h
            .service
            .update_goal(
                &goal.id,
                GoalUpdate {
                    description: Some("Grade 1 exam".to_string()),
                    category: Some("hobbies".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Learn piano");
        assert_eq!(updated.description, "Grade 1 exam");
        assert_eq!(updated.category, "hobbies");
        assert_eq!(updated.created_at, goal.created_at);
        assert_eq!(updated.updated_at, mid_2025() + Duration::hours(1));
        assert_eq!(h.service.get_goal(&goal.id).unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_goal_not_found() {
        let h = harness();
        let err = h
            .service
            .update_goal("missing", GoalUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Goal(GoalError::NotFound(ref id)) if id == "missing"));
        assert_eq!(err.to_string(), "Goal not found");
    }

    #[tokio::test]
    async fn test_update_goal_invalid_patch_keeps_stored_goal() {
        let h = harness();
        let goal = h.service.create_goal(new_goal("Garden")).await.unwrap();

        let result = h
            .service
            .update_goal(
                &goal.id,
                GoalUpdate {
                    title: Some(String::new()),
                    ..Default::default()
                },
            )
            .await;
        assert!(result.is_err());
        assert_eq!(h.service.get_goal(&goal.id).unwrap(), goal);
    }

    #[tokio::test]
    async fn test_delete_goal_removes_only_matching_goal() {
        let h = harness();
        let keep = h.service.create_goal(new_goal("Keep")).await.unwrap();
        let dropped = h.service.create_goal(new_goal("Drop")).await.unwrap();
        h.sink.clear();

        assert!(h.service.delete_goal(&dropped.id).await.unwrap());

        let remaining = h.service.get_all_goals(None).unwrap();
        assert_eq!(remaining, vec![keep]);
        assert_eq!(
            h.sink.events(),
            vec![DomainEvent::goal_deleted(dropped.id.clone(), 2025)]
        );
        assert!(matches!(
            h.service.get_goal(&dropped.id),
            Err(Error::Goal(GoalError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_goal_is_noop() {
        let h = harness();
        h.service.create_goal(new_goal("Stay")).await.unwrap();
        h.sink.clear();

        assert!(!h.service.delete_goal("missing").await.unwrap());
        assert_eq!(h.service.get_all_goals(None).unwrap().len(), 1);
        assert!(h.sink.is_empty());
    }

    #[tokio::test]
    async fn test_active_goals_view() {
        let h = harness();
        seed(
            &h.store,
            &[
                stored_goal("a", GoalStatus::Active),
                stored_goal("b", GoalStatus::Achieved),
                stored_goal("c", GoalStatus::Active),
            ],
        )
        .await;

        let active: Vec<String> = h
            .service
            .get_active_goals()
            .unwrap()
            .into_iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(active, vec!["a".to_string(), "c".to_string()]);
    }

    #[tokio::test]
    async fn test_goals_are_scoped_to_their_year() {
        let h = harness();
        let old = h.service.create_goal(new_goal("2025 goal")).await.unwrap();

        h.clock
            .set(Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap());
        let new = h.service.create_goal(new_goal("2026 goal")).await.unwrap();
        assert_eq!(new.year, 2026);

        assert_eq!(h.service.get_all_goals(None).unwrap(), vec![new]);
        assert_eq!(h.service.get_all_goals(Some(2025)).unwrap(), vec![old.clone()]);

        // Mutations only see the current year.
        assert!(matches!(
            h.service.get_goal(&old.id),
            Err(Error::Goal(GoalError::NotFound(_)))
        ));
        assert!(!h.service.delete_goal(&old.id).await.unwrap());
        assert_eq!(h.service.get_all_goals(Some(2025)).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_goal_years_lists_non_empty_buckets() {
        let h = harness();
        assert!(h.service.get_goal_years().unwrap().is_empty());

        h.service.create_goal(new_goal("This year")).await.unwrap();
        h.store
            .write(EntityKind::Goals, 2023, &[stored_goal("old", GoalStatus::Achieved)])
            .await;

        assert_eq!(h.service.get_goal_years().unwrap(), vec![2025, 2023]);
    }

    #[tokio::test]
    async fn test_empty_patch_leaves_goal_untouched() {
        let h = harness();
        let goal = h.service.create_goal(new_goal("Unchanged")).await.unwrap();
        h.sink.clear();
        h.clock.advance(Duration::hours(1));

        let same = h
            .service
            .update_goal(&goal.id, GoalUpdate::default())
            .await
            .unwrap();

        assert_eq!(same, goal);
        assert!(h.sink.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_keep_every_goal() {
        let h = harness();
        let service = Arc::new(h.service);

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move {
                    service
                        .create_goal(new_goal(&format!("Goal {}", i)))
                        .await
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let stored: Vec<Goal> = h.store.read(EntityKind::Goals, 2025);
        assert_eq!(stored.len(), 50);
    }

    /// Ticks one second on every reading.
    struct TickingClock {
        now: std::sync::Mutex<DateTime<Utc>>,
    }

    impl Clock for TickingClock {
        fn now(&self) -> DateTime<Utc> {
            let mut now = self.now.lock().unwrap();
            let current = *now;
            *now += Duration::seconds(1);
            current
        }
    }

    #[tokio::test]
    async fn test_goal_year_matches_creation_time_at_new_year() {
        let last_second = Local
            .with_ymd_and_hms(2025, 12, 31, 23, 59, 59)
            .unwrap()
            .with_timezone(&Utc);
        let store = Arc::new(YearStore::new(Arc::new(InMemoryKeyValueStore::new())));
        let clock = Arc::new(TickingClock {
            now: std::sync::Mutex::new(last_second),
        });
        let service = GoalService::new(store, clock);

        let goal = service.create_goal(new_goal("Countdown")).await.unwrap();

        assert_eq!(goal.year, 2025);
        assert_eq!(goal.created_at, last_second);
        assert_eq!(local_year(goal.created_at), goal.year);
    }
}
