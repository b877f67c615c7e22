use chrono::NaiveDate;
use gantt_tool::{ScheduleError, TaskDefinition, TaskRegistry, compute_schedule};

fn task(id: i32, name: &str, duration_days: i64, predecessors: &[i32]) -> TaskDefinition {
    let mut task = TaskDefinition::new(id, name, duration_days);
    task.predecessors = predecessors.to_vec();
    task
}

#[test]
fn registry_rejects_duplicate_task_ids() {
    let err = TaskRegistry::from_tasks(vec![task(1, "A", 5, &[]), task(1, "B", 3, &[])])
        .expect_err("duplicate ids should be rejected");
    assert!(err.to_string().contains("duplicate task id 1"));
}

#[test]
fn registry_rejects_unknown_predecessor() {
    let err = TaskRegistry::from_tasks(vec![task(1, "A", 5, &[99])])
        .expect_err("unknown predecessor should be rejected");
    assert!(err.to_string().contains("unknown predecessor 99"));
}

#[test]
fn registry_rejects_self_reference() {
    let err = TaskRegistry::from_tasks(vec![task(1, "A", 5, &[1])])
        .expect_err("self reference should be rejected");
    assert!(err.to_string().contains("lists itself as a predecessor"));
}

#[test]
fn registry_rejects_zero_and_negative_durations() {
    let err = TaskRegistry::from_tasks(vec![task(1, "Milestone", 0, &[])])
        .expect_err("zero duration should be rejected");
    assert!(err.to_string().contains("non-positive duration"));

    let err = TaskRegistry::from_tasks(vec![task(1, "Broken", -3, &[])])
        .expect_err("negative duration should be rejected");
    assert!(err.to_string().contains("non-positive duration"));
}

#[test]
fn registry_rejects_non_positive_ids() {
    let err = TaskRegistry::from_tasks(vec![task(0, "A", 5, &[])])
        .expect_err("id 0 should be rejected");
    assert!(err.to_string().contains("must be positive"));
}

#[test]
fn registry_rejects_dependency_cycles() {
    let err = TaskRegistry::from_tasks(vec![
        task(1, "A", 5, &[3]),
        task(2, "B", 3, &[1]),
        task(3, "C", 2, &[2]),
    ])
    .expect_err("cycle should be rejected");
    assert!(err.to_string().contains("dependency cycle"));
}

#[test]
fn scheduler_rejects_cycles_in_raw_task_lists() {
    let tasks = vec![task(1, "A", 5, &[2]), task(2, "B", 3, &[1])];
    let err = compute_schedule(&tasks, NaiveDate::from_ymd_opt(2025, 6, 16).unwrap())
        .expect_err("cycle should be rejected");
    assert!(matches!(err, ScheduleError::Cycle { .. }));
}

#[test]
fn scheduler_rejects_unknown_predecessor_instead_of_ignoring_it() {
    // The predecessor lookup must never silently fall back to "no
    // predecessors"; a dangling reference is a configuration error.
    let tasks = vec![task(2, "B", 3, &[1])];
    let err = compute_schedule(&tasks, NaiveDate::from_ymd_opt(2025, 6, 16).unwrap())
        .expect_err("dangling predecessor should be rejected");
    assert!(matches!(err, ScheduleError::InvalidPlan(_)));
    assert!(err.to_string().contains("unknown predecessor 1"));
}

#[test]
fn registry_accessors_expose_ordered_tasks() {
    let registry = TaskRegistry::from_tasks(vec![
        task(2, "B", 3, &[]),
        task(1, "A", 5, &[2]),
    ])
    .unwrap();

    assert_eq!(registry.len(), 2);
    assert!(!registry.is_empty());
    assert_eq!(registry.tasks()[0].id, 2);
    assert_eq!(registry.find(1).map(|t| t.name.as_str()), Some("A"));
    assert!(registry.find(42).is_none());
}
