use chrono::NaiveDate;
use gantt_tool::{
    ConfigError, ProjectMetadata, ProjectPlan, TaskDefinition, TaskRegistry,
    load_project_from_csv, load_project_from_json, save_project_to_csv, save_project_to_json,
};
use std::fs;
use tempfile::NamedTempFile;

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn build_sample_plan() -> ProjectPlan {
    let mut metadata = ProjectMetadata::default();
    metadata.project_name = "Export Project".into();
    metadata.project_description = "Testing config helpers".into();
    metadata.project_start_date = d(2025, 6, 16);

    let mut task1 = TaskDefinition::new(1, "Design", 5);
    task1.resource = "Design team".into();

    let mut task2 = TaskDefinition::new(2, "Build", 8);
    task2.predecessors = vec![1];
    task2.resource = "Engineering".into();

    let mut task3 = TaskDefinition::new(3, "Verify", 3);
    task3.predecessors = vec![1, 2];

    let registry = TaskRegistry::from_tasks(vec![task1, task2, task3]).unwrap();
    ProjectPlan::new(metadata, registry)
}

#[test]
fn json_round_trip_preserves_plan() {
    let plan = build_sample_plan();
    let file = NamedTempFile::new().unwrap();

    save_project_to_json(&plan, file.path()).unwrap();
    let loaded = load_project_from_json(file.path()).unwrap();

    assert_eq!(loaded.metadata(), plan.metadata());
    assert_eq!(loaded.registry().tasks(), plan.registry().tasks());
}

#[test]
fn csv_round_trip_preserves_plan_and_metadata() {
    let plan = build_sample_plan();
    let file = NamedTempFile::new().unwrap();

    save_project_to_csv(&plan, file.path()).unwrap();
    let loaded = load_project_from_csv(file.path()).unwrap();

    assert_eq!(loaded.metadata(), plan.metadata());
    assert_eq!(loaded.registry().tasks(), plan.registry().tasks());
}

#[test]
fn csv_without_metadata_row_uses_defaults() {
    let file = NamedTempFile::new().unwrap();
    fs::write(
        file.path(),
        "id,name,duration_days,predecessors,resource\n1,Kick-off,5,,Team\n2,Build,3,1,Team\n",
    )
    .unwrap();

    let loaded = load_project_from_csv(file.path()).unwrap();

    assert_eq!(loaded.metadata(), &ProjectMetadata::default());
    assert_eq!(loaded.registry().len(), 2);
    assert_eq!(loaded.registry().tasks()[1].predecessors, vec![1]);
}

#[test]
fn csv_with_multi_predecessor_list_parses() {
    let file = NamedTempFile::new().unwrap();
    fs::write(
        file.path(),
        "id,name,duration_days,predecessors,resource\n1,A,5,,\n2,B,3,,\n3,C,2,\"1,2\",\n",
    )
    .unwrap();

    let loaded = load_project_from_csv(file.path()).unwrap();
    assert_eq!(loaded.registry().tasks()[2].predecessors, vec![1, 2]);
}

#[test]
fn empty_csv_is_rejected() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), "id,name,duration_days,predecessors,resource\n").unwrap();

    let err = load_project_from_csv(file.path()).expect_err("empty file should be rejected");
    assert!(matches!(err, ConfigError::InvalidData(_)));
    assert!(err.to_string().contains("no tasks"));
}

#[test]
fn json_with_unknown_predecessor_is_rejected_at_load() {
    let file = NamedTempFile::new().unwrap();
    fs::write(
        file.path(),
        r#"{
  "metadata": {
    "project_name": "Broken",
    "project_description": "",
    "project_start_date": "2025-06-16"
  },
  "tasks": [
    { "id": 1, "name": "A", "duration_days": 5, "predecessors": [9] }
  ]
}"#,
    )
    .unwrap();

    let err = load_project_from_json(file.path()).expect_err("dangling predecessor rejected");
    assert!(matches!(err, ConfigError::InvalidData(_)));
    assert!(err.to_string().contains("unknown predecessor 9"));
}

#[test]
fn json_with_cycle_is_rejected_at_load() {
    let file = NamedTempFile::new().unwrap();
    fs::write(
        file.path(),
        r#"{
  "metadata": {
    "project_name": "Cyclic",
    "project_description": "",
    "project_start_date": "2025-06-16"
  },
  "tasks": [
    { "id": 1, "name": "A", "duration_days": 5, "predecessors": [2] },
    { "id": 2, "name": "B", "duration_days": 3, "predecessors": [1] }
  ]
}"#,
    )
    .unwrap();

    let err = load_project_from_json(file.path()).expect_err("cycle rejected");
    assert!(err.to_string().contains("dependency cycle"));
}

#[test]
fn json_task_defaults_apply_for_omitted_fields() {
    let file = NamedTempFile::new().unwrap();
    fs::write(
        file.path(),
        r#"{
  "metadata": {
    "project_name": "Minimal",
    "project_description": "",
    "project_start_date": "2025-06-16"
  },
  "tasks": [
    { "id": 1, "name": "A", "duration_days": 5 }
  ]
}"#,
    )
    .unwrap();

    let loaded = load_project_from_json(file.path()).unwrap();
    let task = &loaded.registry().tasks()[0];
    assert!(task.predecessors.is_empty());
    assert!(task.resource.is_empty());
}
