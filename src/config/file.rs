use super::{ConfigError, ConfigResult};
use crate::metadata::ProjectMetadata;
use crate::registry::{ProjectPlan, TaskRegistry};
use crate::task::TaskDefinition;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

#[derive(Serialize, Deserialize)]
struct ProjectSnapshot {
    metadata: ProjectMetadata,
    tasks: Vec<TaskDefinition>,
}

impl ProjectSnapshot {
    fn from_plan(plan: &ProjectPlan) -> Self {
        Self {
            metadata: plan.metadata().clone(),
            tasks: plan.registry().tasks().to_vec(),
        }
    }

    fn into_plan(self) -> ConfigResult<ProjectPlan> {
        let registry = TaskRegistry::from_tasks(self.tasks)
            .map_err(|err| ConfigError::InvalidData(err.to_string()))?;
        Ok(ProjectPlan::new(self.metadata, registry))
    }
}

pub fn save_project_to_json<P: AsRef<Path>>(plan: &ProjectPlan, path: P) -> ConfigResult<()> {
    let snapshot = ProjectSnapshot::from_plan(plan);
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &snapshot)?;
    Ok(())
}

pub fn load_project_from_json<P: AsRef<Path>>(path: P) -> ConfigResult<ProjectPlan> {
    let file = File::open(path)?;
    let snapshot: ProjectSnapshot = serde_json::from_reader(file)?;
    snapshot.into_plan()
}

#[derive(Default, Serialize, Deserialize)]
struct TaskCsvRecord {
    id: i32,
    name: String,
    duration_days: i64,
    predecessors: String,
    resource: String,
    #[serde(default)]
    metadata_json: String,
}

impl From<&TaskDefinition> for TaskCsvRecord {
    fn from(task: &TaskDefinition) -> Self {
        let mut record = TaskCsvRecord::default();
        record.id = task.id;
        record.name = task.name.clone();
        record.duration_days = task.duration_days;
        record.predecessors = join_i32(&task.predecessors);
        record.resource = task.resource.clone();
        record
    }
}

impl TaskCsvRecord {
    fn metadata_row(metadata: &ProjectMetadata) -> ConfigResult<Self> {
        let metadata_json = serde_json::to_string(metadata)?;
        let mut record = TaskCsvRecord::default();
        record.name = "__metadata__".to_string();
        record.metadata_json = metadata_json;
        Ok(record)
    }

    fn is_metadata_row(&self) -> bool {
        !self.metadata_json.trim().is_empty()
    }

    fn into_task(self) -> ConfigResult<TaskDefinition> {
        if self.is_metadata_row() {
            return Err(ConfigError::InvalidData(
                "metadata row cannot be converted to task".into(),
            ));
        }
        let mut task = TaskDefinition::new(self.id, self.name, self.duration_days);
        task.predecessors = split_i32(&self.predecessors)?;
        task.resource = self.resource;
        Ok(task)
    }
}

pub fn save_project_to_csv<P: AsRef<Path>>(plan: &ProjectPlan, path: P) -> ConfigResult<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    writer.serialize(TaskCsvRecord::metadata_row(plan.metadata())?)?;
    for task in plan.registry().tasks() {
        writer.serialize(TaskCsvRecord::from(task))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn load_project_from_csv<P: AsRef<Path>>(path: P) -> ConfigResult<ProjectPlan> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut tasks = Vec::new();
    let mut metadata: Option<ProjectMetadata> = None;
    for record in reader.deserialize::<TaskCsvRecord>() {
        let record = record?;
        if record.is_metadata_row() {
            if metadata.is_some() {
                return Err(ConfigError::InvalidData(
                    "CSV file contained multiple metadata rows".into(),
                ));
            }
            metadata = Some(serde_json::from_str(&record.metadata_json).map_err(|err| {
                ConfigError::InvalidData(format!("invalid metadata json: {err}"))
            })?);
            continue;
        }
        tasks.push(record.into_task()?);
    }

    if tasks.is_empty() {
        return Err(ConfigError::InvalidData(
            "CSV file contained no tasks".into(),
        ));
    }

    let registry = TaskRegistry::from_tasks(tasks)
        .map_err(|err| ConfigError::InvalidData(err.to_string()))?;
    Ok(ProjectPlan::new(metadata.unwrap_or_default(), registry))
}

fn join_i32(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn split_i32(input: &str) -> ConfigResult<Vec<i32>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    input
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<i32>()
                .map_err(|e| ConfigError::InvalidData(format!("invalid integer '{part}': {e}")))
        })
        .collect()
}
