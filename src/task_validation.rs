use crate::task::TaskDefinition;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone)]
pub struct TaskValidationError {
    message: String,
}

impl TaskValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TaskValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TaskValidationError {}

pub fn validate_task(task: &TaskDefinition) -> Result<(), TaskValidationError> {
    if task.id <= 0 {
        return Err(TaskValidationError::new(format!(
            "task id {} must be positive",
            task.id
        )));
    }

    if task.duration_days <= 0 {
        return Err(TaskValidationError::new(format!(
            "task {} has non-positive duration {}",
            task.id, task.duration_days
        )));
    }

    if task.predecessors.contains(&task.id) {
        return Err(TaskValidationError::new(format!(
            "task {} lists itself as a predecessor",
            task.id
        )));
    }

    Ok(())
}

pub fn validate_task_collection(tasks: &[TaskDefinition]) -> Result<(), TaskValidationError> {
    let mut seen_ids = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !seen_ids.insert(task.id) {
            return Err(TaskValidationError::new(format!(
                "duplicate task id {}",
                task.id
            )));
        }
        validate_task(task)?;
    }

    for task in tasks {
        for pred in &task.predecessors {
            if !seen_ids.contains(pred) {
                return Err(TaskValidationError::new(format!(
                    "task {} references unknown predecessor {}",
                    task.id, pred
                )));
            }
        }
    }

    Ok(())
}
