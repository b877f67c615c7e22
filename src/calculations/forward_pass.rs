use crate::graph::PlanDag;
use crate::task::{ScheduledTask, TaskDefinition};
use crate::task_validation::{self, TaskValidationError};
use chrono::{Duration, NaiveDate};
use petgraph::Direction;
use petgraph::algo::toposort;
use polars::prelude::PolarsError;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug)]
pub enum ScheduleError {
    InvalidPlan(TaskValidationError),
    Cycle { task_id: i32 },
    DataFrame(PolarsError),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::InvalidPlan(err) => write!(f, "invalid project plan: {err}"),
            ScheduleError::Cycle { task_id } => {
                write!(f, "dependency cycle detected involving task {task_id}")
            }
            ScheduleError::DataFrame(err) => write!(f, "dataframe error: {err}"),
        }
    }
}

impl std::error::Error for ScheduleError {}

impl From<TaskValidationError> for ScheduleError {
    fn from(value: TaskValidationError) -> Self {
        Self::InvalidPlan(value)
    }
}

impl From<PolarsError> for ScheduleError {
    fn from(value: PolarsError) -> Self {
        Self::DataFrame(value)
    }
}

/// Forward-pass engine: assigns each task the earliest start permitted by
/// its predecessors' finish offsets.
pub struct ForwardPass<'a> {
    tasks: &'a [TaskDefinition],
}

impl<'a> ForwardPass<'a> {
    pub fn new(tasks: &'a [TaskDefinition]) -> Self {
        Self { tasks }
    }

    /// Computes one [`ScheduledTask`] per definition, preserving the input
    /// order of `tasks` in the output. Tasks are processed in topological
    /// order internally, so the input order itself carries no scheduling
    /// meaning; a cyclic plan is rejected before any offsets are assigned.
    pub fn execute(&self, project_start: NaiveDate) -> Result<Vec<ScheduledTask>, ScheduleError> {
        task_validation::validate_task_collection(self.tasks)?;

        let dag = PlanDag::build(self.tasks);
        let order = toposort(&dag.graph, None).map_err(|cycle| ScheduleError::Cycle {
            task_id: dag.graph[cycle.node_id()],
        })?;

        let mut start_offsets: HashMap<i32, i64> = HashMap::with_capacity(self.tasks.len());
        let mut finish_offsets: HashMap<i32, i64> = HashMap::with_capacity(self.tasks.len());

        for node_ix in order {
            let task_id = dag.graph[node_ix];

            // Start is the max finish among predecessors, 0 without any.
            let start_offset = dag
                .graph
                .neighbors_directed(node_ix, Direction::Incoming)
                .filter_map(|pred_ix| finish_offsets.get(&dag.graph[pred_ix]))
                .max()
                .copied()
                .unwrap_or(0);

            let duration = *dag.durations.get(&task_id).unwrap_or(&0);
            start_offsets.insert(task_id, start_offset);
            finish_offsets.insert(task_id, start_offset + duration);
        }

        let mut scheduled = Vec::with_capacity(self.tasks.len());
        for task in self.tasks {
            let start_offset = *start_offsets.get(&task.id).unwrap_or(&0);
            let finish_offset = *finish_offsets.get(&task.id).unwrap_or(&start_offset);
            scheduled.push(ScheduledTask {
                id: task.id,
                name: task.name.clone(),
                start_offset,
                finish_offset,
                duration_days: task.duration_days,
                resource: task.resource.clone(),
                start_date: project_start + Duration::days(start_offset),
                end_date: project_start + Duration::days(finish_offset),
            });
        }

        Ok(scheduled)
    }
}

/// Pure forward pass over an ordered task list. See [`ForwardPass::execute`].
pub fn compute_schedule(
    tasks: &[TaskDefinition],
    project_start: NaiveDate,
) -> Result<Vec<ScheduledTask>, ScheduleError> {
    ForwardPass::new(tasks).execute(project_start)
}
