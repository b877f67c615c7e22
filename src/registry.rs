use crate::graph::PlanDag;
use crate::metadata::ProjectMetadata;
use crate::task::TaskDefinition;
use crate::task_validation::{self, TaskValidationError};
use chrono::NaiveDate;
use petgraph::algo::toposort;

/// An immutable, ordered collection of task definitions. Construction
/// validates the full set: ids must be unique and positive, durations
/// strictly positive, predecessor references must resolve, and the
/// dependency relation must be acyclic.
#[derive(Debug, Clone)]
pub struct TaskRegistry {
    tasks: Vec<TaskDefinition>,
}

impl TaskRegistry {
    pub fn from_tasks(tasks: Vec<TaskDefinition>) -> Result<Self, TaskValidationError> {
        task_validation::validate_task_collection(&tasks)?;

        let dag = PlanDag::build(&tasks);
        if let Err(cycle) = toposort(&dag.graph, None) {
            return Err(TaskValidationError::new(format!(
                "dependency cycle detected involving task {}",
                dag.graph[cycle.node_id()]
            )));
        }

        Ok(Self { tasks })
    }

    pub fn tasks(&self) -> &[TaskDefinition] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn find(&self, task_id: i32) -> Option<&TaskDefinition> {
        self.tasks.iter().find(|task| task.id == task_id)
    }
}

/// The injected configuration for one run: project metadata plus the
/// validated task registry.
#[derive(Debug, Clone)]
pub struct ProjectPlan {
    metadata: ProjectMetadata,
    registry: TaskRegistry,
}

impl ProjectPlan {
    pub fn new(metadata: ProjectMetadata, registry: TaskRegistry) -> Self {
        Self { metadata, registry }
    }

    pub fn metadata(&self) -> &ProjectMetadata {
        &self.metadata
    }

    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    pub fn project_start_date(&self) -> NaiveDate {
        self.metadata.project_start_date
    }
}
