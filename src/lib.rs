pub mod calculations;
pub mod config;
pub mod graph;
pub mod metadata;
pub mod registry;
pub mod render;
pub mod schedule;
pub mod task;
pub mod task_validation;

pub use calculations::forward_pass::{ForwardPass, ScheduleError, compute_schedule};
pub use config::{
    ConfigError, load_project_from_csv, load_project_from_json, save_project_to_csv,
    save_project_to_json,
};
pub use graph::PlanDag;
pub use metadata::ProjectMetadata;
pub use registry::{ProjectPlan, TaskRegistry};
pub use render::{render_schedule_table, render_timeline};
pub use schedule::Schedule;
pub use task::{ScheduledTask, TaskDefinition};
pub use task_validation::TaskValidationError;
