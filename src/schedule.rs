use crate::calculations::forward_pass::{ForwardPass, ScheduleError};
use crate::metadata::ProjectMetadata;
use crate::registry::ProjectPlan;
use crate::task::ScheduledTask;
use chrono::{Duration, NaiveDate};
use polars::prelude::*;

/// A computed schedule: one DataFrame row per scheduled task, in registry
/// input order, plus the project metadata the computation ran against.
pub struct Schedule {
    df: DataFrame,
    metadata: ProjectMetadata,
}

impl Schedule {
    /// Runs the forward pass for `plan` and materializes the result.
    pub fn compute(plan: &ProjectPlan) -> Result<Self, ScheduleError> {
        let engine = ForwardPass::new(plan.registry().tasks());
        let scheduled = engine.execute(plan.metadata().project_start_date)?;
        let schedule = Self::from_scheduled(plan.metadata().clone(), &scheduled)?;
        Ok(schedule)
    }

    fn from_scheduled(
        metadata: ProjectMetadata,
        tasks: &[ScheduledTask],
    ) -> Result<Self, PolarsError> {
        let mut df = DataFrame::empty_with_schema(&Self::default_schema());
        for task in tasks {
            let new_row = task.to_dataframe_row()?;
            df = df.vstack(&new_row)?;
        }
        Ok(Self { df, metadata })
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn metadata(&self) -> &ProjectMetadata {
        &self.metadata
    }

    pub fn project_name(&self) -> &str {
        &self.metadata.project_name
    }

    pub fn project_start_date(&self) -> NaiveDate {
        self.metadata.project_start_date
    }

    pub fn task_count(&self) -> usize {
        self.df.height()
    }

    pub fn tasks(&self) -> Result<Vec<ScheduledTask>, PolarsError> {
        let df = self.dataframe();
        let mut tasks = Vec::with_capacity(df.height());
        for idx in 0..df.height() {
            tasks.push(ScheduledTask::from_dataframe_row(df, idx)?);
        }
        Ok(tasks)
    }

    pub fn find_task(&self, task_id: i32) -> Result<Option<ScheduledTask>, PolarsError> {
        if self.df.height() == 0 {
            return Ok(None);
        }
        let ids = self.df.column("id")?.i32()?;
        for (idx, id_opt) in ids.into_iter().enumerate() {
            if id_opt == Some(task_id) {
                let task = ScheduledTask::from_dataframe_row(self.dataframe(), idx)?;
                return Ok(Some(task));
            }
        }
        Ok(None)
    }

    /// The latest end date across the schedule, `None` for an empty one.
    pub fn latest_finish(&self) -> Result<Option<NaiveDate>, PolarsError> {
        if self.df.height() == 0 {
            return Ok(None);
        }
        let end_dates = self.df.column("end_date")?.date()?;
        let mut latest: Option<NaiveDate> = None;
        for idx in 0..end_dates.len() {
            if let Some(days) = end_dates.get(idx) {
                let candidate = Self::i32_to_date(days);
                latest = Some(match latest {
                    Some(current) if current >= candidate => current,
                    _ => candidate,
                });
            }
        }
        Ok(latest)
    }

    fn default_schema() -> Schema {
        Schema::from_iter(vec![
            Field::new("id".into(), DataType::Int32),
            Field::new("name".into(), DataType::String),
            Field::new("start_offset".into(), DataType::Int64),
            Field::new("finish_offset".into(), DataType::Int64),
            Field::new("duration_days".into(), DataType::Int64),
            Field::new("resource".into(), DataType::String),
            Field::new("start_date".into(), DataType::Date),
            Field::new("end_date".into(), DataType::Date),
        ])
    }

    fn i32_to_date(days: i32) -> NaiveDate {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        epoch + Duration::days(days as i64)
    }
}
