use chrono::{Duration, NaiveDate};
use polars::prelude::PlSmallStr;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// A task record as supplied by the project plan: identity, duration in
/// day units, predecessor identities, and a descriptive resource label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDefinition {
    pub id: i32,
    pub name: String,
    pub duration_days: i64,
    #[serde(default)]
    pub predecessors: Vec<i32>,
    #[serde(default)]
    pub resource: String,
}

impl TaskDefinition {
    pub fn new(id: i32, name: impl Into<String>, duration_days: i64) -> Self {
        Self {
            id,
            name: name.into(),
            duration_days,
            predecessors: Vec::new(),
            resource: String::new(),
        }
    }
}

/// The computed counterpart of a [`TaskDefinition`]: day offsets relative to
/// the project start plus the corresponding calendar dates.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledTask {
    pub id: i32,
    pub name: String,
    pub start_offset: i64,
    pub finish_offset: i64,
    pub duration_days: i64,
    pub resource: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ScheduledTask {
    pub fn to_dataframe_row(&self) -> PolarsResult<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(8);

        let id_data: [i32; 1] = [self.id];
        columns.push(Series::new(PlSmallStr::from_static("id"), id_data).into_column());

        let name_data: [&str; 1] = [self.name.as_str()];
        columns.push(Series::new(PlSmallStr::from_static("name"), name_data).into_column());

        let start_data: [i64; 1] = [self.start_offset];
        columns.push(
            Series::new(PlSmallStr::from_static("start_offset"), start_data).into_column(),
        );

        let finish_data: [i64; 1] = [self.finish_offset];
        columns.push(
            Series::new(PlSmallStr::from_static("finish_offset"), finish_data).into_column(),
        );

        let duration_data: [i64; 1] = [self.duration_days];
        columns.push(
            Series::new(PlSmallStr::from_static("duration_days"), duration_data).into_column(),
        );

        let resource_data: [&str; 1] = [self.resource.as_str()];
        columns.push(Series::new(PlSmallStr::from_static("resource"), resource_data).into_column());

        columns.push(Self::series_from_date("start_date", self.start_date)?.into_column());
        columns.push(Self::series_from_date("end_date", self.end_date)?.into_column());

        DataFrame::new(columns)
    }

    pub fn from_dataframe_row(df: &DataFrame, row_idx: usize) -> PolarsResult<Self> {
        let id = df
            .column("id")?
            .i32()?
            .get(row_idx)
            .ok_or_else(|| PolarsError::ComputeError("scheduled row missing id".into()))?;

        let name = df
            .column("name")?
            .str()?
            .get(row_idx)
            .unwrap_or("")
            .to_string();

        let start_offset = df
            .column("start_offset")?
            .i64()?
            .get(row_idx)
            .unwrap_or(0);

        let finish_offset = df
            .column("finish_offset")?
            .i64()?
            .get(row_idx)
            .unwrap_or(0);

        let duration_days = df
            .column("duration_days")?
            .i64()?
            .get(row_idx)
            .unwrap_or(0);

        let resource = df
            .column("resource")?
            .str()?
            .get(row_idx)
            .unwrap_or("")
            .to_string();

        let start_date = Self::date_from_series(df.column("start_date")?.date()?, row_idx)
            .ok_or_else(|| PolarsError::ComputeError("scheduled row missing start_date".into()))?;
        let end_date = Self::date_from_series(df.column("end_date")?.date()?, row_idx)
            .ok_or_else(|| PolarsError::ComputeError("scheduled row missing end_date".into()))?;

        Ok(Self {
            id,
            name,
            start_offset,
            finish_offset,
            duration_days,
            resource,
            start_date,
            end_date,
        })
    }

    fn series_from_date(name: &str, date: NaiveDate) -> PolarsResult<Series> {
        let data: [i32; 1] = [Self::date_to_i32(date)];
        Series::new(name.into(), data).cast(&DataType::Date)
    }

    fn date_from_series(chunked: &DateChunked, row_idx: usize) -> Option<NaiveDate> {
        chunked.get(row_idx).map(Self::date_from_i32)
    }

    fn date_to_i32(date: NaiveDate) -> i32 {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        (date - epoch).num_days() as i32
    }

    fn date_from_i32(days: i32) -> NaiveDate {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        epoch + Duration::days(days as i64)
    }
}
