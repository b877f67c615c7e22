use chrono::NaiveDate;
use gantt_tool::{
    ConfigError, ProjectMetadata, ProjectPlan, Schedule, TaskDefinition, TaskRegistry,
    load_project_from_csv, load_project_from_json, render_schedule_table, render_timeline,
};
use std::env;
use std::process::ExitCode;

fn task(
    id: i32,
    name: &str,
    duration_days: i64,
    predecessors: &[i32],
    resource: &str,
) -> TaskDefinition {
    let mut task = TaskDefinition::new(id, name, duration_days);
    task.predecessors = predecessors.to_vec();
    task.resource = resource.to_string();
    task
}

fn builtin_plan() -> ProjectPlan {
    let mut metadata = ProjectMetadata::default();
    metadata.project_name = "Security Awareness Training Rollout".to_string();
    metadata.project_description =
        "Company-wide security awareness training programme".to_string();
    metadata.project_start_date =
        NaiveDate::from_ymd_opt(2025, 6, 16).expect("valid project start date");

    let tasks = vec![
        task(1, "Project kick-off and goal definition", 5, &[], "IT lead / HR"),
        task(2, "Detailed requirements analysis", 3, &[1], "IT lead"),
        task(
            3,
            "Develop presentation and workshop materials",
            10,
            &[2],
            "External content expert",
        ),
        task(
            4,
            "Select and customize e-learning modules",
            15,
            &[2],
            "IT + vendor",
        ),
        task(
            5,
            "Design handouts and communication package",
            10,
            &[2],
            "Marketing / design",
        ),
        task(6, "Phishing simulation setup", 5, &[2], "IT + service provider"),
        task(
            7,
            "Configure and test technical platform",
            10,
            &[4, 6],
            "IT",
        ),
        task(8, "Pilot training session", 5, &[3, 4, 5, 7], "Trainer"),
        task(
            9,
            "Evaluate feedback and refine content",
            5,
            &[8],
            "IT + trainer",
        ),
        task(10, "Roll out on-site trainings", 15, &[9], "Trainer"),
        task(11, "E-learning go-live", 1, &[7, 9], "IT"),
        task(
            12,
            "Phishing campaign wave 1",
            1,
            &[7],
            "IT + service provider",
        ),
        task(
            13,
            "Final evaluation and management report",
            5,
            &[10, 11, 12],
            "IT lead",
        ),
    ];

    let registry = TaskRegistry::from_tasks(tasks).expect("builtin project plan is valid");
    ProjectPlan::new(metadata, registry)
}

fn load_plan(path: &str) -> Result<ProjectPlan, ConfigError> {
    if path.ends_with(".csv") {
        load_project_from_csv(path)
    } else {
        load_project_from_json(path)
    }
}

fn print_usage() {
    println!(
        "Usage: cli [project.json|project.csv]\n\nComputes a forward-pass schedule for the project plan and prints a\ntimeline chart plus a schedule table. Without an argument the built-in\nsample plan is used."
    );
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let plan = match args.first().map(String::as_str) {
        Some("-h") | Some("--help") => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Some(path) => match load_plan(path) {
            Ok(plan) => plan,
            Err(e) => {
                eprintln!("Error loading project: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => builtin_plan(),
    };

    let schedule = match Schedule::compute(&plan) {
        Ok(schedule) => schedule,
        Err(e) => {
            eprintln!("Error computing schedule: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let tasks = match schedule.tasks() {
        Ok(tasks) => tasks,
        Err(e) => {
            eprintln!("Error reading schedule: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", schedule.project_name());
    match schedule.latest_finish() {
        Ok(Some(finish)) => println!(
            "{} tasks, {} to {}",
            tasks.len(),
            schedule.project_start_date(),
            finish
        ),
        _ => println!(
            "{} tasks, starting {}",
            tasks.len(),
            schedule.project_start_date()
        ),
    }
    println!();
    println!("{}", render_timeline(&tasks));
    println!("{}", render_schedule_table(&tasks));

    ExitCode::SUCCESS
}
