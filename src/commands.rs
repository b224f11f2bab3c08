use crate::calendar::{CalendarViewState, MondayWeekMath, QuarterEngine, WeekCell};
use crate::model::{Plan, Task};
use crate::storage::{init_project_plan, locate_plan, PlanLocation};
use crate::ui;
use anyhow::{anyhow, bail, Result};
use chrono::{NaiveDate, Utc};
use std::env;

pub fn init(name: Option<String>) -> Result<()> {
    let location = init_project_plan(name)?;
    println!("Initialized plan at {}", location.path.display());
    Ok(())
}

pub fn list() -> Result<()> {
    let (plan, location) = load_current_plan()?;
    println!("Plan: {} ({})", plan.name, location.scope.label());
    if plan.tasks.is_empty() {
        println!("  (no tasks)");
        return Ok(());
    }
    for task in &plan.tasks {
        println!(
            "  - {}: {} -> {}",
            task.name,
            task.start_date.format("%d-%m-%Y"),
            task.end_date.format("%d-%m-%Y")
        );
    }
    Ok(())
}

pub fn add(name: String, start: String, end: String) -> Result<()> {
    let (mut plan, location) = load_current_plan()?;
    let start_date = parse_date(&start)?;
    let end_date = parse_date(&end)?;
    let task = Task::new(name, start_date, end_date)?;
    let task_name = task.name.clone();
    plan.add_task(task)?;
    location.save(&plan)?;
    println!("Added task {}", task_name);
    Ok(())
}

pub fn edit(
    name: String,
    rename: Option<String>,
    start: Option<String>,
    end: Option<String>,
) -> Result<()> {
    let (mut plan, location) = load_current_plan()?;
    let idx = plan
        .find_task_index(&name)
        .ok_or_else(|| anyhow!("task {} not found", name))?;
    let current = plan.tasks[idx].clone();
    let start_date = match start {
        Some(raw) => parse_date(&raw)?,
        None => current.start_date,
    };
    let end_date = match end {
        Some(raw) => parse_date(&raw)?,
        None => current.end_date,
    };
    let updated = Task::new(rename.unwrap_or(current.name), start_date, end_date)?;
    let updated_name = updated.name.clone();
    plan.replace_task(&name, updated)?;
    location.save(&plan)?;
    println!("Updated task {}", updated_name);
    Ok(())
}

pub fn remove(name: String) -> Result<()> {
    let (mut plan, location) = load_current_plan()?;
    plan.remove_task(&name)?;
    location.save(&plan)?;
    println!("Removed task {}", name);
    Ok(())
}

pub fn grid(year: Option<i32>, quarter: Option<u8>) -> Result<()> {
    if let Some(q) = quarter {
        if !(1..=4).contains(&q) {
            bail!("quarter must be between 1 and 4, got {}", q);
        }
    }
    let (plan, _) = load_current_plan()?;
    let current = CalendarViewState::for_date(&MondayWeekMath, Utc::now().date_naive());
    let target_year = year.unwrap_or(current.year);
    let target_quarter = quarter.unwrap_or(current.quarter);
    let first_month = (target_quarter as u32 - 1) * 3 + 1;
    let anchor = NaiveDate::from_ymd_opt(target_year, first_month, 1)
        .ok_or_else(|| anyhow!("no such quarter: {} Q{}", target_year, target_quarter))?;
    let mut engine = QuarterEngine::new();
    engine.initialize(anchor);
    print_grid(&engine, &plan);
    Ok(())
}

pub fn tui() -> Result<()> {
    let (plan, location) = load_current_plan()?;
    ui::run(plan, location)
}

fn print_grid(engine: &QuarterEngine, plan: &Plan) {
    const CELL: usize = 4;
    let state = match engine.state() {
        Some(state) => state,
        None => return,
    };
    println!("Quarter {}, {}", state.quarter, state.year);

    let mut header = String::new();
    for segment in engine.month_segments() {
        let width = segment.span as usize * CELL;
        header.push_str(&format!("{:^width$}", clip(segment.label, width)));
    }
    println!("{:20} {}", "", header);

    let mut numbers = String::new();
    for label in engine.week_labels() {
        numbers.push_str(&format!("{:^CELL$}", label));
    }
    println!("{:20} {}", "", numbers);

    for task in &plan.tasks {
        let mut row = String::new();
        for cell in engine.task_highlights(task) {
            row.push_str(match cell {
                WeekCell::Highlight(_) => "████",
                WeekCell::Plain => "░░░░",
            });
        }
        println!("{:20} {}", clip(&task.name, 20), row);
    }
}

fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn load_current_plan() -> Result<(Plan, PlanLocation)> {
    let cwd = env::current_dir()?;
    let location = locate_plan(&cwd)?;
    let plan = location.load()?;
    Ok((plan, location))
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow!("invalid date, please use YYYY-MM-DD as date format: {}", input))
}
