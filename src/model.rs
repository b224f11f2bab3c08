use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Plan {
    pub name: String,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(thiserror::Error, Debug)]
pub enum PlanError {
    #[error("task not found: {0}")]
    TaskNotFound(String),
    #[error("a task named {0} already exists")]
    DuplicateTask(String),
    #[error("end date {end} is not after start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("task name is required")]
    EmptyName,
}

impl Plan {
    pub fn default_named(name: impl Into<String>) -> Self {
        Plan {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    pub fn find_task_index(&self, name: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.name == name)
    }

    pub fn add_task(&mut self, task: Task) -> Result<(), PlanError> {
        if self.find_task_index(&task.name).is_some() {
            return Err(PlanError::DuplicateTask(task.name));
        }
        self.tasks.push(task);
        Ok(())
    }

    pub fn remove_task(&mut self, name: &str) -> Result<Task, PlanError> {
        let idx = self
            .find_task_index(name)
            .ok_or_else(|| PlanError::TaskNotFound(name.to_string()))?;
        Ok(self.tasks.remove(idx))
    }

    pub fn replace_task(&mut self, name: &str, task: Task) -> Result<(), PlanError> {
        let idx = self
            .find_task_index(name)
            .ok_or_else(|| PlanError::TaskNotFound(name.to_string()))?;
        if task.name != name && self.find_task_index(&task.name).is_some() {
            return Err(PlanError::DuplicateTask(task.name));
        }
        self.tasks[idx] = task;
        Ok(())
    }
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, PlanError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PlanError::EmptyName);
        }
        if end_date <= start_date {
            return Err(PlanError::InvalidRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Task {
            name,
            start_date,
            end_date,
        })
    }
}
