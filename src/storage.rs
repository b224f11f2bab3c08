use crate::model::Plan;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const PLAN_DIR: &str = ".quarterly";
const PLAN_FILE: &str = "plan.yml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanScope {
    Project,
    Global,
}

impl PlanScope {
    pub fn label(self) -> &'static str {
        match self {
            PlanScope::Project => "project",
            PlanScope::Global => "global",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlanLocation {
    pub path: PathBuf,
    pub scope: PlanScope,
}

impl PlanLocation {
    fn project(dir: &Path) -> Self {
        PlanLocation {
            path: dir.join(PLAN_DIR).join(PLAN_FILE),
            scope: PlanScope::Project,
        }
    }

    /// Reads the plan, writing a fresh default one first if the file does not
    /// exist yet.
    pub fn load(&self) -> Result<Plan> {
        if !self.path.exists() {
            let plan = Plan::default_named(self.default_name());
            self.save(&plan)?;
            return Ok(plan);
        }
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {:?}", self.path))?;
        serde_yaml::from_str(&data).context("parsing plan file")
    }

    pub fn save(&self, plan: &Plan) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("creating {:?}", parent))?;
        }
        let serialized = serde_yaml::to_string(plan).context("serializing plan")?;
        fs::write(&self.path, serialized).with_context(|| format!("writing {:?}", self.path))
    }

    // Project plans are named after the directory holding .quarterly.
    fn default_name(&self) -> String {
        match self.scope {
            PlanScope::Project => self
                .path
                .ancestors()
                .nth(2)
                .and_then(|p| p.file_name())
                .and_then(|n| n.to_str())
                .unwrap_or("project")
                .to_string(),
            PlanScope::Global => "default".to_string(),
        }
    }
}

pub fn init_project_plan(name: Option<String>) -> Result<PlanLocation> {
    let cwd = env::current_dir()?;
    let location = PlanLocation::project(&cwd);
    if !location.path.exists() {
        let plan_name = name.unwrap_or_else(|| location.default_name());
        location.save(&Plan::default_named(plan_name))?;
    }
    Ok(location)
}

/// Walks up from `start` looking for a project plan; falls back to the global
/// plan under the platform data directory.
pub fn locate_plan(start: &Path) -> Result<PlanLocation> {
    for dir in start.ancestors() {
        let candidate = PlanLocation::project(dir);
        if candidate.path.exists() {
            return Ok(candidate);
        }
    }
    let dirs = ProjectDirs::from("", "", "quarterly").context("locating data directory")?;
    Ok(PlanLocation {
        path: dirs.data_dir().join(PLAN_FILE),
        scope: PlanScope::Global,
    })
}
