/// Assignment metadata of a task. Every column is nullable in storage,
/// so every field is optional here as well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFields {
    pub task: Option<String>,
    pub measure: Option<String>,
    pub target: Option<i64>,
    pub unit: Option<String>,
    pub assigned_to: Option<String>,
    pub status: Option<String>,
    pub assigned_by: Option<String>,
    pub assigned_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub fields: TaskFields,
}
