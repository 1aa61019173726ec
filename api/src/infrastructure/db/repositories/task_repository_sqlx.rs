use async_trait::async_trait;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::application::ports::task_repository::TaskRepository;
use crate::domain::tasks::task::{Task, TaskFields};
use crate::infrastructure::db::DbPool;

pub struct SqlxTaskRepository {
    pub pool: DbPool,
}

impl SqlxTaskRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

// Rows written by other clients may hold a REAL or TEXT target. Whole REALs
// are kept, anything else reads as null so one row cannot fail the listing.
fn decode_target(r: &SqliteRow) -> Option<i64> {
    if let Ok(v) = r.try_get::<Option<i64>, _>("target") {
        return v;
    }
    match r.try_get::<Option<f64>, _>("target") {
        Ok(Some(f)) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Some(f as i64),
        _ => {
            tracing::warn!(task_id = ?r.try_get::<i64, _>("id").ok(), "task_target_not_integer");
            None
        }
    }
}

fn map_task(r: &SqliteRow) -> anyhow::Result<Task> {
    Ok(Task {
        id: r.try_get("id")?,
        fields: TaskFields {
            task: r.try_get("task")?,
            measure: r.try_get("measure")?,
            target: decode_target(r),
            unit: r.try_get("unit")?,
            assigned_to: r.try_get("assignedTo")?,
            status: r.try_get("status")?,
            assigned_by: r.try_get("assignedBy")?,
            assigned_time: r.try_get("assignedTime")?,
        },
    })
}

#[async_trait]
impl TaskRepository for SqlxTaskRepository {
    async fn list_all(&self) -> anyhow::Result<Vec<Task>> {
        let rows = sqlx::query(
            r#"SELECT id, task, measure, target, unit, assignedTo, status, assignedBy, assignedTime
               FROM tasks ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(map_task).collect()
    }

    async fn insert(&self, f: &TaskFields) -> anyhow::Result<i64> {
        let res = sqlx::query(
            r#"INSERT INTO tasks (task, measure, target, unit, assignedTo, assignedBy, assignedTime, status)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&f.task)
        .bind(&f.measure)
        .bind(f.target)
        .bind(&f.unit)
        .bind(&f.assigned_to)
        .bind(&f.assigned_by)
        .bind(&f.assigned_time)
        .bind(&f.status)
        .execute(&self.pool)
        .await?;
        Ok(res.last_insert_rowid())
    }

    async fn replace(&self, id: i64, f: &TaskFields) -> anyhow::Result<u64> {
        let res = sqlx::query(
            r#"UPDATE tasks SET
                 task = ?, measure = ?, target = ?, unit = ?, assignedTo = ?,
                 status = ?, assignedBy = ?, assignedTime = ?
               WHERE id = ?"#,
        )
        .bind(&f.task)
        .bind(&f.measure)
        .bind(f.target)
        .bind(&f.unit)
        .bind(&f.assigned_to)
        .bind(&f.status)
        .bind(&f.assigned_by)
        .bind(&f.assigned_time)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected())
    }

    async fn delete(&self, id: i64) -> anyhow::Result<u64> {
        let res = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }
}
