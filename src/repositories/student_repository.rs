use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::{
    constants::game::DB_KEY,
    errors::{AppError, AppResult},
    models::domain::Student,
    repositories::KeyValueStore,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn initialize(&self) -> AppResult<()>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Student>>;
    async fn find_all(&self) -> AppResult<Vec<Student>>;
    async fn create(&self, student: Student) -> AppResult<Student>;
    async fn update(&self, student: Student) -> AppResult<Student>;
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct StudentTable {
    #[serde(default)]
    students: BTreeMap<String, Student>,
}

/// Keeps every student in one JSON document under [`DB_KEY`].
pub struct KvStudentRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl KvStudentRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> AppResult<StudentTable> {
        match self.store.get(DB_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(StudentTable::default()),
        }
    }

    async fn save(&self, table: &StudentTable) -> AppResult<()> {
        let raw = serde_json::to_string(table)?;
        self.store.set(DB_KEY, raw).await
    }
}

#[async_trait]
impl StudentRepository for KvStudentRepository {
    async fn initialize(&self) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        if self.store.get(DB_KEY).await?.is_none() {
            self.save(&StudentTable::default()).await?;
            log::info!("Initialized empty student table");
        }
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Student>> {
        let table = self.load().await?;
        Ok(table.students.get(username).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Student>> {
        let table = self.load().await?;
        Ok(table.students.into_values().collect())
    }

    async fn create(&self, student: Student) -> AppResult<Student> {
        let _guard = self.write_lock.lock().await;
        let mut table = self.load().await?;

        if table.students.contains_key(&student.username) {
            return Err(AppError::AlreadyExists(format!(
                "Student with username '{}' already exists",
                student.username
            )));
        }

        table
            .students
            .insert(student.username.clone(), student.clone());
        self.save(&table).await?;
        Ok(student)
    }

    async fn update(&self, student: Student) -> AppResult<Student> {
        let _guard = self.write_lock.lock().await;
        let mut table = self.load().await?;

        match table.students.get_mut(&student.username) {
            Some(existing) => *existing = student.clone(),
            None => {
                return Err(AppError::NotFound(format!(
                    "Student with username '{}' not found",
                    student.username
                )))
            }
        }

        self.save(&table).await?;
        Ok(student)
    }
}
