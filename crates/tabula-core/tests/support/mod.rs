#![allow(dead_code)]

use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
};
use tabula_core::{
    async_trait,
    catalog::{Catalog, Column},
    version::{ObjectStore, ParameterStore, Prompt},
    Error, Result,
};

/// Catalog backed by a map of `(database, table)` to columns.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    tables: HashMap<(String, String), Vec<Column>>,
    failure: Option<String>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(mut self, database: &str, table: &str, columns: &[(&str, &str)]) -> Self {
        self.tables.insert(
            (database.to_string(), table.to_string()),
            columns
                .iter()
                .map(|(name, ty)| Column::new(*name, *ty))
                .collect(),
        );
        self
    }

    /// Makes every lookup fail with a transport-style error.
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn get_table_columns(&self, database: &str, table: &str) -> Result<Vec<Column>> {
        if let Some(message) = &self.failure {
            return Err(Error::adhoc(message.clone()));
        }

        self.tables
            .get(&(database.to_string(), table.to_string()))
            .cloned()
            .ok_or_else(|| Error::table_not_found(database, table))
    }
}

#[derive(Debug, Default)]
pub struct MemoryParameterStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryParameterStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl ParameterStore for MemoryParameterStore {
    async fn get_value(&self, key: &str) -> Result<String> {
        self.get(key).ok_or_else(|| Error::parameter_not_found(key))
    }

    async fn put_value(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    objects: Mutex<Vec<(String, String, Vec<u8>)>>,
    fail: bool,
}

impl MemoryObjectStore {
    pub fn failing() -> Self {
        Self {
            objects: Mutex::default(),
            fail: true,
        }
    }

    /// `(bucket, key)` of every object written, in upload order.
    pub fn keys(&self) -> Vec<(String, String)> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .map(|(bucket, key, _)| (bucket.clone(), key.clone()))
            .collect()
    }

    pub fn body(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .find(|(b, k, _)| b == bucket && k == key)
            .map(|(_, _, body)| body.clone())
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        if self.fail {
            let io = std::io::Error::new(std::io::ErrorKind::Other, "bucket unavailable");
            return Err(Error::driver_operation_failed(io));
        }

        self.objects
            .lock()
            .unwrap()
            .push((bucket.to_string(), key.to_string(), body));
        Ok(())
    }
}

/// Prompt answering from a fixed script and recording every question.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
    pub notices: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn input(&mut self, message: &str) -> Result<String> {
        self.questions.push(message.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| Error::adhoc("prompt script exhausted"))
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
