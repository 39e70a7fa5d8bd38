//! In-memory `Gateway` that records every call, for handler tests.
use super::{ContainerAction, Gateway};
use crate::core::error::{MagnumError, Result};
use crate::core::resource::{Attributes, Resource, ResourceKind};
use serde_json::Value;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(ResourceKind),
    Get(ResourceKind, String),
    Create(ResourceKind, Attributes),
    Delete(ResourceKind, String),
    Action(String, ContainerAction),
    Execute(String, String),
}

#[derive(Debug, Default)]
pub struct MockGateway {
    calls: Mutex<Vec<Call>>,
    records: Vec<Resource>,
    output: Option<Value>,
    failure: Option<(u16, String)>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records returned by `list`; the first one is returned by `get`/`create`.
    pub fn with_records(mut self, records: Vec<Resource>) -> Self {
        self.records = records;
        self
    }

    /// Body returned by container actions and `execute`.
    pub fn with_output(mut self, output: Value) -> Self {
        self.output = Some(output);
        self
    }

    /// Every call fails with this API error.
    pub fn failing(mut self, status: u16, message: &str) -> Self {
        self.failure = Some((status, message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some((status, message)) => Err(MagnumError::Api {
                status: *status,
                message: message.clone(),
            }
            .into()),
            None => Ok(()),
        }
    }

    fn first_record(&self) -> Resource {
        self.records.first().cloned().unwrap_or_default()
    }
}

impl Gateway for MockGateway {
    async fn list(&self, kind: ResourceKind) -> Result<Vec<Resource>> {
        self.record(Call::List(kind))?;
        Ok(self.records.clone())
    }

    async fn get(&self, kind: ResourceKind, id: &str) -> Result<Resource> {
        self.record(Call::Get(kind, id.to_string()))?;
        Ok(self.first_record())
    }

    async fn create(&self, kind: ResourceKind, attributes: Attributes) -> Result<Resource> {
        self.record(Call::Create(kind, attributes))?;
        Ok(self.first_record())
    }

    async fn delete(&self, kind: ResourceKind, id: &str) -> Result<()> {
        self.record(Call::Delete(kind, id.to_string()))
    }

    async fn container_action(&self, id: &str, action: ContainerAction) -> Result<Option<Value>> {
        self.record(Call::Action(id.to_string(), action))?;
        Ok(self.output.clone())
    }

    async fn container_execute(&self, id: &str, command: &str) -> Result<Option<Value>> {
        self.record(Call::Execute(id.to_string(), command.to_string()))?;
        Ok(self.output.clone())
    }
}
