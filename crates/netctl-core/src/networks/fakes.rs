//! Scripted gateway and prompt doubles for unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use super::errors::NetworkError;
use super::gateway::NetworkGateway;
use super::types::NetworkResource;
use crate::prompt::ConfirmationPrompt;

type Script = HashMap<String, String>;

/// Gateway answering from an in-memory table, with per-identifier failure
/// scripts. Records every call in order.
#[derive(Default)]
pub struct FakeGateway {
    networks: Vec<NetworkResource>,
    inspect_failures: Script,
    remove_failures: Script,
    pub calls: RefCell<Vec<String>>,
}

impl FakeGateway {
    pub fn with_networks(networks: Vec<NetworkResource>) -> Self {
        Self {
            networks,
            ..Default::default()
        }
    }

    pub fn fail_inspect(mut self, name: &str, message: &str) -> Self {
        self.inspect_failures
            .insert(name.to_string(), message.to_string());
        self
    }

    pub fn fail_remove(mut self, name: &str, message: &str) -> Self {
        self.remove_failures
            .insert(name.to_string(), message.to_string());
        self
    }

    pub fn removed(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| c.strip_prefix("remove:").map(str::to_string))
            .collect()
    }

    fn scripted(script: &Script, name: &str) -> Result<(), NetworkError> {
        match script.get(name) {
            Some(message) => Err(NetworkError::Gateway {
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl NetworkGateway for FakeGateway {
    fn inspect(&self, name: &str) -> Result<NetworkResource, NetworkError> {
        self.calls.borrow_mut().push(format!("inspect:{}", name));
        Self::scripted(&self.inspect_failures, name)?;
        Ok(self
            .networks
            .iter()
            .find(|n| n.name == name)
            .cloned()
            .unwrap_or_else(|| NetworkResource::new(format!("ID-{}", name), name)))
    }

    fn remove(&self, name: &str) -> Result<(), NetworkError> {
        self.calls.borrow_mut().push(format!("remove:{}", name));
        Self::scripted(&self.remove_failures, name)
    }

    fn list(&self) -> Result<Vec<NetworkResource>, NetworkError> {
        self.calls.borrow_mut().push("list".to_string());
        Ok(self.networks.clone())
    }
}

/// Prompt returning queued answers; declines once the queue is empty.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<bool>,
    pub messages: Vec<String>,
}

impl ScriptedPrompt {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            messages: Vec::new(),
        }
    }
}

impl ConfirmationPrompt for ScriptedPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        self.messages.push(message.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}
