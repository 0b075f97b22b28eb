//! Per-organization configuration aggregate
//!
//! Holds the receiver definitions and the routing table (rule id → receiver
//! names). All mutations are in-memory and side-effect free; persisting the
//! aggregate is the config store's job.

use crate::entities::receiver::Receiver;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opaque organization identifier
pub type OrgId = String;

/// Aggregate: routing table and receivers of one organization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Owning organization
    pub org_id: OrgId,
    /// Receiver definitions by name
    #[serde(default)]
    pub receivers: BTreeMap<String, Receiver>,
    /// Rule identifier → receiver names
    #[serde(default)]
    pub routes: BTreeMap<String, Vec<String>>,
}

impl Config {
    /// Create an empty configuration for an organization
    pub fn new<S: Into<OrgId>>(org_id: S) -> Self {
        Self {
            org_id: org_id.into(),
            receivers: BTreeMap::new(),
            routes: BTreeMap::new(),
        }
    }

    /// Receiver names routed for a rule; empty when the rule is unmapped
    pub fn receiver_names_from_rule_id(&self, rule_id: &str) -> Vec<String> {
        self.routes.get(rule_id).cloned().unwrap_or_default()
    }

    /// Look up a receiver definition
    pub fn receiver(&self, name: &str) -> Option<&Receiver> {
        self.receivers.get(name)
    }

    /// Add a receiver, rejecting duplicate names
    pub fn create_receiver(&mut self, receiver: Receiver) -> Result<()> {
        receiver.validate()?;
        if self.receivers.contains_key(&receiver.name) {
            return Err(Error::already_exists(format!("receiver '{}'", receiver.name)));
        }
        self.receivers.insert(receiver.name.clone(), receiver);
        Ok(())
    }

    /// Replace an existing receiver definition
    pub fn update_receiver(&mut self, receiver: Receiver) -> Result<()> {
        receiver.validate()?;
        match self.receivers.get_mut(&receiver.name) {
            Some(existing) => {
                *existing = receiver;
                Ok(())
            }
            None => Err(Error::not_found(format!("receiver '{}'", receiver.name))),
        }
    }

    /// Remove a receiver and every route entry pointing at it
    pub fn delete_receiver(&mut self, name: &str) -> Result<()> {
        if self.receivers.remove(name).is_none() {
            return Err(Error::not_found(format!("receiver '{name}'")));
        }

        for receivers in self.routes.values_mut() {
            receivers.retain(|receiver| receiver != name);
        }
        self.routes.retain(|_, receivers| !receivers.is_empty());
        Ok(())
    }

    /// Route a rule to a set of known receivers
    pub fn set_route<S: Into<String>>(&mut self, rule_id: S, receivers: Vec<String>) -> Result<()> {
        if let Some(unknown) = receivers.iter().find(|name| !self.receivers.contains_key(*name)) {
            return Err(Error::not_found(format!("receiver '{unknown}'")));
        }

        let rule_id = rule_id.into();
        if receivers.is_empty() {
            self.routes.remove(&rule_id);
        } else {
            self.routes.insert(rule_id, receivers);
        }
        Ok(())
    }

    /// Drop a rule's route; returns whether one existed
    pub fn delete_route(&mut self, rule_id: &str) -> bool {
        self.routes.remove(rule_id).is_some()
    }
}
