//! Common types shared between the tally inventory tools

pub mod format;
pub mod normalize;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Placeholder rendered for any value the backend did not report
pub const PLACEHOLDER: &str = "N/A";

/// Resource kinds the inventory tracks, in table display order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResourceKind {
    Deployment,
    StatefulSet,
    ReplicaSet,
    Node,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Deployment,
        ResourceKind::StatefulSet,
        ResourceKind::ReplicaSet,
        ResourceKind::Node,
    ];

    /// Canonical label shown in the resource type column
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Deployment => "Deployment",
            ResourceKind::StatefulSet => "StatefulSet",
            ResourceKind::ReplicaSet => "ReplicaSet",
            ResourceKind::Node => "Node",
        }
    }

    /// Nodes are cluster-scoped; everything else lives in a namespace
    pub fn is_namespaced(&self) -> bool {
        !matches!(self, ResourceKind::Node)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "deployment" | "deployments" | "deploy" => Ok(ResourceKind::Deployment),
            "statefulset" | "statefulsets" | "sts" => Ok(ResourceKind::StatefulSet),
            "replicaset" | "replicasets" | "rs" => Ok(ResourceKind::ReplicaSet),
            "node" | "nodes" | "no" => Ok(ResourceKind::Node),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

/// Workload record as served in the inventory document. Deployments,
/// statefulsets and replicasets share this shape; every field is optional
/// on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkloadRecord {
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub replicas: Option<i32>,
    pub available_replicas: Option<i32>,
    pub creation_timestamp: Option<String>,
    pub labels: Option<BTreeMap<String, String>>,
}

/// One entry of a node's condition list
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeCondition {
    #[serde(rename = "type")]
    pub condition_type: Option<String>,
    pub status: Option<String>,
    pub reason: Option<String>,
    pub message: Option<String>,
    pub last_heartbeat_time: Option<String>,
    pub last_transition_time: Option<String>,
}

/// Node record. Cluster-scoped, so no namespace and no replica counts.
/// The condition list arrives under `status`; some backends serve it as
/// `conditions`, so both spellings deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeRecord {
    pub name: Option<String>,
    pub labels: Option<BTreeMap<String, String>>,
    pub annotations: Option<BTreeMap<String, String>>,
    #[serde(rename = "status", alias = "conditions")]
    pub conditions: Option<Vec<NodeCondition>>,
    pub capacity: Option<BTreeMap<String, String>>,
    pub allocatable: Option<BTreeMap<String, String>>,
    pub creation_timestamp: Option<String>,
}

/// Point-in-time inventory document served by `/data`. An absent key means
/// zero resources of that kind; unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryDocument {
    #[serde(default)]
    pub deployments: Vec<WorkloadRecord>,
    #[serde(default)]
    pub statefulsets: Vec<WorkloadRecord>,
    #[serde(default)]
    pub replicasets: Vec<WorkloadRecord>,
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
}

/// Per-node health summary served by `/api/nodes`. `status` is derived
/// from the Ready condition on the server side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeHealth {
    pub name: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub conditions: Vec<NodeCondition>,
}

/// One row of the uniform inventory table. Every record in the document
/// yields exactly one row. Optional fields stay optional here; the
/// placeholder is substituted only in [`InventoryRow::display`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryRow {
    pub resource_type: ResourceKind,
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub replicas: Option<i32>,
    pub available_replicas: Option<i32>,
    pub creation_timestamp: Option<String>,
    pub labels: String,
}

impl InventoryRow {
    /// Placeholder-substituted projection for rendering, built on the
    /// substitution helpers in [`format`]
    pub fn display(&self) -> RowDisplay {
        use crate::format::{count_or_placeholder, text_or_placeholder};

        RowDisplay {
            resource_type: self.resource_type.to_string(),
            name: text_or_placeholder(self.name.as_deref()),
            namespace: text_or_placeholder(self.namespace.as_deref()),
            replicas: count_or_placeholder(self.replicas),
            available_replicas: count_or_placeholder(self.available_replicas),
            creation_timestamp: text_or_placeholder(self.creation_timestamp.as_deref()),
            labels: text_or_placeholder(Some(&self.labels)),
        }
    }
}

/// Column values for one rendered row; every cell is a non-empty string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDisplay {
    pub resource_type: String,
    pub name: String,
    pub namespace: String,
    pub replicas: String,
    pub available_replicas: String,
    pub creation_timestamp: String,
    pub labels: String,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown resource kind: {0}")]
    UnknownKind(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workload_record_deserialization() {
        let json = r#"{
            "name": "web",
            "namespace": "prod",
            "replicas": 3,
            "available_replicas": 2,
            "creation_timestamp": "2024-05-01T10:00:00Z",
            "labels": {"app": "web"}
        }"#;

        let record: WorkloadRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name.as_deref(), Some("web"));
        assert_eq!(record.namespace.as_deref(), Some("prod"));
        assert_eq!(record.replicas, Some(3));
        assert_eq!(record.available_replicas, Some(2));
        assert_eq!(record.labels.unwrap().get("app").unwrap(), "web");
    }

    #[test]
    fn test_workload_record_tolerates_missing_fields() {
        let record: WorkloadRecord = serde_json::from_str(r#"{"name": "web"}"#).unwrap();
        assert_eq!(record.name.as_deref(), Some("web"));
        assert!(record.namespace.is_none());
        assert!(record.replicas.is_none());
        assert!(record.labels.is_none());
    }

    #[test]
    fn test_node_record_conditions_key_and_alias() {
        let primary = r#"{"name": "node-1", "status": [{"type": "Ready", "status": "True"}]}"#;
        let record: NodeRecord = serde_json::from_str(primary).unwrap();
        let conditions = record.conditions.unwrap();
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].condition_type.as_deref(), Some("Ready"));

        let alias = r#"{"name": "node-1", "conditions": [{"type": "Ready", "status": "True"}]}"#;
        let record: NodeRecord = serde_json::from_str(alias).unwrap();
        assert_eq!(record.conditions.unwrap().len(), 1);
    }

    #[test]
    fn test_document_missing_keys_mean_empty() {
        let document: InventoryDocument =
            serde_json::from_str(r#"{"deployments": [], "extra": 1}"#).unwrap();
        assert!(document.deployments.is_empty());
        assert!(document.statefulsets.is_empty());
        assert!(document.replicasets.is_empty());
        assert!(document.nodes.is_empty());
    }

    #[test]
    fn test_resource_kind_parse_and_label() {
        let kind: ResourceKind = "statefulset".parse().unwrap();
        assert_eq!(kind, ResourceKind::StatefulSet);
        assert_eq!(kind.label(), "StatefulSet");

        let kind: ResourceKind = "RS".parse().unwrap();
        assert_eq!(kind, ResourceKind::ReplicaSet);

        assert!("daemonset".parse::<ResourceKind>().is_err());
        assert!(!ResourceKind::Node.is_namespaced());
    }

    #[test]
    fn test_row_display_substitutes_placeholder() {
        let row = InventoryRow {
            resource_type: ResourceKind::Deployment,
            name: None,
            namespace: Some(String::new()),
            replicas: Some(0),
            available_replicas: None,
            creation_timestamp: None,
            labels: String::new(),
        };

        let display = row.display();
        assert_eq!(display.resource_type, "Deployment");
        assert_eq!(display.name, PLACEHOLDER);
        assert_eq!(display.namespace, PLACEHOLDER);
        assert_eq!(display.replicas, "0");
        assert_eq!(display.available_replicas, PLACEHOLDER);
        assert_eq!(display.creation_timestamp, PLACEHOLDER);
        assert_eq!(display.labels, PLACEHOLDER);
    }
}
