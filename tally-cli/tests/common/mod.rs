//! Shared fixtures for the CLI integration tests

use tally_common::{InventoryRow, ResourceKind};

pub fn row(kind: ResourceKind, name: &str, namespace: Option<&str>) -> InventoryRow {
    InventoryRow {
        resource_type: kind,
        name: Some(name.to_string()),
        namespace: namespace.map(str::to_string),
        replicas: kind.is_namespaced().then_some(2),
        available_replicas: kind.is_namespaced().then_some(2),
        creation_timestamp: Some("2024-05-01T10:00:00Z".to_string()),
        labels: format!("app: {}", name),
    }
}

/// Six rows spanning every kind: three in prod, one in dev, two nodes
pub fn sample_rows() -> Vec<InventoryRow> {
    vec![
        row(ResourceKind::Deployment, "web", Some("prod")),
        row(ResourceKind::Deployment, "api", Some("dev")),
        row(ResourceKind::StatefulSet, "db", Some("prod")),
        row(ResourceKind::ReplicaSet, "web-7d9c", Some("prod")),
        row(ResourceKind::Node, "node-1", None),
        row(ResourceKind::Node, "node-2", None),
    ]
}
