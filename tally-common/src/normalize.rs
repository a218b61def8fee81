//! Normalization of heterogeneous per-kind records into uniform rows

use crate::format::format_map;
use crate::{InventoryDocument, InventoryRow, NodeRecord, ResourceKind, WorkloadRecord};
use std::collections::BTreeSet;

/// Normalized view of one inventory document: the uniform rows in display
/// order plus the distinct namespaces seen across workload records.
#[derive(Debug, Clone, Default)]
pub struct InventorySnapshot {
    pub rows: Vec<InventoryRow>,
    pub namespaces: BTreeSet<String>,
}

/// Normalize a document into rows and the namespace set.
///
/// Total over well-typed documents. Exactly one row per record, no merging
/// or dropping. Rows come out grouped as deployments, statefulsets,
/// replicasets, nodes, keeping input order within each kind.
pub fn normalize(document: &InventoryDocument) -> InventorySnapshot {
    let mut snapshot = InventorySnapshot::default();
    for record in &document.deployments {
        push_workload(&mut snapshot, ResourceKind::Deployment, record);
    }
    for record in &document.statefulsets {
        push_workload(&mut snapshot, ResourceKind::StatefulSet, record);
    }
    for record in &document.replicasets {
        push_workload(&mut snapshot, ResourceKind::ReplicaSet, record);
    }
    for record in &document.nodes {
        snapshot.rows.push(node_row(record));
    }
    snapshot
}

fn push_workload(snapshot: &mut InventorySnapshot, kind: ResourceKind, record: &WorkloadRecord) {
    if let Some(namespace) = record.namespace.as_deref() {
        if !namespace.is_empty() {
            snapshot.namespaces.insert(namespace.to_string());
        }
    }
    snapshot.rows.push(InventoryRow {
        resource_type: kind,
        name: record.name.clone(),
        namespace: record.namespace.clone(),
        replicas: record.replicas,
        available_replicas: record.available_replicas,
        creation_timestamp: record.creation_timestamp.clone(),
        labels: format_map(record.labels.as_ref()),
    });
}

// Nodes are cluster-scoped: namespace and replica counts stay empty no
// matter what the record carries, and they never feed the namespace set.
fn node_row(record: &NodeRecord) -> InventoryRow {
    InventoryRow {
        resource_type: ResourceKind::Node,
        name: record.name.clone(),
        namespace: None,
        replicas: None,
        available_replicas: None,
        creation_timestamp: record.creation_timestamp.clone(),
        labels: format_map(record.labels.as_ref()),
    }
}
