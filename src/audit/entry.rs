//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of write recorded in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Ledger entities that can appear in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Invoice,
    Check,
    CashAccount,
    CashTransaction,
    Project,
    Contract,
    Installment,
    Payroll,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Invoice => write!(f, "Invoice"),
            EntityType::Check => write!(f, "Check"),
            EntityType::CashAccount => write!(f, "CashAccount"),
            EntityType::CashTransaction => write!(f, "CashTransaction"),
            EntityType::Project => write!(f, "Project"),
            EntityType::Contract => write!(f, "Contract"),
            EntityType::Installment => write!(f, "Installment"),
            EntityType::Payroll => write!(f, "Payroll"),
        }
    }
}

/// A single audit log line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,
    pub entity_id: String,

    /// Invoice number, project name, employee...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    /// Changed fields, e.g. `status: "draft" -> "paid"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: serde_json::to_value(entity).ok(),
            diff_summary: None,
        }
    }

    /// Update entry; the diff summary is derived from the two states
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        let before = serde_json::to_value(before).ok();
        let after = serde_json::to_value(after).ok();
        let diff_summary = match (&before, &after) {
            (Some(b), Some(a)) => changed_fields(b, a),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before,
            after,
            diff_summary,
        }
    }

    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: serde_json::to_value(entity).ok(),
            after: None,
            diff_summary: None,
        }
    }

    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Değişiklik: {}", diff));
        }

        output
    }
}

/// Top-level fields that differ between two objects; `updated_at` is ignored
fn changed_fields(before: &Value, after: &Value) -> Option<String> {
    let (Value::Object(before), Value::Object(after)) = (before, after) else {
        return (before != after).then(|| format!("{} -> {}", before, after));
    };

    let changes: Vec<String> = after
        .iter()
        .filter(|(key, _)| key.as_str() != "updated_at")
        .filter_map(|(key, new)| match before.get(key) {
            Some(old) if old == new => None,
            Some(old) => Some(format!("{}: {} -> {}", key, old, new)),
            None => Some(format!("{}: (yok) -> {}", key, new)),
        })
        .collect();

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_entity_type_serializes_snake_case() {
        let json = serde_json::to_string(&EntityType::CashTransaction).unwrap();
        assert_eq!(json, "\"cash_transaction\"");
    }

    #[test]
    fn test_create_entry() {
        let data = json!({"number": "F-1", "total": 590000});
        let entry = AuditEntry::create(EntityType::Invoice, "inv-12345678", Some("F-1".into()), &data);

        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(data));
    }

    #[test]
    fn test_update_entry_summarizes_changes() {
        let before = json!({"status": "draft", "total": 100, "updated_at": "a"});
        let after = json!({"status": "paid", "total": 100, "updated_at": "b"});

        let entry = AuditEntry::update(EntityType::Invoice, "inv-1", None, &before, &after);

        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(
            entry.diff_summary.as_deref(),
            Some(r#"status: "draft" -> "paid""#)
        );
    }

    #[test]
    fn test_update_without_changes_has_no_summary() {
        let state = json!({"progress": 40});
        let entry = AuditEntry::update(EntityType::Project, "prj-1", None, &state, &state);
        assert!(entry.diff_summary.is_none());
    }

    #[test]
    fn test_delete_entry() {
        let data = json!({"employee": "Mehmet"});
        let entry = AuditEntry::delete(EntityType::Payroll, "pay-1", Some("Mehmet".into()), &data);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::update(
            EntityType::Check,
            "chk-12345678",
            Some("0001".into()),
            &json!({"status": "portfolio"}),
            &json!({"status": "cleared"}),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE Check chk-12345678 (0001)"));
        assert!(formatted.contains("Değişiklik: status"));
    }
}
