//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
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

/// Types of records that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Order,
    Expense,
    RiderCash,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Order => write!(f, "Order"),
            EntityType::Expense => write!(f, "Expense"),
            EntityType::RiderCash => write!(f, "RiderCash"),
        }
    }
}

/// A single audit log entry
///
/// Records one change to a day's data with the JSON value of the record
/// before and after the change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the change happened (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Day the change was made to
    pub date_key: String,

    /// ID of the affected record (the date key for rider cash)
    pub entity_id: String,

    /// Short human-readable summary, e.g. the item description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    fn new(
        operation: Operation,
        entity_type: EntityType,
        date_key: &str,
        entity_id: impl Into<String>,
        summary: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            date_key: date_key.to_string(),
            entity_id: entity_id.into(),
            summary,
            before: None,
            after: None,
        }
    }

    /// Entry for a newly entered record
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        date_key: &str,
        entity_id: impl Into<String>,
        summary: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            after: serde_json::to_value(entity).ok(),
            ..Self::new(Operation::Create, entity_type, date_key, entity_id, summary)
        }
    }

    /// Entry for a replaced record
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        date_key: &str,
        entity_id: impl Into<String>,
        summary: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        Self {
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            ..Self::new(Operation::Update, entity_type, date_key, entity_id, summary)
        }
    }

    /// Entry for a removed record
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        date_key: &str,
        entity_id: impl Into<String>,
        summary: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            before: serde_json::to_value(entity).ok(),
            ..Self::new(Operation::Delete, entity_type, date_key, entity_id, summary)
        }
    }

    /// Format the entry as one line for terminal output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {} on {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id,
            self.date_key
        );

        if let Some(summary) = &self.summary {
            output.push_str(&format!(" ({})", summary));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(
            EntityType::Order,
            "2025-01-15",
            "ord-12345678",
            Some("Shoes".to_string()),
            &json!({"item_description": "Shoes"}),
        );

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.date_key, "2025-01-15");
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_update_and_delete_entries() {
        let before = json!({"amount": 100000});
        let after = json!({"amount": 150000});

        let update = AuditEntry::update(
            EntityType::Expense,
            "2025-01-15",
            "exp-12345678",
            None,
            &before,
            &after,
        );
        assert_eq!(update.operation, Operation::Update);
        assert!(update.before.is_some() && update.after.is_some());

        let delete =
            AuditEntry::delete(EntityType::Expense, "2025-01-15", "exp-12345678", None, &before);
        assert!(delete.before.is_some());
        assert!(delete.after.is_none());
    }

    #[test]
    fn test_entity_type_serializes_snake_case() {
        let entry = AuditEntry::update(
            EntityType::RiderCash,
            "2025-01-15",
            "2025-01-15",
            None,
            &json!(0),
            &json!(50000),
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["entity_type"], "rider_cash");
        assert!(json.get("summary").is_none());
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::create(
            EntityType::Order,
            "2025-01-15",
            "ord-12345678",
            Some("Shoes".to_string()),
            &json!({}),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("CREATE Order ord-12345678 on 2025-01-15 (Shoes)"));
    }
}
