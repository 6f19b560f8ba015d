//! Mapping of SQLx failures into the engagement error taxonomy
//!
//! The engines branch on these variants: DuplicateKey is absorbed as
//! "desired state already achieved", RelationMissing degrades silently,
//! Network leaves local state untouched, PermissionDenied is surfaced.

use engage_core::EngageError;
use sqlx::Error as SqlxError;

/// SQLSTATE for undefined_table
const UNDEFINED_TABLE: &str = "42P01";
/// SQLSTATE for insufficient_privilege
const INSUFFICIENT_PRIVILEGE: &str = "42501";

/// Convert a SQLx error into an EngageError
///
/// `relation` names the table being touched, for the RelationMissing case.
pub fn map_store_error(e: SqlxError, relation: &str) -> EngageError {
    if let SqlxError::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            return EngageError::DuplicateKey;
        }
        match db_err.code().as_deref() {
            Some(UNDEFINED_TABLE) => {
                return EngageError::RelationMissing(relation.to_string());
            }
            Some(INSUFFICIENT_PRIVILEGE) => {
                return EngageError::PermissionDenied(db_err.message().to_string());
            }
            _ => {}
        }
    }

    match e {
        SqlxError::Io(err) => EngageError::Network(err.to_string()),
        SqlxError::Tls(err) => EngageError::Network(err.to_string()),
        SqlxError::PoolTimedOut => EngageError::Network("connection pool timed out".to_string()),
        SqlxError::PoolClosed => EngageError::Network("connection pool closed".to_string()),
        other => EngageError::Store(other.to_string()),
    }
}
