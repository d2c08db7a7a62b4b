//! SQLite repository adapter.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;
use uuid::Uuid;

use payment_types::{NewPayment, Payment, PaymentId, PaymentRepository, RepoError};

use crate::types::DbPayment;

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let ddl = include_str!("../migrations/0001_create_payments.sql");
        sqlx::query(ddl).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl PaymentRepository for SqliteRepo {
    async fn insert(&self, new: NewPayment) -> Result<Payment, RepoError> {
        let payment = Payment::from_new(PaymentId::from_uuid(Uuid::new_v4()), new);

        sqlx::query(
            r#"INSERT INTO payments (id, active_id, client_id, amount, type_code, date_registered, date_updated)
               VALUES (?, ?, ?, ?, ?, ?, NULL)"#,
        )
        .bind(payment.id.to_string())
        .bind(&payment.active_id)
        .bind(&payment.client_id)
        .bind(payment.amount.to_string())
        .bind(payment.type_code.to_string())
        .bind(payment.date_registered.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(payment)
    }

    async fn get(&self, id: PaymentId) -> Result<Option<Payment>, RepoError> {
        let row: Option<DbPayment> = sqlx::query_as(
            r#"SELECT id, active_id, client_id, amount, type_code, date_registered, date_updated
               FROM payments WHERE id = ?"#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbPayment::into_domain).transpose()
    }

    async fn exists(&self, id: PaymentId) -> Result<bool, RepoError> {
        let count: (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM payments WHERE id = ?"#)
            .bind(id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(count.0 > 0)
    }

    async fn update(&self, payment: Payment) -> Result<Payment, RepoError> {
        let result = sqlx::query(
            r#"UPDATE payments
               SET active_id = ?, client_id = ?, amount = ?, type_code = ?, date_registered = ?, date_updated = ?
               WHERE id = ?"#,
        )
        .bind(&payment.active_id)
        .bind(&payment.client_id)
        .bind(payment.amount.to_string())
        .bind(payment.type_code.to_string())
        .bind(payment.date_registered.to_rfc3339())
        .bind(payment.date_updated.map(|dt| dt.to_rfc3339()))
        .bind(payment.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(payment)
    }

    async fn delete(&self, id: PaymentId) -> Result<bool, RepoError> {
        let result = sqlx::query(r#"DELETE FROM payments WHERE id = ?"#)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_all(&self) -> Result<Vec<Payment>, RepoError> {
        let rows: Vec<DbPayment> = sqlx::query_as(
            r#"SELECT id, active_id, client_id, amount, type_code, date_registered, date_updated
               FROM payments ORDER BY date_registered"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(DbPayment::into_domain).collect()
    }
}
