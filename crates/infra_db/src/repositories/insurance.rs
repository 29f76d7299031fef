//! Insurance repository implementation
//!
//! This module provides database access for the `insurance` table. Rows are
//! mapped with runtime-checked queries into [`InsuranceRow`].

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use crate::error::DatabaseError;

const SELECT_COLUMNS: &str = r#"
    SELECT
        id,
        policy_number,
        holder_name,
        start_date,
        end_date,
        claim_date,
        insured_amount,
        risk_factor,
        created_at,
        updated_at
    FROM insurance
"#;

/// Repository for insurance records
///
/// # Example
///
/// ```rust,ignore
/// use infra_db::repositories::InsuranceRepository;
///
/// let repo = InsuranceRepository::new(pool);
/// let row = repo.find_by_id(7).await?;
/// ```
#[derive(Debug, Clone)]
pub struct InsuranceRepository {
    pool: PgPool,
}

impl InsuranceRepository {
    /// Creates a new InsuranceRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a record and lets the database assign its id
    pub async fn insert(&self, insurance: NewInsurance) -> Result<InsuranceRow, DatabaseError> {
        let row = sqlx::query_as::<_, InsuranceRow>(
            r#"
            INSERT INTO insurance (
                policy_number, holder_name, start_date, end_date,
                claim_date, insured_amount, risk_factor
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING
                id, policy_number, holder_name, start_date, end_date,
                claim_date, insured_amount, risk_factor, created_at, updated_at
            "#,
        )
        .bind(&insurance.policy_number)
        .bind(&insurance.holder_name)
        .bind(insurance.start_date)
        .bind(insurance.end_date)
        .bind(insurance.claim_date)
        .bind(insurance.insured_amount)
        .bind(insurance.risk_factor)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Writes a record under an explicit id, replacing any row already there
    ///
    /// The id sequence is advanced past the written id in the same
    /// transaction so later inserts cannot collide with it.
    pub async fn upsert(&self, id: i64, insurance: NewInsurance) -> Result<InsuranceRow, DatabaseError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        let row = sqlx::query_as::<_, InsuranceRow>(
            r#"
            INSERT INTO insurance (
                id, policy_number, holder_name, start_date, end_date,
                claim_date, insured_amount, risk_factor
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                policy_number = EXCLUDED.policy_number,
                holder_name = EXCLUDED.holder_name,
                start_date = EXCLUDED.start_date,
                end_date = EXCLUDED.end_date,
                claim_date = EXCLUDED.claim_date,
                insured_amount = EXCLUDED.insured_amount,
                risk_factor = EXCLUDED.risk_factor,
                updated_at = NOW()
            RETURNING
                id, policy_number, holder_name, start_date, end_date,
                claim_date, insured_amount, risk_factor, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&insurance.policy_number)
        .bind(&insurance.holder_name)
        .bind(insurance.start_date)
        .bind(insurance.end_date)
        .bind(insurance.claim_date)
        .bind(insurance.insured_amount)
        .bind(insurance.risk_factor)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            SELECT setval(
                pg_get_serial_sequence('insurance', 'id'),
                GREATEST((SELECT MAX(id) FROM insurance), 1)
            )
            "#,
        )
        .execute(&mut *tx)
        .await?;

        tx.commit()
            .await
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        Ok(row)
    }

    /// Retrieves a record by id
    pub async fn find_by_id(&self, id: i64) -> Result<Option<InsuranceRow>, DatabaseError> {
        let query = format!("{SELECT_COLUMNS} WHERE id = $1");
        let row = sqlx::query_as::<_, InsuranceRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Retrieves every record ordered by id
    pub async fn find_all(&self) -> Result<Vec<InsuranceRow>, DatabaseError> {
        let query = format!("{SELECT_COLUMNS} ORDER BY id ASC");
        let rows = sqlx::query_as::<_, InsuranceRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Deletes a record by id
    ///
    /// # Returns
    ///
    /// The number of rows removed (0 or 1)
    pub async fn delete(&self, id: i64) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM insurance WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

/// Database row for an insurance record
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InsuranceRow {
    pub id: i64,
    pub policy_number: String,
    pub holder_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub claim_date: Option<NaiveDate>,
    pub insured_amount: f64,
    pub risk_factor: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Column values written by insert and upsert
#[derive(Debug, Clone)]
pub struct NewInsurance {
    pub policy_number: String,
    pub holder_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub claim_date: Option<NaiveDate>,
    pub insured_amount: f64,
    pub risk_factor: f64,
}
