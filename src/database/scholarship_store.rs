use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::scholarship::{NewScholarship, Scholarship, ScholarshipChanges};
use crate::query::{Clause, ScholarshipQuery};

const COLUMNS: &str = "id, name, amount, education_level, application_end_date, description, eligibility, community, gender_requirement, status, application_link, organization_logo, application_form_data, created_at, updated_at";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScholarshipStore: Send + Sync {
    /// Records matching `query`, already ordered.
    async fn find(&self, query: &ScholarshipQuery) -> Result<Vec<Scholarship>>;
    async fn get(&self, id: Uuid) -> Result<Scholarship>;
    async fn create(&self, record: NewScholarship) -> Result<Scholarship>;
    async fn update(&self, id: Uuid, changes: ScholarshipChanges) -> Result<Scholarship>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

#[derive(Clone)]
pub struct PgScholarshipStore {
    pool: PgPool,
}

impl PgScholarshipStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Exact-match clauses become SQL conditions so the index narrows the rows
/// read; everything else is evaluated by `ScholarshipQuery::apply`.
fn pushdown(query: &ScholarshipQuery) -> (String, Vec<String>) {
    let mut filters = Vec::new();
    let mut args: Vec<String> = Vec::new();

    for clause in query.filter.clauses() {
        match clause {
            Clause::Status(status) => {
                filters.push(format!("status = ${}", args.len() + 1));
                args.push(status.clone());
            }
            Clause::EducationLevel(level) => {
                filters.push(format!("education_level = ${}", args.len() + 1));
                args.push(level.clone());
            }
            _ => {}
        }
    }

    let where_clause = if filters.is_empty() {
        "".to_string()
    } else {
        format!("WHERE {}", filters.join(" AND "))
    };
    (where_clause, args)
}

#[async_trait]
impl ScholarshipStore for PgScholarshipStore {
    async fn find(&self, query: &ScholarshipQuery) -> Result<Vec<Scholarship>> {
        let (where_clause, args) = pushdown(query);
        let sql = format!(
            "SELECT {} FROM scholarships {} ORDER BY created_at ASC, id ASC",
            COLUMNS, where_clause
        );

        let mut statement = sqlx::query_as::<_, Scholarship>(&sql);
        for value in &args {
            statement = statement.bind(value);
        }
        let rows = statement.fetch_all(&self.pool).await?;
        Ok(query.apply(rows))
    }

    async fn get(&self, id: Uuid) -> Result<Scholarship> {
        let sql = format!("SELECT {} FROM scholarships WHERE id = $1", COLUMNS);
        let record = sqlx::query_as::<_, Scholarship>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(record)
    }

    async fn create(&self, record: NewScholarship) -> Result<Scholarship> {
        let sql = format!(
            r#"
            INSERT INTO scholarships (
                id, name, amount, education_level, application_end_date,
                description, eligibility, community, gender_requirement, status,
                application_link, organization_logo, application_form_data
            ) VALUES (
                $1,$2,$3,$4,$5,
                $6,$7,$8,$9,$10,
                $11,$12,$13
            )
            RETURNING {}
            "#,
            COLUMNS
        );
        let created = sqlx::query_as::<_, Scholarship>(&sql)
            .bind(Uuid::new_v4())
            .bind(record.name)
            .bind(record.amount)
            .bind(record.education_level)
            .bind(record.application_end_date)
            .bind(record.description)
            .bind(record.eligibility)
            .bind(record.community)
            .bind(record.gender_requirement)
            .bind(record.status)
            .bind(record.application_link)
            .bind(record.organization_logo)
            .bind(record.application_form_data)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn update(&self, id: Uuid, changes: ScholarshipChanges) -> Result<Scholarship> {
        let sql = format!(
            r#"
            UPDATE scholarships
            SET
                name = COALESCE($2, name),
                amount = COALESCE($3, amount),
                education_level = COALESCE($4, education_level),
                application_end_date = COALESCE($5, application_end_date),
                description = COALESCE($6, description),
                eligibility = COALESCE($7, eligibility),
                community = COALESCE($8, community),
                gender_requirement = COALESCE($9, gender_requirement),
                status = COALESCE($10, status),
                application_link = COALESCE($11, application_link),
                organization_logo = COALESCE($12, organization_logo),
                application_form_data = COALESCE($13, application_form_data),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        );
        let updated = sqlx::query_as::<_, Scholarship>(&sql)
            .bind(id)
            .bind(changes.name)
            .bind(changes.amount)
            .bind(changes.education_level)
            .bind(changes.application_end_date)
            .bind(changes.description)
            .bind(changes.eligibility)
            .bind(changes.community)
            .bind(changes.gender_requirement)
            .bind(changes.status)
            .bind(changes.application_link)
            .bind(changes.organization_logo)
            .bind(changes.application_form_data)
            .fetch_one(&self.pool)
            .await?;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let res = sqlx::query("DELETE FROM scholarships WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Scholarship {} not found", id)));
        }
        Ok(())
    }
}
