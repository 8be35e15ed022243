use std::marker::PhantomData;

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::core::error::{AppError, Result};
use crate::features::reports::resource::{ListQuery, ReportResource};
use crate::features::summaries::SummaryService;
use crate::shared::types::Pagination;

/// Generic service backing every archivable report resource.
pub struct ResourceService<R> {
    pool: PgPool,
    _resource: PhantomData<fn() -> R>,
}

impl<R: ReportResource> ResourceService<R> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _resource: PhantomData,
        }
    }

    /// Create a record, stamping both audit columns with the actor.
    ///
    /// Runs in a transaction: when the entity feeds a summary row, the
    /// increment commits or rolls back together with the insert.
    pub async fn create(&self, input: R::Create, actor: i64) -> Result<R> {
        let mut record = R::from_create(input);
        record.recompute();

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "INSERT INTO {} ({}, created_by, updated_by) VALUES (",
            R::TABLE,
            R::COLUMNS.join(", ")
        ));
        {
            let mut values = qb.separated(", ");
            record.push_values(&mut values);
            values.push_bind(actor);
            values.push_bind(actor);
        }
        qb.push(") RETURNING *");

        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let created: R = qb.build_query_as().fetch_one(&mut *tx).await.map_err(|e| {
            tracing::error!("Failed to create {}: {:?}", R::RESOURCE_NAME, e);
            AppError::Database(e)
        })?;

        if let Some(delta) = created.summary_delta() {
            SummaryService::apply_delta(&mut tx, &delta).await?;
        }

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit {} create: {:?}", R::RESOURCE_NAME, e);
            AppError::Database(e)
        })?;

        tracing::info!("{} created: id={}", R::RESOURCE_NAME, created.id());

        Ok(created)
    }

    /// List non-archived records, newest first unless told otherwise.
    pub async fn find_all(&self, query: &ListQuery) -> Result<(Vec<R>, Pagination)> {
        let sort_field = match query.sort_field.as_deref() {
            Some(field) => {
                if !R::SORTABLE_FIELDS.contains(&field) {
                    return Err(AppError::Validation(format!(
                        "Cannot sort {} by '{}'",
                        R::RESOURCE_NAME,
                        field
                    )));
                }
                field
            }
            None => "created_at",
        };

        let count_sql = format!(
            "SELECT COUNT(*) FROM {} WHERE is_archived = FALSE",
            R::TABLE
        );
        let total: i64 = sqlx::query_scalar(&count_sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count {}: {:?}", R::RESOURCE_NAME, e);
                AppError::Database(e)
            })?;

        let pagination = query.pagination();
        let list_sql = format!(
            "SELECT * FROM {} WHERE is_archived = FALSE ORDER BY {} {} LIMIT $1 OFFSET $2",
            R::TABLE,
            sort_field,
            query.sort_order.as_sql()
        );
        let items = sqlx::query_as::<_, R>(&list_sql)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list {}: {:?}", R::RESOURCE_NAME, e);
                AppError::Database(e)
            })?;

        let meta = Pagination::new(total, pagination.page(), pagination.limit());

        Ok((items, meta))
    }

    /// Get a non-archived record by id.
    pub async fn find_one(&self, id: i64) -> Result<R> {
        let sql = format!(
            "SELECT * FROM {} WHERE id = $1 AND is_archived = FALSE",
            R::TABLE
        );
        let record = sqlx::query_as::<_, R>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get {}: {:?}", R::RESOURCE_NAME, e);
                AppError::Database(e)
            })?;

        record.ok_or_else(|| AppError::NotFound(format!("{} {} not found", R::RESOURCE_NAME, id)))
    }

    /// Merge a partial update, recompute derived fields and persist.
    ///
    /// Concurrent updates are last-write-wins; the row carries no version
    /// column.
    pub async fn update(&self, id: i64, patch: R::Update, actor: i64) -> Result<R> {
        let mut record = self.find_one(id).await?;
        record.apply_update(patch);
        record.recompute();

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "UPDATE {} SET ({}, updated_by) = (",
            R::TABLE,
            R::COLUMNS.join(", ")
        ));
        {
            let mut values = qb.separated(", ");
            record.push_values(&mut values);
            values.push_bind(actor);
        }
        qb.push("), updated_at = NOW() WHERE id = ");
        qb.push_bind(id);
        qb.push(" AND is_archived = FALSE RETURNING *");

        let updated: Option<R> = qb
            .build_query_as()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update {}: {:?}", R::RESOURCE_NAME, e);
                AppError::Database(e)
            })?;

        updated.ok_or_else(|| AppError::NotFound(format!("{} {} not found", R::RESOURCE_NAME, id)))
    }

    /// Archive a record. The row is kept; it just stops being visible.
    pub async fn remove(&self, id: i64, actor: i64) -> Result<()> {
        let sql = format!(
            "UPDATE {} SET is_archived = TRUE, updated_by = $1, updated_at = NOW() \
             WHERE id = $2 AND is_archived = FALSE RETURNING id",
            R::TABLE
        );
        let archived: Option<i64> = sqlx::query_scalar(&sql)
            .bind(actor)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to archive {}: {:?}", R::RESOURCE_NAME, e);
                AppError::Database(e)
            })?;

        if archived.is_none() {
            return Err(AppError::NotFound(format!(
                "{} {} not found",
                R::RESOURCE_NAME,
                id
            )));
        }

        tracing::info!("{} archived: id={}", R::RESOURCE_NAME, id);

        Ok(())
    }
}
