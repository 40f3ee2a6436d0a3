//! Repository for the `gifts` table.

use heartboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::gift::{CreateGift, Gift, UpdateGift};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, event_id, created_by, name, description, price, currency, link, \
    status, priority, is_done, purchased_by, purchased_at, notes, tags, \
    recipient_name, recipient_relationship, shipping_address, shipping_tracking, \
    shipping_estimated_delivery, created_at, updated_at";

/// Provides CRUD operations for gifts.
pub struct GiftRepo;

impl GiftRepo {
    /// Insert a new gift created by `created_by`, returning the created row.
    ///
    /// Defaults: currency `USD`, status `planned`, priority `medium`.
    pub async fn create(
        pool: &PgPool,
        created_by: DbId,
        input: &CreateGift,
    ) -> Result<Gift, sqlx::Error> {
        let query = format!(
            "INSERT INTO gifts
                (event_id, created_by, name, description, price, currency, link,
                 status, priority, notes, tags, recipient_name, recipient_relationship,
                 shipping_address, shipping_tracking, shipping_estimated_delivery)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'USD'), $7,
                     COALESCE($8, 'planned'), COALESCE($9, 'medium'), $10, $11, $12, $13,
                     $14, $15, $16)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gift>(&query)
            .bind(input.event_id)
            .bind(created_by)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.currency)
            .bind(&input.link)
            .bind(&input.status)
            .bind(&input.priority)
            .bind(&input.notes)
            .bind(&input.tags)
            .bind(&input.recipient_name)
            .bind(&input.recipient_relationship)
            .bind(&input.shipping_address)
            .bind(&input.shipping_tracking)
            .bind(input.shipping_estimated_delivery)
            .fetch_one(pool)
            .await
    }

    /// Find a gift by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Gift>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gifts WHERE id = $1");
        sqlx::query_as::<_, Gift>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all gifts for an event, newest first.
    pub async fn list_by_event(pool: &PgPool, event_id: DbId) -> Result<Vec<Gift>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gifts
             WHERE event_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Gift>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Update a gift. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGift,
    ) -> Result<Option<Gift>, sqlx::Error> {
        let query = format!(
            "UPDATE gifts SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                currency = COALESCE($5, currency),
                link = COALESCE($6, link),
                status = COALESCE($7, status),
                priority = COALESCE($8, priority),
                notes = COALESCE($9, notes),
                tags = COALESCE($10, tags),
                recipient_name = COALESCE($11, recipient_name),
                recipient_relationship = COALESCE($12, recipient_relationship),
                shipping_address = COALESCE($13, shipping_address),
                shipping_tracking = COALESCE($14, shipping_tracking),
                shipping_estimated_delivery = COALESCE($15, shipping_estimated_delivery)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gift>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.currency)
            .bind(&input.link)
            .bind(&input.status)
            .bind(&input.priority)
            .bind(&input.notes)
            .bind(&input.tags)
            .bind(&input.recipient_name)
            .bind(&input.recipient_relationship)
            .bind(&input.shipping_address)
            .bind(&input.shipping_tracking)
            .bind(input.shipping_estimated_delivery)
            .fetch_optional(pool)
            .await
    }

    /// Flip a gift's completion flag in a single statement.
    ///
    /// When the flag transitions to done, `purchased_by` is stamped with
    /// `user_id` and `purchased_at` with the database clock; transitioning
    /// back clears both. Deliberately not idempotent: two toggles restore the
    /// flag but leave the purchaser fields cleared.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn toggle_done(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Gift>, sqlx::Error> {
        // `is_done` on the right-hand side is the pre-update value, so
        // `NOT is_done` is the value being written.
        let query = format!(
            "UPDATE gifts SET
                is_done = NOT is_done,
                purchased_by = CASE WHEN NOT is_done THEN $2 ELSE NULL END,
                purchased_at = CASE WHEN NOT is_done THEN NOW() ELSE NULL END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gift>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a gift by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gifts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
