//! Repository for the `events` and `event_shares` tables.

use heartboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{
    CreateEvent, Event, EventListFilter, EventShare, EventSort, EventWithStats, UpdateEvent,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, name, date, description, status, category, is_public, \
    budget, location, tags, attachments, created_at, updated_at";

/// Share column list.
const SHARE_COLUMNS: &str = "id, event_id, user_id, role, created_at";

/// Provides CRUD and sharing operations for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event owned by `owner_id`, returning the created row.
    ///
    /// Defaults: status `pending`, category `other`.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateEvent,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events
                (owner_id, name, date, description, status, category, is_public,
                 budget, location, tags)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'pending'), COALESCE($6, 'other'),
                     $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(owner_id)
            .bind(&input.name)
            .bind(input.date)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.category)
            .bind(input.is_public)
            .bind(input.budget)
            .bind(&input.location)
            .bind(&input.tags)
            .fetch_one(pool)
            .await
    }

    /// Find an event by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List events owned by `owner_id`, with per-event gift statistics.
    ///
    /// Applies the filter's status/category equality, case-insensitive
    /// substring search over name OR description, and the requested sort
    /// order. Events shared *with* the user are deliberately not included;
    /// the detail endpoint honors shared access instead.
    pub async fn list_owned(
        pool: &PgPool,
        owner_id: DbId,
        filter: &EventListFilter,
    ) -> Result<Vec<EventWithStats>, sqlx::Error> {
        let order_by = match filter.sort {
            EventSort::Date => "e.date ASC",
            EventSort::Name => "e.name ASC",
            EventSort::Created => "e.created_at DESC",
        };
        // LIKE wildcards in the needle are matched literally: "100%" must not
        // match every event containing "100".
        let search = filter
            .search
            .as_ref()
            .map(|s| s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_"));
        let query = format!(
            "SELECT e.id, e.owner_id, e.name, e.date, e.description, e.status, e.category,
                    e.is_public, e.budget, e.location, e.tags, e.attachments,
                    e.created_at, e.updated_at,
                    COUNT(g.id) AS gift_total,
                    COUNT(g.id) FILTER (WHERE g.is_done) AS gift_completed,
                    COUNT(g.id) FILTER (WHERE NOT g.is_done) AS gift_pending,
                    COALESCE(SUM(g.price), 0) AS total_spent
             FROM events e
             LEFT JOIN gifts g ON g.event_id = e.id
             WHERE e.owner_id = $1
               AND ($2::text IS NULL OR e.status = $2)
               AND ($3::text IS NULL OR e.category = $3)
               AND ($4::text IS NULL
                    OR e.name ILIKE '%' || $4 || '%' ESCAPE '\\'
                    OR e.description ILIKE '%' || $4 || '%' ESCAPE '\\')
             GROUP BY e.id
             ORDER BY {order_by}"
        );
        sqlx::query_as::<_, EventWithStats>(&query)
            .bind(owner_id)
            .bind(&filter.status)
            .bind(&filter.category)
            .bind(&search)
            .fetch_all(pool)
            .await
    }

    /// Update an event. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                name = COALESCE($2, name),
                date = COALESCE($3, date),
                description = COALESCE($4, description),
                status = COALESCE($5, status),
                category = COALESCE($6, category),
                is_public = COALESCE($7, is_public),
                budget = COALESCE($8, budget),
                location = COALESCE($9, location),
                tags = COALESCE($10, tags)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.date)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.category)
            .bind(input.is_public)
            .bind(input.budget)
            .bind(&input.location)
            .bind(&input.tags)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event and every gift referencing it, atomically.
    ///
    /// Both statements run in one transaction: a failure on the event delete
    /// rolls the gift delete back, so the caller never observes gifts removed
    /// without the event. Returns `(gifts_removed, event_removed)`.
    pub async fn delete_cascade(pool: &PgPool, id: DbId) -> Result<(u64, bool), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let gifts = sqlx::query("DELETE FROM gifts WHERE event_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let event = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((gifts.rows_affected(), event.rows_affected() > 0))
    }

    /// List an event's share entries in insertion order.
    pub async fn list_shares(pool: &PgPool, event_id: DbId) -> Result<Vec<EventShare>, sqlx::Error> {
        let query = format!(
            "SELECT {SHARE_COLUMNS} FROM event_shares
             WHERE event_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, EventShare>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Find the share entry for a specific user on an event, if any.
    pub async fn find_share(
        pool: &PgPool,
        event_id: DbId,
        user_id: DbId,
    ) -> Result<Option<EventShare>, sqlx::Error> {
        let query =
            format!("SELECT {SHARE_COLUMNS} FROM event_shares WHERE event_id = $1 AND user_id = $2");
        sqlx::query_as::<_, EventShare>(&query)
            .bind(event_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Append a share entry, returning the created row.
    ///
    /// The unique constraint on (event_id, user_id) rejects duplicates;
    /// callers check first so duplicates surface as a domain conflict rather
    /// than a database error.
    pub async fn add_share(
        pool: &PgPool,
        event_id: DbId,
        user_id: DbId,
        role: &str,
    ) -> Result<EventShare, sqlx::Error> {
        let query = format!(
            "INSERT INTO event_shares (event_id, user_id, role)
             VALUES ($1, $2, $3)
             RETURNING {SHARE_COLUMNS}"
        );
        sqlx::query_as::<_, EventShare>(&query)
            .bind(event_id)
            .bind(user_id)
            .bind(role)
            .fetch_one(pool)
            .await
    }
}
