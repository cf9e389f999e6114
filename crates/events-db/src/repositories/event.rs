//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use events_core::entities::{Event, EventTiming, NewEvent};
use events_core::error::DomainError;
use events_core::traits::{EventFilter, EventRepository, RepoResult};
use events_core::value_objects::EventId;

use crate::models::EventModel;

use super::error::map_db_error;

const EVENT_COLUMNS: &str =
    "id, title, description, date, location, max_attendees, created_at, updated_at";

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape LIKE wildcards so user input is matched literally
fn like_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Build the SELECT for a filter. Conditions mirror `EventFilter::matches`.
fn build_list_query(filter: &EventFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT {EVENT_COLUMNS} FROM events WHERE TRUE"));

    if let Some(title) = &filter.title {
        qb.push(" AND title ILIKE ").push_bind(like_pattern(title));
    }
    if let Some(location) = &filter.location {
        qb.push(" AND location ILIKE ").push_bind(like_pattern(location));
    }
    if let Some(from) = filter.date_from {
        qb.push(" AND date >= ").push_bind(from);
    }
    if let Some(to) = filter.date_to {
        qb.push(" AND date <= ").push_bind(to);
    }
    if let Some(timing) = filter.timing {
        let op = match timing {
            EventTiming::Upcoming => " AND date > ",
            EventTiming::Past => " AND date <= ",
        };
        qb.push(op).push_bind(filter.now());
    }

    qb.push(" ORDER BY date, id");
    qb
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>> {
        let result = sqlx::query_as::<_, EventModel>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Event::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &EventFilter) -> RepoResult<Vec<Event>> {
        let rows = build_list_query(filter)
            .build_query_as::<EventModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self, event), fields(title = %event.title))]
    async fn create(&self, event: &NewEvent) -> RepoResult<Event> {
        let row = sqlx::query_as::<_, EventModel>(&format!(
            r"
            INSERT INTO events (title, description, date, location, max_attendees)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {EVENT_COLUMNS}
            "
        ))
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.date)
        .bind(&event.location)
        .bind(event.max_attendees)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Event::from(row))
    }

    #[instrument(skip(self, event), fields(event_id = %event.id))]
    async fn update(&self, event: &Event) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE events
            SET title = $2, description = $3, date = $4, location = $5,
                max_attendees = $6, updated_at = $7
            WHERE id = $1
            ",
        )
        .bind(event.id.into_inner())
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.date)
        .bind(&event.location)
        .bind(event.max_attendees)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EventNotFound(event.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: EventId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EventNotFound(id));
        }

        Ok(())
    }
}
