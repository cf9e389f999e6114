//! Event service

use chrono::Utc;
use events_core::entities::{Event, EventChanges, NewEvent, User};
use events_core::traits::EventFilter;
use events_core::{DomainError, EventId};
use tracing::{info, instrument};

use crate::dto::{CreateEventRequest, EventQuery, EventResponse, UpdateEventRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::require_admin;

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All events, date ascending
    #[instrument(skip(self))]
    pub async fn list_events(&self) -> ServiceResult<Vec<EventResponse>> {
        self.query(EventFilter::default()).await
    }

    /// Events dated strictly after now
    #[instrument(skip(self))]
    pub async fn upcoming_events(&self) -> ServiceResult<Vec<EventResponse>> {
        self.query(EventFilter::upcoming(Utc::now())).await
    }

    /// Events dated now or earlier
    #[instrument(skip(self))]
    pub async fn past_events(&self) -> ServiceResult<Vec<EventResponse>> {
        self.query(EventFilter::past(Utc::now())).await
    }

    /// Events matching every given criterion
    #[instrument(skip(self))]
    pub async fn filter_events(&self, query: EventQuery) -> ServiceResult<Vec<EventResponse>> {
        let filter = query
            .into_filter(Utc::now())
            .map_err(ServiceError::validation)?;
        self.query(filter).await
    }

    /// Create an event (admin)
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id, title = %request.title))]
    pub async fn create_event(
        &self,
        actor: &User,
        request: CreateEventRequest,
    ) -> ServiceResult<EventResponse> {
        require_admin(actor)?;

        let event = self
            .ctx
            .event_repo()
            .create(&NewEvent::from(request))
            .await?;

        info!(event_id = %event.id, "Event created");
        Ok(EventResponse::from(&event))
    }

    /// Partially update an event (admin)
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id))]
    pub async fn update_event(
        &self,
        actor: &User,
        event_id: EventId,
        request: UpdateEventRequest,
    ) -> ServiceResult<EventResponse> {
        require_admin(actor)?;

        let mut event = self.load(event_id).await?;
        if event.apply(EventChanges::from(request)) {
            self.ctx.event_repo().update(&event).await?;
            info!(event_id = %event_id, "Event updated");
        }

        Ok(EventResponse::from(&event))
    }

    /// Delete an event and its registrations (admin)
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn delete_event(&self, actor: &User, event_id: EventId) -> ServiceResult<()> {
        require_admin(actor)?;
        self.ctx.event_repo().delete(event_id).await?;
        info!(event_id = %event_id, "Event deleted");
        Ok(())
    }

    async fn load(&self, event_id: EventId) -> ServiceResult<Event> {
        self.ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| DomainError::EventNotFound(event_id).into())
    }

    async fn query(&self, filter: EventFilter) -> ServiceResult<Vec<EventResponse>> {
        let now = filter.now();
        let events = self.ctx.event_repo().list(&filter).await?;
        Ok(events.iter().map(|e| EventResponse::at(e, now)).collect())
    }
}
