//! Event model → entity mapper

use events_core::entities::Event;
use events_core::value_objects::EventId;

use crate::models::EventModel;

impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Event {
            id: EventId::new(model.id),
            title: model.title,
            description: model.description,
            date: model.date,
            location: model.location,
            max_attendees: model.max_attendees,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
