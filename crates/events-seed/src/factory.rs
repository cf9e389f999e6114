//! Random row factories

use chrono::{DateTime, Duration, Utc};
use events_core::entities::{NewEvent, NewRegistration, NewUser, RegistrationStatus};
use events_core::{EventId, UserId};
use fake::faker::address::en::CityName;
use fake::faker::company::en::CatchPhrase;
use fake::faker::internet::en::Username;
use fake::faker::lorem::en::Paragraph;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::seq::SliceRandom;
use rand::Rng;

/// Password every generated user shares
pub const DEFAULT_PASSWORD: &str = "password";

const EVENT_WINDOW_PAST_DAYS: i64 = 60;
const EVENT_WINDOW_FUTURE_DAYS: i64 = 90;
const MAX_REGISTRATION_AGE_DAYS: i64 = 15;

/// A non-admin user; `index` keeps the email unique within one run
pub fn user<R: Rng + ?Sized>(rng: &mut R, index: usize, password_hash: &str) -> NewUser {
    let name: String = Name().fake_with_rng(rng);
    let username: String = Username().fake_with_rng(rng);
    let email = format!("{}.{index}@example.com", username.to_lowercase());

    NewUser::new(name, email, password_hash.to_string())
}

/// An event dated somewhere in the window around `now`
pub fn event<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> NewEvent {
    let offset_minutes = rng.gen_range(
        -EVENT_WINDOW_PAST_DAYS * 24 * 60..=EVENT_WINDOW_FUTURE_DAYS * 24 * 60,
    );

    NewEvent {
        title: CatchPhrase().fake_with_rng(rng),
        description: Paragraph(1..3).fake_with_rng(rng),
        date: now + Duration::minutes(offset_minutes),
        location: CityName().fake_with_rng(rng),
        max_attendees: rng.gen_range(10..=200),
    }
}

/// Between one and three distinct events out of `events`
pub fn pick_events<R: Rng + ?Sized>(rng: &mut R, events: &[EventId]) -> Vec<EventId> {
    let count = rng.gen_range(1..=3).min(events.len());
    events.choose_multiple(rng, count).copied().collect()
}

/// A registration with a random status, made up to a couple of weeks ago
pub fn registration<R: Rng + ?Sized>(
    rng: &mut R,
    user_id: UserId,
    event_id: EventId,
    now: DateTime<Utc>,
) -> NewRegistration {
    let status = RegistrationStatus::ALL
        .choose(rng)
        .copied()
        .unwrap_or_default();

    NewRegistration {
        user_id,
        event_id,
        status,
        registered_at: now - Duration::days(rng.gen_range(0..=MAX_REGISTRATION_AGE_DAYS)),
    }
}
