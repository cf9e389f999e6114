//! Fixed rows every seeded database starts with

use chrono::{DateTime, Duration, Utc};
use events_core::entities::{NewEvent, RegistrationStatus};

pub struct UserFixture {
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub is_admin: bool,
}

pub const USERS: [UserFixture; 2] = [
    UserFixture {
        name: "admin",
        email: "admin@events.hu",
        password: "admin123",
        is_admin: true,
    },
    UserFixture {
        name: "test",
        email: "test@events.hu",
        password: "test123",
        is_admin: false,
    },
];

struct EventFixture {
    title: &'static str,
    description: &'static str,
    days_from_now: i64,
    location: &'static str,
    max_attendees: i32,
}

const EVENTS: [EventFixture; 3] = [
    EventFixture {
        title: "Tech Conference 2026",
        description: "Tech",
        days_from_now: 30,
        location: "Budapest ELTE A épület",
        max_attendees: 100,
    },
    EventFixture {
        title: "Marketing workshop",
        description: "Innovatív konferencia",
        days_from_now: 15,
        location: "Online (zoom)",
        max_attendees: 50,
    },
    EventFixture {
        title: "Webfejlesztés alapjai",
        description: "Meeting",
        days_from_now: -10,
        location: "Debreceni egyetem",
        max_attendees: 40,
    },
];

/// The fixed events, dated relative to `now`
pub fn events(now: DateTime<Utc>) -> Vec<NewEvent> {
    EVENTS
        .iter()
        .map(|f| NewEvent {
            title: f.title.to_string(),
            description: f.description.to_string(),
            date: now + Duration::days(f.days_from_now),
            location: f.location.to_string(),
            max_attendees: f.max_attendees,
        })
        .collect()
}

/// A registration addressed by row position in the id-ordered user and
/// event lists
#[derive(Debug, Clone, Copy)]
pub struct RegistrationFixture {
    pub user_index: usize,
    pub event_index: usize,
    pub status: RegistrationStatus,
    pub days_ago: i64,
}

pub const REGISTRATIONS: [RegistrationFixture; 4] = [
    RegistrationFixture {
        user_index: 1,
        event_index: 0,
        status: RegistrationStatus::Accepted,
        days_ago: 5,
    },
    RegistrationFixture {
        user_index: 1,
        event_index: 1,
        status: RegistrationStatus::Pending,
        days_ago: 3,
    },
    RegistrationFixture {
        user_index: 2,
        event_index: 1,
        status: RegistrationStatus::Accepted,
        days_ago: 7,
    },
    RegistrationFixture {
        user_index: 3,
        event_index: 2,
        status: RegistrationStatus::Rejected,
        days_ago: 10,
    },
];

/// Smallest user and event counts the fixed registrations need
pub fn required_rows() -> (usize, usize) {
    REGISTRATIONS.iter().fold((0, 0), |(users, events), f| {
        (users.max(f.user_index + 1), events.max(f.event_index + 1))
    })
}
