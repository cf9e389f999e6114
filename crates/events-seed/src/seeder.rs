//! Seeding orchestration: users, then events, then registrations

use std::fmt;
use std::sync::Arc;

use chrono::{Duration, Utc};
use events_common::hash_password;
use events_core::entities::{Event, NewRegistration, NewUser, User};
use events_core::traits::{EventFilter, EventRepository, RegistrationRepository, UserRepository};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, instrument};

use crate::config::SeedConfig;
use crate::error::{SeedError, SeedResult};
use crate::{factory, fixtures};

/// Rows written by a seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub events: usize,
    pub fixed_registrations: usize,
    pub random_registrations: usize,
}

impl SeedReport {
    pub fn registrations(&self) -> usize {
        self.fixed_registrations + self.random_registrations
    }
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} users, {} events, {} registrations ({} fixed + {} random)",
            self.users,
            self.events,
            self.registrations(),
            self.fixed_registrations,
            self.random_registrations
        )
    }
}

/// Writes fixture and random rows through the repository traits
pub struct Seeder {
    users: Arc<dyn UserRepository>,
    events: Arc<dyn EventRepository>,
    registrations: Arc<dyn RegistrationRepository>,
    config: SeedConfig,
    rng: StdRng,
}

impl Seeder {
    pub fn new(
        users: Arc<dyn UserRepository>,
        events: Arc<dyn EventRepository>,
        registrations: Arc<dyn RegistrationRepository>,
        config: SeedConfig,
    ) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            users,
            events,
            registrations,
            config,
            rng,
        }
    }

    /// Seed users, events and registrations in that order
    ///
    /// # Errors
    /// Fails on the first repository error or missing fixture row
    #[instrument(skip(self), fields(users = self.config.users, events = self.config.events))]
    pub async fn run(&mut self) -> SeedResult<SeedReport> {
        let users = self.seed_users().await?;
        let events = self.seed_events().await?;
        let (fixed_registrations, random_registrations) = self.seed_registrations().await?;

        let report = SeedReport {
            users: users.len(),
            events: events.len(),
            fixed_registrations,
            random_registrations,
        };

        info!(%report, "Seeding complete");
        Ok(report)
    }

    /// The fixed admin and test accounts, then `config.users` random users
    ///
    /// # Errors
    /// Fails when hashing fails or an email is already taken
    #[instrument(skip(self))]
    pub async fn seed_users(&mut self) -> SeedResult<Vec<User>> {
        let mut created = Vec::with_capacity(fixtures::USERS.len() + self.config.users);

        for fixture in &fixtures::USERS {
            let mut new_user = NewUser::new(
                fixture.name,
                fixture.email,
                hash_password(fixture.password)?,
            );
            if fixture.is_admin {
                new_user = new_user.admin();
            }
            created.push(self.users.create(&new_user).await?);
        }

        // One hash shared by every generated account
        let shared_hash = hash_password(factory::DEFAULT_PASSWORD)?;
        for index in 0..self.config.users {
            let new_user = factory::user(&mut self.rng, index, &shared_hash);
            created.push(self.users.create(&new_user).await?);
        }

        info!(
            count = created.len(),
            fixed = fixtures::USERS.len(),
            random = self.config.users,
            "Users seeded"
        );
        Ok(created)
    }

    /// The three fixed events, then `config.events` random events
    ///
    /// # Errors
    /// Fails on the first repository error
    #[instrument(skip(self))]
    pub async fn seed_events(&mut self) -> SeedResult<Vec<Event>> {
        let now = Utc::now();
        let fixed = fixtures::events(now);
        let mut created = Vec::with_capacity(fixed.len() + self.config.events);

        for new_event in &fixed {
            created.push(self.events.create(new_event).await?);
        }

        for _ in 0..self.config.events {
            let new_event = factory::event(&mut self.rng, now);
            created.push(self.events.create(&new_event).await?);
        }

        info!(
            count = created.len(),
            fixed = fixed.len(),
            random = self.config.events,
            "Events seeded"
        );
        Ok(created)
    }

    /// Fixed registrations by row position, then 1 to 3 random ones per user
    ///
    /// Returns the number of fixed and random rows actually inserted. Pairs
    /// that already exist are skipped. Nothing is written when there are too
    /// few users or events for the fixed rows.
    ///
    /// # Errors
    /// `MissingFixture` when the store holds too few users or events
    #[instrument(skip(self))]
    pub async fn seed_registrations(&mut self) -> SeedResult<(usize, usize)> {
        let mut users = self.users.list().await?;
        users.sort_by_key(|u| u.id);
        let mut events = self.events.list(&EventFilter::default()).await?;
        events.sort_by_key(|e| e.id);

        let (users_needed, events_needed) = fixtures::required_rows();
        if users.len() < users_needed {
            return Err(SeedError::MissingFixture {
                entity: "user",
                index: users_needed - 1,
                available: users.len(),
            });
        }
        if events.len() < events_needed {
            return Err(SeedError::MissingFixture {
                entity: "event",
                index: events_needed - 1,
                available: events.len(),
            });
        }

        let now = Utc::now();

        let mut fixed = 0;
        for fixture in &fixtures::REGISTRATIONS {
            let registration = NewRegistration {
                user_id: users[fixture.user_index].id,
                event_id: events[fixture.event_index].id,
                status: fixture.status,
                registered_at: now - Duration::days(fixture.days_ago),
            };
            if self.registrations.create_if_absent(&registration).await? {
                fixed += 1;
            }
        }

        let event_ids: Vec<_> = events.iter().map(|e| e.id).collect();
        let mut random = 0;
        for user in &users {
            for event_id in factory::pick_events(&mut self.rng, &event_ids) {
                let registration = factory::registration(&mut self.rng, user.id, event_id, now);
                if self.registrations.create_if_absent(&registration).await? {
                    random += 1;
                } else {
                    debug!(user_id = %user.id, event_id = %event_id, "Registration exists, skipped");
                }
            }
        }

        info!(fixed, random, "Registrations seeded");
        Ok((fixed, random))
    }
}
