//! Model → entity mappers
//!
//! `From<Model> for Entity` converts database rows to domain objects.
//! Registrations use `TryFrom` because the status column is free text.

mod event;
mod registration;
mod user;
