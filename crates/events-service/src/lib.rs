//! # events-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AuthResponse, CreateEventRequest, CreateUserRequest, EventQuery, EventResponse, HealthChecks,
    HealthResponse, LoginRequest, MessageResponse, ReadinessResponse, RegisterRequest,
    RegistrationResponse, UpdateEventRequest, UpdateProfileRequest, UpdateUserRequest,
    UserResponse,
};
pub use services::{
    AuthService, AuthenticatedUser, EventService, RegistrationService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
