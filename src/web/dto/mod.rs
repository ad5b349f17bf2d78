//! Request and response DTOs for the web API.

mod request;
mod response;

pub use request::{
    ActingUserQuery, AddEventBody, EventListQuery, LoginRequest, PhotoListQuery, RegisterRequest,
    ValentineUpdateBody,
};
pub use response::{ApiResponse, ValentineStatusResponse};
