//! Shared event calendar for recuerdos.

mod event;
mod repository;
mod service;

pub use event::{Event, NewEvent};
pub use repository::EventRepository;
pub use service::{AddEventRequest, CalendarService, UPCOMING_LIMIT};
