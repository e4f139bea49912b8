pub mod booking;
pub mod hotel;
pub mod provider;

pub use booking::{BookingLink, BookingLinkBuilder, LinkError};
pub use hotel::HotelResult;
pub use provider::{ProviderDispatcher, ProviderError, ProviderKind};
