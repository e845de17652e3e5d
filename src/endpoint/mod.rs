//! RSVP endpoint module for HTTP communication

mod client;
mod traits;

pub use client::HttpRsvpClient;
pub use traits::RsvpEndpoint;

#[cfg(test)]
pub use traits::MockRsvpEndpoint;
