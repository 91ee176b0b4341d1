//! Infrastructure layer: concrete implementations of the domain
//! interfaces and the wire-format DTOs.

pub mod dto;
pub mod identity;
pub mod message_pusher;
pub mod repository;
