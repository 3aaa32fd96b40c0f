//! # Core Domain Logic
//!
//! This module contains the booking domain.
//! It knows nothing about the terminal or any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Show / Theater /     │
//!                    │    Screening entities   │
//!                    │  • Cinema aggregate     │
//!                    │    (cascades, occupancy)│
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    nav     │      │  console   │      │   pages    │
//!     │  (engine)  │      │ (adapter)  │      │ (handlers) │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`show`]: show entities and the `ShowKind` sum type
//! - [`theater`]: seat grids and the occupancy state machine
//! - [`screening`]: screenings and seat reservations
//! - [`cinema`]: the aggregate root with cascading deletes
//! - [`config`]: file/env configuration

pub mod cinema;
pub mod config;
pub mod screening;
pub mod show;
pub mod theater;
