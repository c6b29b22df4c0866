//! ==============================================================================
//! lib.rs - masthead component library
//! ==============================================================================
//!
//! purpose:
//!     a configurable page header component for leptos. renders branding,
//!     navigation links, and authentication actions from a plain
//!     configuration passed in by the caller.
//!
//! relationships:
//!     - used by: stories (config types for the preset catalog)
//!     - used by: showcase (renders the component from live args)
//!
//! design rationale:
//!     the component is a pure view: it owns no state and performs no side
//!     effects beyond running caller-supplied callbacks on click. the caller
//!     decides what login/logout/signup actually do (navigation, global
//!     state, requests) and re-renders with a fresh configuration when
//!     anything changes.
//!
//! ==============================================================================

mod config;
mod header;

pub use config::{HeaderVariant, Logo, NavLink};
pub use header::Header;
