//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams the application talks through. Adapters implement
//! them: SQLite and the in-memory test store behind [`outbound::store`], the
//! colored terminal and the scripted test console behind
//! [`outbound::console`].
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  input · selector ·     ├──────────────┐
//!     │              │  workflow · catalog     │              │
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌─────────┐                                          ┌───────────┐
//! │ Console │                                          │  Record   │
//! │ Adapter │                                          │  Store    │
//! └─────────┘                                          └───────────┘
//! ```

pub mod outbound;
