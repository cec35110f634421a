//! Art-O-Matic: a random artwork from the Smithsonian American Art Museum.
//!
//! This crate turns the normalized records produced by [`saam_sparql`] into
//! something a person can look at:
//! Endpoint → Normalizer → Random pick → Card → Terminal
//!
//! # Architecture
//!
//! - **Config**: TOML file with endpoint and display sections
//! - **Session**: owns the query provider and the per-session response
//!   cache, and picks records at random
//! - **Card**: derives the life range and the catalog links from a record
//! - **Render**: prints cards as text or JSON

pub mod card;
pub mod config;
pub mod error;
pub mod render;
pub mod session;

pub use card::ArtworkCard;
pub use config::{ArtConfig, DisplayConfig, OutputFormat};
pub use error::{ArtError, Result};
pub use session::DisplaySession;
