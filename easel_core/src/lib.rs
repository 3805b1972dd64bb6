//! # easel_core - Application Shell Core
//!
//! `easel_core` is the toolkit-independent heart of the Easel application
//! shell: the toolbar control registry, the intent vocabulary, the action
//! dispatcher capability, and the resource-provider boundary. The GUI crate
//! renders what this crate owns; workspace-specific editing logic is opaque
//! to it.
//!
//! ## Design Philosophy
//!
//! - **Explicit wiring**: controls map to dispatcher methods through one
//!   intent-to-method table, not per-control callbacks
//! - **Injected collaborators**: resource providers and dispatchers are
//!   passed in at construction, never read from global state
//! - **Rich Errors**: structured error types, not just strings
//! - **Single-threaded**: all registry state lives on the UI event thread
//!
//! ## Quick Start
//!
//! ```rust
//! use easel_core::registry::ControlRegistry;
//! use easel_core::resources::PropertiesProvider;
//!
//! let mut provider = PropertiesProvider::default();
//! for key in ControlRegistry::required_keys() {
//!     provider.insert(key, key.to_lowercase());
//! }
//!
//! let mut registry = ControlRegistry::initialize(&provider).unwrap();
//! registry.update_enablement(false); // editing began, save becomes enabled
//! ```
//!
//! ## Modules
//!
//! - [`intent`] - Intents, toggles, and toolbar zones
//! - [`registry`] - The toolbar control registry and its enablement contract
//! - [`dispatcher`] - Action dispatcher capability and intent forwarding
//! - [`resources`] - Resource provider boundary and JSON-backed adapter
//! - [`errors`] - Structured error types

pub mod dispatcher;
pub mod errors;
pub mod intent;
pub mod registry;
pub mod resources;

// Re-export commonly used types at crate root for convenience
pub use dispatcher::ActionDispatcher;
pub use errors::{ShellError, ShellResult};
pub use intent::{Intent, Toggle, Zone};
pub use registry::{Control, ControlId, ControlRegistry};
pub use resources::{PropertiesProvider, ResourceProvider};
