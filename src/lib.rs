//! Deskterm - command interpreter and session core for a simulated desktop terminal
//!
//! This library implements the terminal application core of a simulated
//! desktop environment: a line-oriented command interpreter with persistent
//! block history, a bounded telemetry window fed by a background sampler,
//! and session teardown that crosses into navigation and persisted storage.
//!
//! The crate has no process boundary of its own. Window chrome, navigation
//! targets, durable storage, and the usage feed are all injected
//! capabilities, so the core runs in-process inside whatever shell hosts it
//! and is fully testable with in-memory doubles.
//!
//! ## Module Organization
//!
//! - [`interpreter`] - Command dispatch and evaluation
//! - [`history`] - Persistent block history
//! - [`telemetry`] - Usage sampling and the bounded trailing window
//! - [`session`] - Teardown, navigation, and window capabilities
//! - [`terminal`] - Session orchestration
//! - [`storage`] - Injected key-value persistence
//! - [`config`] - Configuration loading, defaults, validation
//! - [`models`] - Data structures (CommandResult, HistoryEntry)
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```no_run
//! use deskterm::session::{Destination, Navigator, WindowHost};
//! use deskterm::storage::{shared, MemoryStore};
//! use deskterm::telemetry::SimulatedUsageProbe;
//! use deskterm::terminal::TerminalSession;
//!
//! struct HostNavigator;
//! impl Navigator for HostNavigator {
//!     fn navigate(&mut self, destination: Destination) {
//!         println!("-> {}", destination.route());
//!     }
//! }
//!
//! struct HostWindow;
//! impl WindowHost for HostWindow {
//!     fn close(&mut self) {}
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = deskterm::init();
//!     let mut session = TerminalSession::open(
//!         &config,
//!         shared(MemoryStore::new()),
//!         Box::new(HostNavigator),
//!         Box::new(HostWindow),
//!         Box::new(SimulatedUsageProbe::new()),
//!     );
//!     if let Some(result) = session.submit("help") {
//!         println!("{}", result.text());
//!     }
//! }
//! ```
//!
//! ## Concurrency
//!
//! Command evaluation is synchronous and single-threaded. The only
//! background activity is the telemetry sampler's timer task, which is
//! cancelled exactly when the owning session closes.

#[macro_use]
extern crate tracing;

pub mod config;
pub mod error;
pub mod history;
pub mod interpreter;
pub mod models;
pub mod session;
pub mod storage;
pub mod telemetry;
pub mod terminal;

// Re-exports for core functionality
pub use config::{Config, ConfigLoader};
pub use error::{Error, Result};
pub use interpreter::CommandInterpreter;
pub use models::{CommandResult, HistoryEntry};
pub use terminal::TerminalSession;

// Version information
/// The current version of deskterm from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The crate name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The crate description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Load configuration, falling back to defaults when no file exists or the
/// file cannot be used
pub fn init() -> Config {
    info!("initializing {} v{}", NAME, VERSION);
    match ConfigLoader::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("failed to load configuration: {}. Using defaults", e);
            Config::default()
        }
    }
}

/// Install a process-wide tracing subscriber honoring `RUST_LOG`.
///
/// Hosts embedding the core call this once at startup; repeated calls are
/// ignored.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
