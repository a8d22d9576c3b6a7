//! Country Guess
//!
//! Guess a randomly chosen country. Every miss tells you how many places away
//! the answer sits in the alphabetical country list, and in which direction.
//!
//! # Quick Start
//!
//! ```rust
//! use country_guess::audio::Silent;
//! use country_guess::core::{Catalog, Outcome};
//! use country_guess::game::Game;
//! use country_guess::scores::{Ledger, MemoryStore};
//!
//! let catalog = Catalog::build([("TD", Some("Chad")), ("FR", Some("France"))]);
//! let ledger = Ledger::load(MemoryStore::default());
//! let mut game = Game::with_target(&catalog, ledger, Silent, 1).unwrap();
//!
//! assert!(matches!(game.submit("Chad"), Some(Outcome::Mismatch { distance: 1, .. })));
//! assert_eq!(game.submit("France"), Some(Outcome::Correct));
//! assert_eq!(game.ledger().len(), 1);
//! ```

// Core domain types
pub mod core;

// Round controller
pub mod game;

// Region data
pub mod regions;

// Persisted scoreboard
pub mod scores;

// Audio cue sinks
pub mod audio;

// Settings and logging
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
