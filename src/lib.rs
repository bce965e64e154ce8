//! Wordle Client
//!
//! Terminal client for a word-guessing game backend. The server picks the
//! word and scores guesses; this crate starts games, submits guesses, and
//! turns whatever shape the server answers with into a board of colored
//! tiles.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_client::api::HttpGameClient;
//! use wordle_client::render::render_board;
//! use wordle_client::session::GameController;
//!
//! let client = HttpGameClient::new("http://127.0.0.1:5000");
//! let mut controller = GameController::new(client, "ada");
//! controller.start()?;
//! controller.guess("crane")?;
//!
//! let board = render_board(controller.session());
//! println!("{} rows", board.rows.len());
//! # Ok::<(), wordle_client::session::ClientError>(())
//! ```

// Core domain types
pub mod core;

// Payload normalization
pub mod normalize;

// Backend gateway
pub mod api;

// Session state and lifecycle
pub mod session;

// Board view-model
pub mod render;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
