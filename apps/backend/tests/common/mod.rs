//! Common test utilities and fixtures for integration tests.
//!
//! Builds the API router over an in-memory deck so tests need no files
//! or environment.

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;
use hint_core::Deck;

use flashcard_hints_backend::{build_router, AppState};

/// Test context holding the state behind a test server.
pub struct TestContext {
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Create a context over the sample deck.
    pub fn new() -> Self {
        Self::with_deck(fixtures::sample_deck())
    }

    /// Create a context over a specific deck.
    pub fn with_deck(deck: Deck) -> Self {
        let state = AppState::new(deck);
        let app = build_router(state.clone());
        Self { state, app }
    }

    /// Get a test server for the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.app.clone()).unwrap()
    }
}
