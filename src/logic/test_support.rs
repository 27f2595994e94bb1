// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Mock backend for tests that exercise the blocking client.
//!
//! The mock server lives on a Tokio runtime owned by the fixture, while the
//! blocking client is driven from the test thread outside of that runtime.

use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer, Request};

use crate::app::config::{AppConfig, parse_base_url};
use crate::logic::api::ApiClient;

pub(crate) struct MockBackend {
    // Declared before `runtime` so the server shuts down first.
    server: MockServer,
    runtime: Runtime,
}

impl MockBackend {
    pub(crate) fn start() -> Self {
        let runtime = Runtime::new().expect("tokio runtime");
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    pub(crate) fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    pub(crate) fn requests(&self) -> Vec<Request> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }

    pub(crate) fn config(&self) -> AppConfig {
        AppConfig::with_base_url(parse_base_url(&self.server.uri()).expect("mock server URI"))
    }

    pub(crate) fn client(&self) -> ApiClient {
        self.client_with(|_| {})
    }

    pub(crate) fn client_with(&self, adjust: impl FnOnce(&mut AppConfig)) -> ApiClient {
        let mut config = self.config();
        adjust(&mut config);
        ApiClient::new(&config).expect("client builds")
    }
}
