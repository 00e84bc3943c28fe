//! Shared test utilities and Mother pattern factories.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{Json, Router, http::StatusCode, routing::get};
use chrono::Utc;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};
use serde_json::{Value, json};

use crate::client::ApiClient;
use crate::domain::balance::RawBalance;
use crate::domain::transaction::{RawCategory, RawTransaction};
use crate::domain::{Dashboard, DisplayBalance, TransactionType, TransactionsResponse};
use crate::state::App;
use crate::ui::cards::card_areas;

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct RawTransactionMother;

impl RawTransactionMother {
    #[must_use]
    pub fn income(id: &str, value: &str) -> RawTransaction {
        RawTransaction {
            id: id.to_string(),
            title: "Salary".to_string(),
            value: value.to_string(),
            transaction_type: TransactionType::Income,
            category: RawCategory {
                title: "Work".to_string(),
            },
            created_at: "2020-04-20T15:32:10.000Z".to_string(),
        }
    }

    #[must_use]
    pub fn outcome(id: &str, value: &str) -> RawTransaction {
        RawTransaction {
            title: "Rent".to_string(),
            transaction_type: TransactionType::Outcome,
            category: RawCategory {
                title: "Home".to_string(),
            },
            ..Self::income(id, value)
        }
    }
}

pub struct RawBalanceMother;

impl RawBalanceMother {
    #[must_use]
    pub fn standard() -> RawBalance {
        RawBalance {
            income: "500000".to_string(),
            outcome: "200000".to_string(),
            total: "300000".to_string(),
        }
    }
}

pub struct DisplayBalanceMother;

impl DisplayBalanceMother {
    #[must_use]
    pub fn standard() -> DisplayBalance {
        DisplayBalance::from_raw(&RawBalanceMother::standard())
    }
}

pub struct JsonMother;

impl JsonMother {
    /// Three transactions (income, outcome, outcome) and a 5000/2000/3000 balance.
    #[must_use]
    pub fn transactions_response() -> Value {
        json!({
            "balance": { "income": "500000", "outcome": "200000", "total": "300000" },
            "transactions": [
                {
                    "id": "a1", "title": "Salary", "value": "500000", "type": "income",
                    "category": { "title": "Work" },
                    "created_at": "2020-04-20T15:32:10.000Z"
                },
                {
                    "id": "b2", "title": "Rent", "value": "120000", "type": "outcome",
                    "category": { "title": "Home" },
                    "created_at": "2020-04-21T09:00:00.000Z"
                },
                {
                    "id": "c3", "title": "Groceries", "value": "35075", "type": "outcome",
                    "category": { "title": "Food" },
                    "created_at": "2020-04-22T18:45:00.000Z"
                }
            ]
        })
    }

    #[must_use]
    pub fn empty_response() -> Value {
        json!({
            "balance": { "income": "0", "outcome": "0", "total": "0" },
            "transactions": []
        })
    }
}

pub struct DashboardMother;

impl DashboardMother {
    #[must_use]
    pub fn standard() -> Dashboard {
        Self::from_json(JsonMother::transactions_response())
    }

    #[must_use]
    pub fn empty() -> Dashboard {
        Self::from_json(JsonMother::empty_response())
    }

    fn from_json(json: Value) -> Dashboard {
        let response: TransactionsResponse =
            serde_json::from_value(json).expect("fixture should decode");
        Dashboard::from_response(&response, &Utc)
    }
}

// ============================================================================
// App & Terminal Helpers
// ============================================================================

/// An app pointed at `url`, not yet mounted.
#[must_use]
pub fn app_for(url: &str) -> App {
    App::with_client(ApiClient::new(url).expect("client should build"))
}

/// Locate the area of the summary card with the given lookup id.
#[must_use]
pub fn find_card(cards_area: Rect, lookup_id: &str) -> Option<Rect> {
    card_areas(cards_area)
        .into_iter()
        .find_map(|(card, rect)| (card.lookup_id() == lookup_id).then_some(rect))
}

/// Collect the symbols of one buffer row inside `area` into a string.
#[must_use]
pub fn row_text(buffer: &Buffer, area: Rect, y: u16) -> String {
    (area.left()..area.right())
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

#[must_use]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 30)).expect("terminal creation should succeed")
}

// ============================================================================
// In-process API Server
// ============================================================================

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_api(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind should succeed");
    let addr = listener.local_addr().expect("listener has an address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server should run");
    });
    format!("http://{addr}")
}

/// Serve `body` as JSON on `/transactions`.
pub async fn spawn_json_api(body: Value) -> String {
    spawn_counting_json_api(body).await.0
}

/// Serve `body` as JSON on `/transactions`, counting requests.
pub async fn spawn_counting_json_api(body: Value) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let router = Router::new().route(
        "/transactions",
        get(move || {
            let body = body.clone();
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(body)
            }
        }),
    );
    (spawn_api(router).await, hits)
}

/// Answer every `/transactions` request with `status` and an empty body.
pub async fn spawn_status_api(status: u16) -> String {
    let code = StatusCode::from_u16(status).expect("valid status code");
    let router = Router::new().route("/transactions", get(move || async move { code }));
    spawn_api(router).await
}

/// Accept `/transactions` requests but never answer them.
pub async fn spawn_pending_api() -> String {
    let router = Router::new().route(
        "/transactions",
        get(|| async { std::future::pending::<StatusCode>().await }),
    );
    spawn_api(router).await
}
