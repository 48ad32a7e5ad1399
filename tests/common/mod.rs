//! Mock SPARQL endpoint shared by the integration tests.
//!
//! Records every form-encoded query it receives and answers with queued
//! `(status, body)` pairs, falling back to `200` with an empty body.

#![allow(dead_code)]

use axum::{
    extract::{Form, State},
    http::{header::ACCEPT, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use std::{
    collections::{HashMap, VecDeque},
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub query: Option<String>,
    pub accept: Option<String>,
    pub fields: Vec<String>,
}

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<VecDeque<(u16, String)>>>,
}

pub struct MockEndpoint {
    pub url: String,
    state: MockState,
}

impl MockEndpoint {
    /// Start a mock endpoint answering with `responses` in order
    pub async fn start(responses: Vec<(u16, &str)>) -> MockEndpoint {
        let state = MockState::default();
        state
            .responses
            .lock()
            .unwrap()
            .extend(responses.into_iter().map(|(status, body)| (status, body.to_string())));

        let app = Router::new().route("/sparql", post(sparql)).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockEndpoint { url: format!("http://{}/sparql", addr), state }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn queries(&self) -> Vec<String> {
        self.requests().into_iter().filter_map(|r| r.query).collect()
    }
}

async fn sparql(
    State(state): State<MockState>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, String) {
    let accept = headers.get(ACCEPT).and_then(|v| v.to_str().ok()).map(str::to_string);
    let mut fields: Vec<String> = form.keys().cloned().collect();
    fields.sort();

    state.requests.lock().unwrap().push(RecordedRequest {
        query: form.get("query").cloned(),
        accept,
        fields,
    });

    let (status, body) = state.responses.lock().unwrap().pop_front().unwrap_or((200, String::new()));
    (StatusCode::from_u16(status).unwrap(), body)
}

/// URL of a port nothing listens on
pub async fn closed_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/sparql", addr)
}

/// Write an identifier document holding `ids` as `<bm_prn>` records
pub fn write_document(dir: &Path, ids: &[&str]) -> PathBuf {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<records>\n");
    for id in ids {
        xml.push_str(&format!(
            "  <record>\n    <title>Object</title>\n    <bm_prn>{}</bm_prn>\n  </record>\n",
            id
        ));
    }
    xml.push_str("</records>\n");

    let path = dir.join("BM20.xml");
    fs::write(&path, xml).unwrap();
    path
}

pub fn graph_query(id: &str) -> String {
    format!(
        "CONSTRUCT {{?s ?p ?o}} WHERE {{GRAPH <http://collection.britishmuseum.org/id/object/{}/graph> {{?s ?p ?o}}}}",
        id
    )
}
