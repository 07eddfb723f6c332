//! In-memory tags API used by tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::error::{ApiError, ApiResult};
use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::models::Tag;

#[derive(Default)]
struct FakeState {
    active: Vec<Tag>,
    deleted: Vec<Tag>,
    requests: Vec<ApiRequest>,
    canned: HashMap<String, (u16, String)>,
    offline: bool,
    next_hash: u32,
}

#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<FakeState>,
}

fn tag(name: &str, hash: &str) -> Tag {
    Tag { name: name.to_string(), hash: hash.to_string() }
}

fn json(status: u16, value: impl serde::Serialize) -> ApiResponse {
    ApiResponse { status, body: serde_json::to_string(&value).unwrap() }
}

fn not_found() -> ApiResponse {
    json(404, serde_json::json!({ "message": "Tag not found" }))
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_active(tags: &[(&str, &str)]) -> Arc<Self> {
        let backend = Self::default();
        backend.state.lock().unwrap().active = tags.iter().map(|(n, h)| tag(n, h)).collect();
        Arc::new(backend)
    }

    pub fn with_deleted(self: Arc<Self>, tags: &[(&str, &str)]) -> Arc<Self> {
        self.state.lock().unwrap().deleted = tags.iter().map(|(n, h)| tag(n, h)).collect();
        self
    }

    /// Answer `"METHOD path"` with a fixed response from now on
    pub fn respond(&self, route: &str, status: u16, body: &str) {
        self.state
            .lock()
            .unwrap()
            .canned
            .insert(route.to_string(), (status, body.to_string()));
    }

    pub fn fail(&self, route: &str, status: u16, body: &str) {
        self.respond(route, status, body);
    }

    pub fn go_offline(&self) {
        self.state.lock().unwrap().offline = true;
    }

    /// `"METHOD path"` of every request received, in order
    pub fn requests(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .requests
            .iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect()
    }

    pub fn count(&self, route: &str) -> usize {
        self.requests().iter().filter(|r| *r == route).count()
    }

    pub fn bodies(&self) -> Vec<serde_json::Value> {
        self.state
            .lock()
            .unwrap()
            .requests
            .iter()
            .filter_map(|r| r.body.clone())
            .collect()
    }

    fn route(state: &mut FakeState, request: &ApiRequest) -> ApiResponse {
        let segments: Vec<&str> = request.path.trim_start_matches('/').split('/').collect();
        match (request.method.as_str(), segments.as_slice()) {
            ("GET", ["tags"]) => json(200, &state.active),
            ("GET", ["tags?deleted=true"]) => json(200, &state.deleted),
            ("POST", ["tags"]) => {
                let name = request
                    .body
                    .as_ref()
                    .and_then(|b| b.get("name"))
                    .and_then(|n| n.as_str())
                    .map(str::to_string);
                match name {
                    Some(name) => {
                        state.next_hash += 1;
                        let created = tag(&name, &format!("h{}", state.next_hash));
                        state.active.push(created.clone());
                        json(201, created)
                    }
                    None => json(400, serde_json::json!({ "message": "name is required" })),
                }
            }
            ("PUT", ["tags", hash, action]) => {
                let (from, to) = match *action {
                    "delete" => (&mut state.active, &mut state.deleted),
                    "restore" => (&mut state.deleted, &mut state.active),
                    _ => return not_found(),
                };
                match from.iter().position(|t| t.hash == *hash) {
                    Some(index) => {
                        to.push(from.remove(index));
                        ApiResponse { status: 204, body: String::new() }
                    }
                    None => not_found(),
                }
            }
            _ => not_found(),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FakeBackend {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let mut state = self.state.lock().unwrap();
        if state.offline {
            return Err(ApiError::Network("Failed to fetch".into()));
        }
        state.requests.push(request.clone());

        let route = format!("{} {}", request.method, request.path);
        if let Some((status, body)) = state.canned.get(&route) {
            return Ok(ApiResponse { status: *status, body: body.clone() });
        }
        Ok(Self::route(&mut state, &request))
    }
}
