//! In-memory stand-in for an iTop `rest.php` endpoint.
//!
//! Implements just enough of the REST contract to exercise the client end to
//! end: credential checks, list_operations, and CRUD plus stimuli on a flat
//! object store. Every request is recorded for inspection.

#![allow(dead_code)]

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use itop_api_client::transport::{Transport, TransportError, TransportResponse};
use itop_api_client::{ITopClient, ITopClientBuilder};
use serde_json::{json, Map, Value};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::{Arc, Mutex};

pub const URL: &str = "http://itop.test/webservices/rest.php";
pub const USER: &str = "admin";
pub const PASSWORD: &str = "s3cret";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: HashMap<String, String>,
    pub form: HashMap<String, String>,
    pub form_keys: Vec<String>,
    pub payload: Value,
}

impl RecordedRequest {
    pub fn operation(&self) -> &str {
        self.payload["operation"].as_str().unwrap_or("")
    }
}

#[derive(Default)]
struct Store {
    next_id: i64,
    objects: BTreeMap<i64, (String, Map<String, Value>)>,
}

#[derive(Default)]
pub struct FakeITop {
    store: Mutex<Store>,
    requests: Mutex<Vec<RecordedRequest>>,
    scripted: Mutex<VecDeque<TransportResponse>>,
    deny_credentials: bool,
}

impl FakeITop {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            store: Mutex::new(Store {
                next_id: 1,
                objects: BTreeMap::new(),
            }),
            ..Default::default()
        })
    }

    /// Answers every credential check with `authorized: false`.
    pub fn denying() -> Arc<Self> {
        Arc::new(Self {
            deny_credentials: true,
            ..Default::default()
        })
    }

    pub fn seed(&self, class: &str, id: i64, fields: Value) {
        let mut store = self.store.lock().unwrap();
        let mut fields = fields.as_object().cloned().unwrap_or_default();
        fields.insert("id".into(), json!(id.to_string()));
        store.objects.insert(id, (class.to_string(), fields));
        store.next_id = store.next_id.max(id + 1);
    }

    pub fn count(&self, class: &str) -> usize {
        let store = self.store.lock().unwrap();
        store.objects.values().filter(|(c, _)| c == class).count()
    }

    /// Queue a canned response for the next call, bypassing the store.
    pub fn script(&self, response: TransportResponse) {
        self.scripted.lock().unwrap().push_back(response);
    }

    pub fn script_envelope(&self, envelope: Value) {
        self.script(TransportResponse::new(200, "OK", envelope.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().last().cloned().expect("no request recorded")
    }

    fn authenticated(&self, headers: &HashMap<String, String>, form: &HashMap<String, String>) -> bool {
        let expected = format!("Basic {}", STANDARD.encode(format!("{}:{}", USER, PASSWORD)));
        match headers.get("Authorization") {
            Some(value) => value == &expected,
            None => {
                form.get("auth_user").map(String::as_str) == Some(USER)
                    && form.get("auth_pwd").map(String::as_str) == Some(PASSWORD)
            }
        }
    }

    fn handle(&self, payload: &Value) -> Value {
        let operation = payload["operation"].as_str().unwrap_or_default();
        let class = payload["class"].as_str().unwrap_or_default().to_string();
        let output = payload["output_fields"].as_str().unwrap_or("*").to_string();

        match operation {
            "core/check_credentials" => {
                let authorized = !self.deny_credentials
                    && payload["user"] == json!(USER)
                    && payload["password"] == json!(PASSWORD);
                json!({ "code": 0, "message": "", "authorized": authorized })
            }
            "list_operations" => json!({
                "code": 0,
                "message": "Operations: 3",
                "version": "1.3",
                "operations": [
                    { "verb": "core/get", "description": "Search for objects", "extension": "CoreServices" },
                    { "verb": "core/create", "description": "Create an object", "extension": "CoreServices" },
                    { "verb": "core/delete", "description": "Delete objects", "extension": "CoreServices" }
                ]
            }),
            "core/create" => {
                let mut store = self.store.lock().unwrap();
                let id = store.next_id;
                store.next_id += 1;
                let mut fields = payload["fields"].as_object().cloned().unwrap_or_default();
                fields.insert("id".into(), json!(id.to_string()));
                let friendly = format!(
                    "{} {}",
                    fields.get("first_name").and_then(Value::as_str).unwrap_or(""),
                    fields.get("name").and_then(Value::as_str).unwrap_or("")
                );
                fields.insert("friendlyname".into(), json!(friendly.trim()));
                store.objects.insert(id, (class.clone(), fields));
                found(&store, &[id], &output, "created")
            }
            "core/get" => {
                let store = self.store.lock().unwrap();
                let ids = resolve(&store, &class, &payload["key"]);
                found(&store, &ids, &output, "")
            }
            "core/update" => {
                let mut store = self.store.lock().unwrap();
                let ids = resolve(&store, &class, &payload["key"]);
                if ids.len() != 1 {
                    return json!({ "code": 100, "message": format!("Found {} objects", ids.len()), "objects": null });
                }
                if let (Some((_, fields)), Some(updates)) =
                    (store.objects.get_mut(&ids[0]), payload["fields"].as_object())
                {
                    for (k, v) in updates {
                        fields.insert(k.clone(), v.clone());
                    }
                }
                found(&store, &ids, &output, "updated")
            }
            "core/delete" => {
                let mut store = self.store.lock().unwrap();
                let ids = resolve(&store, &class, &payload["key"]);
                let simulate = payload["simulate"].as_bool().unwrap_or(false);
                let mut body = found(&store, &ids, &output, "");
                body["message"] = if simulate {
                    json!(format!("SIMULATING: Deleted: {}", ids.len()))
                } else {
                    json!(format!("Deleted: {}", ids.len()))
                };
                if !simulate {
                    for id in &ids {
                        store.objects.remove(id);
                    }
                }
                body
            }
            "core/apply_stimulus" => {
                let stimulus = payload["stimulus"].as_str().unwrap_or_default();
                let Some(state) = stimulus.strip_prefix("ev_") else {
                    return json!({ "code": 100, "message": format!("Unknown stimulus: {}", stimulus), "objects": null });
                };
                let mut store = self.store.lock().unwrap();
                let ids = resolve(&store, &class, &payload["key"]);
                for id in &ids {
                    if let Some((_, fields)) = store.objects.get_mut(id) {
                        fields.insert("status".into(), json!(state));
                        if let Some(extra) = payload["fields"].as_object() {
                            for (k, v) in extra {
                                fields.insert(k.clone(), v.clone());
                            }
                        }
                    }
                }
                found(&store, &ids, &output, "updated")
            }
            other => json!({
                "code": 11,
                "message": format!("Unknown verb '{}' in version '1.3'", other),
            }),
        }
    }
}

fn id_of(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Resolves ids, attribute filters and `SELECT Class WHERE attr = 'value'`.
fn resolve(store: &Store, class: &str, key: &Value) -> Vec<i64> {
    let in_class = |c: &str| c == class;
    if let Some(id) = id_of(key) {
        return match store.objects.get(&id) {
            Some((c, _)) if in_class(c) => vec![id],
            _ => vec![],
        };
    }
    let filter: Map<String, Value> = match key {
        Value::Object(map) => map.clone(),
        Value::String(oql) => match parse_oql(oql) {
            Some((oql_class, attr, value)) if oql_class == class => {
                let mut m = Map::new();
                if let Some((attr, value)) = attr.zip(value) {
                    m.insert(attr, json!(value));
                }
                m
            }
            _ => return vec![],
        },
        _ => return vec![],
    };
    store
        .objects
        .iter()
        .filter(|(_, (c, fields))| {
            in_class(c) && filter.iter().all(|(k, v)| loosely_equal(fields.get(k), v))
        })
        .map(|(id, _)| *id)
        .collect()
}

fn loosely_equal(actual: Option<&Value>, expected: &Value) -> bool {
    match (actual, expected) {
        (Some(a), e) if a == e => true,
        (Some(a), e) => a.to_string().trim_matches('"') == e.to_string().trim_matches('"'),
        (None, _) => false,
    }
}

fn parse_oql(oql: &str) -> Option<(String, Option<String>, Option<String>)> {
    let rest = oql.trim().strip_prefix("SELECT ")?;
    let mut parts = rest.splitn(2, " WHERE ");
    let class = parts.next()?.trim().to_string();
    match parts.next() {
        None => Some((class, None, None)),
        Some(cond) => {
            let (attr, value) = cond.split_once('=')?;
            let value = value.trim().trim_matches('\'').to_string();
            Some((class, Some(attr.trim().to_string()), Some(value)))
        }
    }
}

fn found(store: &Store, ids: &[i64], output: &str, message: &str) -> Value {
    if ids.is_empty() {
        return json!({ "code": 0, "message": "Found: 0", "objects": null });
    }
    let wanted: Vec<&str> = output.split(',').map(str::trim).collect();
    let mut objects = Map::new();
    for id in ids {
        if let Some((class, fields)) = store.objects.get(id) {
            let fields: Map<String, Value> = if wanted.iter().all(|f| *f == "*") {
                fields.clone()
            } else {
                fields
                    .iter()
                    .filter(|(k, _)| wanted.contains(&k.as_str()))
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect()
            };
            objects.insert(
                format!("{}::{}", class, id),
                json!({
                    "code": 0,
                    "message": message,
                    "class": class,
                    "key": id.to_string(),
                    "fields": fields,
                }),
            );
        }
    }
    let summary = if message.is_empty() {
        format!("Found: {}", ids.len())
    } else {
        String::new()
    };
    json!({ "code": 0, "message": summary, "objects": objects })
}

#[async_trait]
impl Transport for FakeITop {
    async fn post(
        &self,
        url: &str,
        body: String,
        headers: &HashMap<String, String>,
    ) -> Result<TransportResponse, TransportError> {
        let pairs: Vec<(String, String)> = url::form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect();
        let form_keys = pairs.iter().map(|(k, _)| k.clone()).collect();
        let form: HashMap<String, String> = pairs.into_iter().collect();
        let payload = form
            .get("json_data")
            .and_then(|s| serde_json::from_str::<Value>(s).ok())
            .unwrap_or(Value::Null);

        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
            form: form.clone(),
            form_keys,
            payload: payload.clone(),
        });

        if let Some(canned) = self.scripted.lock().unwrap().pop_front() {
            return Ok(canned);
        }

        let envelope = if !form.contains_key("version") {
            json!({ "code": 2, "message": "Missing parameter 'version'" })
        } else if !self.authenticated(headers, &form) {
            json!({ "code": 1, "message": "Invalid login" })
        } else if payload.is_null() {
            json!({ "code": 4, "message": "Parameter json_data is not a valid JSON structure" })
        } else {
            self.handle(&payload)
        };

        Ok(TransportResponse::new(200, "OK", envelope.to_string()))
    }
}

pub fn builder(fake: &Arc<FakeITop>) -> ITopClientBuilder {
    ITopClientBuilder::new(URL, USER, PASSWORD)
        .comment("integration test")
        .transport(fake.clone())
}

pub async fn connect(fake: &Arc<FakeITop>) -> ITopClient {
    builder(fake).connect().await.expect("connect")
}
