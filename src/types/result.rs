//! Normalized result handed back by every operation.

use super::envelope::{Envelope, ObjectMap, ObjectRecord};
use serde_json::{Map, Value};

/// One of the caller-selectable result shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult {
    /// `array` mode with fields only: one field map per object.
    Fields(Vec<Map<String, Value>>),
    /// `array` mode with identity metadata kept.
    Records(Vec<ObjectRecord>),
    /// `object` mode: the `objects` map itself.
    Objects(ObjectMap),
    /// `all` mode: the whole envelope.
    Envelope(Envelope),
}

impl ApiResult {
    /// Number of returned objects, whatever the shape.
    pub fn len(&self) -> usize {
        match self {
            ApiResult::Fields(v) => v.len(),
            ApiResult::Records(v) => v.len(),
            ApiResult::Objects(m) => m.len(),
            ApiResult::Envelope(e) => e.objects.as_ref().map_or(0, |m| m.len()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_fields(self) -> Option<Vec<Map<String, Value>>> {
        match self {
            ApiResult::Fields(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_records(self) -> Option<Vec<ObjectRecord>> {
        match self {
            ApiResult::Records(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_objects(self) -> Option<ObjectMap> {
        match self {
            ApiResult::Objects(m) => Some(m),
            _ => None,
        }
    }

    pub fn into_envelope(self) -> Option<Envelope> {
        match self {
            ApiResult::Envelope(e) => Some(e),
            _ => None,
        }
    }

    /// Looks up a field of the first returned object.
    ///
    /// Handy for pulling the id out of a create or update result.
    pub fn first_field(&self, name: &str) -> Option<&Value> {
        match self {
            ApiResult::Fields(v) => v.first()?.get(name),
            ApiResult::Records(v) => v.first()?.field(name),
            ApiResult::Objects(m) => m.values().next()?.field(name),
            ApiResult::Envelope(e) => e.objects.as_ref()?.values().next()?.field(name),
        }
    }
}
