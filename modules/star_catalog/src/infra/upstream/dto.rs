//! Wire types for the external catalog API.
//!
//! The upstream wraps listings as `{"results": [{"url": ...}]}` and
//! detail records as `{"result": {"properties": {...}}}`. Deserializing
//! into these structs is the schema validation at the boundary; a decode
//! failure becomes a typed schema-mismatch error instead of an uncaught
//! key lookup. Unknown fields are tolerated.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListEnvelope {
    pub results: Vec<ListItem>,
}

#[derive(Debug, Deserialize)]
pub struct ListItem {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct DetailEnvelope<P> {
    pub result: Detail<P>,
}

#[derive(Debug, Deserialize)]
pub struct Detail<P> {
    pub properties: P,
}

#[derive(Debug, Deserialize)]
pub struct PersonProperties {
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlanetProperties {
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<String>,
    pub terrain: Option<String>,
}
