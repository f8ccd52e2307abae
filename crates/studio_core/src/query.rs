use serde_json::{json, Value};
use url::Url;

/// A predicate for the downstream filter engine.
///
/// The JSON shape is part of the wire contract with that engine and must be
/// reproduced exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpr(Value);

impl FilterExpr {
    /// Conjunction of `serverID == server_id` and `type == kind`.
    ///
    /// `server_id` is carried verbatim as a string, not re-encoded as a
    /// number; the consuming engine expects it that way.
    pub fn source_equals(server_id: &str, kind: &str) -> Self {
        FilterExpr(json!({
            "and": [
                { "==": [{ "var": "serverID" }, server_id] },
                { "==": [{ "var": "type" }, kind] },
            ]
        }))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// One-time initialization values carried in the query string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InitParams {
    /// Frame to open on, when `frame` parsed as a non-negative integer.
    pub frame: Option<u32>,
    /// Presence-only `openGuide` flag.
    pub open_guide: bool,
    /// Filters derived from the `serverID`/`type` pair, possibly empty.
    pub filters: Vec<FilterExpr>,
}

impl InitParams {
    /// Parses the query string of `url`.
    ///
    /// Malformed or missing values degrade silently to their absent form.
    /// Only the first occurrence of each key counts.
    pub fn from_url(url: &Url) -> Self {
        let mut frame_raw: Option<String> = None;
        let mut server_id: Option<String> = None;
        let mut kind: Option<String> = None;
        let mut open_guide = false;

        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "frame" if frame_raw.is_none() => frame_raw = Some(value.into_owned()),
                "openGuide" => open_guide = true,
                "serverID" if server_id.is_none() => server_id = Some(value.into_owned()),
                "type" if kind.is_none() => kind = Some(value.into_owned()),
                _ => {}
            }
        }

        let frame = frame_raw.and_then(|raw| raw.trim().parse::<u32>().ok());

        let mut filters = Vec::new();
        if let (Some(server_id), Some(kind)) = (server_id, kind) {
            // The filter is only meaningful when serverID is a numeric id.
            if server_id.parse::<u64>().is_ok() {
                filters.push(FilterExpr::source_equals(&server_id, &kind));
            }
        }

        Self {
            frame,
            open_guide,
            filters,
        }
    }

    /// True when the query string of `url` carries at least one parameter.
    pub fn query_present(url: &Url) -> bool {
        url.query_pairs().next().is_some()
    }
}
