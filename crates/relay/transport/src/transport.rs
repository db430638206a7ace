//! Domain-facing read accessors over one Transport payload.

use relay_payload::{get_path, Payload, PayloadValue};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::TransportError;
use crate::file::File;

/// Read-only view over the per-request Transport mapping.
///
/// Created once per request/response cycle and discarded when that
/// cycle completes. Contains no interior mutability: every accessor is
/// a pure read, so a Transport may be shared freely across threads.
#[derive(Clone, Debug)]
pub struct Transport {
    payload: Payload,
}

/// Fresh empty mapping, constructed per call so no two callers ever
/// share a default.
fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// An unset or empty-string filter key counts as "not given".
fn given(key: Option<&str>) -> Option<&str> {
    key.filter(|key| !key.is_empty())
}

impl Transport {
    /// Wrap a raw transport mapping received from the lower transport.
    pub fn new(raw: PayloadValue) -> Self {
        Self {
            payload: Payload::new(raw),
        }
    }

    /// The request ID, when the gateway recorded one.
    pub fn request_id(&self) -> Option<&str> {
        self.payload.get_path("meta/id").and_then(Value::as_str)
    }

    /// The request timestamp, when the gateway recorded one.
    pub fn request_timestamp(&self) -> Option<&str> {
        self.payload
            .get_path("meta/datetime")
            .and_then(Value::as_str)
    }

    /// Origin service of the request as `[name, version]`.
    pub fn origin_service(&self) -> Vec<String> {
        self.payload
            .get_path("meta/origin")
            .and_then(Value::as_array)
            .map(|origin| {
                origin
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// A userland property by name.
    ///
    /// The default must be a string payload value; anything else is a
    /// contract violation surfaced immediately. A property that is
    /// present but not a string also resolves to the default.
    pub fn property(&self, name: &str, default: PayloadValue) -> Result<String, TransportError> {
        let Some(fallback) = default.as_str() else {
            return Err(TransportError::NonStringPropertyDefault);
        };
        let path = format!("meta/properties/{name}");
        Ok(self
            .payload
            .get_path(&path)
            .and_then(Value::as_str)
            .unwrap_or(fallback)
            .to_owned())
    }

    /// All userland properties.
    pub fn properties(&self) -> Map<String, Value> {
        self.payload
            .get_path("meta/properties")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default()
    }

    /// Whether a download has been registered for the response.
    pub fn has_download(&self) -> bool {
        self.payload.path_exists("body")
    }

    /// The registered download as a [`File`] handle, if any.
    pub fn download(&self) -> Option<File> {
        self.payload.get_path("body").map(File::from_payload)
    }

    /// Shared drill-down: descend one mapping level per given filter
    /// key. An unset or empty key stops the descent and the current
    /// value is returned as-is; later keys are then ignored even when
    /// supplied. A missing level substitutes an empty mapping.
    fn drill_down(&self, root: &str, keys: &[Option<&str>]) -> Value {
        let mut value = self.payload.get(root, empty_object());
        for key in keys {
            let Some(key) = given(*key) else {
                break;
            };
            value = value
                .as_object()
                .and_then(|level| level.get(key))
                .cloned()
                .unwrap_or_else(empty_object);
        }
        value
    }

    /// Data stored in the Transport by each service, optionally
    /// narrowed by gateway address, service name, version, and action.
    pub fn data(
        &self,
        address: Option<&str>,
        service: Option<&str>,
        version: Option<&str>,
        action: Option<&str>,
    ) -> Value {
        self.drill_down("data", &[address, service, version, action])
    }

    /// Relations registered between entities, optionally narrowed by
    /// gateway address and service name.
    pub fn relations(&self, address: Option<&str>, service: Option<&str>) -> Value {
        self.drill_down("relations", &[address, service])
    }

    /// Links registered by services.
    ///
    /// Every descent step looks up by the service name, never by the
    /// gateway address: with only an address given the lookup key is
    /// absent and the result collapses to an empty mapping. Existing
    /// SDK consumers depend on this exact shape, so it is kept as-is.
    pub fn links(&self, address: Option<&str>, service: Option<&str>) -> Value {
        let mut links = self.payload.get("links", empty_object());
        for key in [address, service] {
            if given(key).is_none() {
                break;
            }
            links = given(service)
                .and_then(|service| {
                    links
                        .as_object()
                        .and_then(|level| level.get(service))
                        .cloned()
                })
                .unwrap_or_else(empty_object);
        }
        links
    }

    /// Service errors registered in the Transport, optionally narrowed
    /// by gateway address and service name.
    pub fn errors(&self, address: Option<&str>, service: Option<&str>) -> Value {
        self.drill_down("errors", &[address, service])
    }

    /// Transactions registered by services. By the time a worker reads
    /// these, the gateway has already executed them.
    pub fn transactions(&self, service: Option<&str>) -> Value {
        let transactions = self.payload.get("transactions", empty_object());
        match given(service) {
            Some(service) => transactions
                .as_object()
                .and_then(|level| level.get(service))
                .cloned()
                .unwrap_or_else(empty_object),
            None => transactions,
        }
    }

    /// Inter-service calls recorded in the Transport.
    ///
    /// Without filters, the full `service -> version -> [call]`
    /// mapping. With only a service name, that service's sub-mapping
    /// keyed under its name. With a gateway address, only calls whose
    /// `gateway` field equals the address are kept; when the address
    /// matched no call anywhere, the result is an empty mapping rather
    /// than a structure of empty lists.
    pub fn calls(&self, address: Option<&str>, service: Option<&str>) -> Value {
        let service = given(service);
        if let Some(address) = given(address) {
            return self.calls_from_gateway(address, service);
        }
        if let Some(service) = service {
            let mut result = Map::new();
            result.insert(
                service.to_owned(),
                self.payload.get(&format!("calls/{service}"), empty_object()),
            );
            return Value::Object(result);
        }
        self.payload.get("calls", empty_object())
    }

    fn calls_from_gateway(&self, address: &str, service: Option<&str>) -> Value {
        let mut matched = false;
        let mut result = Map::new();
        let calls = self.payload.get("calls", empty_object());
        if let Some(services) = calls.as_object() {
            for (name, versions) in services {
                if service.is_some_and(|service| service != name) {
                    continue;
                }
                let mut filtered = Map::new();
                if let Some(versions) = versions.as_object() {
                    for (version, records) in versions {
                        let kept: Vec<Value> = records
                            .as_array()
                            .map(|records| {
                                records
                                    .iter()
                                    .filter(|record| {
                                        get_path(record, "gateway").and_then(Value::as_str)
                                            == Some(address)
                                    })
                                    .cloned()
                                    .collect()
                            })
                            .unwrap_or_default();
                        if !kept.is_empty() {
                            matched = true;
                        }
                        filtered.insert(version.clone(), Value::Array(kept));
                    }
                }
                result.insert(name.clone(), Value::Object(filtered));
            }
        }
        debug!(address, matched, "filtered transport calls by gateway");
        if matched {
            Value::Object(result)
        } else {
            empty_object()
        }
    }
}
