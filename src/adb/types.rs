// Core device-listing types shared by the orchestration steps.
use serde::Serialize;

/// Wireless endpoint parsed out of an `ip:port` device id.
#[derive(Debug, PartialEq, Serialize, Clone)]
pub struct Endpoint {
    pub ip: String,
    pub port: String,
}

impl Endpoint {
    pub fn address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

/// One line of `adb devices -l` output, parsed.
///
/// Built fresh from live output on every run and never persisted; `id` is
/// unique within a single listing.
#[derive(Debug, PartialEq, Serialize, Clone)]
pub struct DeviceRecord {
    /// Serial number, or `ip:port` for wireless-debugging devices.
    pub id: String,
    /// Authorization state as reported by adb: `device`, `unauthorized`,
    /// `offline`, ...
    pub state: String,
    /// Some iff `id` is syntactically an IPv4 address plus port.
    pub endpoint: Option<Endpoint>,
    /// Trailing metadata from the listing line (product, model, transport_id).
    pub properties: String,
}

impl DeviceRecord {
    /// Parses one non-header listing line: `<id> <state> <properties...>`.
    /// Lines with fewer than two tokens don't describe a device.
    pub fn from_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let id = parts.next()?.to_string();
        let state = parts.next()?.to_string();
        let properties = parts.collect::<Vec<_>>().join(" ");
        let endpoint = parse_endpoint(&id);
        Some(DeviceRecord {
            id,
            state,
            endpoint,
            properties,
        })
    }

    pub fn is_wireless(&self) -> bool {
        self.endpoint.is_some()
    }

    pub fn is_authorized(&self) -> bool {
        self.state == "device"
    }
}

/// Splits `id` into ip and port iff it has the shape `a.b.c.d:port`, with the
/// split on the LAST colon. Purely syntactic: octets are 1-3 digits each, no
/// range check, matching how the listing id is formed.
fn parse_endpoint(id: &str) -> Option<Endpoint> {
    let (ip, port) = id.rsplit_once(':')?;
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let octets: Vec<&str> = ip.split('.').collect();
    if octets.len() != 4 {
        return None;
    }
    for octet in octets {
        if octet.is_empty() || octet.len() > 3 || !octet.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }
    Some(Endpoint {
        ip: ip.to_string(),
        port: port.to_string(),
    })
}
