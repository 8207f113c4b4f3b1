//! Node profile and active-profile projection

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use lnconnect_backend::log_sanitizer::mask_secret;
use lnconnect_backend::{BackendConnection, Implementation};

use super::{lenient, Settings};

/// One saved connection + credential record.
///
/// Field names are the persisted format. Fields written by other client versions are kept
/// in `extra` so a rewrite does not drop them.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "StoredNodeProfile", into = "StoredNodeProfile")]
pub struct NodeProfile {
    pub host: Option<String>,
    pub port: Option<String>,
    pub url: Option<String>,
    pub macaroon_hex: Option<String>,
    pub access_key: Option<String>,
    /// Profiles saved before this field existed, or with it empty, are lnd nodes.
    pub implementation: Implementation,
    /// Stored `implementation` value this version does not know. Written back unchanged; the
    /// profile cannot become active while it is set.
    pub unrecognized_implementation: Option<Value>,
    pub ssl_verification: Option<bool>,
    pub extra: Map<String, Value>,
}

impl NodeProfile {
    /// Whether a macaroon or access key is present.
    pub fn has_credentials(&self) -> bool {
        non_empty(self.macaroon_hex.as_deref()) || non_empty(self.access_key.as_deref())
    }

    /// Whether this client can talk to the profile's backend.
    pub fn is_supported(&self) -> bool {
        self.unrecognized_implementation.is_none()
    }
}

impl std::fmt::Debug for NodeProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeProfile")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("url", &self.url)
            .field("macaroon_hex", &self.macaroon_hex.as_deref().map(mask_secret))
            .field("access_key", &self.access_key.as_deref().map(mask_secret))
            .field("implementation", &self.implementation)
            .field("unrecognized_implementation", &self.unrecognized_implementation)
            .field("ssl_verification", &self.ssl_verification)
            .finish_non_exhaustive()
    }
}

/// Persisted shape of a [`NodeProfile`].
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredNodeProfile {
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    host: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    port: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    macaroon_hex: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    access_key: Option<String>,
    #[serde(default)]
    implementation: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ssl_verification: Option<bool>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<StoredNodeProfile> for NodeProfile {
    fn from(stored: StoredNodeProfile) -> Self {
        let (implementation, unrecognized_implementation) = match stored.implementation {
            Value::Null => (Implementation::Lnd, None),
            Value::String(ref name) if name.is_empty() => (Implementation::Lnd, None),
            raw => match raw.as_str().and_then(Implementation::from_persisted) {
                Some(known) => (known, None),
                None => (Implementation::default(), Some(raw)),
            },
        };

        Self {
            host: stored.host,
            port: stored.port,
            url: stored.url,
            macaroon_hex: stored.macaroon_hex,
            access_key: stored.access_key,
            implementation,
            unrecognized_implementation,
            ssl_verification: stored.ssl_verification,
            extra: stored.extra,
        }
    }
}

impl From<NodeProfile> for StoredNodeProfile {
    fn from(profile: NodeProfile) -> Self {
        Self {
            host: profile.host,
            port: profile.port,
            url: profile.url,
            macaroon_hex: profile.macaroon_hex,
            access_key: profile.access_key,
            implementation: profile
                .unrecognized_implementation
                .unwrap_or_else(|| Value::from(profile.implementation.as_str())),
            ssl_verification: profile.ssl_verification,
            extra: profile.extra,
        }
    }
}

/// Read view of the selected profile.
///
/// Always derived from [`Settings`] by [`ActiveProfile::project`]; never edited in place.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ActiveProfile {
    /// Position of the profile in `Settings::nodes`.
    pub index: usize,
    pub host: Option<String>,
    pub port: Option<String>,
    pub url: Option<String>,
    pub macaroon_hex: Option<String>,
    pub access_key: Option<String>,
    pub implementation: Implementation,
    pub ssl_verification: bool,
}

impl ActiveProfile {
    /// Project the profile at `selectedNode` (or 0).
    ///
    /// Out-of-range or negative selections, and profiles with an unknown implementation,
    /// yield `None`.
    pub fn project(settings: &Settings) -> Option<Self> {
        let index = settings.selected_index()?;
        let node = settings.nodes.get(index).filter(|node| node.is_supported())?;
        Some(Self {
            index,
            host: node.host.clone(),
            port: node.port.clone(),
            url: node.url.clone(),
            macaroon_hex: node.macaroon_hex.clone(),
            access_key: node.access_key.clone(),
            implementation: node.implementation,
            ssl_verification: node.ssl_verification.unwrap_or(false),
        })
    }

    /// Whether a non-empty macaroon or access key is present.
    pub fn has_credentials(&self) -> bool {
        non_empty(self.macaroon_hex.as_deref()) || non_empty(self.access_key.as_deref())
    }

    /// Connection material for the backend factory.
    pub fn connection(&self) -> BackendConnection {
        BackendConnection {
            host: self.host.clone(),
            port: self.port.clone(),
            url: self.url.clone(),
            macaroon_hex: self.macaroon_hex.clone(),
            access_key: self.access_key.clone(),
            implementation: self.implementation,
            ssl_verification: self.ssl_verification,
        }
    }
}

impl std::fmt::Debug for ActiveProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveProfile")
            .field("index", &self.index)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("url", &self.url)
            .field("macaroon_hex", &self.macaroon_hex.as_deref().map(mask_secret))
            .field("access_key", &self.access_key.as_deref().map(mask_secret))
            .field("implementation", &self.implementation)
            .field("ssl_verification", &self.ssl_verification)
            .finish()
    }
}

fn non_empty(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(host: &str) -> NodeProfile {
        NodeProfile {
            host: Some(host.to_string()),
            macaroon_hex: Some("abcd".to_string()),
            ..NodeProfile::default()
        }
    }

    #[test]
    fn projects_first_node_without_selection() {
        let settings = Settings {
            nodes: vec![node("a.example"), node("b.example")],
            ..Settings::default()
        };
        let active = ActiveProfile::project(&settings);
        assert_eq!(active.map(|a| a.host), Some(Some("a.example".to_string())));
    }

    #[test]
    fn projects_selected_node() {
        let settings = Settings {
            nodes: vec![node("a.example"), node("b.example")],
            selected_node: Some(1),
            ..Settings::default()
        };
        let active = ActiveProfile::project(&settings);
        assert!(matches!(active, Some(ActiveProfile { index: 1, .. })));
    }

    #[test]
    fn out_of_range_selection_has_no_active_profile() {
        let settings = Settings {
            nodes: vec![node("a.example")],
            selected_node: Some(5),
            ..Settings::default()
        };
        assert!(ActiveProfile::project(&settings).is_none());
        assert!(ActiveProfile::project(&Settings::default()).is_none());
    }

    #[test]
    fn ssl_verification_defaults_to_false() {
        let settings = Settings {
            nodes: vec![node("a.example")],
            ..Settings::default()
        };
        let active = ActiveProfile::project(&settings).unwrap_or_default();
        assert!(!active.ssl_verification);
        assert_eq!(active.implementation, Implementation::Lnd);
    }

    #[test]
    fn credentials_require_non_empty_values() {
        let mut profile = NodeProfile::default();
        assert!(!profile.has_credentials());

        profile.macaroon_hex = Some(String::new());
        assert!(!profile.has_credentials());

        profile.access_key = Some("key".into());
        assert!(profile.has_credentials());
    }

    #[test]
    fn missing_implementation_reads_as_lnd() {
        let profile: NodeProfile =
            serde_json::from_str(r#"{"host":"legacy.example","macaroonHex":"ff"}"#)
                .unwrap_or_default();
        assert_eq!(profile.implementation, Implementation::Lnd);
        assert_eq!(profile.host.as_deref(), Some("legacy.example"));
    }

    #[test]
    fn null_or_empty_implementation_reads_as_lnd() {
        for raw in [
            r#"{"host":"a.example","implementation":null}"#,
            r#"{"host":"a.example","implementation":""}"#,
        ] {
            let profile: NodeProfile =
                serde_json::from_str(raw).unwrap_or_else(|e| panic!("{raw}: {e}"));
            assert_eq!(profile.implementation, Implementation::Lnd);
            assert!(profile.is_supported());
        }
    }

    #[test]
    fn unknown_implementation_is_kept_but_not_projected() {
        let raw = r#"{"nodes":[{"host":"a.example","macaroonHex":"ff","implementation":"eclair"}]}"#;
        let settings = Settings::from_json(raw).unwrap_or_default();

        assert_eq!(settings.nodes.len(), 1);
        assert!(!settings.nodes[0].is_supported());
        assert!(ActiveProfile::project(&settings).is_none());

        let rewritten = settings.to_json().unwrap_or_default();
        assert!(rewritten.contains(r#""implementation":"eclair""#));
    }

    #[test]
    fn numeric_port_reads_as_text() {
        let profile: NodeProfile =
            serde_json::from_str(r#"{"host":"a.example","port":8080,"macaroonHex":"ff"}"#)
                .unwrap_or_default();
        assert_eq!(profile.port.as_deref(), Some("8080"));
    }

    #[test]
    fn negative_selection_has_no_active_profile() {
        let settings = Settings {
            nodes: vec![node("a.example")],
            selected_node: Some(-1),
            ..Settings::default()
        };
        assert!(ActiveProfile::project(&settings).is_none());
    }

    #[test]
    fn debug_masks_secrets() {
        let profile = NodeProfile {
            macaroon_hex: Some("0201036c6e6402f801030a10".into()),
            ..NodeProfile::default()
        };
        assert!(!format!("{profile:?}").contains("6c6e6402f8"));
    }
}
