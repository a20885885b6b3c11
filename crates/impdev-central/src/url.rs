//! URL construction helpers for the impCentral API.

use crate::models::CentralConfig;
use url::Url;

/// Append already-encoded path segments to the base URL.
fn with_path(config: &CentralConfig, path: &str) -> Url {
    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}/{path}"));
    url
}

/// `GET /devices/{id}`
pub fn build_device_url(config: &CentralConfig, device_id: &str) -> Url {
    with_path(config, &format!("devices/{}", urlencoding::encode(device_id)))
}

/// `POST|DELETE /devicegroups/{id}/relationships/devices`
///
/// `unassign_inactive` is only added to the query when set.
pub fn build_group_devices_url(
    config: &CentralConfig,
    device_group_id: &str,
    unassign_inactive: Option<bool>,
) -> Url {
    let mut url = with_path(
        config,
        &format!(
            "devicegroups/{}/relationships/devices",
            urlencoding::encode(device_group_id)
        ),
    );
    if let Some(flag) = unassign_inactive {
        url.set_query(Some(&format!("unassign_inactive={flag}")));
    }
    url
}

/// `POST /auth`
pub fn build_login_url(config: &CentralConfig) -> Url {
    with_path(config, "auth")
}

/// `POST /auth/token`
pub fn build_refresh_url(config: &CentralConfig) -> Url {
    with_path(config, "auth/token")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base: &str) -> CentralConfig {
        CentralConfig {
            base_url: Url::parse(base).unwrap(),
        }
    }

    #[test]
    fn test_device_url() {
        let url = build_device_url(&CentralConfig::default(), "abc123");
        assert_eq!(url.as_str(), "https://api.electricimp.com/v5/devices/abc123");
    }

    #[test]
    fn test_device_url_encodes_id() {
        let url = build_device_url(&CentralConfig::default(), "a b/c");
        assert_eq!(url.path(), "/v5/devices/a%20b%2Fc");
    }

    #[test]
    fn test_trailing_slash_in_base() {
        let url = build_login_url(&config("https://imp.example.com/api/v5/"));
        assert_eq!(url.as_str(), "https://imp.example.com/api/v5/auth");
    }

    #[test]
    fn test_group_devices_url() {
        let url = build_group_devices_url(&CentralConfig::default(), "dg-1", None);
        assert_eq!(
            url.as_str(),
            "https://api.electricimp.com/v5/devicegroups/dg-1/relationships/devices"
        );
        assert!(url.query().is_none());

        let url = build_group_devices_url(&CentralConfig::default(), "dg-1", Some(true));
        assert_eq!(url.query(), Some("unassign_inactive=true"));
    }

    #[test]
    fn test_refresh_url() {
        let url = build_refresh_url(&CentralConfig::default());
        assert_eq!(url.as_str(), "https://api.electricimp.com/v5/auth/token");
    }
}
