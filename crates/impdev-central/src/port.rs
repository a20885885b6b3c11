//! Port trait implementation for `CentralClient`.
//!
//! Implements the core-owned `DeviceApiPort`, mapping internal errors to
//! `DevicePortError` at the boundary.

use async_trait::async_trait;
use impdev_core::{
    AccessToken, Device, DeviceApiPort, DeviceGroupId, DeviceId, DevicePortError,
    DevicePortResult,
};

use crate::client::CentralClient;
use crate::error::CentralError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// The resource a request was addressed to.
///
/// A 404 on a group membership call can mean either the group or one of
/// the devices is unknown, so only device lookups report `DeviceNotFound`.
enum Target<'a> {
    Device(&'a DeviceId),
    Membership,
}

/// Convert internal `CentralError` to core `DevicePortError`.
///
/// The service's own error text is kept in every mapped variant.
fn map_error(err: CentralError, target: &Target<'_>) -> DevicePortError {
    match (err, target) {
        (
            CentralError::Api {
                status: 401 | 403,
                message,
                ..
            },
            _,
        ) => DevicePortError::Unauthorized { message },
        (
            CentralError::Api {
                status: 404,
                message,
                ..
            },
            Target::Device(id),
        ) => DevicePortError::DeviceNotFound {
            device_id: id.to_string(),
            message,
        },
        (err @ CentralError::Api { .. }, _) => DevicePortError::Rejected {
            message: err.to_string(),
        },
        (CentralError::Network(e), _) => DevicePortError::Network {
            message: e.to_string(),
        },
        (CentralError::InvalidUrl(e), _) => DevicePortError::Configuration {
            message: e.to_string(),
        },
        (CentralError::InvalidResponse { message }, _) => {
            DevicePortError::InvalidResponse { message }
        }
        (CentralError::JsonParse(e), _) => DevicePortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> DeviceApiPort for CentralClient<B> {
    async fn get_device(
        &self,
        token: &AccessToken,
        device_id: &DeviceId,
    ) -> DevicePortResult<Device> {
        self.fetch_device(token.secret(), device_id)
            .await
            .map_err(|e| map_error(e, &Target::Device(device_id)))
    }

    async fn add_devices(
        &self,
        token: &AccessToken,
        device_group_id: &DeviceGroupId,
        device_ids: &[DeviceId],
    ) -> DevicePortResult<()> {
        self.assign_devices(token.secret(), device_group_id, device_ids)
            .await
            .map_err(|e| map_error(e, &Target::Membership))
    }

    async fn remove_devices(
        &self,
        token: &AccessToken,
        device_group_id: &DeviceGroupId,
        unassign_inactive: Option<bool>,
        device_ids: &[DeviceId],
    ) -> DevicePortResult<()> {
        self.unassign_devices(token.secret(), device_group_id, unassign_inactive, device_ids)
            .await
            .map_err(|e| map_error(e, &Target::Membership))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::fake_client;
    use crate::http::Method;
    use crate::http::testing::FakeBackend;
    use serde_json::json;

    fn api_error(status: u16, message: &str) -> CentralError {
        CentralError::Api {
            status,
            url: "https://api.electricimp.com/v5/devices/abc123".to_string(),
            message: message.to_string(),
        }
    }

    fn device_id() -> DeviceId {
        DeviceId::parse(Some("abc123")).unwrap()
    }

    #[test]
    fn test_map_error_401() {
        let id = device_id();
        match map_error(api_error(401, "Invalid access token"), &Target::Device(&id)) {
            DevicePortError::Unauthorized { message } => {
                assert_eq!(message, "Invalid access token");
            }
            other => panic!("Expected Unauthorized, got {other:?}"),
        }
    }

    #[test]
    fn test_map_error_404_keeps_service_text() {
        let id = device_id();
        match map_error(api_error(404, "Device abc123 not found"), &Target::Device(&id)) {
            DevicePortError::DeviceNotFound { device_id, message } => {
                assert_eq!(device_id, "abc123");
                assert_eq!(message, "Device abc123 not found");
            }
            other => panic!("Expected DeviceNotFound, got {other:?}"),
        }

        let err = map_error(api_error(404, "Not Found"), &Target::Membership);
        assert_eq!(err.to_string(), "Not Found (HTTP 404)");
    }

    #[test]
    fn test_map_error_keeps_service_text() {
        let err = map_error(
            api_error(400, "Device abc123 is already assigned"),
            &Target::Membership,
        );
        assert_eq!(err.to_string(), "Device abc123 is already assigned (HTTP 400)");
    }

    #[tokio::test]
    async fn test_port_add_devices() {
        let backend = FakeBackend::new().with_response(
            Method::Post,
            "/devicegroups/dg-1/relationships/devices",
            serde_json::Value::Null,
        );
        let client = fake_client(backend);
        let port: &dyn DeviceApiPort = &client;

        port.add_devices(
            &AccessToken::new("t"),
            &DeviceGroupId::new("dg-1"),
            &[device_id()],
        )
        .await
        .unwrap();

        assert_eq!(client.backend.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_port_get_device_not_found() {
        let client = fake_client(FakeBackend::new());
        let err = client
            .get_device(&AccessToken::new("t"), &device_id())
            .await
            .unwrap_err();
        assert!(matches!(err, DevicePortError::DeviceNotFound { .. }));
    }

    #[tokio::test]
    async fn test_port_add_unknown_device_reports_service_text() {
        let backend = FakeBackend::new().with_error(
            Method::Post,
            "/relationships/devices",
            404,
            "Device abc123 does not exist",
        );
        let client = fake_client(backend);

        let err = client
            .add_devices(
                &AccessToken::new("t"),
                &DeviceGroupId::new("dg-1"),
                &[device_id()],
            )
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Device abc123 does not exist"));
        assert!(!message.contains("dg-1"));
    }

    #[tokio::test]
    async fn test_port_remove_forwards_flag() {
        let backend = FakeBackend::new().with_response(
            Method::Delete,
            "/relationships/devices",
            json!(null),
        );
        let client = fake_client(backend);

        client
            .remove_devices(
                &AccessToken::new("t"),
                &DeviceGroupId::new("dg-1"),
                Some(false),
                &[device_id()],
            )
            .await
            .unwrap();

        let requests = client.backend.requests();
        assert_eq!(requests[0].url.query(), Some("unassign_inactive=false"));
    }
}
