//! Device and device group endpoints.

use impdev_core::{Device, DeviceGroupId, DeviceId};
use serde_json::Value;

use super::CentralClient;
use crate::error::CentralResult;
use crate::http::{ApiRequest, HttpBackend, Method};
use crate::models::{DeviceDocument, RelationshipBody, ResourceIdentifier};
use crate::url::{build_device_url, build_group_devices_url};

impl<B: HttpBackend> CentralClient<B> {
    /// Fetch a device.
    pub(crate) async fn fetch_device(
        &self,
        token: &str,
        device_id: &DeviceId,
    ) -> CentralResult<Device> {
        let url = build_device_url(&self.config, device_id.as_str());
        let json = self
            .backend
            .send(ApiRequest::new(Method::Get, url).with_bearer(token))
            .await?;
        let doc: DeviceDocument = serde_json::from_value(json)?;
        Ok(to_device(doc, device_id))
    }

    /// Assign devices to a device group.
    pub(crate) async fn assign_devices(
        &self,
        token: &str,
        device_group_id: &DeviceGroupId,
        device_ids: &[DeviceId],
    ) -> CentralResult<()> {
        let url = build_group_devices_url(&self.config, device_group_id.as_str(), None);
        let request = ApiRequest::new(Method::Post, url)
            .with_bearer(token)
            .with_body(relationship_body(device_ids)?);
        self.backend.send(request).await?;
        Ok(())
    }

    /// Unassign devices from a device group.
    pub(crate) async fn unassign_devices(
        &self,
        token: &str,
        device_group_id: &DeviceGroupId,
        unassign_inactive: Option<bool>,
        device_ids: &[DeviceId],
    ) -> CentralResult<()> {
        let url =
            build_group_devices_url(&self.config, device_group_id.as_str(), unassign_inactive);
        let request = ApiRequest::new(Method::Delete, url)
            .with_bearer(token)
            .with_body(relationship_body(device_ids)?);
        self.backend.send(request).await?;
        Ok(())
    }
}

fn relationship_body(device_ids: &[DeviceId]) -> CentralResult<Value> {
    let body = RelationshipBody {
        data: device_ids
            .iter()
            .map(|id| ResourceIdentifier::device(id.as_str()))
            .collect(),
    };
    Ok(serde_json::to_value(body)?)
}

/// Convert the API document into the domain device.
///
/// The requested ID is kept when the service echoes an empty one.
fn to_device(doc: DeviceDocument, requested_id: &DeviceId) -> Device {
    let resource = doc.data;
    let id = DeviceId::parse(Some(&resource.id)).unwrap_or_else(|| requested_id.clone());

    Device {
        id,
        name: resource.attributes.name,
        agent_id: resource.attributes.agent_id,
        agent_url: resource.attributes.agent_url.filter(|url| !url.is_empty()),
        device_group_id: resource
            .relationships
            .devicegroup
            .and_then(|rel| rel.data)
            .map(|group| DeviceGroupId::new(group.id)),
    }
}
