use std::collections::HashMap;

use async_trait::async_trait;
use kube::api::ApiResource;
use tracing::*;

use super::*;
use crate::prelude::*;

// One listing per group/version, in the order the apiserver returned them.
pub type DiscoverySnapshot = Vec<metav1::APIResourceList>;

// Seam between the resolver and the apiserver's discovery endpoints, so tests can
// substitute a canned catalog (and verify how often we actually hit the network).
#[async_trait]
pub trait DiscoveryProvider {
    async fn fetch(&self) -> anyhow::Result<DiscoverySnapshot>;
}

pub struct ServerDiscovery {
    client: kube::Client,
}

impl ServerDiscovery {
    pub fn new(client: kube::Client) -> ServerDiscovery {
        ServerDiscovery { client }
    }
}

#[async_trait]
impl DiscoveryProvider for ServerDiscovery {
    // Enumerate everything the apiserver serves: all core ("legacy") versions,
    // then the preferred version of each named API group.
    async fn fetch(&self) -> anyhow::Result<DiscoverySnapshot> {
        let mut snapshot = DiscoverySnapshot::new();

        let core = self.client.list_core_api_versions().await?;
        for version in &core.versions {
            snapshot.push(self.client.list_core_api_resources(version).await?);
        }

        let groups = self.client.list_api_groups().await?;
        for group in groups.groups {
            let Some(gv) = group.preferred_version.or_else(|| group.versions.into_iter().next()) else {
                continue;
            };
            snapshot.push(self.client.list_api_group_resources(&gv.group_version).await?);
        }

        Ok(snapshot)
    }
}

// The fully-resolved coordinate of a resource type; everything a dynamic client
// needs to talk to its REST endpoint.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResourceDescriptor {
    pub group: String,
    pub version: String,
    pub plural: String,
    pub singular: String,
    pub short_names: Vec<String>,
    pub kind: String,
    pub namespaced: bool,
}

impl ResourceDescriptor {
    // The discovery entry itself omits group/version; they come from the
    // enclosing groupVersion string.
    fn from_discovery(group: &str, version: &str, res: &metav1::APIResource) -> ResourceDescriptor {
        ResourceDescriptor {
            group: group.into(),
            version: version.into(),
            plural: res.name.clone(),
            singular: res.singular_name.clone(),
            short_names: res.short_names.clone().unwrap_or_default(),
            kind: res.kind.clone(),
            namespaced: res.namespaced,
        }
    }

    pub fn to_api_resource(&self) -> ApiResource {
        let api_version = if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        };
        ApiResource {
            group: self.group.clone(),
            version: self.version.clone(),
            api_version,
            kind: self.kind.clone(),
            plural: self.plural.clone(),
        }
    }
}

// Maps user-typed resource names to resolved coordinates, caching results so a batch
// terminating several resources of the same kind only pays for discovery once.
pub struct ResourceResolver {
    cache: HashMap<String, ResourceDescriptor>,
    snapshot: Option<DiscoverySnapshot>,
}

impl ResourceResolver {
    pub fn new() -> ResourceResolver {
        ResourceResolver { cache: HashMap::new(), snapshot: None }
    }

    pub async fn resolve(
        &mut self,
        lookup: &str,
        provider: &(impl DiscoveryProvider + Sync),
    ) -> anyhow::Result<ResourceDescriptor> {
        if let Some(descriptor) = self.cache.get(lookup) {
            debug!("found resource type '{lookup}' in cache");
            return Ok(descriptor.clone());
        }

        // the snapshot is fetched at most once per resolver, so a batch never
        // sees two different catalogs
        let snapshot = match &mut self.snapshot {
            Some(snapshot) => snapshot,
            snapshot => {
                debug!("fetching discovery snapshot");
                snapshot.insert(provider.fetch().await?)
            },
        };

        let descriptor = scan_snapshot(lookup, snapshot)?
            .ok_or_else(|| KubernetesError::unknown_resource_type(lookup))?;
        self.cache.insert(lookup.into(), descriptor.clone());
        Ok(descriptor)
    }
}

fn scan_snapshot(lookup: &str, snapshot: &DiscoverySnapshot) -> anyhow::Result<Option<ResourceDescriptor>> {
    for listing in snapshot {
        // a corrupt catalog entry is an unrecoverable precondition failure, not
        // something to skip over
        let (group, version) = split_group_version(&listing.group_version)?;
        for res in &listing.resources {
            if matches_lookup(lookup, res, &group) {
                return Ok(Some(ResourceDescriptor::from_discovery(&group, &version, res)));
            }
        }
    }
    Ok(None)
}

impl Default for ResourceResolver {
    fn default() -> Self {
        ResourceResolver::new()
    }
}

// A lookup key can be the plural name ("deployments"), the singular name or lower-cased
// kind ("deployment"), either of those qualified by the group ("deployments.apps"), or
// any short name ("deploy").
fn matches_lookup(lookup: &str, res: &metav1::APIResource, group: &str) -> bool {
    res.name == lookup
        || res.singular_name.to_lowercase() == lookup
        || res.kind.to_lowercase() == lookup
        || format!("{}.{group}", res.name) == lookup
        || format!("{}.{group}", res.singular_name) == lookup
        || res.short_names.iter().flatten().any(|sn| sn == lookup)
}

fn split_group_version(gv: &str) -> anyhow::Result<(String, String)> {
    let parts: Vec<_> = gv.split('/').collect();
    match parts[..] {
        [version] => Ok((String::new(), version.into())),
        [group, version] => Ok((group.into(), version.into())),
        _ => Err(KubernetesError::malformed_group_version(gv)),
    }
}
