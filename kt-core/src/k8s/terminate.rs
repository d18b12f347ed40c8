use kube::api::DynamicObject;
use tracing::*;

use super::*;
use crate::prelude::*;

// The resource a caller wants terminated; an empty namespace means "use the
// kubeconfig context's default".
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResourceMetadata {
    pub kind: String,
    pub namespace: String,
    pub name: String,
}

// Terminate each of the given resources in order: remove all pending finalizers
// and then delete the resource. The first failure aborts the whole batch;
// resources terminated before that point stay terminated.
pub async fn terminate(resources: &[ResourceMetadata], client: kube::Client) -> EmptyResult {
    let discovery = ServerDiscovery::new(client.clone());
    let mut resolver = ResourceResolver::new();

    for m in resources {
        debug!("loading API resource for '{}'", m.kind);
        let descriptor = resolver.resolve(&m.kind, &discovery).await?;

        let api = scoped_api(client.clone(), &descriptor, &m.namespace);
        debug!("loading resource '{}/{}' in namespace '{}'", m.kind, m.name, m.namespace);
        let mut obj = api.get(&m.name).await?;

        if clear_finalizers(&mut obj)? {
            debug!("updating '{}/{}'", m.kind, m.name);
            api.replace(&m.name, &Default::default(), &obj).await?;
        }

        debug!("deleting '{}/{}'", m.kind, m.name);
        match api.delete(&m.name, &Default::default()).await {
            // clearing the finalizers may already have let the apiserver's garbage
            // collector finish the deletion before this call lands
            Err(kube::Error::Api(resp)) if resp.code == 404 => (),
            res => {
                res?;
            },
        }

        println!("{} \"{}\" terminated", m.kind, m.name);
    }

    Ok(())
}

fn scoped_api(client: kube::Client, descriptor: &ResourceDescriptor, namespace: &str) -> kube::Api<DynamicObject> {
    let ar = descriptor.to_api_resource();
    if !descriptor.namespaced {
        kube::Api::all_with(client, &ar)
    } else if !namespace.is_empty() {
        kube::Api::namespaced_with(client, namespace, &ar)
    } else {
        kube::Api::default_namespaced_with(client, &ar)
    }
}

fn check_finalizers(obj: &DynamicObject) -> EmptyResult {
    match &obj.metadata.finalizers {
        Some(finalizers) if !finalizers.is_empty() => Ok(()),
        _ => Err(KubernetesError::missing_finalizer(&obj.name_any())),
    }
}

// Returns whether the object was mutated; an object with no pending finalizers is
// left untouched, since nothing is blocking its deletion.
pub fn clear_finalizers(obj: &mut DynamicObject) -> anyhow::Result<bool> {
    if let Err(err) = check_finalizers(obj) {
        return match err.downcast_ref::<KubernetesError>() {
            Some(KubernetesError::MissingFinalizer(_)) => Ok(false),
            _ => Err(err),
        };
    }

    // the field must stay present (as an empty list) so the update overwrites the
    // server-side value instead of leaving it alone
    obj.metadata.finalizers = Some(vec![]);
    Ok(true)
}
