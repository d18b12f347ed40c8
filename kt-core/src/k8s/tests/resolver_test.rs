use async_trait::async_trait;
use mockall::mock;
use serde_json::json;

use super::*;

mock! {
    pub Discovery {}

    #[async_trait]
    impl DiscoveryProvider for Discovery {
        async fn fetch(&self) -> anyhow::Result<DiscoverySnapshot>;
    }
}

#[fixture]
fn snapshot() -> DiscoverySnapshot {
    vec![
        serde_json::from_value(core_v1_discovery()).unwrap(),
        serde_json::from_value(apps_v1_discovery()).unwrap(),
        serde_json::from_value(customdomain_v1beta1_discovery()).unwrap(),
    ]
}

fn canned_provider(snapshot: DiscoverySnapshot) -> MockDiscovery {
    let mut provider = MockDiscovery::new();
    provider.expect_fetch().returning(move || Ok(snapshot.clone()));
    provider
}

fn customtype_descriptor() -> ResourceDescriptor {
    ResourceDescriptor {
        group: "customdomain".into(),
        version: "v1beta1".into(),
        plural: "customtypes".into(),
        singular: "customtype".into(),
        short_names: vec!["ct".into()],
        kind: "CustomType".into(),
        namespaced: true,
    }
}

#[rstest]
#[case::plural("customtypes")]
#[case::singular("customtype")]
#[case::qualified_plural("customtypes.customdomain")]
#[case::qualified_singular("customtype.customdomain")]
#[case::short_name("ct")]
#[traced_test]
#[tokio::test]
async fn test_resolve_custom_resource_aliases(snapshot: DiscoverySnapshot, #[case] lookup: &str) {
    let provider = canned_provider(snapshot);
    let mut resolver = ResourceResolver::new();

    let descriptor = resolver.resolve(lookup, &provider).await.unwrap();

    assert_eq!(descriptor, customtype_descriptor());
}

#[rstest]
#[case::plural("namespaces")]
#[case::short_name("ns")]
#[traced_test]
#[tokio::test]
async fn test_resolve_cluster_scoped_resource(snapshot: DiscoverySnapshot, #[case] lookup: &str) {
    let provider = canned_provider(snapshot);
    let mut resolver = ResourceResolver::new();

    let descriptor = resolver.resolve(lookup, &provider).await.unwrap();

    assert_eq!(descriptor, ResourceDescriptor {
        group: "".into(),
        version: "v1".into(),
        plural: "namespaces".into(),
        singular: "namespace".into(),
        short_names: vec!["ns".into()],
        kind: "Namespace".into(),
        namespaced: false,
    });
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_resolve_by_lowercased_kind(snapshot: DiscoverySnapshot) {
    let provider = canned_provider(snapshot);
    let mut resolver = ResourceResolver::new();

    let descriptor = resolver.resolve("deployment", &provider).await.unwrap();

    assert_eq!(descriptor.group, "apps");
    assert_eq!(descriptor.version, "v1");
    assert_eq!(descriptor.plural, "deployments");
    assert!(descriptor.namespaced);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_resolve_unknown_resource_type(snapshot: DiscoverySnapshot) {
    let provider = canned_provider(snapshot);
    let mut resolver = ResourceResolver::new();

    let err = resolver.resolve("unknown", &provider).await.unwrap_err();

    assert_eq!(err.to_string(), "unknown resource type: 'unknown'");
    assert!(matches!(
        err.downcast_ref::<KubernetesError>(),
        Some(KubernetesError::UnknownResourceType(lookup)) if lookup == "unknown"
    ));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_resolve_hits_cache_on_second_lookup(snapshot: DiscoverySnapshot) {
    let mut provider = MockDiscovery::new();
    provider.expect_fetch().times(1).returning(move || Ok(snapshot.clone()));
    let mut resolver = ResourceResolver::new();

    let first = resolver.resolve("pods", &provider).await.unwrap();
    let second = resolver.resolve("pods", &provider).await.unwrap();

    assert_eq!(first, second);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_resolve_shares_snapshot_across_lookups(snapshot: DiscoverySnapshot) {
    let mut provider = MockDiscovery::new();
    provider.expect_fetch().times(1).returning(move || Ok(snapshot.clone()));
    let mut resolver = ResourceResolver::new();

    let pods = resolver.resolve("pods", &provider).await.unwrap();
    let deploys = resolver.resolve("deploy", &provider).await.unwrap();

    assert_eq!(pods.kind, "Pod");
    assert_eq!(deploys.kind, "Deployment");
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_resolve_aborts_on_malformed_group_version() {
    let corrupt: metav1::APIResourceList = serde_json::from_value(json!({
        "kind": "APIResourceList",
        "groupVersion": "apps/v1/oops",
        "resources": [],
    }))
    .unwrap();
    let catalog = vec![corrupt, serde_json::from_value(core_v1_discovery()).unwrap()];
    let provider = canned_provider(catalog);
    let mut resolver = ResourceResolver::new();

    // pods would match in the second listing, but a corrupt catalog aborts the
    // whole resolution
    let err = resolver.resolve("pods", &provider).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<KubernetesError>(),
        Some(KubernetesError::MalformedGroupVersion(gv)) if gv == "apps/v1/oops"
    ));
}
