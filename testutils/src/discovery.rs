use serde_json::json;

// Canned discovery responses covering the shapes we care about: core/legacy
// resources (cluster-scoped and namespaced), a named API group, and a custom
// resource with a short name.

pub fn api_versions() -> serde_json::Value {
    json!({
        "kind": "APIVersions",
        "versions": ["v1"],
        "serverAddressByClientCIDRs": [],
    })
}

pub fn api_groups() -> serde_json::Value {
    json!({
        "kind": "APIGroupList",
        "apiVersion": "v1",
        "groups": [
            {
                "name": "apps",
                "versions": [
                    {"groupVersion": "apps/v1", "version": "v1"},
                ],
                "preferredVersion": {"groupVersion": "apps/v1", "version": "v1"},
            },
            {
                "name": "customdomain",
                "versions": [
                    {"groupVersion": "customdomain/v1beta1", "version": "v1beta1"},
                ],
                "preferredVersion": {"groupVersion": "customdomain/v1beta1", "version": "v1beta1"},
            },
        ],
    })
}

pub fn core_v1_discovery() -> serde_json::Value {
    json!({
        "kind": "APIResourceList",
        "groupVersion": "v1",
        "resources": [
            {
                "name": "namespaces",
                "singularName": "namespace",
                "namespaced": false,
                "kind": "Namespace",
                "verbs": ["create","delete","get","list","patch","update","watch"],
                "shortNames": ["ns"],
            },
            {
                "name": "pods",
                "singularName": "pod",
                "namespaced": true,
                "kind": "Pod",
                "verbs": ["create","delete","deletecollection","get","list","patch","update","watch"],
                "shortNames": ["po"],
                "categories": ["all"],
            },
            {
                "name": "pods/status",
                "singularName": "",
                "namespaced": true,
                "kind": "Pod",
                "verbs": ["get","patch","update"],
            },
        ],
    })
}

pub fn apps_v1_discovery() -> serde_json::Value {
    json!({
        "kind": "APIResourceList",
        "apiVersion": "v1",
        "groupVersion": "apps/v1",
        "resources": [
            {
                "name": "daemonsets",
                "singularName": "daemonset",
                "namespaced": true,
                "kind": "DaemonSet",
                "verbs": ["create","delete","deletecollection","get","list","patch","update","watch"],
                "shortNames": ["ds"],
                "categories": ["all"],
            },
            {
                "name": "deployments",
                "singularName": "deployment",
                "namespaced": true,
                "kind": "Deployment",
                "verbs": ["create","delete","deletecollection","get","list","patch","update","watch"],
                "shortNames": ["deploy"],
                "categories": ["all"],
            },
            {
                "name": "deployments/status",
                "singularName": "",
                "namespaced": true,
                "kind": "Deployment",
                "verbs": ["get","patch","update"],
            },
            {
                "name": "statefulsets",
                "singularName": "statefulset",
                "namespaced": true,
                "kind": "StatefulSet",
                "verbs": ["create","delete","deletecollection","get","list","patch","update","watch"],
                "shortNames": ["sts"],
                "categories": ["all"],
            },
        ],
    })
}

pub fn customdomain_v1beta1_discovery() -> serde_json::Value {
    json!({
        "kind": "APIResourceList",
        "apiVersion": "v1",
        "groupVersion": "customdomain/v1beta1",
        "resources": [
            {
                "name": "customtypes",
                "singularName": "customtype",
                "namespaced": true,
                "kind": "CustomType",
                "verbs": ["create","delete","get","list","patch","update","watch"],
                "shortNames": ["ct"],
            },
        ],
    })
}
