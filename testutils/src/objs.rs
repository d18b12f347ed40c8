use serde_json::json;

// Object fixtures as raw JSON, the way the apiserver would hand them back.
// An empty finalizer list means the field is omitted entirely.

pub fn test_pod(namespace: &str, name: &str, finalizers: &[&str]) -> serde_json::Value {
    test_obj("v1", "Pod", Some(namespace), name, finalizers)
}

pub fn test_deployment(namespace: &str, name: &str, finalizers: &[&str]) -> serde_json::Value {
    test_obj("apps/v1", "Deployment", Some(namespace), name, finalizers)
}

pub fn test_namespace(name: &str, finalizers: &[&str]) -> serde_json::Value {
    test_obj("v1", "Namespace", None, name, finalizers)
}

fn test_obj(
    api_version: &str,
    kind: &str,
    namespace: Option<&str>,
    name: &str,
    finalizers: &[&str],
) -> serde_json::Value {
    let mut metadata = json!({"name": name});
    if let Some(ns) = namespace {
        metadata["namespace"] = json!(ns);
    }
    if !finalizers.is_empty() {
        metadata["finalizers"] = json!(finalizers);
    }

    json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": metadata,
        "spec": {},
        "status": {"phase": "Terminating"},
    })
}
