// A minimal kubeconfig pointing at a test server, with "default" as the
// context namespace.
pub fn kubeconfig_yaml(server_url: &str) -> String {
    format!(
        r#"apiVersion: v1
kind: Config
clusters:
- cluster:
    server: {server_url}
  name: fake-cluster
contexts:
- context:
    cluster: fake-cluster
    namespace: default
    user: fake-user
  name: fake-context
current-context: fake-context
users:
- name: fake-user
  user:
    token: aaaa.bbbb.cccc
"#
    )
}
