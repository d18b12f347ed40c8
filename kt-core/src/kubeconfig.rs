use std::env;
use std::path::{
    Path,
    PathBuf,
};

use kube::config::{
    KubeConfigOptions,
    Kubeconfig,
};
use tracing::*;

use crate::errors::*;

err_impl! {ConfigError,
    #[error("error while locating kubeconfig: {0}")]
    Location(String),
}

// Locate the kubeconfig to use, by order of precedence:
// - the --kubeconfig CLI argument, if one was given
// - the $KUBECONFIG file, if the env var is set
// - <user_home_dir>/.kube/config
pub fn locate(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = env::var_os("KUBECONFIG").filter(|p| !p.is_empty()) {
        return Ok(path.into());
    }
    match dirs::home_dir() {
        Some(home) => Ok(home.join(".kube").join("config")),
        None => Err(ConfigError::location("user home directory not found")),
    }
}

// Build a kube client from the kubeconfig at the given path; the active context's
// namespace becomes the client's default namespace.
pub async fn new_client(path: &Path) -> anyhow::Result<kube::Client> {
    let kubeconfig = Kubeconfig::read_from(path)
        .map_err(|err| ConfigError::location(&format!("{}: {err}", path.display())))?;
    debug!("using kubeconfig at {}", path.display());

    let config = kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default()).await?;
    Ok(kube::Client::try_from(config)?)
}
