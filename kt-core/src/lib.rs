pub mod errors;
pub mod k8s;
pub mod kubeconfig;
pub mod logging;

pub mod prelude {
    pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
    pub use kube::ResourceExt;

    pub use crate::errors::EmptyResult;
}
