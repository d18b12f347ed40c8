mod resolver;
mod terminate;

pub use resolver::*;
pub use terminate::*;

use crate::errors::*;

err_impl! {KubernetesError,
    #[error("invalid group/version in discovery data: {0}")]
    MalformedGroupVersion(String),

    #[error("resource '{0}' has no finalizers in its metadata")]
    MissingFinalizer(String),

    #[error("unknown resource type: '{0}'")]
    UnknownResourceType(String),
}

#[cfg(test)]
pub mod tests;
