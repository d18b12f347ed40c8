mod discovery;
mod fake;
mod kubeconfig;
mod objs;

pub use discovery::*;
pub use fake::*;
pub use kubeconfig::*;
pub use objs::*;
