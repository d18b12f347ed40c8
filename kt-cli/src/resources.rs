use kt_core::errors::*;
use kt_core::k8s::ResourceMetadata;

// Expand the positional args into the resource list. If the first arg contains no
// '/', it names a type and every following arg is a resource of that type;
// otherwise every arg must be a TYPE/NAME pair.
pub fn expand(args: &[String], namespace: &str) -> anyhow::Result<Vec<ResourceMetadata>> {
    let mut resources = Vec::with_capacity(args.len());

    match args.split_first() {
        Some((kind, names)) if !kind.contains('/') => {
            if names.is_empty() {
                bail!("no resource name given for type: {kind}");
            }
            for name in names {
                resources.push(ResourceMetadata {
                    kind: kind.clone(),
                    namespace: namespace.into(),
                    name: name.clone(),
                });
            }
        },
        _ => {
            for arg in args {
                let Some((kind, name)) = arg.split_once('/') else {
                    bail!("invalid resource name: {arg}");
                };
                if kind.is_empty() || name.is_empty() || name.contains('/') {
                    bail!("invalid resource name: {arg}");
                }
                resources.push(ResourceMetadata {
                    kind: kind.into(),
                    namespace: namespace.into(),
                    name: name.into(),
                });
            }
        },
    }

    Ok(resources)
}
