// Domain layer: the UUID value type and the well-known namespaces.

pub mod model;
pub mod namespace;
