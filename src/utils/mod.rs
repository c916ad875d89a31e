//! Host collaborators: file access, module path resolution and the runtime loader

pub mod fs;
pub mod node_loader;
pub mod path_resolver;

pub use fs::{DiskFileSystem, FileSystem};
pub use node_loader::{ModuleLoader, NodeLoader};
pub use path_resolver::{ModuleResolver, NodeResolver, ResolverOptions};
