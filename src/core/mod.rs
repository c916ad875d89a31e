//! Export discovery: traversal of the re-export graph, the runtime fallback
//! and final assembly

pub mod assembler;
pub mod batch;
pub mod fallback;
pub mod resolver;
pub mod traversal;

pub use assembler::assemble;
pub use batch::resolve_batch;
pub use fallback::FallbackPolicy;
pub use resolver::{resolve_exports, ExportResolver};
pub use traversal::TraversalEngine;
