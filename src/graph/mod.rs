//! Graph store and render-facing views.

pub mod store;
pub mod view;

pub use store::UndirectedGraph;
pub use view::{edge_views, node_views, EdgeView, NodeView};
