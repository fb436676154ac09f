//! Render error types.

use crate::node::NodeKind;

/// Error returned by node render functions.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A render function was handed a node of a kind it isn't bound to.
    #[error("{expected} renderer cannot render a {found} node")]
    UnexpectedNode {
        /// Kind the render function handles.
        expected: NodeKind,
        /// Kind of the node it received.
        found: NodeKind,
    },
    /// No render function is registered for a node kind.
    #[error("no renderer registered for {0} nodes")]
    NoRenderer(NodeKind),
    /// Writing to the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
