//! The Execute trait for board operations

use crate::context::BoardContext;
use crate::error::Result;

/// A board operation: a struct whose fields are the parameters.
///
/// Operations run synchronously against the context, return a typed
/// output, and leave the board satisfying its cross-reference invariant.
pub trait Execute {
    /// What a successful execution returns
    type Output;

    /// Run the operation against the board
    fn execute(&self, ctx: &mut BoardContext) -> Result<Self::Output>;
}
