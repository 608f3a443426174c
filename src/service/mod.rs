//! Create, read, update and delete entry points for the web layer.
//!
//! Every operation is generic over [`ConnectionTrait`](sea_orm::ConnectionTrait),
//! so it runs equally on a pooled connection or inside a caller's transaction.

mod mutation;
mod query;

pub use mutation::*;
pub use query::*;
