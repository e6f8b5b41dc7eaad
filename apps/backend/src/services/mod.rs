//! Entity lifecycle orchestration.
//!
//! Free functions over a connection or the request's transaction. Mutations
//! are called inside `db::txn::with_txn`, so any error rolls back every write
//! made by the same call.

pub mod games;
pub mod guesses;
pub mod phrases;
pub mod rounds;
pub mod teams;
