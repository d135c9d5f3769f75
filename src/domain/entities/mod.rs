pub mod commodity;
pub mod snapshot;
