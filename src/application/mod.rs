pub mod dispatch;
pub mod lookup;
pub mod replies;
pub mod snapshot_cache;
