pub mod attribute_set;
pub mod migration;
pub mod reconcile;
pub mod timestamp;
