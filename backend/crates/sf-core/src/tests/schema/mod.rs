mod reconcile;
mod timestamp;
