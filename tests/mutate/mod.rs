mod idempotence;
mod ownership_group;
mod ownership_root;
