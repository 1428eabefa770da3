pub mod task_store;
