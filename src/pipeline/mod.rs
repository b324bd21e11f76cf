//! The two end-to-end pipelines.
//!
//! Both are the same shape at different granularities:
//!
//! - [`split_data`]: discover -> validate -> partition -> copy files
//!   into `imagesTr/ imagesTs/ labelsTr/ labelsTs/`.
//! - [`create_dataset`]: discover -> validate -> holdout-split ->
//!   build and durably write `dataset.json`.
//!
//! Everything runs single-threaded and synchronous; the first error
//! aborts the invocation. Already-copied files are not rolled back.

pub mod create_dataset;
pub mod split_data;
