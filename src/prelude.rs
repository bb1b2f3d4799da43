pub use crate::cli::{command, run_app};
pub use crate::domain::contact::{self, Contact};
pub use crate::errors::AppError;
pub use crate::store::{Bucket, BucketIter, ChainEntry, ContactStore};
