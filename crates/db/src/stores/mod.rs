//! [`DataStore`](crate::DataStore) adapters.

mod collections;
pub mod http;
pub mod json_file;
pub mod memory;
pub mod postgres;

pub(crate) use collections::Collections;
