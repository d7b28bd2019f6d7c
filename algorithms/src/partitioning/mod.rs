pub mod hoare;

pub use hoare::{hoare_partition, hoare_partition_by};
