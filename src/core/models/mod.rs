//! Static model metadata: the descriptors the tester iterates over.

mod descriptor;

pub use descriptor::{ModelDescriptor, load_descriptors, select_models};

#[cfg(test)]
pub use descriptor::builtin_descriptors;
