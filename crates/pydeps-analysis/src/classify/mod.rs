//! Standard-library vs. custom classification of import roots.

pub mod classifier;
pub mod cleanup;
pub mod signals;
pub mod stdlib;

pub use classifier::{ClassifiedRoot, ModuleClassifier, ModuleClassify};
pub use cleanup::{module_name_cleanup, remove_keywords, remove_renamed_imports, root_cleanup};
pub use signals::{
    AllowList, CachedSignal, DistributionMetadata, ImportableNamespace, StandardLibrarySignal,
};
