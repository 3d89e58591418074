pub mod catalog;
pub mod identity;
pub mod locale;
pub mod progress;
pub mod registry;
pub mod remote;
pub mod repo;
pub mod resources;
pub mod store;
pub mod sync;

pub use catalog::RepoCatalog;
pub use identity::{ParseIdentityError, RepoIdentity};
pub use locale::{Locale, LocaleError};
pub use progress::{CancelToken, ProgressHandler, Throttle};
pub use registry::LocaleRegistry;
pub use remote::{FileFetcher, RemoteError, RemoteFile, RemoteIndex};
pub use repo::StringsRepo;
pub use resources::{ResourceFile, ResourceFormat, XmlStrings};
pub use store::LocaleFileStore;
pub use sync::{ScanItem, SyncFailure, SyncReport};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
