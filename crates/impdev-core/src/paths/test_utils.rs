//! Scoped `IMPDEV_DATA_DIR` override for tests.

use std::env;
use std::ffi::OsString;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::platform::DATA_DIR_ENV;

/// Serializes every test that touches the process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Points `IMPDEV_DATA_DIR` at a directory until dropped.
///
/// Holds the environment lock for its whole lifetime, so overrides never
/// overlap. The previous value is put back before the lock is released.
pub struct DataDirOverride {
    previous: Option<OsString>,
    _lock: MutexGuard<'static, ()>,
}

impl DataDirOverride {
    #[allow(unsafe_code)]
    pub fn set(dir: &Path) -> Self {
        // A test that panicked while holding the lock has already restored
        // the variable in its own drop.
        let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = env::var_os(DATA_DIR_ENV);
        // SAFETY: writers are serialized by ENV_LOCK.
        unsafe { env::set_var(DATA_DIR_ENV, dir) };
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for DataDirOverride {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: the lock is still held; fields drop after this body.
        match self.previous.take() {
            Some(value) => unsafe { env::set_var(DATA_DIR_ENV, value) },
            None => unsafe { env::remove_var(DATA_DIR_ENV) },
        }
    }
}

