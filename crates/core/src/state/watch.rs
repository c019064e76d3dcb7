use parking_lot::Mutex;
use std::sync::Arc;

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Callbacks interested in a value's changes.
///
/// Callbacks are invoked after the owner has released its own lock, so a
/// listener may freely read back the value it was notified about.
pub struct Listeners<T> {
    inner: Mutex<Vec<Listener<T>>>,
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
        }
    }

    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) {
        self.inner.lock().push(Arc::new(f));
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn notify(&self, value: &T) {
        let listeners: Vec<Listener<T>> = self.inner.lock().clone();
        for listener in listeners {
            listener(value);
        }
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

struct Slot<T> {
    value: T,
    version: u64,
}

/// An observable value with a change counter.
///
/// `replace` stores and notifies unconditionally (a new input event even
/// when equal to the previous one); `set` only when the value differs.
pub struct Watch<T> {
    slot: Mutex<Slot<T>>,
    listeners: Listeners<T>,
}

impl<T: Clone> Watch<T> {
    pub fn new(value: T) -> Self {
        Self {
            slot: Mutex::new(Slot { value, version: 0 }),
            listeners: Listeners::new(),
        }
    }

    pub fn get(&self) -> T {
        self.slot.lock().value.clone()
    }

    /// Number of accepted updates so far.
    pub fn version(&self) -> u64 {
        self.slot.lock().version
    }

    /// Store `value` and notify. Returns the new version.
    pub fn replace(&self, value: T) -> u64 {
        let version = {
            let mut slot = self.slot.lock();
            slot.value = value.clone();
            slot.version += 1;
            slot.version
        };
        self.listeners.notify(&value);
        version
    }

    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) {
        self.listeners.subscribe(f);
    }
}

impl<T: Clone + PartialEq> Watch<T> {
    /// Store and notify only if `value` differs. Returns whether it changed.
    pub fn set(&self, value: T) -> bool {
        {
            let mut slot = self.slot.lock();
            if slot.value == value {
                return false;
            }
            slot.value = value.clone();
            slot.version += 1;
        }
        self.listeners.notify(&value);
        true
    }
}

impl<T: Clone + Default> Default for Watch<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
