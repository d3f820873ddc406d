//! A value that is computed the first time it is asked for and
//! remembered afterwards.

use once_cell::unsync::OnceCell;
use std::fmt;

/// Holds an initializer until the value is forced, then holds the
/// value.  There is no implicit conversion to `T`; call
/// [`Lazy::force`].
pub struct Lazy<T, F = fn() -> T> {
    init: F,
    value: OnceCell<T>,
}

impl<T, F: Fn() -> T> Lazy<T, F> {
    /// Wrap `init` without running it.
    pub fn new(init: F) -> Self {
        Lazy {
            init,
            value: OnceCell::new(),
        }
    }

    /// The value, computing it on the first call only.
    pub fn force(&self) -> &T {
        self.value.get_or_init(|| (self.init)())
    }

    /// The value if it has already been forced.
    pub fn get(&self) -> Option<&T> {
        self.value.get()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.value.get() {
            Some(value) => f.debug_tuple("Lazy").field(value).finish(),
            None => f.write_str("Lazy(<unforced>)"),
        }
    }
}
