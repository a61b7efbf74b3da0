/// A guard that runs a cleanup function when dropped.
///
/// `main` uses it to restore the terminal (raw mode, alternate screen,
/// bracketed paste) on normal exit, on `?` early returns, and while unwinding
/// from a panic.
///
/// # Examples
///
/// ```
/// use phishcheck::utils::context::Context;
///
/// let mut restored = false;
/// {
///     let _guard = Context::with(|| restored = true);
/// }
/// assert!(restored);
/// ```
pub struct Context<AtExit: FnOnce()> {
    exit_cb: Option<AtExit>
}

impl<F: FnOnce()> Context<F> {
    /// Creates a guard that runs `f` when dropped.
    pub fn with(f: F) -> Self { Self { exit_cb: Some(f) }}

    /// Drop the guard without running the cleanup.
    pub fn dismiss(mut self) {
        self.exit_cb = None;
    }
}

impl<F: FnOnce()> Drop for Context<F> {
    fn drop(&mut self) {
        if let Some(f) = self.exit_cb.take() {
            f()
        }
    }
}
