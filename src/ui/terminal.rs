//! Terminal setup and teardown for the game view.

use std::io;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Leave raw mode and the alternate screen. Errors are ignored since this
/// runs on the way out, possibly while panicking.
pub fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Runs a restore function when dropped, including during unwinding.
pub struct TerminalGuard {
    restore: fn(),
}

impl TerminalGuard {
    pub fn new() -> Self {
        Self::with_restore(restore)
    }

    pub fn with_restore(restore: fn()) -> Self {
        TerminalGuard { restore }
    }
}

impl Default for TerminalGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Restore the terminal before the default hook prints the panic message,
/// otherwise it lands on the alternate screen and is lost.
pub fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        hook(info);
    }));
}

/// Enter raw mode and the alternate screen. The guard is armed as soon as
/// raw mode is on, so a failure in any later step still restores.
pub fn init() -> io::Result<(TerminalGuard, Tui)> {
    install_panic_hook();
    enable_raw_mode()?;
    let guard = TerminalGuard::new();
    execute!(io::stdout(), EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    Ok((guard, terminal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static DROPPED: AtomicUsize = AtomicUsize::new(0);
    static UNWOUND: AtomicUsize = AtomicUsize::new(0);

    fn count_dropped() {
        DROPPED.fetch_add(1, Ordering::SeqCst);
    }

    fn count_unwound() {
        UNWOUND.fetch_add(1, Ordering::SeqCst);
    }

    fn fails_after_setup() -> io::Result<()> {
        let _guard = TerminalGuard::with_restore(count_dropped);
        Err(io::Error::new(io::ErrorKind::Other, "alternate screen unavailable"))
    }

    #[test]
    fn test_guard_restores_on_early_return() {
        assert!(fails_after_setup().is_err());
        assert_eq!(DROPPED.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_guard_restores_on_panic() {
        let result = std::panic::catch_unwind(|| {
            let _guard = TerminalGuard::with_restore(count_unwound);
            panic!("app loop panicked");
        });
        assert!(result.is_err());
        assert_eq!(UNWOUND.load(Ordering::SeqCst), 1);
    }
}
