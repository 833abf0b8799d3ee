use std::io::Write;

/// Blocking, user-facing alert.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Writes alerts to stderr, framed so they stand out from the board.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        let rule = "!".repeat(message.chars().count() + 6);
        let mut stderr = std::io::stderr().lock();
        // Nothing sensible to do if stderr itself is gone
        let _ = writeln!(stderr, "{rule}\n!! {message} !!\n{rule}");
        let _ = stderr.flush();
    }
}
