//! crossterm-backed screen
//!
//! On an interactive terminal the screen runs in raw mode: frames are
//! redrawn in place and the pause between generations polls the keyboard so
//! Ctrl+C, `q` or Esc end the run cleanly. When stdout is not a terminal the
//! frames are written as plain text and the pause sleeps in short slices,
//! watching for SIGINT.

use std::io::{self, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, MoveToNextLine, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::tty::IsTty;
use crossterm::{execute, queue};

use crate::core::error::Result;
use crate::render::{Control, Frame, Screen};

/// Longest stretch the pause goes without checking for an interrupt
const INTERRUPT_POLL: Duration = Duration::from_millis(20);

/// Source of key presses for the interactive pause
pub trait KeySource {
    /// Wait up to `timeout` for the next key event
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>>;
}

/// Key events read from the terminal through crossterm
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}

/// Keeps the terminal in raw mode with a hidden cursor until dropped
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = RawModeGuard;
        execute!(io::stdout(), Hide)?;
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// In-place redraw state: the key source, plus the raw-mode guard when the
/// real terminal is driven
struct Interactive {
    keys: Box<dyn KeySource>,
    _raw: Option<RawModeGuard>,
}

/// Screen that writes frames to a terminal or any other byte sink
pub struct TerminalScreen<W: Write> {
    out: W,
    interactive: Option<Interactive>,
    interrupted: Arc<AtomicBool>,
    frames_drawn: u64,
}

impl TerminalScreen<Stdout> {
    /// Screen on stdout; raw mode is used when both stdin and stdout are terminals
    ///
    /// A SIGINT handler is installed in every mode, so Ctrl+C outside raw
    /// mode also ends the run at the next pause.
    pub fn stdout() -> Self {
        let interrupted = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&interrupted);
        if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
            tracing::warn!("Could not install the Ctrl+C handler: {}", e);
        }

        let out = io::stdout();
        let interactive = if out.is_tty() && io::stdin().is_tty() {
            match RawModeGuard::enable() {
                Ok(guard) => Some(Interactive {
                    keys: Box::new(CrosstermKeys),
                    _raw: Some(guard),
                }),
                Err(e) => {
                    tracing::warn!("Could not enter raw mode, writing plain frames: {}", e);
                    None
                }
            }
        } else {
            tracing::debug!("stdout is not a terminal, writing plain frames");
            None
        };

        Self {
            out,
            interactive,
            interrupted,
            frames_drawn: 0,
        }
    }
}

impl<W: Write> TerminalScreen<W> {
    /// Plain-text screen over an arbitrary writer
    pub fn plain(out: W) -> Self {
        Self {
            out,
            interactive: None,
            interrupted: Arc::new(AtomicBool::new(false)),
            frames_drawn: 0,
        }
    }

    /// Redrawing screen over an arbitrary writer and key source
    ///
    /// The terminal mode is left untouched.
    pub fn with_keys(out: W, keys: impl KeySource + 'static) -> Self {
        Self {
            out,
            interactive: Some(Interactive {
                keys: Box::new(keys),
                _raw: None,
            }),
            interrupted: Arc::new(AtomicBool::new(false)),
            frames_drawn: 0,
        }
    }

    /// Whether frames are redrawn in place and keys are polled
    pub fn is_interactive(&self) -> bool {
        self.interactive.is_some()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Flag that ends the run at the next pause once set
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupted)
    }

    /// Give back the underlying writer, restoring the terminal if it was raw
    pub fn into_inner(self) -> W {
        let TerminalScreen {
            out, interactive, ..
        } = self;
        drop(interactive);
        out
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn draw(&mut self, frame: &Frame) -> Result<()> {
        if self.is_interactive() {
            queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
            for line in frame.lines() {
                queue!(self.out, Print(line), MoveToNextLine(1))?;
            }
        } else {
            if self.frames_drawn > 0 {
                writeln!(self.out)?;
            }
            for line in frame.lines() {
                writeln!(self.out, "{}", line)?;
            }
        }
        self.out.flush()?;
        self.frames_drawn += 1;
        Ok(())
    }

    fn pause(&mut self, delay: Duration) -> Result<Control> {
        match self.interactive.as_mut() {
            Some(interactive) => {
                wait_for_interrupt(interactive.keys.as_mut(), &self.interrupted, delay)
            }
            None => Ok(sleep_until_interrupted(&self.interrupted, delay)),
        }
    }

    fn message(&mut self, text: &str) -> Result<()> {
        if self.is_interactive() {
            queue!(self.out, MoveToNextLine(1), Print(text), MoveToNextLine(1))?;
        } else {
            writeln!(self.out)?;
            writeln!(self.out, "{}", text)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Poll `keys` until `delay` has passed or an interrupt arrives
///
/// Keys are polled at least once, even for a zero delay.
fn wait_for_interrupt<K: KeySource + ?Sized>(
    keys: &mut K,
    interrupted: &AtomicBool,
    delay: Duration,
) -> Result<Control> {
    let deadline = Instant::now() + delay;
    loop {
        if interrupted.load(Ordering::SeqCst) {
            return Ok(Control::Stop);
        }
        let remaining = deadline.saturating_duration_since(Instant::now());
        if let Some(key) = keys.next_key(remaining.min(INTERRUPT_POLL))? {
            if is_interrupt(&key) {
                tracing::debug!("Interrupt key received: {:?}", key.code);
                interrupted.store(true, Ordering::SeqCst);
                return Ok(Control::Stop);
            }
        }
        if remaining.is_zero() {
            return Ok(Control::Continue);
        }
    }
}

/// Sleep for `delay` in short slices, stopping early once `interrupted` is set
fn sleep_until_interrupted(interrupted: &AtomicBool, delay: Duration) -> Control {
    let deadline = Instant::now() + delay;
    loop {
        if interrupted.load(Ordering::SeqCst) {
            tracing::debug!("Interrupt signal received");
            return Control::Stop;
        }
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Control::Continue;
        }
        thread::sleep(remaining.min(INTERRUPT_POLL));
    }
}

/// Ctrl+C, `q` and Esc end the run
fn is_interrupt(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Esc => true,
        _ => false,
    }
}
