// ABOUTME: Shared helpers for integration tests
// Builds a console with scripted input and captured stdout/stderr

use kitty_zoxide_sessions::console::Console;
use kitty_zoxide_sessions::logging::LogHandle;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Cloneable in-memory writer, for capturing console output.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A console fed from `input` whose stdout and stderr are captured.
pub fn scripted(input: &str) -> (Console, SharedBuffer, SharedBuffer) {
    let out = SharedBuffer::default();
    let err = SharedBuffer::default();
    let console = Console::new(
        Box::new(io::Cursor::new(input.as_bytes().to_vec())),
        Box::new(out.clone()),
        Box::new(err.clone()),
        LogHandle::disabled(),
    );
    (console, out, err)
}
