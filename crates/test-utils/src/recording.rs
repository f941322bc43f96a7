use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use shellstack::term::{Console, Logger, ProcessControl};
use shellstack::types::ColorMode;

/// Process control that records termination requests instead of exiting.
#[derive(Debug, Clone, Default)]
pub struct RecordingControl {
    codes: Arc<Mutex<Vec<i32>>>,
}

impl RecordingControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn codes(&self) -> Vec<i32> {
        self.codes.lock().unwrap().clone()
    }
}

impl ProcessControl for RecordingControl {
    fn terminate(&mut self, code: i32) {
        self.codes.lock().unwrap().push(code);
    }
}

/// In-memory writer that can be cloned and inspected after the logger
/// took ownership of it.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock().unwrap()).into_owned()
    }

    pub fn clear(&self) {
        self.bytes.lock().unwrap().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A console writing into a fresh buffer, with a recording control.
pub struct TestConsole {
    pub console: Console,
    pub output: SharedBuffer,
    pub control: RecordingControl,
}

impl TestConsole {
    pub fn new(mode: ColorMode) -> Self {
        let output = SharedBuffer::new();
        let control = RecordingControl::new();
        let console = Console::new(
            Logger::new(Box::new(output.clone()), mode),
            Box::new(control.clone()),
        );
        Self {
            console,
            output,
            control,
        }
    }

    pub fn colored() -> Self {
        Self::new(ColorMode::Always)
    }

    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }
}
