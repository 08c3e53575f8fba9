/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Test support for asserting on the exact bytes the emitter functions write.

use std::{io::{Result, Write},
          sync::Arc};

use smallvec::{SmallVec, smallvec};

use crate::{OutputDevice, StdMutex};

/// Inline storage for captured output; most assertions fit on the stack.
pub const MOCK_BUFFER_STORAGE_SIZE: usize = 64;
pub type InlineVecMockBuffer = SmallVec<[u8; MOCK_BUFFER_STORAGE_SIZE]>;

/// You can safely clone this struct, since it only contains an
/// `Arc<StdMutex<SmallVec<u8>>>`. The inner `buffer` will not be cloned, just the
/// [Arc] will be cloned.
///
/// The main constructors are:
/// - [`StdoutMock::default`]
/// - [`StdoutMock::new`]
/// - [`OutputDeviceExt::new_mock()`]
#[derive(Clone)]
pub struct StdoutMock {
    pub buffer: Arc<StdMutex<InlineVecMockBuffer>>,
}

impl Default for StdoutMock {
    fn default() -> Self {
        Self {
            buffer: Arc::new(StdMutex::new(smallvec![])),
        }
    }
}

impl StdoutMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}

impl StdoutMock {
    pub fn get_copy_of_buffer(&self) -> InlineVecMockBuffer {
        self.buffer.lock().unwrap().clone()
    }

    pub fn get_copy_of_buffer_as_string(&self) -> String {
        let buffer_data = self.buffer.lock().unwrap();
        String::from_utf8(buffer_data.to_vec()).expect("utf8")
    }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

pub trait OutputDeviceExt {
    fn new_mock() -> (OutputDevice, StdoutMock);
}

impl OutputDeviceExt for OutputDevice {
    fn new_mock() -> (OutputDevice, StdoutMock) {
        let stdout_mock = StdoutMock::default();
        let this = OutputDevice {
            resource: Arc::new(StdMutex::new(stdout_mock.clone())),
            is_mock: true,
        };
        (this, stdout_mock)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use pretty_assertions::assert_eq;

    use super::{OutputDeviceExt, StdoutMock};
    use crate::{LockedOutputDevice, OutputDevice, lock_output_device_as_mut};

    #[test]
    fn test_stdout_mock_captures_writes() {
        let mut stdout_mock = StdoutMock::default();
        let stdout_mock_clone = stdout_mock.clone(); // Points to the same inner value.

        let normal_text = "hello world";
        stdout_mock.write_all(normal_text.as_bytes()).unwrap();
        stdout_mock.flush().unwrap();

        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), normal_text);
        assert_eq!(stdout_mock_clone.get_copy_of_buffer_as_string(), normal_text);
    }

    #[test]
    fn test_mock_output_device() {
        let (device, mock) = OutputDevice::new_mock();
        let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
        mut_ref.write_all(b"Hello, world!\n").ok();
        assert_eq!(mock.get_copy_of_buffer_as_string(), "Hello, world!\n");
    }

    #[test]
    fn test_mock_output_device_is_mock() {
        let (device, _) = OutputDevice::new_mock();
        assert!(device.is_mock);
    }

    #[test]
    fn test_mock_buffer_bytes() {
        let (device, mock) = OutputDevice::new_mock();
        let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
        mut_ref.write_all(b"\x1b[1m").ok();
        assert_eq!(mock.get_copy_of_buffer().as_slice(), b"\x1b[1m");
    }
}
