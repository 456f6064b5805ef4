use tracing::instrument;

use crate::{error::Result, interface::Interface};

impl<I: Interface> crate::Driver<I> {
	/// Clear the internal line buffer without sending it.
	#[instrument(level = "trace", skip(self))]
	pub(crate) fn clear_buffer(&mut self) {
		self.buffer.clear();
	}

	/// Send the internal line buffer to the display, then clear it.
	///
	/// This is a no-op if the buffer is empty.
	#[instrument(level = "trace", skip(self))]
	pub(crate) fn flush_buffer(&mut self) -> Result<()> {
		if self.buffer.is_empty() {
			return Ok(());
		}

		let mut buf = std::mem::take(&mut self.buffer);
		let result = self.data(&buf);
		buf.clear();
		self.buffer = buf;
		result
	}

	/// Write some data through the internal line buffer.
	///
	/// Every time the buffer fills up it is sent, so all writes but the last are exactly the
	/// buffer length. The buffer is never increased in size.
	#[instrument(level = "trace", skip(self, bytes))]
	pub(crate) fn write_data_buffered(&mut self, mut bytes: &[u8]) -> Result<()> {
		while !bytes.is_empty() {
			let room = self.buffer_length - self.buffer.len();
			let (now, rest) = bytes.split_at(room.min(bytes.len()));
			self.buffer.extend_from_slice(now);
			if self.buffer.len() == self.buffer_length {
				self.flush_buffer()?;
			}
			bytes = rest;
		}

		Ok(())
	}
}
