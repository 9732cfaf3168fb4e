
extern crate byteorder;

use std::io::{self, Error, ErrorKind, Write};

use byteorder::{BigEndian, ByteOrder, WriteBytesExt};

fn err(msg:&str) -> io::Error { Error::new(ErrorKind::Other, msg) }

pub struct Packer {
	buff: Vec<u8>,
}

pub struct Unpacker {
	buff: Vec<u8>,
	pos: usize,
}

impl Packer {

	pub fn new() -> Self { Packer{ buff: Vec::new() } }

	pub fn reset(&mut self) { self.buff.clear(); }

	pub fn as_bytes(&self) -> &[u8] { &self.buff }

	// Fixed-size fields are all multiples of four bytes, so packing them never breaks alignment
	pub fn pack_u32(&mut self, x:u32) -> io::Result<()> { self.buff.write_u32::<BigEndian>(x) }
	pub fn pack_i32(&mut self, x:i32) -> io::Result<()> { self.buff.write_i32::<BigEndian>(x) }

	pub fn pack_bool(&mut self, b:bool) -> io::Result<()> { self.pack_i32(if b {1} else {0}) }

	// An enum is an i32 with a restricted set of values; the restriction is application-level
	pub fn pack_enum(&mut self, x:i32) -> io::Result<()> { self.pack_i32(x) }

	pub fn pack_variable_len_opaque(&mut self, data:&[u8]) -> io::Result<()> {
		self.pack_u32(data.len() as u32)?;
		self.buff.write(data)?;

		// Pad back up to four-byte alignment
		while self.buff.len() % 4 != 0 { self.buff.push(0); }
		Ok(())
	}

}

impl Unpacker {

	pub fn new() -> Self { Unpacker{ buff: Vec::new(), pos: 0 } }

	pub fn reset(&mut self, data:&[u8]) {
		self.buff.clear();
		self.buff.extend_from_slice(data);
		self.pos = 0;
	}

	pub fn all_data_consumed(&self) -> bool { self.pos == self.buff.len() }

	fn take(&mut self, n:usize) -> io::Result<&[u8]> {
		if self.pos + n > self.buff.len() {
			return Err(err("Tried to unpack past the end of the buffer"));
		}
		let ans = &self.buff[self.pos..self.pos+n];
		self.pos += n;
		Ok(ans)
	}

	pub fn unpack_u32(&mut self) -> io::Result<u32> { Ok(BigEndian::read_u32(self.take(4)?)) }
	pub fn unpack_i32(&mut self) -> io::Result<i32> { Ok(BigEndian::read_i32(self.take(4)?)) }

	pub fn unpack_enum(&mut self) -> io::Result<i32> { self.unpack_i32() }

	pub fn unpack_bool(&mut self) -> io::Result<bool> {
		match self.unpack_i32()? {
			0 => Ok(false),
			1 => Ok(true),
			_ => Err(err("Expected 0 or 1 in unpack_bool")),
		}
	}

	pub fn unpack_variable_len_opaque(&mut self) -> io::Result<Vec<u8>> {
		let n:usize = self.unpack_u32()? as usize;
		let ans:Vec<u8> = self.take(n)?.to_vec();

		// Skip the alignment padding
		let pad:usize = (4 - n % 4) % 4;
		self.take(pad)?;
		Ok(ans)
	}

}

#[cfg(test)]
mod tests {

	use super::*;

	#[test]
	fn opaque_round_trip_preserves_alignment() -> io::Result<()> {
		let mut packer = Packer::new();
		packer.pack_u32(7)?;
		packer.pack_variable_len_opaque(b"abcde")?;
		packer.pack_i32(-1)?;

		assert_eq!(packer.as_bytes().len() % 4, 0);

		let mut unpacker = Unpacker::new();
		unpacker.reset(packer.as_bytes());
		assert_eq!(unpacker.unpack_u32()?, 7);
		assert_eq!(unpacker.unpack_variable_len_opaque()?, b"abcde".to_vec());
		assert_eq!(unpacker.unpack_i32()?, -1);
		assert!(unpacker.all_data_consumed());

		Ok(())
	}

	#[test]
	fn unpack_past_end_is_an_error() {
		let mut unpacker = Unpacker::new();
		unpacker.reset(&[0, 0]);
		assert!(unpacker.unpack_u32().is_err());
	}

}
