
extern crate byteorder;

use std::io::{self, Error, ErrorKind, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};

use byteorder::{BigEndian, ByteOrder, WriteBytesExt};

use crate::xdr;
use super::xdr_pack;
use super::xdr_unpack;

pub struct TcpClient {
	stream: TcpStream,
	pub prog: u32,
	pub vers: u32,
	lastxid: u32,
	pub packer: xdr::Packer,
	pub unpacker: xdr::Unpacker,
}

impl TcpClient {

	pub fn connect<A: ToSocketAddrs>(addr:A, prog:u32, vers:u32) -> io::Result<Self> {
		let stream = TcpStream::connect(addr)?;
		Ok(Self{ stream, prog, vers, lastxid: 0, packer: xdr::Packer::new(), unpacker: xdr::Unpacker::new() })
	}

	// Resets the packer and packs a call header for the given procedure; the caller
	// packs the procedure arguments afterward and then invokes do_call
	pub fn start_call(&mut self, prc:u32) -> io::Result<()> {
		self.lastxid += 1;
		self.packer.reset();
		xdr_pack::pack_callheader_no_auth(&mut self.packer, self.lastxid, self.prog, self.vers, prc)
	}

	// Sends the packed call and loads the matching reply body into the unpacker
	pub fn do_call(&mut self) -> io::Result<()> {
		{
			let call:&[u8] = self.packer.as_bytes();

			// One record mark per call; we never need to fragment outgoing messages
			let mut msg:Vec<u8> = Vec::with_capacity(call.len() + 4);
			msg.write_u32::<BigEndian>(call.len() as u32 | 0x8000_0000)?;
			msg.extend_from_slice(call);
			self.stream.write_all(&msg)?;
		}

		loop {
			let reply:Vec<u8> = self.read_record()?;
			self.unpacker.reset(&reply);

			let xid:u32 = xdr_unpack::unpack_replyheader(&mut self.unpacker)?;
			if xid == self.lastxid {
				return Ok(());
			} else if xid > self.lastxid {
				return Err(Error::new(ErrorKind::Other, "Reply xid is ahead of the last call"));
			}
			// Reply to an earlier call that we already gave up on; keep reading
		}
	}

	// Reassembles one RPC record from its length-prefixed fragments
	fn read_record(&mut self) -> io::Result<Vec<u8>> {
		let mut record:Vec<u8> = vec![];

		loop {
			let mut mark_bytes:[u8; 4] = [0; 4];
			self.stream.read_exact(&mut mark_bytes)?;
			let mark:u32 = BigEndian::read_u32(&mark_bytes);

			let frag_len:usize = (mark & 0x7fff_ffff) as usize;
			let frag_start:usize = record.len();
			record.resize(frag_start + frag_len, 0);
			self.stream.read_exact(&mut record[frag_start..])?;

			if mark & 0x8000_0000 != 0 {
				return Ok(record);
			}
		}
	}

}
