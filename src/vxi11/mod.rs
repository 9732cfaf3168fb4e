
// Device core channel
pub const DEVICE_CORE_PROG:u32 = 0x0607af;
pub const DEVICE_CORE_VERS:u32 = 1;
pub const CREATE_LINK:u32      = 10;
pub const DEVICE_WRITE:u32     = 11;
pub const DEVICE_READ:u32      = 12;
pub const DESTROY_LINK:u32     = 23;

pub const CLIENT_ID:i32 = 3333;
pub const DEFAULT_IO_TIMEOUT_MS:u32   = 10000;
pub const DEFAULT_LOCK_TIMEOUT_MS:u32 = 10000;

pub const OPERATION_FLAGS_END_ONLY:i32 = 8;

// Reason bits in a device_read reply
pub const READ_REASON_REQCNT:i32 = 1;
pub const READ_REASON_CHR:i32    = 2;
pub const READ_REASON_END:i32    = 4;

use std::io::{self, Error, ErrorKind};

use crate::rpc::port_mapping::TcpPortMapperClient;
use crate::rpc::tcp_clients::TcpClient;

fn err(msg:&str) -> io::Error { Error::new(ErrorKind::Other, msg) }

pub mod xdr_pack;

pub struct CoreClient {
	client: TcpClient,
	opt_link: Option<Link>,
}

pub struct Link {
	pub link_id: i32,
	pub abort_port: u32,
	pub max_recv_size: u32,
}

fn device_error(code:i32) -> io::Error {
	match code {
		1  => err("Syntax error"),
		3  => err("Device not accessible"),
		4  => err("Invalid link identifier"),
		5  => err("Parameter error"),
		9  => err("Out of resources"),
		11 => err("Device locked by another link"),
		15 => err("I/O timeout"),
		17 => err("I/O error"),
		21 => err("Invalid address"),
		23 => err("Abort"),
		_  => err("Unknown device error"),
	}
}

impl CoreClient {

	pub fn new(host:&str) -> io::Result<Self> {
		// The core program doesn't get a fixed port; the portmapper tells us where it lives
		let mut pmap_client = TcpPortMapperClient::new(host)?;
		let port:u16 = pmap_client.get_port(DEVICE_CORE_PROG, DEVICE_CORE_VERS)?;

		let client = TcpClient::connect((host, port), DEVICE_CORE_PROG, DEVICE_CORE_VERS)?;

		Ok(CoreClient{ client, opt_link: None })
	}

	fn link_id(&self) -> io::Result<i32> {
		match self.opt_link {
			Some(Link{ link_id, .. }) => Ok(link_id),
			None => Err(err("No link")),
		}
	}

	pub fn create_link(&mut self) -> io::Result<()> {
		if self.opt_link.is_some() {
			return Err(err("Already connected to a link"));
		}

		self.client.start_call(CREATE_LINK)?;
		xdr_pack::pack_create_link_parms(&mut self.client.packer, CLIENT_ID, false, DEFAULT_LOCK_TIMEOUT_MS, "inst0")?;
		self.client.do_call()?;

		let error:i32         = self.client.unpacker.unpack_i32()?;
		let link_id:i32       = self.client.unpacker.unpack_i32()?;
		let abort_port:u32    = self.client.unpacker.unpack_u32()?;
		let max_recv_size:u32 = self.client.unpacker.unpack_u32()?;

		if error != 0 {
			return Err(device_error(error));
		}

		self.opt_link = Some(Link{ link_id, abort_port, max_recv_size });
		Ok(())
	}

	pub fn write(&mut self, data:&[u8]) -> io::Result<()> {
		let link_id:i32 = self.link_id()?;

		self.client.start_call(DEVICE_WRITE)?;
		xdr_pack::pack_device_write_parms(&mut self.client.packer, link_id, DEFAULT_IO_TIMEOUT_MS, DEFAULT_LOCK_TIMEOUT_MS, OPERATION_FLAGS_END_ONLY, data)?;
		self.client.do_call()?;

		let error:i32 = self.client.unpacker.unpack_i32()?;
		let size:u32  = self.client.unpacker.unpack_u32()?;

		if error != 0 {
			return Err(device_error(error));
		}
		if size as usize != data.len() {
			return Err(err("Number of bytes in confirmation doesn't match number of bytes sent"));
		}

		Ok(())
	}

	// One device_read round trip; returns the data plus the reason bits so the
	// caller can tell whether the device has more to say
	fn read_once(&mut self) -> io::Result<(Vec<u8>, i32)> {
		let link_id:i32 = self.link_id()?;

		self.client.start_call(DEVICE_READ)?;
		xdr_pack::pack_device_read_parms(&mut self.client.packer, link_id, std::u32::MAX, DEFAULT_IO_TIMEOUT_MS, DEFAULT_LOCK_TIMEOUT_MS, 0, 0)?;
		self.client.do_call()?;

		let error:i32    = self.client.unpacker.unpack_i32()?;
		let reason:i32   = self.client.unpacker.unpack_i32()?;
		let data:Vec<u8> = self.client.unpacker.unpack_variable_len_opaque()?;

		if error != 0 {
			return Err(device_error(error));
		}

		Ok((data, reason))
	}

	// Reads until the device sets the END indicator.  A reply larger than the link's
	// max_recv_size arrives in several device_read calls, none of which set END except
	// the last one.
	pub fn read(&mut self) -> io::Result<Vec<u8>> {
		let mut ans:Vec<u8> = vec![];

		loop {
			let (mut data, reason) = self.read_once()?;
			ans.append(&mut data);

			if reason & READ_REASON_END != 0 {
				return Ok(ans);
			}
			if reason & READ_REASON_CHR != 0 {
				return Err(err("Read stopped on a termination character that was never requested"));
			}
		}
	}

	pub fn ask(&mut self, data:&[u8]) -> io::Result<Vec<u8>> {
		self.write(data)?;
		self.read()
	}

	pub fn destroy_link(&mut self) -> io::Result<()> {
		let link_id:i32 = self.link_id()?;

		self.client.start_call(DESTROY_LINK)?;
		self.client.packer.pack_i32(link_id)?;
		self.client.do_call()?;

		let error:i32 = self.client.unpacker.unpack_i32()?;
		self.opt_link = None;

		if error != 0 {
			return Err(device_error(error));
		}

		Ok(())
	}

}

impl Drop for CoreClient {

	fn drop(&mut self) {
		if self.opt_link.is_some() {
			if let Err(e) = self.destroy_link() {
				log::warn!("unable to destroy link on drop: {}", e);
			}
		}
	}

}
