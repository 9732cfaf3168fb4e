
pub const PMAP_PROG:u32 = 100000;
pub const PMAP_VERS:u32 = 2;
pub const PMAP_PORT:u16 = 111;

pub const PMAPPROC_GETPORT:u32 = 3;	// (mapping) -> unsigned int

use std::io::{self, Error, ErrorKind};

use super::IPPROTO_TCP;
use super::xdr_pack;
use super::tcp_clients::TcpClient;

pub struct TcpPortMapperClient {
	client: TcpClient,
}

impl TcpPortMapperClient {

	pub fn new(host:&str) -> io::Result<Self> {
		Ok(Self{ client: TcpClient::connect((host, PMAP_PORT), PMAP_PROG, PMAP_VERS)? })
	}

	// Asks the portmapper which TCP port the given program/version is listening on
	pub fn get_port(&mut self, prog:u32, vers:u32) -> io::Result<u16> {
		self.client.start_call(PMAPPROC_GETPORT)?;
		xdr_pack::pack_mapping(&mut self.client.packer, prog, vers, IPPROTO_TCP, 0)?;
		self.client.do_call()?;

		let port:u32 = self.client.unpacker.unpack_u32()?;

		if !self.client.unpacker.all_data_consumed() {
			return Err(Error::new(ErrorKind::Other, "Data unexpectedly left over after unpacking port"));
		}
		if port == 0 || port > u16::max_value() as u32 {
			return Err(Error::new(ErrorKind::Other, "Portmapper has no usable mapping for the requested program"));
		}

		Ok(port as u16)
	}

}
