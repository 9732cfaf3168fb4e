
// Currently the only device supported here is the Rigol DS1054Z.  If more devices are
// ever supported, I'll probably organize them into modules by manufacturer.

use std::io::{self, Error, ErrorKind};
use std::str;

use crate::vxi11::CoreClient;

pub mod ds1054z;

// The narrow surface a device driver needs from the session layer.  Drivers are
// generic over this so tests can stand in a simulated instrument.
pub trait Session {

	// Send a command, no reply expected
	fn write(&mut self, cmd:&str) -> io::Result<()>;

	// Send a command and return the text reply with the trailing terminator stripped
	fn query(&mut self, cmd:&str) -> io::Result<String>;

	// Send a command and return the raw reply bytes, for block-envelope replies that
	// must not go through text decoding
	fn query_binary(&mut self, cmd:&str) -> io::Result<Vec<u8>>;

}

impl Session for CoreClient {

	fn write(&mut self, cmd:&str) -> io::Result<()> {
		CoreClient::write(self, cmd.as_bytes())
	}

	fn query(&mut self, cmd:&str) -> io::Result<String> {
		let raw:Vec<u8> = self.ask(cmd.as_bytes())?;
		match str::from_utf8(&raw) {
			Ok(s)  => Ok(s.trim_end_matches(|c| c == '\n' || c == '\r').to_owned()),
			Err(_) => Err(Error::new(ErrorKind::Other, "Unable to parse response as UTF-8")),
		}
	}

	fn query_binary(&mut self, cmd:&str) -> io::Result<Vec<u8>> {
		self.ask(cmd.as_bytes())
	}

}
