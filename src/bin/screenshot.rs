
extern crate ds1054z;

use std::env;
use std::fs;
use std::io::{self, Error, ErrorKind};

use ds1054z::devices::ds1054z::DS1054Z;

// Saves a PNG of the scope's current display.
//
// Usage: screenshot <host> [output.png]
pub fn main() -> io::Result<()> {
	env_logger::init();

	let args:Vec<String> = env::args().collect();

	let host:&str = match args.get(1) {
		Some(h) => h,
		None    => return Err(Error::new(ErrorKind::Other, "Usage: screenshot <host> [output.png]")),
	};
	let path:&str = args.get(2).map(|s| s.as_str()).unwrap_or("ds1054z.png");

	let mut scope = DS1054Z::connect(host)?;

	let png:Vec<u8> = scope.screenshot()?;
	fs::write(path, &png)?;

	println!("Wrote {} bytes to {}", png.len(), path);

	Ok(())
}
