
extern crate ds1054z;

use std::env;
use std::io::{self, Error, ErrorKind};

use ds1054z::devices::ds1054z::{DS1054Z, Mode, Source};

// Stops the acquisition, dumps the instrument state as JSON to stderr, and writes
// the full record of the requested channels to stdout as CSV.
//
// Usage: waveform_to_csv <host> [CHAN1 CHAN2 CHAN3 CHAN4 MATH ...]
pub fn main() -> io::Result<()> {
	env_logger::init();

	let args:Vec<String> = env::args().collect();

	let host:&str = match args.get(1) {
		Some(h) => h,
		None    => return Err(Error::new(ErrorKind::Other, "Usage: waveform_to_csv <host> [CHAN1 CHAN2 ... MATH]")),
	};

	let mut sources:Vec<Source> = vec![];
	for name in &args[2..] {
		match Source::from_scpi_name(name) {
			Some(source) => sources.push(source),
			None         => return Err(Error::new(ErrorKind::Other, "Unrecognized channel name")),
		}
	}
	if sources.is_empty() {
		sources.push(Source::Chan1);
	}

	let mut scope = DS1054Z::connect(host)?;

	// Freeze the record so every channel transfers the same acquisition
	scope.stop()?;

	let state = scope.get_full_state()?;
	let state_json:String = serde_json::to_string_pretty(&state)
		.map_err(|_| Error::new(ErrorKind::Other, "Unable to serialize instrument state"))?;
	eprintln!("{}", state_json);

	let csv:String = scope.get_csv(&sources, Mode::Normal)?;
	print!("{}", csv);

	scope.run()?;

	Ok(())
}
