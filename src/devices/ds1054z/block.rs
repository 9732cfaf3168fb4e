
// IEEE 488.2 definite-length block, the envelope around every binary reply the
// scope sends: b'#', one ASCII digit giving the width of the length field, that
// many ASCII digits of decimal payload length, the payload itself, and a trailing
// newline terminator.

use std::io::{self, Error, ErrorKind};
use std::str;

fn err(msg:&str) -> io::Error { Error::new(ErrorKind::Other, msg) }

// Extracts the payload from a block envelope.  The device-reported length is checked
// against the bytes actually present; a short buffer is an error rather than a
// silently truncated slice.
pub fn decode(raw:&[u8]) -> io::Result<&[u8]> {
	if raw.len() < 2 {
		return Err(err("Block envelope shorter than its fixed header"));
	}
	if raw[0] != b'#' {
		return Err(err("Block envelope doesn't start with '#'"));
	}

	let h:usize = match (raw[1] as char).to_digit(10) {
		Some(d) if d >= 1 => d as usize,
		Some(_) => return Err(err("Block header length field has zero digits")),
		None    => return Err(err("Block header digit count is not an ASCII digit")),
	};

	if raw.len() < 2 + h {
		return Err(err("Block envelope ends inside its length field"));
	}

	let n:usize = str::from_utf8(&raw[2..2+h])
		.ok()
		.and_then(|s| s.parse::<usize>().ok())
		.ok_or_else(|| err("Block header length field is not a decimal integer"))?;

	let body:&[u8] = &raw[2+h..];
	if body.len() < n {
		return Err(err(&format!("Block payload truncated: header promised {} bytes but only {} are present", n, body.len())));
	}

	Ok(&body[..n])
}

// Wraps a payload in a block envelope with a length field `digits` wide, terminator
// included.  Mostly useful for building replies in tests.
pub fn encode(payload:&[u8], digits:usize) -> io::Result<Vec<u8>> {
	if digits < 1 || digits > 9 {
		return Err(err("Block header length field must be 1 to 9 digits wide"));
	}

	let len_field:String = format!("{:0width$}", payload.len(), width = digits);
	if len_field.len() > digits {
		return Err(err("Payload length doesn't fit in the requested length field width"));
	}

	let mut ans:Vec<u8> = Vec::with_capacity(2 + digits + payload.len() + 1);
	ans.push(b'#');
	ans.push(b'0' + digits as u8);
	ans.extend_from_slice(len_field.as_bytes());
	ans.extend_from_slice(payload);
	ans.push(b'\n');

	Ok(ans)
}
