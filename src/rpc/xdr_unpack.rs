
use std::io::{self, Error, ErrorKind};

use crate::xdr::Unpacker;
use crate::rpc::{REPLY, MSG_DENIED, RPC_MISMATCH, AUTH_ERROR, MSG_ACCEPTED, PROG_UNAVAIL, PROG_MISMATCH, PROC_UNAVAIL, GARBAGE_ARGS, SUCCESS};

fn err(msg:&str) -> io::Error { Error::new(ErrorKind::Other, msg) }

pub fn unpack_auth(unpacker:&mut Unpacker) -> io::Result<(i32, Vec<u8>)> {
	let flavor:i32  = unpacker.unpack_enum()?;
	let body:Vec<u8> = unpacker.unpack_variable_len_opaque()?;
	Ok((flavor, body))
}

// Consumes the full reply header, leaving the unpacker positioned at the reply body.
// Returns the xid so the caller can match the reply to its call.
pub fn unpack_replyheader(unpacker:&mut Unpacker) -> io::Result<u32> {
	let xid:u32 = unpacker.unpack_u32()?;

	if unpacker.unpack_enum()? != REPLY {
		return Err(err("Expected REPLY message type in unpack_replyheader"));
	}

	match unpacker.unpack_enum()? {
		MSG_ACCEPTED => { },
		MSG_DENIED => {
			return match unpacker.unpack_enum()? {
				RPC_MISMATCH => {
					unpacker.unpack_u32()?;	// low supported version
					unpacker.unpack_u32()?;	// high supported version
					Err(err("Message denied due to RPC_MISMATCH"))
				},
				AUTH_ERROR => {
					unpacker.unpack_u32()?;	// auth status detail code
					Err(err("Message denied due to AUTH_ERROR"))
				},
				_ => Err(err("Message denied for an unknown reason")),
			};
		},
		_ => return Err(err("Neither MSG_DENIED nor MSG_ACCEPTED in unpack_replyheader")),
	}

	unpack_auth(unpacker)?;	// verifier, unused with AUTH_NULL

	match unpacker.unpack_enum()? {
		SUCCESS       => Ok(xid),
		PROG_UNAVAIL  => Err(err("Program unavailable")),
		PROG_MISMATCH => {
			unpacker.unpack_u32()?;	// low supported version
			unpacker.unpack_u32()?;	// high supported version
			Err(err("Program mismatch"))
		},
		PROC_UNAVAIL  => Err(err("Procedure unavailable")),
		GARBAGE_ARGS  => Err(err("Garbage args")),
		_             => Err(err("Call failed for an unknown reason")),
	}
}
