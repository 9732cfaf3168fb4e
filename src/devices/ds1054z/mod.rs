
extern crate regex;

use std::cmp;
use std::io::{self, Error, ErrorKind};
use std::str;
use std::thread;
use std::time::Duration;

use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Match, Regex};
use serde::{Serialize, Deserialize};

use crate::vxi11::CoreClient;
use super::Session;

pub mod block;
pub mod table;

use table::CsvTable;

lazy_static! {
	static ref IDN_RE: Regex = Regex::new("([^,]+),([^,]+),([^,]+),([^,\\s]+)").unwrap();
}

// Horizontal grid divisions on the display, needed to recover the record length
// when the scope reports its memory depth as AUTO
pub const H_GRID:f64 = 12.0;

// The scope needs a moment after each window register write before the new value
// is reflected in readbacks
pub const DEFAULT_SETTLE_DURATION_SEC:f32 = 0.3;

// Most samples the scope will hand over in one :WAV:DATA? exchange
pub const DEFAULT_MAX_CHUNK:u64 = 100_000;

fn err(msg:&str) -> io::Error { Error::new(ErrorKind::Other, msg) }

fn match_str(opt_match:Option<Match>, msg:&str) -> io::Result<String> {
	match opt_match {
		Some(m) => Ok(m.as_str().to_owned()),
		None    => Err(err(msg)),
	}
}

fn parse_f64(s:&str) -> io::Result<f64> {
	s.trim().parse::<f64>().map_err(|_| err(&format!("Unable to parse '{}' as a float", s.trim())))
}

fn parse_u64(s:&str) -> io::Result<u64> {
	s.trim().parse::<u64>().map_err(|_| err(&format!("Unable to parse '{}' as an integer", s.trim())))
}

// Waveform sources the scope can transfer: the four analog channels plus the math trace
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Source { Chan1, Chan2, Chan3, Chan4, Math }

impl Source {

	pub const ALL_ANALOG:[Source; 4] = [Source::Chan1, Source::Chan2, Source::Chan3, Source::Chan4];

	pub fn scpi_name(&self) -> &'static str {
		match self {
			Source::Chan1 => "CHAN1",
			Source::Chan2 => "CHAN2",
			Source::Chan3 => "CHAN3",
			Source::Chan4 => "CHAN4",
			Source::Math  => "MATH",
		}
	}

	pub fn from_scpi_name(name:&str) -> Option<Self> {
		match name {
			"CHAN1" => Some(Source::Chan1),
			"CHAN2" => Some(Source::Chan2),
			"CHAN3" => Some(Source::Chan3),
			"CHAN4" => Some(Source::Chan4),
			"MATH"  => Some(Source::Math),
			_       => None,
		}
	}

}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Format { Byte, Ascii }

impl Format {
	pub fn scpi_name(&self) -> &'static str {
		match self {
			Format::Byte  => "BYTE",
			Format::Ascii => "ASC",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Mode { Normal, Maximum, Raw }

impl Mode {
	pub fn scpi_name(&self) -> &'static str {
		match self {
			Mode::Normal  => "NORM",
			Mode::Maximum => "MAX",
			Mode::Raw     => "RAW",
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
	pub manufacturer: String,
	pub model: String,
	pub serial_num: String,
	pub fw_version: String,
	pub time_scale: f64,
	pub sample_rate: f64,
	pub memory_depth: f64,
}

// The ten comma-separated fields of a :WAV:PRE? reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preamble {
	pub format: u8,
	pub wave_type: u8,
	pub points: u64,
	pub count: u32,
	pub x_increment: f64,
	pub x_origin: f64,
	pub x_reference: f64,
	pub y_increment: f64,
	pub y_origin: f64,
	pub y_reference: f64,
}

pub struct DS1054Z<S: Session> {
	session: S,
	settle_duration: Duration,
	max_chunk: u64,
	pub state: Option<State>,
}

impl DS1054Z<CoreClient> {

	pub fn connect(host:&str) -> io::Result<Self> {
		let mut core = CoreClient::new(host)?;

		core.create_link()?;

		let idn:String = Session::query(&mut core, "*IDN?")?;
		if !idn.contains("DS1054Z") {
			return Err(err("Successfully connected to a device but it doesn't appear to be a DS1054Z"));
		}

		Ok(Self::with_session(core))
	}

}

impl<S: Session> DS1054Z<S> {

	pub fn with_session(session:S) -> Self {
		DS1054Z{
			session,
			settle_duration: Duration::from_secs_f32(DEFAULT_SETTLE_DURATION_SEC),
			max_chunk: DEFAULT_MAX_CHUNK,
			state: None,
		}
	}

	pub fn set_settle_duration(&mut self, d:Duration) { self.settle_duration = d; }

	pub fn set_max_chunk(&mut self, n:u64) { self.max_chunk = cmp::max(n, 1); }

	fn write_settled(&mut self, cmd:&str) -> io::Result<()> {
		self.session.write(cmd)?;
		thread::sleep(self.settle_duration);
		Ok(())
	}

	// One-liners
	pub fn run(&mut self)           -> io::Result<()> { self.session.write(":RUN")  }
	pub fn stop(&mut self)          -> io::Result<()> { self.session.write(":STOP") }
	pub fn single(&mut self)        -> io::Result<()> { self.session.write(":SING") }
	pub fn force_trigger(&mut self) -> io::Result<()> { self.session.write(":TFOR") }

	pub fn get_sample_rate(&mut self) -> io::Result<f64> {
		let res:String = self.session.query(":ACQ:SRAT?")?;
		parse_f64(&res)
	}

	pub fn get_time_scale(&mut self) -> io::Result<f64> {
		let res:String = self.session.query(":TIM:SCAL?")?;
		parse_f64(&res)
	}

	// Effective record length in samples.  The scope reports AUTO instead of a number
	// when the depth is derived from the timebase, in which case the record covers the
	// full grid width at the current sample rate.  Re-queried on every call because the
	// depth can change between acquisitions.
	pub fn memory_depth(&mut self) -> io::Result<f64> {
		let mdep:String = self.session.query(":ACQ:MDEP?")?;

		if mdep.trim() == "AUTO" {
			let sample_rate:f64 = self.get_sample_rate()?;
			let time_scale:f64  = self.get_time_scale()?;
			Ok(H_GRID * time_scale * sample_rate)
		} else {
			parse_f64(&mdep)
		}
	}

	pub fn get_waveform_start(&mut self) -> io::Result<u64> {
		let res:String = self.session.query(":WAV:STAR?")?;
		parse_u64(&res)
	}

	pub fn get_waveform_stop(&mut self) -> io::Result<u64> {
		let res:String = self.session.query(":WAV:STOP?")?;
		parse_u64(&res)
	}

	// Writes a start/stop pair in an order that never leaves a transient start > stop
	// pair on the device.  `cur_start` is whatever the device's start register held
	// before this call.
	fn apply_window(&mut self, start:u64, stop:u64, cur_start:u64) -> io::Result<()> {
		if stop < cur_start {
			self.write_settled(&format!(":WAV:STAR {}", start))?;
			self.write_settled(&format!(":WAV:STOP {}", stop))
		} else {
			self.write_settled(&format!(":WAV:STOP {}", stop))?;
			self.write_settled(&format!(":WAV:STAR {}", start))
		}
	}

	// Negotiates the transfer window with the device and returns the stop index the
	// device actually accepted.  Returns Ok(0) without touching the device when the
	// requested window is invalid; callers must treat that as a logic error.
	//
	// The scope clamps the stop register to the record length without reporting it.
	// When that happens the original window is restored (one iterative attempt, no
	// retries) before the clamped stop is returned, so an early-terminating caller
	// never leaves a half-set window behind.
	pub fn set_waveform_window(&mut self, start:u64, stop:u64) -> io::Result<u64> {
		if start < 1 || stop < 1 || start > stop {
			return Ok(0);
		}

		let cur_start:u64 = self.get_waveform_start()?;
		let cur_stop:u64  = self.get_waveform_stop()?;

		self.apply_window(start, stop, cur_start)?;
		let confirmed:u64 = self.get_waveform_stop()?;

		if confirmed < stop {
			self.apply_window(cur_start, cur_stop, start)?;

			let restored:u64 = self.get_waveform_stop()?;
			if restored != cur_stop {
				return Err(err(&format!("Window rollback to [{}, {}] failed (stop reads back as {}); device window state is unknown", cur_start, cur_stop, restored)));
			}

			debug!("window [{}, {}] clamped to stop {}", start, stop, confirmed);
		}

		Ok(confirmed)
	}

	fn transfer_chunk(&mut self) -> io::Result<Vec<u8>> {
		let raw:Vec<u8> = self.session.query_binary(":WAV:DATA?")?;
		Ok(block::decode(&raw)?.to_vec())
	}

	// Pulls the source's entire record in windows of at most max_chunk samples and
	// returns the decoded payload of each transfer
	fn acquire_record(&mut self, source:Source, format:Format, mode:Mode) -> io::Result<Vec<Vec<u8>>> {
		let depth:u64 = self.memory_depth()?.round() as u64;
		if depth == 0 {
			return Ok(vec![]);
		}

		self.write_settled(&format!(":WAV:SOUR {}", source.scpi_name()))?;
		self.write_settled(&format!(":WAV:FORM {}", format.scpi_name()))?;
		self.write_settled(&format!(":WAV:MODE {}", mode.scpi_name()))?;

		let chunk:u64 = cmp::min(self.max_chunk, depth);
		let mut chunks:Vec<Vec<u8>> = vec![];
		let mut start:u64 = 1;
		let mut stop:u64  = chunk;

		loop {
			let confirmed:u64 = self.set_waveform_window(start, stop)?;

			if confirmed == 0 {
				return Err(err(&format!("Invalid waveform window [{}, {}] while reading {}", start, stop, source.scpi_name())));
			}
			if confirmed < start {
				// The stop register fell behind our start; nothing left in the record
				break;
			}
			if confirmed < stop {
				// Final partial chunk; pin the exact window before transferring
				if self.set_waveform_window(start, confirmed)? != confirmed {
					return Err(err(&format!("Unable to pin final window [{}, {}] while reading {}", start, confirmed, source.scpi_name())));
				}
				chunks.push(self.transfer_chunk()?);
				break;
			}

			chunks.push(self.transfer_chunk()?);
			start = confirmed + 1;
			stop  = confirmed + chunk;
		}

		debug!("read {} samples from {} in {} chunks", depth, source.scpi_name(), chunks.len());

		Ok(chunks)
	}

	// Full record as ASCII sample values, chunks joined with a comma so the result is
	// one flat comma-separated sequence
	pub fn read_waveform_data(&mut self, source:Source, mode:Mode) -> io::Result<String> {
		let chunks:Vec<Vec<u8>> = self.acquire_record(source, Format::Ascii, mode)?;

		let mut pieces:Vec<String> = Vec::with_capacity(chunks.len());
		for chunk in &chunks {
			match str::from_utf8(chunk) {
				Ok(s)  => pieces.push(s.trim().to_owned()),
				Err(_) => return Err(err(&format!("Waveform chunk from {} is not valid UTF-8 text", source.scpi_name()))),
			}
		}

		Ok(pieces.join(","))
	}

	// Full record as raw sample bytes
	pub fn read_waveform_bytes(&mut self, source:Source, mode:Mode) -> io::Result<Vec<u8>> {
		let chunks:Vec<Vec<u8>> = self.acquire_record(source, Format::Byte, mode)?;
		Ok(chunks.concat())
	}

	// Full record scaled to volts using the preamble of the transfer we just made
	pub fn read_waveform_samples(&mut self, source:Source, mode:Mode) -> io::Result<Vec<f64>> {
		let raw:Vec<u8> = self.read_waveform_bytes(source, mode)?;
		let pre:Preamble = self.waveform_preamble()?;

		Ok(raw.iter().map(|&b| (b as f64 - pre.y_origin - pre.y_reference) * pre.y_increment).collect())
	}

	pub fn waveform_preamble(&mut self) -> io::Result<Preamble> {
		let res:String = self.session.query(":WAV:PRE?")?;
		let fields:Vec<&str> = res.trim().split(',').collect();

		if fields.len() != 10 {
			return Err(err(&format!("Expected 10 fields in the waveform preamble but got {}", fields.len())));
		}

		Ok(Preamble{
			format:      parse_u64(fields[0])? as u8,
			wave_type:   parse_u64(fields[1])? as u8,
			points:      parse_u64(fields[2])?,
			count:       parse_u64(fields[3])? as u32,
			x_increment: parse_f64(fields[4])?,
			x_origin:    parse_f64(fields[5])?,
			x_reference: parse_f64(fields[6])?,
			y_increment: parse_f64(fields[7])?,
			y_origin:    parse_f64(fields[8])?,
			y_reference: parse_f64(fields[9])?,
		})
	}

	// One CSV blob for any set of sources: a header row of channel names and one row
	// per sample index, with empty fields where a channel's record ran out
	pub fn get_csv(&mut self, sources:&[Source], mode:Mode) -> io::Result<String> {
		let mut csv_table = CsvTable::new();

		for &source in sources {
			let data:String = self.read_waveform_data(source, mode)?;
			let points:Vec<String> = if data.is_empty() {
				vec![]
			} else {
				data.split(',').map(|s| s.to_owned()).collect()
			};
			csv_table.push_channel(source.scpi_name(), points);
		}

		Ok(csv_table.render())
	}

	// PNG image of the current display
	pub fn screenshot(&mut self) -> io::Result<Vec<u8>> {
		let raw:Vec<u8> = self.session.query_binary(":DISP:DATA? ON,OFF,PNG")?;
		Ok(block::decode(&raw)?.to_vec())
	}

	pub fn get_full_state(&mut self) -> io::Result<State> {
		let str_idn:String      = self.session.query("*IDN?")?;
		let caps_idn:Captures   = IDN_RE.captures(&str_idn).ok_or_else(|| err("No match for *IDN? response"))?;
		let manufacturer:String = match_str(caps_idn.get(1), "No match for manufacturer")?;
		let model:String        = match_str(caps_idn.get(2), "No match for model")?;
		let serial_num:String   = match_str(caps_idn.get(3), "No match for serial_num")?;
		let fw_version:String   = match_str(caps_idn.get(4), "No match for fw_version")?;

		let time_scale:f64   = self.get_time_scale()?;
		let sample_rate:f64  = self.get_sample_rate()?;
		let memory_depth:f64 = self.memory_depth()?;

		let state = State{ manufacturer, model, serial_num, fw_version, time_scale, sample_rate, memory_depth };
		self.state = Some(state.clone());

		Ok(state)
	}

}

#[cfg(test)]
mod tests {

	use super::*;

	// Stands in for the scope behind the Session seam.  Models the behavior the driver
	// has to cope with: the stop register silently clamps to the record length, and
	// readbacks always reflect the registers as the device holds them.
	struct SimScope {
		record_len: u64,
		start: u64,
		stop: u64,
		mdep_reply: String,
		sample_rate: f64,
		time_scale: f64,
		format: String,
		writes: Vec<String>,
		data_requests: usize,
		// When set, the record shrinks to this length right after the next clamped
		// stop write, as if the acquisition restarted mid-transfer
		shrink_on_clamp: Option<u64>,
	}

	impl SimScope {

		fn new(record_len:u64) -> Self {
			SimScope{
				record_len,
				start: 1,
				stop: record_len.max(1),
				mdep_reply: record_len.to_string(),
				sample_rate: 1e9,
				time_scale: 1e-3,
				format: "ASC".to_owned(),
				writes: vec![],
				data_requests: 0,
				shrink_on_clamp: None,
			}
		}

		fn scope(self) -> DS1054Z<SimScope> {
			let mut dev = DS1054Z::with_session(self);
			dev.set_settle_duration(Duration::from_secs(0));
			dev
		}

	}

	impl Session for SimScope {

		fn write(&mut self, cmd:&str) -> io::Result<()> {
			self.writes.push(cmd.to_owned());

			if cmd.starts_with(":WAV:STAR ") {
				self.start = cmd[10..].parse().unwrap();
			} else if cmd.starts_with(":WAV:STOP ") {
				let requested:u64 = cmd[10..].parse().unwrap();
				// The silent clamp: the device never holds a stop beyond its record
				self.stop = cmp::min(requested, self.record_len);
				if requested > self.record_len {
					if let Some(n) = self.shrink_on_clamp.take() {
						self.record_len = n;
					}
				}
			} else if cmd.starts_with(":WAV:FORM ") {
				self.format = cmd[10..].to_owned();
			}

			Ok(())
		}

		fn query(&mut self, cmd:&str) -> io::Result<String> {
			match cmd {
				"*IDN?"      => Ok("RIGOL TECHNOLOGIES,DS1054Z,DS1ZA000000001,00.04.04.SP4".to_owned()),
				":WAV:STAR?" => Ok(self.start.to_string()),
				":WAV:STOP?" => Ok(self.stop.to_string()),
				":ACQ:MDEP?" => Ok(self.mdep_reply.clone()),
				":ACQ:SRAT?" => Ok(format!("{:e}", self.sample_rate)),
				":TIM:SCAL?" => Ok(format!("{:e}", self.time_scale)),
				":WAV:PRE?"  => Ok("0,0,1200,1,1.0e-09,-6.0e-06,0,4.0e-01,25,127".to_owned()),
				_            => Err(err(&format!("Unexpected query: {}", cmd))),
			}
		}

		fn query_binary(&mut self, cmd:&str) -> io::Result<Vec<u8>> {
			if cmd == ":DISP:DATA? ON,OFF,PNG" {
				return block::encode(b"PNGDATA", 9);
			}
			if cmd != ":WAV:DATA?" {
				return Err(err(&format!("Unexpected binary query: {}", cmd)));
			}

			self.data_requests += 1;

			let payload:Vec<u8> = if self.format == "BYTE" {
				(self.start..=self.stop).map(|i| (i % 256) as u8).collect()
			} else {
				(self.start..=self.stop)
					.map(|i| i.to_string())
					.collect::<Vec<String>>()
					.join(",")
					.into_bytes()
			};

			block::encode(&payload, 9)
		}

	}

	#[test]
	fn negotiate_verbatim_accept() -> io::Result<()> {
		let mut dev = SimScope::new(1_000_000).scope();

		assert_eq!(dev.set_waveform_window(10, 500)?, 500);
		assert_eq!(dev.session.start, 10);
		assert_eq!(dev.session.stop, 500);

		Ok(())
	}

	#[test]
	fn negotiate_clamp_restores_original_window() -> io::Result<()> {
		let mut sim = SimScope::new(250_000);
		sim.start = 1;
		sim.stop = 1200;
		let mut dev = sim.scope();

		assert_eq!(dev.set_waveform_window(1, 300_000)?, 250_000);

		// Rollback must be exact
		assert_eq!(dev.session.start, 1);
		assert_eq!(dev.session.stop, 1200);

		Ok(())
	}

	#[test]
	fn failed_rollback_is_a_fatal_error() {
		let mut sim = SimScope::new(250_000);
		sim.stop = 1200;
		// The record shrinks between the clamped negotiation and the restore, so the
		// rollback readback can't match the original stop
		sim.shrink_on_clamp = Some(500);
		let mut dev = sim.scope();

		let e = dev.set_waveform_window(1, 300_000).unwrap_err();
		assert!(e.to_string().contains("rollback to [1, 1200]"));
		assert!(e.to_string().contains("unknown"));
	}

	#[test]
	fn negotiate_invalid_window_is_a_noop() -> io::Result<()> {
		let mut dev = SimScope::new(1000).scope();

		assert_eq!(dev.set_waveform_window(5, 3)?, 0);
		assert_eq!(dev.set_waveform_window(0, 10)?, 0);
		assert!(dev.session.writes.is_empty());

		Ok(())
	}

	#[test]
	fn acquisition_runs_in_three_chunks() -> io::Result<()> {
		let mut dev = SimScope::new(250_000).scope();

		let data:String = dev.read_waveform_data(Source::Chan1, Mode::Raw)?;

		assert_eq!(dev.session.data_requests, 3);

		let values:Vec<&str> = data.split(',').collect();
		assert_eq!(values.len(), 250_000);
		assert_eq!(values[0], "1");
		assert_eq!(values[99_999], "100000");
		assert_eq!(values[100_000], "100001");
		assert_eq!(values[249_999], "250000");

		assert!(dev.session.writes.contains(&":WAV:SOUR CHAN1".to_owned()));
		assert!(dev.session.writes.contains(&":WAV:FORM ASC".to_owned()));
		assert!(dev.session.writes.contains(&":WAV:MODE RAW".to_owned()));

		Ok(())
	}

	#[test]
	fn acquisition_of_exact_chunk_multiple() -> io::Result<()> {
		let mut dev = SimScope::new(200_000).scope();

		let data:String = dev.read_waveform_data(Source::Chan2, Mode::Normal)?;

		// Two full chunks; the third negotiation comes back below our start and ends the loop
		assert_eq!(dev.session.data_requests, 2);
		assert_eq!(data.split(',').count(), 200_000);

		Ok(())
	}

	#[test]
	fn acquisition_smaller_than_one_chunk() -> io::Result<()> {
		let mut dev = SimScope::new(1200).scope();

		let data:String = dev.read_waveform_data(Source::Math, Mode::Normal)?;

		assert_eq!(dev.session.data_requests, 1);
		assert_eq!(data.split(',').count(), 1200);

		Ok(())
	}

	#[test]
	fn depth_auto_is_derived_from_timebase() -> io::Result<()> {
		let mut sim = SimScope::new(0);
		sim.mdep_reply = "AUTO".to_owned();
		sim.time_scale = 0.001;
		sim.sample_rate = 1e9;
		let mut dev = sim.scope();

		assert_eq!(dev.memory_depth()?, 12_000_000.0);

		Ok(())
	}

	#[test]
	fn depth_literal_reply() -> io::Result<()> {
		let mut dev = SimScope::new(6_000_000).scope();
		assert_eq!(dev.memory_depth()?, 6_000_000.0);
		Ok(())
	}

	#[test]
	fn csv_for_two_channels() -> io::Result<()> {
		let mut dev = SimScope::new(5).scope();

		let csv:String = dev.get_csv(&[Source::Chan1, Source::Chan2], Mode::Normal)?;
		let rows:Vec<&str> = csv.lines().collect();

		assert_eq!(rows.len(), 6);
		assert_eq!(rows[0], "CHAN1,CHAN2");
		assert_eq!(rows[1], "1,1");
		assert_eq!(rows[5], "5,5");

		Ok(())
	}

	#[test]
	fn byte_format_samples_scale_through_preamble() -> io::Result<()> {
		let mut dev = SimScope::new(4).scope();

		let samples:Vec<f64> = dev.read_waveform_samples(Source::Chan1, Mode::Normal)?;

		// y_origin 25, y_reference 127, y_increment 0.4
		assert_eq!(samples.len(), 4);
		for (idx, sample) in samples.iter().enumerate() {
			let expected:f64 = ((idx + 1) as f64 - 25.0 - 127.0) * 0.4;
			assert!((sample - expected).abs() < 1e-9);
		}

		Ok(())
	}

	#[test]
	fn screenshot_unwraps_the_block_envelope() -> io::Result<()> {
		let mut dev = SimScope::new(1).scope();
		assert_eq!(dev.screenshot()?, b"PNGDATA".to_vec());
		Ok(())
	}

	#[test]
	fn full_state_snapshot() -> io::Result<()> {
		let mut dev = SimScope::new(12000).scope();

		let state:State = dev.get_full_state()?;

		assert_eq!(state.manufacturer, "RIGOL TECHNOLOGIES");
		assert_eq!(state.model, "DS1054Z");
		assert_eq!(state.memory_depth, 12000.0);
		assert!(dev.state.is_some());

		Ok(())
	}

	#[test]
	fn preamble_fields() -> io::Result<()> {
		let mut dev = SimScope::new(1).scope();

		let pre:Preamble = dev.waveform_preamble()?;

		assert_eq!(pre.points, 1200);
		assert_eq!(pre.count, 1);
		assert!((pre.y_increment - 0.4).abs() < 1e-12);
		assert_eq!(pre.y_reference, 127.0);

		Ok(())
	}

	#[test]
	fn scalar_helpers_issue_single_writes() -> io::Result<()> {
		let mut dev = SimScope::new(1).scope();

		dev.stop()?;
		dev.single()?;
		dev.force_trigger()?;
		dev.run()?;

		assert_eq!(dev.session.writes, vec![":STOP", ":SING", ":TFOR", ":RUN"]);

		Ok(())
	}

	#[test]
	fn source_names_round_trip() {
		for source in Source::ALL_ANALOG.iter() {
			assert_eq!(Source::from_scpi_name(source.scpi_name()), Some(*source));
		}
		assert_eq!(Source::from_scpi_name("MATH"), Some(Source::Math));
		assert_eq!(Source::from_scpi_name("CHAN5"), None);
	}

}
