
// Assembles per-channel point sequences into one rectangular CSV table.  Channels
// are collected first and padded at render time, so channels of unequal record
// length just leave empty fields in the shorter columns.

pub struct CsvTable {
	channels: Vec<(String, Vec<String>)>,
}

impl CsvTable {

	pub fn new() -> Self { CsvTable{ channels: vec![] } }

	// Column order in the output is the order channels were pushed
	pub fn push_channel(&mut self, name:&str, points:Vec<String>) {
		self.channels.push((name.to_owned(), points));
	}

	pub fn render(&self) -> String {
		let header:String = self.channels.iter()
			.map(|(name, _)| name.as_str())
			.collect::<Vec<&str>>()
			.join(",");

		let n_rows:usize = self.channels.iter().map(|(_, points)| points.len()).max().unwrap_or(0);

		let mut ans:String = header;
		ans.push('\n');

		for row_idx in 0..n_rows {
			let row:String = self.channels.iter()
				.map(|(_, points)| points.get(row_idx).map(|p| p.as_str()).unwrap_or(""))
				.collect::<Vec<&str>>()
				.join(",");
			ans.push_str(&row);
			ans.push('\n');
		}

		ans
	}

}

#[cfg(test)]
mod tests {

	use super::*;

	fn points(vals:&[&str]) -> Vec<String> {
		vals.iter().map(|v| v.to_string()).collect()
	}

	#[test]
	fn ragged_channels_are_padded_with_empty_fields() {
		let mut table = CsvTable::new();
		table.push_channel("CHAN1", points(&["1.0", "2.0", "3.0"]));
		table.push_channel("CHAN2", points(&["a", "b", "c", "d", "e"]));

		let rendered:String = table.render();
		let rows:Vec<&str> = rendered.lines().collect();
		assert_eq!(rows.len(), 6);
		assert_eq!(rows[0], "CHAN1,CHAN2");
		assert_eq!(rows[1], "1.0,a");
		assert_eq!(rows[3], "3.0,c");
		assert_eq!(rows[4], ",d");
		assert_eq!(rows[5], ",e");
	}

	#[test]
	fn render_is_idempotent() {
		let mut table = CsvTable::new();
		table.push_channel("CHAN1", points(&["1", "2"]));
		table.push_channel("MATH", points(&["9"]));

		assert_eq!(table.render(), table.render());
	}

	#[test]
	fn empty_table_is_just_an_empty_header() {
		assert_eq!(CsvTable::new().render(), "\n");
	}

	#[test]
	fn single_channel() {
		let mut table = CsvTable::new();
		table.push_channel("CHAN3", points(&["-1", "0", "1"]));
		assert_eq!(table.render(), "CHAN3\n-1\n0\n1\n");
	}

}
