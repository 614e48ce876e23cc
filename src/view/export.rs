//! Streaming column export.

use std::io::{self, Write};

use crate::dynamics::Trajectory;

use super::TrajectoryView;

/// Writes a trajectory as `x,y,z` rows to any byte sink
///
/// The output feeds external 3D plotting tools. Components are written
/// with full float precision so a replot reproduces the curve exactly.
pub struct CsvExport<W: Write> {
    writer: W,
    header: bool,
}

impl<W: Write> CsvExport<W> {
    /// Export to `writer`, emitting an `x,y,z` header row first
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header: true,
        }
    }

    /// Export without the header row
    pub fn headerless(writer: W) -> Self {
        Self {
            writer,
            header: false,
        }
    }
}

impl<W: Write> TrajectoryView for CsvExport<W> {
    fn show(&mut self, trajectory: &Trajectory) -> io::Result<()> {
        if self.header {
            writeln!(self.writer, "x,y,z")?;
        }
        for state in trajectory {
            writeln!(self.writer, "{},{},{}", state.x, state.y, state.z)?;
        }
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::{simulate, LorenzParams, State};

    #[test]
    fn test_one_row_per_state_plus_header() {
        let trajectory = simulate(State::canonical(), 2, 0.01, &LorenzParams::default()).unwrap();

        let mut buffer = Vec::new();
        CsvExport::new(&mut buffer).show(&trajectory).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), trajectory.len() + 1);
        assert_eq!(lines[0], "x,y,z");
        assert_eq!(lines[1], "0,1,1.05");
    }

    #[test]
    fn test_headerless_rows_roundtrip_components() {
        let trajectory = simulate(State::canonical(), 3, 0.01, &LorenzParams::default()).unwrap();

        let mut buffer = Vec::new();
        CsvExport::headerless(&mut buffer).show(&trajectory).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        for (line, state) in text.lines().zip(trajectory.states()) {
            let fields: Vec<f64> = line.split(',').map(|v| v.parse().unwrap()).collect();
            assert_eq!(fields, vec![state.x, state.y, state.z]);
        }
    }
}
