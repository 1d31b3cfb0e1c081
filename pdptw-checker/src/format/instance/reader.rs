#[cfg(test)]
#[path = "../../../tests/unit/format/instance/reader_test.rs"]
mod reader_test;

use crate::format::read_line;
use crate::format::tokenizer::*;
use crate::models::*;
use crate::utils::*;
use std::io::{BufReader, Read};

/// A trait to read PDPTW instance.
pub trait PdptwInstance {
    /// Reads PDPTW instance.
    fn read_pdptw(self) -> Result<Instance, FormatError>;
}

impl<R: Read> PdptwInstance for BufReader<R> {
    fn read_pdptw(self) -> Result<Instance, FormatError> {
        InstanceReader::new(self).read_instance()
    }
}

impl PdptwInstance for String {
    fn read_pdptw(self) -> Result<Instance, FormatError> {
        InstanceReader::new(BufReader::new(self.as_bytes())).read_instance()
    }
}

const NODES_MARKER: &str = "NODES";
const EDGES_MARKER: &str = "EDGES";

struct InstanceReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
    line_no: usize,
    name: Option<String>,
    size: usize,
    capacity: Demand,
    route_time: Option<Timestamp>,
}

impl<R: Read> InstanceReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self { buffer: String::new(), reader, line_no: 0, name: None, size: 0, capacity: 0, route_time: None }
    }

    fn read_instance(mut self) -> Result<Instance, FormatError> {
        self.read_header()?;
        let nodes = self.read_nodes()?;
        let matrix = self.read_edges()?;

        Ok(Instance {
            name: self.name,
            size: self.size,
            capacity: self.capacity,
            route_time: self.route_time,
            nodes,
            matrix,
        })
    }

    /// Reads `KEY: VALUE` lines until `NODES` marker. Unknown keys are ignored.
    fn read_header(&mut self) -> Result<(), FormatError> {
        loop {
            let Some((line_no, line)) = self.read_non_empty_line()? else {
                return Err(missing_marker(NODES_MARKER));
            };

            if line == NODES_MARKER {
                return Ok(());
            }

            let Some((key, value)) = line.split_once(':') else { continue };
            let value = value.trim().to_string();
            let tokens = LineTokens::new(line_no, value.as_str());

            match key.trim() {
                "NAME" => self.name = Some(value.clone()).filter(|name| !name.is_empty()),
                "SIZE" => self.size = tokens.index(0, "SIZE")?,
                "CAPACITY" => self.capacity = tokens.int(0, "CAPACITY")?,
                "ROUTE-TIME" => self.route_time = Some(tokens.int(0, "ROUTE-TIME")?),
                _ => {}
            }
        }
    }

    fn read_nodes(&mut self) -> Result<Vec<Node>, FormatError> {
        let size = self.size;

        (0..size)
            .map(|expected| {
                let (line_no, line) =
                    self.read_non_empty_line()?.ok_or_else(|| end_of_input("node", expected, size))?;
                let tokens = LineTokens::new(line_no, line.as_str());
                let record = NodeRecord::parse(&tokens)?;

                if record.index != expected {
                    return Err(tokens.error(
                        INVALID_INDEX_CODE,
                        format!("unexpected node index {}, expected {expected}", record.index),
                        "nodes must be listed in dense index order starting from depot 0",
                    ));
                }

                let declared_pair = record.declared_pair();
                if let Some(pair) = declared_pair.filter(|pair| *pair >= size) {
                    return Err(tokens.error(
                        INVALID_INDEX_CODE,
                        format!("pair {pair} of node {expected} is out of range"),
                        "pair should refer to existing node",
                    ));
                }

                Ok(Node {
                    index: record.index,
                    location: record.location,
                    demand: record.demand,
                    time_window: TimeWindow::new(record.earliest, record.latest),
                    service: record.service,
                    pair: declared_pair.or_else(|| derive_pair(size, record.index, record.demand)),
                    declared_pair,
                })
            })
            .collect()
    }

    fn read_edges(&mut self) -> Result<Vec<Vec<Duration>>, FormatError> {
        match self.read_non_empty_line()? {
            Some((_, line)) if line == EDGES_MARKER => {}
            _ => return Err(missing_marker(EDGES_MARKER)),
        }

        let size = self.size;
        (0..size)
            .map(|row| {
                let (line_no, line) =
                    self.read_non_empty_line()?.ok_or_else(|| end_of_input("matrix row", row, size))?;

                MatrixRow::parse(&LineTokens::new(line_no, line.as_str()), size)
            })
            .collect()
    }

    /// Returns next non-empty trimmed line with its number or `None` at the end of input.
    fn read_non_empty_line(&mut self) -> Result<Option<(usize, String)>, FormatError> {
        loop {
            let read = read_line(&mut self.reader, &mut self.buffer)?;
            if read == 0 {
                return Ok(None);
            }

            self.line_no += 1;
            let line = self.buffer.trim();
            if !line.is_empty() {
                return Ok(Some((self.line_no, line.to_string())));
            }
        }
    }
}

fn missing_marker(marker: &str) -> FormatError {
    FormatError::new(
        MISSING_MARKER_CODE,
        format!("'{marker}' section marker is absent"),
        format!("add '{marker}' line before section data"),
    )
}

fn end_of_input(record: &str, consumed: usize, expected: usize) -> FormatError {
    FormatError::new(
        END_OF_INPUT_CODE,
        format!("input ends after {consumed} {record} lines, expected {expected}"),
        "check that file is not truncated and SIZE is correct".to_string(),
    )
}
