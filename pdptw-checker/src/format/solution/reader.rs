#[cfg(test)]
#[path = "../../../tests/unit/format/solution/reader_test.rs"]
mod reader_test;

use crate::format::read_line;
use crate::models::*;
use crate::utils::FormatError;
use std::io::{BufReader, Read};

/// A trait to read solution in SINTEF format.
///
/// The reader is tolerant as solution files come from different producers:
/// * the first five lines are a metadata header, only instance name is kept
/// * each subsequent line with `:` is a route, text after the first `:` is a visit order
/// * lines without `:` are skipped
/// * route line with a token which is not a node index becomes an empty route and is
///   recorded in [`Solution::malformed`], following lines are still read
///
/// Only a failure of underlying reader is returned as error.
pub trait SintefSolution {
    /// Reads SINTEF solution.
    fn read_sintef(self) -> Result<Solution, FormatError>;
}

impl<R: Read> SintefSolution for BufReader<R> {
    fn read_sintef(self) -> Result<Solution, FormatError> {
        read_sintef_solution(self)
    }
}

impl SintefSolution for String {
    fn read_sintef(self) -> Result<Solution, FormatError> {
        read_sintef_solution(BufReader::new(self.as_bytes()))
    }
}

/// Amount of metadata lines before routes.
pub(crate) const HEADER_SIZE: usize = 5;

const INSTANCE_NAME_KEY: &str = "Instance name";

fn read_sintef_solution<R: Read>(mut reader: BufReader<R>) -> Result<Solution, FormatError> {
    let mut buffer = String::new();
    let mut solution = Solution::default();
    let mut line_no = 0;

    while read_line(&mut reader, &mut buffer)? > 0 {
        line_no += 1;

        let Some((key, value)) = buffer.split_once(':') else { continue };

        if line_no <= HEADER_SIZE {
            if key.trim() == INSTANCE_NAME_KEY {
                solution.instance_name = Some(value.trim().to_string()).filter(|name| !name.is_empty());
            }
            continue;
        }

        let route = value.split_whitespace().map(|token| token.parse::<NodeIndex>()).collect::<Result<Vec<_>, _>>();

        match route {
            Ok(stops) => solution.routes.push(Route::new(stops)),
            Err(_) => {
                solution.malformed.push(MalformedRoute {
                    route_index: solution.routes.len(),
                    line_no,
                    content: buffer.trim_end().to_string(),
                });
                solution.routes.push(Route::empty());
            }
        }
    }

    Ok(solution)
}
