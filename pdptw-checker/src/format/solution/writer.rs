#[cfg(test)]
#[path = "../../../tests/unit/format/solution/writer_test.rs"]
mod writer_test;

use crate::models::*;
use std::io::{BufWriter, Error, Write};

/// Specifies SINTEF solution header fields.
#[derive(Clone, Debug, Default)]
pub struct SolutionMetadata {
    /// An instance name.
    pub instance_name: String,
    /// Solution authors.
    pub authors: String,
    /// A date when solution is found.
    pub date: String,
    /// A reference to publication or tool.
    pub reference: String,
}

/// Writes solution in SINTEF format. Routes without stops are omitted.
pub fn write_sintef_solution<W: Write>(
    writer: BufWriter<W>,
    solution: &Solution,
    metadata: &SolutionMetadata,
) -> Result<(), Error> {
    let mut writer = writer;

    writer.write_all(format!("Instance name : {}\n", metadata.instance_name).as_bytes())?;
    writer.write_all(format!("Authors : {}\n", metadata.authors).as_bytes())?;
    writer.write_all(format!("Date : {}\n", metadata.date).as_bytes())?;
    writer.write_all(format!("Reference : {}\n", metadata.reference).as_bytes())?;
    writer.write_all("Solution\n".as_bytes())?;

    solution.routes.iter().filter(|route| !route.is_empty()).zip(1..).try_for_each(|(route, idx)| {
        let stops = route.stops().iter().map(|node| node.to_string()).collect::<Vec<_>>().join(" ");
        writer.write_all(format!("Route {idx} : {stops}\n").as_bytes())
    })?;

    writer.flush()
}

/// Returns file name which follows SINTEF convention: `<instance>.<vehicles>_<cost>.txt`.
pub fn get_sintef_file_name(instance_name: &str, vehicles: usize, cost: f64) -> String {
    format!("{instance_name}.{vehicles}_{cost:.2}.txt")
}

/// Keeps objective values encoded in SINTEF solution file name.
#[derive(Clone, Debug, PartialEq)]
pub struct SolutionFileName {
    /// An instance name.
    pub instance_name: String,
    /// Amount of used vehicles.
    pub vehicles: usize,
    /// A solution cost.
    pub cost: f64,
}

impl SolutionFileName {
    /// Parses file name like `lc101.10_828.94.txt`. Returns `None` if name does not follow convention.
    pub fn parse(file_name: &str) -> Option<Self> {
        let stem = file_name
            .rsplit_once('.')
            .filter(|(_, extension)| !extension.is_empty() && extension.chars().all(|c| c.is_ascii_alphabetic()))
            .map_or(file_name, |(stem, _)| stem);

        let (head, cost) = stem.rsplit_once('_')?;
        let (instance_name, vehicles) = head.rsplit_once('.')?;

        if instance_name.is_empty() {
            return None;
        }

        Some(Self {
            instance_name: instance_name.to_string(),
            vehicles: vehicles.parse().ok()?,
            cost: cost.parse::<f64>().ok().filter(|cost| cost.is_finite())?,
        })
    }
}
