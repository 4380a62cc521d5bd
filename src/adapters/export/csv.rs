use csv::WriterBuilder;

use super::{row, HEADERS};
use crate::domain::model::GlobalClassification;
use crate::utils::error::{Result, StripError};

pub fn render(classification: &GlobalClassification, delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(HEADERS)?;
    for (index, team) in classification.teams.iter().enumerate() {
        writer.write_record(row(index + 1, team))?;
    }

    writer
        .into_inner()
        .map_err(|e| StripError::Io(e.into_error()))
}
