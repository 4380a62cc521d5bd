use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};

use super::HEADERS;
use crate::domain::model::GlobalClassification;
use crate::utils::error::Result;

const SHEET_NAME: &str = "Classificació";
const COLUMN_WIDTH: f64 = 15.0;

pub fn render(classification: &GlobalClassification) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xD3D3D3))
        .set_align(FormatAlign::Center);

    for (col, title) in HEADERS.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *title, &header)?;
        worksheet.set_column_width(col, COLUMN_WIDTH)?;
    }

    for (index, team) in classification.teams.iter().enumerate() {
        let row = (index + 1) as u32;
        let stats = &team.stats;

        worksheet.write_number(row, 0, (index + 1) as f64)?;
        worksheet.write_string(row, 1, &stats.name)?;
        worksheet.write_number(row, 2, stats.points_percentage.trunc())?;
        worksheet.write_number(row, 3, stats.total_points)?;
        worksheet.write_string(row, 4, &team.group)?;
        worksheet.write_number(row, 5, stats.position)?;
        worksheet.write_number(row, 6, stats.matches_played)?;
        worksheet.write_number(row, 7, stats.matches_won)?;
        worksheet.write_number(row, 8, stats.matches_lost)?;
        worksheet.write_number(row, 9, stats.sets_for)?;
        worksheet.write_number(row, 10, stats.sets_against)?;
        worksheet.write_number(row, 11, stats.sets_difference() as f64)?;
        worksheet.write_number(row, 12, stats.points_for)?;
        worksheet.write_number(row, 13, stats.points_against)?;
        worksheet.write_number(row, 14, stats.points_difference() as f64)?;
        if let Some(new_group) = stats.new_group {
            worksheet.write_number(row, 15, new_group)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::export::fixtures;

    #[test]
    fn test_renders_a_zip_container() {
        let bytes = render(&fixtures::global()).unwrap();
        // xlsx files are zip archives.
        assert!(bytes.starts_with(b"PK"));
    }
}
