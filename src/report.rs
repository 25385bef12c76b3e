use std::path::Path;

use anyhow::Context;
use rust_xlsxwriter::{Format, Workbook};

use crate::movie::{Field, NormalizedFieldMap};

pub const COLUMN_COUNT: usize = 14;

pub const ENGLISH_HEADER: [&str; COLUMN_COUNT] = [
    "Name",
    "Rating",
    "Remarks",
    "Director",
    "Genre",
    "Lead Actor",
    "Supporting Actor",
    "Release Year",
    "Duration",
    "Pace",
    "Accessibility",
    "Violence/Scariness",
    "Award",
    "Production Country",
];

pub const FRENCH_HEADER: [&str; COLUMN_COUNT] = [
    "Nom",
    "Note",
    "Remarques",
    "Réalisateur",
    "Style/Genre",
    "Acteur principal",
    "Second rôle",
    "Année de sortie",
    "Durée",
    "Rythme",
    "Accessibilité",
    "Violence/Effrayant",
    "Récompense Oscar etc",
    "Pays producteur",
];

const SHEET_NAME: &str = "Movies";

/// One report line. Cells the data has nothing for stay `None` and are written empty.
pub type OutputRow = [Option<String>; COLUMN_COUNT];

/// Vocabulary of the report's header row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum HeaderLanguage {
    En,
    Fr,
}

impl HeaderLanguage {
    pub fn header(self) -> [&'static str; COLUMN_COUNT] {
        match self {
            HeaderLanguage::En => ENGLISH_HEADER,
            HeaderLanguage::Fr => FRENCH_HEADER,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportTable {
    pub header: [&'static str; COLUMN_COUNT],
    pub rows: Vec<OutputRow>,
}

impl ReportTable {
    pub fn from_movies(language: HeaderLanguage, movies: &[(String, NormalizedFieldMap)]) -> Self {
        ReportTable {
            header: language.header(),
            rows: movies
                .iter()
                .map(|(title, movie)| project(title, movie))
                .collect(),
        }
    }
}

/// Lay a movie out along the report columns.
///
/// Rating, remarks, pace, accessibility, violence and award have no source on the page
/// and are left for the reader to fill in.
pub fn project(title: &str, movie: &NormalizedFieldMap) -> OutputRow {
    let at = |field, index| movie.value_at(field, index).map(str::to_string);
    [
        Some(title.to_string()),
        None,
        None,
        at(Field::Director, 0),
        at(Field::Genre, 0),
        at(Field::Starring, 0),
        at(Field::Starring, 1),
        at(Field::ReleaseDate, 0),
        convert_duration(movie.value_at(Field::RunningTime, 0)),
        None,
        None,
        None,
        None,
        at(Field::ProductionCountry, 0),
    ]
}

/// Render a running time such as "154 minutes" as "2h34", or "45 min" as "45mins".
///
/// Only the leading number is read. Anything unparsable, and zero, is `None`.
pub fn convert_duration(duration: Option<&str>) -> Option<String> {
    let duration = duration?.replace('\u{a0}', " ");
    let minutes: u32 = duration.split(' ').next()?.parse().ok()?;
    match (minutes / 60, minutes % 60) {
        (0, 0) => None,
        (0, mins) => Some(format!("{mins:02}mins")),
        (hours, mins) => Some(format!("{hours}h{mins:02}")),
    }
}

/// Persist `table` to `path`: CSV when the extension says so, XLSX otherwise.
pub fn write(table: &ReportTable, path: &Path) -> anyhow::Result<()> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let written = if is_csv {
        write_csv(table, path)
    } else {
        write_xlsx(table, path)
    };
    written.with_context(|| format!("failed to write report to {}", path.display()))
}

fn write_xlsx(table: &ReportTable, path: &Path) -> anyhow::Result<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let worksheet = workbook.add_worksheet().set_name(SHEET_NAME)?;

    for (col, name) in table.header.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &bold)?;
    }
    for (r, row) in table.rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            if let Some(value) = cell {
                worksheet.write_string(r as u32 + 1, col as u16, value)?;
            }
        }
    }
    workbook.save(path)?;
    Ok(())
}

fn write_csv(table: &ReportTable, path: &Path) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(table.header)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or_default()))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use calamine::{Data, Reader, Xlsx, open_workbook};

    fn pulp_fiction() -> NormalizedFieldMap {
        let mut movie = NormalizedFieldMap::new(Locale::English);
        movie
            .fields
            .insert(Field::Director, vec!["Quentin Tarantino".into()]);
        movie.fields.insert(
            Field::Starring,
            vec!["John Travolta".into(), "Samuel L. Jackson".into(), "Uma Thurman".into()],
        );
        movie.fields.insert(Field::ReleaseDate, vec!["1994".into()]);
        movie
            .fields
            .insert(Field::RunningTime, vec!["154\u{a0}minutes".into()]);
        movie
            .fields
            .insert(Field::ProductionCountry, vec!["United States".into()]);
        movie
    }

    #[test]
    fn duration_formats() {
        assert_eq!(convert_duration(Some("125")).as_deref(), Some("2h05"));
        assert_eq!(convert_duration(Some("90 minutes")).as_deref(), Some("1h30"));
        assert_eq!(convert_duration(Some("45")).as_deref(), Some("45mins"));
        assert_eq!(convert_duration(Some("5 min")).as_deref(), Some("05mins"));
        assert_eq!(convert_duration(Some("120\u{a0}minutes")).as_deref(), Some("2h00"));
        assert_eq!(convert_duration(Some("0")), None);
        assert_eq!(convert_duration(Some("two hours")), None);
        assert_eq!(convert_duration(Some("")), None);
        assert_eq!(convert_duration(None), None);
    }

    #[test]
    fn projects_fields_into_their_columns() {
        let row = project("Pulp Fiction", &pulp_fiction());
        let expected: OutputRow = [
            Some("Pulp Fiction".into()),
            None,
            None,
            Some("Quentin Tarantino".into()),
            None,
            Some("John Travolta".into()),
            Some("Samuel L. Jackson".into()),
            Some("1994".into()),
            Some("2h34".into()),
            None,
            None,
            None,
            None,
            Some("United States".into()),
        ];
        assert_eq!(row, expected);
    }

    #[test]
    fn empty_movie_still_fills_every_column() {
        let row = project("Unknown", &NormalizedFieldMap::new(Locale::French));
        assert_eq!(row.len(), COLUMN_COUNT);
        assert_eq!(row[0].as_deref(), Some("Unknown"));
        assert!(row[1..].iter().all(Option::is_none));
    }

    #[test]
    fn single_actor_leaves_supporting_empty() {
        let mut movie = NormalizedFieldMap::new(Locale::English);
        movie.fields.insert(Field::Starring, vec!["Tom Hanks".into()]);
        let row = project("Cast Away", &movie);
        assert_eq!(row[5].as_deref(), Some("Tom Hanks"));
        assert_eq!(row[6], None);
    }

    #[test]
    fn table_uses_requested_header() {
        let movies = vec![("Pulp Fiction".to_string(), pulp_fiction())];
        let table = ReportTable::from_movies(HeaderLanguage::En, &movies);
        assert_eq!(table.header, ENGLISH_HEADER);
        assert_eq!(table.rows.len(), 1);

        let table = ReportTable::from_movies(HeaderLanguage::Fr, &[]);
        assert_eq!(table.header[0], "Nom");
        assert!(table.rows.is_empty());
    }

    #[test]
    fn writes_xlsx_with_header_and_rows() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = dir.path().join("out.xlsx");
        let movies = vec![("Pulp Fiction".to_string(), pulp_fiction())];
        write(&ReportTable::from_movies(HeaderLanguage::En, &movies), &path).unwrap();

        let mut book: Xlsx<_> = open_workbook(&path).expect("open xlsx");
        let range = book.worksheet_range(SHEET_NAME).expect("sheet");
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ENGLISH_HEADER.map(str::to_string));
        assert_eq!(rows[1][0], "Pulp Fiction");
        assert_eq!(rows[1][8], "2h34");
        assert_eq!(rows[1][13], "United States");
        assert!(matches!(range.get((1, 1)), Some(Data::Empty) | None));
    }

    #[test]
    fn writes_csv_when_extension_asks() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = dir.path().join("out.CSV");
        let movies = vec![("Pulp Fiction".to_string(), pulp_fiction())];
        write(&ReportTable::from_movies(HeaderLanguage::En, &movies), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(ENGLISH_HEADER.join(",").as_str()));
        assert_eq!(
            lines.next(),
            Some(
                "Pulp Fiction,,,Quentin Tarantino,,John Travolta,Samuel L. Jackson,\
                 1994,2h34,,,,,United States"
            )
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn write_failure_names_the_path() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = dir.path().join("missing").join("out.csv");
        let err = write(&ReportTable::from_movies(HeaderLanguage::En, &[]), &path).unwrap_err();
        assert!(err.to_string().contains("failed to write report to"));
    }
}
