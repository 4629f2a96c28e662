use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::ScrapeError;
use crate::models::JobRecord;

pub const HEADER: [&str; 3] = ["id", "title", "location"];

/// Row shape of the CSV file. `salary` is intentionally not a column.
#[derive(Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    title: &'a str,
    location: &'a str,
}

impl<'a> From<&'a JobRecord> for CsvRow<'a> {
    fn from(job: &'a JobRecord) -> Self {
        Self {
            id: job.id(),
            title: job.title(),
            location: job.location(),
        }
    }
}

/// Create (or truncate) `path` and write every record to it.
///
/// A failure part way through can leave a truncated file behind.
pub fn write_records(path: &Path, jobs: &[JobRecord]) -> Result<(), ScrapeError> {
    let output_err = |source: csv::Error| ScrapeError::Output {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|err| output_err(err.into()))?;
    write_csv(file, jobs).map_err(output_err)?;

    info!("💾 Saved {} jobs to {}", jobs.len(), path.display());
    Ok(())
}

/// Header row, then one three-column row per record in order
pub fn write_csv<W: Write>(writer: W, jobs: &[JobRecord]) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(HEADER)?;
    for job in jobs {
        wtr.serialize(CsvRow::from(job))?;
    }
    wtr.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_jobs() -> Vec<JobRecord> {
        vec![
            JobRecord::new("12345", "Python 백엔드 개발자", "서울 강남구"),
            JobRecord::new("67890", "Data engineer, \"senior\"", "경기 성남시"),
            JobRecord::new("", "", ""),
        ]
    }

    fn to_string(jobs: &[JobRecord]) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, jobs).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_list_writes_only_header() {
        assert_eq!(to_string(&[]), "id,title,location\n");
    }

    #[test]
    fn one_line_per_record_plus_header() {
        let jobs = sample_jobs();
        let output = to_string(&jobs);

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(output.as_bytes());
        let rows: Vec<csv::StringRecord> = rdr.records().collect::<Result<_, _>>().unwrap();

        assert_eq!(output.lines().count(), jobs.len() + 1);
        assert_eq!(rows.len(), jobs.len() + 1);
        assert!(rows.iter().all(|row| row.len() == 3));
    }

    #[test]
    fn embedded_commas_and_quotes_are_escaped() {
        let output = to_string(&sample_jobs());
        let line = output.lines().nth(2).unwrap();

        assert_eq!(line, r#"67890,"Data engineer, ""senior""",경기 성남시"#);
    }

    #[test]
    fn file_round_trips_through_csv_reader() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jobs.csv");
        let jobs = vec![
            JobRecord::new("1", "Python  개발자\n(신입)", " 서울 "),
            JobRecord::new("2", "ML, \"NLP\" 엔지니어", "부산"),
        ];

        write_records(&path, &jobs).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let header: Vec<&str> = rdr.headers().unwrap().iter().collect();
        assert_eq!(header, HEADER);

        let back: Vec<JobRecord> = rdr
            .records()
            .map(|row| {
                let row = row.unwrap();
                JobRecord::new(&row[0], &row[1], &row[2])
            })
            .collect();
        assert_eq!(back, jobs);
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jobs.csv");
        std::fs::write(&path, "stale,data,here\nmore,stale,rows\n").unwrap();

        write_records(&path, &[JobRecord::new("9", "t", "l")]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "id,title,location\n9,t,l\n");
    }

    #[test]
    fn unwritable_path_is_an_output_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("jobs.csv");

        let err = write_records(&path, &sample_jobs()).unwrap_err();
        assert!(matches!(err, ScrapeError::Output { .. }));
    }
}
