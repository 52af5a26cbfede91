//! Profile CSV input and ranked CSV output.

use std::path::{Path, PathBuf};

use anyhow::Context;
use bioleadiq_common::Profile;
use bioleadiq_ranker::OutputRow;
use csv::StringRecord;
use tracing::{info, warn};

/// Read the profile source. A missing file, an empty file or a header without
/// a `name` column is fatal. Cells that are not valid UTF-8 are decoded lossily
/// so the row still takes part in scoring.
pub fn read_profiles(path: &Path) -> anyhow::Result<Vec<Profile>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open profile source {}", path.display()))?;

    let headers = reader
        .byte_headers()
        .with_context(|| format!("Profile source {} has no readable header", path.display()))?;
    let headers = StringRecord::from_byte_record_lossy(headers.clone());
    if headers.iter().all(|h| h.trim().is_empty()) {
        anyhow::bail!("Profile source {} is empty", path.display());
    }
    if !headers.iter().any(|h| h == "name") {
        anyhow::bail!("Profile source {} has no `name` column", path.display());
    }

    let mut profiles = Vec::new();
    for (idx, row) in reader.byte_records().enumerate() {
        let decoded = row
            .map(StringRecord::from_byte_record_lossy)
            .map_err(anyhow::Error::from)
            .and_then(|record| record.deserialize::<Profile>(Some(&headers)).map_err(anyhow::Error::from));
        match decoded {
            Ok(profile) => profiles.push(profile),
            Err(e) => warn!(row = idx + 1, error = %e, "Skipping unreadable profile row"),
        }
    }

    info!(profiles = profiles.len(), path = %path.display(), "Profiles loaded");
    Ok(profiles)
}

/// Write rows in rank order and return the absolute output path.
pub fn write_output(path: &Path, rows: &[OutputRow]) -> anyhow::Result<PathBuf> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let absolute = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    Ok(absolute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bioleadiq_test_utils::SAMPLE_PROFILES_CSV;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_sample_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linkedin_profiles.csv");
        std::fs::write(&path, SAMPLE_PROFILES_CSV).unwrap();

        let profiles = read_profiles(&path).unwrap();

        assert_eq!(profiles.len(), 5);
        assert_eq!(profiles[0].name, "Dr. Maya Chen");
        assert_eq!(profiles[0].person_location, "Boston, MA");
        assert_eq!(profiles[4], Profile::default());
    }

    #[test]
    fn test_missing_columns_default_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.csv");
        std::fs::write(&path, "name,title\nX,Director\nY\n").unwrap();

        let profiles = read_profiles(&path).unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].title, "Director");
        assert_eq!(profiles[0].company, "");
        assert_eq!(profiles[1].name, "Y");
        assert_eq!(profiles[1].title, "");
    }

    #[test]
    fn test_empty_profile_source_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.csv");
        std::fs::write(&path, "").unwrap();

        let err = read_profiles(&path).unwrap_err();

        assert!(err.to_string().contains("is empty"));
    }

    #[test]
    fn test_header_without_name_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.csv");
        std::fs::write(&path, "title,company\nDirector,Acme\n").unwrap();

        let err = read_profiles(&path).unwrap_err();

        assert!(err.to_string().contains("`name` column"));
    }

    #[test]
    fn test_invalid_utf8_row_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.csv");
        std::fs::write(&path, b"name,title,company\nX,Dir\xffector,Acme\nY,Engineer,Beta\n").unwrap();

        let profiles = read_profiles(&path).unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].name, "X");
        assert_eq!(profiles[0].title, "Dir\u{FFFD}ector");
        assert_eq!(profiles[0].company, "Acme");
        assert_eq!(profiles[1].name, "Y");
    }

    #[test]
    fn test_missing_profile_source_is_fatal() {
        assert!(read_profiles(Path::new("/no/such/profiles.csv")).is_err());
    }

    #[test]
    fn test_write_output_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.csv");
        let rows = vec![OutputRow {
            rank: 1,
            probability_score: 52.0,
            name: "X".to_string(),
            title: "Director".to_string(),
            company: "Acme".to_string(),
            person_location: "Boston".to_string(),
            company_hq: String::new(),
            scientific_signal: "no".to_string(),
            funding_stage: "Series A".to_string(),
            linkedin_url: String::new(),
        }];

        let written = write_output(&path, &rows).unwrap();

        assert!(written.is_absolute());
        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Rank,Probability Score (0-100),Name,Title,Company,Person Location,Company HQ,\
             Scientific Signal (papers / yes-no),Funding Stage,LinkedIn URL"
        );
        assert_eq!(lines.next().unwrap(), "1,52.0,X,Director,Acme,Boston,,no,Series A,");
    }
}
