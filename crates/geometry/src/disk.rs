//! Non-standard disk temperature profiles

use crate::error::{Error, Result};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

/// A tabulated radial temperature profile for the disk
///
/// Used in place of the steady-state viscous profile when the disk
/// temperature has been measured or modelled externally (the YSO case).
/// Radii are stored in cm and temperatures in K.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiskProfile {
    /// Ring radii \[cm\]
    pub r: Vec<f64>,
    /// Ring temperatures \[K\]
    pub t: Vec<f64>,
}

impl DiskProfile {
    /// Number of tabulated rings
    pub fn len(&self) -> usize {
        self.r.len()
    }

    /// True when no rings were read
    pub fn is_empty(&self) -> bool {
        self.r.is_empty()
    }
}

/// Read a non-standard disk temperature profile
///
/// The file carries a ring count on the first line followed by one
/// `r t` pair per line, with r in units of 1e11 cm and t in kK. Both are
/// rescaled to cgs on the way in.
///
/// A missing or truncated file is fatal; there is no sensible fallback once
/// the user has asked for a measured profile.
pub fn read_disk_profile<P: AsRef<Path>>(path: P) -> Result<DiskProfile> {
    let path = path.as_ref();
    let file =
        File::open(path).map_err(|_| Error::ProfileNotFound(path.display().to_string()))?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    let header = lines
        .next()
        .ok_or_else(|| Error::BadProfileRecord(String::new()))??;
    let expected: usize = header
        .trim()
        .parse()
        .map_err(|_| Error::BadProfileRecord(header.clone()))?;

    let mut profile = DiskProfile {
        r: Vec::with_capacity(expected),
        t: Vec::with_capacity(expected),
    };

    for line in lines {
        let line = line?;
        let mut fields = line.split_whitespace();
        let (Some(r), Some(t)) = (fields.next(), fields.next()) else {
            continue;
        };
        let r: f64 = r.parse().map_err(|_| Error::BadProfileRecord(line.clone()))?;
        let t: f64 = t.parse().map_err(|_| Error::BadProfileRecord(line.clone()))?;
        profile.r.push(r * 1.0e11);
        profile.t.push(t * 1.0e3);
        if profile.len() == expected {
            break;
        }
    }

    if profile.len() != expected {
        return Err(Error::ProfileTruncated {
            expected,
            found: profile.len(),
        });
    }

    info!("Read {} disk profile rings from {}", expected, path.display());
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    fn profile_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn rescales_to_cgs() {
        let file = profile_file("2\n0.1 12.0\n0.2 8.5\n");
        let profile = read_disk_profile(file.path()).unwrap();
        assert_eq!(profile.len(), 2);
        assert_relative_eq!(profile.r[0], 1.0e10);
        assert_relative_eq!(profile.t[0], 1.2e4);
        assert_relative_eq!(profile.r[1], 2.0e10);
        assert_relative_eq!(profile.t[1], 8.5e3);
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = read_disk_profile("no/such/profile.txt").unwrap_err();
        assert!(matches!(err, Error::ProfileNotFound(_)));
    }

    #[test]
    fn truncated_profile_is_fatal() {
        let file = profile_file("3\n0.1 12.0\n");
        let err = read_disk_profile(file.path()).unwrap_err();
        assert!(matches!(
            err,
            Error::ProfileTruncated {
                expected: 3,
                found: 1
            }
        ));
    }
}
