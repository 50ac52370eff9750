use std::fs;
use std::path::Path;
use std::str::FromStr;

use super::{RectWolf, WorldWolf};
use crate::error::{FluxError, Result};
use crate::geometry::Point;

const FIELDS: [&str; 6] = ["id", "color", "x1", "y1", "x2", "y2"];

/// Load a world file from disk
pub fn import_world(path: impl AsRef<Path>) -> Result<WorldWolf> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let world = parse_world(&text)?;
    log::info!("loaded {} objects from {}", world.len(), path.display());
    Ok(world)
}

/// Parse world text: one `id,colorIndex,x1,y1,x2,y2` object per line.
///
/// Any malformed line fails the whole parse. Blank lines are skipped and a
/// repeated id replaces the earlier object.
pub fn parse_world(text: &str) -> Result<WorldWolf> {
    let mut world = WorldWolf::new();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != FIELDS.len() {
            return Err(FluxError::Parse {
                line: line_no,
                message: format!("expected {} fields, found {}", FIELDS.len(), fields.len()),
            });
        }

        let id = parse_field(&fields, 0, line_no)?;
        let color = parse_field(&fields, 1, line_no)?;
        let x1 = parse_field(&fields, 2, line_no)?;
        let y1 = parse_field(&fields, 3, line_no)?;
        let x2 = parse_field(&fields, 4, line_no)?;
        let y2 = parse_field(&fields, 5, line_no)?;

        if world
            .insert(RectWolf::new(id, Point::new(x1, y1), Point::new(x2, y2), color))
            .is_some()
        {
            log::debug!("line {}: object {} replaces an earlier definition", line_no, id);
        }
    }

    Ok(world)
}

fn parse_field<T>(fields: &[&str], index: usize, line: usize) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    fields[index].parse().map_err(|e| FluxError::Parse {
        line,
        message: format!("invalid {} {:?}: {}", FIELDS[index], fields[index], e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_parse_three_objects() {
        let world = parse_world("1,4,0,0,10,2\n7,5,3,3,4,4\n42,1,20,0,21,30\n").unwrap();
        assert_eq!(world.len(), 3);
        assert_eq!(
            world.get(1),
            Some(&RectWolf::new(1, Point::new(0, 0), Point::new(10, 2), 4))
        );
        assert_eq!(
            world.get(7),
            Some(&RectWolf::new(7, Point::new(3, 3), Point::new(4, 4), 5))
        );
        assert_eq!(
            world.get(42),
            Some(&RectWolf::new(42, Point::new(20, 0), Point::new(21, 30), 1))
        );
    }

    #[test]
    fn test_parse_skips_blank_lines_and_trims() {
        let world = parse_world("\n 1, 2, 3, 4, 5, 6 \n\n").unwrap();
        assert_eq!(world.len(), 1);
        assert_eq!(world.get(1).map(|r| r.end), Some(Point::new(5, 6)));
    }

    #[test]
    fn test_parse_duplicate_id_overwrites() {
        let world = parse_world("1,1,0,0,1,1\n1,9,5,5,6,6").unwrap();
        assert_eq!(world.len(), 1);
        assert_eq!(world.get(1).map(|r| r.color), Some(9));
    }

    #[test]
    fn test_parse_non_numeric_field_fails() {
        let err = parse_world("1,4,0,0,10,2\n2,4,zero,0,1,1\n3,4,0,0,1,1").unwrap_err();
        match err {
            FluxError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("x1"), "message: {}", message);
            },
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_wrong_field_count_fails() {
        assert!(matches!(
            parse_world("1,4,0,0,10"),
            Err(FluxError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            parse_world("1,4,0,0,10,2,7"),
            Err(FluxError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_color_out_of_range_fails() {
        assert!(matches!(
            parse_world("1,256,0,0,1,1"),
            Err(FluxError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_import_world_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1,2,0,0,4,4").unwrap();
        writeln!(file, "2,3,8,8,9,9").unwrap();
        writeln!(file, "3,4,1,6,2,7").unwrap();

        let world = import_world(file.path()).unwrap();
        assert_eq!(world.len(), 3);
        let ids: Vec<_> = world.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_import_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = import_world(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, FluxError::Io(_)));
    }
}
