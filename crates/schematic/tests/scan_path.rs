use std::fs;
use std::path::PathBuf;

use schematic::Totals;

const EXAMPLE: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("schematic-{}-{name}", std::process::id()))
}

#[test]
fn test_scan_path() -> anyhow::Result<()> {
    let path = temp_path("example.txt");
    fs::write(&path, EXAMPLE)?;
    let totals = schematic::scan_path(&path);
    fs::remove_file(&path)?;

    assert_eq!(
        totals?,
        Totals {
            parts: 4361,
            gears: 467835
        }
    );
    Ok(())
}

#[test]
fn test_larger_than_chunk() -> anyhow::Result<()> {
    let mut input = String::new();

    for _ in 0..100 {
        input.push_str(EXAMPLE);
    }

    assert!(input.len() > schematic::CHUNK);

    let path = temp_path("repeated.txt");
    fs::write(&path, &input)?;
    let totals = schematic::scan_path(&path);
    fs::remove_file(&path)?;

    let totals = totals?;
    // Each copy touches the next only through `.664.598..` above
    // `467..114..`, which adds no symbols.
    assert_eq!(totals.parts, 4361 * 100);
    assert_eq!(totals.gears, 467835 * 100);
    Ok(())
}

#[test]
fn test_missing_file() {
    let path = temp_path("missing.txt");
    let error = match schematic::scan_path(&path) {
        Ok(totals) => panic!("unexpected totals {totals}"),
        Err(error) => error,
    };

    assert!(error.to_string().contains("missing.txt"));
}
