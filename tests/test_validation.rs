use std::fs;

use sqlite_file_sort::error::SortError;
use sqlite_file_sort::sort::Sort;

mod common;

#[test]
fn test_missing_source() -> Result<(), anyhow::Error> {
    common::setup();
    let input_path = common::temp_file_name("./target/results/");
    let output_path = common::temp_file_name("./target/results/");

    let mut sort = Sort::new(input_path.clone(), output_path);
    sort.add_key("id");

    let result = sort.sort();
    assert!(matches!(result, Err(SortError::MissingSource(path)) if path == input_path));
    Ok(())
}

#[test]
fn test_missing_output_directory() -> Result<(), anyhow::Error> {
    common::setup();
    let input_path = common::temp_file_name("./target/results/");
    common::write_lines(&input_path, &["id,name", "1,john"])?;
    let mut output_path = common::temp_file_name("./target/results/");
    output_path.push("out.csv");

    let mut sort = Sort::new(input_path.clone(), output_path);
    sort.add_key("id");

    let result = sort.sort();
    assert!(matches!(result, Err(SortError::MissingOutputDirectory(_))));
    fs::remove_file(input_path)?;
    Ok(())
}

#[test]
fn test_missing_keys() -> Result<(), anyhow::Error> {
    common::setup();
    let input_path = common::temp_file_name("./target/results/");
    common::write_lines(&input_path, &["id,name", "1,john"])?;
    let output_path = common::temp_file_name("./target/results/");

    let sort = Sort::new(input_path.clone(), output_path);

    let result = sort.sort();
    assert!(matches!(result, Err(SortError::MissingKeys)));
    fs::remove_file(input_path)?;
    Ok(())
}

#[test]
fn test_offset_without_limit_touches_nothing() -> Result<(), anyhow::Error> {
    common::setup();
    let input_path = common::temp_file_name("./target/results/");
    common::write_lines(&input_path, &["id,name", "1,john"])?;
    let output_path = common::temp_file_name("./target/results/");
    common::write_lines(&output_path, &["previous content"])?;

    let mut sort = Sort::new(input_path.clone(), output_path.clone());
    sort.add_key("id");
    sort.with_offset(1);

    let result = sort.sort();
    assert!(matches!(result, Err(SortError::MissingLimit)));

    // the precondition fails before the pre-run deletions
    let lines = common::read_lines(output_path.clone())?;
    assert_eq!(lines, vec!["previous content".to_string()]);
    fs::remove_file(input_path)?;
    fs::remove_file(output_path)?;
    Ok(())
}
