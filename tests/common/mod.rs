use std::fs;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::Command;
use std::str::FromStr;

use data_encoding::HEXLOWER;

pub fn setup() {
    let results_dir_path = PathBuf::from_str("./target/results/").unwrap();

    if !results_dir_path.exists() {
        fs::create_dir_all(&results_dir_path).unwrap_or_else(|_|
            panic!("Failed to create results directory: {:?}", results_dir_path)
        );
    } else {
        println!("Results directory exists at {:?}", results_dir_path);
    }
}

#[allow(dead_code)]
pub fn read_lines(path: PathBuf) -> Result<Vec<String>, anyhow::Error> {
    let reader = BufReader::new(File::open(path)?);
    let lines = reader.lines().map(|x| x.unwrap()).collect();
    Ok(lines)
}

// the sqlite3 shell terminates csv rows with CRLF
#[allow(dead_code)]
pub fn read_rows(path: PathBuf) -> Result<Vec<String>, anyhow::Error> {
    let rows = read_lines(path)?
        .into_iter()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect();
    Ok(rows)
}

#[allow(dead_code)]
pub fn temp_file_name(dir: &str) -> PathBuf {
    let mut result = PathBuf::from(dir);
    let name = HEXLOWER.encode(&rand::random::<[u8; 16]>());
    result.push(name);
    result
}

#[allow(dead_code)]
pub fn write_lines(path: &PathBuf, lines: &[&str]) -> Result<(), anyhow::Error> {
    let mut file = File::create(path)?;
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    Ok(())
}

/// Write an executable shell script standing in for the sqlite3 binary.
/// The body receives the database path as $1 and the job script on stdin.
#[allow(dead_code)]
pub fn stand_in_engine(body: &str) -> Result<PathBuf, anyhow::Error> {
    let path = temp_file_name("./target/results/");
    let mut file = File::create(&path)?;
    writeln!(file, "#!/bin/sh")?;
    writeln!(file, "cat > /dev/null")?;
    write!(file, "{}", body)?;
    drop(file);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    }
    Ok(path)
}

#[allow(dead_code)]
pub fn sqlite3_available() -> bool {
    Command::new("sqlite3")
        .arg("-version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
