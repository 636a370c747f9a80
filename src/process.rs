use std::io::{BufRead, BufReader, Read, Write};
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use regex::Regex;

use crate::config::Config;
use crate::error::SortError;
use crate::sort::Logger;

pub(crate) const OUTPUT_TAG: &str = "[sqlite3]";

const ERROR_LINE_LIMIT: usize = 20;
// the diagnostic wording differs across shell versions
const MISMATCH_PATTERN: &str = r"expected \d+ columns (of data )?but found \d+";
const MISMATCH_NOTE: &str =
    "import aborted: the declared schema does not match the source file columns";

/// Run the engine over the generated script.
///
/// The engine is launched as `<executable> <database>`, the script is written
/// to its standard input and the stream is closed. One thread per output
/// stream forwards tagged lines to the logging sink while the calling thread
/// joins both readers and then waits for the exit status, so the result is
/// never reported before all output has been observed.
///
/// A stderr line matching the column count mismatch diagnostic kills the
/// engine. The mismatch is a structural data problem that a retry cannot
/// resolve, and once the flag is raised the run fails as a schema mismatch
/// whatever exit code the engine managed to produce.
pub(crate) fn run(config: &Config, script: &str) -> Result<i32, SortError> {
    let mut child = Command::new(config.executable())
        .arg(config.database())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| SortError::Launch {
            executable: config.executable().clone(),
            source: e,
        })?;

    let stdin = child.stdin.take();
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let child = Arc::new(Mutex::new(child));

    let error_lines: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let mismatch = Arc::new(AtomicBool::new(false));

    let stdout_logger = config.logger().clone();
    let stdout_handle = thread::spawn(move || {
        if let Some(stream) = stdout {
            forward(stream, &stdout_logger, |_segment| {});
        }
    });

    let stderr_logger = config.logger().clone();
    let pattern = Regex::new(MISMATCH_PATTERN).unwrap();
    let collected = error_lines.clone();
    let flag = mismatch.clone();
    let watched = child.clone();
    let stderr_handle = thread::spawn(move || {
        if let Some(stream) = stderr {
            forward(stream, &stderr_logger, |segment| {
                let mut collected = collected.lock().unwrap();
                collected.push(segment.to_string());
                if pattern.is_match(segment) && !flag.swap(true, Ordering::SeqCst) {
                    collected.push(MISMATCH_NOTE.to_string());
                    watched.lock().unwrap().kill().ok();
                }
            });
        }
    });

    if let Some(mut stdin) = stdin {
        // the engine may exit before consuming the whole script, in which
        // case the exit status is reported instead of the broken pipe
        stdin.write_all(script.as_bytes()).ok();
    }

    stdout_handle.join().ok();
    stderr_handle.join().ok();

    let status = child.lock().unwrap().wait()?;

    let details = error_lines
        .lock()
        .unwrap()
        .iter()
        .take(ERROR_LINE_LIMIT)
        .cloned()
        .collect::<Vec<String>>()
        .join("\n");

    if mismatch.load(Ordering::SeqCst) {
        Err(SortError::SchemaMismatch { details })
    } else {
        match status.code() {
            Some(0) => Ok(0),
            code => Err(SortError::Engine { code, details }),
        }
    }
}

/// Forward a stream to the sink line by line with the fixed output tag.
///
/// Segments are split on newline boundaries, including the trailing empty
/// segment when the stream ends in a newline. Consumers of the log format
/// rely on that trailing segment, it must not be dropped.
fn forward<R: Read>(stream: R, logger: &Logger, mut observe: impl FnMut(&str)) {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    let mut ends_with_newline = false;
    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                ends_with_newline = line.ends_with('\n');
                let segment = line.trim_end_matches('\n');
                emit(logger, segment);
                observe(segment);
            }
            Err(_) => break,
        }
    }
    if ends_with_newline {
        emit(logger, "");
        observe("");
    }
}

fn emit(logger: &Logger, segment: &str) {
    let line = format!("{} {}", OUTPUT_TAG, segment);
    log::debug!("{}", line);
    (**logger)(&line);
}
