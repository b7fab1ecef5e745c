//! Interactive month navigation over stdin.

use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use anyhow::Result;

use crate::session::Session;

use super::render_summary;

const PROMPT: &str = "[n]ext, [p]revious or [q]uit > ";

pub fn browse(file_path: &Path) -> Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    browse_with(file_path, stdin.lock(), stdout.lock())
}

fn browse_with<R: BufRead, W: Write>(file_path: &Path, input: R, mut output: W) -> Result<String> {
    let mut session = Session::new(file_path);
    let summary = session.load(file_path)?;
    writeln!(output, "{}", render_summary(session.cursor(), &summary))?;
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let result = match line.trim() {
            "n" | "next" => session.next_month(),
            "p" | "previous" => session.previous_month(),
            "q" | "quit" => break,
            "" => {
                write!(output, "{}", PROMPT)?;
                output.flush()?;
                continue;
            }
            other => {
                writeln!(output, "Unknown command `{}`", other)?;
                write!(output, "{}", PROMPT)?;
                output.flush()?;
                continue;
            }
        };

        // A month that fails to load is reported and browsing carries on.
        match result {
            Ok(summary) => writeln!(output, "\n{}", render_summary(session.cursor(), &summary))?,
            Err(e) => writeln!(output, "\nError in {}: {}", session.current_month(), e)?,
        }
        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    Ok(format!("Finished browsing `{}`", file_path.display()))
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn fixture(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("weather.csv");
        fs::write(
            &path,
            "2020-1-1,30,0,0\n\n2020-2-1,35,0,1\n\n2020-12-1,45,0,0\n\n",
        )
        .unwrap();
        path
    }

    fn run(path: &Path, input: &str) -> String {
        let mut output = Vec::new();
        browse_with(path, input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn should_step_through_months() {
        let dir = TempDir::new().unwrap();
        let text = run(&fixture(&dir), "n\np\np\nq\n");

        let headers: Vec<&str> = text
            .lines()
            .filter(|l| l.contains("Here is the data for"))
            .collect();
        assert_eq!(
            headers,
            vec![
                "Here is the data for: January",
                "Here is the data for: February",
                "Here is the data for: January",
                "Here is the data for: December",
            ]
        );
    }

    #[test]
    fn should_report_missing_month_and_continue() {
        let dir = TempDir::new().unwrap();
        let text = run(&fixture(&dir), "n\nn\nn\n");

        assert!(text.contains("Error in March: no data for month"));
        assert!(text.contains("Error in April: no data for month"));
    }

    #[test]
    fn should_flag_unknown_command() {
        let dir = TempDir::new().unwrap();
        let text = run(&fixture(&dir), "x\nq\n");

        assert!(text.contains("Unknown command `x`"));
    }
}
