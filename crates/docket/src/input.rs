use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Briefing files are accepted by extension only; content is not checked.
const ACCEPTED_EXTENSIONS: [&str; 2] = ["txt", "md"];

/// Read briefing text from `path`, or from stdin when it is absent or `-`.
pub fn read_briefing(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        None => read_stdin(),
        Some(p) if p.as_os_str() == "-" => read_stdin(),
        Some(p) => {
            check_extension(p)?;
            std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))
        }
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("reading briefing from stdin")?;
    Ok(text)
}

pub fn check_extension(path: &Path) -> anyhow::Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    if !ACCEPTED_EXTENSIONS.contains(&ext.as_str()) {
        anyhow::bail!(
            "unsupported briefing file {} (expected .txt or .md)",
            path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_text_and_markdown() {
        assert!(check_extension(Path::new("notes.txt")).is_ok());
        assert!(check_extension(Path::new("Brief.MD")).is_ok());
    }

    #[test]
    fn rejects_other_extensions() {
        assert!(check_extension(Path::new("deck.pdf")).is_err());
        assert!(check_extension(Path::new("README")).is_err());
    }

    #[test]
    fn reads_file_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("brief.md");
        std::fs::write(&path, "- Item\n").unwrap();
        assert_eq!(read_briefing(Some(&path)).unwrap(), "- Item\n");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_briefing(Some(Path::new("/no/such/brief.txt"))).unwrap_err();
        assert!(err.to_string().contains("/no/such/brief.txt"));
    }
}
