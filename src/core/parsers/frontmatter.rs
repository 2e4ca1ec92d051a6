use anyhow::{Result, bail};

const FENCE: &str = "---";

/// Extract the `---`-fenced script block at the top of an `.astro` file.
///
/// The opening fence must be the first non-blank line. Returns `Ok(None)` if
/// the file has no frontmatter, and an error if the opening fence is never
/// closed.
pub fn extract_frontmatter(source: &str) -> Result<Option<&str>> {
    let mut offset = 0;
    let mut start: Option<usize> = None;

    for line in source.split_inclusive('\n') {
        let line_end = offset + line.len();
        let trimmed = line.trim();

        match start {
            None if trimmed.is_empty() => {}
            None if trimmed == FENCE => start = Some(line_end),
            None => return Ok(None),
            Some(begin) if trimmed == FENCE => return Ok(Some(&source[begin..offset])),
            Some(_) => {}
        }

        offset = line_end;
    }

    if start.is_some() {
        bail!("Unterminated frontmatter: missing closing `{}`", FENCE);
    }
    Ok(None)
}
