use crate::rules::{compile, RULES};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Runs the whole rule table over `text` in order, rewriting every match of
/// each pattern. Pure; the caller decides whether anything changed.
pub fn apply_rules(text: &str) -> Result<String> {
    let mut current = text.to_string();

    for rule in RULES {
        let re = compile(rule)?;
        let rewritten = re.replace_all(&current, rule.replacement);
        if let Cow::Owned(changed) = rewritten {
            log::debug!("rule matched: {}", rule.name);
            current = changed;
        }
    }

    Ok(current)
}

/// Reads the file at `path`, applies the rule table, and writes the result
/// back only if it differs from the input. Returns `true` when the file was
/// rewritten. The untouched case leaves the file byte-for-byte intact.
pub fn patch_file(path: &Path) -> Result<bool> {
    let original =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;

    let patched = apply_rules(&original)?;

    if patched == original {
        return Ok(false);
    }

    fs::write(path, &patched).with_context(|| format!("Failed to write file: {:?}", path))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const CORRUPTED: &str = "\
class ChromeManagerTest extends TestCase
{
    public function testNavigateLoadsPage(): void
    {
    {
        $result = $this->chromeManager->navigate('http://x');
        $this->assertTrue($result['success']);
    }
        $this->markTestSkipped('broken by session refactor');

    public function testTypeSendsKeys(): void
    {
        $this->chromeManager->type('#id', $value);
        $shot = $this->chromeManager->captureScreenshot();
    }
}
";

    #[test]
    fn test_apply_rules_full_pass() {
        let output = apply_rules(CORRUPTED).unwrap();

        assert!(!output.contains("markTestSkipped"));
        assert!(output.contains("    }\n    public function testTypeSendsKeys(): void"));
        assert_eq!(output.matches("    {\n    {\n").count(), 0);
        assert!(output.contains("->navigate($this->testSessionId, 'http://x')"));
        assert!(output.contains("->type($this->testSessionId, '#id', $value)"));
        assert!(output.contains("->captureScreenshot($this->testSessionId)"));
    }

    #[test]
    fn test_apply_rules_is_idempotent() {
        let once = apply_rules(CORRUPTED).unwrap();
        let twice = apply_rules(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_patch_file_writes_changes() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("ChromeManagerTest.php");
        fs::write(&file_path, CORRUPTED).unwrap();

        let changed = patch_file(&file_path).unwrap();
        assert!(changed);

        let content = fs::read_to_string(&file_path).unwrap();
        assert!(!content.contains("markTestSkipped"));
        assert!(content.contains("$this->testSessionId"));
    }

    #[test]
    fn test_patch_file_noop_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("AlreadyFixed.php");
        let fixed = "\
class ChromeManagerTest extends TestCase
{
    public function testNavigateLoadsPage(): void
    {
        $result = $this->chromeManager->navigate($this->testSessionId, 'http://x');
    }
}
";
        fs::write(&file_path, fixed).unwrap();

        let changed = patch_file(&file_path).unwrap();
        assert!(!changed);
        assert_eq!(fs::read_to_string(&file_path).unwrap(), fixed);
    }

    #[test]
    fn test_patch_file_missing_file_errors() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nonexistent.php");

        let result = patch_file(&file_path);
        assert!(result.is_err());
    }
}
