//! List generation: grouped, globally deduplicated Clash classical rules.

use std::fs;
use std::path::Path;

use ahash::AHashSet;

use crate::resolver::{self, ROOT_CATEGORY};
use crate::source::CategorySource;
use crate::transform::transform;
use crate::Result;

/// Relative path of the generated list.
pub const OUTPUT_PATH: &str = "PornSite/PornSite.list";

/// Builds a grouped rule list from a category source.
pub struct ListGenerator {
    source: Box<dyn CategorySource>,
    root: String,
}

impl ListGenerator {
    /// Create a generator starting from the fixed root category.
    pub fn new(source: Box<dyn CategorySource>) -> Self {
        Self::with_root(source, ROOT_CATEGORY)
    }

    /// Create a generator starting from a custom root category.
    pub fn with_root(source: Box<dyn CategorySource>, root: &str) -> Self {
        Self {
            source,
            root: root.to_string(),
        }
    }

    /// Resolve all includes and build the output document.
    ///
    /// One `# <name>` block per include directive of the root file, in
    /// source order, then a `# others` block for the root file's own rules.
    /// A rule is emitted once globally; later occurrences in any block are
    /// dropped.
    pub fn generate(&self) -> GeneratedList {
        let files = resolver::resolve(self.source.as_ref(), &self.root);
        let root_text = files.get(&self.root).unwrap_or_default();
        let include_order = resolver::include_order(root_text);

        let mut emitted: AHashSet<String> = AHashSet::new();
        let mut lines: Vec<String> = Vec::new();

        for name in &include_order {
            // Excluded targets were never resolved and have no entry.
            let Some(text) = files.get(name) else {
                continue;
            };
            lines.push(format!("# {}", name));
            push_rules(&mut lines, &mut emitted, text.lines());
            lines.push(String::new());
        }

        lines.push("# others".to_string());
        let own_lines = root_text
            .lines()
            .filter(|line| !line.trim().starts_with("include:"));
        push_rules(&mut lines, &mut emitted, own_lines);

        GeneratedList { lines }
    }
}

/// Transform raw lines into rules, appending each rule not yet emitted.
fn push_rules<'a>(
    lines: &mut Vec<String>,
    emitted: &mut AHashSet<String>,
    raw: impl Iterator<Item = &'a str>,
) {
    for line in raw {
        if let Some(rule) = transform(line) {
            if emitted.insert(rule.clone()) {
                lines.push(rule);
            }
        }
    }
}

/// The generated output document.
pub struct GeneratedList {
    lines: Vec<String>,
}

impl GeneratedList {
    /// The output lines, in document order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines in the document.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The newline-joined document text.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Write the document to `path`, creating the parent directory if
    /// absent.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_text())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::LocalSource;

    fn generator_over(files: &[(&str, &str)], root: &str) -> (tempfile::TempDir, ListGenerator) {
        let dir = tempfile::tempdir().unwrap();
        for (name, text) in files {
            fs::write(dir.path().join(name), text).unwrap();
        }
        let source = Box::new(LocalSource::new(dir.path()));
        (dir, ListGenerator::with_root(source, root))
    }

    #[test]
    fn test_end_to_end_document() {
        let (_dir, generator) = generator_over(
            &[
                ("root", "include:x\nfoo.com\n"),
                ("x", "full:bar.com\n#comment\n"),
            ],
            "root",
        );

        let list = generator.generate();
        assert_eq!(
            list.to_text(),
            "# x\nDOMAIN,bar.com\n\n# others\nDOMAIN-SUFFIX,foo.com"
        );
        assert_eq!(list.line_count(), 5);
    }

    #[test]
    fn test_global_dedup_across_blocks() {
        let (_dir, generator) = generator_over(
            &[
                ("root", "include:a\ninclude:b\ndup.com\n"),
                ("a", "dup.com\na-only.com\n"),
                ("b", "dup.com\nb-only.com\n"),
            ],
            "root",
        );

        let list = generator.generate();
        let dup_count = list
            .lines()
            .iter()
            .filter(|line| *line == "DOMAIN-SUFFIX,dup.com")
            .count();
        assert_eq!(dup_count, 1);

        // First occurrence wins: dup.com lands in block a, not b or others.
        assert_eq!(
            list.lines(),
            [
                "# a",
                "DOMAIN-SUFFIX,dup.com",
                "DOMAIN-SUFFIX,a-only.com",
                "",
                "# b",
                "DOMAIN-SUFFIX,b-only.com",
                "",
                "# others",
            ]
        );
    }

    #[test]
    fn test_excluded_include_emits_no_block() {
        let (_dir, generator) = generator_over(
            &[("root", "include:list-ehentai\nfoo.com\n")],
            "root",
        );

        let list = generator.generate();
        assert_eq!(list.lines(), ["# others", "DOMAIN-SUFFIX,foo.com"]);
    }

    #[test]
    fn test_zero_rule_block_keeps_header_and_separator() {
        let (_dir, generator) = generator_over(
            &[
                ("root", "include:empty\n"),
                ("empty", "# only comments here\n"),
            ],
            "root",
        );

        let list = generator.generate();
        assert_eq!(list.lines(), ["# empty", "", "# others"]);
    }

    #[test]
    fn test_unreadable_include_emits_empty_block() {
        // The resolver stores empty text for a file that could not be read,
        // so the block is emitted with no rules.
        let (_dir, generator) = generator_over(&[("root", "include:ghost\n")], "root");

        let list = generator.generate();
        assert_eq!(list.lines(), ["# ghost", "", "# others"]);
    }

    #[test]
    fn test_duplicate_include_directive_emits_two_blocks() {
        let (_dir, generator) = generator_over(
            &[("root", "include:a\ninclude:a\nz.com\n"), ("a", "a.com\n")],
            "root",
        );

        let list = generator.generate();
        assert_eq!(
            list.lines(),
            [
                "# a",
                "DOMAIN-SUFFIX,a.com",
                "",
                "# a",
                "",
                "# others",
                "DOMAIN-SUFFIX,z.com",
            ]
        );
    }

    #[test]
    fn test_write_creates_parent_dir() {
        let (_dir, generator) =
            generator_over(&[("root", "foo.com\n")], "root");
        let list = generator.generate();

        let out_dir = tempfile::tempdir().unwrap();
        let out_path = out_dir.path().join("nested").join("out.list");
        list.write_to(&out_path).unwrap();

        let written = fs::read_to_string(&out_path).unwrap();
        assert_eq!(written, list.to_text());
    }
}
