//! Breadth-first resolution of `include:` directives across category files.

use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};

use crate::source::CategorySource;
use crate::transform::EXCLUDED_KEYWORD;

/// Name of the root category file the generator starts from.
pub const ROOT_CATEGORY: &str = "category-porn";

const INCLUDE_PREFIX: &str = "include:";

/// Raw category file contents keyed by name, iterable in traversal order.
///
/// Populated once by [`resolve`] and read-only afterwards. Every visited
/// name has an entry, including names whose read failed (empty text);
/// excluded include targets are never visited and have none.
pub struct FileMap {
    entries: AHashMap<String, String>,
    order: Vec<String>,
}

impl FileMap {
    fn new() -> Self {
        Self {
            entries: AHashMap::new(),
            order: Vec::new(),
        }
    }

    fn insert(&mut self, name: String, text: String) {
        if self.entries.insert(name.clone(), text).is_none() {
            self.order.push(name);
        }
    }

    /// Get the raw text stored for a name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Check whether a name was visited.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of visited files.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check whether no file was visited.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate entries in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().filter_map(|name| {
            self.entries
                .get(name)
                .map(|text| (name.as_str(), text.as_str()))
        })
    }
}

/// Extract the target of an `include:` directive, if the line is one.
fn include_target(line: &str) -> Option<&str> {
    line.trim().strip_prefix(INCLUDE_PREFIX).map(str::trim)
}

/// Collect all category files reachable from `root` via `include:` lines.
///
/// Breadth-first: each name is read at most once, and the visited set also
/// guards against include cycles, which are silently ignored. Include
/// targets containing [`EXCLUDED_KEYWORD`] are never enqueued. Duplicate
/// queue entries are tolerated; the visited check on pop drops them.
pub fn resolve(source: &dyn CategorySource, root: &str) -> FileMap {
    let mut queue: VecDeque<String> = VecDeque::new();
    queue.push_back(root.to_string());
    let mut visited: AHashSet<String> = AHashSet::new();
    let mut files = FileMap::new();

    while let Some(name) = queue.pop_front() {
        if !visited.insert(name.clone()) {
            continue;
        }
        let text = source.read(&name);
        for line in text.lines() {
            if let Some(target) = include_target(line) {
                if !target.is_empty()
                    && !target.to_lowercase().contains(EXCLUDED_KEYWORD)
                    && !visited.contains(target)
                {
                    queue.push_back(target.to_string());
                }
            }
        }
        files.insert(name, text);
    }

    files
}

/// The `include:` targets of a file's own text, in source order.
///
/// Duplicates are kept as-is, and excluded targets are not filtered here;
/// they were never resolved, so they have no [`FileMap`] entry and produce
/// no output block.
pub fn include_order(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(include_target)
        .filter(|target| !target.is_empty())
        .map(str::to_string)
        .collect()
}
