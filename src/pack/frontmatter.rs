//! Frontmatter extraction and entity record parsing.
//!
//! A frontmatter block starts on the first line of the document with a line
//! of exactly `---` and ends at the next such line. The enclosed YAML must
//! be a mapping with an `id` field for the document to count as an entity.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::{Mapping, Value};

use super::EntityRecord;
use crate::ports::filesystem::FileSystem;

// A pattern that fails to compile disables its name fallback.
static BRACKET_HEADING: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?m)^##[ \t]+\[.*?\][ \t]+(.+)$").ok());

static ID_PREFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Z]+\.[A-Z]+\.\d+-?").ok());

/// Derives a display name from the document body or its path.
type NameStrategy = fn(body: &str, path: &Path) -> Option<String>;

/// Name fallbacks, tried in order when frontmatter has no `name`.
const NAME_STRATEGIES: [NameStrategy; 2] = [name_from_heading, name_from_file_stem];

/// A document split into its frontmatter block and the text after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document<'a> {
    /// YAML between the delimiters, without the delimiter lines.
    pub frontmatter: &'a str,
    /// Everything after the closing delimiter line.
    pub body: &'a str,
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == "---"
}

/// Splits `content` into frontmatter and body.
///
/// Returns `None` unless the very first line is a `---` delimiter and a
/// closing delimiter line follows.
#[must_use]
pub fn split_document(content: &str) -> Option<Document<'_>> {
    let mut lines = content.split_inclusive('\n');
    let first = lines.next()?;
    if !is_delimiter(first) || !first.ends_with('\n') {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if is_delimiter(line) {
            return Some(Document {
                frontmatter: &content[start..offset],
                body: &content[offset + line.len()..],
            });
        }
        offset += line.len();
    }
    None
}

/// Parses the frontmatter of `content` into a YAML mapping.
///
/// Returns `None` if there is no block, the YAML is invalid, or the top
/// level is not a mapping.
#[must_use]
pub fn parse_mapping(content: &str) -> Option<Mapping> {
    yaml_mapping(split_document(content)?.frontmatter)
}

fn yaml_mapping(frontmatter: &str) -> Option<Mapping> {
    match serde_yaml::from_str::<Value>(frontmatter).ok()? {
        Value::Mapping(mapping) => Some(mapping),
        _ => None,
    }
}

/// Renders a frontmatter value as display text.
///
/// `null` counts as absent. Sequences and mappings are rendered as compact
/// inline JSON so they stay on one table row.
#[must_use]
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Tagged(tagged) => value_text(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => serde_json::to_string(value).ok(),
    }
}

fn field(mapping: &Mapping, key: &str) -> Option<String> {
    mapping.get(key).and_then(value_text)
}

/// The non-empty `id` of a frontmatter mapping.
///
/// A mapping without one is not an entity block and carries no usable
/// fields, manifest fields included.
#[must_use]
pub fn entity_id(mapping: &Mapping) -> Option<String> {
    field(mapping, "id").filter(|id| !id.trim().is_empty())
}

/// Parses an entity record from a document's content.
///
/// Returns `None` when the document has no frontmatter mapping or the
/// mapping has no non-empty `id`. When `name` is missing it is derived from
/// a `## [<id>] <Name>` heading in the body or, failing that, from the file
/// name.
#[must_use]
pub fn parse_record(content: &str, path: &Path) -> Option<EntityRecord> {
    let document = split_document(content)?;
    let mapping = yaml_mapping(document.frontmatter)?;

    let id = entity_id(&mapping)?;
    let name = field(&mapping, "name").or_else(|| {
        NAME_STRATEGIES
            .iter()
            .find_map(|strategy| strategy(document.body, path))
    });

    Some(EntityRecord {
        id,
        name,
        summary: field(&mapping, "summary"),
        status: field(&mapping, "status"),
        last_updated: field(&mapping, "last_updated"),
        generated: matches!(mapping.get("generated"), Some(Value::Bool(true))),
        path: path.to_path_buf(),
    })
}

/// Reads and parses the entity record stored at `path`.
///
/// Unreadable files (missing, not UTF-8) yield `None` like any other
/// non-entity document.
pub fn read_record(fs: &dyn FileSystem, path: &Path) -> Option<EntityRecord> {
    let content = fs.read_to_string(path).ok()?;
    parse_record(&content, path)
}

/// First `## [<anything>] <Name>` heading in the body.
fn name_from_heading(body: &str, _path: &Path) -> Option<String> {
    BRACKET_HEADING
        .as_ref()?
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
}

/// File stem without its identifier prefix, hyphens as spaces, title-cased.
fn name_from_file_stem(_body: &str, path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_string_lossy();
    let slug = ID_PREFIX.as_ref()?.replace(&stem, "");
    if slug.is_empty() {
        return None;
    }
    Some(title_case(&slug.replace('-', " ")))
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the
/// rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
