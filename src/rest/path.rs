//! Path templates for compiled operations.
//!
//! A resource operation's path is its resource base path joined with the
//! descriptor's relative template. Templates use `{name}` placeholders; text
//! outside braces is literal and never rewritten.
//!
//! # Example
//!
//! ```rust
//! use pact_api::rest::{join_path, PathTemplate};
//! use std::collections::HashMap;
//!
//! let joined = join_path("/users", "{user_id}/password");
//! assert_eq!(joined, "/users/{user_id}/password");
//!
//! let template = PathTemplate::parse(&joined).unwrap();
//! assert_eq!(template.placeholders().collect::<Vec<_>>(), vec!["user_id"]);
//!
//! let mut values = HashMap::new();
//! values.insert("user_id", "42".to_string());
//! assert_eq!(template.render(&values).unwrap(), "/users/42/password");
//! ```

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// Joins a resource base path and a relative template.
///
/// - an empty template leaves the base path unchanged
/// - a template starting with `/` is appended as-is
/// - anything else is appended after a single `/`
///
/// Trailing slashes on the base path are dropped first.
#[must_use]
pub fn join_path(base_path: &str, template: &str) -> String {
    let base = base_path.trim_end_matches('/');
    if template.is_empty() {
        if base.is_empty() {
            return "/".to_string();
        }
        return base.to_string();
    }
    if template.starts_with('/') {
        format!("{base}{template}")
    } else {
        format!("{base}/{template}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// Error produced when a template has an unterminated or empty placeholder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed placeholder at byte {position} in '{template}'")]
pub struct MalformedTemplate {
    /// The template text.
    pub template: String,
    /// Byte offset of the offending `{`.
    pub position: usize,
}

/// Error produced when a placeholder has no value to render.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("no value for placeholder '{{{placeholder}}}'")]
pub struct MissingPlaceholder {
    /// The placeholder name.
    pub placeholder: String,
}

/// A parsed path template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Parses a template.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedTemplate`] for an unterminated `{` or an empty `{}`.
    /// A lone `}` is literal text.
    pub fn parse(template: &str) -> Result<Self, MalformedTemplate> {
        let mut segments = Vec::new();
        let mut rest = template;
        let mut offset = 0;

        while let Some(open) = rest.find('{') {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let after = &rest[open + 1..];
            let malformed = || MalformedTemplate {
                template: template.to_string(),
                position: offset + open,
            };
            let close = after.find('}').ok_or_else(malformed)?;
            let name = &after[..close];
            if name.is_empty() || name.contains('{') {
                return Err(malformed());
            }
            segments.push(Segment::Placeholder(name.to_string()));

            let consumed = open + 1 + close + 1;
            rest = &rest[consumed..];
            offset += consumed;
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self {
            raw: template.to_string(),
            segments,
        })
    }

    /// Returns the template text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns placeholder names in order of appearance (repeats included).
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitutes every placeholder with its percent-encoded value.
    ///
    /// # Errors
    ///
    /// Returns [`MissingPlaceholder`] for the first placeholder with no value.
    #[allow(clippy::implicit_hasher)]
    pub fn render(&self, values: &HashMap<&str, String>) -> Result<String, MissingPlaceholder> {
        let mut path = String::with_capacity(self.raw.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Placeholder(name) => {
                    let value = values.get(name.as_str()).ok_or_else(|| MissingPlaceholder {
                        placeholder: name.clone(),
                    })?;
                    path.push_str(&urlencoding::encode(value));
                }
            }
        }
        Ok(path)
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
