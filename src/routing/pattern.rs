//! Route template compilation and path matching.

use std::collections::HashMap;

use regex::Regex;

use crate::routing::error::Error;

/// Matches one `{name}` placeholder. Names cannot span segments or nest braces.
const PLACEHOLDER: &str = r"\{([^/{}]+)\}";

/// What a placeholder matches in a concrete path: one non-empty segment's worth of text.
const SEGMENT: &str = "([^/]+)";

/// Values captured from a matched path, keyed by placeholder name.
pub type PathParams = HashMap<String, String>;

/// A route template compiled into an anchored matcher.
///
/// Capture groups are unnamed; the placeholder names are kept alongside in
/// declaration order and paired with groups by position.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    template: String,
    regex: Regex,
    param_names: Vec<String>,
}

impl CompiledPattern {
    /// Compile a route template.
    ///
    /// Literal text is matched verbatim, each `{name}` placeholder matches one or
    /// more characters other than `/`, and the whole path must match.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicatePlaceholder`] when a name is used twice.
    pub fn compile(template: &str) -> Result<Self, Error> {
        let placeholder = Regex::new(PLACEHOLDER)?;

        let mut pattern = String::with_capacity(template.len() + 16);
        let mut param_names: Vec<String> = Vec::new();
        let mut literal_start = 0;

        pattern.push('^');
        for caps in placeholder.captures_iter(template) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };

            let name = name.as_str();
            if param_names.iter().any(|seen| seen == name) {
                return Err(Error::DuplicatePlaceholder {
                    template: template.to_string(),
                    name: name.to_string(),
                });
            }

            pattern.push_str(&regex::escape(&template[literal_start..whole.start()]));
            pattern.push_str(SEGMENT);
            param_names.push(name.to_string());
            literal_start = whole.end();
        }
        pattern.push_str(&regex::escape(&template[literal_start..]));
        pattern.push('$');

        Ok(Self {
            template: template.to_string(),
            regex: Regex::new(&pattern)?,
            param_names,
        })
    }

    /// Match a concrete path, returning the captured placeholder values.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        let caps = self.regex.captures(path)?;

        Some(
            self.param_names
                .iter()
                .enumerate()
                .filter_map(|(i, name)| {
                    caps.get(i + 1)
                        .map(|value| (name.clone(), value.as_str().to_string()))
                })
                .collect(),
        )
    }

    /// Check whether a path matches without collecting captures.
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// The template this pattern was compiled from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Placeholder names in the order they appear in the template.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }
}
