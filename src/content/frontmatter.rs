//! Front matter extraction for markdown pages.
//!
//! Two fence styles are recognized at the very start of a file:
//!
//! ```text
//! ---                 +++
//! title: Intro        title = "Intro"
//! order: 1            order = 1
//! ---                 +++
//! body...             body...
//! ```
//!
//! YAML is the default for markdown sites; TOML is accepted for sites that
//! share the `+++` convention with other generators.

use serde::de::DeserializeOwned;

use super::error::{ContentError, Result};

const YAML_FENCE: &str = "---";
const TOML_FENCE: &str = "+++";

/// Raw front matter block, borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatter<'a> {
    Yaml(&'a str),
    Toml(&'a str),
}

impl FrontMatter<'_> {
    /// Deserialize the block into typed page properties.
    pub fn deserialize<P: DeserializeOwned>(self) -> Result<P> {
        match self {
            Self::Yaml(raw) if raw.trim().is_empty() => empty_props(),
            Self::Yaml(raw) => Ok(serde_yaml::from_str(raw)?),
            Self::Toml(raw) => Ok(toml::from_str(raw)?),
        }
    }
}

/// Split a page into its front matter block and body.
///
/// A file that doesn't open with a fence has no front matter and the whole
/// text is the body. An opening fence without a matching closing fence is an
/// error rather than silently treating the page as body text.
pub fn split(source: &str) -> Result<(Option<FrontMatter<'_>>, &str)> {
    let text = source.strip_prefix('\u{feff}').unwrap_or(source);

    let (first, rest) = text.split_once('\n').unwrap_or((text, ""));
    let fence = match first.trim_end() {
        YAML_FENCE => YAML_FENCE,
        TOML_FENCE => TOML_FENCE,
        _ => return Ok((None, text)),
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == fence {
            let raw = &rest[..offset];
            let body = &rest[offset + line.len()..];
            let block = if fence == YAML_FENCE {
                FrontMatter::Yaml(raw)
            } else {
                FrontMatter::Toml(raw)
            };
            return Ok((Some(block), body));
        }
        offset += line.len();
    }

    Err(ContentError::UnclosedFrontMatter(fence))
}

/// Parse a page into typed properties and its markdown body.
///
/// Pages without front matter deserialize `P` from an empty mapping, so a
/// missing required field surfaces as a named-field error.
pub fn parse<P: DeserializeOwned>(source: &str) -> Result<(P, String)> {
    let (block, body) = split(source)?;
    let props = match block {
        Some(block) => block.deserialize()?,
        None => empty_props()?,
    };
    Ok((props, body.to_owned()))
}

fn empty_props<P: DeserializeOwned>() -> Result<P> {
    Ok(serde_yaml::from_str("{}")?)
}
