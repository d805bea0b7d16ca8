//! Artifact naming templates.
//!
//! A template is plain text with platform fields substituted at render time.
//!
//! # Fields
//!
//! - `{OS}` - the platform's operating system (e.g. `linux`)
//! - `{Arch}` - the platform's architecture (e.g. `amd64`)
//! - `{Extension}` - the executable extension (e.g. `.exe`, often empty)
//!
//! # Escaping
//!
//! Use `{{` and `}}` to produce literal braces. [`escape`] applies this to
//! arbitrary text, which is how base names are embedded safely.
//!
//! # Example
//!
//! ```
//! use crossmake_lib::name::NameTemplate;
//! use crossmake_lib::platform::{LINUX_AMD64, WINDOWS_AMD64};
//!
//! let template = NameTemplate::with_default_postfix("app");
//! assert_eq!(template.render(&LINUX_AMD64).unwrap(), "app_linux-amd64");
//! assert_eq!(template.render(&WINDOWS_AMD64).unwrap(), "app_windows-amd64.exe");
//! ```

use std::fmt;

use thiserror::Error;

use crate::platform::Platform;

/// Postfix appended to a base name by [`NameTemplate::with_default_postfix`].
pub const DEFAULT_POSTFIX: &str = "_{OS}-{Arch}{Extension}";

/// A platform field referenced by a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  Os,
  Arch,
  Extension,
}

/// A segment of parsed template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
  /// Literal text, braces already unescaped
  Literal(String),

  /// A field to be filled from the platform
  Field(Field),
}

/// Errors that can occur while parsing a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
  #[error("unclosed field at position {0}")]
  Unclosed(usize),

  #[error("unmatched '}}' at position {0}")]
  UnmatchedClose(usize),

  #[error("unknown field: {0}")]
  UnknownField(String),
}

/// Parse template text into segments.
///
/// # Errors
///
/// Returns an error if a field is unclosed or unknown, or if a lone `}`
/// appears outside a field.
pub fn parse(input: &str) -> Result<Vec<Segment>, TemplateError> {
  let mut segments = Vec::new();
  let mut literal = String::new();
  let mut chars = input.char_indices().peekable();

  while let Some((pos, ch)) = chars.next() {
    match ch {
      '{' => {
        if let Some((_, '{')) = chars.peek() {
          chars.next();
          literal.push('{');
          continue;
        }

        if !literal.is_empty() {
          segments.push(Segment::Literal(std::mem::take(&mut literal)));
        }

        let mut name = String::new();
        let mut found_close = false;

        for (_, c) in chars.by_ref() {
          if c == '}' {
            found_close = true;
            break;
          }
          name.push(c);
        }

        if !found_close {
          return Err(TemplateError::Unclosed(pos));
        }

        segments.push(Segment::Field(parse_field(&name)?));
      }
      '}' => {
        if let Some((_, '}')) = chars.peek() {
          chars.next();
          literal.push('}');
        } else {
          return Err(TemplateError::UnmatchedClose(pos));
        }
      }
      _ => literal.push(ch),
    }
  }

  if !literal.is_empty() {
    segments.push(Segment::Literal(literal));
  }

  Ok(segments)
}

fn parse_field(name: &str) -> Result<Field, TemplateError> {
  match name {
    "OS" => Ok(Field::Os),
    "Arch" => Ok(Field::Arch),
    "Extension" => Ok(Field::Extension),
    _ => Err(TemplateError::UnknownField(name.to_string())),
  }
}

/// Render pre-parsed segments for a platform.
pub fn render_segments(segments: &[Segment], platform: &Platform) -> String {
  let mut result = String::new();

  for segment in segments {
    match segment {
      Segment::Literal(s) => result.push_str(s),
      Segment::Field(Field::Os) => result.push_str(platform.os.as_str()),
      Segment::Field(Field::Arch) => result.push_str(platform.arch.as_str()),
      Segment::Field(Field::Extension) => result.push_str(platform.extension),
    }
  }

  result
}

/// Escape braces so `text` renders literally inside a template.
pub fn escape(text: &str) -> String {
  text.replace('{', "{{").replace('}', "}}")
}

/// Template text for artifact file names.
///
/// Holds the source text; parsing happens on [`render`](Self::render), so a
/// malformed template surfaces as an error at the point a name is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTemplate {
  source: String,
}

impl NameTemplate {
  pub fn new(source: impl Into<String>) -> Self {
    Self { source: source.into() }
  }

  /// `base_name` followed by `_{OS}-{Arch}{Extension}`.
  ///
  /// The base name is escaped, so braces in it are kept verbatim.
  pub fn with_default_postfix(base_name: &str) -> Self {
    Self::with_postfix(base_name, DEFAULT_POSTFIX)
  }

  /// `base_name` (escaped) followed by the template text `postfix`.
  pub fn with_postfix(base_name: &str, postfix: &str) -> Self {
    Self::new(format!("{}{}", escape(base_name), postfix))
  }

  pub fn as_str(&self) -> &str {
    &self.source
  }

  /// Check that the template parses.
  pub fn validate(&self) -> Result<(), TemplateError> {
    parse(&self.source).map(|_| ())
  }

  /// Render the file name for `platform`.
  pub fn render(&self, platform: &Platform) -> Result<String, TemplateError> {
    let segments = parse(&self.source)?;
    Ok(render_segments(&segments, platform))
  }
}

impl fmt::Display for NameTemplate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.source)
  }
}
