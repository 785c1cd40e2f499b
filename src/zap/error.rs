//! Unified zap error type with stable formatting.
use core::fmt;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::zap::error_catalog::{default_locale_message, ZapErrorCode};

const CONTEXT_VALUE_MAX: usize = 256;

fn sanitize_value(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect();
    if cleaned.chars().count() > CONTEXT_VALUE_MAX {
        let mut truncated = cleaned
            .chars()
            .take(CONTEXT_VALUE_MAX - 1)
            .collect::<String>();
        truncated.push('…');
        truncated
    } else {
        cleaned
    }
}

fn render_template(template: &str, context: &BTreeMap<String, String>) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut chars = template.chars();
    while let Some(ch) = chars.next() {
        if ch != '{' {
            rendered.push(ch);
            continue;
        }
        let mut key = String::new();
        for next in chars.by_ref() {
            if next == '}' {
                break;
            }
            key.push(next);
        }
        match context.get(&key) {
            Some(value) if !key.is_empty() => rendered.push_str(value),
            _ => {
                rendered.push('{');
                rendered.push_str(&key);
                rendered.push('}');
            }
        }
    }
    rendered
}

#[derive(Serialize)]
struct LogLine<'a> {
    code: &'static str,
    title: &'static str,
    message: String,
    context: &'a BTreeMap<String, String>,
}

/// Zap error with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZapError {
    pub code: ZapErrorCode,
    pub context: BTreeMap<String, String>,
}

impl ZapError {
    pub fn new(code: ZapErrorCode) -> Self {
        Self {
            code,
            context: BTreeMap::new(),
        }
    }

    /// Adds a key/value pair to the context. Empty keys are ignored.
    pub fn with_context<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        let key_string = key.into();
        if !key_string.is_empty() {
            let sanitized = sanitize_value(&value.to_string());
            self.context.insert(key_string, sanitized);
        }
        self
    }

    fn resolved_message(&self) -> String {
        render_template(default_locale_message(self.code), &self.context)
    }

    /// Short single-line message for callers and UIs.
    pub fn to_user_string(&self) -> String {
        format!("[{}] {}", self.code.code(), self.resolved_message())
    }

    pub fn render_with_template(&self, template: &str) -> String {
        render_template(template, &self.context)
    }

    /// Stable JSON line for logs: `code`, `title`, `message`, `context`.
    pub fn to_log_json(&self) -> String {
        let line = LogLine {
            code: self.code.code(),
            title: self.code.title(),
            message: self.resolved_message(),
            context: &self.context,
        };
        // string keys and values only; serialization cannot fail
        serde_json::to_string(&line).unwrap_or_else(|_| String::from("{}"))
    }
}

impl fmt::Display for ZapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_user_string())
    }
}

impl std::error::Error for ZapError {}

impl From<ZapErrorCode> for ZapError {
    fn from(code: ZapErrorCode) -> Self {
        ZapError::new(code)
    }
}

pub type Result<T> = std::result::Result<T, ZapError>;

#[macro_export]
macro_rules! zap_err {
  ($code:expr) => {{
    $crate::zap::error::ZapError::new($code)
  }};
  ($code:expr, $($key:ident => $value:expr),+ $(,)?) => {{
    let mut err = $crate::zap::error::ZapError::new($code);
    $(
      err = err.with_context(stringify!($key), $value);
    )+
    err
  }};
  ($code:expr, { $($key:expr => $value:expr),+ $(,)? }) => {{
    let mut err = $crate::zap::error::ZapError::new($code);
    $(
      err = err.with_context($key, $value);
    )+
    err
  }};
}

#[macro_export]
macro_rules! zap_bail {
  ($($tt:tt)*) => {
    return Err($crate::zap_err!($($tt)*))
  };
}
