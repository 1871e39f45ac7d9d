// SPDX-License-Identifier: MPL-2.0
//! Template-based [`FrameUrlResolver`].
//!
//! Placeholders:
//! - `{object}` - the object identifier
//! - `{index}` - the 1-based frame number
//! - `{index:0W}` - the frame number zero-padded to `W` digits (at most 10)
//!
//! Unknown placeholders are kept verbatim.

use crate::application::port::{FrameUrl, FrameUrlResolver};
use crate::domain::frame::{FrameIndex, ObjectId};

/// Widest padding honoured by `{index:0W}`; `u32::MAX` has 10 digits.
const MAX_PAD_WIDTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateResolver {
    template: String,
}

impl TemplateResolver {
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    fn expand(&self, placeholder: &str, object_id: &ObjectId, index: FrameIndex) -> Option<String> {
        match placeholder {
            "object" => Some(object_id.as_str().to_string()),
            "index" => Some(index.value().to_string()),
            _ => {
                let width = placeholder.strip_prefix("index:0")?;
                let width: usize = width.parse().ok()?;
                let width = width.min(MAX_PAD_WIDTH);
                Some(format!("{:0width$}", index.value()))
            }
        }
    }
}

impl FrameUrlResolver for TemplateResolver {
    fn resolve(&self, object_id: &ObjectId, index: FrameIndex) -> FrameUrl {
        let mut url = String::with_capacity(self.template.len() + 16);
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find('{') {
            url.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let Some(end) = after.find('}') else {
                rest = &rest[start..];
                break;
            };
            let placeholder = &after[..end];
            match self.expand(placeholder, object_id, index) {
                Some(value) => url.push_str(&value),
                None => {
                    url.push('{');
                    url.push_str(placeholder);
                    url.push('}');
                }
            }
            rest = &after[end + 1..];
        }
        url.push_str(rest);

        FrameUrl::new(url)
    }
}
