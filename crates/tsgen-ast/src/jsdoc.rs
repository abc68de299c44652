//! Structured documentation comments (JSDoc).
//!
//! A [`JsDoc`] is a small object model of named tag blocks. Whatever order the
//! entries were added in, [`JsDoc::blocks`] yields them in one fixed order:
//!
//! description, `@summary`, `@file`, `@copyright`, `@package`, `@typeparam`,
//! `@param`, `@returns`, `@throws`, `@example`, `@see`.
//!
//! [`JsDocBuilder`] and [`JsDoc::parse`] normalise empty or whitespace-only
//! text to "absent". The fields are public, so [`JsDoc::blocks`] applies the
//! same rule again: a tag with nothing to say is never emitted.

use serde::Serialize;
use tsgen_common::comments::doc_comment_lines;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct JsDoc {
    pub description: Option<String>,
    pub summary: Option<String>,
    pub file: Option<String>,
    pub copyright: Option<String>,
    pub package_private: bool,
    pub type_params: Vec<JsDocTypeParam>,
    pub params: Vec<JsDocParam>,
    pub returns: Option<String>,
    pub throws: Vec<JsDocThrows>,
    pub examples: Vec<String>,
    pub see: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JsDocTypeParam {
    pub name: String,
    pub description: Option<String>,
    /// Generated for a type parameter that had no documentation of its own.
    pub synthetic: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JsDocParam {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JsDocThrows {
    /// The `{Type}` part, without braces.
    pub ty: Option<String>,
    pub description: Option<String>,
}

/// One tag block of a documentation comment.
///
/// `content` may span several lines separated by `\n`. `tag` is `None` for
/// the free-form description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsDocBlock {
    pub tag: Option<&'static str>,
    pub content: String,
}

impl JsDocBlock {
    fn tagged(tag: &'static str, content: impl Into<String>) -> Self {
        JsDocBlock {
            tag: Some(tag),
            content: content.into(),
        }
    }
}

impl JsDoc {
    pub fn builder() -> JsDocBuilder {
        JsDocBuilder::default()
    }

    /// Whether the comment has no emittable content at all.
    pub fn is_empty(&self) -> bool {
        self.blocks(true).is_empty()
    }

    /// The tag blocks in emission order.
    ///
    /// Synthetic `@typeparam` entries are only included when
    /// `include_synthetic` is set.
    pub fn blocks(&self, include_synthetic: bool) -> Vec<JsDocBlock> {
        let mut blocks = Vec::new();

        if let Some(description) = present(&self.description) {
            blocks.push(JsDocBlock {
                tag: None,
                content: description.to_string(),
            });
        }
        if let Some(summary) = present(&self.summary) {
            blocks.push(JsDocBlock::tagged("summary", summary));
        }
        if let Some(file) = present(&self.file) {
            blocks.push(JsDocBlock::tagged("file", file));
        }
        if let Some(copyright) = present(&self.copyright) {
            blocks.push(JsDocBlock::tagged("copyright", copyright));
        }
        if self.package_private {
            blocks.push(JsDocBlock::tagged("package", ""));
        }
        for type_param in &self.type_params {
            if type_param.synthetic && !include_synthetic {
                continue;
            }
            if type_param.name.trim().is_empty() {
                continue;
            }
            blocks.push(JsDocBlock::tagged(
                "typeparam",
                named_content(&type_param.name, present(&type_param.description)),
            ));
        }
        for param in &self.params {
            if param.name.trim().is_empty() {
                continue;
            }
            blocks.push(JsDocBlock::tagged(
                "param",
                named_content(&param.name, present(&param.description)),
            ));
        }
        if let Some(returns) = present(&self.returns) {
            blocks.push(JsDocBlock::tagged("returns", returns));
        }
        for throws in &self.throws {
            let ty = present(&throws.ty).map(|ty| format!("{{{ty}}}"));
            let content = match (ty, present(&throws.description)) {
                (Some(ty), Some(description)) => format!("{ty} {description}"),
                (Some(ty), None) => ty,
                (None, Some(description)) => description.to_string(),
                (None, None) => continue,
            };
            blocks.push(JsDocBlock::tagged("throws", content));
        }
        for example in self.examples.iter().filter(|e| !e.trim().is_empty()) {
            blocks.push(JsDocBlock::tagged("example", example.as_str()));
        }
        for see in self.see.iter().filter(|s| !s.trim().is_empty()) {
            blocks.push(JsDocBlock::tagged("see", see.as_str()));
        }

        blocks
    }

    /// Parse the body of a `/** ... */` comment (without the delimiters).
    ///
    /// Lines before the first tag form the description. Recognised tags fill
    /// their slot; an unrecognised tag is kept verbatim in the description.
    pub fn parse(body: &str) -> JsDoc {
        let mut builder = JsDocBuilder::default();
        let mut description: Vec<String> = Vec::new();
        let mut current: Option<(String, Vec<String>)> = None;

        for line in doc_comment_lines(body) {
            if let Some(tagged) = line.strip_prefix('@') {
                if let Some((tag, lines)) = current.take() {
                    apply_tag(&mut builder, &mut description, &tag, &lines);
                }
                let (tag, rest) = split_word(tagged);
                current = Some((tag.to_string(), vec![rest.to_string()]));
            } else if let Some((_, lines)) = current.as_mut() {
                lines.push(line);
            } else {
                description.push(line);
            }
        }
        if let Some((tag, lines)) = current.take() {
            apply_tag(&mut builder, &mut description, &tag, &lines);
        }

        builder.description(join_lines(&description)).build()
    }
}

/// Whitespace-only text counts as absent, however the doc was built.
fn present(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|text| !text.trim().is_empty())
}

fn named_content(name: &str, description: Option<&str>) -> String {
    match description {
        Some(description) => format!("{name} {description}"),
        None => name.to_string(),
    }
}

fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(end) => (&text[..end], text[end..].trim_start()),
        None => (text, ""),
    }
}

fn join_lines(lines: &[String]) -> String {
    let mut lines = lines;
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines = &lines[..lines.len() - 1];
    }
    lines.join("\n")
}

fn apply_tag(
    builder: &mut JsDocBuilder,
    description: &mut Vec<String>,
    tag: &str,
    lines: &[String],
) {
    let content = join_lines(lines);
    match tag {
        "summary" => builder.summary_mut(content),
        "file" | "fileoverview" => builder.file_mut(content),
        "copyright" => builder.copyright_mut(content),
        "package" => builder.doc.package_private = true,
        "typeparam" | "template" => {
            let (name, rest) = split_word(&content);
            builder.type_param_mut(name, rest);
        }
        "param" => {
            let (name, rest) = split_word(&content);
            builder.param_mut(name, rest);
        }
        "returns" | "return" => builder.returns_mut(content),
        "throws" | "exception" => {
            let trimmed = content.trim_start();
            let (ty, rest) = match trimmed.strip_prefix('{').and_then(|t| t.split_once('}')) {
                Some((ty, rest)) => (ty, rest.trim_start()),
                None => ("", trimmed),
            };
            builder.throws_mut(ty, rest);
        }
        "example" => builder.example_mut(content),
        "see" => builder.see_mut(content),
        _ => {
            let mut first = format!("@{tag}");
            if let Some(head) = lines.first().filter(|l| !l.is_empty()) {
                first.push(' ');
                first.push_str(head);
            }
            description.push(first);
            description.extend(lines.iter().skip(1).cloned());
        }
    }
}

/// Normalise blank text to `None`.
fn non_blank(text: impl Into<String>) -> Option<String> {
    let text = text.into();
    if text.trim().is_empty() {
        None
    } else {
        Some(text.trim_end().to_string())
    }
}

/// Incremental construction of a [`JsDoc`].
///
/// Every setter ignores blank text, so callers can pass through whatever
/// documentation they have without checking it first.
#[derive(Clone, Debug, Default)]
pub struct JsDocBuilder {
    doc: JsDoc,
}

impl JsDocBuilder {
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.doc.description = non_blank(text);
        self
    }

    pub fn summary(mut self, text: impl Into<String>) -> Self {
        self.summary_mut(text);
        self
    }

    pub fn file(mut self, text: impl Into<String>) -> Self {
        self.file_mut(text);
        self
    }

    pub fn copyright(mut self, text: impl Into<String>) -> Self {
        self.copyright_mut(text);
        self
    }

    pub fn package_private(mut self, package_private: bool) -> Self {
        self.doc.package_private = package_private;
        self
    }

    pub fn type_param(mut self, name: &str, description: impl Into<String>) -> Self {
        self.type_param_mut(name, description);
        self
    }

    /// A `@typeparam` entry generated for an undocumented type parameter.
    pub fn synthetic_type_param(mut self, name: &str) -> Self {
        if !name.trim().is_empty() {
            self.doc.type_params.push(JsDocTypeParam {
                name: name.trim().to_string(),
                description: None,
                synthetic: true,
            });
        }
        self
    }

    pub fn param(mut self, name: &str, description: impl Into<String>) -> Self {
        self.param_mut(name, description);
        self
    }

    pub fn returns(mut self, text: impl Into<String>) -> Self {
        self.returns_mut(text);
        self
    }

    pub fn throws(mut self, ty: &str, description: impl Into<String>) -> Self {
        self.throws_mut(ty, description);
        self
    }

    pub fn example(mut self, text: impl Into<String>) -> Self {
        self.example_mut(text);
        self
    }

    pub fn see(mut self, text: impl Into<String>) -> Self {
        self.see_mut(text);
        self
    }

    pub fn build(self) -> JsDoc {
        self.doc
    }

    fn summary_mut(&mut self, text: impl Into<String>) {
        self.doc.summary = non_blank(text);
    }

    fn file_mut(&mut self, text: impl Into<String>) {
        self.doc.file = non_blank(text);
    }

    fn copyright_mut(&mut self, text: impl Into<String>) {
        self.doc.copyright = non_blank(text);
    }

    fn type_param_mut(&mut self, name: &str, description: impl Into<String>) {
        if let Some(name) = non_blank(name) {
            self.doc.type_params.push(JsDocTypeParam {
                name,
                description: non_blank(description),
                synthetic: false,
            });
        }
    }

    fn param_mut(&mut self, name: &str, description: impl Into<String>) {
        if let Some(name) = non_blank(name) {
            self.doc.params.push(JsDocParam {
                name,
                description: non_blank(description),
            });
        }
    }

    fn returns_mut(&mut self, text: impl Into<String>) {
        self.doc.returns = non_blank(text);
    }

    fn throws_mut(&mut self, ty: &str, description: impl Into<String>) {
        let ty = non_blank(ty);
        let description = non_blank(description);
        if ty.is_some() || description.is_some() {
            self.doc.throws.push(JsDocThrows { ty, description });
        }
    }

    fn example_mut(&mut self, text: impl Into<String>) {
        if let Some(text) = non_blank(text) {
            self.doc.examples.push(text);
        }
    }

    fn see_mut(&mut self, text: impl Into<String>) {
        if let Some(text) = non_blank(text) {
            self.doc.see.push(text);
        }
    }
}
