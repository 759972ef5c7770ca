//! Messages and the formatter that turns them into channel lines.
//!
//! There are two message shapes, picked by the constructor the caller uses:
//!
//! - **Template**: literal fragments interleaved with values, like a tagged
//!   template. Fragments are copied verbatim; `\n` in a raw fragment stays a
//!   backslash followed by `n`.
//! - **Placeholder**: a string with `{0}`, `{1}`, … tokens and positional
//!   arguments. Tokens without a matching argument are left as-is.
//!
//! Formatting never fails. The only fallible step is building a template from
//! fragment/value lists whose lengths do not line up; the [`template!`] macro
//! makes that mismatch impossible.

use std::fmt::{self, Display};
use std::iter;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `{` + ASCII digits + `}`. `\d` would also match non-ASCII digits.
static PLACEHOLDER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([0-9]+)\}").expect("placeholder pattern is valid"));

/// Error building a [`TemplateMessage`] from separate fragment and value lists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageError {
    #[error(
        "template needs exactly one more fragment than values (got {fragments} fragments and {values} values)"
    )]
    Arity { fragments: usize, values: usize },
}

/// Literal fragments surrounding interpolated values.
///
/// Invariant: `fragments.len() == values.len() + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMessage {
    fragments: Vec<String>,
    values: Vec<String>,
}

impl TemplateMessage {
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    fn render(&self) -> String {
        let capacity = self.fragments.iter().chain(&self.values).map(String::len).sum();
        let mut line = String::with_capacity(capacity);
        let values = self.values.iter().map(Some).chain(iter::once(None));
        for (fragment, value) in self.fragments.iter().zip(values) {
            line.push_str(fragment);
            if let Some(value) = value {
                line.push_str(value);
            }
        }
        line
    }
}

/// A `{N}`-style template with positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMessage {
    template: String,
    args: Vec<String>,
}

impl PlaceholderMessage {
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn render(&self) -> String {
        if self.args.is_empty() {
            return self.template.clone();
        }

        PLACEHOLDER_TOKEN
            .replace_all(&self.template, |caps: &Captures<'_>| {
                // Digit runs too long for usize can't index anything either.
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.args.get(index))
                    .map_or_else(|| caps[0].to_string(), Clone::clone)
            })
            .into_owned()
    }
}

/// A message destined for the output channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Template(TemplateMessage),
    Placeholder(PlaceholderMessage),
}

impl Message {
    /// Build a template message from separate fragment and value lists.
    ///
    /// Values are rendered with `Display` immediately.
    pub fn template<F, V>(
        fragments: impl IntoIterator<Item = F>,
        values: impl IntoIterator<Item = V>,
    ) -> Result<Self, MessageError>
    where
        F: Into<String>,
        V: Display,
    {
        let fragments: Vec<String> = fragments.into_iter().map(Into::into).collect();
        let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        if fragments.len() != values.len() + 1 {
            return Err(MessageError::Arity {
                fragments: fragments.len(),
                values: values.len(),
            });
        }
        Ok(Self::Template(TemplateMessage { fragments, values }))
    }

    /// Build a placeholder message. Arguments are rendered with `Display` immediately.
    pub fn placeholder<V: Display>(
        template: impl Into<String>,
        args: impl IntoIterator<Item = V>,
    ) -> Self {
        Self::Placeholder(PlaceholderMessage {
            template: template.into(),
            args: args.into_iter().map(|a| a.to_string()).collect(),
        })
    }

    /// A message with no interpolation at all.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Template(TemplateMessage {
            fragments: vec![text.into()],
            values: Vec::new(),
        })
    }

    /// Used by [`template!`], which guarantees the arity by construction.
    #[doc(hidden)]
    pub fn template_from_parts(fragments: Vec<String>, values: Vec<String>) -> Self {
        debug_assert_eq!(fragments.len(), values.len() + 1);
        Self::Template(TemplateMessage { fragments, values })
    }

    /// Format into a single channel line.
    pub fn format(&self) -> String {
        format(self)
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Format a message into the line that gets appended to the channel.
pub fn format(message: &Message) -> String {
    match message {
        Message::Template(template) => template.render(),
        Message::Placeholder(placeholder) => placeholder.render(),
    }
}

/// Build a [`Message::Template`] from alternating fragments and values.
///
/// Arguments alternate fragment, value, fragment, …, always starting and
/// ending with a fragment. Fragments must convert into `String`; values only
/// need `Display`, and may have different types.
///
/// ```
/// use extension_kit::template;
///
/// let message = template!("Processed ", "main.rs", " (", 120, " lines)");
/// assert_eq!(message.format(), "Processed main.rs (120 lines)");
///
/// // Raw fragments keep their backslashes.
/// assert_eq!(template!(r"C:\temp\", 1, "").format(), r"C:\temp\1");
/// ```
#[macro_export]
macro_rules! template {
    ($first:expr $(, $value:expr, $fragment:expr)* $(,)?) => {{
        let fragments: ::std::vec::Vec<::std::string::String> = ::std::vec![
            ::std::string::String::from($first)
            $(, ::std::string::String::from($fragment))*
        ];
        let values: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$(::std::string::ToString::to_string(&$value)),*];
        $crate::output::Message::template_from_parts(fragments, values)
    }};
}

/// Build a [`Message::Placeholder`] from a `{N}` template and arguments of any
/// `Display` type.
///
/// ```
/// use extension_kit::placeholder;
///
/// let message = placeholder!("Processing {0} of {1}", "file.ts", 10);
/// assert_eq!(message.format(), "Processing file.ts of 10");
/// ```
#[macro_export]
macro_rules! placeholder {
    ($template:expr $(, $arg:expr)* $(,)?) => {{
        let args: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$(::std::string::ToString::to_string(&$arg)),*];
        $crate::output::Message::placeholder($template, args)
    }};
}
