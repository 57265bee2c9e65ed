use crate::error::{ApiError, ApiResult};

/// Rules for turning a symbolic name (e.g. `App\Core\Util\Helper`) into the
/// file names a strategy looks for.
///
/// A scheme is immutable once built; every lookup derives its own file name
/// from it, so one scheme can be shared by concurrent lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingScheme {
    delimiter: char,
    extension: String,
}

impl NamingScheme {
    pub const DEFAULT_DELIMITER: char = '\\';
    pub const DEFAULT_EXTENSION: &'static str = "php";

    /// Build a scheme. A single leading `.` on the extension is accepted and dropped.
    pub fn new(delimiter: char, extension: impl Into<String>) -> ApiResult<Self> {
        if delimiter.is_whitespace() || delimiter.is_control() {
            return Err(ApiError::InvalidArgument(format!(
                "namespace delimiter {:?} must be a visible character",
                delimiter
            )));
        }

        let extension: String = extension.into();
        let extension = extension.strip_prefix('.').unwrap_or(&extension);
        if extension.is_empty() {
            return Err(ApiError::InvalidArgument(
                "file extension must not be empty".to_string(),
            ));
        }
        if extension.contains(['/', '\\']) {
            return Err(ApiError::InvalidArgument(format!(
                "file extension '{}' must not contain a path separator",
                extension
            )));
        }

        Ok(Self {
            delimiter,
            extension: extension.to_string(),
        })
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Drop every leading delimiter (`\Foo\Bar` -> `Foo\Bar`).
    pub fn trim_leading<'a>(&self, name: &'a str) -> &'a str {
        name.trim_start_matches(self.delimiter)
    }

    /// The final segment of a symbolic name, after leading delimiters are removed.
    ///
    /// `Foo\Bar\Baz` -> `Baz`, `Baz` -> `Baz`, `Foo\` -> `""`.
    pub fn strict_name<'a>(&self, name: &'a str) -> &'a str {
        let name = self.trim_leading(name);
        match name.rfind(self.delimiter) {
            Some(pos) => &name[pos + self.delimiter.len_utf8()..],
            None => name,
        }
    }

    /// Append the extension to a bare name.
    pub fn file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem, self.extension)
    }

    /// File name searched for when resolving `name`, or `None` when the name
    /// has no usable final segment.
    pub fn target_file_name(&self, name: &str) -> Option<String> {
        let strict = self.strict_name(name);
        if strict.is_empty() {
            None
        } else {
            Some(self.file_name(strict))
        }
    }
}

impl Default for NamingScheme {
    fn default() -> Self {
        Self {
            delimiter: Self::DEFAULT_DELIMITER,
            extension: Self::DEFAULT_EXTENSION.to_string(),
        }
    }
}
