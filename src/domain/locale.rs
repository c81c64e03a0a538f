use std::fmt;

/// Region tag selecting the instruction-template variant and the
/// language the model is asked to answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Us,
    Id,
}

impl Locale {
    /// Parses a caller-supplied region tag. Unknown or absent values
    /// fall back to [`Locale::Us`].
    pub fn parse(tag: Option<&str>) -> Self {
        match tag {
            Some(t) if t.trim().eq_ignore_ascii_case("id") => Locale::Id,
            _ => Locale::Us,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Us => "US",
            Locale::Id => "ID",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
