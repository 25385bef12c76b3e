use std::{fmt, str::FromStr};

use whatlang::Lang;

use crate::resolver::Skip;

/// The two wikis a title can be looked up on.
///
/// French is the primary locale: a title is only searched on the French wiki when the
/// detector is confident it is French. Everything else goes to the English wiki.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Locale {
    French,
    English,
}

impl Locale {
    pub const PRIMARY: Locale = Locale::French;

    /// Wiki subdomain and language code.
    pub fn code(self) -> &'static str {
        match self {
            Locale::French => "fr",
            Locale::English => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" | "french" => Ok(Locale::French),
            "en" | "english" => Ok(Locale::English),
            other => Err(format!("unsupported locale: {other} (expected fr or en)")),
        }
    }
}

/// Guess which wiki a title belongs to.
///
/// Only the detector's top guess is considered. Input with nothing to detect on (empty,
/// digits only) yields [`Skip::UndetectedLanguage`].
pub fn detect(title: &str) -> Result<Locale, Skip> {
    let info = whatlang::detect(title).ok_or(Skip::UndetectedLanguage)?;
    if info.lang() == Lang::Fra {
        Ok(Locale::PRIMARY)
    } else {
        Ok(Locale::English)
    }
}
