#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

/// Active publication language.
///
/// Every content row carries an Arabic and a French rendition; the active
/// language picks between them and drives the document direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    Ar,
    Fr,
}

impl Lang {
    /// BCP 47 code used for `<html lang>` and storage.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::Fr => "fr",
        }
    }

    /// Document direction for `<html dir>`.
    #[must_use]
    pub fn dir(self) -> &'static str {
        match self {
            Self::Ar => "rtl",
            Self::Fr => "ltr",
        }
    }

    /// Parse a stored code, defaulting to Arabic on anything unknown.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "fr" => Self::Fr,
            _ => Self::Ar,
        }
    }

    /// The other language.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ar => Self::Fr,
            Self::Fr => Self::Ar,
        }
    }

    /// Select the rendition matching the active language.
    #[must_use]
    pub fn pick<'a>(self, ar: &'a str, fr: &'a str) -> &'a str {
        match self {
            Self::Ar => ar,
            Self::Fr => fr,
        }
    }
}
