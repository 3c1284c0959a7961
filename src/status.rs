use serde::{Deserialize, Serialize};

/// Preference flag a source ontology attaches to one name of a concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameStatus {
    Primary,
    Alternate,
}

/// Raised when a source supplies a status code outside the known vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown name status code '{code}', expected 'P' or 'A'")]
pub struct UnknownStatusCode {
    pub code: char,
}

impl NameStatus {
    pub const fn code(self) -> char {
        match self {
            Self::Primary => 'P',
            Self::Alternate => 'A',
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Alternate => "Alternate",
        }
    }

    /// Collapses the statuses one name carries across source ontologies into
    /// a single flag: preferred in any source means preferred overall.
    pub fn collapse<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = NameStatus>,
    {
        if statuses.into_iter().any(|status| status == Self::Primary) {
            Self::Primary
        } else {
            Self::Alternate
        }
    }
}

impl TryFrom<char> for NameStatus {
    type Error = UnknownStatusCode;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code {
            'P' => Ok(Self::Primary),
            'A' => Ok(Self::Alternate),
            other => Err(UnknownStatusCode { code: other }),
        }
    }
}

/// Raw-code form of [`NameStatus::collapse`] for callers still holding the
/// untyped per-source column: returns `'P'` if any code is `'P'`, else `'A'`.
/// Codes outside the vocabulary are simply treated as non-primary.
pub fn collapse_status_codes<I>(codes: I) -> char
where
    I: IntoIterator<Item = char>,
{
    if codes.into_iter().any(|code| code == 'P') {
        'P'
    } else {
        'A'
    }
}
