use std::{fmt, str::FromStr};

use eyre::eyre;
use mason_codegen::builder;

/// A Java modifier keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
    Default,
}

impl Modifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Abstract => "abstract",
            Self::Static => "static",
            Self::Final => "final",
            Self::Transient => "transient",
            Self::Volatile => "volatile",
            Self::Synchronized => "synchronized",
            Self::Native => "native",
            Self::Strictfp => "strictfp",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Modifier {
    type Err = eyre::Report;

    fn from_str(s: &str) -> eyre::Result<Self> {
        Ok(match s {
            "public" => Self::Public,
            "protected" => Self::Protected,
            "private" => Self::Private,
            "abstract" => Self::Abstract,
            "static" => Self::Static,
            "final" => Self::Final,
            "transient" => Self::Transient,
            "volatile" => Self::Volatile,
            "synchronized" => Self::Synchronized,
            "native" => Self::Native,
            "strictfp" => Self::Strictfp,
            "default" => Self::Default,
            other => return Err(eyre!("unknown modifier '{}'", other)),
        })
    }
}

/// An ordered modifier list, rendered as written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modifiers(Vec<Modifier>);

impl Modifiers {
    pub fn new(modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        Self(modifiers.into_iter().collect())
    }

    /// Parse modifier keywords.
    pub fn parse<'a>(keywords: impl IntoIterator<Item = &'a str>) -> eyre::Result<Self> {
        keywords
            .into_iter()
            .map(str::parse)
            .collect::<eyre::Result<Vec<_>>>()
            .map(Self)
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0.contains(&modifier)
    }

    pub fn is_static(&self) -> bool {
        self.contains(Modifier::Static)
    }

    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.0.iter().copied()
    }

    /// Keywords followed by a space, or an empty string.
    pub fn prefix(&self) -> String {
        self.0.iter().map(|m| format!("{} ", m)).collect()
    }
}

impl From<builder::Modifiers> for Modifiers {
    fn from(modifiers: builder::Modifiers) -> Self {
        let visibility = match modifiers.visibility {
            builder::Visibility::Public => Some(Modifier::Public),
            builder::Visibility::Private => Some(Modifier::Private),
            builder::Visibility::Package => None,
        };
        let is_static = modifiers.is_static.then_some(Modifier::Static);
        Self::new(visibility.into_iter().chain(is_static))
    }
}
