//! Symbol records and the per-kind display/link rules.
//!
//! Every documented entity in the generated reference belongs to exactly one
//! [`SymbolKind`]. The kind decides which raw field becomes the display label and
//! which page the result links to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of symbol categories emitted by the documentation generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Alias,
    Bitfield,
    Callback,
    Class,
    ClassMethod,
    Constant,
    Ctor,
    Domain,
    Enum,
    Function,
    FunctionMacro,
    Interface,
    Method,
    Property,
    Record,
    Signal,
    TypeFunc,
    Union,
    Vfunc,
}

impl SymbolKind {
    pub const ALL: [Self; 19] = [
        Self::Alias,
        Self::Bitfield,
        Self::Callback,
        Self::Class,
        Self::ClassMethod,
        Self::Constant,
        Self::Ctor,
        Self::Domain,
        Self::Enum,
        Self::Function,
        Self::FunctionMacro,
        Self::Interface,
        Self::Method,
        Self::Property,
        Self::Record,
        Self::Signal,
        Self::TypeFunc,
        Self::Union,
        Self::Vfunc,
    ];

    /// The tag used for this kind in the index payload.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alias => "alias",
            Self::Bitfield => "bitfield",
            Self::Callback => "callback",
            Self::Class => "class",
            Self::ClassMethod => "class_method",
            Self::Constant => "constant",
            Self::Ctor => "ctor",
            Self::Domain => "domain",
            Self::Enum => "enum",
            Self::Function => "function",
            Self::FunctionMacro => "function_macro",
            Self::Interface => "interface",
            Self::Method => "method",
            Self::Property => "property",
            Self::Record => "record",
            Self::Signal => "signal",
            Self::TypeFunc => "type_func",
            Self::Union => "union",
            Self::Vfunc => "vfunc",
        }
    }

    /// Whether symbols of this kind live inside an owning type.
    ///
    /// Member kinds carry a `type_name`, which takes part in identity and in
    /// link formation.
    pub const fn is_member(self) -> bool {
        matches!(
            self,
            Self::ClassMethod
                | Self::Ctor
                | Self::Method
                | Self::Property
                | Self::Signal
                | Self::TypeFunc
                | Self::Vfunc
        )
    }

    /// Filename prefix of the page documenting a symbol of this kind.
    ///
    /// Returns `None` for kinds that have no page of their own.
    pub const fn page_prefix(self) -> Option<&'static str> {
        Some(match self {
            Self::Alias => "alias",
            Self::Bitfield => "flags",
            Self::Callback => "callback",
            Self::Class => "class",
            Self::ClassMethod => "class_method",
            Self::Constant => "const",
            Self::Ctor => "ctor",
            Self::Domain => "error",
            Self::Enum => "enum",
            Self::Function | Self::FunctionMacro => "func",
            Self::Interface => "iface",
            Self::Method => "method",
            Self::Property => "property",
            Self::Record => "struct",
            Self::TypeFunc => "type_func",
            Self::Union => "union",
            Self::Vfunc => "vfunc",
            Self::Signal => return None,
        })
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a kind tag is outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported symbol kind '{0}'")]
pub struct UnsupportedKind(pub String);

impl FromStr for SymbolKind {
    type Err = UnsupportedKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnsupportedKind(s.to_string()))
    }
}

/// One indexed symbol, as resolved from the symbol table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRecord {
    pub kind: SymbolKind,
    pub name: String,
    /// Owning type, only meaningful for member kinds.
    pub type_name: Option<String>,
    pub ctype: Option<String>,
    pub ident: Option<String>,
}

impl SymbolRecord {
    /// Identity used for de-duplication across query terms.
    pub fn identity(&self) -> SymbolIdentity {
        SymbolIdentity::new(self.kind, self.type_name.as_deref(), &self.name)
    }

    /// Label shown for this symbol in a result listing.
    ///
    /// Returns `None` when the field the kind relies on is missing from the record.
    pub fn display_text(&self) -> Option<String> {
        match self.kind {
            SymbolKind::Alias
            | SymbolKind::Bitfield
            | SymbolKind::Class
            | SymbolKind::Domain
            | SymbolKind::Enum
            | SymbolKind::Interface
            | SymbolKind::Record
            | SymbolKind::Union => self.ctype.clone(),
            SymbolKind::ClassMethod
            | SymbolKind::Constant
            | SymbolKind::Ctor
            | SymbolKind::Function
            | SymbolKind::FunctionMacro
            | SymbolKind::Method
            | SymbolKind::TypeFunc => self.ident.clone(),
            SymbolKind::Property => self.member_text(":"),
            SymbolKind::Signal => self.member_text("::"),
            SymbolKind::Vfunc => self.member_text("."),
            SymbolKind::Callback => Some(self.name.clone()),
        }
    }

    /// Relative filename of the page documenting this symbol.
    pub fn link(&self) -> Option<String> {
        let prefix = self.kind.page_prefix()?;
        if self.kind.is_member() {
            let type_name = self.type_name.as_deref()?;
            Some(format!("{}.{}.{}.html", prefix, type_name, self.name))
        } else {
            Some(format!("{}.{}.html", prefix, self.name))
        }
    }

    fn member_text(&self, separator: &str) -> Option<String> {
        self.type_name
            .as_deref()
            .map(|type_name| format!("{}{}{}", type_name, separator, self.name))
    }
}

/// `(kind, name)`, plus the owning type for member kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolIdentity {
    pub kind: SymbolKind,
    pub type_name: Option<String>,
    pub name: String,
}

impl SymbolIdentity {
    pub fn new(kind: SymbolKind, type_name: Option<&str>, name: &str) -> Self {
        Self {
            kind,
            type_name: type_name
                .filter(|_| kind.is_member())
                .map(str::to_string),
            name: name.to_string(),
        }
    }
}
