//! Structured field paths
//!
//! A [`FieldPath`] is an ordered list of segments rendered the way the
//! validation-error protocol expects: named segments joined with `.`, index
//! and key segments wrapped in brackets (`spec.containers[0].env[HOME]`).
//!
//! Copyright (c) 2025 Fielderr Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Rendering of a path that points at nothing in particular
pub const EMPTY_PATH: &str = "";

/// A single step in a [`FieldPath`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A named field
    Name(String),
    /// A position in a list
    Index(usize),
    /// A key in a map
    Key(String),
}

/// Ordered field path with a canonical string rendering
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// Create a path rooted at the given field name
    ///
    /// A root named `""` still counts as a segment, so `FieldPath::new("").child("a")`
    /// renders as `.a`.
    pub fn new<S: Into<String>>(root: S) -> Self {
        Self {
            segments: vec![Segment::Name(root.into())],
        }
    }

    /// Create a path with no segments
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a path whose segments are all field names, first one as root
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: names.into_iter().map(|n| Segment::Name(n.into())).collect(),
        }
    }

    /// Parse a rendered path such as `spec.items[2].labels[app]`
    ///
    /// Bracketed numbers become index segments, other bracketed text becomes
    /// key segments. Malformed brackets are kept verbatim in the field name.
    pub fn parse(rendered: &str) -> Self {
        if rendered == EMPTY_PATH {
            return Self::default();
        }

        let mut segments = Vec::new();
        for piece in rendered.split('.') {
            parse_piece(piece, &mut segments);
        }
        Self { segments }
    }

    /// Return a new path with a named child appended
    pub fn child<S: Into<String>>(&self, name: S) -> Self {
        let mut path = self.clone();
        path.segments.push(Segment::Name(name.into()));
        path
    }

    /// Return a new path with several named children appended in order
    pub fn children<I, S>(&self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut path = self.clone();
        path.segments
            .extend(names.into_iter().map(|n| Segment::Name(n.into())));
        path
    }

    /// Return a new path with a list index appended
    pub fn index(&self, index: usize) -> Self {
        let mut path = self.clone();
        path.segments.push(Segment::Index(index));
        path
    }

    /// Return a new path with a map key appended
    pub fn key<S: Into<String>>(&self, key: S) -> Self {
        let mut path = self.clone();
        path.segments.push(Segment::Key(key.into()));
        path
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True when the path renders as [`EMPTY_PATH`]
    pub fn is_empty(&self) -> bool {
        match self.segments.as_slice() {
            [] => true,
            [Segment::Name(name)] => name.is_empty(),
            _ => false,
        }
    }
}

fn parse_piece(piece: &str, segments: &mut Vec<Segment>) {
    let Some(open) = piece.find('[') else {
        segments.push(Segment::Name(piece.to_string()));
        return;
    };

    let (name, brackets) = piece.split_at(open);
    match parse_brackets(brackets) {
        Some(subscripts) => {
            if !name.is_empty() {
                segments.push(Segment::Name(name.to_string()));
            }
            segments.extend(subscripts);
        }
        None => segments.push(Segment::Name(piece.to_string())),
    }
}

fn parse_brackets(mut rest: &str) -> Option<Vec<Segment>> {
    let mut subscripts = Vec::new();
    while !rest.is_empty() {
        let inner = rest.strip_prefix('[')?;
        let close = inner.find(']')?;
        let subscript = &inner[..close];
        subscripts.push(match subscript.parse::<usize>() {
            Ok(index) => Segment::Index(index),
            Err(_) => Segment::Key(subscript.to_string()),
        });
        rest = &inner[close + 1..];
    }
    Some(subscripts)
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Name(name) => {
                    if position > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                Segment::Index(index) => write!(f, "[{}]", index)?,
                Segment::Key(key) => write!(f, "[{}]", key)?,
            }
        }
        Ok(())
    }
}

impl From<&str> for FieldPath {
    fn from(rendered: &str) -> Self {
        Self::parse(rendered)
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rendered = String::deserialize(deserializer)?;
        Ok(Self::parse(&rendered))
    }
}
