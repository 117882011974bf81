//! Vertex identity.
//!
//! A [`Vertex`] is an immutable, normalized label.  Labels come in four
//! kinds: integers, floats, single characters, and pairs of vertices (the
//! last only appear in graph products).  The kind is part of a vertex's
//! identity, so `Vertex::int(1)` and `Vertex::float(1.0)` are different
//! vertices.
//!
//! Vertices are totally ordered: first by kind (integers, then floats, then
//! characters, then pairs) and then by value within a kind.  Characters are
//! case-folded when the vertex is built, so `'A'` and `'a'` name the same
//! vertex.
use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
};

use crate::error::{GraphError, Result};

/// The kind of label a vertex carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VertexKind {
    Int,
    Float,
    Char,
    Pair,
}

/// The normalized label of a vertex.
#[derive(Clone, Debug)]
pub enum VertexId {
    Int(i64),
    /// Never NaN, and never negative zero.
    Float(f64),
    /// Always case-folded.
    Char(char),
    Pair(Box<Vertex>, Box<Vertex>),
}

impl VertexId {
    pub fn kind(&self) -> VertexKind {
        match self {
            VertexId::Int(_) => VertexKind::Int,
            VertexId::Float(_) => VertexKind::Float,
            VertexId::Char(_) => VertexKind::Char,
            VertexId::Pair(..) => VertexKind::Pair,
        }
    }
}

impl PartialEq for VertexId {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VertexId {}

impl PartialOrd for VertexId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VertexId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (VertexId::Int(a), VertexId::Int(b)) => a.cmp(b),
            (VertexId::Float(a), VertexId::Float(b)) => a.total_cmp(b),
            (VertexId::Char(a), VertexId::Char(b)) => a.cmp(b),
            (VertexId::Pair(a1, a2), VertexId::Pair(b1, b2)) => a1.cmp(b1).then_with(|| a2.cmp(b2)),
            _ => self.kind().cmp(&other.kind()),
        }
    }
}

impl Hash for VertexId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            VertexId::Int(i) => i.hash(state),
            VertexId::Float(f) => f.to_bits().hash(state),
            VertexId::Char(c) => c.hash(state),
            VertexId::Pair(a, b) => {
                a.hash(state);
                b.hash(state);
            }
        }
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            VertexId::Int(i) => write!(f, "{i}"),
            VertexId::Float(x) => write!(f, "{x:?}"),
            VertexId::Char(c) => write!(f, "{c}"),
            VertexId::Pair(a, b) => write!(f, "({}, {})", a.id(), b.id()),
        }
    }
}

/// A graph vertex.  See the [module documentation](self) for the identity
/// and ordering rules.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex {
    id: VertexId,
}

impl Vertex {
    pub fn int(value: i64) -> Self {
        Vertex {
            id: VertexId::Int(value),
        }
    }

    /// Creates a float-labelled vertex.  Fails for NaN, which has no
    /// consistent identity.
    pub fn float(value: f64) -> Result<Self> {
        if value.is_nan() {
            return Err(GraphError::InvalidVertexId(format!("{value}")));
        }
        // Fold -0.0 into 0.0 so equality and hashing agree with `==` on f64.
        let value = if value == 0.0 { 0.0 } else { value };
        Ok(Vertex {
            id: VertexId::Float(value),
        })
    }

    pub fn char(value: char) -> Self {
        Vertex {
            id: VertexId::Char(fold_case(value)),
        }
    }

    /// Creates a vertex from a one-character string.
    pub fn parse(value: &str) -> Result<Self> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Vertex::char(c)),
            _ => Err(GraphError::InvalidVertexId(value.to_string())),
        }
    }

    pub fn pair(first: Vertex, second: Vertex) -> Self {
        Vertex {
            id: VertexId::Pair(Box::new(first), Box::new(second)),
        }
    }

    pub fn id(&self) -> &VertexId {
        &self.id
    }

    pub fn kind(&self) -> VertexKind {
        self.id.kind()
    }

    /// Returns the two components of a product vertex.
    pub fn as_pair(&self) -> Option<(&Vertex, &Vertex)> {
        match &self.id {
            VertexId::Pair(a, b) => Some((a, b)),
            _ => None,
        }
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex({})", self.id)
    }
}

/// Characters whose lowercase form is more than one character are kept as is.
fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Conversion of the accepted id types into a [`Vertex`].
///
/// Every graph method that takes a vertex accepts any `IntoVertex` value, so
/// `graph.add_edge('a', 'b')` and `graph.add_edge(&a, &b)` are equivalent.
pub trait IntoVertex {
    fn into_vertex(self) -> Result<Vertex>;
}

impl IntoVertex for Vertex {
    fn into_vertex(self) -> Result<Vertex> {
        Ok(self)
    }
}

impl IntoVertex for &Vertex {
    fn into_vertex(self) -> Result<Vertex> {
        Ok(self.clone())
    }
}

macro_rules! into_vertex_lossless {
    ($($t:ty),*) => {
        $(
            impl IntoVertex for $t {
                fn into_vertex(self) -> Result<Vertex> {
                    Ok(Vertex::int(i64::from(self)))
                }
            }
        )*
    };
}

into_vertex_lossless!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! into_vertex_checked {
    ($($t:ty),*) => {
        $(
            impl IntoVertex for $t {
                fn into_vertex(self) -> Result<Vertex> {
                    i64::try_from(self)
                        .map(Vertex::int)
                        .map_err(|_| GraphError::InvalidVertexId(self.to_string()))
                }
            }
        )*
    };
}

into_vertex_checked!(u64, usize, isize);

impl IntoVertex for f64 {
    fn into_vertex(self) -> Result<Vertex> {
        Vertex::float(self)
    }
}

impl IntoVertex for f32 {
    fn into_vertex(self) -> Result<Vertex> {
        Vertex::float(f64::from(self))
    }
}

impl IntoVertex for char {
    fn into_vertex(self) -> Result<Vertex> {
        Ok(Vertex::char(self))
    }
}

impl IntoVertex for &str {
    fn into_vertex(self) -> Result<Vertex> {
        Vertex::parse(self)
    }
}

impl IntoVertex for String {
    fn into_vertex(self) -> Result<Vertex> {
        Vertex::parse(&self)
    }
}

impl IntoVertex for &String {
    fn into_vertex(self) -> Result<Vertex> {
        Vertex::parse(self)
    }
}

impl<A, B> IntoVertex for (A, B)
where
    A: IntoVertex,
    B: IntoVertex,
{
    fn into_vertex(self) -> Result<Vertex> {
        Ok(Vertex::pair(self.0.into_vertex()?, self.1.into_vertex()?))
    }
}
