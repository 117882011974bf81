use std::fmt::{self, Display, Formatter};

/// Whether the edges of a graph have a direction.
///
/// A single [`Graph`](crate::Graph) type covers both cases, so products of
/// mixed inputs pick their directedness at run time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Directedness {
    #[default]
    Undirected,
    Directed,
}

impl Directedness {
    pub fn is_directed(self) -> bool {
        self == Directedness::Directed
    }

    /// The directedness of a graph combining inputs of `self` and `other`:
    /// directed if either one is.
    pub fn combine(self, other: Directedness) -> Directedness {
        if self.is_directed() || other.is_directed() {
            Directedness::Directed
        } else {
            Directedness::Undirected
        }
    }
}

impl From<bool> for Directedness {
    fn from(directed: bool) -> Self {
        if directed {
            Directedness::Directed
        } else {
            Directedness::Undirected
        }
    }
}

impl Display for Directedness {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Directedness::Undirected => write!(f, "undirected"),
            Directedness::Directed => write!(f, "directed"),
        }
    }
}
