use std::fmt::{self, Display, Formatter};

use crate::error::{GraphError, Result};

/// A display label for a graph.
///
/// Labels carry no identity semantics: two graphs with the same label are
/// not related, and structural equality of graphs ignores the label.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphId {
    Int(i64),
    /// Always finite.
    Float(f64),
    /// Never empty.
    Text(String),
}

impl Display for GraphId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GraphId::Int(i) => write!(f, "{i}"),
            GraphId::Float(x) => write!(f, "{x:?}"),
            GraphId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Conversion of the accepted label types into a [`GraphId`].
pub trait IntoGraphId {
    fn into_graph_id(self) -> Result<GraphId>;
}

impl IntoGraphId for GraphId {
    fn into_graph_id(self) -> Result<GraphId> {
        Ok(self)
    }
}

impl IntoGraphId for &GraphId {
    fn into_graph_id(self) -> Result<GraphId> {
        Ok(self.clone())
    }
}

macro_rules! into_graph_id_int {
    ($($t:ty),*) => {
        $(
            impl IntoGraphId for $t {
                fn into_graph_id(self) -> Result<GraphId> {
                    i64::try_from(self)
                        .map(GraphId::Int)
                        .map_err(|_| GraphError::InvalidGraphId(self.to_string()))
                }
            }
        )*
    };
}

into_graph_id_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl IntoGraphId for f64 {
    fn into_graph_id(self) -> Result<GraphId> {
        if self.is_finite() {
            Ok(GraphId::Float(self))
        } else {
            Err(GraphError::InvalidGraphId(self.to_string()))
        }
    }
}

impl IntoGraphId for f32 {
    fn into_graph_id(self) -> Result<GraphId> {
        f64::from(self).into_graph_id()
    }
}

impl IntoGraphId for &str {
    fn into_graph_id(self) -> Result<GraphId> {
        self.to_string().into_graph_id()
    }
}

impl IntoGraphId for String {
    fn into_graph_id(self) -> Result<GraphId> {
        if self.is_empty() {
            Err(GraphError::InvalidGraphId(self))
        } else {
            Ok(GraphId::Text(self))
        }
    }
}

impl IntoGraphId for char {
    fn into_graph_id(self) -> Result<GraphId> {
        Ok(GraphId::Text(self.to_string()))
    }
}
