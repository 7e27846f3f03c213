use std::fmt;
use std::hash::{Hash, Hasher};

/// A tournament competitor.
///
/// `name` is the join key into the win matrices; `seed` is the bracket
/// placement rank and plays no part in probability lookups. Identity is the
/// load-order `id` alone: two `Team` values with the same id are
/// interchangeable in any map or set, whatever their other fields say.
#[derive(Debug, Clone)]
pub struct Team {
    id: u32,
    name: String,
    seed: u32,
}

impl Team {
    pub fn new(id: u32, name: impl Into<String>, seed: u32) -> Self {
        Team {
            id,
            name: name.into(),
            seed,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Team {}

impl Hash for Team {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
