//! Points per side

use crate::core::Side;
use serde::Serialize;
use std::fmt;
use std::ops::Index;

/// Number of won cards per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Score([usize; 2]);

impl Score {
    pub fn new(ebb: usize, flow: usize) -> Self {
        Score([ebb, flow])
    }

    pub fn get(&self, side: Side) -> usize {
        self.0[side.index()]
    }

    /// The side with strictly more points, if any
    pub fn leader(&self) -> Option<Side> {
        match self.0[0].cmp(&self.0[1]) {
            std::cmp::Ordering::Greater => Some(Side::Ebb),
            std::cmp::Ordering::Less => Some(Side::Flow),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn total(&self) -> usize {
        self.0[0] + self.0[1]
    }

    pub fn as_array(&self) -> [usize; 2] {
        self.0
    }
}

impl Index<Side> for Score {
    type Output = usize;

    fn index(&self, side: Side) -> &Self::Output {
        &self.0[side.index()]
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ebb {} : {} Flow", self.0[0], self.0[1])
    }
}
