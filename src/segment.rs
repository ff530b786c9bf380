//! The ruler: a straight line between two world-space points.

use std::fmt;

use crate::{Lengthf32, Pointf32};

/// Line segment along which volumes are probed, in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub p1: Pointf32,
    pub p2: Pointf32,
}

impl LineSegment {

    pub fn new(p1: Pointf32, p2: Pointf32) -> Self { Self { p1, p2 } }

    pub fn from_components((x1, y1, z1): (Lengthf32, Lengthf32, Lengthf32),
                           (x2, y2, z2): (Lengthf32, Lengthf32, Lengthf32)) -> Self {
        Self::new(Pointf32::new(x1, y1, z1), Pointf32::new(x2, y2, z2))
    }

    /// Euclidean length in world units.
    pub fn length(&self) -> Lengthf32 { (self.p2 - self.p1).norm() }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (p, q) = (self.p1, self.p2);
        write!(f, "<segment ({:8.2} {:8.2} {:8.2}) -> ({:8.2} {:8.2} {:8.2}) : {:7.2}mm>",
               p.x, p.y, p.z,
               q.x, q.y, q.z,
               self.length())
    }
}
