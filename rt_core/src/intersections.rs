use std::ops::Index;

use crate::intersection::Intersection;

/// An ordered collection of intersections.
///
/// Records keep their insertion order until a hit is requested;
/// `hit()` then sorts them (stably) by `t`, once.
#[derive(Debug, Clone, Default)]
pub struct Intersections<'a> {
    intersections: Vec<Intersection<'a>>,
    sorted: bool,
}

impl<'a> Intersections<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.intersections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intersections.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Intersection<'a>> {
        self.intersections.iter()
    }

    /// Moves every record of `other` into this collection.
    pub fn append(&mut self, mut other: Intersections<'a>) {
        self.intersections.append(&mut other.intersections);
        self.sorted = false;
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Sorts by ascending `t`. Records with equal `t` keep their relative order.
    pub fn sort(&mut self) {
        if !self.sorted {
            self.intersections.sort_by(|a, b| a.t.total_cmp(&b.t));
            self.sorted = true;
        }
    }

    pub fn sorted(&self) -> Self {
        let mut sorted = self.clone();
        sorted.sort();
        sorted
    }

    /// Finds the intersection that hits the object:
    /// the one with the smallest strictly positive t.
    /// Intersections at or behind the ray origin are never hits.
    pub fn hit(&mut self) -> Option<Intersection<'a>> {
        self.sort();
        self.intersections.iter().find(|i| i.t > 0.).copied()
    }
}

impl<'a> From<Vec<Intersection<'a>>> for Intersections<'a> {
    fn from(intersections: Vec<Intersection<'a>>) -> Self {
        Self {
            intersections,
            sorted: false,
        }
    }
}

impl<'a> FromIterator<Intersection<'a>> for Intersections<'a> {
    fn from_iter<I: IntoIterator<Item = Intersection<'a>>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> Extend<Intersection<'a>> for Intersections<'a> {
    fn extend<I: IntoIterator<Item = Intersection<'a>>>(&mut self, iter: I) {
        self.intersections.extend(iter);
        self.sorted = false;
    }
}

impl<'a> IntoIterator for Intersections<'a> {
    type Item = Intersection<'a>;
    type IntoIter = std::vec::IntoIter<Intersection<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intersections.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b Intersections<'a> {
    type Item = &'b Intersection<'a>;
    type IntoIter = std::slice::Iter<'b, Intersection<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intersections.iter()
    }
}

impl<'a> Index<usize> for Intersections<'a> {
    type Output = Intersection<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.intersections[index]
    }
}
