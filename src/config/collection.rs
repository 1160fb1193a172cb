//! Ordered collections of configuration blocks.

/// A block that is rendered inside a plural enclosing block (e.g., each
/// `<link>` lives inside `<links>`).
pub trait Element: std::fmt::Display {
    /// The name of the enclosing block.
    const BLOCK: &'static str;
}

/// An ordered collection of configuration blocks of one type.
///
/// A collection can be created from nothing, a single element, a [`Vec`] of
/// elements, or another collection, which all normalize to the same ordered
/// sequence. An empty collection renders to nothing at all.
///
/// # Examples
///
/// ```
/// use circosconf::config::Rule;
/// use circosconf::config::Rules;
///
/// let rule = Rule {
///     condition: Some(String::from("var(value) > 0.5")),
///     ..Default::default()
/// };
///
/// assert!(Rules::new(None).is_empty());
/// assert_eq!(Rules::new(rule.clone()), Rules::new(vec![rule.clone()]));
/// assert_eq!(Rules::new(Rules::new(rule.clone())), Rules::new(rule));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Collection<T>(Vec<T>);

impl<T> Collection<T> {
    /// Creates a new collection.
    pub fn new(elements: impl Into<Self>) -> Self {
        elements.into()
    }

    /// Appends an element.
    pub fn push(&mut self, element: T) {
        self.0.push(element);
    }

    /// Gets the element at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Gets an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Gets the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Gets the number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes self and returns the elements.
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> From<T> for Collection<T> {
    fn from(element: T) -> Self {
        Self(vec![element])
    }
}

impl<T> From<Option<T>> for Collection<T> {
    fn from(element: Option<T>) -> Self {
        Self(element.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(elements: Vec<T>) -> Self {
        Self(elements)
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> std::ops::Index<usize> for Collection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Element> std::fmt::Display for Collection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        writeln!(f, "<{}>", T::BLOCK)?;

        for element in self.iter() {
            writeln!(f, "{element}")?;
        }

        write!(f, "</{}>", T::BLOCK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item(&'static str);

    impl Element for Item {
        const BLOCK: &'static str = "items";
    }

    impl std::fmt::Display for Item {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "<item>\nname = {}\n</item>", self.0)
        }
    }

    #[test]
    fn test_every_input_shape_normalizes_to_the_same_sequence() {
        let single = Collection::<Item>::new(Item("a"));
        let many = Collection::<Item>::new(vec![Item("a")]);
        let nested = Collection::<Item>::new(Collection::<Item>::new(Item("a")));
        let optional = Collection::<Item>::new(Some(Item("a")));

        assert_eq!(single, many);
        assert_eq!(single, nested);
        assert_eq!(single, optional);
        assert_eq!(single.as_slice(), &[Item("a")]);
    }

    #[test]
    fn test_none_is_empty() {
        let collection = Collection::<Item>::new(None);
        assert!(collection.is_empty());
        assert_eq!(collection, Collection::default());
    }

    #[test]
    fn test_order_is_preserved() {
        let mut collection = Collection::<Item>::new(vec![Item("b"), Item("a")]);
        collection.push(Item("c"));

        let names = collection.iter().map(|item| item.0).collect::<Vec<_>>();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(collection[2], Item("c"));
        assert_eq!(collection.get(3), None);
    }

    #[test]
    fn test_collection_display() {
        assert_eq!(Collection::<Item>::default().to_string(), "");
        assert_eq!(
            Collection::<Item>::new(vec![Item("a"), Item("b")]).to_string(),
            "<items>\n<item>\nname = a\n</item>\n<item>\nname = b\n</item>\n</items>"
        );
    }
}
