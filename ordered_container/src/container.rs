use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

use log::debug;

use crate::{
    AscendingOrder, ContainerError, DescendingOrder, MiddleOutOrder, Order, ReverseOrder,
    SideCrossOrder, String, Vec,
};

/// Growable sequence of elements kept in insertion order.
///
/// `Container<T>` stores duplicates, removes by value (every occurrence at
/// once), and hands out six traversal views. Each view copies the elements
/// when it is created, so later `add`/`remove` calls never affect a view that
/// already exists. The element type defaults to `i32`.
///
/// # Examples
///
/// ## Adding and removing
///
/// ```
/// use ordered_container::Container;
///
/// let mut container: Container = Container::new();
/// container.add(10);
/// container.add(5);
/// container.add(20);
/// container.add(5);
/// container.add(15);
///
/// // Removes both 5s.
/// container.remove(&5).unwrap();
/// assert_eq!(container.len(), 3);
/// assert_eq!(container.as_slice(), &[10, 20, 15]);
///
/// // Unknown values are an error and leave the container untouched.
/// assert!(container.remove(&999).is_err());
/// assert_eq!(container.len(), 3);
/// ```
///
/// ## Traversal views
///
/// ```
/// use ordered_container::Container;
///
/// let container = Container::from_slice(&[7, 15, 6, 1, 2]);
///
/// let side_cross: Vec<i32> = container.side_cross_order().into_iter().collect();
/// assert_eq!(side_cross, vec![1, 15, 2, 7, 6]);
///
/// let mut it = container.middle_out_order();
/// let end = it.end();
/// let mut middle_out = Vec::new();
/// while it != end {
///     middle_out.push(*it.get().unwrap());
///     it.advance();
/// }
/// assert_eq!(middle_out, vec![6, 15, 1, 7, 2]);
/// ```
///
/// ## Rendering
///
/// ```
/// use ordered_container::Container;
///
/// let container = Container::from_slice(&[10, 20, 30]);
/// assert_eq!(container.to_string(), "10 20 30 ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Container<T = i32> {
    elements: Vec<T>,
}

impl<T> Container<T> {
    /// Creates an empty container.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_container::Container;
    ///
    /// let mut container = Container::<&str>::new();
    /// assert!(container.is_empty());
    /// container.add("Hello");
    /// assert_eq!(container.len(), 1);
    /// ```
    pub fn new() -> Self {
        Container {
            elements: Vec::new(),
        }
    }

    /// Creates an empty container with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Container {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the container.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Same as [`len`](Self::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the container contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Appends an element. Duplicates are kept.
    pub fn add(&mut self, value: T) {
        self.elements.push(value);
    }

    /// Removes every element equal to `value`, keeping the others in order.
    ///
    /// Returns how many elements were removed.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::ValueNotFound` if no element equals `value`.
    /// Nothing is removed in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_container::{Container, ContainerError};
    ///
    /// let mut words = Container::<String>::new();
    /// words.add("Hello".to_string());
    /// words.add("World".to_string());
    ///
    /// assert_eq!(words.remove("World"), Ok(1));
    /// assert_eq!(words.remove("Python"), Err(ContainerError::ValueNotFound));
    /// assert_eq!(words.len(), 1);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> Result<usize, ContainerError>
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        if !self.contains(value) {
            debug!("remove: no matching element among {}", self.elements.len());
            return Err(ContainerError::ValueNotFound);
        }

        let before = self.elements.len();
        self.elements.retain(|element| element != value);
        let removed = before - self.elements.len();
        debug!("remove: dropped {} of {} elements", removed, before);
        Ok(removed)
    }

    /// Returns `true` if any element equals `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        self.elements.iter().any(|element| element == value)
    }

    /// Read-only view of the elements in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Iterates over the elements in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: Clone> Container<T> {
    /// Creates a container holding a copy of `values`, in order.
    pub fn from_slice(values: &[T]) -> Self {
        Container {
            elements: values.to_vec(),
        }
    }

    /// Elements in reverse insertion order.
    pub fn reverse_order(&self) -> ReverseOrder<T> {
        ReverseOrder::new(&self.elements)
    }

    /// Elements in insertion order.
    pub fn order(&self) -> Order<T> {
        Order::new(&self.elements)
    }

    /// Middle element first, then alternately one step left and one step
    /// right. With an even count the lower of the two middles comes first.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_container::Container;
    ///
    /// let container = Container::from_slice(&[10, 20, 30, 40]);
    /// let values: Vec<i32> = container.middle_out_order().into_iter().collect();
    /// assert_eq!(values, vec![20, 10, 30, 40]);
    /// ```
    pub fn middle_out_order(&self) -> MiddleOutOrder<T> {
        MiddleOutOrder::new(&self.elements)
    }
}

impl<T: Clone + PartialOrd> Container<T> {
    /// Elements sorted smallest first.
    pub fn ascending_order(&self) -> AscendingOrder<T> {
        AscendingOrder::new(&self.elements)
    }

    /// Elements sorted largest first.
    pub fn descending_order(&self) -> DescendingOrder<T> {
        DescendingOrder::new(&self.elements)
    }

    /// Sorted elements taken alternately from the low and the high end.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_container::Container;
    ///
    /// let container = Container::from_slice(&['d', 'a', 'c', 'b']);
    /// let values: Vec<char> = container.side_cross_order().into_iter().collect();
    /// assert_eq!(values, vec!['a', 'd', 'b', 'c']);
    /// ```
    pub fn side_cross_order(&self) -> SideCrossOrder<T> {
        SideCrossOrder::new(&self.elements)
    }
}

impl<T: fmt::Display> Container<T> {
    /// Every element followed by one space; an empty container renders as `""`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Writes the rendered container and a newline to stdout.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("{self}");
    }
}

impl<T: fmt::Display> fmt::Display for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in &self.elements {
            write!(f, "{element} ")?;
        }
        Ok(())
    }
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Container<T> {
    fn from(elements: Vec<T>) -> Self {
        Container { elements }
    }
}

impl<T> FromIterator<T> for Container<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Container {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Container<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
