//! Class-list manipulation.
//!
//! Every page behavior ends in adding or removing CSS classes on some node.
//! [`ClassTarget`] is the one operation set they all need, and [`ClassChange`]
//! batches the adds and removes a single event produces.

use std::cell::RefCell;
use std::rc::Rc;

/// Split a whitespace-separated class attribute into its tokens.
pub fn split_classes(classes: &str) -> Vec<String> {
    classes.split_whitespace().map(str::to_string).collect()
}

/// A node whose class list can be read and mutated.
pub trait ClassTarget {
    /// Add a class. Adding a class that is already present is a no-op.
    fn add_class(&self, class: &str);

    /// Remove a class. Removing an absent class is a no-op.
    fn remove_class(&self, class: &str);

    /// Whether the class is currently present.
    fn has_class(&self, class: &str) -> bool;

    /// Flip a class and return whether it is present afterwards.
    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Add the class when `on`, remove it otherwise.
    fn set_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Apply a batched change: removals first, then additions.
    fn apply(&self, change: &ClassChange) {
        for class in &change.remove {
            self.remove_class(class);
        }
        for class in &change.add {
            self.add_class(class);
        }
    }
}

impl<T: ClassTarget + ?Sized> ClassTarget for Rc<T> {
    fn add_class(&self, class: &str) {
        (**self).add_class(class);
    }

    fn remove_class(&self, class: &str) {
        (**self).remove_class(class);
    }

    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }
}

/// A set of classes to add and a set to remove, applied together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassChange {
    /// Classes added by the change
    pub add: Vec<String>,
    /// Classes removed by the change
    pub remove: Vec<String>,
}

impl ClassChange {
    /// Create an empty change.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add these classes.
    pub fn adding<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add.extend(classes.into_iter().map(Into::into));
        self
    }

    /// Remove these classes.
    pub fn removing<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.remove.extend(classes.into_iter().map(Into::into));
        self
    }

    /// The change that undoes this one.
    pub fn inverse(&self) -> Self {
        Self {
            add: self.remove.clone(),
            remove: self.add.clone(),
        }
    }

    /// Whether the change does nothing.
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}

#[derive(Debug, Default)]
struct NodeState {
    classes: Vec<String>,
}

/// In-memory element with a shared class list.
///
/// Clones refer to the same node, the way two `web_sys::Element` handles to
/// one DOM node do.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    state: Rc<RefCell<NodeState>>,
}

impl MemoryElement {
    /// Create an element with no classes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element from a class attribute string.
    pub fn with_classes(classes: &str) -> Self {
        let element = Self::new();
        element.set_class_name(classes);
        element
    }

    /// Replace the whole class list, like assigning `className`.
    pub fn set_class_name(&self, classes: &str) {
        let mut state = self.state.borrow_mut();
        state.classes.clear();
        for class in split_classes(classes) {
            if !state.classes.contains(&class) {
                state.classes.push(class);
            }
        }
    }

    /// The class attribute as it would be serialized.
    pub fn class_name(&self) -> String {
        self.state.borrow().classes.join(" ")
    }
}

impl ClassTarget for MemoryElement {
    fn add_class(&self, class: &str) {
        let mut state = self.state.borrow_mut();
        if !state.classes.iter().any(|c| c == class) {
            state.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.state.borrow_mut().classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.iter().any(|c| c == class)
    }
}

#[cfg(target_arch = "wasm32")]
impl ClassTarget for web_sys::Element {
    fn add_class(&self, class: &str) {
        if let Err(e) = self.class_list().add_1(class) {
            log::warn!("Failed to add class '{}': {:?}", class, e);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.class_list().remove_1(class) {
            log::warn!("Failed to remove class '{}': {:?}", class, e);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn toggle_class(&self, class: &str) -> bool {
        match self.class_list().toggle(class) {
            Ok(present) => present,
            Err(e) => {
                log::warn!("Failed to toggle class '{}': {:?}", class, e);
                self.has_class(class)
            }
        }
    }
}
