// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

#![expect(missing_docs, reason = "builder methods are named after the modifier they push")]

use std::borrow::Cow;
use std::collections::BTreeMap;

/// Shorthand used for class, style and attribute names.
pub type CowStr = Cow<'static, str>;

#[derive(Debug, PartialEq, Eq, Clone)]
/// A modifier to either add or remove a class of an element.
pub enum ClassModifier {
    Add(CowStr),
    Remove(CowStr),
}

impl ClassModifier {
    /// Returns the class name of this modifier.
    pub fn name(&self) -> &CowStr {
        let (Self::Add(name) | Self::Remove(name)) = self;
        name
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
/// A modifier for a single inline style property.
///
/// `Clear` sets the property to the empty string, which hands control back to the stylesheet.
pub enum StyleModifier {
    Set(CowStr, CowStr),
    Clear(CowStr),
}

impl StyleModifier {
    /// Returns the property name of this modifier.
    pub fn name(&self) -> &CowStr {
        let (Self::Set(name, _) | Self::Clear(name)) = self;
        name
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
/// A modifier for a single element attribute.
pub enum AttributeModifier {
    Set(CowStr, String),
    Remove(CowStr),
}

/// The inner content of a button.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Label {
    /// A Bootstrap icon followed by text.
    Icon {
        icon: &'static str,
        text: &'static str,
    },
    /// A small spinner followed by text.
    Spinner(&'static str),
    /// Markup captured from the page, restored verbatim.
    Markup(String),
}

impl Label {
    /// Renders the label as inner HTML.
    pub fn to_markup(&self) -> String {
        match self {
            Self::Icon { icon, text } => format!(r#"<i class="bi bi-{icon}"></i> {text}"#),
            Self::Spinner(text) => {
                format!(r#"<span class="spinner-border spinner-border-sm me-2"></span>{text}"#)
            }
            Self::Markup(markup) => markup.clone(),
        }
    }

    /// The visible text of the label, without icons.
    ///
    /// For captured markup this is the markup itself.
    pub fn text(&self) -> &str {
        match self {
            Self::Icon { text, .. } | Self::Spinner(text) => text,
            Self::Markup(markup) => markup,
        }
    }
}

/// A declarative set of changes to one element.
///
/// Modifiers are applied in order, so a later `Remove` wins over an earlier `Add` of the same class.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct ElementPatch {
    pub classes: Vec<ClassModifier>,
    pub styles: Vec<StyleModifier>,
    pub attributes: Vec<AttributeModifier>,
    pub disabled: Option<bool>,
    pub label: Option<Label>,
}

impl ElementPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(mut self, name: impl Into<CowStr>) -> Self {
        self.classes.push(ClassModifier::Add(name.into()));
        self
    }

    pub fn remove_class(mut self, name: impl Into<CowStr>) -> Self {
        self.classes.push(ClassModifier::Remove(name.into()));
        self
    }

    /// Removes every class in `names`.
    pub fn remove_classes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CowStr>,
    {
        self.classes
            .extend(names.into_iter().map(|n| ClassModifier::Remove(n.into())));
        self
    }

    pub fn style(mut self, name: impl Into<CowStr>, value: impl Into<CowStr>) -> Self {
        self.styles
            .push(StyleModifier::Set(name.into(), value.into()));
        self
    }

    pub fn clear_style(mut self, name: impl Into<CowStr>) -> Self {
        self.styles.push(StyleModifier::Clear(name.into()));
        self
    }

    pub fn attr(mut self, name: impl Into<CowStr>, value: impl Into<String>) -> Self {
        self.attributes
            .push(AttributeModifier::Set(name.into(), value.into()));
        self
    }

    pub fn remove_attr(mut self, name: impl Into<CowStr>) -> Self {
        self.attributes.push(AttributeModifier::Remove(name.into()));
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    /// Appends all modifiers of `other`; scalar fields of `other` win when set.
    pub fn merge(mut self, other: Self) -> Self {
        self.classes.extend(other.classes);
        self.styles.extend(other.styles);
        self.attributes.extend(other.attributes);
        if other.disabled.is_some() {
            self.disabled = other.disabled;
        }
        if other.label.is_some() {
            self.label = other.label;
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
            && self.styles.is_empty()
            && self.attributes.is_empty()
            && self.disabled.is_none()
            && self.label.is_none()
    }

    /// The value this patch leaves for a style property, if it touches it.
    ///
    /// A cleared property reports `Some("")`.
    pub fn style_value(&self, name: &str) -> Option<&str> {
        self.styles
            .iter()
            .rev()
            .find(|m| m.name() == name)
            .map(|m| match m {
                StyleModifier::Set(_, value) => &**value,
                StyleModifier::Clear(_) => "",
            })
    }
}

/// In-memory element state that patches can be applied to.
///
/// Reducers that depend on the current state of an element read it from here,
/// and the DOM adapter builds one from the live element before dispatching.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct VirtualElement {
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
    disabled: bool,
    label: Option<Label>,
}

impl VirtualElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an element from a whitespace separated class list, like `className`.
    pub fn with_class_name(class_name: &str) -> Self {
        let mut element = Self::new();
        for class in class_name.split_whitespace() {
            element.insert_class(class);
        }
        element
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_owned(), value.into());
        self
    }

    pub fn with_style(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_style(name, value.into());
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    fn insert_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    fn set_style(&mut self, name: &str, value: String) {
        if value.is_empty() {
            self.styles.remove(name);
        } else {
            self.styles.insert(name.to_owned(), value);
        }
    }

    pub fn apply(&mut self, patch: &ElementPatch) {
        for modifier in &patch.classes {
            match modifier {
                ClassModifier::Add(name) => self.insert_class(name),
                ClassModifier::Remove(name) => self.classes.retain(|c| c != name),
            }
        }
        for modifier in &patch.styles {
            match modifier {
                StyleModifier::Set(name, value) => self.set_style(name, value.to_string()),
                StyleModifier::Clear(name) => self.set_style(name, String::new()),
            }
        }
        for modifier in &patch.attributes {
            match modifier {
                AttributeModifier::Set(name, value) => {
                    self.attributes.insert(name.to_string(), value.clone());
                }
                AttributeModifier::Remove(name) => {
                    self.attributes.remove(&**name);
                }
            }
        }
        if let Some(disabled) = patch.disabled {
            self.disabled = disabled;
        }
        if let Some(label) = &patch.label {
            self.label = Some(label.clone());
        }
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// The inline value of a style property, `None` when unset or cleared.
    pub fn style(&self, name: &str) -> Option<&str> {
        self.styles.get(name).map(String::as_str)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }
}

/// The patches one feature wants applied in response to an event, keyed by a feature-local target.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Reaction<T> {
    patches: Vec<(T, ElementPatch)>,
}

impl<T> Default for Reaction<T> {
    fn default() -> Self {
        Self {
            patches: Vec::new(),
        }
    }
}

impl<T> Reaction<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, target: T, patch: ElementPatch) -> Self {
        self.push(target, patch);
        self
    }

    /// Adds a patch; empty patches are dropped.
    pub fn push(&mut self, target: T, patch: ElementPatch) {
        if !patch.is_empty() {
            self.patches.push((target, patch));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(T, ElementPatch)> {
        self.patches.iter()
    }
}

impl<T: PartialEq> Reaction<T> {
    /// The first patch for `target`, if any.
    pub fn patch_for(&self, target: &T) -> Option<&ElementPatch> {
        self.patches
            .iter()
            .find(|(t, _)| t == target)
            .map(|(_, patch)| patch)
    }
}

impl<T> IntoIterator for Reaction<T> {
    type Item = (T, ElementPatch);
    type IntoIter = std::vec::IntoIter<(T, ElementPatch)>;

    fn into_iter(self) -> Self::IntoIter {
        self.patches.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_modifiers_win() {
        let mut el = VirtualElement::with_class_name("btn btn-primary");
        el.apply(
            &ElementPatch::new()
                .add_class("show")
                .remove_class("show")
                .remove_class("btn-primary")
                .style("color", "red")
                .clear_style("color"),
        );
        assert!(!el.has_class("show"));
        assert!(!el.has_class("btn-primary"));
        assert!(el.has_class("btn"));
        assert_eq!(el.style("color"), None);
    }

    #[test]
    fn labels_render_bootstrap_markup() {
        let label = Label::Icon {
            icon: "check-circle",
            text: "Marked Present",
        };
        assert_eq!(
            label.to_markup(),
            r#"<i class="bi bi-check-circle"></i> Marked Present"#
        );
        assert_eq!(
            Label::Spinner("Loading...").to_markup(),
            r#"<span class="spinner-border spinner-border-sm me-2"></span>Loading..."#
        );
    }

    #[test]
    fn empty_patches_are_not_recorded() {
        let mut reaction = Reaction::new();
        reaction.push(1, ElementPatch::new());
        assert!(reaction.is_empty());
        reaction.push(2, ElementPatch::new().disabled(true));
        assert_eq!(reaction.patch_for(&2).and_then(|p| p.disabled), Some(true));
    }
}
