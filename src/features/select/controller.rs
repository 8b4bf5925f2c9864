//! Select Controller
//!
//! The behavior behind a drop-down: it reports the chosen `(value, label)`
//! pair to a change handler once when the control is mounted and once per
//! selection change afterwards.
//!
//! The widget never caches the selection. Every event reads the current index
//! from the control through [`SelectionSource`].

use std::any::{Any, type_name};
use std::fmt;
use std::rc::Rc;

use crate::domain::option::OptionItem;

/// Change handler: `(value, label, context)`
///
/// `Cx` is whatever the host passes along with events, `gpui::App` in the
/// application and a plain recorder in tests.
pub type ChangeHandler<V, Cx> = Rc<dyn Fn(&V, &str, &mut Cx)>;

/// Live selection state of a rendered control
pub trait SelectionSource {
    /// Index currently selected, `None` if the control has no selection yet
    fn selected_index(&self) -> Option<usize>;
}

impl SelectionSource for usize {
    fn selected_index(&self) -> Option<usize> {
        Some(*self)
    }
}

impl SelectionSource for Option<usize> {
    fn selected_index(&self) -> Option<usize> {
        *self
    }
}

/// A value of unknown type handed over at runtime, e.g. from a handler
/// registry keyed by names found in page definitions
pub struct DynamicValue {
    value: Box<dyn Any>,
    type_name: &'static str,
}

impl DynamicValue {
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Name of the wrapped type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Debug for DynamicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicValue")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Result of delivering one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// The handler was called with the item at `index`
    Notified { index: usize },
    /// The control reported no selection
    NoSelection,
    /// The control reported an index outside the list
    OutOfRange { index: usize, len: usize },
    /// The bound handler has the wrong type; a diagnostic was logged
    InvalidHandler { given: &'static str },
    /// The user picked the entry that was already selected
    Unchanged,
    /// Event arrived in a lifecycle phase that does not notify
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Created,
    Mounted,
    Unmounted,
}

enum Binding<V, Cx> {
    Handler(ChangeHandler<V, Cx>),
    Invalid { given: &'static str },
}

/// Drop-down behavior bound to an option list and a change handler
pub struct SelectWidget<V, Cx> {
    list: Rc<[OptionItem<V>]>,
    binding: Binding<V, Cx>,
    phase: Phase,
}

impl<V: 'static, Cx: 'static> SelectWidget<V, Cx> {
    /// Bind a statically typed handler
    pub fn new(list: impl Into<Rc<[OptionItem<V>]>>, on_change: ChangeHandler<V, Cx>) -> Self {
        Self {
            list: list.into(),
            binding: Binding::Handler(on_change),
            phase: Phase::Created,
        }
    }

    /// Bind a handler that only exists at runtime
    ///
    /// Anything that is not a [`ChangeHandler<V, Cx>`] (or nothing at all)
    /// still produces a widget; its events log an error and do nothing.
    pub fn from_dynamic(
        list: impl Into<Rc<[OptionItem<V>]>>,
        on_change: Option<&DynamicValue>,
    ) -> Self {
        let binding = match on_change {
            Some(value) => match value.downcast_ref::<ChangeHandler<V, Cx>>() {
                Some(handler) => Binding::Handler(handler.clone()),
                None => Binding::Invalid {
                    given: value.type_name(),
                },
            },
            None => Binding::Invalid { given: "nothing" },
        };

        Self {
            list: list.into(),
            binding,
            phase: Phase::Created,
        }
    }

    /// The bound option list
    pub fn list(&self) -> &[OptionItem<V>] {
        &self.list
    }

    /// Shared handle to the option list
    pub fn shared_list(&self) -> Rc<[OptionItem<V>]> {
        self.list.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.phase == Phase::Mounted
    }

    /// The control became visible; report its initial selection once
    pub fn mount(&mut self, control: &impl SelectionSource, cx: &mut Cx) -> ChangeOutcome {
        if self.phase != Phase::Created {
            return ChangeOutcome::Ignored;
        }
        self.phase = Phase::Mounted;
        self.notify(control, cx)
    }

    /// The user picked an entry; report it
    pub fn selection_changed(
        &mut self,
        control: &impl SelectionSource,
        cx: &mut Cx,
    ) -> ChangeOutcome {
        if self.phase != Phase::Mounted {
            return ChangeOutcome::Ignored;
        }
        self.notify(control, cx)
    }

    /// The user picked `index` in a control whose live selection is
    /// `selected`. Like a native control, re-picking the current entry is
    /// not a change.
    pub fn pick(
        &mut self,
        selected: &mut Option<usize>,
        index: usize,
        cx: &mut Cx,
    ) -> ChangeOutcome {
        if *selected == Some(index) {
            return ChangeOutcome::Unchanged;
        }
        *selected = Some(index);
        self.selection_changed(&*selected, cx)
    }

    /// The control is gone; no further events are delivered
    pub fn unmount(&mut self) {
        self.phase = Phase::Unmounted;
    }

    fn notify(&self, control: &impl SelectionSource, cx: &mut Cx) -> ChangeOutcome {
        let handler = match &self.binding {
            Binding::Handler(handler) => handler,
            Binding::Invalid { given } => {
                tracing::error!(
                    "<Select>: Wrong type for on_change. Expected: {}, given: {}",
                    type_name::<ChangeHandler<V, Cx>>(),
                    given
                );
                return ChangeOutcome::InvalidHandler { given: *given };
            }
        };

        let Some(index) = control.selected_index() else {
            tracing::warn!("<Select>: control reported no selection, change not reported");
            return ChangeOutcome::NoSelection;
        };

        let Some(item) = self.list.get(index) else {
            tracing::warn!(
                "<Select>: selected index {index} is outside of {} options",
                self.list.len()
            );
            return ChangeOutcome::OutOfRange {
                index,
                len: self.list.len(),
            };
        };

        handler(&item.value, &item.label, cx);
        ChangeOutcome::Notified { index }
    }
}
