//! Numeric stepper: `[-] value [+]`.
//!
//! The widget owns its [`BoundedCounter`] and both buttons outright. Every
//! mutator goes through the counter and then calls `refresh()`, which rebuilds
//! the label text, the label's reserved width and the enabled state of the two
//! buttons. Commits from the counter are the stepper's public value-changed
//! event.

use super::button::{cells, Button, ButtonConfig};
use super::label::Label;
use crate::format::{format_value, reserved_width, ValueFormatter, ValueText};
use crate::models::{BoundedCounter, Commit, CounterState, ListenerId, Step};
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::id::IdPath;
use crate::ui::core::input::StepKey;
use crate::ui::core::layout::{hstack, hstack_size};
use crate::ui::core::style::Style;
use crate::ui::core::tree::{Node, NodeKind, Sense, UiTree};
use crate::ui::core::widget::{Ui, Widget};

pub const MINUS_TITLE: &str = "-";
pub const PLUS_TITLE: &str = "+";

#[derive(Clone, Debug)]
pub struct StepperConfig {
    pub button: ButtonConfig,
    pub button_spacing: u16,
    /// Only applied when no custom formatter is set.
    pub value_style: Style,
    pub value_formatter: Option<ValueFormatter>,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            button: ButtonConfig::default(),
            button_spacing: 1,
            value_style: Style::default(),
            value_formatter: None,
        }
    }
}

#[derive(Debug)]
pub struct Stepper {
    stepper_id: u32,
    config: StepperConfig,
    counter: BoundedCounter,
    value_label: Label,
    minus_button: Button,
    plus_button: Button,
}

impl Stepper {
    pub fn new(stepper_id: u32, config: StepperConfig) -> Self {
        Self::with_counter(stepper_id, config, BoundedCounter::new())
    }

    pub fn with_counter(stepper_id: u32, config: StepperConfig, counter: BoundedCounter) -> Self {
        let id_base = IdPath::root("stepper").push_u64(stepper_id as u64);

        let value_label = Label::default();
        let minus_button = Button::new(
            id_base.push_str("minus").finish(),
            MINUS_TITLE,
            config.button,
            NodeKind::StepperButton {
                stepper: stepper_id,
                step: Step::Decrement,
            },
        );
        let plus_button = Button::new(
            id_base.push_str("plus").finish(),
            PLUS_TITLE,
            config.button,
            NodeKind::StepperButton {
                stepper: stepper_id,
                step: Step::Increment,
            },
        );

        let mut stepper = Self {
            stepper_id,
            config,
            counter,
            value_label,
            minus_button,
            plus_button,
        };
        stepper.apply_config();
        stepper
    }

    pub fn id(&self) -> u32 {
        self.stepper_id
    }

    pub fn config(&self) -> &StepperConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: StepperConfig) {
        self.config = config;
        self.apply_config();
        tracing::debug!(stepper = self.stepper_id, "stepper configuration updated");
    }

    pub fn counter(&self) -> &BoundedCounter {
        &self.counter
    }

    pub fn value(&self) -> i64 {
        self.counter.value()
    }

    pub fn min_value(&self) -> i64 {
        self.counter.min_value()
    }

    pub fn max_value(&self) -> i64 {
        self.counter.max_value()
    }

    pub fn can_increment(&self) -> bool {
        self.counter.can_increment()
    }

    pub fn can_decrement(&self) -> bool {
        self.counter.can_decrement()
    }

    pub fn set_value(&mut self, value: i64) {
        self.counter.set_value(value);
        self.refresh();
    }

    pub fn set_min_value(&mut self, min_value: i64) {
        self.counter.set_min_value(min_value);
        self.refresh();
    }

    pub fn set_max_value(&mut self, max_value: i64) {
        self.counter.set_max_value(max_value);
        self.refresh();
    }

    pub fn increment(&mut self) -> Option<Commit> {
        self.press(Step::Increment)
    }

    pub fn decrement(&mut self) -> Option<Commit> {
        self.press(Step::Decrement)
    }

    /// Same path a button tap takes; `None` when the step hit a bound.
    pub fn press(&mut self, step: Step) -> Option<Commit> {
        let Some(commit) = self.counter.step(step) else {
            tracing::trace!(stepper = self.stepper_id, ?step, "step blocked by bound");
            return None;
        };
        self.refresh();
        tracing::debug!(
            stepper = self.stepper_id,
            previous = commit.previous,
            value = commit.value,
            "stepper value changed"
        );
        Some(commit)
    }

    /// Fired only for user steps that changed the value, never for `set_*`.
    pub fn on_value_changed(&mut self, listener: impl FnMut(&Commit) + 'static) -> ListenerId {
        self.counter.on_commit(listener)
    }

    pub fn on_refresh(&mut self, listener: impl FnMut(&CounterState) + 'static) -> ListenerId {
        self.counter.on_refresh(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.counter.remove_listener(id)
    }

    pub fn display_text(&self) -> &ValueText {
        &self.value_label.text
    }

    pub fn value_label(&self) -> &Label {
        &self.value_label
    }

    pub fn minus_button(&self) -> &Button {
        &self.minus_button
    }

    pub fn plus_button(&self) -> &Button {
        &self.plus_button
    }

    /// Smallest row that shows both buttons and the reserved label width.
    pub fn intrinsic_size(&self) -> Size {
        let button = self.button_size();
        let label = Size::new(self.value_label.preferred_width(), 1);
        hstack_size(&[button, label, button], self.config.button_spacing)
    }

    /// Routes a click to this stepper if it landed on one of its enabled buttons.
    pub fn handle_click(&mut self, tree: &UiTree, pos: Pos) -> Option<Commit> {
        let node = tree.hit_test_with_sense(pos, Sense::CLICK)?;
        match node.kind {
            NodeKind::StepperButton { stepper, step } if stepper == self.stepper_id => {
                self.press(step)
            }
            _ => None,
        }
    }

    pub fn handle_key(&mut self, key: StepKey) -> Option<Commit> {
        match key {
            StepKey::Char('+' | '=') | StepKey::Up | StepKey::Right => {
                self.press(Step::Increment)
            }
            StepKey::Char('-' | '_') | StepKey::Down | StepKey::Left => {
                self.press(Step::Decrement)
            }
            _ => None,
        }
    }

    fn apply_config(&mut self) {
        self.minus_button.config = self.config.button;
        self.plus_button.config = self.config.button;
        self.value_label.style = match self.config.value_formatter {
            Some(_) => Style::default(),
            None => self.config.value_style,
        };
        self.refresh();
    }

    fn refresh(&mut self) {
        let formatter = self.config.value_formatter.as_ref();
        self.value_label.text = format_value(formatter, self.counter.value());
        self.value_label.reserved_width = cells(reserved_width(formatter));
        self.minus_button.enabled = self.counter.can_decrement();
        self.plus_button.enabled = self.counter.can_increment();
    }

    fn button_size(&self) -> Size {
        let minus = self.minus_button.preferred_size();
        let plus = self.plus_button.preferred_size();
        Size::new(minus.w.max(plus.w), minus.h.max(plus.h))
    }
}

impl Widget for Stepper {
    fn ui(&mut self, ui: &mut Ui) {
        let area = ui.rect;
        if area.is_empty() {
            return;
        }

        let button = self.button_size();
        let spacing = self.config.button_spacing;
        let label_w = area
            .w
            .saturating_sub(button.w.saturating_mul(2))
            .saturating_sub(spacing.saturating_mul(2));
        let slots = hstack(area, &[button.w, label_w, button.w], spacing);
        let (minus_rect, label_rect, plus_rect) = (slots[0], slots[1], slots[2]);

        ui.add(minus_rect, &mut self.minus_button);
        ui.add(label_rect, &mut self.value_label);
        ui.add(plus_rect, &mut self.plus_button);

        if !label_rect.is_empty() {
            ui.tree.push(Node {
                id: IdPath::root("stepper")
                    .push_u64(self.stepper_id as u64)
                    .push_str("value")
                    .finish(),
                rect: label_rect,
                layer: 0,
                z: 0,
                sense: Sense::HOVER,
                kind: NodeKind::StepperValue {
                    stepper: self.stepper_id,
                },
            });
        }
    }
}

/// Rect of `size` centred in `area`, for hosts that lay the stepper out at its
/// intrinsic size.
pub fn centered_in(area: Rect, size: Size) -> Rect {
    area.centered(size.w, size.h)
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/stepper.rs"]
mod tests;
