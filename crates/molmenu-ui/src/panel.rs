//! egui rendering of the molecule settings menu.

use egui::{Context, Id, Rect, Response, Sense, SidePanel, Ui};
use molmenu_core::{
    ColorMap, ColorMapRegistry, MenuAction, MenuRow, MoleculeMenu, NumericInput, PlayIcon,
    RangeRow, SelectRow, SelectTarget, ToggleRow, Widget,
};

use crate::volume_controls::{gradient_columns, show_volume_controls, to_color32};

/// Width of the numeric field next to a slider.
const INPUT_WIDTH: f32 = 64.0;

/// Height of the color map preview strip.
const PREVIEW_HEIGHT: f32 = 10.0;

/// Builds the menu panel on the right side of the window.
/// Returns true if any event was emitted.
pub fn build_menu_panel(ctx: &Context, menu: &mut MoleculeMenu, registry: &ColorMapRegistry) -> bool {
    let mut emitted = false;
    SidePanel::right("molmenu_panel")
        .default_width(280.0)
        .resizable(true)
        .show(ctx, |ui| {
            emitted = build_molecule_menu(ui, menu, registry);
        });
    emitted
}

/// Draws the current menu and applies whatever the user did this frame.
///
/// `registry` supplies the preview strip under the color map select; maps it
/// does not know are shown without a preview. Returns true if any event was
/// emitted.
pub fn build_molecule_menu(ui: &mut Ui, menu: &mut MoleculeMenu, registry: &ColorMapRegistry) -> bool {
    let Some(tree) = menu.render() else {
        return false;
    };

    let mut actions = Vec::new();
    for row in &tree.rows {
        ui.add_enabled_ui(!row.disabled, |ui| {
            build_row(ui, row, registry, &mut actions);
        });
        ui.add_space(4.0);
    }

    if !actions.is_empty() {
        log::trace!("applying {} menu action(s)", actions.len());
    }
    let mut emitted = false;
    for action in actions {
        emitted |= menu.dispatch(action);
    }
    emitted
}

/// Id of the widgets of the row with key `row_key`.
pub fn row_id(row_key: &str) -> Id {
    Id::new(("molmenu", row_key))
}

/// Id of the numeric text field of a slider row.
pub fn numeric_input_id(row_key: &str) -> Id {
    row_id(row_key).with("input")
}

/// True when `response` reports a change the user made this frame.
///
/// Sliders and drag values snap and clamp the bound value while drawing and
/// report that as a change; only a drag, click or keyboard focus counts as
/// user input.
pub(crate) fn user_changed(response: &Response) -> bool {
    response.changed()
        && (response.dragged()
            || response.drag_stopped()
            || response.clicked()
            || response.has_focus())
}

fn build_row(ui: &mut Ui, row: &MenuRow, registry: &ColorMapRegistry, actions: &mut Vec<MenuAction>) {
    let id = row_id(row.key);
    match &row.widget {
        Widget::Toggle(toggle) => build_toggle(ui, toggle, actions),
        Widget::Range(range) => build_range(ui, id, range, actions),
        Widget::VolumeControls(options) => {
            if let Some(change) = show_volume_controls(ui, id, options) {
                actions.push(MenuAction::ForwardOpacities(change));
            }
        }
        Widget::Select(select) => build_select(ui, id, select, registry, actions),
    }
}

fn build_toggle(ui: &mut Ui, toggle: &ToggleRow, actions: &mut Vec<MenuAction>) {
    let mut checked = toggle.checked;
    if ui.checkbox(&mut checked, toggle.label).changed() {
        actions.push(toggle.on_change.clone());
    }
}

fn build_range(ui: &mut Ui, id: Id, range: &RangeRow, actions: &mut Vec<MenuAction>) {
    ui.label(range.label);
    ui.horizontal(|ui| {
        let mut value = if range.value.is_finite() {
            range.value
        } else {
            range.min
        };
        let slider = egui::Slider::new(&mut value, range.min..=range.max)
            .step_by(f64::from(range.step))
            .show_value(false);
        if user_changed(&ui.add(slider)) {
            actions.push(range.target.set(value));
        }
        if let Some(text) = numeric_input(ui, id.with("input"), &range.input) {
            actions.push(range.target.set_text(text));
        }
    });
}

/// Text of a numeric field while it has focus.
#[derive(Clone)]
struct FieldEdit {
    text: String,
    /// Set once the user typed into the field.
    dirty: bool,
}

/// Single-line numeric field. The text is committed when the field loses
/// focus or Enter is pressed, and only if the user edited it; while focused,
/// the typed text is kept in egui memory so re-renders do not overwrite it.
fn numeric_input(ui: &mut Ui, id: Id, input: &NumericInput) -> Option<String> {
    let buffer_id = id.with("buffer");
    let mut edit = ui
        .data_mut(|d| d.get_temp::<FieldEdit>(buffer_id))
        .unwrap_or_else(|| FieldEdit {
            text: input.text.clone(),
            dirty: false,
        });

    let response = ui.add(
        egui::TextEdit::singleline(&mut edit.text)
            .id(id)
            .desired_width(INPUT_WIDTH),
    );
    edit.dirty |= response.changed();

    if response.has_focus() {
        ui.data_mut(|d| d.insert_temp(buffer_id, edit));
        None
    } else {
        ui.data_mut(|d| d.remove::<FieldEdit>(buffer_id));
        (response.lost_focus() && edit.dirty).then_some(edit.text)
    }
}

fn build_select(
    ui: &mut Ui,
    id: Id,
    select: &SelectRow,
    registry: &ColorMapRegistry,
    actions: &mut Vec<MenuAction>,
) {
    ui.label(select.label);
    ui.horizontal(|ui| {
        let selected_text = select
            .options
            .iter()
            .find(|o| o.value == select.value)
            .map_or(select.value.as_str(), |o| o.label.as_str());

        egui::ComboBox::from_id_salt(id)
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for option in &select.options {
                    if ui
                        .selectable_label(option.value == select.value, &option.label)
                        .clicked()
                    {
                        actions.push(select.target.select(option.value.clone()));
                    }
                }
            });

        if let Some(button) = &select.end_button {
            let icon = match button.icon {
                PlayIcon::Play => "▶",
                PlayIcon::Pause => "⏸",
            };
            if ui.button(icon).clicked() {
                actions.push(button.on_click.clone());
            }
        }
    });

    if select.target == SelectTarget::ColorMap {
        if let Some(map) = registry.get(&select.value) {
            paint_color_map_preview(ui, map);
        }
    }
}

fn paint_color_map_preview(ui: &mut Ui, map: &ColorMap) {
    let width = ui.available_width();
    let (rect, _response) = ui.allocate_exact_size(egui::vec2(width, PREVIEW_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);
    let columns = gradient_columns(rect.width());
    let column_width = rect.width() / columns as f32;
    for i in 0..columns {
        let left = rect.left() + i as f32 * column_width;
        let column = Rect::from_min_max(
            egui::pos2(left, rect.top()),
            egui::pos2(left + column_width, rect.bottom()),
        );
        painter.rect_filled(column, 0.0, to_color32(map.sample(i as f32 / columns as f32)));
    }
}
