//! Property tests for the menu handlers and render output.

use std::sync::Arc;

use molmenu_core::render::keys;
use molmenu_core::*;
use proptest::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn volume_menu() -> MoleculeMenu {
    MoleculeMenu::new(MenuProps {
        has_volume: true,
        n_modes: 4,
        color_maps: ColorMapRegistry::new().names().map(String::from).collect(),
        ..Default::default()
    })
}

proptest! {
    #[test]
    fn finite_new_iso_value_emits_once(value in -1.0e6f32..1.0e6) {
        init_logging();
        let mut menu = volume_menu();
        prop_assume!(value != menu.state().iso_value);
        prop_assert!(menu.iso_value_handler(value));
        prop_assert_eq!(menu.state().iso_value, value);
        prop_assert_eq!(menu.take_events(), vec![MenuEvent::IsoValueChanged(value)]);
    }

    #[test]
    fn repeated_scale_value_is_ignored(value in 0.5f32..3.0) {
        let mut menu = volume_menu();
        menu.set_scale_value(value);
        prop_assert!(!menu.scale_value_handler(value));
        prop_assert!(menu.events().is_empty());
        prop_assert_eq!(menu.state().scale_value, value);
    }

    #[test]
    fn non_finite_values_are_ignored(
        value in prop_oneof![Just(f32::NAN), Just(f32::INFINITY), Just(f32::NEG_INFINITY)]
    ) {
        let mut menu = volume_menu();
        let before = menu.state().clone();
        prop_assert!(!menu.iso_value_handler(value));
        prop_assert!(!menu.scale_value_handler(value));
        prop_assert!(menu.events().is_empty());
        prop_assert_eq!(menu.state(), &before);
    }

    #[test]
    fn unparsable_text_is_ignored(text in "[a-zA-Z ]{0,8}") {
        let mut menu = volume_menu();
        prop_assume!(parse_finite(&text).is_err());
        prop_assert!(!menu.dispatch(MenuAction::SetIsoValueText(text.clone())));
        prop_assert!(!menu.dispatch(MenuAction::SetScaleValueText(text)));
        prop_assert!(menu.events().is_empty());
    }

    #[test]
    fn toggle_flips_only_its_key(
        layers in proptest::collection::btree_map("[a-z]{1,6}", any::<bool>(), 0..6),
        key in "[a-z]{1,6}",
        observed in any::<bool>(),
    ) {
        let mut options = VisibilityOptions::new();
        for (k, v) in &layers {
            options = options.with(k.clone(), *v);
        }
        let mut menu = volume_menu();
        menu.set_visibility_options(options.clone());
        menu.toggle_visibility_handler(&key, observed);

        let after = Arc::clone(&menu.state().visibility_options);
        prop_assert_eq!(after.get(&key), Some(!observed));
        for (k, v) in options.iter() {
            if k != key {
                prop_assert_eq!(after.get(k), Some(v));
            }
        }
        prop_assert_eq!(menu.events().len(), 1);
    }

    #[test]
    fn double_toggle_restores_visibility(key in prop_oneof![Just(ISO_SURFACES), Just(VOLUME)]) {
        let mut menu = volume_menu();
        menu.set_visibility_options(compose_visibility_options(None));
        let original = menu.state().visibility_options.as_ref().clone();

        let first = original.is_visible(key);
        menu.toggle_visibility_handler(key, first);
        let second = menu.state().visibility_options.is_visible(key);
        menu.toggle_visibility_handler(key, second);

        prop_assert_eq!(menu.state().visibility_options.as_ref(), &original);
        prop_assert_eq!(menu.take_events().len(), 2);
    }

    #[test]
    fn color_map_emits_only_on_change(index in 0usize..8) {
        let mut menu = volume_menu();
        let name = menu.state().color_maps[index].clone();
        let changed = name != menu.state().active_map;
        prop_assert_eq!(menu.color_map_handler(&name), changed);
        prop_assert!(!menu.color_map_handler(&name));
        prop_assert_eq!(menu.take_events().len(), usize::from(changed));
    }

    #[test]
    fn normal_mode_options_count(n_modes in -3i32..64) {
        let options = render::normal_mode_options(n_modes);
        prop_assert_eq!(options.len(), 1 + usize::try_from(n_modes.max(0)).unwrap());
        prop_assert_eq!(options[0].value.as_str(), "-1");
    }

    #[test]
    fn compose_volume_is_consistent(
        colors in proptest::option::of(proptest::collection::vec(any::<[f32; 3]>(), 0..6)),
        colors_x in proptest::option::of(proptest::collection::vec(any::<f32>(), 0..6)),
        opacity in proptest::option::of(proptest::collection::vec(0.0f32..1.0, 0..6)),
        opacity_x in proptest::option::of(proptest::collection::vec(any::<f32>(), 0..6)),
        range in proptest::option::of(any::<[f32; 2]>()),
    ) {
        let partial = PartialVolumeOptions {
            colors: colors.map(|c| c.into_iter().map(Vec3::from).collect()),
            colors_scalar_value: colors_x,
            opacity,
            opacity_scalar_value: opacity_x,
            range,
            histograms: None,
        };
        let composed = compose_volume_options(Some(&partial));
        prop_assert_eq!(composed.colors.len(), composed.colors_scalar_value.len());
        prop_assert_eq!(composed.opacity.len(), composed.opacity_scalar_value.len());
        prop_assert!(composed.range[0] <= composed.range[1]);
    }
}

#[test]
fn play_toggle_twice_restores() {
    let mut menu = volume_menu();
    let original = menu.state().play;
    menu.play_handler();
    menu.play_handler();
    assert_eq!(menu.state().play, original);
    assert_eq!(
        menu.take_events(),
        vec![
            MenuEvent::PlayChanged(!original),
            MenuEvent::PlayChanged(original)
        ]
    );
}

#[test]
fn empty_render_without_volume_or_modes() {
    let menu = MoleculeMenu::new(MenuProps {
        has_volume: false,
        n_modes: 0,
        ..Default::default()
    });
    assert!(menu.render().is_none());
}

#[test]
fn three_modes_give_four_options() {
    let menu = MoleculeMenu::new(MenuProps {
        n_modes: 3,
        ..Default::default()
    });
    let tree = menu.render().unwrap();
    let Widget::Select(select) = &tree.row(keys::NORMAL_MODE_SELECT).unwrap().widget else {
        panic!("expected normal mode select");
    };
    let values: Vec<&str> = select.options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, ["-1", "0", "1", "2"]);
}

#[test]
fn isovalue_text_entry_example() {
    init_logging();
    let mut menu = volume_menu();
    assert_eq!(menu.state().iso_value, 0.01);

    let tree = menu.render().unwrap();
    let Widget::Range(row) = &tree.row(keys::ISO_SURFACE_SLIDER).unwrap().widget else {
        panic!("expected isovalue slider");
    };
    assert!(menu.dispatch(row.target.set_text("0.0234")));
    assert_eq!(menu.state().iso_value, 0.0234);
    assert_eq!(menu.take_events(), vec![MenuEvent::IsoValueChanged(0.0234)]);

    let tree = menu.render().unwrap();
    let Widget::Range(row) = &tree.row(keys::ISO_SURFACE_SLIDER).unwrap().widget else {
        panic!("expected isovalue slider");
    };
    assert_eq!(row.input.text, "0.0234");
}

#[test]
fn driving_menu_through_rendered_actions() {
    let mut menu = volume_menu();
    menu.mounted();

    // Show the volume layer through the rendered toggle.
    let tree = menu.render().unwrap();
    let Widget::Toggle(toggle) = &tree.row(keys::VOLUME_TOGGLE).unwrap().widget else {
        panic!("expected volume toggle");
    };
    assert!(menu.dispatch(toggle.on_change.clone()));
    menu.updated();

    let tree = menu.render().unwrap();
    assert!(tree.row(keys::VOLUME_CONTROLS).is_some());
    let Widget::Select(maps) = &tree.row(keys::COLOR_MAP_SELECT).unwrap().widget else {
        panic!("expected color map select");
    };
    assert!(menu.dispatch(maps.target.select(maps.options[1].value.clone())));

    let Widget::Select(modes) = &tree.row(keys::NORMAL_MODE_SELECT).unwrap().widget else {
        panic!("expected normal mode select");
    };
    assert!(menu.dispatch(modes.target.select("3")));
    assert!(menu.dispatch(modes.end_button.as_ref().unwrap().on_click.clone()));
    menu.unmounted();

    let events = menu.take_events();
    let names: Vec<&str> = events.iter().map(MenuEvent::name).collect();
    assert_eq!(
        names,
        [
            "visibilityChanged",
            "colorMapChanged",
            "normalModeChanged",
            "playChanged"
        ]
    );
}

#[test]
fn demo_props_file_loads_and_renders() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/menu_props.json");
    let props = MenuProps::load(path).unwrap();
    assert_eq!(props.n_modes, 6);
    assert_eq!(props.active_map, "Plasma");

    let menu = MoleculeMenu::new(props);
    let tree = menu.render().unwrap();
    let Widget::VolumeControls(options) = &tree.row(keys::VOLUME_CONTROLS).unwrap().widget else {
        panic!("expected volume controls");
    };
    assert_eq!(options.range, [-0.05, 0.05]);
    assert_eq!(options.opacity.len(), 5);
    assert_eq!(options.opacity_scalar_value[0], -0.05);
    assert_eq!(options.colors_scalar_value.len(), 3);
}
