use super::*;

fn metrics() -> ScreenMetrics {
    ScreenMetrics::default()
}

#[test]
fn standard_preset_sorts_top_middle_bottom() {
    let set = PositionPreset::Standard.resolve(false);
    assert_eq!(
        set.sorted(&metrics()),
        vec![Position::Top, Position::Middle, Position::Bottom]
    );
}

#[test]
fn presets_add_hidden_only_when_dismissable() {
    assert!(!PositionPreset::Fill.resolve(false).contains(Position::Hidden));
    assert!(PositionPreset::Fill.resolve(true).contains(Position::Hidden));
    assert!(PositionPreset::Simple.resolve(true).contains(Position::Hidden));
    assert!(PositionPreset::Low.resolve(true).contains(Position::Hidden));
    assert!(!PositionPreset::Standard.resolve(true).contains(Position::Hidden));
    assert!(PositionPreset::Dismissable.resolve(false).contains(Position::Hidden));
}

#[test]
fn all_preset_contains_fractions_and_named_points() {
    let set = PositionPreset::All.resolve(false);
    assert_eq!(set.len(), 12);
    assert!(set.contains(Position::Custom(0.5)));
    assert!(set.contains(Position::Fill));

    let dismissable = PositionPreset::All.resolve(true);
    assert_eq!(dismissable.len(), 13);
}

#[test]
fn custom_preset_is_returned_verbatim() {
    let set = PositionSet::from([Position::Custom(0.3), Position::Top]);
    assert_eq!(PositionPreset::Custom(set.clone()).resolve(true), set);
    assert!(PositionPreset::Custom(PositionSet::new())
        .resolve(false)
        .is_empty());
}

#[test]
fn duplicates_are_ignored() {
    let mut set = PositionSet::from([Position::Top, Position::Top, Position::Bottom]);
    assert_eq!(set.len(), 2);
    assert!(!set.insert(Position::Bottom));
    assert!(set.insert(Position::Custom(0.4)));
    assert_eq!(set.len(), 3);
}

#[test]
fn highest_and_lowest_are_members() {
    let presets = [
        PositionPreset::Standard,
        PositionPreset::Dismissable,
        PositionPreset::Fill,
        PositionPreset::Simple,
        PositionPreset::Low,
        PositionPreset::All,
    ];
    for preset in presets {
        for dismissable in [false, true] {
            let set = preset.resolve(dismissable);
            assert!(set.contains(set.highest(&metrics())), "{preset:?}");
            assert!(set.contains(set.lowest(&metrics())), "{preset:?}");
        }
    }
}

#[test]
fn lowest_skips_hidden_unless_alone() {
    let set = PositionPreset::Dismissable.resolve(false);
    assert_eq!(set.lowest(&metrics()), Position::Bottom);
    assert_eq!(set.highest(&metrics()), Position::Top);

    let only_hidden = PositionSet::from([Position::Hidden]);
    assert_eq!(only_hidden.lowest(&metrics()), Position::Hidden);
}

#[test]
fn empty_set_falls_back() {
    let empty = PositionSet::new();
    assert_eq!(empty.highest(&metrics()), Position::Top);
    assert_eq!(empty.lowest(&metrics()), Position::Bottom);
    assert!(empty.sorted(&metrics()).is_empty());
}

#[test]
fn single_position_detection_ignores_hidden() {
    assert!(PositionSet::from([Position::Top]).is_single_position());
    assert!(PositionSet::from([Position::Hidden, Position::Top]).is_single_position());
    assert!(!PositionSet::from([Position::Top, Position::Bottom]).is_single_position());
    assert!(PositionSet::new().is_single_position());
}

#[test]
fn nan_custom_fraction_is_stored_once() {
    let mut set = PositionSet::new();
    assert!(set.insert(Position::Custom(f32::NAN)));
    assert!(!set.insert(Position::Custom(f32::NAN)));
    assert!(!set.insert(Position::Custom(0.0)));
    assert_eq!(set.len(), 1);
    assert!(set.contains(Position::Custom(f32::NAN)));
    assert_eq!(set.iter().next(), Some(Position::Custom(0.0)));

    let clamped = PositionSet::from([Position::Custom(1.0), Position::Custom(4.0)]);
    assert_eq!(clamped.len(), 1);
}
