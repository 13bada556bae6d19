use super::*;
use crate::ui::core::geom::Rect;
use crate::ui::core::id::IdPath;
use crate::ui::core::painter::{PaintCmd, Painter};
use crate::ui::core::tree::UiTree;

fn button(title: &str, config: ButtonConfig) -> Button {
    Button::new(
        IdPath::root("test_button").finish(),
        title,
        config,
        NodeKind::Unknown,
    )
}

#[test]
fn preferred_size_accounts_for_padding_and_border() {
    let plain = button("+", ButtonConfig::default());
    assert_eq!(plain.preferred_size(), Size::new(3, 1));

    let bordered = button(
        "+",
        ButtonConfig {
            border: Some(BorderKind::Rounded),
            padding_x: 2,
            ..ButtonConfig::default()
        },
    );
    assert_eq!(bordered.preferred_size(), Size::new(7, 3));

    let bare = button(
        "",
        ButtonConfig {
            padding_x: 0,
            ..ButtonConfig::default()
        },
    );
    assert_eq!(bare.preferred_size().w, 3);
}

#[test]
fn enabled_button_registers_click_node() {
    let mut painter = Painter::new();
    let mut tree = UiTree::new();
    let rect = Rect::new(2, 0, 3, 1);
    let mut ui = Ui::new(rect, &mut painter, &mut tree);

    let mut b = button("+", ButtonConfig::default());
    b.ui(&mut ui);

    let node = tree.nodes().first().copied().unwrap();
    assert_eq!(node.rect, rect);
    assert!(node.sense.contains(Sense::CLICK));
    assert!(painter.cmds().iter().any(|c| matches!(
        c,
        PaintCmd::Text { pos, text, .. } if text == "+" && *pos == Pos::new(3, 0)
    )));
}

#[test]
fn disabled_button_paints_dimmed_without_node() {
    let mut painter = Painter::new();
    let mut tree = UiTree::new();
    let mut ui = Ui::new(Rect::new(0, 0, 3, 1), &mut painter, &mut tree);

    let config = ButtonConfig::default();
    let mut b = button("-", config);
    b.enabled = false;
    b.ui(&mut ui);

    assert!(tree.nodes().is_empty());
    assert!(painter.cmds().iter().any(|c| matches!(
        c,
        PaintCmd::FillRect { style, .. } if *style == config.disabled_style
    )));
}

#[test]
fn bordered_button_emits_border() {
    let mut painter = Painter::new();
    let mut tree = UiTree::new();
    let mut ui = Ui::new(Rect::new(0, 0, 5, 3), &mut painter, &mut tree);

    let mut b = button(
        "+",
        ButtonConfig {
            border: Some(BorderKind::Plain),
            ..ButtonConfig::default()
        },
    );
    b.ui(&mut ui);

    assert!(painter
        .cmds()
        .iter()
        .any(|c| matches!(c, PaintCmd::Border { .. })));
}
