//! Full designer workflows driven through the bridge, the way the UI
//! drives the engine: a stream of JSON-shaped messages, a recompose per
//! change, and a snapshot at the end.

use cake_types::{CakeShape, Color};
use designer_bridge::{dispatch, DesignerState, EngineToUi, UiToEngine};
use test_harness::{assert_all_color, assert_count, assert_ring_radius};

fn scene_of(response: EngineToUi) -> decor_engine::types::SceneGraph {
    match response {
        EngineToUi::SceneUpdated { scene } => scene,
        other => panic!("expected SceneUpdated, got {other:?}"),
    }
}

#[test]
fn design_a_round_cake_from_scratch() {
    let mut state = DesignerState::new();

    // The designer opens before the flavor catalog resolves.
    let first = dispatch(
        &mut state,
        UiToEngine::SetText {
            text: "Congrats!".to_string(),
        },
    );
    assert!(matches!(first, EngineToUi::AwaitingSelection { .. }));

    // Flavor arrives; the scene composes with defaults.
    let scene = scene_of(dispatch(
        &mut state,
        UiToEngine::SetFlavor {
            name: "Red Velvet".to_string(),
            color: Color::rgb(0x9B, 0x1B, 0x30),
        },
    ));
    assert_eq!(scene.label.text, "Congrats!");
    assert!(scene.top.is_empty());

    // Decorate layer by layer; each change recomposes the full set.
    let scene = scene_of(dispatch(
        &mut state,
        UiToEngine::SetTopDecoration {
            id: "rosette".to_string(),
        },
    ));
    assert_count(&scene.top, 16, "rosettes").unwrap();
    assert_ring_radius(&scene.top, 1.7, 1e-5, "rosettes").unwrap();
    assert_all_color(&scene.top, Color::rgb(0x9B, 0x1B, 0x30), "rosettes").unwrap();

    let scene = scene_of(dispatch(
        &mut state,
        UiToEngine::SetSideDecoration {
            id: "shell".to_string(),
        },
    ));
    assert_count(&scene.side, 24, "shells").unwrap();
    assert_ring_radius(&scene.side, 2.05, 1e-5, "shells").unwrap();

    let scene = scene_of(dispatch(
        &mut state,
        UiToEngine::SetTopping {
            id: "chocoSprinkles".to_string(),
        },
    ));
    assert_count(&scene.topping, 150, "sprinkles").unwrap();

    // Capture for the order record once the frame is committed.
    let response = dispatch(
        &mut state,
        UiToEngine::TakeSnapshot {
            width: 16,
            height: 16,
            pixels: vec![0xD7; 16 * 16 * 4],
        },
    );
    let EngineToUi::SnapshotReady { data_url } = response else {
        panic!("expected SnapshotReady");
    };
    assert!(data_url.starts_with("data:image/png;base64,"));

    // And price the whole thing.
    let response = dispatch(
        &mut state,
        UiToEngine::BuildSummary {
            cake_id: 3,
            base_price: 18.0,
            occasion: "Graduation".to_string(),
        },
    );
    let EngineToUi::SummaryReady { summary } = response else {
        panic!("expected SummaryReady");
    };
    // 18 base + 10 (1kg) + 3 + 4 + 2.
    assert_eq!(summary.price, 37.0);
    assert_eq!(summary.flavor, "Red Velvet");
    assert_eq!(summary.occasion, "Graduation");
}

#[test]
fn switching_shape_lays_out_every_layer_again() {
    let mut state = DesignerState::new();
    dispatch(
        &mut state,
        UiToEngine::SetFlavor {
            name: "Vanilla".to_string(),
            color: Color::rgb(0xFF, 0xFA, 0xCD),
        },
    );
    dispatch(
        &mut state,
        UiToEngine::SetTopDecoration {
            id: "dots".to_string(),
        },
    );
    dispatch(
        &mut state,
        UiToEngine::SetSideDecoration {
            id: "beads".to_string(),
        },
    );

    let round = scene_of(dispatch(
        &mut state,
        UiToEngine::SetShape {
            shape: CakeShape::Circle,
        },
    ));
    assert_count(&round.top, 16, "round dots").unwrap();
    assert_count(&round.side, 30, "round beads").unwrap();
    assert_eq!(round.label.max_width, 3.5);

    let square = scene_of(dispatch(
        &mut state,
        UiToEngine::SetShape {
            shape: CakeShape::Square,
        },
    ));
    assert_count(&square.top, 4 * 5 - 4, "square dots").unwrap();
    assert_count(&square.side, 4 * 10 - 4, "square beads").unwrap();
    assert_eq!(square.label.max_width, 3.0);
}
