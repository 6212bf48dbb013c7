use cake_types::{CakeShape, CakeSize, Color};
use designer_bridge::{dispatch, DesignerState, EngineToUi, UiToEngine};

fn red() -> Color {
    Color::rgb(0xFF, 0x00, 0x00)
}

#[test]
fn no_scene_until_a_flavor_is_selected() {
    let mut state = DesignerState::new();

    let response = dispatch(
        &mut state,
        UiToEngine::SetShape {
            shape: CakeShape::Square,
        },
    );
    match response {
        EngineToUi::AwaitingSelection { missing } => {
            assert_eq!(missing, vec!["flavor".to_string()]);
        }
        other => panic!("expected AwaitingSelection, got {other:?}"),
    }
    assert!(state.scene.is_none());
}

#[test]
fn selecting_a_flavor_composes_the_scene() {
    let mut state = DesignerState::new();

    let response = dispatch(
        &mut state,
        UiToEngine::SetFlavor {
            name: "Strawberry".to_string(),
            color: red(),
        },
    );
    match response {
        EngineToUi::SceneUpdated { scene } => {
            assert_eq!(scene.scale, 1.0);
            // Flavor shows on the body while no coating is set.
            assert_eq!(scene.body.material.color, red());
            // All layers default to "none".
            assert!(scene.top.is_empty());
            assert!(scene.side.is_empty());
            assert!(scene.topping.is_empty());
        }
        other => panic!("expected SceneUpdated, got {other:?}"),
    }
}

#[test]
fn every_selection_change_recomposes() {
    let mut state = DesignerState::new();
    dispatch(
        &mut state,
        UiToEngine::SetFlavor {
            name: "Vanilla".to_string(),
            color: Color::rgb(0xFF, 0xFA, 0xCD),
        },
    );

    let response = dispatch(
        &mut state,
        UiToEngine::SetTopDecoration {
            id: "rosette".to_string(),
        },
    );
    let EngineToUi::SceneUpdated { scene } = response else {
        panic!("expected SceneUpdated");
    };
    assert_eq!(scene.top.len(), 16);
    // Piping falls back to the flavor color.
    assert_eq!(scene.top[0].color, Color::rgb(0xFF, 0xFA, 0xCD));

    let response = dispatch(
        &mut state,
        UiToEngine::SetPipingColor { color: Some(red()) },
    );
    let EngineToUi::SceneUpdated { scene } = response else {
        panic!("expected SceneUpdated");
    };
    assert_eq!(scene.top[0].color, red());

    let response = dispatch(
        &mut state,
        UiToEngine::SetSize {
            label: "2kg".to_string(),
        },
    );
    let EngineToUi::SceneUpdated { scene } = response else {
        panic!("expected SceneUpdated");
    };
    assert_eq!(scene.scale, 1.3);
    assert_eq!(state.size, CakeSize::TwoKg);
}

#[test]
fn coating_overrides_flavor_on_the_body() {
    let mut state = DesignerState::new();
    dispatch(
        &mut state,
        UiToEngine::SetFlavor {
            name: "Vanilla".to_string(),
            color: Color::rgb(0xFF, 0xFA, 0xCD),
        },
    );
    let response = dispatch(
        &mut state,
        UiToEngine::SetCoating {
            id: "darkChoco".to_string(),
        },
    );
    let EngineToUi::SceneUpdated { scene } = response else {
        panic!("expected SceneUpdated");
    };
    assert_eq!(scene.body.material.color, Color::rgb(0x3C, 0x2F, 0x2F));
    assert_eq!(scene.body.material.metalness, 0.0);
}

#[test]
fn unknown_coating_id_falls_back_to_flavor() {
    let mut state = DesignerState::new();
    dispatch(
        &mut state,
        UiToEngine::SetFlavor {
            name: "Vanilla".to_string(),
            color: red(),
        },
    );
    let EngineToUi::SceneUpdated { scene } = dispatch(
        &mut state,
        UiToEngine::SetCoating {
            id: "goldLeaf".to_string(),
        },
    ) else {
        panic!("expected SceneUpdated");
    };
    assert_eq!(scene.body.material.color, red());
}

#[test]
fn snapshot_round_trips_through_dispatch() {
    let mut state = DesignerState::new();
    let pixels = vec![0xAB; 8 * 8 * 4];
    let response = dispatch(
        &mut state,
        UiToEngine::TakeSnapshot {
            width: 8,
            height: 8,
            pixels,
        },
    );
    match response {
        EngineToUi::SnapshotReady { data_url } => {
            assert!(data_url.starts_with("data:image/png;base64,"));
        }
        other => panic!("expected SnapshotReady, got {other:?}"),
    }
}

#[test]
fn snapshot_with_a_bad_buffer_reports_an_error() {
    let mut state = DesignerState::new();
    let response = dispatch(
        &mut state,
        UiToEngine::TakeSnapshot {
            width: 8,
            height: 8,
            pixels: vec![0; 3],
        },
    );
    match response {
        EngineToUi::Error { message } => {
            assert!(message.contains("expected 256"), "message: {message}");
        }
        other => panic!("expected Error, got {other:?}"),
    }
}

#[test]
fn summary_prices_the_decorated_design() {
    let mut state = DesignerState::new();
    dispatch(
        &mut state,
        UiToEngine::SetFlavor {
            name: "Strawberry".to_string(),
            color: red(),
        },
    );
    dispatch(
        &mut state,
        UiToEngine::SetCoating {
            id: "whiteChoco".to_string(),
        },
    );
    dispatch(
        &mut state,
        UiToEngine::SetTopDecoration {
            id: "flower".to_string(),
        },
    );
    dispatch(
        &mut state,
        UiToEngine::SetSideDecoration {
            id: "beads".to_string(),
        },
    );
    dispatch(
        &mut state,
        UiToEngine::SetTopping {
            id: "pineSprinkles".to_string(),
        },
    );
    dispatch(
        &mut state,
        UiToEngine::SetSize {
            label: "2kg".to_string(),
        },
    );

    let response = dispatch(
        &mut state,
        UiToEngine::BuildSummary {
            cake_id: 42,
            base_price: 25.0,
            occasion: "Birthday".to_string(),
        },
    );
    let EngineToUi::SummaryReady { summary } = response else {
        panic!("expected SummaryReady");
    };

    assert_eq!(summary.cake_id, 42);
    assert_eq!(summary.flavor, "Strawberry");
    assert_eq!(summary.coating, "White Choco");
    assert_eq!(summary.size, "2kg");
    assert_eq!(summary.top_decoration, "Drop Flowers");
    assert_eq!(summary.side_decoration, "Bead Border");
    assert_eq!(summary.topping, "Pineapple Sprinkles");
    // 25 base + 20 size + 3 top + 4 side + 2 topping.
    assert_eq!(summary.price, 54.0);
}

#[test]
fn summary_without_a_flavor_is_an_error() {
    let mut state = DesignerState::new();
    let response = dispatch(
        &mut state,
        UiToEngine::BuildSummary {
            cake_id: 1,
            base_price: 10.0,
            occasion: "Birthday".to_string(),
        },
    );
    assert!(matches!(response, EngineToUi::Error { .. }));
}

#[test]
fn undecorated_summary_charges_base_and_size_only() {
    let mut state = DesignerState::new();
    dispatch(
        &mut state,
        UiToEngine::SetFlavor {
            name: "Vanilla".to_string(),
            color: red(),
        },
    );
    let EngineToUi::SummaryReady { summary } = dispatch(
        &mut state,
        UiToEngine::BuildSummary {
            cake_id: 7,
            base_price: 30.0,
            occasion: "Anniversary".to_string(),
        },
    ) else {
        panic!("expected SummaryReady");
    };
    // 30 base + 10 for the default 1kg.
    assert_eq!(summary.price, 40.0);
    assert_eq!(summary.top_decoration, "None");
    assert_eq!(summary.coating, "None (Flavor)");
}

#[test]
fn messages_round_trip_as_tagged_json() {
    let msg = UiToEngine::SetShape {
        shape: CakeShape::Circle,
    };
    let json = serde_json::to_string(&msg).unwrap();
    assert!(json.contains(r#""type":"SetShape""#));
    assert!(json.contains(r#""shape":"circle""#));

    let back: UiToEngine = serde_json::from_str(&json).unwrap();
    assert!(matches!(
        back,
        UiToEngine::SetShape {
            shape: CakeShape::Circle
        }
    ));
}
